use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use libris_lib::{
    config::PageConfig,
    error::Error,
    payment::{confirm_payment, PaymentGateway},
};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::{
    common::Alerts,
    utils::{global_exists, js_error_message, redirect, window},
};

const STRIPE_GLOBAL: &str = "Stripe";
const HANDLER_NAME: &str = "handleStripePayment";

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Stripe;

    #[wasm_bindgen(js_name = Stripe, catch)]
    fn stripe(publishable_key: &str) -> Result<Stripe, JsValue>;

    #[wasm_bindgen(method, js_name = confirmCardPayment)]
    fn confirm_card_payment(this: &Stripe, client_secret: &str) -> js_sys::Promise;
}

pub struct StripeGateway(Stripe);

impl PaymentGateway for StripeGateway {
    async fn confirm(&self, payment_intent_id: &str) -> Result<(), Error> {
        let result = JsFuture::from(self.0.confirm_card_payment(payment_intent_id))
            .await
            .map_err(|e| Error::Payment(js_error_message(&e)))?;

        let error = js_sys::Reflect::get(&result, &JsValue::from_str("error"))
            .unwrap_or(JsValue::UNDEFINED);
        if error.is_undefined() || error.is_null() {
            return Ok(());
        }

        Err(Error::Payment(js_error_message(&error)))
    }
}

/// Card payment confirmation. Only exists when the page loaded Stripe.js
/// and configured a publishable key.
pub struct PaymentClient {
    gateway: StripeGateway,
    alerts: Alerts,
    config: Rc<PageConfig>,
}

impl PaymentClient {
    pub fn new(config: Rc<PageConfig>, alerts: Alerts) -> Option<Rc<Self>> {
        if !global_exists(STRIPE_GLOBAL) {
            debug!("stripe.js not loaded, payments disabled");
            return None;
        }

        let Some(key) = config.stripe_publishable_key.as_deref() else {
            warn!("stripe.js loaded but no publishable key configured");
            return None;
        };

        match stripe(key) {
            Ok(stripe) => Some(Rc::new(Self {
                gateway: StripeGateway(stripe),
                alerts,
                config,
            })),
            Err(e) => {
                error!("failed to create stripe client: {}", js_error_message(&e));
                None
            }
        }
    }

    /// Defines `window.handleStripePayment` for the page's own scripts.
    pub fn install(this: &Rc<Self>) {
        let client = this.clone();
        let handler = Closure::wrap(Box::new(move |payment_intent_id: String| {
            let client = client.clone();
            spawn_local(async move {
                client.handle_payment(&payment_intent_id).await;
            });
        }) as Box<dyn Fn(String)>);

        if let Err(e) = js_sys::Reflect::set(
            &window(),
            &JsValue::from_str(HANDLER_NAME),
            handler.as_ref().unchecked_ref(),
        ) {
            error!("failed to define {}: {:?}", HANDLER_NAME, e);
        }

        handler.forget();
    }

    pub async fn handle_payment(&self, payment_intent_id: &str) {
        let redirect_to = confirm_payment(
            &self.gateway,
            &self.alerts,
            &self.config,
            payment_intent_id,
            TimeoutFuture::new,
        )
        .await;

        if let Some(path) = redirect_to {
            if let Err(e) = redirect(&path) {
                error!("{}", e);
            }
        }
    }
}
