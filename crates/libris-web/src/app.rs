use std::{cell::RefCell, rc::Rc};

use gloo_timers::future::TimeoutFuture;
use libris_lib::config::PageConfig;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::{
    actions::BookActions,
    catalogue,
    common::{bootstrap, Alerts},
    forms,
    globals,
    payment::PaymentClient,
    utils::{config_json, element_by_id, query_all},
};

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Everything the page controller owns, built once at start-up.
pub struct App {
    pub config: Rc<PageConfig>,
    pub alerts: Alerts,
    pub actions: Rc<BookActions>,
    pub payment: Option<Rc<PaymentClient>>,
}

impl App {
    pub fn new() -> Rc<Self> {
        let config = Rc::new(PageConfig::load(config_json().as_deref()));
        let alerts = Alerts::new(config.alert_timeout_ms);
        let actions = BookActions::new(config.clone(), alerts.clone());
        let payment = PaymentClient::new(config.clone(), alerts.clone());

        Rc::new(Self {
            config,
            alerts,
            actions,
            payment,
        })
    }

    /// Attaches behavior to the parsed page. Elements the page does not
    /// have are skipped.
    pub fn mount(app: Rc<Self>) {
        globals::install();
        bootstrap::init_tooltips();
        app.close_page_alerts();

        match element_by_id::<HtmlElement>("alertContainer") {
            Some(container) => app.alerts.mount(&container),
            None => debug!("no alert container on page"),
        }

        catalogue::mount();
        forms::mount(&app.alerts);
        app.actions.scan();

        if let Some(payment) = app.payment.as_ref() {
            PaymentClient::install(payment);
        }

        APP.with(|a| *a.borrow_mut() = Some(app));
    }

    /// Alerts rendered by the server go away after the alert timeout.
    fn close_page_alerts(&self) {
        let page_alerts = query_all(".alert");
        if page_alerts.is_empty() {
            return;
        }

        let timeout_ms = self.config.alert_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            for alert in page_alerts {
                bootstrap::close_alert(&alert);
            }
        });
    }
}

/// Runs `f` against the mounted app. Returns `None` before the page has
/// been mounted.
pub fn with_app<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&Rc<App>) -> R,
{
    APP.with(|a| a.borrow().as_ref().map(f))
}
