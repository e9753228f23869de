use std::rc::Rc;

use libris_lib::{
    action::ActionTransport,
    config::PageConfig,
    error::Error,
    models::{ActionResponse, BookAction, BookId},
    payment::{PaymentIntentRequest, PaymentIntentResponse},
};

use crate::utils::{get_cookie, origin};

fn csrf_token(config: &PageConfig) -> String {
    get_cookie(&config.csrf_cookie).unwrap_or_default()
}

fn post(config: &PageConfig, path: &str) -> reqwest::RequestBuilder {
    let url = format!("{}{}", origin(), path);

    reqwest::Client::new()
        .post(url)
        .header(config.csrf_header.as_str(), csrf_token(config))
        .header("Content-Type", "application/json")
}

/// Sends book actions to the server. The body is read as JSON whatever the
/// status code, since failures carry an `error` message.
#[derive(Clone)]
pub struct HttpTransport {
    config: Rc<PageConfig>,
}

impl HttpTransport {
    pub fn new(config: Rc<PageConfig>) -> Self {
        Self { config }
    }
}

impl ActionTransport for HttpTransport {
    async fn send(&self, action: BookAction, id: &BookId) -> Result<ActionResponse, Error> {
        let res = post(&self.config, &action.path(id))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        debug!("{} book {}: {}", action.slug(), id, res.status());

        res.json::<ActionResponse>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

/// Asks the server for a payment intent and returns its client secret.
pub async fn create_payment_intent(config: &PageConfig, amount: f64) -> Result<String, Error> {
    let res = post(config, &config.payment_intent_path)
        .json(&PaymentIntentRequest { amount })
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let body: PaymentIntentResponse = res
        .json()
        .await
        .map_err(|e| Error::Decode(e.to_string()))?;

    body.into_secret()
}
