use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{action::Notifier, config::PageConfig, error::Error, models::Severity};

pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount";
pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful!";

/// Whether the payment form must refuse to submit `raw`.
///
/// Blank input counts as zero and is refused, as is anything that parses to
/// a number not greater than zero. Input that does not parse as a number is
/// left for the server to reject.
pub fn amount_is_blocked(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return true;
    }

    match raw.parse::<f64>() {
        Ok(amount) => amount <= 0.0,
        Err(_) => false,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentIntentRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PaymentIntentResponse {
    /// The client secret, or the server's reason for not creating an intent.
    pub fn into_secret(self) -> Result<String, Error> {
        match (self.client_secret, self.error) {
            (Some(secret), _) => Ok(secret),
            (None, Some(error)) => Err(Error::Server(error)),
            (None, None) => Err(Error::Decode("no client_secret in response".to_string())),
        }
    }
}

/// Confirms a card payment with the payment provider.
///
/// A declined payment and a provider call that fails outright are both
/// reported as `Err`.
pub trait PaymentGateway {
    fn confirm(&self, payment_intent_id: &str) -> impl Future<Output = Result<(), Error>>;
}

/// Confirms `payment_intent_id` and tells the user how it went.
///
/// On success the user is given `redirect_delay_ms` to read the message
/// before the returned path should be opened.
pub async fn confirm_payment<G, N, S, F>(
    gateway: &G,
    notifier: &N,
    config: &PageConfig,
    payment_intent_id: &str,
    sleep: S,
) -> Option<String>
where
    G: PaymentGateway,
    N: Notifier,
    S: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    match gateway.confirm(payment_intent_id).await {
        Ok(()) => {
            notifier.notify(PAYMENT_SUCCESS_MESSAGE, Severity::Success);
            sleep(config.redirect_delay_ms).await;
            Some(config.payment_success_path.clone())
        }
        Err(e) => {
            let message = match e {
                Error::Payment(message) => message,
                other => other.to_string(),
            };
            log::warn!("payment {} failed: {}", payment_intent_id, message);
            notifier.notify(&format!("Payment failed: {}", message), Severity::Danger);
            None
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct FakeNotifier {
        alerts: RefCell<Vec<(String, Severity)>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.alerts.borrow_mut().push((message.to_string(), severity));
        }
    }

    struct FakeGateway(Result<(), Error>);

    impl PaymentGateway for FakeGateway {
        async fn confirm(&self, _: &str) -> Result<(), Error> {
            self.0.clone()
        }
    }

    fn run(result: Result<(), Error>) -> (Option<String>, Vec<(String, Severity)>, Vec<u32>) {
        let notifier = FakeNotifier::default();
        let slept = RefCell::new(vec![]);
        let redirect = block_on(confirm_payment(
            &FakeGateway(result),
            &notifier,
            &PageConfig::default(),
            "pi_123",
            |ms| {
                slept.borrow_mut().push(ms);
                async {}
            },
        ));
        let alerts = notifier.alerts.borrow().clone();
        (redirect, alerts, slept.into_inner())
    }

    #[test]
    fn test_confirmed_payment_redirects_after_delay() {
        let (redirect, alerts, slept) = run(Ok(()));

        assert_eq!(redirect.as_deref(), Some("/payments/success/"));
        assert_eq!(
            alerts,
            vec![("Payment successful!".to_string(), Severity::Success)]
        );
        assert_eq!(slept, vec![2000]);
    }

    #[test]
    fn test_declined_payment_shows_provider_message() {
        let (redirect, alerts, slept) =
            run(Err(Error::Payment("Your card was declined.".to_string())));

        assert_eq!(redirect, None);
        assert_eq!(
            alerts,
            vec![(
                "Payment failed: Your card was declined.".to_string(),
                Severity::Danger
            )]
        );
        assert!(slept.is_empty());
    }

    #[test]
    fn test_rejected_confirmation_is_reported_as_failure() {
        let (redirect, alerts, _) = run(Err(Error::Network("script blocked".to_string())));

        assert_eq!(redirect, None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].1, Severity::Danger);
        assert!(alerts[0].0.starts_with("Payment failed: "));
        assert!(alerts[0].0.contains("script blocked"));
    }

    #[test]
    fn test_intent_secret() {
        let res = PaymentIntentResponse {
            client_secret: Some("pi_1_secret_2".to_string()),
            error: None,
        };
        assert_eq!(res.into_secret(), Ok("pi_1_secret_2".to_string()));

        let res: PaymentIntentResponse =
            serde_json::from_str(r#"{"error": "Invalid amount"}"#).unwrap();
        assert_eq!(
            res.into_secret(),
            Err(Error::Server("Invalid amount".to_string()))
        );

        let res: PaymentIntentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(res.into_secret(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_non_positive_amount_is_blocked() {
        assert!(amount_is_blocked(""));
        assert!(amount_is_blocked("   "));
        assert!(amount_is_blocked("0"));
        assert!(amount_is_blocked("0.00"));
        assert!(amount_is_blocked("-0"));
        assert!(amount_is_blocked("-12.5"));
    }

    #[test]
    fn test_positive_amount_passes() {
        assert!(!amount_is_blocked("0.01"));
        assert!(!amount_is_blocked("25"));
        assert!(!amount_is_blocked(" 1e2 "));
    }

    #[test]
    fn test_non_numeric_amount_passes() {
        assert!(!amount_is_blocked("abc"));
    }

    #[test]
    fn test_intent_response() {
        let res: PaymentIntentResponse =
            serde_json::from_str(r#"{"client_secret": "pi_1_secret_2"}"#).unwrap();
        assert_eq!(res.client_secret.as_deref(), Some("pi_1_secret_2"));
        assert!(res.error.is_none());
    }
}
