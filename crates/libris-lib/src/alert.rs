use std::{cell::Cell, future::Future, rc::Rc};

use futures_signals::signal_vec::{MutableVec, SignalVec};

use crate::models::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: usize,
    pub message: String,
    pub severity: Severity,
}

/// Notifications currently on screen, newest last.
///
/// Each alert is dismissed independently; there is no queue and no limit.
pub struct AlertStack {
    alerts: MutableVec<Alert>,
    next_id: Cell<usize>,
}

impl AlertStack {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            alerts: MutableVec::new(),
            next_id: Cell::new(0),
        })
    }

    pub fn push(&self, message: impl Into<String>, severity: Severity) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.alerts.lock_mut().push_cloned(Alert {
            id,
            message: message.into(),
            severity,
        });

        id
    }

    /// Returns false when the alert was already gone.
    pub fn dismiss(&self, id: usize) -> bool {
        let mut alerts = self.alerts.lock_mut();
        let len = alerts.len();
        alerts.retain(|alert| alert.id != id);
        alerts.len() != len
    }

    /// Waits for `timer`, then dismisses alert `id` and no other.
    pub async fn dismiss_after<F>(&self, id: usize, timer: F)
    where
        F: Future<Output = ()>,
    {
        timer.await;
        self.dismiss(id);
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock_ref().to_vec()
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = Alert> + use<> {
        self.alerts.signal_vec_cloned()
    }
}

#[cfg(test)]
mod test {
    use futures::{channel::oneshot, executor::block_on, join};

    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let stack = AlertStack::new();
        let first = stack.push("first", Severity::Info);
        let second = stack.push("second", Severity::Danger);
        assert_ne!(first, second);
        assert_eq!(stack.alerts().len(), 2);

        assert!(stack.dismiss(first));
        assert!(!stack.dismiss(first));
        assert_eq!(
            stack.alerts(),
            vec![Alert {
                id: second,
                message: "second".to_string(),
                severity: Severity::Danger,
            }]
        );
    }

    #[test]
    fn test_timers_are_independent() {
        let stack = AlertStack::new();
        let first = stack.push("first", Severity::Success);
        let second = stack.push("second", Severity::Success);

        let (fire_first, first_timer) = oneshot::channel::<()>();
        let (_fire_second, second_timer) = oneshot::channel::<()>();

        block_on(async {
            let first_done = stack.dismiss_after(first, async {
                let _ = first_timer.await;
            });
            let fire = async {
                fire_first.send(()).unwrap();
            };
            join!(first_done, fire);
        });

        let remaining = stack.alerts();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        drop(second_timer);
    }
}
