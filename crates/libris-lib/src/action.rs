//! Reserve and borrow requests, from button activation to the final
//! button state.

use std::{
    cell::RefCell,
    collections::{HashMap, hash_map::Entry},
    future::Future,
};

use crate::{
    error::Error,
    models::{
        ActionResponse, BookAction, BookId, BookStatus, GENERIC_ERROR_MESSAGE, Severity,
    },
};

/// The button a user activates to reserve or borrow one book.
pub trait ActionButton {
    fn show_spinner(&self);
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

/// The element showing a book's current status.
pub trait StatusBadge {
    fn set_status(&self, status: &BookStatus);
}

pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

pub trait ActionTransport {
    fn send(
        &self,
        action: BookAction,
        id: &BookId,
    ) -> impl Future<Output = Result<ActionResponse, Error>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Loading,
    Done,
}

/// Per (action, book) state, used to refuse a request while one is
/// already in flight or after the action has completed.
#[derive(Debug, Default)]
pub struct ActionTracker {
    states: RefCell<HashMap<(BookAction, BookId), ActionState>>,
}

impl ActionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, action: BookAction, id: &BookId) -> ActionState {
        self.states
            .borrow()
            .get(&(action, id.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Moves an idle key to `Loading`. Returns false if it was not idle.
    pub fn begin(&self, action: BookAction, id: &BookId) -> bool {
        match self.states.borrow_mut().entry((action, id.clone())) {
            Entry::Occupied(mut entry) => {
                if *entry.get() != ActionState::Idle {
                    return false;
                }
                entry.insert(ActionState::Loading);
            }
            Entry::Vacant(entry) => {
                entry.insert(ActionState::Loading);
            }
        }
        true
    }

    pub fn finish(&self, action: BookAction, id: &BookId, done: bool) {
        let mut states = self.states.borrow_mut();
        if done {
            states.insert((action, id.clone()), ActionState::Done);
        } else {
            states.remove(&(action, id.clone()));
        }
    }
}

/// Maps book ids to the UI elements that belong to them.
///
/// Handles are cloned out on lookup so no borrow is held while a request is
/// pending.
pub struct BookRegistry<B, S> {
    buttons: HashMap<(BookAction, BookId), B>,
    badges: HashMap<BookId, S>,
}

impl<B, S> Default for BookRegistry<B, S> {
    fn default() -> Self {
        Self {
            buttons: HashMap::new(),
            badges: HashMap::new(),
        }
    }
}

impl<B: Clone, S: Clone> BookRegistry<B, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first button registered for a key wins, matching document order.
    pub fn mount_button(&mut self, action: BookAction, id: BookId, button: B) {
        self.buttons.entry((action, id)).or_insert(button);
    }

    pub fn mount_badge(&mut self, id: BookId, badge: S) {
        self.badges.entry(id).or_insert(badge);
    }

    /// Drops every handle for which `mounted` returns false.
    pub fn retain_mounted<FB, FS>(&mut self, mut button_mounted: FB, mut badge_mounted: FS)
    where
        FB: FnMut(&B) -> bool,
        FS: FnMut(&S) -> bool,
    {
        self.buttons.retain(|_, button| button_mounted(button));
        self.badges.retain(|_, badge| badge_mounted(badge));
    }

    pub fn button(&self, action: BookAction, id: &BookId) -> Option<B> {
        self.buttons.get(&(action, id.clone())).cloned()
    }

    pub fn badge(&self, id: &BookId) -> Option<S> {
        self.badges.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.buttons.len() + self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A request for the same action and book was in flight or had
    /// already succeeded.
    Skipped,
    Done,
    Failed(String),
}

/// What the page shows once a request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub label: &'static str,
    pub disabled: bool,
    pub message: String,
    pub severity: Severity,
    pub status: Option<BookStatus>,
}

pub fn resolve(action: BookAction, result: Result<ActionResponse, Error>) -> Resolution {
    match result {
        Ok(response) if response.success => Resolution {
            label: action.done_label(),
            disabled: true,
            message: action.success_message().to_string(),
            severity: Severity::Success,
            status: action.resulting_status(),
        },
        Ok(response) => Resolution {
            label: action.idle_label(),
            disabled: false,
            message: response
                .error
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| action.failure_message().to_string()),
            severity: Severity::Danger,
            status: None,
        },
        Err(e) => {
            log::warn!("{} request failed: {}", action.slug(), e);
            Resolution {
                label: action.idle_label(),
                disabled: false,
                message: GENERIC_ERROR_MESSAGE.to_string(),
                severity: Severity::Danger,
                status: None,
            }
        }
    }
}

pub struct ActionRunner<T, N> {
    transport: T,
    notifier: N,
    tracker: ActionTracker,
}

impl<T, N> ActionRunner<T, N>
where
    T: ActionTransport,
    N: Notifier,
{
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
            tracker: ActionTracker::new(),
        }
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.tracker
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Sends `action` for `id` and updates `button` (and `badge`, when the
    /// action changes the book's status) with the result.
    pub async fn run<B, S>(
        &self,
        action: BookAction,
        id: &BookId,
        button: &B,
        badge: Option<&S>,
    ) -> ActionOutcome
    where
        B: ActionButton,
        S: StatusBadge,
    {
        if !self.tracker.begin(action, id) {
            log::debug!("{} for book {} already handled", action.slug(), id);
            return ActionOutcome::Skipped;
        }

        button.set_disabled(true);
        button.show_spinner();

        let resolution = resolve(action, self.transport.send(action, id).await);

        button.set_label(resolution.label);
        button.set_disabled(resolution.disabled);
        self.notifier.notify(&resolution.message, resolution.severity);

        if let (Some(status), Some(badge)) = (&resolution.status, badge) {
            badge.set_status(status);
        }

        self.tracker.finish(action, id, resolution.disabled);

        if resolution.disabled {
            ActionOutcome::Done
        } else {
            ActionOutcome::Failed(resolution.message)
        }
    }
}
