use std::{cell::RefCell, rc::Rc};

use libris_lib::{
    action::{ActionButton, ActionOutcome, ActionRunner, BookRegistry, StatusBadge},
    config::PageConfig,
    models::{BookAction, BookId, BookStatus},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};

use crate::{
    common::{spinner, Alerts},
    query::HttpTransport,
    utils::query_all,
};

const BADGE_ATTRIBUTE: &str = "data-status-book-id";

#[derive(Clone)]
pub struct ButtonHandle(Element);

impl ActionButton for ButtonHandle {
    fn show_spinner(&self) {
        spinner::show_loading_spinner(&self.0);
    }

    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }

        let res = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(e) = res {
            error!("error toggle disabled: {:?}", e);
        }
    }
}

#[derive(Clone)]
pub struct BadgeHandle(Element);

impl StatusBadge for BadgeHandle {
    fn set_status(&self, status: &BookStatus) {
        self.0.set_class_name(&status.css_class());
        self.0.set_text_content(Some(&status.label()));
    }
}

/// Reserve and borrow buttons on the page, keyed by book id.
pub struct BookActions {
    runner: ActionRunner<HttpTransport, Alerts>,
    registry: RefCell<BookRegistry<ButtonHandle, BadgeHandle>>,
}

impl BookActions {
    pub fn new(config: Rc<PageConfig>, alerts: Alerts) -> Rc<Self> {
        Rc::new(Self {
            runner: ActionRunner::new(HttpTransport::new(config), alerts),
            registry: RefCell::new(BookRegistry::new()),
        })
    }

    /// Registers every action button and status badge currently in the
    /// document and forgets the ones that were removed from it.
    pub fn scan(&self) {
        let mut registry = self.registry.borrow_mut();
        registry.retain_mounted(|b| b.0.is_connected(), |s| s.0.is_connected());

        for action in BookAction::ALL {
            let attribute = action.button_attribute();
            for element in query_all(&format!("[{}]", attribute)) {
                if let Some(id) = element.get_attribute(attribute) {
                    registry.mount_button(action, BookId::new(id), ButtonHandle(element));
                }
            }
        }

        for element in query_all(&format!("[{}]", BADGE_ATTRIBUTE)) {
            if let Some(id) = element.get_attribute(BADGE_ATTRIBUTE) {
                registry.mount_badge(BookId::new(id), BadgeHandle(element));
            }
        }

        debug!("registered {} book elements", registry.len());
    }

    fn button(&self, action: BookAction, id: &BookId) -> Option<ButtonHandle> {
        let button = self.registry.borrow().button(action, id);
        match button {
            Some(button) if button.0.is_connected() => Some(button),
            _ => {
                self.scan();
                self.registry.borrow().button(action, id)
            }
        }
    }

    fn badge(&self, id: &BookId) -> Option<BadgeHandle> {
        let badge = self.registry.borrow().badge(id);
        match badge {
            Some(badge) if badge.0.is_connected() => Some(badge),
            _ => {
                self.scan();
                self.registry.borrow().badge(id)
            }
        }
    }

    /// Starts `action` for `id`. Unknown ids are ignored.
    pub fn perform(this: &Rc<Self>, action: BookAction, id: BookId) {
        let Some(button) = this.button(action, &id) else {
            debug!("no {} button for book {}", action.slug(), id);
            return;
        };
        let badge = action.resulting_status().and_then(|_| this.badge(&id));

        let this = this.clone();
        spawn_local(async move {
            match this.runner.run(action, &id, &button, badge.as_ref()).await {
                ActionOutcome::Done => info!("{} book {} done", action.slug(), id),
                ActionOutcome::Failed(reason) => {
                    warn!("{} book {} failed: {}", action.slug(), id, reason)
                }
                ActionOutcome::Skipped => {}
            }
        });
    }

    pub fn update_status(&self, id: &BookId, status: &BookStatus) {
        if !status.is_known() {
            warn!("unknown status {} for book {}", status, id);
        }

        match self.badge(id) {
            Some(badge) => badge.set_status(status),
            None => debug!("no status badge for book {}", id),
        }
    }
}
