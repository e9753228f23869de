use std::{cell::Cell, rc::Rc};

use dominator::{clone, events, html, Dom};
use futures_signals::signal_vec::SignalVecExt;
use gloo_timers::future::TimeoutFuture;
use libris_lib::{
    action::Notifier,
    alert::{Alert, AlertStack},
    models::Severity,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

/// Dismissible notifications rendered into the page's alert container.
///
/// Cheap to clone; clones share the same stack.
#[derive(Clone)]
pub struct Alerts {
    stack: Rc<AlertStack>,
    timeout_ms: u32,
    mounted: Rc<Cell<bool>>,
}

impl Alerts {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            stack: AlertStack::new(),
            timeout_ms,
            mounted: Rc::new(Cell::new(false)),
        }
    }

    pub fn mount(&self, container: &HtmlElement) {
        dominator::append_dom(container, Self::render(self.stack.clone()));
        self.mounted.set(true);
    }

    /// Shows `message` until its own timer runs out. Does nothing on pages
    /// without an alert container.
    pub fn show(&self, message: &str, severity: Severity) {
        if !self.mounted.get() {
            debug!("no alert container for: {}", message);
            return;
        }

        let stack = self.stack.clone();
        let id = stack.push(message, severity);
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            stack.dismiss_after(id, TimeoutFuture::new(timeout_ms)).await;
        });
    }

    fn render(stack: Rc<AlertStack>) -> Dom {
        html!("div", {
            .class("alert-stack")
            .children_signal_vec(stack.signal_vec().map(clone!(stack => move |alert| {
                Self::render_alert(stack.clone(), alert)
            })))
        })
    }

    fn render_alert(stack: Rc<AlertStack>, alert: Alert) -> Dom {
        let id = alert.id;
        html!("div", {
            .class(["alert", alert.severity.css_class(), "alert-dismissible", "fade", "show"])
            .attr("role", "alert")
            .text(&alert.message)
            .child(html!("button", {
                .attr("type", "button")
                .attr("aria-label", "Close")
                .class("btn-close")
                .event(move |_: events::Click| {
                    stack.dismiss(id);
                })
            }))
        })
    }
}

impl Notifier for Alerts {
    fn notify(&self, message: &str, severity: Severity) {
        self.show(message, severity);
    }
}
