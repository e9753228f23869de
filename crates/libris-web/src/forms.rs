use std::{cell::Cell, rc::Rc};

use dominator::{clone, events, html, Dom};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use libris_lib::{
    models::Severity,
    payment::{amount_is_blocked, INVALID_AMOUNT_MESSAGE},
};
use web_sys::{HtmlElement, HtmlInputElement};

use crate::{
    common::Alerts,
    utils::{element_by_id, listen, query_all, window},
};

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

pub fn mount(alerts: &Alerts) {
    mount_payment_guard(alerts);
    mount_delete_confirmation();
    mount_author_fields();
}

fn mount_payment_guard(alerts: &Alerts) {
    let Some(form) = element_by_id::<HtmlElement>("paymentForm") else {
        debug!("no payment form on page");
        return;
    };

    listen(
        &form,
        "submit",
        clone!(alerts => move |e| {
            let amount = element_by_id::<HtmlInputElement>("amount")
                .map(|input| input.value())
                .unwrap_or_default();

            if amount_is_blocked(&amount) {
                e.prevent_default();
                alerts.show(INVALID_AMOUNT_MESSAGE, Severity::Danger);
            }
        }),
    );
}

fn mount_delete_confirmation() {
    for button in query_all(".btn-delete") {
        listen(&button, "click", |e| {
            let confirmed = window()
                .confirm_with_message(DELETE_CONFIRMATION)
                .unwrap_or(false);

            if !confirmed {
                e.prevent_default();
            }
        });
    }
}

fn mount_author_fields() {
    let (Some(add_button), Some(container)) = (
        element_by_id::<HtmlElement>("addAuthorBtn"),
        element_by_id::<HtmlElement>("authorFields"),
    ) else {
        debug!("no author fields on page");
        return;
    };

    let fields = AuthorFields::new();
    dominator::append_dom(&container, AuthorFields::render(fields.clone()));

    listen(&add_button, "click", move |_| fields.add());
}

/// Author inputs added on top of the ones rendered by the server.
pub struct AuthorFields {
    fields: MutableVec<usize>,
    next_id: Cell<usize>,
}

impl AuthorFields {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            fields: MutableVec::new(),
            next_id: Cell::new(0),
        })
    }

    pub fn add(&self) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.fields.lock_mut().push(id);
    }

    pub fn remove(&self, id: usize) {
        self.fields.lock_mut().retain(|field| *field != id);
    }

    pub fn render(this: Rc<Self>) -> Dom {
        html!("div", {
            .style("display", "contents")
            .children_signal_vec(this.fields.signal_vec().map(clone!(this => move |id| {
                Self::render_field(this.clone(), id)
            })))
        })
    }

    fn render_field(this: Rc<Self>, id: usize) -> Dom {
        html!("div", {
            .class("mb-3")
            .children(&mut [
                html!("label", {
                    .class("form-label")
                    .text("Author")
                }),
                html!("div", {
                    .class("d-flex")
                    .children(&mut [
                        html!("input", {
                            .attr("type", "text")
                            .attr("name", "authors")
                            .attr("placeholder", "Author name")
                            .class(["form-control", "me-2"])
                        }),
                        html!("button", {
                            .attr("type", "button")
                            .class(["btn", "btn-outline-danger", "btn-sm"])
                            .event(move |_: events::Click| this.remove(id))
                            .children(&mut [
                                html!("i", {
                                    .class(["fas", "fa-times"])
                                })
                            ])
                        }),
                    ])
                }),
            ])
        })
    }
}
