#[macro_use]
extern crate log;

mod actions;
mod app;
mod catalogue;
mod common;
mod forms;
mod globals;
mod payment;
mod query;
mod utils;

use libris_lib::{
    format,
    models::{BookAction, BookId, BookStatus, Severity},
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use app::{with_app, App};
use utils::{document, listen};

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    info!("libris {}", libris_lib::LIB_VERSION);

    // config block and Stripe.js may come later in the markup
    if utils::is_loading() {
        let mut mounted = false;
        listen(&document(), "DOMContentLoaded", move |_| {
            if !mounted {
                mounted = true;
                App::mount(App::new());
            }
        });
    } else {
        App::mount(App::new());
    }

    Ok(())
}

fn book_id(id: &JsValue) -> Option<BookId> {
    match (id.as_string(), id.as_f64()) {
        (Some(id), _) => Some(BookId::new(id)),
        (None, Some(id)) => Some(BookId::from_number(id)),
        _ => {
            warn!("unsupported book id {:?}", id);
            None
        }
    }
}

fn perform(action: BookAction, id: JsValue) {
    let Some(id) = book_id(&id) else {
        return;
    };

    if with_app(|app| actions::BookActions::perform(&app.actions, action, id)).is_none() {
        warn!("{} called before the page was mounted", action.slug());
    }
}

#[wasm_bindgen(js_name = reserveBook)]
pub fn reserve_book(id: JsValue) {
    perform(BookAction::Reserve, id);
}

#[wasm_bindgen(js_name = borrowBook)]
pub fn borrow_book(id: JsValue) {
    perform(BookAction::Borrow, id);
}

#[wasm_bindgen(js_name = updateBookStatus)]
pub fn update_book_status(id: JsValue, status: String) {
    let Some(id) = book_id(&id) else {
        return;
    };

    with_app(|app| app.actions.update_status(&id, &BookStatus::new(status)));
}

#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: String, severity: Option<String>) {
    let severity = match severity.as_deref() {
        None => Severity::default(),
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!("unknown alert type {}, using info", s);
            Severity::default()
        }),
    };

    with_app(|app| app.alerts.show(&message, severity));
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    format::format_currency(amount)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: String) -> String {
    format::format_date(&date)
}

#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: String) -> Option<String> {
    utils::get_cookie(&name)
}

#[wasm_bindgen(js_name = showLoadingSpinner)]
pub fn show_loading_spinner(element: Element) {
    common::spinner::show_loading_spinner(&element);
}

#[wasm_bindgen(js_name = hideLoadingSpinner)]
pub fn hide_loading_spinner(element: Element, original_content: String) {
    common::spinner::hide_loading_spinner(&element, &original_content);
}

/// Resolves to the client secret of a new payment intent.
#[wasm_bindgen(js_name = createPaymentIntent)]
pub async fn create_payment_intent(amount: f64) -> Result<JsValue, JsValue> {
    payment_intent(amount).await
}

async fn payment_intent(amount: f64) -> Result<JsValue, JsValue> {
    let config = with_app(|app| app.config.clone())
        .ok_or_else(|| JsValue::from_str("page not mounted"))?;

    query::create_payment_intent(&config, amount)
        .await
        .map(|secret| JsValue::from_str(&secret))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
