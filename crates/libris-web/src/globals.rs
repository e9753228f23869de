//! Page functions installed on `window`, so inline handlers in the server
//! markup (`onclick="borrowBook(3)"`) can reach them.

use libris_lib::page::PageFunction;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::utils::window;

fn closure(function: PageFunction) -> JsValue {
    match function {
        PageFunction::ReserveBook => {
            Closure::wrap(Box::new(crate::reserve_book) as Box<dyn Fn(JsValue)>).into_js_value()
        }
        PageFunction::BorrowBook => {
            Closure::wrap(Box::new(crate::borrow_book) as Box<dyn Fn(JsValue)>).into_js_value()
        }
        PageFunction::UpdateBookStatus => Closure::wrap(
            Box::new(crate::update_book_status) as Box<dyn Fn(JsValue, String)>
        )
        .into_js_value(),
        PageFunction::ShowAlert => Closure::wrap(Box::new(|message: String, severity: JsValue| {
            crate::show_alert(message, severity.as_string())
        }) as Box<dyn Fn(String, JsValue)>)
        .into_js_value(),
        PageFunction::FormatCurrency => {
            Closure::wrap(Box::new(crate::format_currency) as Box<dyn Fn(f64) -> String>)
                .into_js_value()
        }
        PageFunction::FormatDate => {
            Closure::wrap(Box::new(crate::format_date) as Box<dyn Fn(String) -> String>)
                .into_js_value()
        }
        PageFunction::GetCookie => Closure::wrap(Box::new(|name: String| {
            crate::get_cookie(name)
                .map(JsValue::from)
                .unwrap_or(JsValue::NULL)
        }) as Box<dyn Fn(String) -> JsValue>)
        .into_js_value(),
        PageFunction::ShowLoadingSpinner => Closure::wrap(
            Box::new(crate::show_loading_spinner) as Box<dyn Fn(Element)>
        )
        .into_js_value(),
        PageFunction::HideLoadingSpinner => Closure::wrap(
            Box::new(crate::hide_loading_spinner) as Box<dyn Fn(Element, String)>
        )
        .into_js_value(),
        PageFunction::CreatePaymentIntent => Closure::wrap(Box::new(|amount: f64| {
            wasm_bindgen_futures::future_to_promise(crate::payment_intent(amount))
        }) as Box<dyn Fn(f64) -> js_sys::Promise>)
        .into_js_value(),
    }
}

pub fn install() {
    let window = window();
    for function in PageFunction::ALL {
        let name = function.js_name();
        if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), &closure(function))
        {
            error!("failed to define {}: {:?}", name, e);
        }
    }
}
