use anyhow::anyhow;
use libris_lib::{config::CONFIG_ELEMENT_ID, cookie};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlDocument, HtmlElement, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}

pub fn origin() -> String {
    window().location().origin().unwrap_or_default()
}

/// Whether the parser is still working through the page markup.
pub fn is_loading() -> bool {
    document().ready_state() == "loading"
}

pub fn global_exists(name: &str) -> bool {
    match js_sys::Reflect::get(&window(), &JsValue::from_str(name)) {
        Ok(val) => !val.is_undefined() && !val.is_null(),
        Err(_) => false,
    }
}

pub fn get_cookie(name: &str) -> Option<String> {
    let cookies = document()
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();

    cookie::get_cookie(&cookies, name)
}

pub fn config_json() -> Option<String> {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let list = match document().query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            error!("invalid selector {}: {:?}", selector, e);
            return vec![];
        }
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    query_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn child_text(parent: &Element, selector: &str) -> String {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn set_displayed(element: &HtmlElement, displayed: bool) -> Result<(), anyhow::Error> {
    element
        .style()
        .set_property("display", if displayed { "block" } else { "none" })
        .map_err(|e| anyhow!("error set display: {:?}", e))
}

/// Attaches `f` to `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, f: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);

    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        error!("failed to listen for {}: {:?}", event, e);
    }

    closure.forget();
}

pub fn redirect(path: &str) -> Result<(), anyhow::Error> {
    window()
        .location()
        .set_href(path)
        .map_err(|e| anyhow!("error redirect to {}: {:?}", path, e))
}

pub fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }

    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
