//! Bindings to the page's bootstrap bundle.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::utils::query_all;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    pub type BootstrapAlert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Alert", catch)]
    pub fn new(element: &Element) -> Result<BootstrapAlert, JsValue>;

    #[wasm_bindgen(method)]
    pub fn close(this: &BootstrapAlert);
}

pub fn init_tooltips() {
    for element in query_all("[data-bs-toggle=\"tooltip\"]") {
        if let Err(e) = Tooltip::new(&element) {
            warn!("failed to create tooltip: {:?}", e);
        }
    }
}

/// Closes an alert through bootstrap, or drops the node when bootstrap is
/// not on the page.
pub fn close_alert(element: &Element) {
    match BootstrapAlert::new(element) {
        Ok(alert) => alert.close(),
        Err(e) => {
            debug!("bootstrap alert unavailable: {:?}", e);
            element.remove();
        }
    }
}
