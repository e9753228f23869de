use web_sys::Element;

pub const SPINNER_HTML: &str = r#"<div class="spinner-border text-primary" role="status"><span class="visually-hidden">Loading...</span></div>"#;

/// Replaces the content of `element` with a spinner. The caller keeps the
/// previous content if it wants it back.
pub fn show_loading_spinner(element: &Element) {
    element.set_inner_html(SPINNER_HTML);
}

pub fn hide_loading_spinner(element: &Element, original_content: &str) {
    element.set_inner_html(original_content);
}
