use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, intern};
use web_sys::{Document, Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, Window};


#[wasm_bindgen(inline_js = "
    export function set_property(obj, name, value) { obj[name] = value; }
")]
extern "C" {
    pub(crate) fn set_property(obj: &JsValue, name: &str, value: &JsValue);
}

// Globals provided by the page's <script> tags
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = VANTA, js_name = GLOBE)]
    pub(crate) fn vanta_globe(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    pub(crate) fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = feather, js_name = replace)]
    pub(crate) fn feather_replace() -> Result<(), JsValue>;
}


thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
}

pub(crate) fn new_object() -> JsValue {
    js_sys::Object::new().into()
}

pub(crate) fn get_element_by_id(id: &str) -> Option<Element> {
    DOCUMENT.with(|d| d.get_element_by_id(id))
}

pub(crate) fn query_selector(selector: &str) -> Option<Element> {
    DOCUMENT.with(|d| d.query_selector(selector).ok().flatten())
}

pub(crate) fn get_input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into().ok()
}

/// Returns `true` if the class is present after the toggle.
pub(crate) fn toggle_class(elem: &Element, value: &str) -> bool {
    elem.class_list().toggle(intern(value)).unwrap_throw()
}

pub(crate) fn has_class(elem: &Element, value: &str) -> bool {
    elem.class_list().contains(intern(value))
}

pub(crate) fn set_attribute(elem: &Element, key: &str, value: &str) {
    elem.set_attribute(key, value).unwrap_throw();
}

pub(crate) fn scroll_into_view_smooth(elem: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    elem.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn input_value(elem: &HtmlInputElement) -> String {
    elem.value()
}

pub(crate) fn report_invalid(elem: &HtmlInputElement, message: &str) {
    elem.set_custom_validity(message);
    elem.report_validity();
}

pub(crate) fn clear_invalid(elem: &HtmlInputElement) {
    elem.set_custom_validity(intern(""));
}
