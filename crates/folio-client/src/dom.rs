//! Guarded DOM lookups.
//!
//! Every optional element goes through these helpers: a missing element or an
//! invalid selector yields `None`/empty rather than an error.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, NodeList, Window};

use crate::error::ClientError;

pub fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or(ClientError::NoWindow)
}

pub fn document() -> Result<Document, ClientError> {
    window()?.document().ok_or(ClientError::NoDocument)
}

/// First element in the document matching `selector`.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    found(document.query_selector(selector), selector)
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector), selector)
}

/// First descendant of `parent` matching `selector`.
pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    found(parent.query_selector(selector), selector)
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    elements(parent.query_selector_all(selector), selector)
}

/// Nearest inclusive ancestor of `element` matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    found(element.closest(selector), selector)
}

/// The event's target, when it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

/// Sets an inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), ClientError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Whether two handles refer to the same JS object.
pub fn same_node(a: &JsValue, b: &JsValue) -> bool {
    js_sys::Object::is(a, b)
}

fn found(result: Result<Option<Element>, JsValue>, selector: &str) -> Option<Element> {
    match result {
        Ok(element) => element,
        Err(err) => {
            tracing::warn!("Invalid selector '{selector}': {err:?}");
            None
        }
    }
}

fn elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let list = match result {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!("Invalid selector '{selector}': {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
