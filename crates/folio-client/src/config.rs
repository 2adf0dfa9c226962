//! Page configuration sources.
//!
//! First match wins:
//! 1. a global `window.FOLIO_CONFIG` object
//! 2. a `<script type="application/json" id="folio-config">` element
//! 3. [`PageConfig::default`]

use folio_core::PageConfig;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::error::ClientError;

const CONFIG_GLOBAL: &str = "FOLIO_CONFIG";
const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Loads and validates the page configuration.
pub fn load() -> Result<PageConfig, ClientError> {
    let window = dom::window()?;

    let global = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))?;
    if !global.is_undefined() && !global.is_null() {
        let config: PageConfig = serde_wasm_bindgen::from_value(global)?;
        config.validate()?;
        return Ok(config);
    }

    let json = window
        .document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match json {
        Some(json) if !json.trim().is_empty() => Ok(PageConfig::from_json(&json)?),
        _ => Ok(PageConfig::default()),
    }
}
