//! Client-side error type.

use folio_core::ConfigError;
use wasm_bindgen::JsValue;

/// Errors raised while binding the page to the browser.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Canvas has no 2d context")]
    NoContext2d,

    #[error("Element '{selector}' is not a {expected}")]
    WrongElement {
        selector: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ConfigValue(#[from] serde_wasm_bindgen::Error),
}

impl ClientError {
    pub fn wrong_element(selector: &str, expected: &'static str) -> Self {
        Self::WrongElement {
            selector: selector.to_string(),
            expected,
        }
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
