//! Section and footer background images from `data-bg`.

use folio_core::Selectors;
use folio_core::markup::background_image_value;
use web_sys::Document;

use crate::dom;

/// Applies every `data-bg` attribute as an inline background image.
/// Returns how many elements were updated.
pub fn apply(document: &Document, selectors: &Selectors) -> usize {
    let mut applied = 0;
    for element in dom::query_all(document, &selectors.background) {
        let Some(value) = element
            .get_attribute("data-bg")
            .as_deref()
            .and_then(background_image_value)
        else {
            continue;
        };
        let Some(element) = dom::html(element) else {
            continue;
        };
        match dom::set_style(&element, "background-image", &value) {
            Ok(()) => applied += 1,
            Err(err) => tracing::warn!("Failed to apply background {value}: {err}"),
        }
    }
    applied
}
