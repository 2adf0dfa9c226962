//! Smooth-scroll navigation links.

use folio_core::Selectors;
use folio_core::markup::fragment_id;
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

/// Replaces the jump of every nav link with a smooth scroll to its target.
pub fn bind(document: &Document, selectors: &Selectors) -> Vec<EventListener> {
    dom::query_all(document, &selectors.nav_link)
        .into_iter()
        .map(|link| {
            let document = document.clone();
            let href_source = link.clone();
            EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let Some(href) = href_source.get_attribute("href") else {
                        return;
                    };
                    let Some(target) = fragment_id(&href).and_then(|id| document.get_element_by_id(id))
                    else {
                        return;
                    };
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                },
            )
        })
        .collect()
}
