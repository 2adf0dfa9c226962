//! Page lifecycle: mounts every component once and keeps it alive.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::PageConfig;
use gloo::events::EventListener;
use web_sys::Document;

use crate::backgrounds;
use crate::carousel::CarouselRow;
use crate::dom;
use crate::error::ClientError;
use crate::intro::Intro;
use crate::modal::Modal;
use crate::nav;
use crate::ripple::RippleLayer;

thread_local! {
    /// The mounted page, alive until unload.
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };

    /// Pending `load` listener when the start function ran early.
    static LOAD_LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

/// Everything mounted on the page. Dropping it detaches all listeners and
/// stops both animation loops.
pub struct Page {
    pub intro: Option<Intro>,
    pub modal: Option<Rc<Modal>>,
    pub carousels: Vec<CarouselRow>,
    pub ripple: Option<RippleLayer>,
    pub backgrounds: usize,
    _nav: Vec<EventListener>,
}

impl Page {
    /// Mounts every feature the document provides. Missing elements disable
    /// their feature; a feature that fails to mount is logged and skipped.
    pub fn mount(document: &Document, config: &PageConfig) -> Self {
        let selectors = &config.selectors;

        let intro = Intro::mount(document, config);
        let backgrounds = backgrounds::apply(document, selectors);
        let nav = nav::bind(document, selectors);
        let modal = Modal::mount(document, config);
        let carousels = CarouselRow::mount_all(document, config, modal.as_ref());
        let ripple = RippleLayer::mount(document, config).unwrap_or_else(|err| {
            tracing::warn!("Failed to mount ripple layer: {err}");
            None
        });

        tracing::info!(
            intro = intro.is_some(),
            backgrounds,
            nav_links = nav.len(),
            modal = modal.is_some(),
            carousels = carousels.len(),
            ripple = ripple.is_some(),
            "folio page mounted"
        );

        Self {
            intro,
            modal,
            carousels,
            ripple,
            backgrounds,
            _nav: nav,
        }
    }
}

/// Mounts the page now if the document has finished loading, otherwise on
/// the window `load` event.
pub fn mount_when_loaded(config: PageConfig) -> Result<(), ClientError> {
    let window = dom::window()?;
    let document = dom::document()?;

    if document.ready_state() == "complete" {
        install(&document, &config);
        return Ok(());
    }

    let listener = EventListener::once(&window, "load", move |_| install(&document, &config));
    LOAD_LISTENER.with(|slot| *slot.borrow_mut() = Some(listener));
    Ok(())
}

fn install(document: &Document, config: &PageConfig) {
    let page = Page::mount(document, config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Drops the mounted page, detaching everything.
pub fn unmount() {
    PAGE.with(|slot| slot.borrow_mut().take());
    LOAD_LISTENER.with(|slot| slot.borrow_mut().take());
}
