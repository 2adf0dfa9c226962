//! Lightbox modal for carousel cards.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{Gallery, ModalConfig, PageConfig, RowDescriptor};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, MouseEvent};

use crate::dom;
use crate::error::ClientError;

/// The page's media modal.
pub struct Modal {
    root: Element,
    content: Element,
    /// External-open control, shown in link mode only.
    external: Option<HtmlElement>,
    config: ModalConfig,
    /// Click handler of the currently open image.
    content_click: RefCell<Option<EventListener>>,
    _listeners: Vec<EventListener>,
}

impl Modal {
    /// Binds the modal, or returns `None` when its container or content area
    /// is missing.
    pub fn mount(document: &Document, config: &PageConfig) -> Option<Rc<Self>> {
        let selectors = &config.selectors;
        let (Some(root), Some(content)) = (
            dom::query(document, &selectors.modal),
            dom::query(document, &selectors.modal_content),
        ) else {
            tracing::debug!("No modal at '{}', skipping", selectors.modal);
            return None;
        };
        let external = dom::query(document, &selectors.open_external).and_then(dom::html);
        let close_button = dom::query(document, &selectors.modal_close);

        Some(Rc::new_cyclic(|modal: &Weak<Self>| {
            let mut listeners = Vec::new();

            if let Some(close_button) = close_button {
                let modal = modal.clone();
                listeners.push(EventListener::new(&close_button, "click", move |_| {
                    if let Some(modal) = modal.upgrade() {
                        modal.close();
                    }
                }));
            }

            // Backdrop clicks close; clicks inside the dialog do not.
            let backdrop = root.clone();
            let modal = modal.clone();
            listeners.push(EventListener::new(&root, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .is_some_and(|target| dom::same_node(&target, &backdrop));
                if on_backdrop {
                    if let Some(modal) = modal.upgrade() {
                        modal.close();
                    }
                }
            }));

            Self {
                root,
                content,
                external,
                config: config.modal.clone(),
                content_click: RefCell::new(None),
                _listeners: listeners,
            }
        }))
    }

    /// Shows `url` from `row`, cycling through the row's images in gallery
    /// mode or offering the external link in link mode.
    pub fn open(&self, url: &str, row: &RowDescriptor) -> Result<(), ClientError> {
        let document = dom::document()?;
        self.content.set_inner_html("");

        let img: HtmlImageElement = document
            .create_element("img")?
            .dyn_into()
            .map_err(|_| ClientError::wrong_element("img", "HtmlImageElement"))?;
        img.set_alt(&self.config.image_alt);
        self.content.append_child(&img)?;

        let mut gallery = Gallery::open(url, &row.urls, row.mode);
        show_image(&img, self.external.as_ref(), &gallery);

        let click = {
            let content = self.content.clone();
            let external = self.external.clone();
            EventListener::new(&self.content, "click", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let offset_x = f64::from(event.offset_x());
                let width = f64::from(content.client_width());
                if gallery.click(offset_x, width).is_some() {
                    show_image(&img, external.as_ref(), &gallery);
                }
            })
        };
        *self.content_click.borrow_mut() = Some(click);

        self.root.class_list().add_1(&self.config.open_class)?;
        self.root.set_attribute("aria-hidden", "false")?;
        tracing::debug!(url, mode = ?row.mode, "modal opened");
        Ok(())
    }

    /// Hides the modal and empties its content.
    pub fn close(&self) {
        if let Err(err) = self.root.class_list().remove_1(&self.config.open_class) {
            tracing::warn!("Failed to hide modal: {err:?}");
        }
        if let Err(err) = self.root.set_attribute("aria-hidden", "true") {
            tracing::warn!("Failed to set aria-hidden: {err:?}");
        }
        self.content.set_inner_html("");
        self.content_click.borrow_mut().take();
    }

    pub fn is_open(&self) -> bool {
        self.root.class_list().contains(&self.config.open_class)
    }
}

fn show_image(img: &HtmlImageElement, external: Option<&HtmlElement>, gallery: &Gallery) {
    img.set_src(gallery.current());

    let Some(external) = external else {
        return;
    };
    let result = match gallery.external_href() {
        Some(href) => external
            .set_attribute("href", href)
            .and_then(|()| external.style().set_property("display", "block")),
        None => external.style().set_property("display", "none"),
    };
    if let Err(err) = result {
        tracing::warn!("Failed to update external link: {err:?}");
    }
}
