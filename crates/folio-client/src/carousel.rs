//! Carousel rows: per-frame drift, hover pause, prev/next jumps and card
//! clicks.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::carousel::resolve_card_url;
use folio_core::markup::{transform_transition, translate_x};
use folio_core::{CarouselConfig, CarouselTrack, JumpDirection, PageConfig, RowDescriptor, slide_width};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::dom;
use crate::error::ClientError;
use crate::frame::FrameLoop;
use crate::modal::Modal;

/// One mounted carousel row. Dropping it stops the row.
pub struct CarouselRow {
    handles: RowHandles,
    descriptor: Rc<RowDescriptor>,
    _frame: FrameLoop,
    _listeners: Vec<EventListener>,
}

/// Shared pieces of a row used by its frame loop, listeners and timer.
#[derive(Clone)]
struct RowHandles {
    row: Element,
    track: HtmlElement,
    state: Rc<RefCell<CarouselTrack>>,
    /// Pending settle of the last jump; replacing it cancels the old one.
    settle: Rc<RefCell<Option<Timeout>>>,
    config: CarouselConfig,
    card_selector: Rc<str>,
}

impl CarouselRow {
    /// Mounts every carousel row on the page. Rows without a track are
    /// skipped; rows that fail to mount are logged and skipped.
    pub fn mount_all(
        document: &Document,
        config: &PageConfig,
        modal: Option<&Rc<Modal>>,
    ) -> Vec<Self> {
        dom::query_all(document, &config.selectors.carousel_row)
            .into_iter()
            .filter_map(|row| match Self::mount(row, config, modal) {
                Ok(row) => row,
                Err(err) => {
                    tracing::warn!("Failed to mount carousel row: {err}");
                    None
                }
            })
            .collect()
    }

    /// Mounts one row, or returns `None` when it has no track.
    pub fn mount(
        row: Element,
        config: &PageConfig,
        modal: Option<&Rc<Modal>>,
    ) -> Result<Option<Self>, ClientError> {
        let selectors = &config.selectors;
        let Some(track) = dom::query_in(&row, &selectors.carousel_track).and_then(dom::html) else {
            tracing::debug!("Carousel row without '{}', skipping", selectors.carousel_track);
            return Ok(None);
        };

        // Read before duplicating so each card is listed once.
        let descriptor = Rc::new(describe_row(&row, config));
        track.set_inner_html(&track.inner_html().repeat(2));

        let handles = RowHandles {
            row,
            track,
            state: Rc::new(RefCell::new(CarouselTrack::new(descriptor.speed))),
            settle: Rc::new(RefCell::new(None)),
            config: config.carousel.clone(),
            card_selector: Rc::from(selectors.card.as_str()),
        };

        let frame = {
            let handles = handles.clone();
            FrameLoop::start(move |_| handles.step())?
        };

        let mut listeners = Vec::new();
        {
            let state = handles.state.clone();
            listeners.push(EventListener::new(&handles.row, "mouseenter", move |_| {
                state.borrow_mut().pause();
            }));
        }
        {
            let state = handles.state.clone();
            listeners.push(EventListener::new(&handles.row, "mouseleave", move |_| {
                state.borrow_mut().resume();
            }));
        }

        for (selector, direction) in [
            (&selectors.prev_button, JumpDirection::Prev),
            (&selectors.next_button, JumpDirection::Next),
        ] {
            if let Some(button) = dom::query_in(&handles.row, selector) {
                let handles = handles.clone();
                listeners.push(EventListener::new(&button, "click", move |_| {
                    handles.jump(direction);
                }));
            }
        }

        if let Some(modal) = modal {
            let modal = modal.clone();
            let descriptor = descriptor.clone();
            let card_selector = handles.card_selector.clone();
            listeners.push(EventListener::new(&handles.track, "click", move |event| {
                let Some(card) = dom::event_element(event)
                    .and_then(|target| dom::closest(&target, &card_selector))
                else {
                    return;
                };
                let Some(url) = card_url(&card) else {
                    return;
                };
                if let Err(err) = modal.open(&url, &descriptor) {
                    tracing::warn!("Failed to open modal: {err}");
                }
            }));
        }

        tracing::debug!(
            speed = descriptor.speed,
            cards = descriptor.urls.len(),
            mode = ?descriptor.mode,
            "carousel row mounted"
        );

        Ok(Some(Self {
            handles,
            descriptor,
            _frame: frame,
            _listeners: listeners,
        }))
    }

    pub fn descriptor(&self) -> &RowDescriptor {
        &self.descriptor
    }

    pub fn offset(&self) -> f64 {
        self.handles.state.borrow().offset()
    }

    pub fn is_running(&self) -> bool {
        self.handles.state.borrow().is_running()
    }

    /// Triggers a prev/next jump as if the control had been clicked.
    pub fn jump(&self, direction: JumpDirection) {
        self.handles.jump(direction);
    }
}

impl Drop for CarouselRow {
    fn drop(&mut self) {
        // The pending settle timer holds a clone of the handles.
        self.handles.settle.borrow_mut().take();
    }
}

impl RowHandles {
    fn scroll_width(&self) -> f64 {
        f64::from(self.track.scroll_width())
    }

    fn step(&self) {
        let Some(offset) = self.state.borrow_mut().step(self.scroll_width()) else {
            return;
        };
        if let Err(err) = dom::set_style(&self.track, "transform", &translate_x(offset)) {
            tracing::trace!("Failed to move track: {err}");
        }
    }

    fn slide_width(&self) -> f64 {
        let card_width = dom::query_in(&self.row, &self.card_selector)
            .and_then(dom::html)
            .map(|card| f64::from(card.offset_width()));
        let gap = dom::window()
            .ok()
            .and_then(|window| window.get_computed_style(&self.track).ok().flatten())
            .and_then(|style| style.get_property_value("gap").ok());
        slide_width(card_width, gap.as_deref(), &self.config)
    }

    fn jump(&self, direction: JumpDirection) {
        let slide = self.slide_width();
        let offset = self
            .state
            .borrow_mut()
            .jump(direction, slide, self.config.jump_cards);

        let transition = transform_transition(self.config.transition_ms);
        let styled = dom::set_style(&self.track, "transition", &transition)
            .and_then(|()| dom::set_style(&self.track, "transform", &translate_x(offset)));
        if let Err(err) = styled {
            tracing::warn!("Failed to animate carousel jump: {err}");
        }

        let handles = self.clone();
        let timeout = Timeout::new(self.config.settle_ms, move || handles.settle());
        *self.settle.borrow_mut() = Some(timeout);
    }

    fn settle(&self) {
        if let Err(err) = dom::set_style(&self.track, "transition", "") {
            tracing::warn!("Failed to clear carousel transition: {err}");
        }
        let width = self.scroll_width();
        self.state.borrow_mut().settle(width);
    }
}

/// Builds the row's descriptor from its row group.
fn describe_row(row: &Element, config: &PageConfig) -> RowDescriptor {
    let selectors = &config.selectors;
    let group = dom::closest(row, &selectors.row_group);
    let scope = group.as_ref().unwrap_or(row);

    let category = group
        .as_ref()
        .and_then(|group| dom::query_in(group, &selectors.category_label))
        .and_then(|label| label.text_content());
    let urls = dom::query_all_in(scope, &selectors.card)
        .iter()
        .map(card_url)
        .collect::<Vec<_>>();

    RowDescriptor::new(
        category.as_deref(),
        &config.modal.gallery_label,
        urls,
        row.get_attribute("data-speed").as_deref(),
        &config.carousel,
    )
}

/// Full-size URL of a card: `data-large`, else its thumbnail's `src`.
fn card_url(card: &Element) -> Option<String> {
    let thumbnail = dom::query_in(card, "img")
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src());
    resolve_card_url(card.get_attribute("data-large").as_deref(), thumbnail.as_deref())
}
