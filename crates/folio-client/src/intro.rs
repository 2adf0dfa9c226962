//! Intro video gate.

use folio_core::PageConfig;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlMediaElement};

use crate::dom;

/// Listeners that stop the intro video and dismiss the intro overlay.
pub struct Intro {
    _ended: Option<EventListener>,
    _skip: Option<EventListener>,
}

impl Intro {
    /// Wires the intro video and skip control.
    ///
    /// The skip control pauses the video even when the page has no intro
    /// container; hiding only happens when the container exists. Returns
    /// `None` when there is nothing to wire.
    pub fn mount(document: &Document, config: &PageConfig) -> Option<Self> {
        let selectors = &config.selectors;
        let fade_ms = config.intro.fade_ms;

        let intro = dom::query(document, &selectors.intro).and_then(dom::html);
        let video = dom::query(document, &selectors.intro_video)
            .and_then(|element| element.dyn_into::<HtmlMediaElement>().ok());

        let ended = video.as_ref().zip(intro.clone()).map(|(video, intro)| {
            EventListener::once(video, "ended", move |_| hide(&intro, fade_ms))
        });

        let skip = dom::query(document, &selectors.skip).map(|skip| {
            let intro = intro.clone();
            EventListener::new(&skip, "click", move |_| {
                if let Some(video) = &video {
                    if let Err(err) = video.pause() {
                        tracing::debug!("Intro video pause failed: {err:?}");
                    }
                }
                if let Some(intro) = &intro {
                    hide(intro, fade_ms);
                }
            })
        });

        if ended.is_none() && skip.is_none() {
            tracing::debug!("No intro at '{}', skipping", selectors.intro);
            return None;
        }

        Some(Self {
            _ended: ended,
            _skip: skip,
        })
    }
}

/// Fades the intro out, then detaches it after `fade_ms`.
fn hide(intro: &HtmlElement, fade_ms: u32) {
    if let Err(err) = dom::set_style(intro, "opacity", "0") {
        tracing::debug!("Intro fade failed: {err}");
    }
    let intro = intro.clone();
    Timeout::new(fade_ms, move || intro.remove()).forget();
}
