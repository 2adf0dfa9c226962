//! Folio Core Library
//!
//! Platform-independent state for the portfolio page runtime:
//! - Carousel track drift, halfway wraparound and directional jumps
//! - Ripple particle field with a bounded FIFO and per-frame painting
//! - Modal gallery cycling and drawing-surface sizing
//!
//! Nothing in this crate touches the DOM; `folio-client` binds it to the browser.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod markup;
pub mod modal;
pub mod ripple;
pub mod surface;
pub mod util;

pub use carousel::{CarouselTrack, JumpDirection, RowDescriptor, slide_width};
pub use config::{
    CarouselConfig, IntroConfig, ModalConfig, PageConfig, RippleConfig, RippleSeed, Selectors,
};
pub use error::ConfigError;
pub use modal::{Gallery, ModalMode};
pub use ripple::{CircleStroke, Ripple, RippleField, RipplePainter};
pub use surface::SurfaceSize;
