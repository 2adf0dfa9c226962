//! Folio Client
//!
//! WASM runtime for the static portfolio page. Build with
//! `wasm-pack build crates/folio-client --target web` and load the generated
//! module from the page; the start function mounts everything once the page
//! has loaded.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod backgrounds;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod frame;
pub mod intro;
pub mod modal;
pub mod nav;
pub mod page;
pub mod ripple;

use folio_core::PageConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

pub use error::ClientError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Config comes first so its filter can drive the subscriber.
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    };

    init_tracing(&config.log_filter);

    if let Some(err) = config_error {
        tracing::warn!("Invalid page config, using defaults: {err}");
    }

    if let Err(err) = page::mount_when_loaded(config) {
        tracing::error!("Failed to schedule page mount: {err}");
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    if let Err(err) = tracing_subscriber::registry().with(fmt_layer).try_init() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "folio: tracing already initialized: {err}"
        )));
    }
}
