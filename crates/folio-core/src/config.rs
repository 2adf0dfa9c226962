//! Page configuration: element selectors and animation tuning.
//!
//! Every section carries `#[serde(default)]`, so a page only needs to supply
//! the keys it wants to override.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete runtime configuration for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub carousel: CarouselConfig,
    pub ripple: RippleConfig,
    pub modal: ModalConfig,
    pub intro: IntroConfig,
    /// `tracing` env-filter directive used for the browser console.
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            carousel: CarouselConfig::default(),
            ripple: RippleConfig::default(),
            modal: ModalConfig::default(),
            intro: IntroConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(log_filter = %config.log_filter, "page config parsed");
        Ok(config)
    }

    /// Rejects values that would break the animation loops.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.carousel.validate()?;
        self.ripple.validate()
    }
}

/// CSS selectors for the elements the runtime attaches to. All optional on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub intro: String,
    pub intro_video: String,
    pub skip: String,
    pub ripple_canvas: String,
    pub carousel_row: String,
    pub carousel_track: String,
    pub card: String,
    pub prev_button: String,
    pub next_button: String,
    pub row_group: String,
    pub category_label: String,
    pub modal: String,
    pub modal_content: String,
    pub modal_close: String,
    pub open_external: String,
    pub nav_link: String,
    pub background: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            intro: "#intro".to_string(),
            intro_video: "#introVideo".to_string(),
            skip: "#skipBtn".to_string(),
            ripple_canvas: "#rippleCanvas".to_string(),
            carousel_row: ".carousel-row".to_string(),
            carousel_track: ".carousel-track".to_string(),
            card: ".card".to_string(),
            prev_button: ".carousel-btn.prev".to_string(),
            next_button: ".carousel-btn.next".to_string(),
            row_group: ".project-row".to_string(),
            category_label: ".badge".to_string(),
            modal: "#mediaModal".to_string(),
            modal_content: "#modalContent".to_string(),
            modal_close: "#modalClose".to_string(),
            open_external: "#openExternal".to_string(),
            nav_link: ".nav-link".to_string(),
            background: "section[data-bg], footer[data-bg]".to_string(),
        }
    }
}

/// Carousel drift and jump tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Pixels per frame when a row has no usable `data-speed`.
    pub default_speed: f64,
    /// Slide width used when a row has no measurable card.
    pub fallback_slide_width: f64,
    /// Inter-card gap used when the computed `gap` cannot be read.
    pub fallback_gap: f64,
    /// Cards moved by one prev/next click.
    pub jump_cards: u32,
    pub transition_ms: u32,
    pub settle_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            default_speed: 0.6,
            fallback_slide_width: 260.0,
            fallback_gap: 18.0,
            jump_cards: 3,
            transition_ms: 450,
            settle_ms: 480,
        }
    }
}

impl CarouselConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_speed.is_finite() && self.default_speed > 0.0) {
            return Err(ConfigError::invalid("carousel.defaultSpeed", "must be positive"));
        }
        if !(self.fallback_slide_width.is_finite() && self.fallback_slide_width > 0.0) {
            return Err(ConfigError::invalid(
                "carousel.fallbackSlideWidth",
                "must be positive",
            ));
        }
        if !(self.fallback_gap.is_finite() && self.fallback_gap >= 0.0) {
            return Err(ConfigError::invalid("carousel.fallbackGap", "must not be negative"));
        }
        if self.jump_cards == 0 {
            return Err(ConfigError::invalid("carousel.jumpCards", "must be at least 1"));
        }
        Ok(())
    }
}

/// Base radius and growth rate before per-particle jitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RippleSeed {
    pub max_radius: f64,
    pub growth: f64,
}

impl RippleSeed {
    pub const fn new(max_radius: f64, growth: f64) -> Self {
        Self { max_radius, growth }
    }

    fn is_valid(&self) -> bool {
        self.max_radius.is_finite()
            && self.max_radius > 0.0
            && self.growth.is_finite()
            && self.growth > 0.0
    }
}

/// Ripple field tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RippleConfig {
    /// Live particle cap; the oldest is evicted beyond it.
    pub capacity: usize,
    pub default_seed: RippleSeed,
    pub pointer_seed: RippleSeed,
    pub wheel_seed: RippleSeed,
    /// Minimum spacing between pointer-move spawns.
    pub throttle_ms: f64,
    /// Jitter factor is `jitter_min + rand * jitter_span`.
    pub jitter_min: f64,
    pub jitter_span: f64,
    /// A particle expires once `radius > max_radius * expiry_factor`.
    pub expiry_factor: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            capacity: 4,
            default_seed: RippleSeed::new(180.0, 1.5),
            pointer_seed: RippleSeed::new(120.0, 0.8),
            wheel_seed: RippleSeed::new(140.0, 1.0),
            throttle_ms: 40.0,
            jitter_min: 0.7,
            jitter_span: 0.8,
            expiry_factor: 1.05,
        }
    }
}

impl RippleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::invalid("ripple.capacity", "must be at least 1"));
        }
        for (field, seed) in [
            ("ripple.defaultSeed", &self.default_seed),
            ("ripple.pointerSeed", &self.pointer_seed),
            ("ripple.wheelSeed", &self.wheel_seed),
        ] {
            if !seed.is_valid() {
                return Err(ConfigError::invalid(field, "radius and growth must be positive"));
            }
        }
        if !(self.throttle_ms.is_finite() && self.throttle_ms >= 0.0) {
            return Err(ConfigError::invalid("ripple.throttleMs", "must not be negative"));
        }
        if !(self.jitter_min.is_finite() && self.jitter_min > 0.0) {
            return Err(ConfigError::invalid("ripple.jitterMin", "must be positive"));
        }
        if !(self.jitter_span.is_finite() && self.jitter_span > 0.0) {
            return Err(ConfigError::invalid("ripple.jitterSpan", "must be positive"));
        }
        if !(self.expiry_factor.is_finite() && self.expiry_factor >= 1.0) {
            return Err(ConfigError::invalid("ripple.expiryFactor", "must be at least 1"));
        }
        Ok(())
    }
}

/// Modal labels and classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Category label that opens the modal in gallery mode.
    pub gallery_label: String,
    pub open_class: String,
    pub image_alt: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            gallery_label: "포스터".to_string(),
            open_class: "show".to_string(),
            image_alt: "확대보기".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroConfig {
    /// Delay between fading the intro out and removing it.
    pub fade_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self { fade_ms: 520 }
    }
}
