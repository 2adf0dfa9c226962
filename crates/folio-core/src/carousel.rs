//! Carousel track state.
//!
//! A row's track holds its cards twice, so once the drift has covered half of
//! the track's scroll width the offset can jump back to zero without a
//! visible seam.

use crate::config::CarouselConfig;
use crate::modal::ModalMode;
use crate::util::parse_nonzero_or;

/// Which control triggered a directional jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDirection {
    /// Reveal earlier cards: the track moves right (`offset += delta`).
    Prev,
    /// Reveal later cards: the track moves left (`offset -= delta`).
    Next,
}

/// Drift state of one carousel row.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselTrack {
    /// Horizontal translation in CSS pixels.
    offset: f64,
    /// Whether the per-frame drift is active.
    running: bool,
    /// Pixels subtracted per frame.
    speed: f64,
}

impl CarouselTrack {
    /// Creates a running track at offset zero.
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            running: true,
            speed,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pointer entered the row.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pointer left the row.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Advances one animation frame.
    ///
    /// `scroll_width` is the track's current rendered scroll width (both
    /// copies). Returns the offset to apply, or `None` while paused.
    pub fn step(&mut self, scroll_width: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.offset -= self.speed;
        let half = scroll_width / 2.0;
        if self.offset.abs() >= half {
            self.offset = 0.0;
        }
        Some(self.offset)
    }

    /// Starts a directional jump of `jump_cards` slides and pauses the drift
    /// until [`CarouselTrack::settle`].
    ///
    /// Jumps compound: calling this again before the settle adds another
    /// delta. Returns the offset to animate to.
    pub fn jump(&mut self, direction: JumpDirection, slide_width: f64, jump_cards: u32) -> f64 {
        let delta = slide_width * f64::from(jump_cards);
        self.running = false;
        match direction {
            JumpDirection::Prev => self.offset += delta,
            JumpDirection::Next => self.offset -= delta,
        }
        self.offset
    }

    /// Ends a jump: folds an overflowed offset back into `(-half, half)`,
    /// keeping its sign, and resumes the drift.
    pub fn settle(&mut self, scroll_width: f64) -> f64 {
        let half = scroll_width / 2.0;
        if half > 0.0 && self.offset.abs() >= half {
            let overflowed = self.offset;
            self.offset %= half;
            tracing::trace!(overflowed, offset = self.offset, half, "jump folded back into range");
        }
        self.running = true;
        self.offset
    }
}

/// Width of one card plus the gap to the next one.
///
/// `card_width` is `None` when the row has no card to measure; `gap` is the
/// raw computed `gap` style value.
pub fn slide_width(card_width: Option<f64>, gap: Option<&str>, config: &CarouselConfig) -> f64 {
    match card_width {
        Some(width) => width + parse_nonzero_or(gap, config.fallback_gap),
        None => config.fallback_slide_width,
    }
}

/// What a row knows about itself, read once at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor {
    /// Trimmed text of the row group's category label, if any.
    pub category: Option<String>,
    pub mode: ModalMode,
    /// Full-size image URLs of every card in the row group, in page order.
    pub urls: Vec<String>,
    pub speed: f64,
}

impl RowDescriptor {
    /// Builds a descriptor from raw attribute values.
    ///
    /// `card_urls` are already-resolved card URLs; absent ones and duplicates
    /// are dropped.
    pub fn new<I>(
        category: Option<&str>,
        gallery_label: &str,
        card_urls: I,
        speed_attr: Option<&str>,
        config: &CarouselConfig,
    ) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let category = category
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string);
        let mode = ModalMode::from_label(category.as_deref(), gallery_label);

        let mut urls: Vec<String> = Vec::new();
        for url in card_urls.into_iter().flatten() {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }

        Self {
            category,
            mode,
            urls,
            speed: parse_speed(speed_attr, config),
        }
    }
}

/// Reads `data-speed`; missing, zero or unparsable values use the default.
pub fn parse_speed(attr: Option<&str>, config: &CarouselConfig) -> f64 {
    parse_nonzero_or(attr, config.default_speed)
}

/// Resolves a card's full-size image URL: the explicit `data-large` value,
/// else the thumbnail source.
pub fn resolve_card_url(large: Option<&str>, thumbnail: Option<&str>) -> Option<String> {
    large
        .filter(|url| !url.is_empty())
        .or(thumbnail.filter(|url| !url.is_empty()))
        .map(str::to_string)
}
