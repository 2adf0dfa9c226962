//! Ripple particle field.
//!
//! Pointer movement and wheel scrolling seed expanding circles. The field
//! keeps at most `capacity` of them, evicting the oldest first, and drops each
//! one shortly after it passes its maximum radius.

use std::collections::VecDeque;

use rand::Rng;

use crate::config::{RippleConfig, RippleSeed};

/// One expanding circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub max_radius: f64,
    /// Radius added per frame.
    pub growth: f64,
}

impl Ripple {
    pub fn new(x: f64, y: f64, max_radius: f64, growth: f64) -> Self {
        Self {
            x,
            y,
            radius: 0.0,
            max_radius,
            growth,
        }
    }

    /// Fades linearly from 1 at the origin to 0 at `max_radius`.
    pub fn alpha(&self) -> f64 {
        (1.0 - self.radius / self.max_radius).max(0.0)
    }

    pub fn advance(&mut self) {
        self.radius += self.growth;
    }

    pub fn is_expired(&self, expiry_factor: f64) -> bool {
        self.radius > self.max_radius * expiry_factor
    }

    /// Outer ring then inner ring at the current radius.
    pub fn strokes(&self) -> [CircleStroke; 2] {
        let alpha = self.alpha();
        [
            CircleStroke {
                x: self.x,
                y: self.y,
                radius: self.radius,
                line_width: (6.0 * alpha).max(2.0),
                opacity: 0.3 * alpha,
            },
            CircleStroke {
                x: self.x,
                y: self.y,
                radius: self.radius * 0.6,
                line_width: (2.0 * alpha).max(1.0),
                opacity: 0.15 * alpha,
            },
        ]
    }
}

/// A white circle outline to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStroke {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub line_width: f64,
    pub opacity: f64,
}

impl CircleStroke {
    /// CSS color for the stroke style.
    pub fn css_color(&self) -> String {
        format!("rgba(255,255,255,{})", self.opacity)
    }
}

/// Drawing target for the ripple field, in CSS pixel coordinates.
pub trait RipplePainter {
    /// Clears a `width` x `height` area from the origin.
    fn clear(&mut self, width: f64, height: f64);

    fn stroke_circle(&mut self, stroke: &CircleStroke);
}

/// Live ripples plus the input state that seeds new ones.
#[derive(Debug)]
pub struct RippleField<R> {
    ripples: VecDeque<Ripple>,
    config: RippleConfig,
    rng: R,
    /// Last known pointer position; wheel ripples spawn here.
    pointer: (f64, f64),
    /// Timestamp (ms) of the last pointer-move spawn.
    last_pointer_spawn: Option<f64>,
}

impl<R: Rng> RippleField<R> {
    /// Creates an empty field. `pointer` is where wheel ripples appear before
    /// the pointer has moved, usually the viewport centre.
    pub fn new(config: RippleConfig, rng: R, pointer: (f64, f64)) -> Self {
        Self {
            ripples: VecDeque::with_capacity(config.capacity + 1),
            config,
            rng,
            pointer,
            last_pointer_spawn: None,
        }
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Live ripples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Records a pointer move at `timestamp_ms` and spawns a ripple there
    /// unless one was spawned by pointer movement within the throttle window.
    ///
    /// Returns whether a ripple was spawned.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, timestamp_ms: f64) -> bool {
        self.pointer = (x, y);
        let due = self
            .last_pointer_spawn
            .is_none_or(|last| timestamp_ms - last > self.config.throttle_ms);
        if due {
            self.spawn(x, y, Some(self.config.pointer_seed));
            self.last_pointer_spawn = Some(timestamp_ms);
        }
        due
    }

    /// Spawns a ripple at the last known pointer position.
    pub fn on_wheel(&mut self) {
        let (x, y) = self.pointer;
        self.spawn(x, y, Some(self.config.wheel_seed));
    }

    /// Spawns a jittered ripple at `(x, y)`; `None` uses the default seed.
    pub fn spawn(&mut self, x: f64, y: f64, seed: Option<RippleSeed>) {
        let seed = seed.unwrap_or(self.config.default_seed);
        let max_radius = seed.max_radius * self.jitter();
        let growth = seed.growth * self.jitter();
        self.push(Ripple::new(x, y, max_radius, growth));
    }

    /// Appends a ripple, evicting the oldest beyond capacity.
    pub fn push(&mut self, ripple: Ripple) {
        self.ripples.push_back(ripple);
        while self.ripples.len() > self.config.capacity {
            self.ripples.pop_front();
        }
    }

    /// Runs one frame: clears the surface, then grows, draws and culls every
    /// ripple from newest to oldest.
    pub fn frame<P: RipplePainter>(&mut self, painter: &mut P, width: f64, height: f64) {
        painter.clear(width, height);

        let expiry_factor = self.config.expiry_factor;
        for ripple in self.ripples.iter_mut().rev() {
            ripple.advance();
            for stroke in &ripple.strokes() {
                painter.stroke_circle(stroke);
            }
        }
        self.ripples.retain(|ripple| !ripple.is_expired(expiry_factor));
    }

    fn jitter(&mut self) -> f64 {
        self.config.jitter_min + self.rng.random::<f64>() * self.config.jitter_span
    }
}
