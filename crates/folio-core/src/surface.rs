//! Drawing-surface sizing for high-DPI canvases.

/// Canvas dimensions for one viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// CSS width in pixels (the viewport width).
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
    /// Backing-store width in device pixels.
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceSize {
    /// Sizes a surface covering a `css_width` x `css_height` viewport.
    ///
    /// A pixel ratio that is not a positive finite number is treated as 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(css_width: f64, css_height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        Self {
            css_width,
            css_height,
            pixel_ratio,
            backing_width: (css_width * pixel_ratio).round() as u32,
            backing_height: (css_height * pixel_ratio).round() as u32,
        }
    }

    /// Context transform `(a, b, c, d, e, f)` that keeps drawing in CSS pixels.
    pub fn transform(&self) -> [f64; 6] {
        [self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0]
    }

    /// Value for the canvas `style.width`.
    pub fn css_width_px(&self) -> String {
        format!("{}px", self.css_width)
    }

    pub fn css_height_px(&self) -> String {
        format!("{}px", self.css_height)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
