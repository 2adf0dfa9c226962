//! Canvas ripple layer.

#![allow(deprecated)] // web-sys Canvas API deprecation warnings

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::{CircleStroke, PageConfig, RippleField, RipplePainter, SurfaceSize};
use gloo::events::EventListener;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use crate::dom;
use crate::error::ClientError;
use crate::frame::FrameLoop;

/// The mounted ripple canvas. Dropping it stops the animation.
pub struct RippleLayer {
    surface: Rc<Surface>,
    field: Rc<RefCell<RippleField<ChaCha8Rng>>>,
    _frame: FrameLoop,
    _listeners: Vec<EventListener>,
}

/// Canvas plus its current sizing.
struct Surface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    size: Cell<SurfaceSize>,
}

impl Surface {
    /// Matches the canvas to the viewport at the current pixel ratio.
    fn resize(&self, window: &Window) -> Result<(), ClientError> {
        let (width, height) = dom::viewport_size(window);
        let size = SurfaceSize::new(width, height, window.device_pixel_ratio());

        self.canvas.set_width(size.backing_width);
        self.canvas.set_height(size.backing_height);
        let style = self.canvas.style();
        style.set_property("width", &size.css_width_px())?;
        style.set_property("height", &size.css_height_px())?;

        let [a, b, c, d, e, f] = size.transform();
        self.context.set_transform(a, b, c, d, e, f)?;
        self.size.set(size);
        Ok(())
    }
}

/// Draws ripple strokes onto a 2D context.
struct CanvasPainter<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl RipplePainter for CanvasPainter<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_circle(&mut self, stroke: &CircleStroke) {
        let ctx = self.context;
        ctx.begin_path();
        ctx.set_line_width(stroke.line_width);
        ctx.set_stroke_style(&JsValue::from_str(&stroke.css_color()));
        if ctx
            .arc(stroke.x, stroke.y, stroke.radius, 0.0, TAU)
            .is_ok()
        {
            ctx.stroke();
        }
    }
}

impl RippleLayer {
    /// Mounts the ripple layer, or returns `None` when the page has no
    /// ripple canvas.
    pub fn mount(document: &Document, config: &PageConfig) -> Result<Option<Self>, ClientError> {
        let selector = &config.selectors.ripple_canvas;
        let Some(canvas) = dom::query(document, selector) else {
            tracing::debug!("No ripple canvas at '{selector}', skipping");
            return Ok(None);
        };
        let canvas: HtmlCanvasElement = canvas
            .dyn_into()
            .map_err(|_| ClientError::wrong_element(selector, "canvas"))?;
        let context = canvas
            .get_context("2d")?
            .ok_or(ClientError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::NoContext2d)?;

        let window = dom::window()?;
        let surface = Rc::new(Surface {
            canvas,
            context,
            size: Cell::new(SurfaceSize::default()),
        });
        surface.resize(&window)?;

        let (width, height) = dom::viewport_size(&window);
        let rng = ChaCha8Rng::from_rng(&mut rand::rng());
        let field = Rc::new(RefCell::new(RippleField::new(
            config.ripple.clone(),
            rng,
            (width / 2.0, height / 2.0),
        )));

        let mut listeners = Vec::new();
        {
            let surface = surface.clone();
            let window_for_resize = window.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Err(err) = surface.resize(&window_for_resize) {
                    tracing::warn!("Failed to resize ripple canvas: {err}");
                }
            }));
        }
        {
            let field = field.clone();
            listeners.push(EventListener::new(&window, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                field.borrow_mut().on_pointer_move(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    event.time_stamp(),
                );
            }));
        }
        {
            // gloo listeners are passive by default.
            let field = field.clone();
            listeners.push(EventListener::new(&window, "wheel", move |_| {
                field.borrow_mut().on_wheel();
            }));
        }

        let frame = {
            let surface = surface.clone();
            let field = field.clone();
            FrameLoop::start(move |_| {
                let size = surface.size.get();
                let mut painter = CanvasPainter {
                    context: &surface.context,
                };
                field
                    .borrow_mut()
                    .frame(&mut painter, size.css_width, size.css_height);
            })?
        };

        tracing::debug!(
            backing_width = surface.size.get().backing_width,
            backing_height = surface.size.get().backing_height,
            "ripple layer mounted"
        );

        Ok(Some(Self {
            surface,
            field,
            _frame: frame,
            _listeners: listeners,
        }))
    }

    pub fn size(&self) -> SurfaceSize {
        self.surface.size.get()
    }

    /// Number of live ripples.
    pub fn live_ripples(&self) -> usize {
        self.field.borrow().len()
    }
}
