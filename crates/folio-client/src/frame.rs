//! `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::dom;
use crate::error::ClientError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Calls a tick function on every animation frame until dropped.
pub struct FrameLoop {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Schedules `tick` for the next frame and re-arms after every call.
    /// `tick` receives the frame timestamp in milliseconds.
    pub fn start<F>(mut tick: F) -> Result<Self, ClientError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = dom::window()?;
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));

        {
            // Weak so the closure does not keep itself alive after drop.
            let callback_weak = Rc::downgrade(&callback);
            let window = window.clone();
            let frame_id = frame_id.clone();
            *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                tick(timestamp);

                let Some(callback) = callback_weak.upgrade() else {
                    return;
                };
                if let Some(ref closure) = *callback.borrow() {
                    let id = window
                        .request_animation_frame(closure.as_ref().unchecked_ref())
                        .ok();
                    frame_id.set(id);
                }
            }));
        }

        if let Some(ref closure) = *callback.borrow() {
            let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
            frame_id.set(Some(id));
        }

        Ok(Self {
            window,
            callback,
            frame_id,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Break the closure before it can fire again.
        *self.callback.borrow_mut() = None;
    }
}
