//! Browser viewport backed by `window.innerWidth` / `window.innerHeight`.

use dpi::LogicalSize;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::{
    error::ViewportError,
    surface::{ResizeSubscription, ViewportSurface},
};

#[derive(Clone, Debug)]
pub struct WebViewport {
    window: web_sys::Window,
}

impl WebViewport {
    pub fn new() -> Result<Self, ViewportError> {
        let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
        Ok(Self { window })
    }
}

/// CSS pixels as reported by the browser; non-numbers read as zero.
fn css_pixels(value: Result<JsValue, JsValue>, property: &'static str) -> u32 {
    match value.ok().and_then(|value| value.as_f64()) {
        Some(pixels) => pixels as u32,
        None => {
            warn!(property, "viewport dimension is not a number");
            0
        }
    }
}

impl ViewportSurface for WebViewport {
    fn size(&self) -> LogicalSize<u32> {
        LogicalSize::new(
            css_pixels(self.window.inner_width(), "innerWidth"),
            css_pixels(self.window.inner_height(), "innerHeight"),
        )
    }

    fn on_resize(&self, callback: Box<dyn Fn()>) -> ResizeSubscription {
        let closure = Closure::<dyn Fn()>::wrap(callback);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            warn!(?err, "failed to register resize listener");
            return ResizeSubscription::new(|| {});
        }

        let window = self.window.clone();
        ResizeSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                warn!(?err, "failed to remove resize listener");
            }
        })
    }
}
