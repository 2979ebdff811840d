use std::fmt;

use dpi::LogicalSize;

/// The host display surface a viewport is read from.
///
/// Implementors report the current inner size and deliver a notification every
/// time it changes. The callback carries no payload; listeners re-read
/// [`size`](Self::size) themselves.
pub trait ViewportSurface {
    /// Current size in device-independent pixels.
    fn size(&self) -> LogicalSize<u32>;

    /// Registers `callback` for resize notifications until the returned
    /// subscription is dropped or [`unsubscribed`](ResizeSubscription::unsubscribe).
    fn on_resize(&self, callback: Box<dyn Fn()>) -> ResizeSubscription;
}

/// A registered resize listener. Dropping it deregisters the listener.
#[must_use = "dropping a ResizeSubscription removes the listener immediately"]
pub struct ResizeSubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
