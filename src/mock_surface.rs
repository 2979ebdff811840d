//! In-memory viewport surface for headless use.
//!
//! [`MockSurface`] implements [`ViewportSurface`] without any windowing
//! system, so the classifier and the reactive hook can be driven from tests or
//! from hosts that push sizes in themselves.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use dpi::LogicalSize;

use crate::surface::{ResizeSubscription, ViewportSurface};

type Listener = Rc<dyn Fn()>;

struct SurfaceState {
    next_id: Cell<u64>,
    size: Cell<LogicalSize<u32>>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

/// A surface whose size only changes through [`resize`](MockSurface::resize).
///
/// Clones share the same size and listener list.
#[derive(Clone)]
pub struct MockSurface {
    inner: Rc<SurfaceState>,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Rc::new(SurfaceState {
                next_id: Cell::new(0),
                size: Cell::new(LogicalSize::new(width, height)),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Sets the size and notifies every listener registered at call time.
    pub fn resize(&self, width: u32, height: u32) {
        self.inner.size.set(LogicalSize::new(width, height));

        // Listeners may unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.entries.borrow().len()
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl fmt::Debug for MockSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSurface")
            .field("size", &self.inner.size.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ViewportSurface for MockSurface {
    fn size(&self) -> LogicalSize<u32> {
        self.inner.size.get()
    }

    fn on_resize(&self, callback: Box<dyn Fn()>) -> ResizeSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .entries
            .borrow_mut()
            .push((id, Rc::from(callback)));

        let inner: Weak<SurfaceState> = Rc::downgrade(&self.inner);
        ResizeSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.entries.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::MockSurface;
    use crate::surface::ViewportSurface;

    #[test]
    fn resize_notifies_until_unsubscribed() {
        let surface = MockSurface::default();
        let calls = Rc::new(Cell::new(0));

        let subscription = surface.on_resize(Box::new({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        }));
        assert_eq!(surface.listener_count(), 1);

        surface.resize(1024, 768);
        assert_eq!(calls.get(), 1);
        assert_eq!(surface.size().width, 1024);

        subscription.unsubscribe();
        assert_eq!(surface.listener_count(), 0);

        surface.resize(1920, 1080);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let surface = MockSurface::new(640, 480);
        {
            let _first = surface.on_resize(Box::new(|| {}));
            let _second = surface.on_resize(Box::new(|| {}));
            assert_eq!(surface.listener_count(), 2);
        }
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_surface_is_harmless() {
        let surface = MockSurface::default();
        let subscription = surface.on_resize(Box::new(|| {}));
        drop(surface);
        drop(subscription);
    }
}
