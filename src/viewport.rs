//! Reactive view of the viewport.
//!
//! [`use_viewport`] stores the current [`ScreenInfo`] in a signal and keeps it
//! in sync with the surface's resize notifications. The signal and the listener
//! live in a child of the current [`Scope`], so disposing either the caller's
//! scope or the [`Viewport`] itself removes the listener.

use std::rc::Rc;

use tracing::trace;
use viewport_reactive::{on_cleanup, with_scope, RwSignal, Scope};

use crate::{
    responsive::{Breakpoints, ResponsiveClass},
    screen::{ScreenInfo, ViewportState},
    surface::ViewportSurface,
};

/// Handle to a live viewport reading. Cheap to copy into effects and views.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    info: RwSignal<ScreenInfo>,
    scope: Scope,
    breakpoints: Breakpoints,
}

/// Subscribes to `surface` for the lifetime of the current scope, classifying
/// with the default breakpoints.
pub fn use_viewport<S>(surface: S) -> Viewport
where
    S: ViewportSurface + 'static,
{
    use_viewport_with(surface, Breakpoints::default())
}

/// Like [`use_viewport`], classifying with `breakpoints`.
pub fn use_viewport_with<S>(surface: S, breakpoints: Breakpoints) -> Viewport
where
    S: ViewportSurface + 'static,
{
    let scope = Scope::current().create_child();
    let info = with_scope(scope, || subscribe(surface));
    Viewport {
        info,
        scope,
        breakpoints,
    }
}

fn subscribe<S>(surface: S) -> RwSignal<ScreenInfo>
where
    S: ViewportSurface + 'static,
{
    let initial = ScreenInfo::from_size(surface.size());
    let info = RwSignal::new(initial);
    trace!(width = initial.width, height = initial.height, "viewport subscribed");

    // The listener only holds a weak reference; the cleanup owns the surface.
    let surface = Rc::new(surface);
    let weak = Rc::downgrade(&surface);
    let subscription = surface.on_resize(Box::new(move || {
        let Some(surface) = weak.upgrade() else {
            return;
        };
        let next = ScreenInfo::from_size(surface.size());
        trace!(width = next.width, height = next.height, "viewport resized");
        info.set(next);
    }));

    on_cleanup(move || {
        subscription.unsubscribe();
        drop(surface);
        trace!("viewport unsubscribed");
    });

    info
}

impl Viewport {
    /// The latest reading with freshly derived fields. Subscribes the running
    /// effect.
    ///
    /// # Panics
    /// If the owning scope has been disposed; see [`try_get`](Self::try_get).
    pub fn get(&self) -> ViewportState {
        self.info
            .with(|info| ViewportState::new(*info, &self.breakpoints))
    }

    /// Like [`get`](Self::get), but `None` once the owning scope is disposed.
    pub fn try_get(&self) -> Option<ViewportState> {
        self.info
            .try_get()
            .map(|info| ViewportState::new(info, &self.breakpoints))
    }

    pub fn get_untracked(&self) -> ViewportState {
        self.info
            .with_untracked(|info| ViewportState::new(*info, &self.breakpoints))
    }

    pub fn screen_info(&self) -> ScreenInfo {
        self.info.get()
    }

    pub fn responsive_class(&self) -> ResponsiveClass {
        self.info.with(|info| self.breakpoints.classify(info.width))
    }

    pub fn is(&self, class: ResponsiveClass) -> bool {
        self.responsive_class() == class
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    pub fn is_disposed(&self) -> bool {
        self.info.is_disposed()
    }

    /// Removes the resize listener without disposing the caller's scope.
    pub fn dispose(&self) {
        self.scope.dispose();
    }
}
