//! # viewport_class
//! Reports the viewport's dimensions and maps its width to a coarse
//! responsive-design class: `mobile`, `sm`, `md`, `lg`, `xl`, `hd-1366`,
//! `fhd` or `xl+`.
//!
//! ## Reading the viewport
//! The host display is abstracted as a [`ViewportSurface`]. The free functions
//! read it at call time and derive everything from that single reading:
//!
//! ```rust
//! use viewport_class::{get_responsive_class, get_screen_size, MockSurface, ResponsiveClass};
//!
//! let surface = MockSurface::new(1366, 768);
//! let info = get_screen_size(&surface);
//! assert!(info.is_hd_1366x768());
//! assert_eq!(get_responsive_class(&surface), ResponsiveClass::Hd1366);
//! assert_eq!(ResponsiveClass::Hd1366.to_string(), "hd-1366");
//! ```
//!
//! ## Following resizes
//! [`use_viewport`] keeps a reading in a reactive signal that is refreshed on
//! every resize notification. Effects reading it re-run on each resize, and
//! disposing the owning [`Scope`](reactive::Scope) removes the listener.
//!
//! ```rust
//! use viewport_class::reactive::{with_scope, Scope};
//! use viewport_class::{use_viewport, MockSurface, ResponsiveClass};
//!
//! let surface = MockSurface::new(1024, 768);
//! let scope = Scope::new();
//! let viewport = with_scope(scope, || use_viewport(surface.clone()));
//! assert_eq!(viewport.responsive_class(), ResponsiveClass::Lg);
//!
//! surface.resize(1920, 1080);
//! assert_eq!(viewport.get().responsive_class, ResponsiveClass::XlPlus);
//!
//! scope.dispose();
//! assert_eq!(surface.listener_count(), 0);
//! ```

pub mod diagnostics;
pub mod error;
pub mod mock_surface;
pub mod responsive;
pub mod screen;
pub mod surface;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use viewport_reactive as reactive;

pub use diagnostics::log_screen_info;
pub use error::ViewportError;
pub use mock_surface::MockSurface;
pub use responsive::{Breakpoints, ResponsiveClass, WidthBand};
pub use screen::{
    get_responsive_class, get_screen_size, is_fhd_resolution, is_hd_1366x768, is_hd_resolution,
    ScreenInfo, ViewportState,
};
pub use surface::{ResizeSubscription, ViewportSurface};
pub use viewport::{use_viewport, use_viewport_with, Viewport};
#[cfg(target_arch = "wasm32")]
pub use web::WebViewport;
