use thiserror::Error;

use crate::responsive::ResponsiveClass;

/// Errors raised while building a breakpoint table or attaching to a host
/// surface. Classifying a reading never fails.
#[derive(Debug, Error)]
pub enum ViewportError {
    #[error(
        "breakpoint `{class}` starts at {start}px, which is not above the previous start ({previous}px)"
    )]
    UnorderedBreakpoint {
        class: ResponsiveClass,
        start: u32,
        previous: u32,
    },
    #[cfg(feature = "serde")]
    #[error("malformed breakpoint table")]
    Json(#[from] serde_json::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("no browser window is available")]
    NoWindow,
}
