use tracing::info;

use crate::{
    responsive::Breakpoints,
    screen::{get_screen_size, ScreenInfo, ViewportState},
    surface::ViewportSurface,
};

/// Logs the current reading of `surface` with every derived field and returns
/// the raw reading.
///
/// The record is a single INFO event on the `viewport_class::screen` target.
pub fn log_screen_info(surface: &impl ViewportSurface) -> ScreenInfo {
    let info = get_screen_size(surface);
    let state = ViewportState::new(info, &Breakpoints::default());
    info!(
        target: "viewport_class::screen",
        width = state.width,
        height = state.height,
        ratio = state.ratio,
        responsive_class = %state.responsive_class,
        is_hd_1366x768 = state.is_hd_1366x768,
        is_hd_resolution = state.is_hd_resolution,
        is_fhd_resolution = state.is_fhd_resolution,
        "screen info"
    );
    info
}
