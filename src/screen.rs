//! Viewport readings and the classifiers derived from them.
//!
//! The free functions read a [`ViewportSurface`] at call time; nothing is
//! cached between calls.

use dpi::LogicalSize;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    responsive::{Breakpoints, ResponsiveClass},
    surface::ViewportSurface,
};

const HD_MIN_WIDTH: u32 = 768;
const HD_MAX_WIDTH: u32 = 1366;
const FHD_MIN_WIDTH: u32 = 1367;
const FHD_MAX_WIDTH: u32 = 1920;

/// One reading of the viewport, in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    /// `width / height`. Not finite when `height` is zero.
    pub ratio: f64,
}

impl ScreenInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ratio: f64::from(width) / f64::from(height),
        }
    }

    pub fn from_size(size: LogicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }

    pub fn size(&self) -> LogicalSize<u32> {
        LogicalSize::new(self.width, self.height)
    }

    pub fn responsive_class(&self) -> ResponsiveClass {
        ResponsiveClass::from_width(self.width)
    }

    /// Exactly 1366x768.
    pub fn is_hd_1366x768(&self) -> bool {
        self.width == 1366 && self.height == 768
    }

    pub fn is_hd_resolution(&self) -> bool {
        (HD_MIN_WIDTH..=HD_MAX_WIDTH).contains(&self.width)
    }

    pub fn is_fhd_resolution(&self) -> bool {
        (FHD_MIN_WIDTH..=FHD_MAX_WIDTH).contains(&self.width)
    }
}

impl From<LogicalSize<u32>> for ScreenInfo {
    fn from(size: LogicalSize<u32>) -> Self {
        Self::from_size(size)
    }
}

/// A [`ScreenInfo`] together with every field derived from it.
///
/// This is both the output of the reactive [`Viewport`](crate::Viewport) and
/// the record written by [`log_screen_info`](crate::log_screen_info).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub ratio: f64,
    pub responsive_class: ResponsiveClass,
    pub is_hd_1366x768: bool,
    pub is_hd_resolution: bool,
    pub is_fhd_resolution: bool,
}

impl ViewportState {
    pub fn new(info: ScreenInfo, breakpoints: &Breakpoints) -> Self {
        Self {
            width: info.width,
            height: info.height,
            ratio: info.ratio,
            responsive_class: breakpoints.classify(info.width),
            is_hd_1366x768: info.is_hd_1366x768(),
            is_hd_resolution: info.is_hd_resolution(),
            is_fhd_resolution: info.is_fhd_resolution(),
        }
    }

    pub fn info(&self) -> ScreenInfo {
        ScreenInfo {
            width: self.width,
            height: self.height,
            ratio: self.ratio,
        }
    }
}

impl From<ScreenInfo> for ViewportState {
    fn from(info: ScreenInfo) -> Self {
        Self::new(info, &Breakpoints::default())
    }
}

/// Reads the current size of `surface`.
pub fn get_screen_size(surface: &impl ViewportSurface) -> ScreenInfo {
    ScreenInfo::from_size(surface.size())
}

pub fn is_hd_1366x768(surface: &impl ViewportSurface) -> bool {
    get_screen_size(surface).is_hd_1366x768()
}

/// Width within 768..=1366.
pub fn is_hd_resolution(surface: &impl ViewportSurface) -> bool {
    get_screen_size(surface).is_hd_resolution()
}

/// Width within 1367..=1920.
pub fn is_fhd_resolution(surface: &impl ViewportSurface) -> bool {
    get_screen_size(surface).is_fhd_resolution()
}

pub fn get_responsive_class(surface: &impl ViewportSurface) -> ResponsiveClass {
    get_screen_size(surface).responsive_class()
}
