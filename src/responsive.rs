use std::ops::{Bound, RangeBounds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ViewportError;

/// Coarse responsive-design category of a viewport width.
///
/// The string form of each variant (`Display`, `FromStr`, [`as_str`]) is the
/// label used in class names and logs, e.g. `"hd-1366"` or `"xl+"`.
///
/// [`as_str`]: ResponsiveClass::as_str
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResponsiveClass {
    #[strum(serialize = "mobile")]
    #[cfg_attr(feature = "serde", serde(rename = "mobile"))]
    Mobile,
    #[strum(serialize = "sm")]
    #[cfg_attr(feature = "serde", serde(rename = "sm"))]
    Sm,
    #[strum(serialize = "md")]
    #[cfg_attr(feature = "serde", serde(rename = "md"))]
    Md,
    #[strum(serialize = "lg")]
    #[cfg_attr(feature = "serde", serde(rename = "lg"))]
    Lg,
    #[strum(serialize = "xl")]
    #[cfg_attr(feature = "serde", serde(rename = "xl"))]
    Xl,
    #[strum(serialize = "hd-1366")]
    #[cfg_attr(feature = "serde", serde(rename = "hd-1366"))]
    Hd1366,
    #[strum(serialize = "fhd")]
    #[cfg_attr(feature = "serde", serde(rename = "fhd"))]
    Fhd,
    #[strum(serialize = "xl+")]
    #[cfg_attr(feature = "serde", serde(rename = "xl+"))]
    XlPlus,
}

impl ResponsiveClass {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Classifies `width` with the default breakpoint table.
    pub fn from_width(width: u32) -> Self {
        Breakpoints::default().classify(width)
    }
}

/// The band of widths, in device-independent pixels, covered by one class.
/// `end` is exclusive; `None` means the band is open ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthBand {
    pub start: u32,
    pub end: Option<u32>,
}

impl RangeBounds<u32> for WidthBand {
    fn start_bound(&self) -> Bound<&u32> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&u32> {
        match &self.end {
            Some(end) => Bound::Excluded(end),
            None => Bound::Unbounded,
        }
    }
}

/// Width breakpoints in pixels.
///
/// Stores the first width of every class above [`ResponsiveClass::Mobile`], in
/// ascending order: `sm, md, lg, xl, hd-1366, fhd, xl+`. Mobile covers
/// everything below the `sm` start. Each class runs up to, but excluding, the
/// start of the next one, so the bands never overlap and leave no gaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "BreakpointTable", try_from = "BreakpointTable")
)]
pub struct Breakpoints {
    starts: [u32; 7],
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            starts: [640, 768, 1024, 1280, 1366, 1367, 1920],
        }
    }
}

impl Breakpoints {
    /// Builds a table from the start widths of `sm, md, lg, xl, hd-1366, fhd,
    /// xl+`. Starts must be strictly ascending and `sm` must start above zero.
    pub fn new(starts: [u32; 7]) -> Result<Self, ViewportError> {
        let mut previous = 0;
        for (class, start) in Self::upper_classes().into_iter().zip(starts) {
            if start <= previous {
                return Err(ViewportError::UnorderedBreakpoint {
                    class,
                    start,
                    previous,
                });
            }
            previous = start;
        }
        Ok(Self { starts })
    }

    /// Parses a table such as
    /// `{"sm":640,"md":768,"lg":1024,"xl":1280,"hd-1366":1366,"fhd":1367,"xl+":1920}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ViewportError> {
        let table: BreakpointTable = serde_json::from_str(json)?;
        Self::try_from(table)
    }

    pub fn classify(&self, width: u32) -> ResponsiveClass {
        let [sm, md, lg, xl, hd_1366, fhd, xl_plus] = self.starts;
        match width {
            w if w >= xl_plus => ResponsiveClass::XlPlus,
            w if w >= fhd => ResponsiveClass::Fhd,
            w if w >= hd_1366 => ResponsiveClass::Hd1366,
            w if w >= xl => ResponsiveClass::Xl,
            w if w >= lg => ResponsiveClass::Lg,
            w if w >= md => ResponsiveClass::Md,
            w if w >= sm => ResponsiveClass::Sm,
            _ => ResponsiveClass::Mobile,
        }
    }

    /// The widths that [`classify`](Self::classify) maps to `class`.
    pub fn band(&self, class: ResponsiveClass) -> WidthBand {
        let [sm, md, lg, xl, hd_1366, fhd, xl_plus] = self.starts;
        let (start, end) = match class {
            ResponsiveClass::Mobile => (0, Some(sm)),
            ResponsiveClass::Sm => (sm, Some(md)),
            ResponsiveClass::Md => (md, Some(lg)),
            ResponsiveClass::Lg => (lg, Some(xl)),
            ResponsiveClass::Xl => (xl, Some(hd_1366)),
            ResponsiveClass::Hd1366 => (hd_1366, Some(fhd)),
            ResponsiveClass::Fhd => (fhd, Some(xl_plus)),
            ResponsiveClass::XlPlus => (xl_plus, None),
        };
        WidthBand { start, end }
    }

    fn upper_classes() -> [ResponsiveClass; 7] {
        [
            ResponsiveClass::Sm,
            ResponsiveClass::Md,
            ResponsiveClass::Lg,
            ResponsiveClass::Xl,
            ResponsiveClass::Hd1366,
            ResponsiveClass::Fhd,
            ResponsiveClass::XlPlus,
        ]
    }
}

/// On-disk form of [`Breakpoints`], keyed by class label.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BreakpointTable {
    sm: u32,
    md: u32,
    lg: u32,
    xl: u32,
    #[serde(rename = "hd-1366")]
    hd_1366: u32,
    fhd: u32,
    #[serde(rename = "xl+")]
    xl_plus: u32,
}

#[cfg(feature = "serde")]
impl From<Breakpoints> for BreakpointTable {
    fn from(breakpoints: Breakpoints) -> Self {
        let [sm, md, lg, xl, hd_1366, fhd, xl_plus] = breakpoints.starts;
        Self {
            sm,
            md,
            lg,
            xl,
            hd_1366,
            fhd,
            xl_plus,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BreakpointTable> for Breakpoints {
    type Error = ViewportError;

    fn try_from(table: BreakpointTable) -> Result<Self, Self::Error> {
        Breakpoints::new([
            table.sm,
            table.md,
            table.lg,
            table.xl,
            table.hd_1366,
            table.fhd,
            table.xl_plus,
        ])
    }
}
