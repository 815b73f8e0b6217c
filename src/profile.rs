//! The classification output consumed by screens.

use std::fmt;

/// Coarse device tier, derived solely from width.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DeviceType {
    Phone,
    Tablet,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceType::Phone => f.write_str("phone"),
            DeviceType::Tablet => f.write_str("tablet"),
        }
    }
}

/// Which way the display is currently turned. An exact square counts as
/// portrait.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Every layout decision a screen needs, derived from one `(width, height)`
/// reading against a [`Breakpoints`](crate::Breakpoints) table.
///
/// Instances are a snapshot in time: nothing updates them when the window
/// resizes or the device rotates. Consumers re-classify on every metrics
/// change rather than holding a profile across it.
///
/// The boolean fields repeat information the enums already carry. Many
/// independent call sites branch on a single flag, so the flags are
/// precomputed here once instead of re-derived at each of them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutProfile {
    /// The width this profile was derived from, in logical pixels.
    pub width: f64,
    /// The height this profile was derived from, in logical pixels.
    pub height: f64,
    /// Coarse device tier.
    pub device_type: DeviceType,
    /// Portrait or landscape, by strict width/height comparison.
    pub orientation: Orientation,
    pub is_phone: bool,
    pub is_tablet: bool,
    pub is_portrait: bool,
    pub is_landscape: bool,
    /// Wide enough for horizontal arrangements.
    pub is_wide_screen: bool,
    /// Wide enough that even horizontal arrangements should re-stack.
    pub is_ultra_wide: bool,
    /// Number of list columns.
    pub columns: usize,
    /// Number of grid-card columns. A separate scale from [`columns`]:
    /// cards are narrower than list rows.
    ///
    /// [`columns`]: LayoutProfile::columns
    pub card_columns: usize,
    /// Cap applied to the primary content column. On phones this is the raw
    /// width; the screen itself is the limit.
    pub max_content_width: f64,
    /// Whether a split list+detail layout fits. Requires both the large
    /// tablet tier and landscape orientation.
    pub use_master_detail: bool,
    /// Scale factor applied to the base spacing unit.
    pub spacing_multiplier: f64,
}
