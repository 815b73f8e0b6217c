//! The breakpoint table and the classifier that reads it.

use crate::metrics::ScreenMetrics;
use crate::profile::{DeviceType, LayoutProfile, Orientation};

/// Named width thresholds and maximum widths, in logical pixels.
///
/// A value of this type is the whole configuration surface of the crate:
/// an immutable value passed in explicitly wherever a non-canonical table
/// is wanted. [`Breakpoints::default`] carries the
/// canonical table; tests substitute individual thresholds with struct
/// update syntax.
///
/// Every threshold is an inclusive lower bound. A width exactly equal to a
/// breakpoint belongs to the larger tier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Width at or above which the device tier is tablet.
    pub tablet: f64,
    /// Width at or above which a tablet is large enough for a split
    /// list+detail layout.
    pub large_tablet: f64,
    /// Width at or above which horizontal arrangements are viable.
    pub wide_screen: f64,
    /// Width at or above which even wide layouts should re-stack.
    pub ultra_wide: f64,
    /// Cap applied to the primary content column on tablets.
    pub max_content_width: f64,
    /// Cap applied to modal dialogs on tablets.
    pub max_modal_width: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 768.0,
            large_tablet: 1024.0,
            wide_screen: 900.0,
            ultra_wide: 1600.0,
            max_content_width: 1200.0,
            max_modal_width: 600.0,
        }
    }
}

impl Breakpoints {
    /// Derive the full [`LayoutProfile`] for the given metrics.
    ///
    /// Total over positive, finite dimensions; never fails and holds no
    /// state between calls. Width and height are assumed positive and
    /// finite, which platform window metrics always are.
    #[must_use]
    pub fn classify(&self, metrics: impl Into<ScreenMetrics>) -> LayoutProfile {
        let ScreenMetrics { width, height } = metrics.into();
        debug_assert!(
            width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite(),
            "screen metrics must be positive and finite, got {width}x{height}"
        );

        let is_tablet = width >= self.tablet;
        let is_large_tablet = width >= self.large_tablet;
        // Strict comparison: a square display reads as portrait.
        let is_landscape = width > height;

        LayoutProfile {
            width,
            height,
            device_type: if is_tablet {
                DeviceType::Tablet
            } else {
                DeviceType::Phone
            },
            orientation: if is_landscape {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            },
            is_phone: !is_tablet,
            is_tablet,
            is_portrait: !is_landscape,
            is_landscape,
            is_wide_screen: width >= self.wide_screen,
            is_ultra_wide: width >= self.ultra_wide,
            columns: match (is_tablet, is_landscape) {
                (false, _) => 1,
                (true, true) => 3,
                (true, false) => 2,
            },
            card_columns: if is_tablet { 4 } else { 2 },
            max_content_width: if is_tablet {
                self.max_content_width
            } else {
                width
            },
            use_master_detail: is_large_tablet && is_landscape,
            spacing_multiplier: if is_tablet { 1.25 } else { 1.0 },
        }
    }
}

/// Classify against the canonical breakpoint table.
///
/// Shorthand for `Breakpoints::default().classify((width, height))`, which
/// is what nearly every screen wants.
#[must_use]
pub fn classify(width: f64, height: f64) -> LayoutProfile {
    Breakpoints::default().classify((width, height))
}
