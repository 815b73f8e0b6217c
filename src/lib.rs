//! # responsive-layout
//! Deterministic, cross-screen layout classification from raw display metrics.
//!
//! Screens in an application that runs on both handheld and desktop-class
//! displays all need the same handful of decisions made for them: how many
//! columns to render, whether to cap content width, whether a split
//! list+detail layout fits, how much to scale spacing. This crate derives
//! all of them in one place from the current `(width, height)` so
//! individual screens never re-implement breakpoint logic.
//!
//! ## Example
//! ```rust
//! use responsive_layout::{classify, select};
//!
//! let profile = classify(1366.0, 1024.0);
//!
//! assert!(profile.is_tablet);
//! assert!(profile.use_master_detail);
//! assert_eq!(profile.columns, 3);
//!
//! // Pick tier-specific values without re-deriving the tier test.
//! let font_size = select(profile.is_tablet, 14.0, 16.0);
//! assert_eq!(font_size, 16.0);
//! ```
//!
//! ## Recompute, don't cache
//! [`classify`] is a pure function of its inputs and the breakpoint table:
//! two calls with identical metrics return field-for-field identical
//! profiles. It is cheap enough to re-run on every read, so consumers
//! re-classify whenever their metrics source reports a resize or rotation
//! instead of holding on to a profile that could drift out of date.
//!
//! ## Custom thresholds
//! The canonical breakpoint table lives in [`Breakpoints::default`]. Tests
//! and special surfaces can inject their own:
//! ```rust
//! use responsive_layout::Breakpoints;
//!
//! let narrow = Breakpoints {
//!     tablet: 600.0,
//!     ..Breakpoints::default()
//! };
//! assert!(narrow.classify((640.0, 480.0)).is_tablet);
//! ```

pub mod breakpoints;
pub mod metrics;
pub mod profile;
pub mod select;

pub use breakpoints::{Breakpoints, classify};
pub use metrics::{MetricsSource, ScreenMetrics};
pub use peniko::kurbo;
pub use profile::{DeviceType, LayoutProfile, Orientation};
pub use select::select;

pub mod prelude {
    pub use crate::breakpoints::{Breakpoints, classify};
    pub use crate::metrics::{MetricsSource, ScreenMetrics};
    pub use crate::profile::{DeviceType, LayoutProfile, Orientation};
    pub use crate::select::select;
}
