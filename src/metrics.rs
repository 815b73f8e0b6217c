//! Display metrics and the boundary to whatever supplies them.

use dpi::LogicalSize;
use peniko::kurbo::Size;

use crate::breakpoints::Breakpoints;
use crate::profile::LayoutProfile;

/// A reading of the display's dimensions in logical pixels (if the OS
/// scales physical coordinates for high DPI displays, the scaling is
/// already applied).
///
/// Both dimensions are expected to be positive and finite. A value of this
/// type is a snapshot in time; nothing retains or updates one between
/// classifications.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenMetrics {
    pub width: f64,
    pub height: f64,
}

impl ScreenMetrics {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for ScreenMetrics {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl From<Size> for ScreenMetrics {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl From<ScreenMetrics> for Size {
    fn from(metrics: ScreenMetrics) -> Self {
        Size::new(metrics.width, metrics.height)
    }
}

impl From<LogicalSize<f64>> for ScreenMetrics {
    fn from(size: LogicalSize<f64>) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Read access to the current screen metrics, implemented by whatever owns
/// the window or display handle.
///
/// The source also owns change notification (resize and rotation events);
/// consumers call [`profile`](MetricsSource::profile) again whenever they
/// are notified. The classifier itself holds no subscriptions and no cached
/// profile, so the latest metrics always win.
pub trait MetricsSource {
    /// The metrics as of this call.
    fn current(&self) -> ScreenMetrics;

    /// Classify the current metrics against `breakpoints`.
    fn profile(&self, breakpoints: &Breakpoints) -> LayoutProfile {
        breakpoints.classify(self.current())
    }
}

#[cfg(test)]
mod tests {
    use dpi::LogicalSize;
    use peniko::kurbo::Size;

    use super::{MetricsSource, ScreenMetrics};
    use crate::breakpoints::Breakpoints;

    #[test]
    fn converts_from_the_common_size_types() {
        let expected = ScreenMetrics::new(1280.0, 720.0);
        assert_eq!(ScreenMetrics::from((1280.0, 720.0)), expected);
        assert_eq!(ScreenMetrics::from(Size::new(1280.0, 720.0)), expected);
        assert_eq!(
            ScreenMetrics::from(LogicalSize::new(1280.0, 720.0)),
            expected
        );
        assert_eq!(Size::from(expected), Size::new(1280.0, 720.0));
    }

    struct FixedSource(ScreenMetrics);

    impl MetricsSource for FixedSource {
        fn current(&self) -> ScreenMetrics {
            self.0
        }
    }

    #[test]
    fn source_profiles_its_current_metrics() {
        let source = FixedSource(ScreenMetrics::new(1366.0, 1024.0));
        let profile = source.profile(&Breakpoints::default());
        assert!(profile.is_tablet);
        assert!(profile.use_master_detail);
        assert_eq!(profile.width, 1366.0);
    }
}
