/// Pick between two tier-specific values with a single boolean branch.
///
/// Returns `large` when `is_large_tier` is true, `small` otherwise. The
/// chosen argument is moved out as-is rather than copied, so selecting
/// between references or shared pointers preserves identity. Style values
/// reused across renders come back as the same value, not a rebuilt one.
///
/// ```rust
/// use responsive_layout::{classify, select};
///
/// let profile = classify(1024.0, 768.0);
/// let padding = select(profile.is_tablet, 12.0, 20.0);
/// assert_eq!(padding, 20.0);
/// ```
#[must_use]
pub fn select<T>(is_large_tier: bool, small: T, large: T) -> T {
    if is_large_tier { large } else { small }
}
