/// Percentage of `target` reached by `current`, rounded to a whole number.
///
/// A zero, negative or non-finite target yields 0, and the result never drops
/// below 0. Values above 100 are kept so callers can tell how far a target was
/// overshot.
pub fn percentage(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }

    let ratio = (current / target * 100.0).round();
    // -0.0 + 0.0 normalizes to 0.0
    ratio.max(0.0) + 0.0
}
