/// Clamp a curve parameter into `[0, 1]`.
///
/// NaN maps to `0.0` so evaluation never propagates NaN from the parameter.
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
