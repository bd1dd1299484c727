/// Magnitudes below this are rounding residue and render as zero.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Formats a floating-point value as a plain decimal string.
///
/// Integral values keep a trailing `.0` (`1.0`, not `1`) so that ratio and
/// charge columns never look like integer columns. Other values use the
/// shortest representation that round-trips. Values within
/// [`ZERO_TOLERANCE`] of zero, including `-0.0`, print as `0.0`.
pub fn format_decimal(value: f64) -> String {
    let value = if value.abs() < ZERO_TOLERANCE { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Renders an optional value, substituting `marker` when it is absent.
pub fn render_or<T: ToString>(value: Option<T>, marker: &str) -> String {
    value.map_or_else(|| marker.to_string(), |v| v.to_string())
}
