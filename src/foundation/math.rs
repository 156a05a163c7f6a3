/// Format `v` with exactly two decimals, the way the transform attribute is written.
///
/// Values that round to zero keep a leading `-` only when they are strictly negative, so an
/// exact `-0.0` renders as `0.00`.
pub(crate) fn fixed2(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.2}")
}

/// Clamp `v` into `[-limit, limit]`. A negative `limit` counts as its magnitude.
pub(crate) fn clamp_sym(v: f64, limit: f64) -> f64 {
    let limit = limit.abs();
    v.max(-limit).min(limit)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
