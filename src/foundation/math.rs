/// Clamp into `[0, 1]`. NaN maps to 0.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation that returns `a` and `b` bit-for-bit at the ends of the range.
///
/// `a + (b - a) * 1.0` is not always `b` in floating point; consumers compare endpoint
/// output for equality, so the ends short-circuit.
pub fn lerp_exact(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        lerp(a, b, t)
    }
}

/// Map `t` from the window `[lo, hi]` onto `[0, 1]`, clamped.
///
/// A degenerate window acts as a step at `lo`.
pub fn remap_window(t: f64, lo: f64, hi: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let span = hi - lo;
    if span <= f64::EPSILON {
        return if t >= lo { 1.0 } else { 0.0 };
    }
    clamp01((t - lo) / span)
}

/// Format a coordinate for outline text: integers verbatim, otherwise rounded to 6 decimals.
pub fn format_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let r = (v * 1e6).round() / 1e6;
    // Collapse -0 so output stays stable.
    let r = if r == 0.0 { 0.0 } else { r };
    if r.fract() == 0.0 && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
