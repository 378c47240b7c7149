use std::fmt::Write as _;

/// Fractional digits used when a path is stringified without an explicit accuracy.
pub const DEFAULT_ACCURACY: u8 = 3;

/// Largest accuracy honoured; anything above is clamped so the scaled value fits an `i64`.
pub const MAX_ACCURACY: u8 = 9;

/// Appends `v` rounded to `accuracy` fractional digits.
///
/// Rounding is `Math.round(v * 10^n) / 10^n` (ties half-up, including for negatives); trailing
/// zeros are trimmed and a negative zero prints as `0`. Non-finite values print as `0`.
pub(crate) fn fmt_coord_into(out: &mut String, v: f64, accuracy: u8) {
    if !v.is_finite() {
        out.push('0');
        return;
    }

    let accuracy = accuracy.min(MAX_ACCURACY);
    let pow = 10u64.pow(u32::from(accuracy));
    let scaled = v * pow as f64;
    if scaled.abs() >= 9.0e15 {
        // Beyond exact integer range; the fractional digits are noise anyway.
        let _ = write!(out, "{}", v.round());
        return;
    }

    let k = (scaled + 0.5).floor() as i64;
    append_fixed_trimmed(out, k, accuracy, pow);
}

fn append_fixed_trimmed(out: &mut String, k: i64, accuracy: u8, pow: u64) {
    if k == 0 {
        out.push('0');
        return;
    }

    let abs = k.unsigned_abs();
    let int_part = abs / pow;
    let mut frac = abs % pow;

    if k.is_negative() {
        out.push('-');
    }
    let _ = write!(out, "{int_part}");

    if frac == 0 {
        return;
    }

    let mut digits = usize::from(accuracy);
    while frac % 10 == 0 {
        frac /= 10;
        digits -= 1;
    }
    let _ = write!(out, ".{frac:0digits$}");
}
