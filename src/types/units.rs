//! Temperature unit conversion and the fixed-decimal formatting used by the display slots.

/// Converts a temperature in degrees Celsius to degrees Fahrenheit.
///
/// The result is not rounded; readers apply [`format_fixed`] when they display it.
///
/// # Examples
///
/// ```
/// use stormberry_dashboard::to_fahrenheit;
///
/// assert_eq!(to_fahrenheit(0.0), 32.0);
/// assert_eq!(to_fahrenheit(100.0), 212.0);
/// ```
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Converts a temperature in degrees Fahrenheit back to degrees Celsius.
///
/// Inverse of [`to_fahrenheit`].
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Formats `value` with exactly `decimals` digits after the decimal point.
///
/// Matches JavaScript's `Number.prototype.toFixed`: the exact binary value is
/// rounded to the nearest representable string, and an exact tie goes away
/// from zero (`20.25` gives `"20.3"`, `-3.25` gives `"-3.3"`). Negative zero
/// is shown as `"0.0"`.
///
/// # Examples
///
/// ```
/// use stormberry_dashboard::format_fixed;
///
/// assert_eq!(format_fixed(20.25, 1), "20.3");
/// assert_eq!(format_fixed(-0.0, 1), "0.0");
/// assert_eq!(format_fixed(1.005, 2), "1.00"); // 1.005 is stored as 1.00499...
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let magnitude = if is_decimal_tie(magnitude, decimals) {
        // One ulp above the tie rounds up without changing any other case.
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };
    format!("{}{:.*}", sign, decimals, magnitude)
}

/// `true` when finite, non-negative `magnitude` lies exactly halfway between two
/// multiples of `10^-decimals`, i.e. `magnitude * 2 * 10^decimals` is an odd integer.
fn is_decimal_tie(magnitude: f64, decimals: usize) -> bool {
    let bits = magnitude.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    // magnitude * 2 * 10^d = odd(mantissa) * 5^d * 2^(tz + exponent + d + 1); 5^d is odd.
    let twos = mantissa.trailing_zeros() as i64 + exponent + decimals as i64 + 1;
    twos == 0
}

/// Formats `value` with the shortest representation that round-trips
/// (`55.0` becomes `"55"`, `29.92` stays `"29.92"`).
pub fn format_plain(value: f64) -> String {
    value.to_string()
}
