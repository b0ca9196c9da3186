//! Magnitude formatting for unit values.
//!
//! Precision follows the order of magnitude so that a value reads well
//! whatever unit it ended up in:
//!
//! | magnitude     | form                                   |
//! |---------------|----------------------------------------|
//! | `>= 10000`    | general, 6 significant digits          |
//! | `>= 100`      | no decimals                            |
//! | `>= 10`       | one decimal                            |
//! | `>= 1`        | two decimals                           |
//! | otherwise     | general, 2 significant digits          |
//!
//! "General" is the `printf` `%g` form, trailing zeros kept: fixed notation when the decimal
//! exponent lies in `[-4, precision)`, scientific (`1.50000e+06`) outside.

/// Format a magnitude with order-dependent precision.
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let abs = value.abs();
    if abs >= 10_000.0 {
        format_general(value, 6)
    } else if abs >= 100.0 {
        format!("{:.0}", value)
    } else if abs >= 10.0 {
        format!("{:.1}", value)
    } else if abs >= 1.0 {
        format!("{:.2}", value)
    } else {
        format_general(value, 2)
    }
}

/// Format a magnitude followed by a unit name. An empty name prints the
/// bare number.
pub fn format_with_unit(value: f64, unit_name: &str) -> String {
    let number = format_magnitude(value);
    if unit_name.is_empty() {
        number
    } else {
        format!("{} {}", number, unit_name)
    }
}

/// `%g` with `precision` significant digits.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    // Rust's `{:e}` rounds to the requested digits first, so the exponent
    // already accounts for carries like 9.99 -> 1.0e1.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..precision as i32).contains(&exponent) {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_bands() {
        assert_eq!(format_magnitude(4.0), "4.00");
        assert_eq!(format_magnitude(12.34), "12.3");
        assert_eq!(format_magnitude(123.4), "123");
        assert_eq!(format_magnitude(-7.5), "-7.50");
    }

    #[test]
    fn test_large_values_use_general_form() {
        assert_eq!(format_magnitude(12345.678), "12345.7");
        assert_eq!(format_magnitude(1_500_000.0), "1.50000e+06");
        assert_eq!(format_magnitude(-2.5e12), "-2.50000e+12");
    }

    #[test]
    fn test_small_values_use_two_significant_digits() {
        assert_eq!(format_magnitude(0.5), "0.50");
        assert_eq!(format_magnitude(0.0025), "0.0025");
        assert_eq!(format_magnitude(0.00999), "0.010");
        assert_eq!(format_magnitude(1e-5), "1.0e-05");
        assert_eq!(format_magnitude(0.0), "0.0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_magnitude(f64::NAN), "NaN");
        assert_eq!(format_magnitude(f64::INFINITY), "inf");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(format_with_unit(4.0, "cc^2"), "4.00 cc^2");
        assert_eq!(format_with_unit(0.5, ""), "0.50");
    }
}
