/// Significant digits used when printing results.
pub const DEFAULT_PRECISION: usize = 15;

/// Renders `value` like C's `%.{precision}g`: fixed notation when the decimal
/// exponent lies in `[-4, precision)`, scientific (`1.5e+20`) otherwise, with
/// trailing zeros removed either way.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits first gives the exponent %g decides on.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_number(value, DEFAULT_PRECISION)
    }

    #[test]
    fn test_integers_and_short_fractions() {
        assert_eq!(fmt(14.0), "14");
        assert_eq!(fmt(-5.0), "-5");
        assert_eq!(fmt(3.14), "3.14");
        assert_eq!(fmt(6.28), "6.28");
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "-0");
    }

    #[test]
    fn test_rounds_to_significant_digits() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.0 / 3.0), "0.333333333333333");
        assert_eq!(fmt(std::f64::consts::PI), "3.14159265358979");
        assert_eq!(fmt(std::f64::consts::E), "2.71828182845905");
        assert_eq!(fmt(2.0 / 3.0 * 1000.0), "666.666666666667");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(fmt(1e20), "1e+20");
        assert_eq!(fmt(1.5e-7), "1.5e-07");
        assert_eq!(fmt(123456789012345678.0), "1.23456789012346e+17");
        assert_eq!(fmt(1e15), "1e+15");
        assert_eq!(fmt(1e14), "100000000000000");
        assert_eq!(fmt(0.0001), "0.0001");
        assert_eq!(fmt(0.00001), "1e-05");
        assert_eq!(fmt(1e-300), "1e-300");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(fmt(f64::NAN), "nan");
        assert_eq!(fmt(f64::INFINITY), "inf");
        assert_eq!(fmt(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(format_number(std::f64::consts::PI, 3), "3.14");
        assert_eq!(format_number(1234.5, 3), "1.23e+03");
        assert_eq!(format_number(0.5, 0), "0.5");
    }
}
