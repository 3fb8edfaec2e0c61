use crate::units::types::ImperialHeight;

/// Fractional digits needed to print any f64 exactly (2^-1074 has 1074)
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Most fractional digits `toFixed` accepts
pub const MAX_FIXED_DIGITS: usize = 100;

/// Magnitude at which browsers switch number text to exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format a number the way a browser renders it as text (`String(n)`).
///
/// Integers print without a fraction ("180"), other values use the shortest
/// digits that round-trip. Very large and very small magnitudes use the
/// "1e+21" / "1e-7" exponent form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 too
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_THRESHOLD || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}

/// Format with exactly `digits` fractional digits, rounding half up on the
/// exact binary value (`Number.prototype.toFixed`). `digits` is capped at
/// `MAX_FIXED_DIGITS`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FIXED_DIGITS);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        return format_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = fraction.as_bytes().get(digits).is_some_and(|&b| b >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let split = kept.len() - digits;
    let to_text = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();

    let mut result = String::new();
    if value < 0.0 {
        result.push('-');
    }
    result.push_str(&to_text(&kept[..split]));
    if digits > 0 {
        result.push('.');
        result.push_str(&to_text(&kept[split..]));
    }
    result
}

/// Height text as shown in imperial mode: "5 ft 11 in"
pub fn format_imperial_height(height: &ImperialHeight) -> String {
    format!(
        "{} ft {} in",
        format_number(height.feet),
        format_number(height.inches)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integers_and_fractions() {
        assert_eq!(format_number(180.0), "180");
        assert_eq!(format_number(80.5), "80.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_number_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(176.3696, 2), "176.37");
        assert_eq!(to_fixed(80.0, 2), "80.00");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(99.999, 2), "100.00");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-1.005, 2), "-1.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_to_fixed_rounds_exact_ties_up() {
        // Both are exact in binary; half-even would give "0.12" for the first
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_to_fixed_caps_digits() {
        let text = to_fixed(1.5, 1100);
        assert_eq!(text, to_fixed(1.5, MAX_FIXED_DIGITS));
        assert_eq!(text.len(), 2 + MAX_FIXED_DIGITS);
        assert!(text.starts_with("1.50"));
        assert!(text.ends_with('0'));

        let text = to_fixed(0.1, usize::MAX);
        assert_eq!(text.len(), 2 + MAX_FIXED_DIGITS);
        assert!(text.starts_with("0.1000000000000000055511"));
    }

    #[test]
    fn test_to_fixed_special_values() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(1e21, 2), "1e+21");
    }

    #[test]
    fn test_format_imperial_height() {
        let height = ImperialHeight {
            feet: 5.0,
            inches: 11.0,
        };
        assert_eq!(format_imperial_height(&height), "5 ft 11 in");

        let height = ImperialHeight {
            feet: f64::NAN,
            inches: f64::NAN,
        };
        assert_eq!(format_imperial_height(&height), "NaN ft NaN in");
    }
}
