use crate::units::error::UnitError;
use crate::units::types::ImperialHeight;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix accepted by a lenient parse.
    /// Examples: "180", "-1.5e3kg" -> "-1.5e3", ".5 cm" -> ".5", "Infinity"
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();

    /// A complete decimal literal with nothing around it
    static ref DECIMAL_LITERAL: Regex = Regex::new(
        r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$"
    ).unwrap();

    /// Imperial height as written by the toggle: "5 ft 11 in"
    static ref IMPERIAL_HEIGHT: Regex = Regex::new(
        r"^([0-9]+(?:\.[0-9]+)?)\s*ft\s*([0-9]+(?:\.[0-9]+)?)\s*in$"
    ).unwrap();
}

/// Whitespace a browser skips around numeric text: Unicode space separators,
/// line terminators and the byte order mark, but not U+0085
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse the leading number of `text` the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped and trailing garbage is ignored ("180cm" is
/// 180). Text with no numeric prefix yields NaN instead of an error.
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_js_whitespace);
    let prefix = match NUMERIC_PREFIX.find(trimmed) {
        Some(m) => m.as_str(),
        None => return f64::NAN,
    };

    match prefix.strip_prefix(['+', '-']).unwrap_or(prefix) {
        "Infinity" if prefix.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => prefix.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Parse `text` as a complete, finite number. `field` names the element in
/// the error.
pub fn parse_strict(field: &str, text: &str) -> Result<f64, UnitError> {
    let invalid = || UnitError::InvalidMeasurement {
        field: field.to_string(),
        text: text.to_string(),
    };

    let trimmed = text.trim_matches(is_js_whitespace);
    if !DECIMAL_LITERAL.is_match(trimmed) {
        return Err(invalid());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// Parse displayed imperial height text ("5 ft 11 in") back into its parts
pub fn parse_imperial_height(text: &str) -> Result<ImperialHeight, UnitError> {
    let invalid = || UnitError::InvalidImperialHeight(text.to_string());

    let captures = IMPERIAL_HEIGHT.captures(text.trim()).ok_or_else(invalid)?;
    let feet = captures[1].parse::<f64>().map_err(|_| invalid())?;
    let inches = captures[2].parse::<f64>().map_err(|_| invalid())?;

    Ok(ImperialHeight { feet, inches })
}
