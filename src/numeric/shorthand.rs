//! Tolerant parsing of human-entered numeric shorthand
//!
//! Grammar, applied to the trimmed and lowercased input:
//!
//! ```text
//! input    := "max" | percent | scaled
//! percent  := <leading float> "%"
//! scaled   := sign? mantissa unit?
//! mantissa := digits ("." digits?)? | "." digits
//! unit     := "k" | "m" | "b" | "t"
//! ```
//!
//! Text that does not match `scaled` falls back to a leading-float scan,
//! so `"1e3"` is 1000 and `"12 apples"` is 12.

use super::value::{leading_float, NumericValue};
use crate::constants::{BILLION, MILLION, THOUSAND, TRILLION};
use crate::error::{DesklineError, Result};
use log::trace;

/// Multiplier letter following a mantissa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Unit {
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Unit::Thousand),
            'm' => Some(Unit::Million),
            'b' => Some(Unit::Billion),
            't' => Some(Unit::Trillion),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Unit::Thousand => THOUSAND,
            Unit::Million => MILLION,
            Unit::Billion => BILLION,
            Unit::Trillion => TRILLION,
        }
    }
}

/// A recognised shorthand literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shorthand {
    /// The `max` sentinel, meaning the whole context value
    Max,
    /// A percentage of the context value
    Percent(f64),
    /// A plain number with an optional unit multiplier
    Scaled { mantissa: f64, unit: Option<Unit> },
}

impl Shorthand {
    /// Strictly parse shorthand text.
    ///
    /// Text outside the grammar is an `InvalidShorthand` error; use
    /// `parse_smart_input` for the permissive behaviour.
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = text.trim().to_lowercase();

        if normalized == "max" {
            return Ok(Shorthand::Max);
        }

        if let Some(numerator) = normalized.strip_suffix('%') {
            return leading_float(numerator)
                .map(Shorthand::Percent)
                .ok_or_else(|| {
                    DesklineError::InvalidShorthand(format!("bad percentage '{}'", text.trim()))
                });
        }

        tokenize_scaled(&normalized)
    }

    /// Numeric value of the literal relative to an optional context value
    pub fn evaluate(&self, context: Option<f64>) -> f64 {
        match *self {
            Shorthand::Max => context.unwrap_or(0.0),
            Shorthand::Percent(pct) => context.unwrap_or(0.0) * pct / 100.0,
            Shorthand::Scaled { mantissa, unit } => {
                mantissa * unit.map(|u| u.multiplier()).unwrap_or(1.0)
            }
        }
    }
}

fn tokenize_scaled(input: &str) -> Result<Shorthand> {
    let invalid = || DesklineError::InvalidShorthand(input.to_string());
    let bytes = input.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = pos - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return Err(invalid());
    }

    let mantissa_end = pos;
    let unit = match input[pos..].chars().next() {
        None => None,
        Some(c) => {
            let unit = Unit::from_letter(c).ok_or_else(invalid)?;
            pos += c.len_utf8();
            Some(unit)
        }
    };

    if pos != input.len() {
        return Err(invalid());
    }

    let mantissa = input[..mantissa_end].parse::<f64>().map_err(|_| invalid())?;
    Ok(Shorthand::Scaled { mantissa, unit })
}

/// Parse shorthand such as `10k`, `1.5M`, `50%` or `max`.
///
/// Numbers pass through unchanged. `max` and percentages are taken
/// relative to `context`, which counts as zero when absent. Text the grammar
/// rejects falls back to its leading float, and anything unparseable is 0.
pub fn parse_smart_input(input: impl Into<NumericValue>, context: Option<f64>) -> f64 {
    let text = match input.into() {
        NumericValue::Number(n) => return n,
        NumericValue::Missing => return 0.0,
        NumericValue::Text(text) => text,
    };

    if text.is_empty() {
        return 0.0;
    }

    match Shorthand::parse(&text) {
        Ok(shorthand) => shorthand.evaluate(context),
        Err(DesklineError::InvalidShorthand(_)) if text.trim().ends_with('%') => 0.0,
        Err(e) => {
            trace!("{}, falling back to float scan", e);
            leading_float(text.trim()).unwrap_or(0.0)
        }
    }
}

/// `parse_smart_input` without a context value
pub fn parse_compact(input: impl Into<NumericValue>) -> f64 {
    parse_smart_input(input, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(Unit::from_letter('K'), Some(Unit::Thousand));
        assert_eq!(Unit::from_letter('t'), Some(Unit::Trillion));
        assert_eq!(Unit::from_letter('x'), None);
        assert_eq!(Unit::Billion.multiplier(), 1e9);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(Shorthand::parse(" MAX ").unwrap(), Shorthand::Max);
        assert_eq!(Shorthand::parse("25%").unwrap(), Shorthand::Percent(25.0));
        assert_eq!(
            Shorthand::parse("-2.5k").unwrap(),
            Shorthand::Scaled { mantissa: -2.5, unit: Some(Unit::Thousand) }
        );
        assert_eq!(
            Shorthand::parse(".5").unwrap(),
            Shorthand::Scaled { mantissa: 0.5, unit: None }
        );
        assert_eq!(
            Shorthand::parse("3.").unwrap(),
            Shorthand::Scaled { mantissa: 3.0, unit: None }
        );
    }

    #[test]
    fn test_strict_parse_rejects() {
        for text in ["", "k", "-", ".", "1kk", "10 k", "1e3", "abc", "1.2.3", "%", "x%"] {
            assert!(Shorthand::parse(text).is_err(), "expected '{}' to be rejected", text);
        }
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(Shorthand::Max.evaluate(Some(77.0)), 77.0);
        assert_eq!(Shorthand::Max.evaluate(None), 0.0);
        assert_eq!(Shorthand::Percent(50.0).evaluate(Some(200.0)), 100.0);
        assert_eq!(Shorthand::Percent(50.0).evaluate(None), 0.0);
    }

    #[test]
    fn test_smart_input_fallbacks() {
        assert_eq!(parse_smart_input("1e3", None), 1000.0);
        assert_eq!(parse_smart_input("12 apples", None), 12.0);
        assert_eq!(parse_smart_input("10 k", None), 10.0);
        assert_eq!(parse_smart_input("abc", None), 0.0);
        assert_eq!(parse_smart_input("abc%", Some(100.0)), 0.0);
        assert_eq!(parse_smart_input("   ", None), 0.0);
    }

    #[test]
    fn test_smart_input_passthrough() {
        assert_eq!(parse_smart_input(42.5, Some(1.0)), 42.5);
        assert_eq!(parse_smart_input(None::<&str>, Some(1.0)), 0.0);
    }
}
