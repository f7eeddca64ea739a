//! Numeric input coercion

/// A loosely typed numeric input: a number, some text, or nothing at all
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    Missing,
}

impl NumericValue {
    /// Coerce to a finite number.
    ///
    /// Text goes through `leading_float`. NaN, infinities, unparseable text
    /// and `Missing` all yield `None`.
    pub fn to_finite(&self) -> Option<f64> {
        let n = match self {
            NumericValue::Number(n) => *n,
            NumericValue::Text(s) => leading_float(s)?,
            NumericValue::Missing => return None,
        };
        n.is_finite().then_some(n)
    }
}

macro_rules! numeric_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericValue {
                fn from(n: $t) -> Self {
                    NumericValue::Number(n as f64)
                }
            }
        )*
    };
}

numeric_from!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for NumericValue {
    fn from(s: &str) -> Self {
        NumericValue::Text(s.to_string())
    }
}

impl From<String> for NumericValue {
    fn from(s: String) -> Self {
        NumericValue::Text(s)
    }
}

impl From<&String> for NumericValue {
    fn from(s: &String) -> Self {
        NumericValue::Text(s.clone())
    }
}

impl<T: Into<NumericValue>> From<Option<T>> for NumericValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NumericValue::Missing)
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped, then an optional sign, digits with an
/// optional fraction, and an optional exponent are consumed. Anything after
/// that is ignored, so `"12.5abc"` gives `12.5`. Returns `None` when no digit
/// is found.
pub fn leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
