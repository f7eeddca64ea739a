//! Human-friendly numeric text codec

pub mod format;
pub mod shorthand;
pub mod value;

pub use format::{format_compact, format_fixed, format_fixed2};
pub use shorthand::{parse_compact, parse_smart_input, Shorthand, Unit};
pub use value::{leading_float, NumericValue};
