//! Cell values.
//!
//! A [`Value`] remembers whether it was constructed from text or from a
//! number. Only text is ever truncated; numbers are stringified as-is and
//! align right unless their placeholder says otherwise.
//!
//! Input read as strings (for example a TSV file) can keep its exact text
//! while still aligning like a number through [`Value::infer`].

use std::fmt;

use crate::template::Alignment;

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Textual content, eligible for truncation.
    Text(String),
    /// An integer.
    Int(i128),
    /// A floating point number.
    Float(f64),
    /// A number kept in its source form (`007`, `1.50`, `+5`).
    Numeric(String),
}

impl Value {
    /// Create a text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a number that prints exactly as `text`.
    pub fn numeric(text: impl Into<String>) -> Self {
        Self::Numeric(text.into())
    }

    /// Classify raw input: integers and finite decimals become
    /// [`Value::Numeric`] with their text untouched, anything else is text.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        if looks_numeric(raw) {
            Self::numeric(raw)
        } else {
            Self::text(raw)
        }
    }

    /// Whether this value is text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Alignment used when the placeholder does not specify one.
    #[must_use]
    pub const fn default_alignment(&self) -> Alignment {
        match self {
            Self::Text(_) => Alignment::Left,
            Self::Int(_) | Self::Float(_) | Self::Numeric(_) => Alignment::Right,
        }
    }
}

fn looks_numeric(raw: &str) -> bool {
    if raw.parse::<i128>().is_ok() {
        return true;
    }
    let plain = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    plain && raw.parse::<f64>().is_ok_and(f64::is_finite)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            // Whole floats keep a fractional part: 1.0, not 1.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
            Self::Numeric(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
