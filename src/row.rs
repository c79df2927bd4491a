//! Table rows.
//!
//! A [`Row`] is either content (a header or data row carrying one
//! [`Value`] per column) or a separator line drawn with a single glyph.
//!
//! ```
//! use monotable::{data, header};
//! use monotable::row::Row;
//!
//! let rows = [
//!     header!["Name", "Score"],
//!     Row::default_line(),
//!     data!["Alice", 10],
//! ];
//! assert_eq!(rows[2].values().len(), 2);
//! ```

use std::fmt;

use crate::value::Value;

/// Glyph used by [`Row::default_line`].
pub const DEFAULT_LINE_FILL: char = '-';

/// How a separator line treats the literal text between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Every character of the row is replaced by the glyph.
    #[default]
    Full,
    /// Literal segments are kept; only column regions are filled.
    Gapped,
}

/// A row of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Rendered with the header template.
    Header(Vec<Value>),
    /// Rendered with the body template.
    Data(Vec<Value>),
    /// A separator drawn with `fill`, shaped like the header template.
    Line { fill: char, mode: LineMode },
}

impl Row {
    /// Create a header row.
    pub fn header<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Header(values.into_iter().map(Into::into).collect())
    }

    /// Create a data row.
    pub fn data<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Data(values.into_iter().map(Into::into).collect())
    }

    /// Create a separator that replaces the whole row with `fill`.
    #[must_use]
    pub const fn line(fill: char) -> Self {
        Self::Line {
            fill,
            mode: LineMode::Full,
        }
    }

    /// Create a separator that keeps the literal text between columns.
    #[must_use]
    pub const fn gapped_line(fill: char) -> Self {
        Self::Line {
            fill,
            mode: LineMode::Gapped,
        }
    }

    /// A full separator drawn with `-`.
    #[must_use]
    pub const fn default_line() -> Self {
        Self::line(DEFAULT_LINE_FILL)
    }

    /// The row's values; empty for separators.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Header(values) | Self::Data(values) => values,
            Self::Line { .. } => &[],
        }
    }

    /// Whether the row carries values that take part in width computation.
    #[must_use]
    pub const fn is_content(&self) -> bool {
        matches!(self, Self::Header(_) | Self::Data(_))
    }
}

/// Error raised when a row does not fit its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// A content row supplied the wrong number of values.
    ColumnCount { expected: usize, found: usize },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnCount { expected, found } => write!(
                f,
                "row has {found} value(s) but the table has {expected} column(s)"
            ),
        }
    }
}

impl std::error::Error for RowError {}

/// Build a [`Row::Header`] from heterogeneous values.
///
/// ```
/// let row = monotable::header!["Name", "Score"];
/// assert!(row.is_content());
/// ```
#[macro_export]
macro_rules! header {
    ($($value:expr),* $(,)?) => {
        $crate::row::Row::Header(vec![$($crate::value::Value::from($value)),*])
    };
}

/// Build a [`Row::Data`] from heterogeneous values.
///
/// ```
/// use monotable::value::Value;
///
/// let row = monotable::data!["Alice", 10, 2.5];
/// assert_eq!(row.values()[1], Value::Int(10));
/// ```
#[macro_export]
macro_rules! data {
    ($($value:expr),* $(,)?) => {
        $crate::row::Row::Data(vec![$($crate::value::Value::from($value)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let header = Row::header(["a", "b"]);
        assert_eq!(header, Row::Header(vec![Value::text("a"), Value::text("b")]));

        let data = Row::data([1, 2, 3]);
        assert_eq!(data.values(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_macros_mix_types() {
        let row = data!["Alice", 10, 1.5, 'x'];
        assert_eq!(
            row,
            Row::Data(vec![
                Value::text("Alice"),
                Value::Int(10),
                Value::Float(1.5),
                Value::text("x"),
            ])
        );
        assert_eq!(header!["Name",], Row::Header(vec![Value::text("Name")]));
        assert_eq!(data![], Row::Data(vec![]));
    }

    #[test]
    fn test_lines() {
        assert_eq!(
            Row::default_line(),
            Row::Line {
                fill: '-',
                mode: LineMode::Full
            }
        );
        assert_eq!(
            Row::gapped_line('='),
            Row::Line {
                fill: '=',
                mode: LineMode::Gapped
            }
        );
        assert!(Row::line('=').values().is_empty());
    }

    #[test]
    fn test_is_content() {
        assert!(header!["a"].is_content());
        assert!(data!["a"].is_content());
        assert!(!Row::default_line().is_content());
    }

    #[test]
    fn test_row_error_display() {
        let err = RowError::ColumnCount {
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "row has 3 value(s) but the table has 2 column(s)"
        );
    }
}
