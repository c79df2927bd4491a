//! Table - rows laid out against shared column widths.
//!
//! A [`Table`] owns a [`Style`] and an ordered list of [`Row`]s. Rows are
//! appended one at a time; every render recomputes the column widths from
//! the rows present at that moment, so appending after a render is fine.
//!
//! # Column widths
//!
//! For each column the rendered width is the largest of:
//!
//! - the column's explicit width, if any;
//! - the minimum width written in the header or body placeholder;
//! - the display width of every header and data value in that column,
//!   measured after explicit-width truncation.
//!
//! # Example
//!
//! ```
//! use monotable::{data, header};
//! use monotable::row::Row;
//! use monotable::style::Style;
//! use monotable::table::Table;
//!
//! let mut table = Table::new(Style::new("{:<}  {:>}").unwrap());
//! table
//!     .append(header!["Name", "Score"])?
//!     .append(Row::gapped_line('-'))?
//!     .append(data!["Alice", 10])?
//!     .append(data!["Bob", 7])?;
//!
//! assert_eq!(
//!     table.render(),
//!     "Name   Score\n-----  -----\nAlice     10\nBob        7"
//! );
//! # Ok::<(), monotable::row::RowError>(())
//! ```

use std::fmt;
use std::ops::Deref;

use crate::row::{Row, RowError};
use crate::style::{ColumnWidths, Style};

/// Final per-column widths of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedWidths(ColumnWidths);

impl ComputedWidths {
    /// The widths as a slice, one entry per column.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for ComputedWidths {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A table of rows sharing one [`Style`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    style: Style,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            style,
            rows: Vec::new(),
        }
    }

    /// Append a row, returning the table for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::ColumnCount`] if a header or data row does not
    /// have exactly one value per column. The table is left unchanged.
    pub fn append(&mut self, row: Row) -> Result<&mut Self, RowError> {
        if row.is_content()
            && let Err(err) = self.style.check_row(row.values())
        {
            log::debug!("rejected row: {err}");
            return Err(err);
        }
        self.rows.push(row);
        Ok(self)
    }

    /// Append a row to an owned table.
    ///
    /// # Errors
    ///
    /// See [`Table::append`].
    pub fn with_row(mut self, row: Row) -> Result<Self, RowError> {
        self.append(row)?;
        Ok(self)
    }

    /// Append several rows. Either all rows are appended or none are.
    ///
    /// # Errors
    ///
    /// Returns the error of the first row that does not fit.
    pub fn extend_rows<I>(&mut self, rows: I) -> Result<&mut Self, RowError>
    where
        I: IntoIterator<Item = Row>,
    {
        let rows: Vec<Row> = rows.into_iter().collect();
        for row in rows.iter().filter(|row| row.is_content()) {
            self.style.check_row(row.values())?;
        }
        self.rows.extend(rows);
        Ok(self)
    }

    /// The table's style.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, separators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Compute the column widths for the current rows.
    #[must_use]
    pub fn compute_widths(&self) -> ComputedWidths {
        let mut widths = self.style.minimum_widths();
        for row in self.rows.iter().filter(|row| row.is_content()) {
            let measured = self.style.measure_row(row.values());
            for (width, natural) in widths.iter_mut().zip(measured) {
                *width = (*width).max(natural);
            }
        }
        log::trace!("computed column widths {:?}", widths.as_slice());
        ComputedWidths(widths)
    }

    /// Render the table as newline-separated lines without a trailing
    /// newline. An empty table renders as an empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let lines: Vec<String> = self
            .rows
            .iter()
            .map(|row| self.layout_row(row, &widths))
            .collect();
        lines.join("\n")
    }

    fn layout_row(&self, row: &Row, widths: &[usize]) -> String {
        match row {
            Row::Header(values) => self.style.layout_content(self.style.header(), values, widths),
            Row::Data(values) => self.style.layout_content(self.style.body(), values, widths),
            Row::Line { fill, mode } => self.style.format_line(*fill, *mode, widths),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
