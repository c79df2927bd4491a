//! Row styles: compiled templates plus per-column configuration.
//!
//! A [`Style`] turns rows of values into aligned lines of text. It holds:
//!
//! - a body template for data rows and a header template for header rows
//!   (the body template is reused when no header template is given);
//! - optional explicit widths, one per column, which truncate long text and
//!   act as a minimum column width;
//! - the [`AmbiguousWidth`] policy and the ellipsis glyph.
//!
//! Both templates are parsed once at construction. All configuration errors
//! surface there, before any row is formatted.
//!
//! # Example
//!
//! ```
//! use monotable::style::Style;
//! use monotable::value::Value;
//!
//! let style = Style::new("{:<}  {:>}").unwrap();
//! let line = style
//!     .format_body(&[Value::from("漢字"), Value::from(5)], &[6, 3])
//!     .unwrap();
//! assert_eq!(line, "漢字       5");
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::cells::{AmbiguousWidth, display_width_with};
use crate::format::{Cell, ELLIPSIS, fill_run, fit};
use crate::row::{LineMode, RowError};
use crate::template::{Template, TemplateError, Token};
use crate::value::Value;

/// Per-column width list; most tables have only a handful of columns.
pub type ColumnWidths = SmallVec<[usize; 8]>;

/// Configuration error raised while building a [`Style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The body template is malformed.
    BodyTemplate(TemplateError),
    /// The header template is malformed.
    HeaderTemplate(TemplateError),
    /// The body template has no placeholders.
    NoColumns,
    /// The explicit width list does not have one entry per column.
    WidthCount { expected: usize, found: usize },
    /// The header template has a different number of columns than the body.
    HeaderColumns { body: usize, header: usize },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyTemplate(err) => write!(f, "body template: {err}"),
            Self::HeaderTemplate(err) => write!(f, "header template: {err}"),
            Self::NoColumns => write!(f, "template has no column placeholders"),
            Self::WidthCount { expected, found } => write!(
                f,
                "{found} explicit width(s) given for {expected} column(s)"
            ),
            Self::HeaderColumns { body, header } => write!(
                f,
                "header template has {header} column(s) but body template has {body}"
            ),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BodyTemplate(err) | Self::HeaderTemplate(err) => Some(err),
            _ => None,
        }
    }
}

/// Builder for [`Style`].
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    body: String,
    header: Option<String>,
    widths: Option<Vec<Option<usize>>>,
    ambiguous: AmbiguousWidth,
    ellipsis: char,
}

impl StyleBuilder {
    /// Set the header template.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set explicit column widths; `None` leaves a column unconstrained.
    #[must_use]
    pub fn widths<I>(mut self, widths: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        self.widths = Some(widths.into_iter().collect());
        self
    }

    /// Set how ambiguous-width characters are measured.
    #[must_use]
    pub fn ambiguous_width(mut self, policy: AmbiguousWidth) -> Self {
        self.ambiguous = policy;
        self
    }

    /// Set the glyph appended to truncated text.
    #[must_use]
    pub fn ellipsis(mut self, ellipsis: char) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Compile the templates and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] if either template is malformed, the body
    /// template has no placeholders, the header template's column count
    /// differs from the body's, or the width list has the wrong length.
    pub fn build(self) -> Result<Style, StyleError> {
        let body = Template::parse(&self.body).map_err(StyleError::BodyTemplate)?;
        let columns = body.columns();
        if columns == 0 {
            return Err(StyleError::NoColumns);
        }

        let header = match &self.header {
            Some(source) => {
                let header = Template::parse(source).map_err(StyleError::HeaderTemplate)?;
                if header.columns() != columns {
                    return Err(StyleError::HeaderColumns {
                        body: columns,
                        header: header.columns(),
                    });
                }
                header
            }
            None => body.clone(),
        };

        let widths: SmallVec<[Option<usize>; 8]> = match self.widths {
            Some(widths) if widths.len() != columns => {
                return Err(StyleError::WidthCount {
                    expected: columns,
                    found: widths.len(),
                });
            }
            Some(widths) => widths.into_iter().collect(),
            None => std::iter::repeat_n(None, columns).collect(),
        };

        log::debug!(
            "compiled style {:?}: {} column(s), explicit widths {:?}",
            body.source(),
            columns,
            widths.as_slice()
        );

        Ok(Style {
            body,
            header,
            columns,
            widths,
            ambiguous: self.ambiguous,
            ellipsis: self.ellipsis,
        })
    }
}

/// A compiled row style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    body: Template,
    header: Template,
    columns: usize,
    widths: SmallVec<[Option<usize>; 8]>,
    ambiguous: AmbiguousWidth,
    ellipsis: char,
}

impl Style {
    /// Compile a style whose header rows share the body template.
    ///
    /// # Errors
    ///
    /// See [`StyleBuilder::build`].
    pub fn new(body: &str) -> Result<Self, StyleError> {
        Self::builder(body).build()
    }

    /// Compile a style with a separate header template.
    ///
    /// # Errors
    ///
    /// See [`StyleBuilder::build`].
    pub fn with_header(body: &str, header: &str) -> Result<Self, StyleError> {
        Self::builder(body).header(header).build()
    }

    /// Start configuring a style.
    #[must_use]
    pub fn builder(body: impl Into<String>) -> StyleBuilder {
        StyleBuilder {
            body: body.into(),
            header: None,
            widths: None,
            ambiguous: AmbiguousWidth::default(),
            ellipsis: ELLIPSIS,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Explicit width of each column.
    #[must_use]
    pub fn widths(&self) -> &[Option<usize>] {
        &self.widths
    }

    /// The body template.
    #[must_use]
    pub fn body(&self) -> &Template {
        &self.body
    }

    /// The header template.
    #[must_use]
    pub fn header(&self) -> &Template {
        &self.header
    }

    /// How ambiguous-width characters are measured.
    #[must_use]
    pub fn ambiguous_width(&self) -> AmbiguousWidth {
        self.ambiguous
    }

    /// The glyph appended to truncated text.
    #[must_use]
    pub fn ellipsis(&self) -> char {
        self.ellipsis
    }

    /// Display width of `text` under this style's policy.
    #[must_use]
    pub fn measure_text(&self, text: &str) -> usize {
        display_width_with(text, self.ambiguous)
    }

    /// Lower bound for each column's width before any row is measured:
    /// the explicit width or the larger template minimum, whichever is wider.
    #[must_use]
    pub fn minimum_widths(&self) -> ColumnWidths {
        let body = self.body.placeholders();
        let header = self.header.placeholders();
        self.widths
            .iter()
            .zip(body.zip(header))
            .map(|(explicit, (body, header))| {
                explicit
                    .unwrap_or(0)
                    .max(body.min_width.unwrap_or(0))
                    .max(header.min_width.unwrap_or(0))
            })
            .collect()
    }

    /// Fit each value to its column's explicit width.
    #[must_use]
    pub fn fit_row(&self, values: &[Value]) -> Vec<Cell> {
        values
            .iter()
            .zip(self.widths.iter())
            .map(|(value, &width)| fit(value, width, self.ellipsis, self.ambiguous))
            .collect()
    }

    /// Display width of each value after truncation. A value cut to an
    /// explicit width `w` measures `w`, unless wide characters before the
    /// ellipsis already overflow it.
    #[must_use]
    pub fn measure_row(&self, values: &[Value]) -> ColumnWidths {
        self.fit_row(values).iter().map(|cell| cell.width).collect()
    }

    /// Format a header row against the given column widths.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::ColumnCount`] if `values` does not have one
    /// entry per column.
    pub fn format_header(&self, values: &[Value], widths: &[usize]) -> Result<String, RowError> {
        self.check_row(values)?;
        Ok(self.layout_content(&self.header, values, widths))
    }

    /// Format a data row against the given column widths.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::ColumnCount`] if `values` does not have one
    /// entry per column.
    pub fn format_body(&self, values: &[Value], widths: &[usize]) -> Result<String, RowError> {
        self.check_row(values)?;
        Ok(self.layout_content(&self.body, values, widths))
    }

    /// Format a separator line shaped like the header row.
    #[must_use]
    pub fn format_line(&self, fill: char, mode: LineMode, widths: &[usize]) -> String {
        let mut out = String::new();
        let mut column = 0;
        for token in self.header.tokens() {
            match token {
                Token::Literal(text) => match mode {
                    LineMode::Full => {
                        let width = self.measure_text(text);
                        out.push_str(&fill_run(fill, width, self.ambiguous));
                    }
                    LineMode::Gapped => out.push_str(text),
                },
                Token::Placeholder(_) => {
                    let width = widths.get(column).copied().unwrap_or(0);
                    out.push_str(&fill_run(fill, width, self.ambiguous));
                    column += 1;
                }
            }
        }
        out
    }

    /// Check that a content row has one value per column.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::ColumnCount`] on a mismatch.
    pub fn check_row(&self, values: &[Value]) -> Result<(), RowError> {
        if values.len() == self.columns {
            Ok(())
        } else {
            Err(RowError::ColumnCount {
                expected: self.columns,
                found: values.len(),
            })
        }
    }

    /// Lay out a row whose length has already been checked. Missing widths
    /// count as zero.
    pub(crate) fn layout_content(
        &self,
        template: &Template,
        values: &[Value],
        widths: &[usize],
    ) -> String {
        let cells = self.fit_row(values);
        let mut out = String::new();
        let mut column = 0;
        for token in template.tokens() {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Placeholder(placeholder) => {
                    let (Some(value), Some(cell)) = (values.get(column), cells.get(column)) else {
                        break;
                    };
                    let align = placeholder
                        .align
                        .unwrap_or_else(|| value.default_alignment());
                    let fill = placeholder.fill.unwrap_or(' ');
                    let width = widths.get(column).copied().unwrap_or(0);
                    out.push_str(&cell.pad(align, fill, width, self.ambiguous));
                    column += 1;
                }
            }
        }
        out
    }
}
