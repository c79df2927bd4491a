//! # monotable
//!
//! Fixed-width text tables that stay aligned when cells contain wide
//! East Asian characters.
//!
//! Most string APIs count characters, but a terminal or chat client draws
//! `漢字` wider than `ab`. monotable measures every cell with a display width
//! model, then corrects the padding so that each column ends at the same
//! visual position.
//!
//! ## Quick Start
//!
//! ```rust
//! use monotable::prelude::*;
//!
//! let style = Style::new("{:<10}{:>5}")?;
//! let mut table = Table::new(style);
//! table
//!     .append(header!["Name", "Score"])?
//!     .append(data!["Alice", 10])?
//!     .append(data!["漢字", 5])?
//!     .append(Row::default_line())?;
//!
//! println!("{table}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Display width** ([`cells`]): columns occupied by a string.
//! - **Template** ([`template`]): literal text with `{:<}`-style placeholders.
//! - **Style** ([`style`]): compiled templates, explicit widths, truncation.
//! - **Row** ([`row`]): header, data, or separator line.
//! - **Table** ([`table`]): rows plus a style; computes widths and renders.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cells;
pub mod format;
pub mod logging;
pub mod row;
pub mod style;
pub mod sync;
pub mod table;
pub mod template;
pub mod value;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::cells::{AmbiguousWidth, WidthClass, display_width, display_width_with};
    pub use crate::row::{LineMode, Row, RowError};
    pub use crate::style::{Style, StyleBuilder, StyleError};
    pub use crate::table::{ComputedWidths, Table};
    pub use crate::template::{Alignment, Template, TemplateError};
    pub use crate::value::Value;
    pub use crate::{data, header};
}

// Re-export key types at crate root
pub use cells::{AmbiguousWidth, display_width};
pub use row::{Row, RowError};
pub use style::{Style, StyleError};
pub use table::Table;
pub use value::Value;
