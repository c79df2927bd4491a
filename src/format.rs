//! Cell-level layout rules: truncation and width-corrected padding.
//!
//! The aligner in this module counts characters, exactly like `format!`
//! does. To make a value occupy a given number of *display* columns, the
//! requested width is first corrected by the difference between the value's
//! display width and its character count (see [`corrected_width`]).
//!
//! Fill glyphs that weigh more than one column (`{:・<}`, `Row::line('＝')`)
//! are laid out by [`fill_run`], which repeats the glyph only as many times
//! as fit and closes any leftover column with a space.

use num_rational::Ratio;

use crate::cells::{AmbiguousWidth, WidthClass, char_len, display_width_with, round_half_even};
use crate::template::Alignment;
use crate::value::Value;

/// Default truncation marker.
pub const ELLIPSIS: char = '…';

/// A value cut to its column budget, with the display width it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text to emit.
    pub text: String,
    /// Columns the text takes in the layout.
    pub width: usize,
}

impl Cell {
    /// Pad the cell so that it occupies `width` display columns.
    #[must_use]
    pub fn pad(&self, align: Alignment, fill: char, width: usize, policy: AmbiguousWidth) -> String {
        pad_measured(&self.text, self.width, align, fill, width, policy)
    }
}

/// Fit a value into `width` display columns.
///
/// Only [`Value::Text`] is truncated; other values are returned in their
/// string form. A `width` of `None` or `0` means "no limit".
///
/// When the text is too wide, the result keeps its first
/// `min(width - 1, chars - 1)` characters followed by `ellipsis`. The marker
/// closes the column and counts as a single column when it is an ambiguous
/// glyph such as `…`, so an ASCII cell cut to `width` is exactly `width`
/// columns wide. The slice counts characters, so text with wide characters
/// near the cut may still measure wider than `width` afterwards.
#[must_use]
pub fn fit(value: &Value, width: Option<usize>, ellipsis: char, policy: AmbiguousWidth) -> Cell {
    let text = value.to_string();
    let natural = display_width_with(&text, policy);
    let budget = width.filter(|&width| width > 0);
    let Some(width) = budget.filter(|&width| value.is_text() && natural > width) else {
        return Cell {
            text,
            width: natural,
        };
    };

    let keep = (width - 1).min(char_len(&text).saturating_sub(1));
    let mut truncated: String = text.chars().take(keep).collect();
    let prefix_width = display_width_with(&truncated, policy);
    truncated.push(ellipsis);
    Cell {
        text: truncated,
        width: prefix_width + marker_width(ellipsis),
    }
}

/// Truncate a value to fit `width` display columns. See [`fit`].
#[must_use]
pub fn truncate(
    value: &Value,
    width: Option<usize>,
    ellipsis: char,
    policy: AmbiguousWidth,
) -> String {
    fit(value, width, ellipsis, policy).text
}

fn marker_width(ellipsis: char) -> usize {
    let mut buf = [0u8; 4];
    display_width_with(ellipsis.encode_utf8(&mut buf), AmbiguousWidth::Narrow)
}

/// Character-count width to hand to the aligner so that `text`, laid out
/// as `measured` display columns, fills `width` display columns.
///
/// This is `width - (measured - char_len(text))`, saturating at 0.
#[must_use]
pub fn corrected_width(text: &str, measured: usize, width: usize) -> usize {
    let correction = measured.saturating_sub(char_len(text));
    width.saturating_sub(correction)
}

fn split_pad(align: Alignment, pad: usize) -> (usize, usize) {
    match align {
        Alignment::Left => (0, pad),
        Alignment::Right => (pad, 0),
        Alignment::Center => (pad / 2, pad - pad / 2),
    }
}

/// Align `text` inside `width` characters, padding with `fill`.
///
/// Text that is already `width` characters or longer is returned unchanged.
/// Centered text puts the odd fill character on the right.
#[must_use]
pub fn align_chars(text: &str, align: Alignment, fill: char, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }

    let pad = width - len;
    let (left, right) = split_pad(align, pad);

    let mut out = String::with_capacity(text.len() + pad * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Pad `text` so that it occupies `width` display columns.
#[must_use]
pub fn pad_cell(
    text: &str,
    align: Alignment,
    fill: char,
    width: usize,
    policy: AmbiguousWidth,
) -> String {
    pad_measured(text, display_width_with(text, policy), align, fill, width, policy)
}

/// Pad `text`, already known to occupy `measured` columns, to `width`.
#[must_use]
pub fn pad_measured(
    text: &str,
    measured: usize,
    align: Alignment,
    fill: char,
    width: usize,
    policy: AmbiguousWidth,
) -> String {
    if !WidthClass::of(fill).is_full(policy) {
        return align_chars(text, align, fill, corrected_width(text, measured, width));
    }

    let (left, right) = split_pad(align, width.saturating_sub(measured));
    let mut out = fill_run(fill, left, policy);
    out.push_str(text);
    out.push_str(&fill_run(fill, right, policy));
    out
}

/// A run of `glyph` occupying exactly `width` display columns.
///
/// One-column glyphs are repeated `width` times. Wider glyphs are repeated
/// as often as fit and the remainder is filled with spaces.
#[must_use]
pub fn fill_run(glyph: char, width: usize, policy: AmbiguousWidth) -> String {
    let weight = WidthClass::of(glyph).weight(policy);
    if weight == Ratio::from_integer(1) {
        return std::iter::repeat_n(glyph, width).collect();
    }

    let target = u64::try_from(width).unwrap_or(u64::MAX);
    let columns = |count: u64| round_half_even(weight * count);
    let mut count = (Ratio::from_integer(target) / weight).to_integer();
    while columns(count + 1) <= target {
        count += 1;
    }
    let spaces = target.saturating_sub(columns(count));

    let mut out = String::new();
    out.extend(std::iter::repeat_n(glyph, usize::try_from(count).unwrap_or(0)));
    out.extend(std::iter::repeat_n(' ', usize::try_from(spaces).unwrap_or(0)));
    out
}
