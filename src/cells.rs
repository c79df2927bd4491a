//! Display width of text in fixed-width terminal columns.
//!
//! Every character is assigned an East Asian [`WidthClass`]. Fullwidth, Wide
//! and (by default) Ambiguous characters weigh [`FULL_WIDTH`] columns, all
//! other characters weigh one. The width of a string is the exact sum of its
//! weights, rounded once to the nearest integer with ties going to the even
//! neighbour.
//!
//! ```
//! use monotable::cells::display_width;
//!
//! assert_eq!(display_width("abc"), 3);
//! assert_eq!(display_width("漢"), 2);
//! assert_eq!(display_width("漢字"), 3);
//! ```

use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use num_rational::Ratio;
use unicode_width::UnicodeWidthChar;

use crate::sync::lock_recover;

/// Column weight of a full-width character: 1.66667 columns.
pub const FULL_WIDTH: Ratio<u64> = Ratio::new_raw(166_667, 100_000);

/// Minimum string length (in bytes) to cache.
const CACHE_MIN_LEN: usize = 8;

/// Number of memoised widths kept per process.
const CACHE_CAPACITY: usize = 1024;

static WIDTH_CACHE: LazyLock<Mutex<LruCache<(AmbiguousWidth, String), usize>>> =
    LazyLock::new(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        ))
    });

// Subranges of EastAsianWidth.txt that unicode-width does not tell apart.
// Sorted and non-overlapping; searched with binary search.

static FULLWIDTH_RANGES: &[(char, char)] = &[
    ('\u{3000}', '\u{3000}'),
    ('\u{FF01}', '\u{FF60}'),
    ('\u{FFE0}', '\u{FFE6}'),
];

static HALFWIDTH_RANGES: &[(char, char)] = &[
    ('\u{20A9}', '\u{20A9}'),
    ('\u{FF61}', '\u{FFBE}'),
    ('\u{FFC2}', '\u{FFC7}'),
    ('\u{FFCA}', '\u{FFCF}'),
    ('\u{FFD2}', '\u{FFD7}'),
    ('\u{FFDA}', '\u{FFDC}'),
    ('\u{FFE8}', '\u{FFEE}'),
];

static NARROW_RANGES: &[(char, char)] = &[
    ('\u{0020}', '\u{007E}'),
    ('\u{00A2}', '\u{00A3}'),
    ('\u{00A5}', '\u{00A6}'),
    ('\u{00AC}', '\u{00AC}'),
    ('\u{00AF}', '\u{00AF}'),
    ('\u{27E6}', '\u{27ED}'),
    ('\u{2985}', '\u{2986}'),
];

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// East Asian width category of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// Compatibility full-width forms (`Ａ`, ideographic space).
    Fullwidth,
    /// Compatibility half-width forms (`ｱ`, `￦`).
    Halfwidth,
    /// Characters that are always wide (CJK ideographs, kana, emoji).
    Wide,
    /// Characters with a full-width counterpart (ASCII, `¢`, `¬`).
    Narrow,
    /// Characters outside East Asian typography.
    Neutral,
    /// Characters whose width depends on context (Greek, Cyrillic, `…`).
    Ambiguous,
}

impl WidthClass {
    /// Classify a character. Total: anything unclassified is [`Neutral`].
    ///
    /// [`Neutral`]: WidthClass::Neutral
    #[must_use]
    pub fn of(c: char) -> Self {
        if c.is_ascii() {
            return if in_ranges(c, NARROW_RANGES) {
                Self::Narrow
            } else {
                Self::Neutral
            };
        }
        if in_ranges(c, FULLWIDTH_RANGES) {
            return Self::Fullwidth;
        }
        if in_ranges(c, HALFWIDTH_RANGES) {
            return Self::Halfwidth;
        }
        if in_ranges(c, NARROW_RANGES) {
            return Self::Narrow;
        }
        match (c.width(), c.width_cjk()) {
            (Some(2), _) => Self::Wide,
            (Some(1), Some(2)) => Self::Ambiguous,
            _ => Self::Neutral,
        }
    }

    /// Whether this class weighs [`FULL_WIDTH`] under `policy`.
    #[must_use]
    pub fn is_full(self, policy: AmbiguousWidth) -> bool {
        match self {
            Self::Fullwidth | Self::Wide => true,
            Self::Ambiguous => policy == AmbiguousWidth::Wide,
            Self::Halfwidth | Self::Narrow | Self::Neutral => false,
        }
    }

    /// Exact column weight of one character of this class.
    #[must_use]
    pub fn weight(self, policy: AmbiguousWidth) -> Ratio<u64> {
        if self.is_full(policy) {
            FULL_WIDTH
        } else {
            Ratio::from_integer(1)
        }
    }
}

/// How characters of the [`WidthClass::Ambiguous`] class are weighed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AmbiguousWidth {
    /// Weigh ambiguous characters like wide ones.
    #[default]
    Wide,
    /// Weigh ambiguous characters like narrow ones.
    Narrow,
}

/// Round an exact rational to the nearest integer, ties to even.
#[must_use]
pub fn round_half_even(value: Ratio<u64>) -> u64 {
    let floor = value.floor().to_integer();
    match value.fract().cmp(&Ratio::new(1, 2)) {
        Ordering::Less => floor,
        Ordering::Greater => floor + 1,
        Ordering::Equal if floor % 2 == 0 => floor,
        Ordering::Equal => floor + 1,
    }
}

/// Number of characters (Unicode scalar values) in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Display width of `text` with the default [`AmbiguousWidth`] policy.
#[must_use]
pub fn display_width(text: &str) -> usize {
    display_width_with(text, AmbiguousWidth::default())
}

/// Display width of `text` under an explicit [`AmbiguousWidth`] policy.
///
/// Strings of 8 or more bytes are memoised in a process-wide LRU cache.
#[must_use]
pub fn display_width_with(text: &str, policy: AmbiguousWidth) -> usize {
    // Every ASCII character weighs exactly one column.
    if text.is_ascii() {
        return text.len();
    }

    if text.len() < CACHE_MIN_LEN {
        return compute_width(text, policy);
    }

    let key = (policy, text.to_string());
    if let Some(&cached) = lock_recover(&WIDTH_CACHE).get(&key) {
        return cached;
    }

    let width = compute_width(text, policy);
    lock_recover(&WIDTH_CACHE).put(key, width);
    width
}

fn compute_width(text: &str, policy: AmbiguousWidth) -> usize {
    let (mut full, mut single) = (0u64, 0u64);
    for c in text.chars() {
        if WidthClass::of(c).is_full(policy) {
            full += 1;
        } else {
            single += 1;
        }
    }
    let total = Ratio::from_integer(single) + FULL_WIDTH * full;
    usize::try_from(round_half_even(total)).unwrap_or(usize::MAX)
}

/// Whether any character of `text` weighs more than one column.
#[must_use]
pub fn has_wide_chars(text: &str, policy: AmbiguousWidth) -> bool {
    text.chars().any(|c| WidthClass::of(c).is_full(policy))
}
