//! Row templates: literal text interleaved with column placeholders.
//!
//! A template is parsed once into a sequence of [`Token`]s and reused for
//! every row of a table. The placeholder syntax is a small subset of Rust's
//! `format!` specs:
//!
//! ```text
//! {}          column, default alignment
//! {:<}        left aligned
//! {:>}        right aligned
//! {:^}        centered
//! {:*^}       centered, padded with '*'
//! {:<10}      left aligned, at least 10 columns wide
//! {{ and }}   literal braces
//! ```
//!
//! # Example
//!
//! ```
//! use monotable::template::{Alignment, Template};
//!
//! let template = Template::parse("{:>}  {:<12}").unwrap();
//! assert_eq!(template.columns(), 2);
//!
//! let first = template.placeholders().next().unwrap();
//! assert_eq!(first.align, Some(Alignment::Right));
//! ```

use std::fmt;
use std::str::FromStr;

/// Error type for template parsing.
///
/// Positions are byte offsets into the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` without a closing `}`.
    UnmatchedOpen { position: usize },
    /// A `}` that closes nothing and is not escaped as `}}`.
    UnmatchedClose { position: usize },
    /// A placeholder whose contents are not a supported spec.
    InvalidSpec { position: usize, spec: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedOpen { position } => {
                write!(f, "unmatched '{{' at byte {position}")
            }
            Self::UnmatchedClose { position } => {
                write!(f, "unmatched '}}' at byte {position}")
            }
            Self::InvalidSpec { position, spec } => {
                write!(f, "invalid placeholder '{{{spec}}}' at byte {position}")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Horizontal alignment of a value inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
}

impl Alignment {
    /// Parse an alignment token.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }

    /// The token for this alignment.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Left => '<',
            Self::Right => '>',
            Self::Center => '^',
        }
    }
}

/// A column placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placeholder {
    /// Fill character; a space when absent.
    pub fill: Option<char>,
    /// Explicit alignment; the value's default when absent.
    pub align: Option<Alignment>,
    /// Minimum column width in display columns.
    pub min_width: Option<usize>,
}

impl Placeholder {
    fn parse(spec: &str, position: usize) -> Result<Self, TemplateError> {
        let invalid = || TemplateError::InvalidSpec {
            position,
            spec: spec.to_string(),
        };

        if spec.is_empty() {
            return Ok(Self::default());
        }
        // Field names and positional indices are not supported.
        let Some(format_spec) = spec.strip_prefix(':') else {
            return Err(invalid());
        };

        let mut placeholder = Self::default();
        let mut chars = format_spec.chars();
        let first = chars.next();
        let second = chars.next();
        let rest = match (first, second) {
            (Some(fill), Some(align)) if Alignment::from_char(align).is_some() => {
                placeholder.fill = Some(fill);
                placeholder.align = Alignment::from_char(align);
                chars.as_str()
            }
            (Some(align), _) if Alignment::from_char(align).is_some() => {
                placeholder.align = Alignment::from_char(align);
                &format_spec[align.len_utf8()..]
            }
            _ => format_spec,
        };

        if !rest.is_empty() {
            if !rest.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            placeholder.min_width = Some(rest.parse().map_err(|_| invalid())?);
        }

        Ok(placeholder)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if self.fill.is_some() || self.align.is_some() || self.min_width.is_some() {
            f.write_str(":")?;
        }
        if let Some(fill) = self.fill {
            write!(f, "{fill}")?;
        }
        if let Some(align) = self.align {
            write!(f, "{}", align.as_char())?;
        }
        if let Some(width) = self.min_width {
            write!(f, "{width}")?;
        }
        f.write_str("}")
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, with `{{`/`}}` already unescaped.
    Literal(String),
    /// A column.
    Placeholder(Placeholder),
}

/// A parsed row template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

impl Template {
    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unbalanced braces or unsupported
    /// placeholder contents.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, next)| next == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, next)| next == '}').is_some() => literal.push('}'),
                '{' => {
                    let start = position + 1;
                    let end = loop {
                        match chars.next() {
                            Some((end, '}')) => break end,
                            Some((_, '{')) | None => {
                                return Err(TemplateError::UnmatchedOpen { position });
                            }
                            Some(_) => {}
                        }
                    };
                    let placeholder = Placeholder::parse(&source[start..end], position)?;
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Placeholder(placeholder));
                }
                '}' => return Err(TemplateError::UnmatchedClose { position }),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// Number of placeholders, i.e. the column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.placeholders().count()
    }

    /// The parsed tokens in template order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The placeholders in column order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Placeholder(placeholder) => Some(placeholder),
            Token::Literal(_) => None,
        })
    }

    /// The template source as given.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(fill: Option<char>, align: Option<Alignment>, min_width: Option<usize>) -> Token {
        Token::Placeholder(Placeholder {
            fill,
            align,
            min_width,
        })
    }

    #[test]
    fn test_parse_plain_placeholders() {
        let template = Template::parse("{}{}").unwrap();
        assert_eq!(template.columns(), 2);
        assert_eq!(
            template.tokens(),
            &[placeholder(None, None, None), placeholder(None, None, None)]
        );
    }

    #[test]
    fn test_parse_alignments_and_literals() {
        let template = Template::parse("{:>}  {:<} | {:^}").unwrap();
        assert_eq!(
            template.tokens(),
            &[
                placeholder(None, Some(Alignment::Right), None),
                Token::Literal("  ".to_string()),
                placeholder(None, Some(Alignment::Left), None),
                Token::Literal(" | ".to_string()),
                placeholder(None, Some(Alignment::Center), None),
            ]
        );
    }

    #[test]
    fn test_parse_fill_and_width() {
        let template = Template::parse("{:*^10}{:<5}{:7}").unwrap();
        assert_eq!(
            template.tokens(),
            &[
                placeholder(Some('*'), Some(Alignment::Center), Some(10)),
                placeholder(None, Some(Alignment::Left), Some(5)),
                placeholder(None, None, Some(7)),
            ]
        );
    }

    #[test]
    fn test_parse_alignment_char_as_fill() {
        let template = Template::parse("{:<>}").unwrap();
        assert_eq!(
            template.tokens(),
            &[placeholder(Some('<'), Some(Alignment::Right), None)]
        );
    }

    #[test]
    fn test_parse_wide_fill() {
        let template = Template::parse("{:・<}").unwrap();
        assert_eq!(
            template.tokens(),
            &[placeholder(Some('・'), Some(Alignment::Left), None)]
        );
    }

    #[test]
    fn test_escaped_braces() {
        let template = Template::parse("{{{}}}").unwrap();
        assert_eq!(
            template.tokens(),
            &[
                Token::Literal("{".to_string()),
                placeholder(None, None, None),
                Token::Literal("}".to_string()),
            ]
        );
    }

    #[test]
    fn test_literal_only_template() {
        let template = Template::parse("no columns").unwrap();
        assert_eq!(template.columns(), 0);
        assert_eq!(template.tokens(), &[Token::Literal("no columns".to_string())]);
    }

    #[test]
    fn test_unmatched_open() {
        assert_eq!(
            Template::parse("ab{:<"),
            Err(TemplateError::UnmatchedOpen { position: 2 })
        );
        assert_eq!(
            Template::parse("{:<{}"),
            Err(TemplateError::UnmatchedOpen { position: 0 })
        );
    }

    #[test]
    fn test_unmatched_close() {
        assert_eq!(
            Template::parse("{} }"),
            Err(TemplateError::UnmatchedClose { position: 3 })
        );
    }

    #[test]
    fn test_invalid_specs() {
        for (source, spec) in [
            ("{0}", "0"),
            ("{name}", "name"),
            ("{:x}", ":x"),
            ("{:<5.2}", ":<5.2"),
            ("{:<-5}", ":<-5"),
        ] {
            assert_eq!(
                Template::parse(source),
                Err(TemplateError::InvalidSpec {
                    position: 0,
                    spec: spec.to_string()
                }),
                "{source}"
            );
        }
    }

    #[test]
    fn test_width_overflow_is_invalid() {
        let result = Template::parse("{:99999999999999999999999}");
        assert!(matches!(result, Err(TemplateError::InvalidSpec { .. })));
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::InvalidSpec {
            position: 4,
            spec: ":x".to_string(),
        };
        assert_eq!(err.to_string(), "invalid placeholder '{:x}' at byte 4");
        assert_eq!(
            TemplateError::UnmatchedOpen { position: 1 }.to_string(),
            "unmatched '{' at byte 1"
        );
    }

    #[test]
    fn test_placeholder_display_roundtrip() {
        let source = "{:*^10}{}{:>}";
        let template: Template = source.parse().unwrap();
        let rebuilt: String = template
            .placeholders()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rebuilt, source);
        assert_eq!(template.to_string(), source);
    }
}
