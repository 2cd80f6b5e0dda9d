//! Insert spaces between CJK and adjacent non-CJK text.
//!
//! Each character is classified by point queries against two interval trees,
//! one built from the CJK codepoint ranges and one from punctuation and
//! whitespace ranges. A single space is placed between two adjacent
//! characters when exactly one of them is CJK and neither is punctuation:
//!
//! ```
//! assert_eq!(cjkspace::add_spaces("使用Rust编写"), "使用 Rust 编写");
//! assert_eq!(cjkspace::add_spaces("你好，world"), "你好，world");
//! ```

use std::sync::OnceLock;

use crate::{Error, IntervalTree};

/// Codepoint ranges treated as CJK text.
pub const CJK_RANGES: &[(char, char)] = &[
    ('\u{3040}', '\u{309F}'), // Hiragana
    ('\u{30A0}', '\u{30FF}'), // Katakana
    ('\u{3400}', '\u{4DB5}'), // CJK Unified Ideographs Extension A
    ('\u{4E00}', '\u{9FEF}'), // CJK Unified Ideographs
    ('\u{F900}', '\u{FAFF}'), // CJK Compatibility Ideographs
    ('\u{20000}', '\u{2A6D6}'), // CJK Unified Ideographs Extension B
    ('\u{2A700}', '\u{2B734}'), // CJK Unified Ideographs Extension C
    ('\u{2B740}', '\u{2B81D}'), // CJK Unified Ideographs Extension D
    ('\u{2B820}', '\u{2CEA1}'), // CJK Unified Ideographs Extension E
    ('\u{2CEB0}', '\u{2EBE0}'), // CJK Unified Ideographs Extension F
    ('\u{2F800}', '\u{2FA1F}'), // CJK Compatibility Ideographs Supplement
];

/// Codepoint ranges next to which no space is ever inserted.
pub const PUNCT_RANGES: &[(char, char)] = &[
    ('\u{0000}', '\u{0020}'), // Control characters and space
    ('<', '<'),
    ('>', '>'),
    ('\u{3000}', '\u{303F}'), // CJK Symbols and Punctuation
    ('\u{FF00}', '\u{FFEF}'), // Halfwidth and Fullwidth Forms
    ('\u{200D}', '\u{200D}'), // Zero width joiner
    ('\u{FE0E}', '\u{FE0F}'), // Variation selectors 15 and 16
];

/// The categories a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClass {
    pub cjk: bool,
    pub punct: bool,
}

impl CharClass {
    /// Returns true if a space belongs between a character of class `self`
    /// and a following character of class `next`.
    pub fn needs_space_before(&self, next: &Self) -> bool {
        !self.punct && !next.punct && self.cjk != next.cjk
    }
}

/// Classifies characters and inserts spaces at CJK boundaries.
///
/// Construction builds both classification trees; reuse a [`Spacer`] (or call
/// [`add_spaces()`], which uses a shared instance) rather than constructing one
/// per call.
#[derive(Debug, Clone)]
pub struct Spacer {
    cjk: IntervalTree<char>,
    punct: IntervalTree<char>,
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Spacer {
    /// Build a [`Spacer`] from [`CJK_RANGES`] and [`PUNCT_RANGES`].
    pub fn new() -> Self {
        // Both tables are non-empty and every range is ordered.
        Self::try_new().expect("invalid built-in codepoint range table")
    }

    /// Build a [`Spacer`] from the given CJK and punctuation range tables.
    pub fn with_ranges(cjk: &[(char, char)], punct: &[(char, char)]) -> Result<Self, Error> {
        Ok(Self {
            cjk: IntervalTree::build(cjk.iter().copied())?,
            punct: IntervalTree::build(punct.iter().copied())?,
        })
    }

    fn try_new() -> Result<Self, Error> {
        Self::with_ranges(CJK_RANGES, PUNCT_RANGES)
    }

    pub fn classify(&self, c: char) -> CharClass {
        CharClass {
            cjk: self.cjk.contains_point(&c),
            punct: self.punct.contains_point(&c),
        }
    }

    /// Return `text` with a space inserted at every CJK / non-CJK boundary not
    /// adjacent to punctuation or whitespace.
    ///
    /// Applying this more than once has no further effect.
    pub fn add_spaces(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        let mut prev: Option<CharClass> = None;

        for c in text.chars() {
            let class = self.classify(c);
            if prev.is_some_and(|p| p.needs_space_before(&class)) {
                out.push(' ');
            }
            out.push(c);
            prev = Some(class);
        }

        out
    }
}

fn shared() -> &'static Spacer {
    static SPACER: OnceLock<Spacer> = OnceLock::new();
    SPACER.get_or_init(Spacer::new)
}

/// [`Spacer::add_spaces()`] using a process-wide [`Spacer`].
pub fn add_spaces(text: &str) -> String {
    shared().add_spaces(text)
}
