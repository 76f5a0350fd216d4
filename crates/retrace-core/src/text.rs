//! Stepping over text by grapheme cluster or by scalar.
//!
//! All offsets are byte offsets into UTF-8 text. Callers guarantee offsets
//! sit on scalar boundaries.

use unicode_segmentation::{GraphemeCursor, UnicodeSegmentation};

use crate::MatchLevel;

/// The grapheme cluster starting at byte offset `at`, if any.
pub fn next_grapheme(text: &str, at: usize) -> Option<&str> {
    text.get(at..)?.graphemes(true).next()
}

/// The scalar starting at byte offset `at`, if any.
pub fn next_scalar(text: &str, at: usize) -> Option<char> {
    text.get(at..)?.chars().next()
}

/// The next unit at the given level, as a string slice.
pub fn next_unit(text: &str, at: usize, level: MatchLevel) -> Option<&str> {
    match level {
        MatchLevel::GraphemeCluster => next_grapheme(text, at),
        MatchLevel::UnicodeScalar => {
            let c = next_scalar(text, at)?;
            text.get(at..at + c.len_utf8())
        }
    }
}

/// Byte offsets where grapheme clusters start, followed by `text.len()`.
///
/// Every offset a match may start from when scanning at grapheme level.
pub fn grapheme_boundaries(text: &str) -> Vec<usize> {
    let mut out: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
    out.push(text.len());
    out
}

/// Whether byte offset `at` falls between two grapheme clusters.
///
/// Both ends of the text count as boundaries.
pub fn is_grapheme_boundary(text: &str, at: usize) -> bool {
    if at > text.len() || !text.is_char_boundary(at) {
        return false;
    }
    let mut cursor = GraphemeCursor::new(at, text.len(), true);
    matches!(cursor.is_boundary(text, 0), Ok(true))
}

/// Split text into `(offset, grapheme)` pairs.
pub fn graphemes(text: &str) -> Vec<(usize, &str)> {
    text.grapheme_indices(true).collect()
}

/// Whether `s` is exactly one grapheme cluster.
pub fn is_single_grapheme(s: &str) -> bool {
    let mut it = s.graphemes(true);
    it.next().is_some() && it.next().is_none()
}
