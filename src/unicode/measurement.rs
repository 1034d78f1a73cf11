// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::iter;

use super::packing::State;
use super::properties::GraphemeBreak;
use super::segment::first_grapheme_cluster_with;
use super::step::{Step, step_with};
use super::text::Text;
use super::utf8::decode_last;
use super::width;
use crate::config::Config;

/// Counts the extended grapheme clusters in `text`.
pub fn grapheme_cluster_count<T: Text + ?Sized>(text: &T) -> usize {
    let config = Config::new();
    let mut rest = text;
    let mut state = State::INITIAL;
    let mut count = 0;
    while let Some(cluster) = first_grapheme_cluster_with(rest, state, &config) {
        count += 1;
        rest = cluster.rest;
        state = cluster.state;
    }
    count
}

/// The monospace width of `text`, using the process-wide [`Config`].
///
/// This is the sum of the widths of its grapheme clusters. Since clusters
/// don't add up the widths of their code points in every case, the width of
/// a concatenation equals the sum of the parts only if they're split on a
/// cluster boundary.
pub fn string_width<T: Text + ?Sized>(text: &T) -> usize {
    string_width_with(text, &Config::global())
}

/// Like [`string_width`], but with an explicit [`Config`].
pub fn string_width_with<T: Text + ?Sized>(text: &T, config: &Config) -> usize {
    let mut rest = text;
    let mut state = State::INITIAL;
    let mut width = 0;
    while let Some(cluster) = first_grapheme_cluster_with(rest, state, config) {
        width += cluster.width;
        rest = cluster.rest;
        state = cluster.state;
    }
    width
}

/// The monospace width of `ch` on its own, using the process-wide [`Config`].
pub fn rune_width(ch: char) -> usize {
    rune_width_with(ch, &Config::global())
}

/// Like [`rune_width`], but with an explicit [`Config`].
pub fn rune_width_with(ch: char, config: &Config) -> usize {
    width::rune_width(ch, GraphemeBreak::of(ch), config)
}

/// Reverses `text` cluster by cluster. Combining sequences, emoji and flags stay intact.
pub fn reverse_string(text: &str) -> String {
    let config = Config::new();
    let mut clusters = Vec::new();
    let mut rest = text;
    let mut state = State::INITIAL;
    while let Some(cluster) = first_grapheme_cluster_with(rest, state, &config) {
        clusters.push(cluster.segment);
        rest = cluster.rest;
        state = cluster.state;
    }

    let mut reversed = String::with_capacity(text.len());
    for cluster in clusters.iter().rev() {
        reversed.push_str(cluster);
    }
    reversed
}

/// Whether the last code point of `text` is a line terminator:
/// LF, VT, FF, CR, NEL, LINE SEPARATOR or PARAGRAPH SEPARATOR.
pub fn has_trailing_line_break<T: Text + ?Sized>(text: &T) -> bool {
    matches!(
        decode_last(text.code_units()),
        Some(('\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}', _))
    )
}

/// Iterates over the grapheme clusters of a text, yielding a [`Step`] for each.
///
/// ```
/// use textseg::unicode::{Boundaries, Graphemes};
///
/// let words: Vec<_> = Graphemes::new("Hi there")
///     .filter(|s| s.boundaries.contains(Boundaries::WORD))
///     .map(|s| s.segment)
///     .collect();
/// assert_eq!(words, ["i", " ", "e"]);
/// ```
pub struct Graphemes<'a, T: ?Sized> {
    rest: &'a T,
    state: State,
    config: Config,
}

impl<T: ?Sized> Clone for Graphemes<'_, T> {
    fn clone(&self) -> Self {
        Self { rest: self.rest, state: self.state, config: self.config }
    }
}

impl<'a, T: Text + ?Sized> Graphemes<'a, T> {
    /// Uses a snapshot of the process-wide [`Config`].
    pub fn new(text: &'a T) -> Self {
        Self::with_config(text, Config::global())
    }

    pub fn with_config(text: &'a T, config: Config) -> Self {
        Self { rest: text, state: State::INITIAL, config }
    }

    /// The text not yet iterated over.
    pub fn rest(&self) -> &'a T {
        self.rest
    }
}

impl<'a, T: Text + ?Sized> Iterator for Graphemes<'a, T> {
    type Item = Step<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = step_with(self.rest, self.state, &self.config)?;
        self.rest = step.rest;
        self.state = step.state;
        Some(step)
    }
}

impl<T: Text + ?Sized> iter::FusedIterator for Graphemes<'_, T> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::AmbiguousWidth;

    #[test]
    fn test_cluster_count() {
        assert_eq!(grapheme_cluster_count(""), 0);
        assert_eq!(grapheme_cluster_count("Hello"), 5);
        assert_eq!(grapheme_cluster_count("e\u{0301}\r\n"), 2);
        assert_eq!(grapheme_cluster_count(b"\xFF\xFE".as_slice()), 2);
    }

    #[test]
    fn test_string_width() {
        let config = Config::new();
        assert_eq!(string_width_with("Hello, \u{4E16}\u{754C}", &config), 11);
        assert_eq!(string_width_with("\t\n", &config), 0);
        assert_eq!(string_width_with("\u{2E3A}\u{2E3B}", &config), 7);
        assert_eq!(string_width_with("\u{FF21}\u{FF41}", &config), 4);
        assert_eq!(string_width_with("", &config), 0);

        let wide = config.with_ambiguous_width(AmbiguousWidth::Wide);
        assert_eq!(string_width_with("\u{00B1}1", &wide), 3);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_string("abc"), "cba");
        assert_eq!(reverse_string("ae\u{0301}"), "e\u{0301}a");
        assert_eq!(reverse_string("\u{1F1FA}\u{1F1F8}!"), "!\u{1F1FA}\u{1F1F8}");
        assert_eq!(reverse_string(""), "");
    }

    #[test]
    fn test_trailing_line_break() {
        assert!(has_trailing_line_break("a\n"));
        assert!(has_trailing_line_break("a\r"));
        assert!(has_trailing_line_break("a\u{85}"));
        assert!(has_trailing_line_break("a\u{2029}"));
        assert!(!has_trailing_line_break("a\n "));
        assert!(!has_trailing_line_break(""));
        assert!(!has_trailing_line_break(b"\n\xE2\x80".as_slice()));
    }

    #[test]
    fn test_graphemes_iterator() {
        let text = "a\u{0301}b\u{4E16}";
        let config = Config::new();
        let segments: Vec<_> =
            Graphemes::with_config(text, config).map(|s| (s.segment, s.width)).collect();
        assert_eq!(segments, [("a\u{0301}", 1), ("b", 1), ("\u{4E16}", 2)]);

        let mut iter = Graphemes::with_config(text, config);
        iter.next();
        assert_eq!(iter.rest(), "b\u{4E16}");
        assert_eq!(iter.by_ref().count(), 2);
        assert!(iter.next().is_none());
    }
}
