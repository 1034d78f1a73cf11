// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Monospace column widths.

use super::properties::{EastAsianWidth, GraphemeBreak, is_emoji_presentation};
use crate::config::Config;

/// VARIATION SELECTOR-15, requests text presentation.
pub const VS15: char = '\u{FE0E}';
/// VARIATION SELECTOR-16, requests emoji presentation.
pub const VS16: char = '\u{FE0F}';

/// The width of `ch` on its own, given its grapheme property. Always 0 to 4.
pub fn rune_width(ch: char, prop: GraphemeBreak, config: &Config) -> usize {
    match prop {
        GraphemeBreak::Control
        | GraphemeBreak::CR
        | GraphemeBreak::LF
        | GraphemeBreak::Extend
        | GraphemeBreak::ZWJ => return 0,
        // Each half of a flag. Pairs are handled by `ClusterWidth`.
        GraphemeBreak::RegionalIndicator => return 2,
        GraphemeBreak::ExtendedPictographic => {
            return if is_emoji_presentation(ch) { 2 } else { 1 };
        }
        _ => {}
    }

    match ch {
        // TWO-EM DASH and THREE-EM DASH
        '\u{2E3A}' => 3,
        '\u{2E3B}' => 4,
        _ => match EastAsianWidth::of(ch) {
            EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
            EastAsianWidth::Ambiguous => config.ambiguous_width().columns(),
            _ => 1,
        },
    }
}

/// Accumulates the width of one grapheme cluster, code point by code point.
///
/// Pictographic clusters are as wide as their first code point unless a
/// variation selector says otherwise. Flags and Hangul jamo clusters are
/// as wide as their first code point. Everything else is summed up.
#[derive(Clone, Copy, Debug)]
pub struct ClusterWidth {
    first: GraphemeBreak,
    width: usize,
}

impl ClusterWidth {
    pub fn new(ch: char, prop: GraphemeBreak, config: &Config) -> Self {
        Self { first: prop, width: rune_width(ch, prop, config) }
    }

    pub fn push(&mut self, ch: char, prop: GraphemeBreak, config: &Config) {
        match self.first {
            GraphemeBreak::ExtendedPictographic => match ch {
                VS15 => self.width = 1,
                VS16 => self.width = 2,
                _ => {}
            },
            GraphemeBreak::RegionalIndicator | GraphemeBreak::L => {}
            _ => self.width += rune_width(ch, prop, config),
        }
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmbiguousWidth;

    fn width(ch: char) -> usize {
        rune_width(ch, GraphemeBreak::of(ch), &Config::new())
    }

    fn cluster(text: &str) -> usize {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return 0;
        };
        let config = Config::new();
        let mut w = ClusterWidth::new(first, GraphemeBreak::of(first), &config);
        for ch in chars {
            w.push(ch, GraphemeBreak::of(ch), &config);
        }
        w.get()
    }

    #[test]
    fn test_rune_width() {
        assert_eq!(width('a'), 1);
        assert_eq!(width('\t'), 0);
        assert_eq!(width('\u{0301}'), 0);
        assert_eq!(width('\u{200D}'), 0);
        assert_eq!(width('\u{4E16}'), 2);
        assert_eq!(width('\u{FF21}'), 2);
        assert_eq!(width('\u{2E3A}'), 3);
        assert_eq!(width('\u{2E3B}'), 4);
        assert_eq!(width('\u{1F1FA}'), 2);
        assert_eq!(width('\u{1F600}'), 2);
        // COPYRIGHT SIGN is pictographic but text-presented by default.
        assert_eq!(width('\u{00A9}'), 1);
    }

    #[test]
    fn test_ambiguous() {
        let wide = Config::new().with_ambiguous_width(AmbiguousWidth::Wide);
        assert_eq!(width('\u{00B1}'), 1);
        assert_eq!(rune_width('\u{00B1}', GraphemeBreak::Any, &wide), 2);
    }

    #[test]
    fn test_cluster_width() {
        assert_eq!(cluster("e\u{0301}"), 1);
        assert_eq!(cluster("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"), 2);
        assert_eq!(cluster("\u{00A9}\u{FE0F}"), 2);
        assert_eq!(cluster("\u{1F600}\u{FE0E}"), 1);
        assert_eq!(cluster("\u{1F1FA}\u{1F1F8}"), 2);
        // ᄀ + ᅡ renders as one syllable.
        assert_eq!(cluster("\u{1100}\u{1161}"), 2);
        // A spacing mark adds its own width.
        assert_eq!(cluster("\u{0915}\u{093F}"), 2);
    }
}
