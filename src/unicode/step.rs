// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use bitflags::bitflags;

use super::grapheme::{self, GraphemeState};
use super::line::{self, LineBreakOpportunity};
use super::packing::{Parts, State};
use super::properties::GraphemeBreak;
use super::text::Text;
use super::utf8::decode_first;
use super::width::{ClusterWidth, rune_width};
use super::{sentence, word};
use crate::config::Config;

bitflags! {
    /// The boundaries found at the end of a [`Step`]'s segment.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Boundaries: u8 {
        /// Always set: steps end on grapheme cluster boundaries.
        const GRAPHEME = 1 << 0;
        const WORD = 1 << 1;
        const SENTENCE = 1 << 2;
        /// A line may be broken here.
        const LINE = 1 << 3;
        /// A line must be broken here. Implies [`Self::LINE`].
        const LINE_MANDATORY = 1 << 4;
        /// What the end of the text counts as.
        const END = Self::GRAPHEME.bits()
            | Self::WORD.bits()
            | Self::SENTENCE.bits()
            | Self::LINE.bits()
            | Self::LINE_MANDATORY.bits();
    }
}

impl Boundaries {
    pub fn from_line(opportunity: LineBreakOpportunity) -> Self {
        match opportunity {
            LineBreakOpportunity::DontBreak => Self::empty(),
            LineBreakOpportunity::CanBreak => Self::LINE,
            LineBreakOpportunity::MustBreak => Self::LINE | Self::LINE_MANDATORY,
        }
    }

    pub fn line_break(self) -> LineBreakOpportunity {
        if self.contains(Self::LINE_MANDATORY) {
            LineBreakOpportunity::MustBreak
        } else if self.contains(Self::LINE) {
            LineBreakOpportunity::CanBreak
        } else {
            LineBreakOpportunity::DontBreak
        }
    }
}

/// One grapheme cluster, with everything the other machines know about its end.
#[derive(Debug)]
pub struct Step<'a, T: ?Sized> {
    pub segment: &'a T,
    pub rest: &'a T,
    pub boundaries: Boundaries,
    /// Monospace width of `segment`.
    pub width: usize,
    /// Pass this to the next call on `rest`.
    pub state: State,
}

impl<T: ?Sized> Clone for Step<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Step<'_, T> {}

/// Splits off the first grapheme cluster of `text` and reports which word,
/// sentence and line boundaries coincide with its end.
///
/// Returns `None` if `text` is empty. The end of `text` is a boundary of every kind.
/// Uses the process-wide [`Config`] for the width.
pub fn step<T: Text + ?Sized>(text: &T, state: State) -> Option<Step<'_, T>> {
    step_with(text, state, &Config::global())
}

/// Like [`step`], but with an explicit [`Config`].
pub fn step_with<'a, T: Text + ?Sized>(
    text: &'a T,
    state: State,
    config: &Config,
) -> Option<Step<'a, T>> {
    let bytes = text.code_units();
    let (ch, mut len) = decode_first(bytes)?;
    let resumed = Parts::unpack(state);

    if len >= bytes.len() {
        let first = resumed.map_or_else(|| GraphemeBreak::of(ch), |p| p.first);
        let (segment, rest) = text.split_at_offset(bytes.len());
        return Some(Step {
            segment,
            rest,
            boundaries: Boundaries::END,
            width: rune_width(ch, first, config),
            state: Parts { first, ..Default::default() }.pack(),
        });
    }

    // A resumed state has already seen `ch`. A fresh one feeds it now.
    let mut parts = match resumed {
        Some(parts) => parts,
        None => {
            let rest = &bytes[len..];
            let first = GraphemeBreak::of(ch);
            Parts {
                grapheme: grapheme::transition(GraphemeState::Any, first).0,
                word: word::transition(None, ch, rest).0,
                sentence: sentence::transition(None, ch, rest).0,
                line: line::transition(None, ch, rest).0,
                first,
            }
        }
    };
    let mut width = ClusterWidth::new(ch, parts.first, config);

    while let Some((ch, n)) = decode_first(&bytes[len..]) {
        let rest = &bytes[len + n..];
        let prop = GraphemeBreak::of(ch);

        let (grapheme, grapheme_boundary) = grapheme::transition(parts.grapheme, prop);
        let (word, word_boundary) = word::transition(Some(parts.word), ch, rest);
        let (sentence, sentence_boundary) = sentence::transition(Some(parts.sentence), ch, rest);
        let (line, opportunity) = line::transition(Some(parts.line), ch, rest);
        parts = Parts { grapheme, word, sentence, line, first: prop };

        if grapheme_boundary {
            let mut boundaries = Boundaries::GRAPHEME | Boundaries::from_line(opportunity);
            boundaries.set(Boundaries::WORD, word_boundary);
            boundaries.set(Boundaries::SENTENCE, sentence_boundary);
            let (segment, rest) = text.split_at_offset(len);
            let state = parts.pack();
            return Some(Step { segment, rest, boundaries, width: width.get(), state });
        }

        width.push(ch, prop, config);
        len += n;
    }

    let (segment, rest) = text.split_at_offset(len);
    Some(Step {
        segment,
        rest,
        boundaries: Boundaries::END,
        width: width.get(),
        state: Parts { first: parts.first, ..Default::default() }.pack(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(text: &str) -> Vec<(&str, Boundaries, usize)> {
        let config = Config::new();
        let mut result = Vec::new();
        let mut rest = text;
        let mut state = State::INITIAL;
        while let Some(s) = step_with(rest, state, &config) {
            result.push((s.segment, s.boundaries, s.width));
            rest = s.rest;
            state = s.state;
        }
        result
    }

    const G: Boundaries = Boundaries::GRAPHEME;
    const W: Boundaries = Boundaries::WORD;
    const S: Boundaries = Boundaries::SENTENCE;
    const L: Boundaries = Boundaries::LINE;
    const M: Boundaries = Boundaries::LINE_MANDATORY;
    const END: Boundaries = Boundaries::END;

    #[test]
    fn test_empty_and_single() {
        assert!(step("", State::INITIAL).is_none());
        assert_eq!(steps("x"), [("x", END, 1)]);
        assert_eq!(steps("\u{4E16}"), [("\u{4E16}", END, 2)]);
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            steps("Hi. Yo"),
            [
                ("H", G, 1),
                ("i", G.union(W), 1),
                (".", G.union(W), 1),
                (" ", G.union(W).union(S).union(L), 1),
                ("Y", G, 1),
                ("o", END, 1),
            ]
        );
    }

    #[test]
    fn test_mandatory_line_break() {
        assert_eq!(
            steps("a\r\nb"),
            [
                ("a", G.union(W), 1),
                ("\r\n", G.union(W).union(S).union(L).union(M), 0),
                ("b", END, 1),
            ]
        );
    }

    #[test]
    fn test_cluster_widths() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let text = format!("{family}e\u{0301}\u{1F1FA}\u{1F1F8}");
        let widths: Vec<_> =
            steps(&text).iter().map(|&(seg, _, w)| (seg.chars().count(), w)).collect();
        assert_eq!(widths, [(5, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_malformed_bytes() {
        let config = Config::new();
        let mut rest: &[u8] = b"a\xFF\xC3";
        let mut state = State::INITIAL;
        let mut segments = Vec::new();
        while let Some(s) = step_with(rest, state, &config) {
            segments.push(s.segment);
            rest = s.rest;
            state = s.state;
        }
        assert_eq!(segments, [&b"a"[..], &b"\xFF"[..], &b"\xC3"[..]]);
    }

    #[test]
    fn test_line_break_roundtrip() {
        for opportunity in [
            LineBreakOpportunity::DontBreak,
            LineBreakOpportunity::CanBreak,
            LineBreakOpportunity::MustBreak,
        ] {
            assert_eq!(Boundaries::from_line(opportunity).line_break(), opportunity);
        }
    }
}
