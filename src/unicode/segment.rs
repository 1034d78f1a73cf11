// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Single-family segmentation: one cluster, word, sentence or line segment per call.
//!
//! Each function returns the segment, the rest of the text and a [`State`] to
//! pass to the next call of the *same* function. Cutting a text up call by call
//! yields exactly the segments a single pass over the whole text would.

use super::grapheme::{self, GraphemeState};
use super::line::{self, LineBreakOpportunity};
use super::packing::{Parts, State};
use super::properties::GraphemeBreak;
use super::text::Text;
use super::utf8::decode_first;
use super::width::{ClusterWidth, rune_width};
use super::{sentence, word};
use crate::config::Config;

/// An extended grapheme cluster and its width.
#[derive(Debug)]
pub struct Cluster<'a, T: ?Sized> {
    pub segment: &'a T,
    pub rest: &'a T,
    pub width: usize,
    pub state: State,
}

/// A word or a sentence.
#[derive(Debug)]
pub struct Segment<'a, T: ?Sized> {
    pub segment: &'a T,
    pub rest: &'a T,
    pub state: State,
}

/// Text up to and including the next line break opportunity.
#[derive(Debug)]
pub struct LineSegment<'a, T: ?Sized> {
    pub segment: &'a T,
    pub rest: &'a T,
    /// Whether the line must be broken after `segment`. True at the end of the text.
    pub must_break: bool,
    pub state: State,
}

/// Splits off the first extended grapheme cluster, using the process-wide [`Config`].
pub fn first_grapheme_cluster<T: Text + ?Sized>(text: &T, state: State) -> Option<Cluster<'_, T>> {
    first_grapheme_cluster_with(text, state, &Config::global())
}

/// Like [`first_grapheme_cluster`], but with an explicit [`Config`].
pub fn first_grapheme_cluster_with<'a, T: Text + ?Sized>(
    text: &'a T,
    state: State,
    config: &Config,
) -> Option<Cluster<'a, T>> {
    let bytes = text.code_units();
    let (ch, mut len) = decode_first(bytes)?;

    let (mut current, first) = match Parts::unpack(state) {
        Some(parts) => (parts.grapheme, parts.first),
        None => {
            let first = GraphemeBreak::of(ch);
            (grapheme::transition(GraphemeState::Any, first).0, first)
        }
    };

    if len >= bytes.len() {
        let (segment, rest) = text.split_at_offset(len);
        let state = Parts { first, ..Default::default() }.pack();
        return Some(Cluster { segment, rest, width: rune_width(ch, first, config), state });
    }

    let mut width = ClusterWidth::new(ch, first, config);
    while let Some((ch, n)) = decode_first(&bytes[len..]) {
        let prop = GraphemeBreak::of(ch);
        let (next, boundary) = grapheme::transition(current, prop);
        if boundary {
            let (segment, rest) = text.split_at_offset(len);
            let state = Parts { grapheme: next, first: prop, ..Default::default() }.pack();
            return Some(Cluster { segment, rest, width: width.get(), state });
        }
        width.push(ch, prop, config);
        current = next;
        len += n;
    }

    let (segment, rest) = text.split_at_offset(len);
    Some(Cluster { segment, rest, width: width.get(), state: Parts::default().pack() })
}

/// Splits off the first word (UAX #29 word boundaries).
///
/// Spaces and punctuation form "words" of their own; filtering them is up to the caller.
pub fn first_word<T: Text + ?Sized>(text: &T, state: State) -> Option<Segment<'_, T>> {
    let bytes = text.code_units();
    let (ch, mut len) = decode_first(bytes)?;

    let mut current = match Parts::unpack(state) {
        Some(parts) => parts.word,
        None => word::transition(None, ch, &bytes[len..]).0,
    };

    while let Some((ch, n)) = decode_first(&bytes[len..]) {
        let (next, boundary) = word::transition(Some(current), ch, &bytes[len + n..]);
        if boundary {
            let (segment, rest) = text.split_at_offset(len);
            let state = Parts { word: next, ..Default::default() }.pack();
            return Some(Segment { segment, rest, state });
        }
        current = next;
        len += n;
    }

    let (segment, rest) = text.split_at_offset(len);
    Some(Segment { segment, rest, state: Parts::default().pack() })
}

/// Splits off the first sentence (UAX #29 sentence boundaries, untailored).
pub fn first_sentence<T: Text + ?Sized>(text: &T, state: State) -> Option<Segment<'_, T>> {
    let bytes = text.code_units();
    let (ch, mut len) = decode_first(bytes)?;

    let mut current = match Parts::unpack(state) {
        Some(parts) => parts.sentence,
        None => sentence::transition(None, ch, &bytes[len..]).0,
    };

    while let Some((ch, n)) = decode_first(&bytes[len..]) {
        let (next, boundary) = sentence::transition(Some(current), ch, &bytes[len + n..]);
        if boundary {
            let (segment, rest) = text.split_at_offset(len);
            let state = Parts { sentence: next, ..Default::default() }.pack();
            return Some(Segment { segment, rest, state });
        }
        current = next;
        len += n;
    }

    let (segment, rest) = text.split_at_offset(len);
    Some(Segment { segment, rest, state: Parts::default().pack() })
}

/// Splits off the text up to the next line break opportunity (UAX #14).
///
/// The segment includes trailing spaces and the line terminator, if any.
pub fn first_line_segment<T: Text + ?Sized>(text: &T, state: State) -> Option<LineSegment<'_, T>> {
    let bytes = text.code_units();
    let (ch, mut len) = decode_first(bytes)?;

    let mut current = match Parts::unpack(state) {
        Some(parts) => parts.line,
        None => line::transition(None, ch, &bytes[len..]).0,
    };

    while let Some((ch, n)) = decode_first(&bytes[len..]) {
        let (next, opportunity) = line::transition(Some(current), ch, &bytes[len + n..]);
        if opportunity != LineBreakOpportunity::DontBreak {
            let (segment, rest) = text.split_at_offset(len);
            let must_break = opportunity == LineBreakOpportunity::MustBreak;
            let state = Parts { line: next, ..Default::default() }.pack();
            return Some(LineSegment { segment, rest, must_break, state });
        }
        current = next;
        len += n;
    }

    let (segment, rest) = text.split_at_offset(len);
    Some(LineSegment { segment, rest, must_break: true, state: Parts::default().pack() })
}
