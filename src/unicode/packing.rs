// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The resumable segmentation state.
//!
//! All four machines plus the grapheme property of the code point that starts
//! the next cluster are packed into one `i32`, LSB first:
//!
//! | bits  | field                                            |
//! |-------|--------------------------------------------------|
//! | 0-3   | grapheme state                                   |
//! | 4-7   | word state                                       |
//! | 8     | word: after ZWJ                                  |
//! | 9-12  | sentence state                                   |
//! | 13-18 | line state                                       |
//! | 19    | line: after ZWJ                                  |
//! | 20    | line: closing parenthesis isn't East Asian wide  |
//! | 21-24 | grapheme property of the next cluster's start    |
//!
//! Adding states to a machine may grow a field and shift the ones above it.
//! Packed values are therefore only meaningful to the same build that made them.

use std::fmt;

use super::grapheme::GraphemeState;
use super::line::{LineContext, LineState};
use super::properties::GraphemeBreak;
use super::sentence::SentenceState;
use super::word::{WordContext, WordState};

const GRAPHEME_SHIFT: u32 = 0;
const GRAPHEME_BITS: u32 = 4;
const WORD_SHIFT: u32 = 4;
const WORD_BITS: u32 = 4;
const WORD_ZWJ_BIT: i32 = 1 << 8;
const SENTENCE_SHIFT: u32 = 9;
const SENTENCE_BITS: u32 = 4;
const LINE_SHIFT: u32 = 13;
const LINE_BITS: u32 = 6;
const LINE_ZWJ_BIT: i32 = 1 << 19;
const LINE_CP_NOT_WIDE_BIT: i32 = 1 << 20;
const FIRST_SHIFT: u32 = 21;
const FIRST_BITS: u32 = 4;

const _: () = assert!(GraphemeState::COUNT <= 1 << GRAPHEME_BITS);
const _: () = assert!(WordState::COUNT <= 1 << WORD_BITS);
const _: () = assert!(SentenceState::COUNT <= 1 << SENTENCE_BITS);
const _: () = assert!(LineState::COUNT <= 1 << LINE_BITS);
const _: () = assert!(GraphemeBreak::COUNT <= 1 << FIRST_BITS);
const _: () = assert!(WORD_SHIFT + WORD_BITS == 8 && SENTENCE_SHIFT == 9);
const _: () = assert!(LINE_SHIFT + LINE_BITS == 19 && FIRST_SHIFT == 21);
const _: () = assert!(FIRST_SHIFT + FIRST_BITS < 31);

/// Opaque segmentation state, threaded from one call to the next.
///
/// Start every text with [`State::INITIAL`] (which is also the [`Default`])
/// and pass back whatever the previous call returned. A state is only
/// meaningful to the same kind of call that produced it: the `first_*`
/// functions each track just their own machine, while [`step`](super::step)
/// tracks all of them. Anything else is a precondition violation and yields
/// unspecified (but memory-safe) segmentation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(i32);

impl State {
    /// The state for the start of a text.
    pub const INITIAL: Self = Self(-1);

    #[inline]
    pub const fn is_initial(self) -> bool {
        self.0 < 0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_initial() {
            f.write_str("State(INITIAL)")
        } else {
            write!(f, "State({:#09x})", self.0)
        }
    }
}

#[inline]
const fn field(packed: i32, shift: u32, bits: u32) -> usize {
    ((packed >> shift) & ((1 << bits) - 1)) as usize
}

/// The unpacked form of a non-initial [`State`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parts {
    pub grapheme: GraphemeState,
    pub word: WordContext,
    pub sentence: SentenceState,
    pub line: LineContext,
    /// The grapheme property of the code point the next call starts with.
    pub first: GraphemeBreak,
}

impl Parts {
    pub fn pack(&self) -> State {
        let mut packed = (self.grapheme.index() as i32) << GRAPHEME_SHIFT
            | (self.word.state.index() as i32) << WORD_SHIFT
            | (self.sentence.index() as i32) << SENTENCE_SHIFT
            | (self.line.state.index() as i32) << LINE_SHIFT
            | (self.first.index() as i32) << FIRST_SHIFT;
        if self.word.after_zwj {
            packed |= WORD_ZWJ_BIT;
        }
        if self.line.after_zwj {
            packed |= LINE_ZWJ_BIT;
        }
        if self.line.cp_not_wide {
            packed |= LINE_CP_NOT_WIDE_BIT;
        }
        State(packed)
    }

    /// Returns `None` for [`State::INITIAL`].
    pub fn unpack(state: State) -> Option<Self> {
        if state.is_initial() {
            return None;
        }
        let packed = state.0;
        Some(Self {
            grapheme: GraphemeState::from_index(field(packed, GRAPHEME_SHIFT, GRAPHEME_BITS)),
            word: WordContext {
                state: WordState::from_index(field(packed, WORD_SHIFT, WORD_BITS)),
                after_zwj: packed & WORD_ZWJ_BIT != 0,
            },
            sentence: SentenceState::from_index(field(packed, SENTENCE_SHIFT, SENTENCE_BITS)),
            line: LineContext {
                state: LineState::from_index(field(packed, LINE_SHIFT, LINE_BITS)),
                after_zwj: packed & LINE_ZWJ_BIT != 0,
                cp_not_wide: packed & LINE_CP_NOT_WIDE_BIT != 0,
            },
            first: GraphemeBreak::from_index(field(packed, FIRST_SHIFT, FIRST_BITS)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert!(State::INITIAL.is_initial());
        assert_eq!(State::default(), State::INITIAL);
        assert_eq!(Parts::unpack(State::INITIAL), None);
        assert!(!Parts::default().pack().is_initial());
        assert_eq!(format!("{:?}", State::INITIAL), "State(INITIAL)");
    }

    #[test]
    fn test_fields_do_not_overlap() {
        let parts = Parts {
            grapheme: GraphemeState::RIEven,
            word: WordContext { state: WordState::EvenRI, after_zwj: true },
            sentence: SentenceState::SB8aSp,
            line: LineContext { state: LineState::ExtPicCn, after_zwj: true, cp_not_wide: true },
            first: GraphemeBreak::ExtendedPictographic,
        };
        let packed = parts.pack();
        assert!(!packed.is_initial());
        assert_eq!(Parts::unpack(packed), Some(parts));

        // Flipping one field leaves the others alone.
        let other = Parts { sentence: SentenceState::Any, ..parts };
        assert_eq!(Parts::unpack(other.pack()), Some(other));
        assert_ne!(other.pack(), packed);
    }

    #[test]
    fn test_every_line_state_survives() {
        for &state in LineState::ALL {
            let line = LineContext { state, ..Default::default() };
            let parts = Parts { line, ..Default::default() };
            assert_eq!(Parts::unpack(parts.pack()).map(|p| p.line.state), Some(state));
        }
    }
}
