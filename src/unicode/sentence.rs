// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Sentence boundaries (UAX #29, section 5).

use log::trace;

use super::lookahead::find_property;
use super::properties::SentenceBreak;
use super::rules::{BREAK, JOIN, RuleFamily, Transition, resolve};

dense_enum! {
    pub enum SentenceState {
        #[default]
        Any,
        CR,
        ParaSep,
        ATerm,
        Upper,
        Lower,
        SB7,
        SB8Close,
        SB8Sp,
        STerm,
        SB8aClose,
        SB8aSp,
    }
}

use SentenceBreak as P;
use SentenceState as S;

// A CR after a terminator enters the CR state rather than ParaSep, so that SB3
// keeps CR LF together.
transition_table! {
    static RULES: SentenceState, SentenceBreak => bool;

    // SB3
    (S::Any, P::CR) => (S::CR, JOIN, 9990),
    (S::CR, P::LF) => (S::ParaSep, JOIN, 30),

    // SB4
    (S::Any, P::Sep) => (S::ParaSep, JOIN, 9990),
    (S::Any, P::LF) => (S::ParaSep, JOIN, 9990),
    (S::ParaSep, P::Any) => (S::Any, BREAK, 40),
    (S::CR, P::Any) => (S::Any, BREAK, 40),

    // SB6
    (S::Any, P::ATerm) => (S::ATerm, JOIN, 9990),
    (S::ATerm, P::Numeric) => (S::Any, JOIN, 60),
    (S::SB7, P::Numeric) => (S::Any, JOIN, 60),

    // SB7
    (S::Any, P::Upper) => (S::Upper, JOIN, 9990),
    (S::Any, P::Lower) => (S::Lower, JOIN, 9990),
    (S::Upper, P::ATerm) => (S::SB7, JOIN, 70),
    (S::Lower, P::ATerm) => (S::SB7, JOIN, 70),
    (S::SB7, P::Upper) => (S::Upper, JOIN, 70),

    // SB8a
    (S::Any, P::STerm) => (S::STerm, JOIN, 9990),
    (S::ATerm, P::SContinue) => (S::Any, JOIN, 81),
    (S::ATerm, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::ATerm, P::STerm) => (S::STerm, JOIN, 81),
    (S::SB7, P::SContinue) => (S::Any, JOIN, 81),
    (S::SB7, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::SB7, P::STerm) => (S::STerm, JOIN, 81),
    (S::SB8Close, P::SContinue) => (S::Any, JOIN, 81),
    (S::SB8Close, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::SB8Close, P::STerm) => (S::STerm, JOIN, 81),
    (S::SB8Sp, P::SContinue) => (S::Any, JOIN, 81),
    (S::SB8Sp, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::SB8Sp, P::STerm) => (S::STerm, JOIN, 81),
    (S::STerm, P::SContinue) => (S::Any, JOIN, 81),
    (S::STerm, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::STerm, P::STerm) => (S::STerm, JOIN, 81),
    (S::SB8aClose, P::SContinue) => (S::Any, JOIN, 81),
    (S::SB8aClose, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::SB8aClose, P::STerm) => (S::STerm, JOIN, 81),
    (S::SB8aSp, P::SContinue) => (S::Any, JOIN, 81),
    (S::SB8aSp, P::ATerm) => (S::ATerm, JOIN, 81),
    (S::SB8aSp, P::STerm) => (S::STerm, JOIN, 81),

    // SB9
    (S::ATerm, P::Close) => (S::SB8Close, JOIN, 90),
    (S::SB7, P::Close) => (S::SB8Close, JOIN, 90),
    (S::SB8Close, P::Close) => (S::SB8Close, JOIN, 90),
    (S::ATerm, P::Sp) => (S::SB8Sp, JOIN, 90),
    (S::SB7, P::Sp) => (S::SB8Sp, JOIN, 90),
    (S::SB8Close, P::Sp) => (S::SB8Sp, JOIN, 90),
    (S::STerm, P::Close) => (S::SB8aClose, JOIN, 90),
    (S::SB8aClose, P::Close) => (S::SB8aClose, JOIN, 90),
    (S::STerm, P::Sp) => (S::SB8aSp, JOIN, 90),
    (S::SB8aClose, P::Sp) => (S::SB8aSp, JOIN, 90),
    (S::ATerm, P::Sep) => (S::ParaSep, JOIN, 90),
    (S::ATerm, P::CR) => (S::CR, JOIN, 90),
    (S::ATerm, P::LF) => (S::ParaSep, JOIN, 90),
    (S::SB7, P::Sep) => (S::ParaSep, JOIN, 90),
    (S::SB7, P::CR) => (S::CR, JOIN, 90),
    (S::SB7, P::LF) => (S::ParaSep, JOIN, 90),
    (S::SB8Close, P::Sep) => (S::ParaSep, JOIN, 90),
    (S::SB8Close, P::CR) => (S::CR, JOIN, 90),
    (S::SB8Close, P::LF) => (S::ParaSep, JOIN, 90),
    (S::STerm, P::Sep) => (S::ParaSep, JOIN, 90),
    (S::STerm, P::CR) => (S::CR, JOIN, 90),
    (S::STerm, P::LF) => (S::ParaSep, JOIN, 90),
    (S::SB8aClose, P::Sep) => (S::ParaSep, JOIN, 90),
    (S::SB8aClose, P::CR) => (S::CR, JOIN, 90),
    (S::SB8aClose, P::LF) => (S::ParaSep, JOIN, 90),

    // SB10
    (S::SB8Sp, P::Sp) => (S::SB8Sp, JOIN, 100),
    (S::SB8aSp, P::Sp) => (S::SB8aSp, JOIN, 100),
    (S::SB8Sp, P::Sep) => (S::ParaSep, JOIN, 100),
    (S::SB8Sp, P::CR) => (S::CR, JOIN, 100),
    (S::SB8Sp, P::LF) => (S::ParaSep, JOIN, 100),
    (S::SB8aSp, P::Sep) => (S::ParaSep, JOIN, 100),
    (S::SB8aSp, P::CR) => (S::CR, JOIN, 100),
    (S::SB8aSp, P::LF) => (S::ParaSep, JOIN, 100),

    // SB11
    (S::ATerm, P::Any) => (S::Any, BREAK, 110),
    (S::SB7, P::Any) => (S::Any, BREAK, 110),
    (S::SB8Close, P::Any) => (S::Any, BREAK, 110),
    (S::SB8Sp, P::Any) => (S::Any, BREAK, 110),
    (S::STerm, P::Any) => (S::Any, BREAK, 110),
    (S::SB8aClose, P::Any) => (S::Any, BREAK, 110),
    (S::SB8aSp, P::Any) => (S::Any, BREAK, 110),
}

struct Sentence;

impl RuleFamily for Sentence {
    type State = SentenceState;
    type Prop = SentenceBreak;
    type Boundary = bool;

    const ANY_STATE: SentenceState = S::Any;
    const ANY_PROP: SentenceBreak = P::Any;
    // SB998: unlike the other families, "anything else" doesn't break.
    const DEFAULT: Transition<SentenceState, bool> =
        Transition { state: S::Any, boundary: JOIN, rule: 9990 };

    #[inline]
    fn entry(state: SentenceState, prop: SentenceBreak) -> Option<Transition<SentenceState, bool>> {
        RULES[state.index()][prop.index()]
    }
}

/// The properties that end the SB8 scan for a lowercase letter.
fn ends_sb8_scan(prop: SentenceBreak) -> bool {
    matches!(prop, P::OLetter | P::Upper | P::Lower | P::Sep | P::CR | P::LF | P::ATerm | P::STerm)
}

/// Feeds `ch` into the sentence machine.
///
/// `state` is `None` for the first code point of a text. `rest` is the text following `ch`.
/// Returns the new state and whether there's a sentence boundary *before* `ch`.
pub fn transition(state: Option<SentenceState>, ch: char, rest: &[u8]) -> (SentenceState, bool) {
    let prop = SentenceBreak::of(ch);

    // SB5: Extend and Format are invisible, except right after a paragraph separator.
    if matches!(prop, P::Extend | P::Format) {
        return match state {
            Some(S::ParaSep | S::CR) | None => (S::Any, BREAK),
            Some(state) => (state, JOIN),
        };
    }

    let state = state.unwrap_or_default();
    let t = resolve::<Sentence>(state, prop);

    // SB8: ATerm Close* Sp* × ( ¬(OLetter | Upper | Lower | ParaSep | SATerm) )* Lower
    if t.rule > 80 && matches!(state, S::ATerm | S::SB8Close | S::SB8Sp | S::SB7) {
        let far = if ends_sb8_scan(prop) {
            Some(prop)
        } else {
            find_property(rest, SentenceBreak::of, |p| !ends_sb8_scan(p))
        };
        trace!("sentence lookahead: {state:?} x {prop:?} followed by {far:?}");
        if far == Some(P::Lower) {
            return (S::Lower, JOIN);
        }
    }

    (t.state, t.boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        let mut result = Vec::new();
        let mut state = None;
        let mut start = 0;
        for (offset, ch) in text.char_indices() {
            let rest = &text.as_bytes()[offset + ch.len_utf8()..];
            let (next, boundary) = transition(state, ch, rest);
            if boundary && offset > 0 {
                result.push(&text[start..offset]);
                start = offset;
            }
            state = Some(next);
        }
        if start < text.len() {
            result.push(&text[start..]);
        }
        result
    }

    #[test]
    fn test_terminators() {
        assert_eq!(sentences("Hello world. How are you?"), ["Hello world. ", "How are you?"]);
        assert_eq!(sentences("Wait! Really?! Yes."), ["Wait! ", "Really?! ", "Yes."]);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(sentences("U.S.A. yesterday"), ["U.S.A. yesterday"]);
        assert_eq!(sentences("e.g. this one"), ["e.g. this one"]);
        // An uppercase word after "Mr. " is a break under the untailored rules.
        assert_eq!(sentences("Mr. Smith left."), ["Mr. ", "Smith left."]);
        assert_eq!(sentences("Mr. smith left."), ["Mr. smith left."]);
    }

    #[test]
    fn test_closing_punctuation() {
        assert_eq!(sentences("He said \"Stop.\" Then left."), ["He said \"Stop.\" ", "Then left."]);
        assert_eq!(sentences("(Done.) ok"), ["(Done.) ok"]);
    }

    #[test]
    fn test_numbers_and_continuations() {
        assert_eq!(sentences("Pi is 3.14 today."), ["Pi is 3.14 today."]);
        assert_eq!(sentences("etc., and more"), ["etc., and more"]);
    }

    #[test]
    fn test_paragraph_separators() {
        assert_eq!(sentences("Line one\nLine two"), ["Line one\n", "Line two"]);
        assert_eq!(sentences("End.\r\nNext"), ["End.\r\n", "Next"]);
        assert_eq!(sentences("a\u{2029}b"), ["a\u{2029}", "b"]);
        // Extend is not absorbed by a preceding separator.
        assert_eq!(sentences("a\n\u{0301}b"), ["a\n", "\u{0301}b"]);
        assert_eq!(sentences("a\r\u{0301}b"), ["a\r", "\u{0301}b"]);
    }
}
