// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Word boundaries (UAX #29, section 4).

use log::trace;

use super::lookahead::find_property;
use super::properties::WordBreak;
use super::rules::{BREAK, JOIN, RuleFamily, Transition, resolve};

dense_enum! {
    pub enum WordState {
        #[default]
        Any,
        CR,
        LF,
        Newline,
        WSegSpace,
        HebrewLetter,
        ALetter,
        WB7,
        WB7c,
        Numeric,
        WB11,
        Katakana,
        ExtendNumLet,
        OddRI,
        EvenRI,
    }
}

/// The word machine's full state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordContext {
    pub state: WordState,
    /// A ZWJ was seen since the last non-ignorable code point (WB3c).
    pub after_zwj: bool,
}

impl WordContext {
    const ANY_ZWJ: Self = Self { state: WordState::Any, after_zwj: true };
}

use WordBreak as P;
use WordState as S;

transition_table! {
    static RULES: WordState, WordBreak => bool;

    // WB3b
    (S::Any, P::Newline) => (S::Newline, BREAK, 32),
    (S::Any, P::CR) => (S::CR, BREAK, 32),
    (S::Any, P::LF) => (S::LF, BREAK, 32),

    // WB3a
    (S::Newline, P::Any) => (S::Any, BREAK, 31),
    (S::CR, P::Any) => (S::Any, BREAK, 31),
    (S::LF, P::Any) => (S::Any, BREAK, 31),

    // WB3
    (S::CR, P::LF) => (S::LF, JOIN, 30),

    // WB3d
    (S::Any, P::WSegSpace) => (S::WSegSpace, BREAK, 9990),
    (S::WSegSpace, P::WSegSpace) => (S::WSegSpace, JOIN, 34),

    // WB5
    (S::Any, P::ALetter) => (S::ALetter, BREAK, 9990),
    (S::Any, P::HebrewLetter) => (S::HebrewLetter, BREAK, 9990),
    (S::ALetter, P::ALetter) => (S::ALetter, JOIN, 50),
    (S::ALetter, P::HebrewLetter) => (S::HebrewLetter, JOIN, 50),
    (S::HebrewLetter, P::ALetter) => (S::ALetter, JOIN, 50),
    (S::HebrewLetter, P::HebrewLetter) => (S::HebrewLetter, JOIN, 50),

    // WB7, the second half of WB6/7 (the first half needs a lookahead)
    (S::WB7, P::ALetter) => (S::ALetter, JOIN, 70),
    (S::WB7, P::HebrewLetter) => (S::HebrewLetter, JOIN, 70),

    // WB7a
    (S::HebrewLetter, P::SingleQuote) => (S::Any, JOIN, 71),

    // WB7c, the second half of WB7b/7c
    (S::WB7c, P::HebrewLetter) => (S::HebrewLetter, JOIN, 73),

    // WB8
    (S::Any, P::Numeric) => (S::Numeric, BREAK, 9990),
    (S::Numeric, P::Numeric) => (S::Numeric, JOIN, 80),

    // WB9
    (S::ALetter, P::Numeric) => (S::Numeric, JOIN, 90),
    (S::HebrewLetter, P::Numeric) => (S::Numeric, JOIN, 90),

    // WB10
    (S::Numeric, P::ALetter) => (S::ALetter, JOIN, 100),
    (S::Numeric, P::HebrewLetter) => (S::HebrewLetter, JOIN, 100),

    // WB11, the second half of WB11/12
    (S::WB11, P::Numeric) => (S::Numeric, JOIN, 110),

    // WB13
    (S::Any, P::Katakana) => (S::Katakana, BREAK, 9990),
    (S::Katakana, P::Katakana) => (S::Katakana, JOIN, 130),

    // WB13a
    (S::Any, P::ExtendNumLet) => (S::ExtendNumLet, BREAK, 9990),
    (S::ALetter, P::ExtendNumLet) => (S::ExtendNumLet, JOIN, 131),
    (S::HebrewLetter, P::ExtendNumLet) => (S::ExtendNumLet, JOIN, 131),
    (S::Numeric, P::ExtendNumLet) => (S::ExtendNumLet, JOIN, 131),
    (S::Katakana, P::ExtendNumLet) => (S::ExtendNumLet, JOIN, 131),
    (S::ExtendNumLet, P::ExtendNumLet) => (S::ExtendNumLet, JOIN, 131),

    // WB13b
    (S::ExtendNumLet, P::ALetter) => (S::ALetter, JOIN, 132),
    (S::ExtendNumLet, P::HebrewLetter) => (S::HebrewLetter, JOIN, 132),
    (S::ExtendNumLet, P::Numeric) => (S::Numeric, JOIN, 132),
    (S::ExtendNumLet, P::Katakana) => (S::Katakana, JOIN, 132),
}

struct Word;

impl RuleFamily for Word {
    type State = WordState;
    type Prop = WordBreak;
    type Boundary = bool;

    const ANY_STATE: WordState = S::Any;
    const ANY_PROP: WordBreak = P::Any;
    // WB999
    const DEFAULT: Transition<WordState, bool> =
        Transition { state: S::Any, boundary: BREAK, rule: 9990 };

    #[inline]
    fn entry(state: WordState, prop: WordBreak) -> Option<Transition<WordState, bool>> {
        RULES[state.index()][prop.index()]
    }
}

fn is_hard_break(state: WordState) -> bool {
    matches!(state, S::Newline | S::CR | S::LF)
}

fn is_ignorable(prop: WordBreak) -> bool {
    matches!(prop, P::Extend | P::Format | P::ZWJ)
}

/// Feeds `ch` into the word machine.
///
/// `ctx` is `None` for the first code point of a text. `rest` is the text following `ch`
/// and is only inspected, for the rules that need to see past mid-word punctuation.
/// Returns the new state and whether there's a word boundary *before* `ch`.
pub fn transition(ctx: Option<WordContext>, ch: char, rest: &[u8]) -> (WordContext, bool) {
    let prop = WordBreak::of(ch);

    // WB4: Extend, Format and ZWJ are invisible, except right after a hard break.
    // ZWJ leaves a marker behind for WB3c.
    match prop {
        P::ZWJ => {
            return match ctx {
                Some(c) if is_hard_break(c.state) => (WordContext::ANY_ZWJ, BREAK),
                Some(c) => (WordContext { after_zwj: true, ..c }, JOIN),
                None => (WordContext::ANY_ZWJ, JOIN),
            };
        }
        P::Extend | P::Format => {
            return match ctx {
                Some(c) if is_hard_break(c.state) => (WordContext::default(), BREAK),
                Some(c) if c.state == S::WSegSpace || c == WordContext::ANY_ZWJ => {
                    (WordContext::default(), JOIN)
                }
                Some(c) => (c, JOIN),
                None => (WordContext::default(), JOIN),
            };
        }
        // WB3c
        P::ExtendedPictographic if ctx.is_some_and(|c| c.after_zwj) => {
            return (WordContext::default(), JOIN);
        }
        _ => {}
    }

    let state = ctx.map_or(S::Any, |c| c.state);
    let t = resolve::<Word>(state, prop);
    let (mut next, mut boundary) = (t.state, t.boundary);

    // WB6, WB7b and WB12 depend on what follows the punctuation.
    let wb6 = t.rule > 60
        && matches!(state, S::ALetter | S::HebrewLetter)
        && matches!(prop, P::MidLetter | P::MidNumLet | P::SingleQuote);
    let wb7b = t.rule > 72 && state == S::HebrewLetter && prop == P::DoubleQuote;
    let wb12 = t.rule > 120
        && state == S::Numeric
        && matches!(prop, P::MidNum | P::MidNumLet | P::SingleQuote);
    if wb6 || wb7b || wb12 {
        let far = find_property(rest, WordBreak::of, is_ignorable);
        trace!("word lookahead: {state:?} x {prop:?} followed by {far:?}");
        let joined = match far {
            Some(P::ALetter | P::HebrewLetter) if wb6 => Some(S::WB7),
            Some(P::HebrewLetter) if wb7b => Some(S::WB7c),
            Some(P::Numeric) if wb12 => Some(S::WB11),
            _ => None,
        };
        if let Some(joined) = joined {
            next = joined;
            boundary = JOIN;
        }
    }

    // WB15 / WB16
    if next == S::Any && prop == P::RegionalIndicator {
        (next, boundary) = match state {
            S::OddRI => (S::EvenRI, JOIN),
            _ => (S::OddRI, BREAK),
        };
    }

    (WordContext { state: next, after_zwj: false }, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        let mut result = Vec::new();
        let mut ctx = None;
        let mut start = 0;
        for (offset, ch) in text.char_indices() {
            let rest = &text.as_bytes()[offset + ch.len_utf8()..];
            let (next, boundary) = transition(ctx, ch, rest);
            if boundary && offset > 0 {
                result.push(&text[start..offset]);
                start = offset;
            }
            ctx = Some(next);
        }
        if start < text.len() {
            result.push(&text[start..]);
        }
        result
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(words("Hello, world!"), ["Hello", ",", " ", "world", "!"]);
        assert_eq!(words("a  b"), ["a", "  ", "b"]);
    }

    #[test]
    fn test_mid_letter_punctuation() {
        assert_eq!(words("U.S.A."), ["U.S.A", "."]);
        assert_eq!(words("can't stop"), ["can't", " ", "stop"]);
        assert_eq!(words("end. "), ["end", ".", " "]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(words("3.14 1,000"), ["3.14", " ", "1,000"]);
        assert_eq!(words("a1b2"), ["a1b2"]);
        assert_eq!(words("snake_case_42"), ["snake_case_42"]);
        assert_eq!(words("1,"), ["1", ","]);
    }

    #[test]
    fn test_hebrew_double_quote() {
        assert_eq!(words("\u{05E6}\u{05D4}\"\u{05DC}"), ["\u{05E6}\u{05D4}\"\u{05DC}"]);
    }

    #[test]
    fn test_newlines() {
        assert_eq!(words("a\r\nb"), ["a", "\r\n", "b"]);
        // Extend right after a newline is not absorbed into it.
        assert_eq!(words("\n\u{0301}"), ["\n", "\u{0301}"]);
    }

    #[test]
    fn test_ignorables() {
        assert_eq!(words("e\u{0301}t\u{00AD}e"), ["e\u{0301}t\u{00AD}e"]);
        assert_eq!(words("\u{1F468}\u{200D}\u{1F469} x"), ["\u{1F468}\u{200D}\u{1F469}", " ", "x"]);
    }

    #[test]
    fn test_katakana_and_ideographs() {
        assert_eq!(words("\u{30AB}\u{30BF}\u{30AB}\u{30CA}"), ["\u{30AB}\u{30BF}\u{30AB}\u{30CA}"]);
        assert_eq!(words("\u{4E16}\u{754C}"), ["\u{4E16}", "\u{754C}"]);
    }

    #[test]
    fn test_regional_indicators() {
        let flags = "\u{1F1FA}\u{1F1F8}\u{1F1E9}\u{1F1EA}";
        assert_eq!(words(flags), ["\u{1F1FA}\u{1F1F8}", "\u{1F1E9}\u{1F1EA}"]);
    }
}
