// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Extended grapheme cluster boundaries (UAX #29, section 3).

use super::properties::GraphemeBreak;
use super::rules::{BREAK, JOIN, RuleFamily, Transition, resolve};

dense_enum! {
    /// Where the grapheme machine is, relative to the rules that span more than 2 code points.
    pub enum GraphemeState {
        #[default]
        Any,
        CR,
        ControlLF,
        L,
        LVV,
        LVTT,
        Prepend,
        ExtendedPictographic,
        ExtendedPictographicZWJ,
        RIOdd,
        RIEven,
    }
}

use GraphemeBreak as P;
use GraphemeState as S;

// GB1 and GB2 (break at the start and end of text) are handled by the caller.
// GB9c (Indic conjunct linking) is not implemented.
transition_table! {
    static RULES: GraphemeState, GraphemeBreak => bool;

    // GB5
    (S::Any, P::CR) => (S::CR, BREAK, 50),
    (S::Any, P::LF) => (S::ControlLF, BREAK, 50),
    (S::Any, P::Control) => (S::ControlLF, BREAK, 50),

    // GB4
    (S::CR, P::Any) => (S::Any, BREAK, 40),
    (S::ControlLF, P::Any) => (S::Any, BREAK, 40),

    // GB3
    (S::CR, P::LF) => (S::ControlLF, JOIN, 30),

    // GB6
    (S::Any, P::L) => (S::L, BREAK, 9990),
    (S::L, P::L) => (S::L, JOIN, 60),
    (S::L, P::V) => (S::LVV, JOIN, 60),
    (S::L, P::LV) => (S::LVV, JOIN, 60),
    (S::L, P::LVT) => (S::LVTT, JOIN, 60),

    // GB7
    (S::Any, P::LV) => (S::LVV, BREAK, 9990),
    (S::Any, P::V) => (S::LVV, BREAK, 9990),
    (S::LVV, P::V) => (S::LVV, JOIN, 70),
    (S::LVV, P::T) => (S::LVTT, JOIN, 70),

    // GB8
    (S::Any, P::LVT) => (S::LVTT, BREAK, 9990),
    (S::Any, P::T) => (S::LVTT, BREAK, 9990),
    (S::LVTT, P::T) => (S::LVTT, JOIN, 80),

    // GB9
    (S::Any, P::Extend) => (S::Any, JOIN, 90),
    (S::Any, P::ZWJ) => (S::Any, JOIN, 90),

    // GB9a
    (S::Any, P::SpacingMark) => (S::Any, JOIN, 91),

    // GB9b
    (S::Any, P::Prepend) => (S::Prepend, BREAK, 9990),
    (S::Prepend, P::Any) => (S::Any, JOIN, 92),

    // GB11
    (S::Any, P::ExtendedPictographic) => (S::ExtendedPictographic, BREAK, 9990),
    (S::ExtendedPictographic, P::Extend) => (S::ExtendedPictographic, JOIN, 110),
    (S::ExtendedPictographic, P::ZWJ) => (S::ExtendedPictographicZWJ, JOIN, 110),
    (S::ExtendedPictographicZWJ, P::ExtendedPictographic) => (S::ExtendedPictographic, JOIN, 110),

    // GB12 / GB13
    (S::Any, P::RegionalIndicator) => (S::RIOdd, BREAK, 9990),
    (S::RIOdd, P::RegionalIndicator) => (S::RIEven, JOIN, 120),
    (S::RIEven, P::RegionalIndicator) => (S::RIOdd, BREAK, 120),
}

struct Grapheme;

impl RuleFamily for Grapheme {
    type State = GraphemeState;
    type Prop = GraphemeBreak;
    type Boundary = bool;

    const ANY_STATE: GraphemeState = S::Any;
    const ANY_PROP: GraphemeBreak = P::Any;
    // GB999
    const DEFAULT: Transition<GraphemeState, bool> =
        Transition { state: S::Any, boundary: BREAK, rule: 9990 };

    #[inline]
    fn entry(state: GraphemeState, prop: GraphemeBreak) -> Option<Transition<GraphemeState, bool>> {
        RULES[state.index()][prop.index()]
    }
}

/// Feeds the next code point's property into the grapheme machine.
///
/// Returns the new state and whether there's a cluster boundary *before* that code point.
/// The first code point of a text is fed with [`GraphemeState::Any`]; its boundary is meaningless.
#[inline]
pub fn transition(state: GraphemeState, prop: GraphemeBreak) -> (GraphemeState, bool) {
    let t = resolve::<Grapheme>(state, prop);
    (t.state, t.boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits `text` into clusters by running the machine over it.
    fn clusters(text: &str) -> Vec<String> {
        let mut result: Vec<String> = Vec::new();
        let mut state = S::Any;
        for ch in text.chars() {
            let (next, boundary) = transition(state, GraphemeBreak::of(ch));
            match result.last_mut() {
                Some(last) if !boundary => last.push(ch),
                _ => result.push(ch.to_string()),
            }
            state = next;
        }
        result
    }

    #[test]
    fn test_crlf() {
        assert_eq!(clusters("a\r\nb"), ["a", "\r\n", "b"]);
        assert_eq!(clusters("\n\r"), ["\n", "\r"]);
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(clusters("e\u{0301}x"), ["e\u{0301}", "x"]);
        // नमस्ते: the virama and vowel sign attach to the previous consonant.
        assert_eq!(
            clusters("\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}"),
            ["\u{0928}", "\u{092E}", "\u{0938}\u{094D}", "\u{0924}\u{0947}"]
        );
    }

    #[test]
    fn test_prepend_yields_to_control() {
        assert_eq!(clusters("\u{0600}a"), ["\u{0600}a"]);
        assert_eq!(clusters("\u{0600}\n"), ["\u{0600}", "\n"]);
    }

    #[test]
    fn test_hangul() {
        // ᄀ + 각 (L + LVT) and 가 + ᆨ (LV + T)
        assert_eq!(clusters("\u{1100}\u{AC01}"), ["\u{1100}\u{AC01}"]);
        assert_eq!(clusters("\u{AC00}\u{11A8}"), ["\u{AC00}\u{11A8}"]);
        assert_eq!(clusters("\u{AC01}\u{1161}"), ["\u{AC01}", "\u{1161}"]);
    }

    #[test]
    fn test_emoji_sequences() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(clusters(family), [family]);
        assert_eq!(clusters("\u{1F44B}\u{1F3FD}!"), ["\u{1F44B}\u{1F3FD}", "!"]);
        // ZWJ followed by a non-pictographic doesn't join.
        assert_eq!(clusters("\u{1F468}\u{200D}a"), ["\u{1F468}\u{200D}", "a"]);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        let (u, s, d) = ('\u{1F1FA}', '\u{1F1F8}', '\u{1F1E9}');
        let flags: String = [u, s, d, s, u].iter().collect();
        assert_eq!(clusters(&flags), [format!("{u}{s}"), format!("{d}{s}"), u.to_string()]);
    }
}
