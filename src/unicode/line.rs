// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Line break opportunities (UAX #14).

use log::trace;

use super::lookahead::peek_property;
use super::properties::{EastAsianWidth, GeneralCategory, GraphemeBreak, LineBreak};
use super::rules::{RuleFamily, Transition, resolve};

/// Whether a line may or must be broken in front of a code point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineBreakOpportunity {
    #[default]
    DontBreak,
    CanBreak,
    MustBreak,
}

use LineBreakOpportunity::{CanBreak, DontBreak, MustBreak};

dense_enum! {
    pub enum LineState {
        #[default]
        Any,
        BK,
        CR,
        LF,
        NL,
        SP,
        ZW,
        WJ,
        GL,
        BA,
        HY,
        CL,
        CP,
        EX,
        IS,
        SY,
        OP,
        QU,
        QUSP,
        NS,
        CLCPSP,
        B2,
        B2SP,
        CB,
        BB,
        LB21a,
        HL,
        AL,
        NU,
        PR,
        EB,
        IDEM,
        NUNU,
        NUSY,
        NUIS,
        NUCL,
        NUCP,
        PO,
        JL,
        JV,
        JT,
        H2,
        H3,
        OddRI,
        EvenRI,
        ExtPicCn,
    }
}

/// The line machine's full state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineContext {
    pub state: LineState,
    /// The previous code point was a ZWJ (LB8a).
    pub after_zwj: bool,
    /// The previous code point was a closing parenthesis that isn't East Asian F/W/H (LB30).
    pub cp_not_wide: bool,
}

use LineBreak as P;
use LineState as S;

// LB2 and LB3 (start and end of text) are handled by the caller.
// LB1, LB8a, LB9, LB10 and the context-dependent parts of LB12a/13/25/30 live in `advance`.
transition_table! {
    static RULES: LineState, LineBreak => LineBreakOpportunity;

    // LB4
    (S::BK, P::Any) => (S::Any, MustBreak, 40),

    // LB5
    (S::CR, P::LF) => (S::LF, DontBreak, 50),
    (S::CR, P::Any) => (S::Any, MustBreak, 50),
    (S::LF, P::Any) => (S::Any, MustBreak, 50),
    (S::NL, P::Any) => (S::Any, MustBreak, 50),

    // LB6
    (S::Any, P::BK) => (S::BK, DontBreak, 60),
    (S::Any, P::CR) => (S::CR, DontBreak, 60),
    (S::Any, P::LF) => (S::LF, DontBreak, 60),
    (S::Any, P::NL) => (S::NL, DontBreak, 60),

    // LB7
    (S::Any, P::SP) => (S::SP, DontBreak, 70),
    (S::Any, P::ZW) => (S::ZW, DontBreak, 70),

    // LB8
    (S::ZW, P::SP) => (S::ZW, DontBreak, 70),
    (S::ZW, P::Any) => (S::Any, CanBreak, 80),

    // LB11
    (S::Any, P::WJ) => (S::WJ, DontBreak, 110),
    (S::WJ, P::Any) => (S::Any, DontBreak, 110),

    // LB12
    (S::Any, P::GL) => (S::GL, CanBreak, 310),
    (S::GL, P::Any) => (S::Any, DontBreak, 120),

    // LB13
    (S::Any, P::CL) => (S::CL, CanBreak, 310),
    (S::Any, P::CP) => (S::CP, CanBreak, 310),
    (S::Any, P::EX) => (S::EX, DontBreak, 130),
    (S::Any, P::IS) => (S::IS, CanBreak, 310),
    (S::Any, P::SY) => (S::SY, CanBreak, 310),

    // LB14
    (S::Any, P::OP) => (S::OP, CanBreak, 310),
    (S::OP, P::SP) => (S::OP, DontBreak, 70),
    (S::OP, P::Any) => (S::Any, DontBreak, 140),

    // LB15
    (S::QU, P::SP) => (S::QUSP, DontBreak, 70),
    (S::QU, P::OP) => (S::OP, DontBreak, 150),
    (S::QUSP, P::OP) => (S::OP, DontBreak, 150),

    // LB16
    (S::CL, P::SP) => (S::CLCPSP, DontBreak, 70),
    (S::NUCL, P::SP) => (S::CLCPSP, DontBreak, 70),
    (S::CP, P::SP) => (S::CLCPSP, DontBreak, 70),
    (S::NUCP, P::SP) => (S::CLCPSP, DontBreak, 70),
    (S::CL, P::NS) => (S::NS, DontBreak, 160),
    (S::NUCL, P::NS) => (S::NS, DontBreak, 160),
    (S::CP, P::NS) => (S::NS, DontBreak, 160),
    (S::NUCP, P::NS) => (S::NS, DontBreak, 160),
    (S::CLCPSP, P::NS) => (S::NS, DontBreak, 160),

    // LB17
    (S::Any, P::B2) => (S::B2, CanBreak, 310),
    (S::B2, P::SP) => (S::B2SP, DontBreak, 70),
    (S::B2, P::B2) => (S::B2, DontBreak, 170),
    (S::B2SP, P::B2) => (S::B2, DontBreak, 170),

    // LB18
    (S::SP, P::Any) => (S::Any, CanBreak, 180),
    (S::QUSP, P::Any) => (S::Any, CanBreak, 180),
    (S::CLCPSP, P::Any) => (S::Any, CanBreak, 180),
    (S::B2SP, P::Any) => (S::Any, CanBreak, 180),

    // LB19
    (S::Any, P::QU) => (S::QU, DontBreak, 190),
    (S::QU, P::Any) => (S::Any, DontBreak, 190),

    // LB20
    (S::Any, P::CB) => (S::CB, CanBreak, 200),
    (S::CB, P::Any) => (S::Any, CanBreak, 200),

    // LB21
    (S::Any, P::BA) => (S::BA, DontBreak, 210),
    (S::Any, P::HY) => (S::HY, DontBreak, 210),
    (S::Any, P::NS) => (S::NS, DontBreak, 210),
    (S::Any, P::BB) => (S::BB, CanBreak, 310),
    (S::BB, P::Any) => (S::Any, DontBreak, 210),

    // LB21a
    (S::Any, P::HL) => (S::HL, CanBreak, 310),
    (S::HL, P::HY) => (S::LB21a, DontBreak, 210),
    (S::HL, P::BA) => (S::LB21a, DontBreak, 210),
    (S::LB21a, P::Any) => (S::Any, DontBreak, 211),

    // LB21b
    (S::SY, P::HL) => (S::HL, DontBreak, 212),
    (S::NUSY, P::HL) => (S::HL, DontBreak, 212),

    // LB22
    (S::Any, P::IN) => (S::Any, DontBreak, 220),

    // LB23
    (S::Any, P::AL) => (S::AL, CanBreak, 310),
    (S::Any, P::NU) => (S::NU, CanBreak, 310),
    (S::AL, P::NU) => (S::NU, DontBreak, 230),
    (S::HL, P::NU) => (S::NU, DontBreak, 230),
    (S::NU, P::AL) => (S::AL, DontBreak, 230),
    (S::NU, P::HL) => (S::HL, DontBreak, 230),
    (S::NUNU, P::AL) => (S::AL, DontBreak, 230),
    (S::NUNU, P::HL) => (S::HL, DontBreak, 230),

    // LB23a
    (S::Any, P::PR) => (S::PR, CanBreak, 310),
    (S::Any, P::ID) => (S::IDEM, CanBreak, 310),
    (S::Any, P::EB) => (S::EB, CanBreak, 310),
    (S::Any, P::EM) => (S::IDEM, CanBreak, 310),
    (S::PR, P::ID) => (S::IDEM, DontBreak, 231),
    (S::PR, P::EB) => (S::EB, DontBreak, 231),
    (S::PR, P::EM) => (S::IDEM, DontBreak, 231),
    (S::IDEM, P::PO) => (S::PO, DontBreak, 231),
    (S::EB, P::PO) => (S::PO, DontBreak, 231),

    // LB24
    (S::Any, P::PO) => (S::PO, CanBreak, 310),
    (S::PR, P::AL) => (S::AL, DontBreak, 240),
    (S::PR, P::HL) => (S::HL, DontBreak, 240),
    (S::PO, P::AL) => (S::AL, DontBreak, 240),
    (S::PO, P::HL) => (S::HL, DontBreak, 240),
    (S::AL, P::PR) => (S::PR, DontBreak, 240),
    (S::AL, P::PO) => (S::PO, DontBreak, 240),
    (S::HL, P::PR) => (S::PR, DontBreak, 240),
    (S::HL, P::PO) => (S::PO, DontBreak, 240),

    // LB25, without the lookahead part
    (S::PR, P::NU) => (S::NU, DontBreak, 250),
    (S::PO, P::NU) => (S::NU, DontBreak, 250),
    (S::OP, P::NU) => (S::NU, DontBreak, 250),
    (S::HY, P::NU) => (S::NU, DontBreak, 250),
    (S::NU, P::NU) => (S::NUNU, DontBreak, 250),
    (S::NU, P::SY) => (S::NUSY, DontBreak, 250),
    (S::NU, P::IS) => (S::NUIS, DontBreak, 250),
    (S::NUNU, P::NU) => (S::NUNU, DontBreak, 250),
    (S::NUNU, P::SY) => (S::NUSY, DontBreak, 250),
    (S::NUNU, P::IS) => (S::NUIS, DontBreak, 250),
    (S::NUSY, P::NU) => (S::NUNU, DontBreak, 250),
    (S::NUSY, P::SY) => (S::NUSY, DontBreak, 250),
    (S::NUSY, P::IS) => (S::NUIS, DontBreak, 250),
    (S::NUIS, P::NU) => (S::NUNU, DontBreak, 250),
    (S::NUIS, P::SY) => (S::NUSY, DontBreak, 250),
    (S::NUIS, P::IS) => (S::NUIS, DontBreak, 250),
    (S::NU, P::CL) => (S::NUCL, DontBreak, 250),
    (S::NU, P::CP) => (S::NUCP, DontBreak, 250),
    (S::NUNU, P::CL) => (S::NUCL, DontBreak, 250),
    (S::NUNU, P::CP) => (S::NUCP, DontBreak, 250),
    (S::NUSY, P::CL) => (S::NUCL, DontBreak, 250),
    (S::NUSY, P::CP) => (S::NUCP, DontBreak, 250),
    (S::NUIS, P::CL) => (S::NUCL, DontBreak, 250),
    (S::NUIS, P::CP) => (S::NUCP, DontBreak, 250),
    (S::NU, P::PO) => (S::PO, DontBreak, 250),
    (S::NUNU, P::PO) => (S::PO, DontBreak, 250),
    (S::NUSY, P::PO) => (S::PO, DontBreak, 250),
    (S::NUIS, P::PO) => (S::PO, DontBreak, 250),
    (S::NUCL, P::PO) => (S::PO, DontBreak, 250),
    (S::NUCP, P::PO) => (S::PO, DontBreak, 250),
    (S::NU, P::PR) => (S::PR, DontBreak, 250),
    (S::NUNU, P::PR) => (S::PR, DontBreak, 250),
    (S::NUSY, P::PR) => (S::PR, DontBreak, 250),
    (S::NUIS, P::PR) => (S::PR, DontBreak, 250),
    (S::NUCL, P::PR) => (S::PR, DontBreak, 250),
    (S::NUCP, P::PR) => (S::PR, DontBreak, 250),

    // LB26
    (S::Any, P::JL) => (S::JL, CanBreak, 310),
    (S::Any, P::JV) => (S::JV, CanBreak, 310),
    (S::Any, P::JT) => (S::JT, CanBreak, 310),
    (S::Any, P::H2) => (S::H2, CanBreak, 310),
    (S::Any, P::H3) => (S::H3, CanBreak, 310),
    (S::JL, P::JL) => (S::JL, DontBreak, 260),
    (S::JL, P::JV) => (S::JV, DontBreak, 260),
    (S::JL, P::H2) => (S::H2, DontBreak, 260),
    (S::JL, P::H3) => (S::H3, DontBreak, 260),
    (S::JV, P::JV) => (S::JV, DontBreak, 260),
    (S::JV, P::JT) => (S::JT, DontBreak, 260),
    (S::H2, P::JV) => (S::JV, DontBreak, 260),
    (S::H2, P::JT) => (S::JT, DontBreak, 260),
    (S::JT, P::JT) => (S::JT, DontBreak, 260),
    (S::H3, P::JT) => (S::JT, DontBreak, 260),

    // LB27
    (S::JL, P::PO) => (S::PO, DontBreak, 270),
    (S::JV, P::PO) => (S::PO, DontBreak, 270),
    (S::JT, P::PO) => (S::PO, DontBreak, 270),
    (S::H2, P::PO) => (S::PO, DontBreak, 270),
    (S::H3, P::PO) => (S::PO, DontBreak, 270),
    (S::PR, P::JL) => (S::JL, DontBreak, 270),
    (S::PR, P::JV) => (S::JV, DontBreak, 270),
    (S::PR, P::JT) => (S::JT, DontBreak, 270),
    (S::PR, P::H2) => (S::H2, DontBreak, 270),
    (S::PR, P::H3) => (S::H3, DontBreak, 270),

    // LB28
    (S::AL, P::AL) => (S::AL, DontBreak, 280),
    (S::AL, P::HL) => (S::HL, DontBreak, 280),
    (S::HL, P::AL) => (S::AL, DontBreak, 280),
    (S::HL, P::HL) => (S::HL, DontBreak, 280),

    // LB29
    (S::IS, P::AL) => (S::AL, DontBreak, 290),
    (S::IS, P::HL) => (S::HL, DontBreak, 290),
    (S::NUIS, P::AL) => (S::AL, DontBreak, 290),
    (S::NUIS, P::HL) => (S::HL, DontBreak, 290),
}

struct Line;

impl RuleFamily for Line {
    type State = LineState;
    type Prop = LineBreak;
    type Boundary = LineBreakOpportunity;

    const ANY_STATE: LineState = S::Any;
    const ANY_PROP: LineBreak = P::Any;
    // LB31
    const DEFAULT: Transition<LineState, LineBreakOpportunity> =
        Transition { state: S::Any, boundary: CanBreak, rule: 310 };

    #[inline]
    fn entry(
        state: LineState,
        prop: LineBreak,
    ) -> Option<Transition<LineState, LineBreakOpportunity>> {
        RULES[state.index()][prop.index()]
    }
}

/// East Asian Fullwidth, Wide or Halfwidth, as LB30 defines "$EastAsian".
fn is_east_asian(ch: char) -> bool {
    matches!(
        EastAsianWidth::of(ch),
        EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
    )
}

/// LB1: resolves the classes that UAX #14 leaves to the implementation.
fn resolve_class(prop: LineBreak, ch: char) -> LineBreak {
    match prop {
        P::AI | P::SG | P::XX => P::AL,
        P::SA => match GeneralCategory::of(ch) {
            GeneralCategory::Mn | GeneralCategory::Mc => P::CM,
            _ => P::AL,
        },
        P::CJ => P::NS,
        prop => prop,
    }
}

/// Feeds `ch` into the line machine.
///
/// `ctx` is `None` for the first code point of a text. `rest` is the text following `ch`.
/// Returns the new state and the break opportunity *before* `ch`.
pub fn transition(
    ctx: Option<LineContext>,
    ch: char,
    rest: &[u8],
) -> (LineContext, LineBreakOpportunity) {
    let (state, after_zwj, cp_not_wide) = match ctx {
        Some(c) => (Some(c.state), c.after_zwj, c.cp_not_wide),
        None => (None, false, false),
    };

    let (next, zwj, mut opportunity) = advance(state, cp_not_wide, ch, rest);

    // LB8a
    if after_zwj {
        opportunity = DontBreak;
    }

    let cp_not_wide = !zwj && matches!(next, S::CP | S::NUCP) && !is_east_asian(ch);
    (LineContext { state: next, after_zwj: zwj, cp_not_wide }, opportunity)
}

/// The rules without LB8a. Returns the new state, whether `ch` is a ZWJ
/// that a following code point must not be separated from, and the opportunity.
fn advance(
    state: Option<LineState>,
    cp_not_wide: bool,
    ch: char,
    rest: &[u8],
) -> (LineState, bool, LineBreakOpportunity) {
    let prop = resolve_class(LineBreak::of(ch), ch);

    // LB9 / LB10: combining marks take on the class of what they attach to.
    if matches!(prop, P::ZWJ | P::CM) {
        let zwj = prop == P::ZWJ;
        return match state {
            None | Some(S::BK | S::CR | S::LF | S::NL) => (S::AL, zwj, MustBreak),
            Some(S::SP | S::ZW | S::QUSP | S::CLCPSP | S::B2SP) => (S::AL, zwj, CanBreak),
            Some(state) => (state, zwj, DontBreak),
        };
    }

    let t = resolve::<Line>(state.unwrap_or_default(), prop);

    // LB12a
    if t.rule > 121
        && prop == P::GL
        && !matches!(state, Some(S::SP | S::BA | S::HY | S::LB21a | S::QUSP | S::CLCPSP | S::B2SP))
    {
        return (S::GL, false, DontBreak);
    }

    // LB13
    if t.rule > 130 && !matches!(state, Some(S::NU | S::NUNU)) {
        let closing = match prop {
            P::CL => Some(S::CL),
            P::CP => Some(S::CP),
            P::IS => Some(S::IS),
            P::SY => Some(S::SY),
            _ => None,
        };
        if let Some(closing) = closing {
            return (closing, false, DontBreak);
        }
    }

    // LB25: (PR | PO) × (OP | HY)? NU
    if t.rule > 250 && matches!(state, Some(S::PR | S::PO)) && matches!(prop, P::OP | P::HY) {
        let next = peek_property(rest, LineBreak::of);
        trace!("line lookahead: {state:?} x {prop:?} followed by {next:?}");
        if next == Some(P::NU) {
            return (S::NU, false, DontBreak);
        }
    }

    // LB30
    if t.rule > 300 {
        if matches!(state, Some(S::AL | S::HL | S::NU | S::NUNU)) && prop == P::OP {
            if !is_east_asian(ch) {
                return (S::OP, false, DontBreak);
            }
        } else if cp_not_wide {
            match prop {
                P::AL => return (S::AL, false, DontBreak),
                P::HL => return (S::HL, false, DontBreak),
                P::NU => return (S::NU, false, DontBreak),
                _ => {}
            }
        }
    }

    // LB30a
    if t.state == S::Any && prop == P::RI {
        return match state {
            Some(S::OddRI) => (S::EvenRI, false, DontBreak),
            _ => (S::OddRI, false, t.boundary),
        };
    }

    // LB30b
    if t.rule > 302 {
        if prop == P::EM && matches!(state, Some(S::EB | S::ExtPicCn)) {
            return (S::Any, false, DontBreak);
        }
        if GraphemeBreak::of(ch) == GraphemeBreak::ExtendedPictographic
            && GeneralCategory::of(ch) == GeneralCategory::Cn
        {
            return (S::ExtPicCn, false, CanBreak);
        }
    }

    (t.state, false, t.boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits `text` at every break opportunity, marking mandatory ones with a trailing `!`.
    fn segments(text: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut ctx = None;
        let mut start = 0;
        for (offset, ch) in text.char_indices() {
            let rest = &text.as_bytes()[offset + ch.len_utf8()..];
            let (next, opportunity) = transition(ctx, ch, rest);
            if offset > 0 && opportunity != DontBreak {
                let mut segment = text[start..offset].to_string();
                if opportunity == MustBreak {
                    segment.push('!');
                }
                result.push(segment);
                start = offset;
            }
            ctx = Some(next);
        }
        if start < text.len() {
            result.push(text[start..].to_string());
        }
        result
    }

    #[test]
    fn test_spaces_and_hyphens() {
        assert_eq!(segments("Hello world"), ["Hello ", "world"]);
        assert_eq!(segments("foo-bar baz"), ["foo-", "bar ", "baz"]);
        assert_eq!(segments("a  b"), ["a  ", "b"]);
    }

    #[test]
    fn test_mandatory_breaks() {
        assert_eq!(segments("a\nb"), ["a\n!", "b"]);
        assert_eq!(segments("a\r\nb"), ["a\r\n!", "b"]);
        assert_eq!(segments("a\u{2028}b"), ["a\u{2028}!", "b"]);
    }

    #[test]
    fn test_glue_and_joiners() {
        assert_eq!(segments("a\u{00A0}b c"), ["a\u{00A0}b ", "c"]);
        assert_eq!(segments("a\u{2060}b"), ["a\u{2060}b"]);
        assert_eq!(segments("x\u{200B}y"), ["x\u{200B}", "y"]);
        assert_eq!(segments("\u{4E00}\u{200D}\u{4E01}"), ["\u{4E00}\u{200D}\u{4E01}"]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(segments("x (a) y"), ["x ", "(a) ", "y"]);
        assert_eq!(segments("Hi! Yes."), ["Hi! ", "Yes."]);
        assert_eq!(segments("a(b"), ["a(b"]);
        assert_eq!(segments("\"quoted\" text"), ["\"quoted\" ", "text"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(segments("$(12) 3.5%"), ["$(12) ", "3.5%"]);
        assert_eq!(segments("1,000,000"), ["1,000,000"]);
    }

    #[test]
    fn test_ideographs() {
        assert_eq!(segments("\u{65E5}\u{672C}\u{8A9E}"), ["\u{65E5}", "\u{672C}", "\u{8A9E}"]);
        // No break before a closing ideographic full stop (LB13 via CL).
        assert_eq!(segments("\u{65E5}\u{3002}\u{672C}"), ["\u{65E5}\u{3002}", "\u{672C}"]);
        // Small kana behave as NS (CJ resolved by LB1).
        assert_eq!(segments("\u{3042}\u{3041}"), ["\u{3042}\u{3041}"]);
    }

    #[test]
    fn test_emoji() {
        let flags = "\u{1F1FA}\u{1F1F8}\u{1F1E9}\u{1F1EA}";
        assert_eq!(segments(flags), ["\u{1F1FA}\u{1F1F8}", "\u{1F1E9}\u{1F1EA}"]);
        assert_eq!(segments("\u{1F44B}\u{1F3FD}\u{1F44B}"), ["\u{1F44B}\u{1F3FD}", "\u{1F44B}"]);
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(segments("e\u{0301} x"), ["e\u{0301} ", "x"]);
        // A mark after a space is treated as AL (LB10).
        assert_eq!(segments("a \u{0301}b"), ["a ", "\u{0301}b"]);
    }

    #[test]
    fn test_hangul() {
        // 한국 어: H3 H2 SP H3
        assert_eq!(segments("\u{D55C}\u{AD6D} \u{C5B4}"), ["\u{D55C}", "\u{AD6D} ", "\u{C5B4}"]);
    }

    #[test]
    fn test_resolved_classes() {
        // Thai marks act as CM and Thai letters as AL.
        assert_eq!(segments("\u{0E01}\u{0E34}\u{0E02} x"), ["\u{0E01}\u{0E34}\u{0E02} ", "x"]);
        // Ambiguous punctuation acts as AL.
        assert_eq!(segments("a\u{00A7}b c"), ["a\u{00A7}b ", "c"]);
    }

    #[test]
    fn test_hebrew_hyphen() {
        assert_eq!(segments("\u{05D0}-\u{05D1} x"), ["\u{05D0}-\u{05D1} ", "x"]);
    }

    #[test]
    fn test_unassigned_pictographic() {
        assert_eq!(segments("\u{1FAFA}\u{1F3FB}"), ["\u{1FAFA}\u{1F3FB}"]);
        assert_eq!(segments("\u{1FAFA}\u{1FAFA}"), ["\u{1FAFA}", "\u{1FAFA}"]);
    }
}
