// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Per-family property enumerations and the classifier that maps code points to them.

use std::cmp::Ordering;

use super::tables::*;

/// One row of a property table: an inclusive code point range and its property.
pub type PropertyRange<P> = (u32, u32, P);

dense_enum! {
    /// Grapheme_Cluster_Break, with Extended_Pictographic folded in.
    pub enum GraphemeBreak {
        #[default]
        Any,
        Prepend,
        CR,
        LF,
        Control,
        Extend,
        RegionalIndicator,
        SpacingMark,
        L,
        V,
        T,
        LV,
        LVT,
        ZWJ,
        ExtendedPictographic,
    }
}

dense_enum! {
    /// Word_Break, with Extended_Pictographic folded in.
    pub enum WordBreak {
        #[default]
        Any,
        CR,
        LF,
        Newline,
        Extend,
        ZWJ,
        RegionalIndicator,
        Format,
        Katakana,
        HebrewLetter,
        ALetter,
        SingleQuote,
        DoubleQuote,
        MidNumLet,
        MidLetter,
        MidNum,
        Numeric,
        ExtendNumLet,
        WSegSpace,
        ExtendedPictographic,
    }
}

dense_enum! {
    /// Sentence_Break.
    pub enum SentenceBreak {
        #[default]
        Any,
        CR,
        LF,
        Extend,
        Sep,
        Format,
        Sp,
        Lower,
        Upper,
        OLetter,
        Numeric,
        ATerm,
        SContinue,
        STerm,
        Close,
    }
}

dense_enum! {
    /// Line_Break. `Any` only ever appears as a rule wildcard.
    pub enum LineBreak {
        #[default]
        Any,
        BK,
        CR,
        LF,
        CM,
        NL,
        SG,
        WJ,
        ZW,
        GL,
        SP,
        ZWJ,
        B2,
        BA,
        BB,
        HY,
        CB,
        CL,
        CP,
        EX,
        IN,
        NS,
        OP,
        QU,
        IS,
        NU,
        PO,
        PR,
        SY,
        AI,
        AL,
        CJ,
        EB,
        EM,
        H2,
        H3,
        HL,
        ID,
        JL,
        JV,
        JT,
        RI,
        SA,
        XX,
    }
}

dense_enum! {
    /// East_Asian_Width.
    pub enum EastAsianWidth {
        #[default]
        Neutral,
        Ambiguous,
        Fullwidth,
        Halfwidth,
        Narrow,
        Wide,
    }
}

dense_enum! {
    /// General_Category. `Any` means the code point isn't covered by the table.
    pub enum GeneralCategory {
        #[default]
        Any,
        Cc,
        Cf,
        Cn,
        Co,
        Cs,
        Ll,
        Lm,
        Lo,
        Lt,
        Lu,
        Mc,
        Me,
        Mn,
        Nd,
        Nl,
        No,
        Pc,
        Pd,
        Pe,
        Pf,
        Pi,
        Po,
        Ps,
        Sc,
        Sk,
        Sm,
        So,
        Zl,
        Zp,
        Zs,
    }
}

fn compare(start: u32, end: u32, cp: u32) -> Ordering {
    if end < cp {
        Ordering::Less
    } else if start > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Binary search over a sorted table of non-overlapping ranges.
///
/// Returns `None` if no range contains `cp`; callers substitute their family's default.
#[inline]
pub fn lookup<P: Copy>(table: &[PropertyRange<P>], cp: u32) -> Option<P> {
    table.binary_search_by(|&(start, end, _)| compare(start, end, cp)).ok().map(|i| table[i].2)
}

fn contains(table: &[(u32, u32)], cp: u32) -> bool {
    table.binary_search_by(|&(start, end)| compare(start, end, cp)).is_ok()
}

const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
const HANGUL_T_COUNT: u32 = 28;

/// Hangul syllables are listed as one range. A syllable without a trailing
/// consonant (LV) sits at every 28th code point from U+AC00, the rest are LVT.
#[inline]
fn is_hangul_lv(cp: u32) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&cp)
        && (cp - HANGUL_SYLLABLE_FIRST) % HANGUL_T_COUNT == 0
}

impl GraphemeBreak {
    pub fn of(ch: char) -> Self {
        let cp = ch as u32;
        match cp {
            0x20..=0x7E => Self::Any,
            0x0A => Self::LF,
            0x0D => Self::CR,
            0x00..=0x1F | 0x7F..=0x9F => Self::Control,
            _ => match lookup(GRAPHEME_BREAK, cp).unwrap_or_default() {
                Self::LVT if is_hangul_lv(cp) => Self::LV,
                prop => prop,
            },
        }
    }
}

impl WordBreak {
    pub fn of(ch: char) -> Self {
        match ch {
            'a'..='z' | 'A'..='Z' => Self::ALetter,
            '0'..='9' => Self::Numeric,
            _ => match lookup(WORD_BREAK, ch as u32) {
                Some(prop) => prop,
                // The emoji data is shared with the grapheme table.
                None if GraphemeBreak::of(ch) == GraphemeBreak::ExtendedPictographic => {
                    Self::ExtendedPictographic
                }
                None => Self::Any,
            },
        }
    }
}

impl SentenceBreak {
    pub fn of(ch: char) -> Self {
        match ch {
            'a'..='z' => Self::Lower,
            'A'..='Z' => Self::Upper,
            '0'..='9' => Self::Numeric,
            _ => lookup(SENTENCE_BREAK, ch as u32)
                .unwrap_or_else(|| Self::from_category(GeneralCategory::of(ch))),
        }
    }

    /// Letters, digits and marks the sentence table doesn't list are
    /// classified by their general category.
    fn from_category(gc: GeneralCategory) -> Self {
        use GeneralCategory::*;
        match gc {
            Lu | Lt => Self::Upper,
            Ll => Self::Lower,
            Lo | Lm => Self::OLetter,
            Nd => Self::Numeric,
            Mn | Me => Self::Extend,
            Cf => Self::Format,
            _ => Self::Any,
        }
    }
}

impl LineBreak {
    /// Classifies `ch`, returning the raw table value (before LB1 resolution).
    pub fn of(ch: char) -> Self {
        let cp = ch as u32;
        match ch {
            'a'..='z' | 'A'..='Z' => Self::AL,
            '0'..='9' => Self::NU,
            _ => match lookup(LINE_BREAK, cp) {
                Some(Self::H3) if is_hangul_lv(cp) => Self::H2,
                Some(prop) => prop,
                // Unlisted code points resolve like XX, i.e. as AL after LB1.
                None => Self::XX,
            },
        }
    }
}

impl EastAsianWidth {
    pub fn of(ch: char) -> Self {
        match ch as u32 {
            0x20..=0x7E => Self::Narrow,
            0x00..=0x1F | 0x7F..=0x9F => Self::Neutral,
            cp => lookup(EAST_ASIAN_WIDTH, cp).unwrap_or_default(),
        }
    }
}

impl GeneralCategory {
    pub fn of(ch: char) -> Self {
        lookup(GENERAL_CATEGORY, ch as u32).unwrap_or_default()
    }
}

/// Whether `ch` is displayed as an emoji by default (Emoji_Presentation=Yes).
pub fn is_emoji_presentation(ch: char) -> bool {
    contains(EMOJI_PRESENTATION, ch as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted<P>(name: &str, table: &[PropertyRange<P>]) {
        let mut prev = None;
        for &(start, end, _) in table {
            assert!(start <= end, "{name}: inverted range {start:#x}..={end:#x}");
            if let Some(prev) = prev {
                assert!(start > prev, "{name}: {start:#x} overlaps the previous range");
            }
            prev = Some(end);
        }
    }

    #[test]
    fn test_tables_sorted() {
        assert_sorted("grapheme", GRAPHEME_BREAK);
        assert_sorted("word", WORD_BREAK);
        assert_sorted("sentence", SENTENCE_BREAK);
        assert_sorted("line", LINE_BREAK);
        assert_sorted("east asian width", EAST_ASIAN_WIDTH);
        assert_sorted("general category", GENERAL_CATEGORY);
        let emoji: Vec<_> = EMOJI_PRESENTATION.iter().map(|&(s, e)| (s, e, ())).collect();
        assert_sorted("emoji presentation", &emoji);
    }

    #[test]
    fn test_lookup_bounds() {
        let table = [(0x10, 0x1F, 1u8), (0x30, 0x30, 2), (0x40, 0x4F, 3)];
        assert_eq!(lookup(&table, 0x0F), None);
        assert_eq!(lookup(&table, 0x10), Some(1));
        assert_eq!(lookup(&table, 0x1F), Some(1));
        assert_eq!(lookup(&table, 0x20), None);
        assert_eq!(lookup(&table, 0x30), Some(2));
        assert_eq!(lookup(&table, 0x4F), Some(3));
        assert_eq!(lookup(&table, 0x50), None);
        assert_eq!(lookup::<u8>(&[], 0x10), None);
    }

    #[test]
    fn test_grapheme_classes() {
        assert_eq!(GraphemeBreak::of('a'), GraphemeBreak::Any);
        assert_eq!(GraphemeBreak::of('\r'), GraphemeBreak::CR);
        assert_eq!(GraphemeBreak::of('\n'), GraphemeBreak::LF);
        assert_eq!(GraphemeBreak::of('\t'), GraphemeBreak::Control);
        assert_eq!(GraphemeBreak::of('\u{0301}'), GraphemeBreak::Extend);
        assert_eq!(GraphemeBreak::of('\u{200D}'), GraphemeBreak::ZWJ);
        assert_eq!(GraphemeBreak::of('\u{1F1FA}'), GraphemeBreak::RegionalIndicator);
        assert_eq!(GraphemeBreak::of('\u{1F600}'), GraphemeBreak::ExtendedPictographic);
        assert_eq!(GraphemeBreak::of('\u{1F3FB}'), GraphemeBreak::Extend);
        assert_eq!(GraphemeBreak::of('\u{4E16}'), GraphemeBreak::Any);
    }

    #[test]
    fn test_hangul_syllables() {
        assert_eq!(GraphemeBreak::of('\u{AC00}'), GraphemeBreak::LV); // 가
        assert_eq!(GraphemeBreak::of('\u{AC01}'), GraphemeBreak::LVT); // 각
        assert_eq!(GraphemeBreak::of('\u{AC1C}'), GraphemeBreak::LV); // 개
        assert_eq!(LineBreak::of('\u{AC00}'), LineBreak::H2);
        assert_eq!(LineBreak::of('\u{D7A3}'), LineBreak::H3);
        assert_eq!(GraphemeBreak::of('\u{1100}'), GraphemeBreak::L);
    }

    #[test]
    fn test_word_classes() {
        assert_eq!(WordBreak::of('.'), WordBreak::MidNumLet);
        assert_eq!(WordBreak::of('\''), WordBreak::SingleQuote);
        assert_eq!(WordBreak::of(' '), WordBreak::WSegSpace);
        assert_eq!(WordBreak::of('\u{05D0}'), WordBreak::HebrewLetter);
        assert_eq!(WordBreak::of('\u{30AB}'), WordBreak::Katakana);
        assert_eq!(WordBreak::of('\u{3042}'), WordBreak::Any);
        assert_eq!(WordBreak::of('\u{1F600}'), WordBreak::ExtendedPictographic);
    }

    #[test]
    fn test_sentence_classes() {
        assert_eq!(SentenceBreak::of('.'), SentenceBreak::ATerm);
        assert_eq!(SentenceBreak::of('?'), SentenceBreak::STerm);
        assert_eq!(SentenceBreak::of(')'), SentenceBreak::Close);
        // Not in the sentence table, resolved via the general category.
        assert_eq!(SentenceBreak::of('\u{0416}'), SentenceBreak::Upper); // Ж
        assert_eq!(SentenceBreak::of('\u{0436}'), SentenceBreak::Lower); // ж
        assert_eq!(SentenceBreak::of('\u{4E16}'), SentenceBreak::OLetter);
        assert_eq!(SentenceBreak::of('\u{0966}'), SentenceBreak::Numeric);
        assert_eq!(SentenceBreak::of('\u{2603}'), SentenceBreak::Any);
    }

    #[test]
    fn test_line_classes() {
        assert_eq!(LineBreak::of(' '), LineBreak::SP);
        assert_eq!(LineBreak::of('('), LineBreak::OP);
        assert_eq!(LineBreak::of('\u{3042}'), LineBreak::ID);
        assert_eq!(LineBreak::of('\u{3041}'), LineBreak::CJ);
        assert_eq!(LineBreak::of('\u{0E01}'), LineBreak::SA);
        assert_eq!(LineBreak::of('\u{1F3FB}'), LineBreak::EM);
        assert_eq!(LineBreak::of('\u{10FFFF}'), LineBreak::XX);
    }

    #[test]
    fn test_east_asian_width() {
        assert_eq!(EastAsianWidth::of('a'), EastAsianWidth::Narrow);
        assert_eq!(EastAsianWidth::of('\u{4E16}'), EastAsianWidth::Wide);
        assert_eq!(EastAsianWidth::of('\u{FF21}'), EastAsianWidth::Fullwidth);
        assert_eq!(EastAsianWidth::of('\u{FF76}'), EastAsianWidth::Halfwidth);
        assert_eq!(EastAsianWidth::of('\u{00B1}'), EastAsianWidth::Ambiguous);
        assert_eq!(EastAsianWidth::of('\u{0100}'), EastAsianWidth::Neutral);
    }

    #[test]
    fn test_emoji_presentation() {
        assert!(is_emoji_presentation('\u{1F600}'));
        assert!(is_emoji_presentation('\u{231A}'));
        assert!(!is_emoji_presentation('\u{2764}'));
        assert!(!is_emoji_presentation('a'));
    }
}
