// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Property range tables.
//!
//! Each table is sorted ascending by start, and ranges never overlap.
//! The tables cover the scripts and symbols most text runs into (Latin, Greek,
//! Cyrillic, Hebrew, Arabic, Devanagari, Bengali, Thai, CJK, Hangul, emoji); code points
//! outside them classify as the family's default property.

use super::properties::{
    EastAsianWidth, GeneralCategory, GraphemeBreak, LineBreak, PropertyRange, SentenceBreak,
    WordBreak,
};

#[rustfmt::skip]
pub static GRAPHEME_BREAK: &[PropertyRange<GraphemeBreak>] = {
    use GraphemeBreak::*;
    &[
        (0x0000, 0x0009, Control),
        (0x000A, 0x000A, LF),
        (0x000B, 0x000C, Control),
        (0x000D, 0x000D, CR),
        (0x000E, 0x001F, Control),
        (0x007F, 0x009F, Control),
        (0x00A9, 0x00A9, ExtendedPictographic),
        (0x00AD, 0x00AD, Control),
        (0x00AE, 0x00AE, ExtendedPictographic),
        (0x0300, 0x036F, Extend),
        (0x0483, 0x0489, Extend),
        (0x0591, 0x05BD, Extend),
        (0x05BF, 0x05BF, Extend),
        (0x05C1, 0x05C2, Extend),
        (0x05C4, 0x05C5, Extend),
        (0x05C7, 0x05C7, Extend),
        (0x0600, 0x0605, Prepend),
        (0x0610, 0x061A, Extend),
        (0x061C, 0x061C, Control),
        (0x064B, 0x065F, Extend),
        (0x0670, 0x0670, Extend),
        (0x06D6, 0x06DC, Extend),
        (0x06DD, 0x06DD, Prepend),
        (0x06DF, 0x06E4, Extend),
        (0x06E7, 0x06E8, Extend),
        (0x06EA, 0x06ED, Extend),
        (0x070F, 0x070F, Prepend),
        (0x0711, 0x0711, Extend),
        (0x0730, 0x074A, Extend),
        (0x0890, 0x0891, Prepend),
        (0x08E2, 0x08E2, Prepend),
        (0x0900, 0x0902, Extend),
        (0x0903, 0x0903, SpacingMark),
        (0x093A, 0x093A, Extend),
        (0x093B, 0x093B, SpacingMark),
        (0x093C, 0x093C, Extend),
        (0x093E, 0x0940, SpacingMark),
        (0x0941, 0x0948, Extend),
        (0x0949, 0x094C, SpacingMark),
        (0x094D, 0x094D, Extend),
        (0x094E, 0x094F, SpacingMark),
        (0x0951, 0x0957, Extend),
        (0x0962, 0x0963, Extend),
        (0x0981, 0x0981, Extend),
        (0x0982, 0x0983, SpacingMark),
        (0x09BC, 0x09BC, Extend),
        (0x09BE, 0x09BE, Extend),
        (0x09BF, 0x09C0, SpacingMark),
        (0x09C1, 0x09C4, Extend),
        (0x09C7, 0x09C8, SpacingMark),
        (0x09CB, 0x09CC, SpacingMark),
        (0x09CD, 0x09CD, Extend),
        (0x09D7, 0x09D7, Extend),
        (0x09E2, 0x09E3, Extend),
        (0x09FE, 0x09FE, Extend),
        (0x0D4E, 0x0D4E, Prepend),
        (0x0E31, 0x0E31, Extend),
        (0x0E33, 0x0E33, SpacingMark),
        (0x0E34, 0x0E3A, Extend),
        (0x0E47, 0x0E4E, Extend),
        (0x1100, 0x115F, L),
        (0x1160, 0x11A7, V),
        (0x11A8, 0x11FF, T),
        (0x1AB0, 0x1AFF, Extend),
        (0x1DC0, 0x1DFF, Extend),
        (0x200B, 0x200B, Control),
        (0x200C, 0x200C, Extend),
        (0x200D, 0x200D, ZWJ),
        (0x200E, 0x200F, Control),
        (0x2028, 0x202E, Control),
        (0x203C, 0x203C, ExtendedPictographic),
        (0x2049, 0x2049, ExtendedPictographic),
        (0x2060, 0x206F, Control),
        (0x20D0, 0x20F0, Extend),
        (0x2122, 0x2122, ExtendedPictographic),
        (0x2139, 0x2139, ExtendedPictographic),
        (0x2194, 0x2199, ExtendedPictographic),
        (0x21A9, 0x21AA, ExtendedPictographic),
        (0x231A, 0x231B, ExtendedPictographic),
        (0x2328, 0x2328, ExtendedPictographic),
        (0x2388, 0x2388, ExtendedPictographic),
        (0x23CF, 0x23CF, ExtendedPictographic),
        (0x23E9, 0x23F3, ExtendedPictographic),
        (0x23F8, 0x23FA, ExtendedPictographic),
        (0x24C2, 0x24C2, ExtendedPictographic),
        (0x25AA, 0x25AB, ExtendedPictographic),
        (0x25B6, 0x25B6, ExtendedPictographic),
        (0x25C0, 0x25C0, ExtendedPictographic),
        (0x25FB, 0x25FE, ExtendedPictographic),
        (0x2600, 0x2605, ExtendedPictographic),
        (0x2607, 0x2612, ExtendedPictographic),
        (0x2614, 0x2685, ExtendedPictographic),
        (0x2690, 0x2705, ExtendedPictographic),
        (0x2708, 0x2712, ExtendedPictographic),
        (0x2714, 0x2714, ExtendedPictographic),
        (0x2716, 0x2716, ExtendedPictographic),
        (0x271D, 0x271D, ExtendedPictographic),
        (0x2721, 0x2721, ExtendedPictographic),
        (0x2728, 0x2728, ExtendedPictographic),
        (0x2733, 0x2734, ExtendedPictographic),
        (0x2744, 0x2744, ExtendedPictographic),
        (0x2747, 0x2747, ExtendedPictographic),
        (0x274C, 0x274C, ExtendedPictographic),
        (0x274E, 0x274E, ExtendedPictographic),
        (0x2753, 0x2755, ExtendedPictographic),
        (0x2757, 0x2757, ExtendedPictographic),
        (0x2763, 0x2767, ExtendedPictographic),
        (0x2795, 0x2797, ExtendedPictographic),
        (0x27A1, 0x27A1, ExtendedPictographic),
        (0x27B0, 0x27B0, ExtendedPictographic),
        (0x27BF, 0x27BF, ExtendedPictographic),
        (0x2934, 0x2935, ExtendedPictographic),
        (0x2B05, 0x2B07, ExtendedPictographic),
        (0x2B1B, 0x2B1C, ExtendedPictographic),
        (0x2B50, 0x2B50, ExtendedPictographic),
        (0x2B55, 0x2B55, ExtendedPictographic),
        (0x302A, 0x302F, Extend),
        (0x3030, 0x3030, ExtendedPictographic),
        (0x303D, 0x303D, ExtendedPictographic),
        (0x3099, 0x309A, Extend),
        (0x3297, 0x3297, ExtendedPictographic),
        (0x3299, 0x3299, ExtendedPictographic),
        (0xA960, 0xA97C, L),
        (0xAC00, 0xD7A3, LVT),
        (0xD7B0, 0xD7C6, V),
        (0xD7CB, 0xD7FB, T),
        (0xFE00, 0xFE0F, Extend),
        (0xFE20, 0xFE2F, Extend),
        (0xFEFF, 0xFEFF, Control),
        (0xFF9E, 0xFF9F, Extend),
        (0xFFF0, 0xFFFB, Control),
        (0x110BD, 0x110BD, Prepend),
        (0x1F000, 0x1F0FF, ExtendedPictographic),
        (0x1F10D, 0x1F10F, ExtendedPictographic),
        (0x1F12F, 0x1F12F, ExtendedPictographic),
        (0x1F16C, 0x1F171, ExtendedPictographic),
        (0x1F17E, 0x1F17F, ExtendedPictographic),
        (0x1F18E, 0x1F18E, ExtendedPictographic),
        (0x1F191, 0x1F19A, ExtendedPictographic),
        (0x1F1AD, 0x1F1E5, ExtendedPictographic),
        (0x1F1E6, 0x1F1FF, RegionalIndicator),
        (0x1F201, 0x1F20F, ExtendedPictographic),
        (0x1F21A, 0x1F21A, ExtendedPictographic),
        (0x1F22F, 0x1F22F, ExtendedPictographic),
        (0x1F232, 0x1F23A, ExtendedPictographic),
        (0x1F23C, 0x1F23F, ExtendedPictographic),
        (0x1F249, 0x1F3FA, ExtendedPictographic),
        (0x1F3FB, 0x1F3FF, Extend),
        (0x1F400, 0x1F53D, ExtendedPictographic),
        (0x1F546, 0x1F64F, ExtendedPictographic),
        (0x1F680, 0x1F6FF, ExtendedPictographic),
        (0x1F774, 0x1F77F, ExtendedPictographic),
        (0x1F7D5, 0x1F7FF, ExtendedPictographic),
        (0x1F80C, 0x1F80F, ExtendedPictographic),
        (0x1F848, 0x1F84F, ExtendedPictographic),
        (0x1F85A, 0x1F85F, ExtendedPictographic),
        (0x1F888, 0x1F88F, ExtendedPictographic),
        (0x1F8AE, 0x1F8FF, ExtendedPictographic),
        (0x1F90C, 0x1F93A, ExtendedPictographic),
        (0x1F93C, 0x1F945, ExtendedPictographic),
        (0x1F947, 0x1FAFF, ExtendedPictographic),
        (0x1FC00, 0x1FFFD, ExtendedPictographic),
        (0xE0000, 0xE001F, Control),
        (0xE0020, 0xE007F, Extend),
        (0xE0080, 0xE00FF, Control),
        (0xE0100, 0xE01EF, Extend),
        (0xE01F0, 0xE0FFF, Control),
    ]
};

#[rustfmt::skip]
pub static WORD_BREAK: &[PropertyRange<WordBreak>] = {
    use WordBreak::*;
    &[
        (0x000A, 0x000A, LF),
        (0x000B, 0x000C, Newline),
        (0x000D, 0x000D, CR),
        (0x0020, 0x0020, WSegSpace),
        (0x0022, 0x0022, DoubleQuote),
        (0x0027, 0x0027, SingleQuote),
        (0x002C, 0x002C, MidNum),
        (0x002E, 0x002E, MidNumLet),
        (0x0030, 0x0039, Numeric),
        (0x003A, 0x003A, MidLetter),
        (0x003B, 0x003B, MidNum),
        (0x0041, 0x005A, ALetter),
        (0x005F, 0x005F, ExtendNumLet),
        (0x0061, 0x007A, ALetter),
        (0x0085, 0x0085, Newline),
        (0x00AA, 0x00AA, ALetter),
        (0x00AD, 0x00AD, Format),
        (0x00B5, 0x00B5, ALetter),
        (0x00B7, 0x00B7, MidLetter),
        (0x00BA, 0x00BA, ALetter),
        (0x00C0, 0x00D6, ALetter),
        (0x00D8, 0x00F6, ALetter),
        (0x00F8, 0x02D7, ALetter),
        (0x02DE, 0x02FF, ALetter),
        (0x0300, 0x036F, Extend),
        (0x0370, 0x0374, ALetter),
        (0x0376, 0x0377, ALetter),
        (0x037A, 0x037D, ALetter),
        (0x037E, 0x037E, MidNum),
        (0x037F, 0x037F, ALetter),
        (0x0386, 0x0386, ALetter),
        (0x0387, 0x0387, MidLetter),
        (0x0388, 0x038A, ALetter),
        (0x038C, 0x038C, ALetter),
        (0x038E, 0x03A1, ALetter),
        (0x03A3, 0x03F5, ALetter),
        (0x03F7, 0x0481, ALetter),
        (0x0483, 0x0489, Extend),
        (0x048A, 0x052F, ALetter),
        (0x0531, 0x0556, ALetter),
        (0x0560, 0x0588, ALetter),
        (0x0589, 0x0589, MidNum),
        (0x0591, 0x05BD, Extend),
        (0x05BF, 0x05BF, Extend),
        (0x05C1, 0x05C2, Extend),
        (0x05C4, 0x05C5, Extend),
        (0x05C7, 0x05C7, Extend),
        (0x05D0, 0x05EA, HebrewLetter),
        (0x05EF, 0x05F2, HebrewLetter),
        (0x05F3, 0x05F3, ALetter),
        (0x05F4, 0x05F4, MidLetter),
        (0x0600, 0x0605, Format),
        (0x060C, 0x060D, MidNum),
        (0x0610, 0x061A, Extend),
        (0x061C, 0x061C, Format),
        (0x0620, 0x064A, ALetter),
        (0x064B, 0x065F, Extend),
        (0x0660, 0x0669, Numeric),
        (0x066B, 0x066B, Numeric),
        (0x066C, 0x066C, MidNum),
        (0x066E, 0x066F, ALetter),
        (0x0670, 0x0670, Extend),
        (0x0671, 0x06D3, ALetter),
        (0x06D5, 0x06D5, ALetter),
        (0x06D6, 0x06DC, Extend),
        (0x06DD, 0x06DD, Format),
        (0x06DF, 0x06E4, Extend),
        (0x06E5, 0x06E6, ALetter),
        (0x06E7, 0x06E8, Extend),
        (0x06EA, 0x06ED, Extend),
        (0x06EE, 0x06EF, ALetter),
        (0x06F0, 0x06F9, Numeric),
        (0x06FA, 0x06FC, ALetter),
        (0x0900, 0x0903, Extend),
        (0x0904, 0x0939, ALetter),
        (0x093A, 0x093C, Extend),
        (0x093D, 0x093D, ALetter),
        (0x093E, 0x094F, Extend),
        (0x0950, 0x0950, ALetter),
        (0x0951, 0x0957, Extend),
        (0x0958, 0x0961, ALetter),
        (0x0962, 0x0963, Extend),
        (0x0966, 0x096F, Numeric),
        (0x0971, 0x0980, ALetter),
        (0x0981, 0x0983, Extend),
        (0x0985, 0x09B9, ALetter),
        (0x09BC, 0x09BC, Extend),
        (0x09BD, 0x09BD, ALetter),
        (0x09BE, 0x09CD, Extend),
        (0x09CE, 0x09CE, ALetter),
        (0x09D7, 0x09D7, Extend),
        (0x09DC, 0x09E1, ALetter),
        (0x09E2, 0x09E3, Extend),
        (0x09E6, 0x09EF, Numeric),
        (0x0E31, 0x0E31, Extend),
        (0x0E34, 0x0E3A, Extend),
        (0x0E47, 0x0E4E, Extend),
        (0x0E50, 0x0E59, Numeric),
        (0x10A0, 0x10FF, ALetter),
        (0x1100, 0x11FF, ALetter),
        (0x1680, 0x1680, WSegSpace),
        (0x1AB0, 0x1AFF, Extend),
        (0x1DC0, 0x1DFF, Extend),
        (0x1E00, 0x1FFF, ALetter),
        (0x2000, 0x2006, WSegSpace),
        (0x2008, 0x200A, WSegSpace),
        (0x200C, 0x200C, Extend),
        (0x200D, 0x200D, ZWJ),
        (0x200E, 0x200F, Format),
        (0x2018, 0x2019, MidNumLet),
        (0x2024, 0x2024, MidNumLet),
        (0x2027, 0x2027, MidLetter),
        (0x2028, 0x2029, Newline),
        (0x202A, 0x202E, Format),
        (0x202F, 0x202F, ExtendNumLet),
        (0x203F, 0x2040, ExtendNumLet),
        (0x2044, 0x2044, MidNum),
        (0x2054, 0x2054, ExtendNumLet),
        (0x205F, 0x205F, WSegSpace),
        (0x2060, 0x2064, Format),
        (0x2066, 0x206F, Format),
        (0x20D0, 0x20F0, Extend),
        (0x2C00, 0x2CE4, ALetter),
        (0x3000, 0x3000, WSegSpace),
        (0x302A, 0x302F, Extend),
        (0x3031, 0x3035, Katakana),
        (0x3099, 0x309A, Extend),
        (0x309B, 0x309C, Katakana),
        (0x30A0, 0x30FA, Katakana),
        (0x30FC, 0x30FF, Katakana),
        (0x3131, 0x318E, ALetter),
        (0x31F0, 0x31FF, Katakana),
        (0x32D0, 0x32FE, Katakana),
        (0x3300, 0x3357, Katakana),
        (0xA960, 0xA97C, ALetter),
        (0xAC00, 0xD7A3, ALetter),
        (0xD7B0, 0xD7FB, ALetter),
        (0xFB00, 0xFB06, ALetter),
        (0xFB1D, 0xFB1D, HebrewLetter),
        (0xFB1E, 0xFB1E, Extend),
        (0xFB1F, 0xFB28, HebrewLetter),
        (0xFB2A, 0xFB4F, HebrewLetter),
        (0xFE00, 0xFE0F, Extend),
        (0xFE10, 0xFE10, MidNum),
        (0xFE13, 0xFE13, MidLetter),
        (0xFE14, 0xFE14, MidNum),
        (0xFE20, 0xFE2F, Extend),
        (0xFE33, 0xFE34, ExtendNumLet),
        (0xFE4D, 0xFE4F, ExtendNumLet),
        (0xFE50, 0xFE50, MidNum),
        (0xFE52, 0xFE52, MidNumLet),
        (0xFE54, 0xFE54, MidNum),
        (0xFE55, 0xFE55, MidLetter),
        (0xFEFF, 0xFEFF, Format),
        (0xFF07, 0xFF07, MidNumLet),
        (0xFF0C, 0xFF0C, MidNum),
        (0xFF0E, 0xFF0E, MidNumLet),
        (0xFF10, 0xFF19, Numeric),
        (0xFF1A, 0xFF1A, MidLetter),
        (0xFF1B, 0xFF1B, MidNum),
        (0xFF21, 0xFF3A, ALetter),
        (0xFF3F, 0xFF3F, ExtendNumLet),
        (0xFF41, 0xFF5A, ALetter),
        (0xFF66, 0xFF9D, Katakana),
        (0xFF9E, 0xFF9F, Extend),
        (0xFFA0, 0xFFDC, ALetter),
        (0xFFF9, 0xFFFB, Format),
        (0x1B000, 0x1B000, Katakana),
        (0x1F130, 0x1F149, ALetter),
        (0x1F150, 0x1F169, ALetter),
        (0x1F170, 0x1F189, ALetter),
        (0x1F1E6, 0x1F1FF, RegionalIndicator),
        (0x1F3FB, 0x1F3FF, Extend),
        (0x1FBF0, 0x1FBF9, Numeric),
        (0xE0001, 0xE0001, Format),
        (0xE0020, 0xE007F, Extend),
        (0xE0100, 0xE01EF, Extend),
    ]
};

#[rustfmt::skip]
pub static SENTENCE_BREAK: &[PropertyRange<SentenceBreak>] = {
    use SentenceBreak::*;
    &[
        (0x0009, 0x0009, Sp),
        (0x000A, 0x000A, LF),
        (0x000B, 0x000C, Sp),
        (0x000D, 0x000D, CR),
        (0x0020, 0x0020, Sp),
        (0x0021, 0x0021, STerm),
        (0x0022, 0x0022, Close),
        (0x0027, 0x0029, Close),
        (0x002C, 0x002D, SContinue),
        (0x002E, 0x002E, ATerm),
        (0x0030, 0x0039, Numeric),
        (0x003A, 0x003A, SContinue),
        (0x003F, 0x003F, STerm),
        (0x0041, 0x005A, Upper),
        (0x005B, 0x005B, Close),
        (0x005D, 0x005D, Close),
        (0x0061, 0x007A, Lower),
        (0x007B, 0x007B, Close),
        (0x007D, 0x007D, Close),
        (0x0085, 0x0085, Sep),
        (0x00A0, 0x00A0, Sp),
        (0x00AA, 0x00AA, Lower),
        (0x00AB, 0x00AB, Close),
        (0x00AD, 0x00AD, Format),
        (0x00B5, 0x00B5, Lower),
        (0x00BA, 0x00BA, Lower),
        (0x00BB, 0x00BB, Close),
        (0x00C0, 0x00D6, Upper),
        (0x00D8, 0x00DE, Upper),
        (0x00DF, 0x00F6, Lower),
        (0x00F8, 0x00FF, Lower),
        (0x0300, 0x036F, Extend),
        (0x055D, 0x055D, SContinue),
        (0x0589, 0x0589, STerm),
        (0x0600, 0x0605, Format),
        (0x060C, 0x060D, SContinue),
        (0x061C, 0x061C, Format),
        (0x061D, 0x061F, STerm),
        (0x06D4, 0x06D4, STerm),
        (0x06DD, 0x06DD, Format),
        (0x070F, 0x070F, Format),
        (0x07F8, 0x07F8, SContinue),
        (0x0964, 0x0965, STerm),
        (0x1680, 0x1680, Sp),
        (0x1802, 0x1802, SContinue),
        (0x1808, 0x1808, SContinue),
        (0x2000, 0x200A, Sp),
        (0x200C, 0x200D, Extend),
        (0x200E, 0x200F, Format),
        (0x2013, 0x2014, SContinue),
        (0x2018, 0x201F, Close),
        (0x2024, 0x2024, ATerm),
        (0x2028, 0x2029, Sep),
        (0x202A, 0x202E, Format),
        (0x202F, 0x202F, Sp),
        (0x2039, 0x203A, Close),
        (0x203C, 0x203D, STerm),
        (0x2045, 0x2046, Close),
        (0x2047, 0x2049, STerm),
        (0x205F, 0x205F, Sp),
        (0x2060, 0x2064, Format),
        (0x2066, 0x206F, Format),
        (0x207D, 0x207E, Close),
        (0x208D, 0x208E, Close),
        (0x20D0, 0x20F0, Extend),
        (0x275B, 0x2760, Close),
        (0x2768, 0x2775, Close),
        (0x27C5, 0x27C6, Close),
        (0x27E6, 0x27EF, Close),
        (0x2983, 0x2998, Close),
        (0x29D8, 0x29DB, Close),
        (0x29FC, 0x29FD, Close),
        (0x2E42, 0x2E42, Close),
        (0x3000, 0x3000, Sp),
        (0x3001, 0x3001, SContinue),
        (0x3002, 0x3002, STerm),
        (0x3008, 0x3011, Close),
        (0x3014, 0x301B, Close),
        (0x301D, 0x301F, Close),
        (0x3099, 0x309A, Extend),
        (0xFD3E, 0xFD3F, Close),
        (0xFE00, 0xFE0F, Extend),
        (0xFE10, 0xFE11, SContinue),
        (0xFE13, 0xFE13, SContinue),
        (0xFE31, 0xFE32, SContinue),
        (0xFE50, 0xFE51, SContinue),
        (0xFE52, 0xFE52, ATerm),
        (0xFE55, 0xFE55, SContinue),
        (0xFE56, 0xFE57, STerm),
        (0xFE58, 0xFE58, SContinue),
        (0xFE59, 0xFE5E, Close),
        (0xFE63, 0xFE63, SContinue),
        (0xFEFF, 0xFEFF, Format),
        (0xFF01, 0xFF01, STerm),
        (0xFF08, 0xFF09, Close),
        (0xFF0C, 0xFF0D, SContinue),
        (0xFF0E, 0xFF0E, ATerm),
        (0xFF10, 0xFF19, Numeric),
        (0xFF1A, 0xFF1A, SContinue),
        (0xFF1F, 0xFF1F, STerm),
        (0xFF21, 0xFF3A, Upper),
        (0xFF3B, 0xFF3B, Close),
        (0xFF3D, 0xFF3D, Close),
        (0xFF41, 0xFF5A, Lower),
        (0xFF5B, 0xFF5B, Close),
        (0xFF5D, 0xFF5D, Close),
        (0xFF5F, 0xFF60, Close),
        (0xFF61, 0xFF61, STerm),
        (0xFF62, 0xFF63, Close),
        (0xFF64, 0xFF64, SContinue),
        (0xFFF9, 0xFFFB, Format),
        (0x1F3FB, 0x1F3FF, Extend),
        (0xE0001, 0xE0001, Format),
        (0xE0020, 0xE007F, Extend),
        (0xE0100, 0xE01EF, Extend),
    ]
};

#[rustfmt::skip]
pub static LINE_BREAK: &[PropertyRange<LineBreak>] = {
    use LineBreak::*;
    &[
        (0x0000, 0x0008, CM),
        (0x0009, 0x0009, BA),
        (0x000A, 0x000A, LF),
        (0x000B, 0x000C, BK),
        (0x000D, 0x000D, CR),
        (0x000E, 0x001F, CM),
        (0x0020, 0x0020, SP),
        (0x0021, 0x0021, EX),
        (0x0022, 0x0022, QU),
        (0x0023, 0x0023, AL),
        (0x0024, 0x0024, PR),
        (0x0025, 0x0025, PO),
        (0x0026, 0x0026, AL),
        (0x0027, 0x0027, QU),
        (0x0028, 0x0028, OP),
        (0x0029, 0x0029, CP),
        (0x002A, 0x002A, AL),
        (0x002B, 0x002B, PR),
        (0x002C, 0x002C, IS),
        (0x002D, 0x002D, HY),
        (0x002E, 0x002E, IS),
        (0x002F, 0x002F, SY),
        (0x0030, 0x0039, NU),
        (0x003A, 0x003B, IS),
        (0x003C, 0x003E, AL),
        (0x003F, 0x003F, EX),
        (0x0040, 0x005A, AL),
        (0x005B, 0x005B, OP),
        (0x005C, 0x005C, PR),
        (0x005D, 0x005D, CP),
        (0x005E, 0x007A, AL),
        (0x007B, 0x007B, OP),
        (0x007C, 0x007C, BA),
        (0x007D, 0x007D, CL),
        (0x007E, 0x007E, AL),
        (0x007F, 0x0084, CM),
        (0x0085, 0x0085, NL),
        (0x0086, 0x009F, CM),
        (0x00A0, 0x00A0, GL),
        (0x00A1, 0x00A1, OP),
        (0x00A2, 0x00A2, PO),
        (0x00A3, 0x00A5, PR),
        (0x00A6, 0x00A6, AL),
        (0x00A7, 0x00A8, AI),
        (0x00A9, 0x00A9, AL),
        (0x00AA, 0x00AA, AI),
        (0x00AB, 0x00AB, QU),
        (0x00AC, 0x00AC, AL),
        (0x00AD, 0x00AD, BA),
        (0x00AE, 0x00AF, AL),
        (0x00B0, 0x00B0, PO),
        (0x00B1, 0x00B1, PR),
        (0x00B2, 0x00B3, AI),
        (0x00B4, 0x00B4, BB),
        (0x00B5, 0x00B5, AL),
        (0x00B6, 0x00BA, AI),
        (0x00BB, 0x00BB, QU),
        (0x00BC, 0x00BE, AI),
        (0x00BF, 0x00BF, OP),
        (0x00C0, 0x00D6, AL),
        (0x00D7, 0x00D7, AI),
        (0x00D8, 0x00F6, AL),
        (0x00F7, 0x00F7, AI),
        (0x00F8, 0x02C6, AL),
        (0x02C7, 0x02C7, AI),
        (0x02C8, 0x02C8, BB),
        (0x02C9, 0x02CB, AI),
        (0x02CC, 0x02CC, BB),
        (0x02CD, 0x02CD, AI),
        (0x02CE, 0x02CF, AL),
        (0x02D0, 0x02D0, AI),
        (0x02D1, 0x02D7, AL),
        (0x02D8, 0x02DB, AI),
        (0x02DC, 0x02DC, AL),
        (0x02DD, 0x02DD, AI),
        (0x02DE, 0x02DE, AL),
        (0x02DF, 0x02DF, BB),
        (0x02E0, 0x02FF, AL),
        (0x0300, 0x034E, CM),
        (0x034F, 0x034F, GL),
        (0x0350, 0x035B, CM),
        (0x035C, 0x0362, GL),
        (0x0363, 0x036F, CM),
        (0x0370, 0x0482, AL),
        (0x0483, 0x0489, CM),
        (0x048A, 0x0588, AL),
        (0x0589, 0x0589, IS),
        (0x058A, 0x058A, BA),
        (0x0591, 0x05BD, CM),
        (0x05BE, 0x05BE, BA),
        (0x05BF, 0x05BF, CM),
        (0x05C0, 0x05C0, AL),
        (0x05C1, 0x05C2, CM),
        (0x05C3, 0x05C3, AL),
        (0x05C4, 0x05C5, CM),
        (0x05C6, 0x05C6, EX),
        (0x05C7, 0x05C7, CM),
        (0x05D0, 0x05EA, HL),
        (0x05EF, 0x05F2, HL),
        (0x05F3, 0x05F4, AL),
        (0x0600, 0x0605, NU),
        (0x0606, 0x0608, AL),
        (0x0609, 0x060A, PO),
        (0x060B, 0x060B, AL),
        (0x060C, 0x060D, IS),
        (0x060E, 0x060F, AL),
        (0x0610, 0x061A, CM),
        (0x061B, 0x061B, EX),
        (0x061C, 0x061C, CM),
        (0x061D, 0x061F, EX),
        (0x0620, 0x064A, AL),
        (0x064B, 0x065F, CM),
        (0x0660, 0x0669, NU),
        (0x066A, 0x066A, PO),
        (0x066B, 0x066C, NU),
        (0x066D, 0x066F, AL),
        (0x0670, 0x0670, CM),
        (0x0671, 0x06D3, AL),
        (0x06D4, 0x06D4, EX),
        (0x06D5, 0x06D5, AL),
        (0x06D6, 0x06DC, CM),
        (0x06DD, 0x06DD, NU),
        (0x06DE, 0x06DE, AL),
        (0x06DF, 0x06E4, CM),
        (0x06E5, 0x06E6, AL),
        (0x06E7, 0x06E8, CM),
        (0x06E9, 0x06E9, AL),
        (0x06EA, 0x06ED, CM),
        (0x06EE, 0x06EF, AL),
        (0x06F0, 0x06F9, NU),
        (0x06FA, 0x06FF, AL),
        (0x0900, 0x0903, CM),
        (0x0904, 0x0939, AL),
        (0x093A, 0x093C, CM),
        (0x093D, 0x093D, AL),
        (0x093E, 0x094F, CM),
        (0x0950, 0x0950, AL),
        (0x0951, 0x0957, CM),
        (0x0958, 0x0961, AL),
        (0x0962, 0x0963, CM),
        (0x0964, 0x0965, BA),
        (0x0966, 0x096F, NU),
        (0x0970, 0x0980, AL),
        (0x0981, 0x0983, CM),
        (0x0985, 0x09B9, AL),
        (0x09BC, 0x09BC, CM),
        (0x09BD, 0x09BD, AL),
        (0x09BE, 0x09CD, CM),
        (0x09CE, 0x09CE, AL),
        (0x09D7, 0x09D7, CM),
        (0x09DC, 0x09E1, AL),
        (0x09E2, 0x09E3, CM),
        (0x09E6, 0x09EF, NU),
        (0x0E01, 0x0E3A, SA),
        (0x0E3F, 0x0E3F, PR),
        (0x0E40, 0x0E4E, SA),
        (0x0E4F, 0x0E4F, AL),
        (0x0E50, 0x0E59, NU),
        (0x0E5A, 0x0E5B, BA),
        (0x1100, 0x115F, JL),
        (0x1160, 0x11A7, JV),
        (0x11A8, 0x11FF, JT),
        (0x1680, 0x1680, BA),
        (0x1AB0, 0x1AFF, CM),
        (0x1DC0, 0x1DFF, CM),
        (0x1E00, 0x1FFC, AL),
        (0x2000, 0x2006, BA),
        (0x2007, 0x2007, GL),
        (0x2008, 0x200A, BA),
        (0x200B, 0x200B, ZW),
        (0x200C, 0x200C, CM),
        (0x200D, 0x200D, ZWJ),
        (0x200E, 0x200F, CM),
        (0x2010, 0x2010, BA),
        (0x2011, 0x2011, GL),
        (0x2012, 0x2013, BA),
        (0x2014, 0x2014, B2),
        (0x2015, 0x2016, AI),
        (0x2017, 0x2017, AL),
        (0x2018, 0x2019, QU),
        (0x201A, 0x201A, OP),
        (0x201B, 0x201D, QU),
        (0x201E, 0x201E, OP),
        (0x201F, 0x201F, QU),
        (0x2020, 0x2021, AI),
        (0x2022, 0x2023, AL),
        (0x2024, 0x2026, IN),
        (0x2027, 0x2027, BA),
        (0x2028, 0x2029, BK),
        (0x202A, 0x202E, CM),
        (0x202F, 0x202F, GL),
        (0x2030, 0x2037, PO),
        (0x2038, 0x2038, AL),
        (0x2039, 0x203A, QU),
        (0x203B, 0x203B, AI),
        (0x203C, 0x203D, NS),
        (0x203E, 0x2043, AL),
        (0x2044, 0x2044, IS),
        (0x2045, 0x2045, OP),
        (0x2046, 0x2046, CL),
        (0x2047, 0x2049, NS),
        (0x204A, 0x205E, AL),
        (0x205F, 0x205F, BA),
        (0x2060, 0x2060, WJ),
        (0x2061, 0x2064, AL),
        (0x2066, 0x206F, CM),
        (0x20A0, 0x20A6, PR),
        (0x20A7, 0x20A7, PO),
        (0x20A8, 0x20B5, PR),
        (0x20B6, 0x20B6, PO),
        (0x20B7, 0x20BA, PR),
        (0x20BB, 0x20BB, PO),
        (0x20BC, 0x20BD, PR),
        (0x20BE, 0x20BE, PO),
        (0x20BF, 0x20C0, PR),
        (0x20D0, 0x20F0, CM),
        (0x2100, 0x2102, AL),
        (0x2103, 0x2103, PO),
        (0x2104, 0x2108, AL),
        (0x2109, 0x2109, PO),
        (0x210A, 0x2115, AL),
        (0x2116, 0x2116, PR),
        (0x2117, 0x2120, AL),
        (0x2121, 0x2122, AI),
        (0x2123, 0x215F, AL),
        (0x2160, 0x216B, AI),
        (0x216C, 0x218B, AL),
        (0x2190, 0x2199, AI),
        (0x219A, 0x22FF, AL),
        (0x2300, 0x2307, AL),
        (0x2308, 0x2308, OP),
        (0x2309, 0x2309, CL),
        (0x230A, 0x230A, OP),
        (0x230B, 0x230B, CL),
        (0x230C, 0x2319, AL),
        (0x231A, 0x231B, ID),
        (0x231C, 0x2328, AL),
        (0x2329, 0x2329, OP),
        (0x232A, 0x232A, CL),
        (0x232B, 0x23EF, AL),
        (0x23F0, 0x23F3, ID),
        (0x23F4, 0x245F, AL),
        (0x2460, 0x24FE, AI),
        (0x24FF, 0x24FF, AL),
        (0x2500, 0x254B, AI),
        (0x254C, 0x254F, AL),
        (0x2550, 0x2574, AI),
        (0x2575, 0x257F, AL),
        (0x2580, 0x258F, AI),
        (0x2590, 0x25FF, AL),
        (0x2600, 0x2603, ID),
        (0x2604, 0x2613, AL),
        (0x2614, 0x2615, ID),
        (0x2616, 0x2617, AI),
        (0x2618, 0x2618, ID),
        (0x2619, 0x2619, AL),
        (0x261A, 0x261C, ID),
        (0x261D, 0x261D, EB),
        (0x261E, 0x261F, ID),
        (0x2620, 0x2638, AL),
        (0x2639, 0x263B, ID),
        (0x263C, 0x2767, AL),
        (0x2768, 0x2768, OP),
        (0x2769, 0x2769, CL),
        (0x276A, 0x276A, OP),
        (0x276B, 0x276B, CL),
        (0x276C, 0x276C, OP),
        (0x276D, 0x276D, CL),
        (0x276E, 0x276E, OP),
        (0x276F, 0x276F, CL),
        (0x2770, 0x2770, OP),
        (0x2771, 0x2771, CL),
        (0x2772, 0x2772, OP),
        (0x2773, 0x2773, CL),
        (0x2774, 0x2774, OP),
        (0x2775, 0x2775, CL),
        (0x2776, 0x27C4, AL),
        (0x27C5, 0x27C5, OP),
        (0x27C6, 0x27C6, CL),
        (0x27C7, 0x27E5, AL),
        (0x27E6, 0x27E6, OP),
        (0x27E7, 0x27E7, CL),
        (0x27E8, 0x27E8, OP),
        (0x27E9, 0x27E9, CL),
        (0x27EA, 0x27EA, OP),
        (0x27EB, 0x27EB, CL),
        (0x27EC, 0x27EC, OP),
        (0x27ED, 0x27ED, CL),
        (0x27EE, 0x27EE, OP),
        (0x27EF, 0x27EF, CL),
        (0x27F0, 0x2B54, AL),
        (0x2B55, 0x2B59, AI),
        (0x2B5A, 0x2BFF, AL),
        (0x2E3A, 0x2E3B, B2),
        (0x2E80, 0x2FFF, ID),
        (0x3000, 0x3000, BA),
        (0x3001, 0x3002, CL),
        (0x3003, 0x3004, ID),
        (0x3005, 0x3005, NS),
        (0x3006, 0x3007, ID),
        (0x3008, 0x3008, OP),
        (0x3009, 0x3009, CL),
        (0x300A, 0x300A, OP),
        (0x300B, 0x300B, CL),
        (0x300C, 0x300C, OP),
        (0x300D, 0x300D, CL),
        (0x300E, 0x300E, OP),
        (0x300F, 0x300F, CL),
        (0x3010, 0x3010, OP),
        (0x3011, 0x3011, CL),
        (0x3012, 0x3013, ID),
        (0x3014, 0x3014, OP),
        (0x3015, 0x3015, CL),
        (0x3016, 0x3016, OP),
        (0x3017, 0x3017, CL),
        (0x3018, 0x3018, OP),
        (0x3019, 0x3019, CL),
        (0x301A, 0x301A, OP),
        (0x301B, 0x301B, CL),
        (0x301C, 0x301C, NS),
        (0x301D, 0x301D, OP),
        (0x301E, 0x301F, CL),
        (0x3020, 0x3029, ID),
        (0x302A, 0x302F, CM),
        (0x3030, 0x303A, ID),
        (0x303B, 0x303C, NS),
        (0x303D, 0x303F, ID),
        (0x3041, 0x3041, CJ),
        (0x3042, 0x3042, ID),
        (0x3043, 0x3043, CJ),
        (0x3044, 0x3044, ID),
        (0x3045, 0x3045, CJ),
        (0x3046, 0x3046, ID),
        (0x3047, 0x3047, CJ),
        (0x3048, 0x3048, ID),
        (0x3049, 0x3049, CJ),
        (0x304A, 0x3062, ID),
        (0x3063, 0x3063, CJ),
        (0x3064, 0x3082, ID),
        (0x3083, 0x3083, CJ),
        (0x3084, 0x3084, ID),
        (0x3085, 0x3085, CJ),
        (0x3086, 0x3086, ID),
        (0x3087, 0x3087, CJ),
        (0x3088, 0x308D, ID),
        (0x308E, 0x308E, CJ),
        (0x308F, 0x3094, ID),
        (0x3095, 0x3096, CJ),
        (0x3099, 0x309A, CM),
        (0x309B, 0x309E, NS),
        (0x309F, 0x309F, ID),
        (0x30A0, 0x30A0, NS),
        (0x30A1, 0x30A1, CJ),
        (0x30A2, 0x30A2, ID),
        (0x30A3, 0x30A3, CJ),
        (0x30A4, 0x30A4, ID),
        (0x30A5, 0x30A5, CJ),
        (0x30A6, 0x30A6, ID),
        (0x30A7, 0x30A7, CJ),
        (0x30A8, 0x30A8, ID),
        (0x30A9, 0x30A9, CJ),
        (0x30AA, 0x30C2, ID),
        (0x30C3, 0x30C3, CJ),
        (0x30C4, 0x30E2, ID),
        (0x30E3, 0x30E3, CJ),
        (0x30E4, 0x30E4, ID),
        (0x30E5, 0x30E5, CJ),
        (0x30E6, 0x30E6, ID),
        (0x30E7, 0x30E7, CJ),
        (0x30E8, 0x30ED, ID),
        (0x30EE, 0x30EE, CJ),
        (0x30EF, 0x30F4, ID),
        (0x30F5, 0x30F6, CJ),
        (0x30F7, 0x30FA, ID),
        (0x30FB, 0x30FB, NS),
        (0x30FC, 0x30FC, CJ),
        (0x30FD, 0x30FE, NS),
        (0x30FF, 0x30FF, ID),
        (0x3100, 0x31EF, ID),
        (0x31F0, 0x31FF, CJ),
        (0x3200, 0x4DBF, ID),
        (0x4E00, 0x9FFF, ID),
        (0xA000, 0xA48C, ID),
        (0xA960, 0xA97C, JL),
        (0xAC00, 0xD7A3, H3),
        (0xD7B0, 0xD7C6, JV),
        (0xD7CB, 0xD7FB, JT),
        (0xD800, 0xDFFF, SG),
        (0xE000, 0xF8FF, XX),
        (0xF900, 0xFAFF, ID),
        (0xFB00, 0xFB06, AL),
        (0xFB1D, 0xFB1D, HL),
        (0xFB1E, 0xFB1E, CM),
        (0xFB1F, 0xFB28, HL),
        (0xFB29, 0xFB29, AL),
        (0xFB2A, 0xFB4F, HL),
        (0xFE00, 0xFE0F, CM),
        (0xFE10, 0xFE10, IS),
        (0xFE11, 0xFE12, CL),
        (0xFE13, 0xFE14, IS),
        (0xFE15, 0xFE16, EX),
        (0xFE17, 0xFE17, OP),
        (0xFE18, 0xFE18, CL),
        (0xFE19, 0xFE19, IN),
        (0xFE20, 0xFE2F, CM),
        (0xFE30, 0xFE34, ID),
        (0xFE35, 0xFE35, OP),
        (0xFE36, 0xFE36, CL),
        (0xFE37, 0xFE37, OP),
        (0xFE38, 0xFE38, CL),
        (0xFE39, 0xFE39, OP),
        (0xFE3A, 0xFE3A, CL),
        (0xFE3B, 0xFE3B, OP),
        (0xFE3C, 0xFE3C, CL),
        (0xFE3D, 0xFE3D, OP),
        (0xFE3E, 0xFE3E, CL),
        (0xFE3F, 0xFE3F, OP),
        (0xFE40, 0xFE40, CL),
        (0xFE41, 0xFE41, OP),
        (0xFE42, 0xFE42, CL),
        (0xFE43, 0xFE43, OP),
        (0xFE44, 0xFE44, CL),
        (0xFE45, 0xFE46, ID),
        (0xFE47, 0xFE47, OP),
        (0xFE48, 0xFE48, CL),
        (0xFE49, 0xFE4F, ID),
        (0xFE50, 0xFE50, CL),
        (0xFE51, 0xFE51, ID),
        (0xFE52, 0xFE52, CL),
        (0xFE53, 0xFE53, ID),
        (0xFE54, 0xFE55, NS),
        (0xFE56, 0xFE57, EX),
        (0xFE58, 0xFE58, ID),
        (0xFE59, 0xFE59, OP),
        (0xFE5A, 0xFE5A, CL),
        (0xFE5B, 0xFE5B, OP),
        (0xFE5C, 0xFE5C, CL),
        (0xFE5D, 0xFE5D, OP),
        (0xFE5E, 0xFE5E, CL),
        (0xFE5F, 0xFE68, ID),
        (0xFE69, 0xFE69, PR),
        (0xFE6A, 0xFE6A, PO),
        (0xFE6B, 0xFE6B, ID),
        (0xFEFF, 0xFEFF, WJ),
        (0xFF01, 0xFF01, EX),
        (0xFF02, 0xFF03, ID),
        (0xFF04, 0xFF04, PR),
        (0xFF05, 0xFF05, PO),
        (0xFF06, 0xFF07, ID),
        (0xFF08, 0xFF08, OP),
        (0xFF09, 0xFF09, CL),
        (0xFF0A, 0xFF0B, ID),
        (0xFF0C, 0xFF0C, CL),
        (0xFF0D, 0xFF0D, ID),
        (0xFF0E, 0xFF0E, CL),
        (0xFF0F, 0xFF19, ID),
        (0xFF1A, 0xFF1B, NS),
        (0xFF1C, 0xFF1E, ID),
        (0xFF1F, 0xFF1F, EX),
        (0xFF20, 0xFF3A, ID),
        (0xFF3B, 0xFF3B, OP),
        (0xFF3C, 0xFF3C, ID),
        (0xFF3D, 0xFF3D, CL),
        (0xFF3E, 0xFF5A, ID),
        (0xFF5B, 0xFF5B, OP),
        (0xFF5C, 0xFF5C, ID),
        (0xFF5D, 0xFF5D, CL),
        (0xFF5E, 0xFF5E, ID),
        (0xFF5F, 0xFF5F, OP),
        (0xFF60, 0xFF61, CL),
        (0xFF62, 0xFF62, OP),
        (0xFF63, 0xFF64, CL),
        (0xFF65, 0xFF65, NS),
        (0xFF66, 0xFF66, AL),
        (0xFF67, 0xFF70, CJ),
        (0xFF71, 0xFF9D, AL),
        (0xFF9E, 0xFF9F, NS),
        (0xFFA0, 0xFFDC, AL),
        (0xFFE0, 0xFFE0, PO),
        (0xFFE1, 0xFFE1, PR),
        (0xFFE2, 0xFFE4, ID),
        (0xFFE5, 0xFFE6, PR),
        (0xFFE8, 0xFFEE, AL),
        (0xFFF9, 0xFFFB, CM),
        (0xFFFC, 0xFFFC, CB),
        (0xFFFD, 0xFFFD, AI),
        (0x1F000, 0x1F0FF, ID),
        (0x1F100, 0x1F10C, AI),
        (0x1F10D, 0x1F10F, ID),
        (0x1F110, 0x1F12D, AI),
        (0x1F12E, 0x1F12F, AL),
        (0x1F130, 0x1F169, AI),
        (0x1F16A, 0x1F16C, AL),
        (0x1F16D, 0x1F16F, ID),
        (0x1F170, 0x1F1AC, AI),
        (0x1F1AD, 0x1F1AD, AL),
        (0x1F1AE, 0x1F1E5, ID),
        (0x1F1E6, 0x1F1FF, RI),
        (0x1F200, 0x1F384, ID),
        (0x1F385, 0x1F385, EB),
        (0x1F386, 0x1F3C1, ID),
        (0x1F3C2, 0x1F3C4, EB),
        (0x1F3C5, 0x1F3C6, ID),
        (0x1F3C7, 0x1F3C7, EB),
        (0x1F3C8, 0x1F3C9, ID),
        (0x1F3CA, 0x1F3CC, EB),
        (0x1F3CD, 0x1F3FA, ID),
        (0x1F3FB, 0x1F3FF, EM),
        (0x1F400, 0x1F441, ID),
        (0x1F442, 0x1F443, EB),
        (0x1F444, 0x1F445, ID),
        (0x1F446, 0x1F450, EB),
        (0x1F451, 0x1F465, ID),
        (0x1F466, 0x1F478, EB),
        (0x1F479, 0x1F47B, ID),
        (0x1F47C, 0x1F47C, EB),
        (0x1F47D, 0x1F480, ID),
        (0x1F481, 0x1F483, EB),
        (0x1F484, 0x1F484, ID),
        (0x1F485, 0x1F487, EB),
        (0x1F488, 0x1F64F, ID),
        (0x1F680, 0x1F6FF, ID),
        (0x1F774, 0x1F77F, ID),
        (0x1F7D5, 0x1F7FF, ID),
        (0x1F900, 0x1F90B, ID),
        (0x1F90C, 0x1F90C, EB),
        (0x1F90D, 0x1F90E, ID),
        (0x1F90F, 0x1F90F, EB),
        (0x1F910, 0x1F917, ID),
        (0x1F918, 0x1F91F, EB),
        (0x1F920, 0x1F925, ID),
        (0x1F926, 0x1F926, EB),
        (0x1F927, 0x1F92F, ID),
        (0x1F930, 0x1F939, EB),
        (0x1F93A, 0x1F93B, ID),
        (0x1F93C, 0x1F93E, EB),
        (0x1F93F, 0x1F9FF, ID),
        (0x1FA00, 0x1FAFF, ID),
        (0x1FC00, 0x1FFFD, ID),
        (0x20000, 0x2FFFD, ID),
        (0x30000, 0x3FFFD, ID),
        (0xE0001, 0xE0001, CM),
        (0xE0020, 0xE007F, CM),
        (0xE0100, 0xE01EF, CM),
        (0xF0000, 0xFFFFD, XX),
        (0x100000, 0x10FFFD, XX),
    ]
};

#[rustfmt::skip]
pub static EAST_ASIAN_WIDTH: &[PropertyRange<EastAsianWidth>] = {
    use EastAsianWidth::*;
    &[
        (0x0020, 0x007E, Narrow),
        (0x00A1, 0x00A1, Ambiguous),
        (0x00A2, 0x00A3, Narrow),
        (0x00A4, 0x00A4, Ambiguous),
        (0x00A5, 0x00A6, Narrow),
        (0x00A7, 0x00A8, Ambiguous),
        (0x00AA, 0x00AA, Ambiguous),
        (0x00AC, 0x00AC, Narrow),
        (0x00AD, 0x00AE, Ambiguous),
        (0x00AF, 0x00AF, Narrow),
        (0x00B0, 0x00B4, Ambiguous),
        (0x00B6, 0x00BA, Ambiguous),
        (0x00BC, 0x00BF, Ambiguous),
        (0x00C6, 0x00C6, Ambiguous),
        (0x00D0, 0x00D0, Ambiguous),
        (0x00D7, 0x00D8, Ambiguous),
        (0x00DE, 0x00E1, Ambiguous),
        (0x00E6, 0x00E6, Ambiguous),
        (0x00E8, 0x00EA, Ambiguous),
        (0x00EC, 0x00ED, Ambiguous),
        (0x00F0, 0x00F0, Ambiguous),
        (0x00F2, 0x00F3, Ambiguous),
        (0x00F7, 0x00FA, Ambiguous),
        (0x00FC, 0x00FC, Ambiguous),
        (0x00FE, 0x00FE, Ambiguous),
        (0x0300, 0x036F, Ambiguous),
        (0x0391, 0x03A1, Ambiguous),
        (0x03A3, 0x03A9, Ambiguous),
        (0x03B1, 0x03C1, Ambiguous),
        (0x03C3, 0x03C9, Ambiguous),
        (0x0401, 0x0401, Ambiguous),
        (0x0410, 0x044F, Ambiguous),
        (0x0451, 0x0451, Ambiguous),
        (0x1100, 0x115F, Wide),
        (0x2010, 0x2010, Ambiguous),
        (0x2013, 0x2016, Ambiguous),
        (0x2018, 0x2019, Ambiguous),
        (0x201C, 0x201D, Ambiguous),
        (0x2020, 0x2022, Ambiguous),
        (0x2024, 0x2027, Ambiguous),
        (0x2030, 0x2030, Ambiguous),
        (0x2032, 0x2033, Ambiguous),
        (0x2035, 0x2035, Ambiguous),
        (0x203B, 0x203B, Ambiguous),
        (0x203E, 0x203E, Ambiguous),
        (0x20A9, 0x20A9, Halfwidth),
        (0x20AC, 0x20AC, Ambiguous),
        (0x231A, 0x231B, Wide),
        (0x2329, 0x232A, Wide),
        (0x23E9, 0x23EC, Wide),
        (0x23F0, 0x23F0, Wide),
        (0x23F3, 0x23F3, Wide),
        (0x2460, 0x24E9, Ambiguous),
        (0x2500, 0x254B, Ambiguous),
        (0x2550, 0x2573, Ambiguous),
        (0x2580, 0x258F, Ambiguous),
        (0x25A0, 0x25A1, Ambiguous),
        (0x25FD, 0x25FE, Wide),
        (0x2614, 0x2615, Wide),
        (0x2648, 0x2653, Wide),
        (0x267F, 0x267F, Wide),
        (0x2693, 0x2693, Wide),
        (0x26A1, 0x26A1, Wide),
        (0x26AA, 0x26AB, Wide),
        (0x26BD, 0x26BE, Wide),
        (0x26C4, 0x26C5, Wide),
        (0x26CE, 0x26CE, Wide),
        (0x26D4, 0x26D4, Wide),
        (0x26EA, 0x26EA, Wide),
        (0x26F2, 0x26F3, Wide),
        (0x26F5, 0x26F5, Wide),
        (0x26FA, 0x26FA, Wide),
        (0x26FD, 0x26FD, Wide),
        (0x2705, 0x2705, Wide),
        (0x270A, 0x270B, Wide),
        (0x2728, 0x2728, Wide),
        (0x274C, 0x274C, Wide),
        (0x274E, 0x274E, Wide),
        (0x2753, 0x2755, Wide),
        (0x2757, 0x2757, Wide),
        (0x2795, 0x2797, Wide),
        (0x27B0, 0x27B0, Wide),
        (0x27BF, 0x27BF, Wide),
        (0x2B1B, 0x2B1C, Wide),
        (0x2B50, 0x2B50, Wide),
        (0x2B55, 0x2B55, Wide),
        (0x2E80, 0x2E99, Wide),
        (0x2E9B, 0x2EF3, Wide),
        (0x2F00, 0x2FD5, Wide),
        (0x2FF0, 0x2FFB, Wide),
        (0x3000, 0x3000, Fullwidth),
        (0x3001, 0x303E, Wide),
        (0x3041, 0x3096, Wide),
        (0x3099, 0x30FF, Wide),
        (0x3105, 0x312F, Wide),
        (0x3131, 0x318E, Wide),
        (0x3190, 0x31E3, Wide),
        (0x31F0, 0x321E, Wide),
        (0x3220, 0x3247, Wide),
        (0x3248, 0x324F, Ambiguous),
        (0x3250, 0x4DBF, Wide),
        (0x4E00, 0xA48C, Wide),
        (0xA960, 0xA97C, Wide),
        (0xAC00, 0xD7A3, Wide),
        (0xE000, 0xF8FF, Ambiguous),
        (0xF900, 0xFAFF, Wide),
        (0xFE00, 0xFE0F, Ambiguous),
        (0xFE10, 0xFE19, Wide),
        (0xFE30, 0xFE52, Wide),
        (0xFE54, 0xFE66, Wide),
        (0xFE68, 0xFE6B, Wide),
        (0xFF01, 0xFF60, Fullwidth),
        (0xFF61, 0xFFBE, Halfwidth),
        (0xFFC2, 0xFFDC, Halfwidth),
        (0xFFE0, 0xFFE6, Fullwidth),
        (0xFFE8, 0xFFEE, Halfwidth),
        (0xFFFD, 0xFFFD, Ambiguous),
        (0x1F004, 0x1F004, Wide),
        (0x1F0CF, 0x1F0CF, Wide),
        (0x1F18E, 0x1F18E, Wide),
        (0x1F191, 0x1F19A, Wide),
        (0x1F200, 0x1F202, Wide),
        (0x1F210, 0x1F23B, Wide),
        (0x1F240, 0x1F248, Wide),
        (0x1F250, 0x1F251, Wide),
        (0x1F260, 0x1F265, Wide),
        (0x1F300, 0x1F320, Wide),
        (0x1F32D, 0x1F335, Wide),
        (0x1F337, 0x1F37C, Wide),
        (0x1F37E, 0x1F393, Wide),
        (0x1F3A0, 0x1F3CA, Wide),
        (0x1F3CF, 0x1F3D3, Wide),
        (0x1F3E0, 0x1F3F0, Wide),
        (0x1F3F4, 0x1F3F4, Wide),
        (0x1F3F8, 0x1F43E, Wide),
        (0x1F440, 0x1F440, Wide),
        (0x1F442, 0x1F4FC, Wide),
        (0x1F4FF, 0x1F53D, Wide),
        (0x1F54B, 0x1F54E, Wide),
        (0x1F550, 0x1F567, Wide),
        (0x1F57A, 0x1F57A, Wide),
        (0x1F595, 0x1F596, Wide),
        (0x1F5A4, 0x1F5A4, Wide),
        (0x1F5FB, 0x1F64F, Wide),
        (0x1F680, 0x1F6C5, Wide),
        (0x1F6CC, 0x1F6CC, Wide),
        (0x1F6D0, 0x1F6D2, Wide),
        (0x1F6D5, 0x1F6D7, Wide),
        (0x1F6DC, 0x1F6DF, Wide),
        (0x1F6EB, 0x1F6EC, Wide),
        (0x1F6F4, 0x1F6FC, Wide),
        (0x1F7E0, 0x1F7EB, Wide),
        (0x1F7F0, 0x1F7F0, Wide),
        (0x1F90C, 0x1F93A, Wide),
        (0x1F93C, 0x1F945, Wide),
        (0x1F947, 0x1F9FF, Wide),
        (0x1FA70, 0x1FA7C, Wide),
        (0x1FA80, 0x1FA89, Wide),
        (0x1FA8F, 0x1FAC6, Wide),
        (0x1FACE, 0x1FADC, Wide),
        (0x1FADF, 0x1FAE9, Wide),
        (0x1FAF0, 0x1FAF8, Wide),
        (0x20000, 0x2FFFD, Wide),
        (0x30000, 0x3FFFD, Wide),
        (0xE0100, 0xE01EF, Ambiguous),
        (0xF0000, 0xFFFFD, Ambiguous),
        (0x100000, 0x10FFFD, Ambiguous),
    ]
};

/// Code points with Emoji_Presentation=Yes.
#[rustfmt::skip]
pub static EMOJI_PRESENTATION: &[(u32, u32)] = &[
    (0x231A, 0x231B),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1E6, 0x1F1FF),
    (0x1F201, 0x1F201),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F236),
    (0x1F238, 0x1F23A),
    (0x1F250, 0x1F251),
    (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA),
    (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4),
    (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7),
    (0x1F6DC, 0x1F6DF),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB),
    (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF),
    (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA89),
    (0x1FA8F, 0x1FAC6),
    (0x1FACE, 0x1FADC),
    (0x1FADF, 0x1FAE9),
    (0x1FAF0, 0x1FAF8),
];

#[rustfmt::skip]
pub static GENERAL_CATEGORY: &[PropertyRange<GeneralCategory>] = {
    use GeneralCategory::*;
    &[
        (0x0000, 0x001F, Cc),
        (0x0020, 0x0020, Zs),
        (0x0021, 0x0023, Po),
        (0x0024, 0x0024, Sc),
        (0x0025, 0x0027, Po),
        (0x0028, 0x0028, Ps),
        (0x0029, 0x0029, Pe),
        (0x002A, 0x002A, Po),
        (0x002B, 0x002B, Sm),
        (0x002C, 0x002C, Po),
        (0x002D, 0x002D, Pd),
        (0x002E, 0x002F, Po),
        (0x0030, 0x0039, Nd),
        (0x003A, 0x003B, Po),
        (0x003C, 0x003E, Sm),
        (0x003F, 0x0040, Po),
        (0x0041, 0x005A, Lu),
        (0x005B, 0x005B, Ps),
        (0x005C, 0x005C, Po),
        (0x005D, 0x005D, Pe),
        (0x005E, 0x005E, Sk),
        (0x005F, 0x005F, Pc),
        (0x0060, 0x0060, Sk),
        (0x0061, 0x007A, Ll),
        (0x007B, 0x007B, Ps),
        (0x007C, 0x007C, Sm),
        (0x007D, 0x007D, Pe),
        (0x007E, 0x007E, Sm),
        (0x007F, 0x009F, Cc),
        (0x00A0, 0x00A0, Zs),
        (0x00AA, 0x00AA, Lo),
        (0x00AD, 0x00AD, Cf),
        (0x00B5, 0x00B5, Ll),
        (0x00BA, 0x00BA, Lo),
        (0x00C0, 0x00D6, Lu),
        (0x00D8, 0x00DE, Lu),
        (0x00DF, 0x00F6, Ll),
        (0x00F8, 0x00FF, Ll),
        (0x01BB, 0x01BB, Lo),
        (0x01C0, 0x01C3, Lo),
        (0x0250, 0x0293, Ll),
        (0x0294, 0x0294, Lo),
        (0x0295, 0x02AF, Ll),
        (0x02B0, 0x02C1, Lm),
        (0x0300, 0x036F, Mn),
        (0x0386, 0x0386, Lu),
        (0x0388, 0x038A, Lu),
        (0x038C, 0x038C, Lu),
        (0x038E, 0x038F, Lu),
        (0x0390, 0x0390, Ll),
        (0x0391, 0x03A1, Lu),
        (0x03A3, 0x03AB, Lu),
        (0x03AC, 0x03CE, Ll),
        (0x0400, 0x042F, Lu),
        (0x0430, 0x045F, Ll),
        (0x0531, 0x0556, Lu),
        (0x0560, 0x0588, Ll),
        (0x0591, 0x05BD, Mn),
        (0x05D0, 0x05EA, Lo),
        (0x05EF, 0x05F2, Lo),
        (0x0600, 0x0605, Cf),
        (0x0610, 0x061A, Mn),
        (0x0620, 0x063F, Lo),
        (0x0640, 0x0640, Lm),
        (0x0641, 0x064A, Lo),
        (0x064B, 0x065F, Mn),
        (0x0660, 0x0669, Nd),
        (0x0671, 0x06D3, Lo),
        (0x06F0, 0x06F9, Nd),
        (0x0900, 0x0902, Mn),
        (0x0903, 0x0903, Mc),
        (0x0904, 0x0939, Lo),
        (0x093A, 0x093A, Mn),
        (0x093B, 0x093B, Mc),
        (0x093C, 0x093C, Mn),
        (0x093D, 0x093D, Lo),
        (0x093E, 0x0940, Mc),
        (0x0941, 0x0948, Mn),
        (0x0949, 0x094C, Mc),
        (0x094D, 0x094D, Mn),
        (0x094E, 0x094F, Mc),
        (0x0950, 0x0950, Lo),
        (0x0951, 0x0957, Mn),
        (0x0958, 0x0961, Lo),
        (0x0962, 0x0963, Mn),
        (0x0966, 0x096F, Nd),
        (0x0985, 0x09B9, Lo),
        (0x09E6, 0x09EF, Nd),
        (0x0E01, 0x0E30, Lo),
        (0x0E31, 0x0E31, Mn),
        (0x0E32, 0x0E33, Lo),
        (0x0E34, 0x0E3A, Mn),
        (0x0E40, 0x0E45, Lo),
        (0x0E46, 0x0E46, Lm),
        (0x0E47, 0x0E4E, Mn),
        (0x0E50, 0x0E59, Nd),
        (0x10A0, 0x10C5, Lu),
        (0x10D0, 0x10FA, Ll),
        (0x1100, 0x11FF, Lo),
        (0x1E00, 0x1EFF, Ll),
        (0x200B, 0x200F, Cf),
        (0x2028, 0x2028, Zl),
        (0x2029, 0x2029, Zp),
        (0x202A, 0x202E, Cf),
        (0x2060, 0x2064, Cf),
        (0x2066, 0x206F, Cf),
        (0x3005, 0x3005, Lm),
        (0x3006, 0x3006, Lo),
        (0x3007, 0x3007, Nl),
        (0x3041, 0x3096, Lo),
        (0x309D, 0x309E, Lm),
        (0x309F, 0x309F, Lo),
        (0x30A1, 0x30FA, Lo),
        (0x30FC, 0x30FE, Lm),
        (0x30FF, 0x30FF, Lo),
        (0x3105, 0x312F, Lo),
        (0x3131, 0x318E, Lo),
        (0x3400, 0x4DBF, Lo),
        (0x4E00, 0x9FFF, Lo),
        (0xA000, 0xA48C, Lo),
        (0xAC00, 0xD7A3, Lo),
        (0xD800, 0xDFFF, Cs),
        (0xE000, 0xF8FF, Co),
        (0xF900, 0xFAFF, Lo),
        (0xFEFF, 0xFEFF, Cf),
        (0xFF10, 0xFF19, Nd),
        (0xFF21, 0xFF3A, Lu),
        (0xFF41, 0xFF5A, Ll),
        (0xFF66, 0xFF6F, Lo),
        (0xFF70, 0xFF70, Lm),
        (0xFF71, 0xFF9D, Lo),
        (0xFFF9, 0xFFFB, Cf),
        (0x1F000, 0x1F02B, So),
        (0x1F02C, 0x1F02F, Cn),
        (0x1F0F6, 0x1F0FF, Cn),
        (0x1F1AE, 0x1F1E5, Cn),
        (0x1F1E6, 0x1F1FF, So),
        (0x1F203, 0x1F20F, Cn),
        (0x1F300, 0x1F3FA, So),
        (0x1F3FB, 0x1F3FF, Sk),
        (0x1F400, 0x1F6D7, So),
        (0x1F6D8, 0x1F6DB, Cn),
        (0x1F6DC, 0x1F6EC, So),
        (0x1F6ED, 0x1F6EF, Cn),
        (0x1F6F0, 0x1F6FC, So),
        (0x1F6FD, 0x1F6FF, Cn),
        (0x1F7DA, 0x1F7DF, Cn),
        (0x1F7EC, 0x1F7EF, Cn),
        (0x1F7F1, 0x1F7FF, Cn),
        (0x1F80C, 0x1F80F, Cn),
        (0x1F848, 0x1F84F, Cn),
        (0x1F85A, 0x1F85F, Cn),
        (0x1F888, 0x1F88F, Cn),
        (0x1F8AE, 0x1F8AF, Cn),
        (0x1F8BC, 0x1F8BF, Cn),
        (0x1F8C2, 0x1F8FF, Cn),
        (0x1F900, 0x1F9FF, So),
        (0x1FA70, 0x1FA7C, So),
        (0x1FA80, 0x1FA89, So),
        (0x1FA8F, 0x1FAC6, So),
        (0x1FAC7, 0x1FACD, Cn),
        (0x1FACE, 0x1FADC, So),
        (0x1FADD, 0x1FADE, Cn),
        (0x1FADF, 0x1FAE9, So),
        (0x1FAEA, 0x1FAEF, Cn),
        (0x1FAF0, 0x1FAF8, So),
        (0x1FAF9, 0x1FAFF, Cn),
        (0x1FC00, 0x1FFFD, Cn),
        (0x20000, 0x2A6DF, Lo),
        (0x30000, 0x3134A, Lo),
        (0xE0001, 0xE0001, Cf),
        (0xE0020, 0xE007F, Cf),
        (0xE0100, 0xE01EF, Mn),
        (0xF0000, 0xFFFFD, Co),
        (0x100000, 0x10FFFD, Co),
    ]
};
