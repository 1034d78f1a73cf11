// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::iter;

/// U+FFFD, substituted for every malformed code unit.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

const INVALID: (char, usize) = (REPLACEMENT_CHARACTER, 1);

/// Decodes the code point at the start of `source`.
///
/// Returns the char and its encoded length in bytes, or `None` if `source` is empty.
/// Malformed or truncated sequences decode as U+FFFD with a length of **one** byte,
/// so a caller that advances by the returned length always makes progress.
#[inline]
pub fn decode_first(source: &[u8]) -> Option<(char, usize)> {
    let &lead = source.first()?;
    // Fast-passing ASCII allows this function to be trivially inlined everywhere,
    // as the full decoder is a little too large for that.
    if lead < 0x80 { Some((lead as char, 1)) } else { Some(decode_multi(source, lead)) }
}

/// Decodes the code point at the end of `source`.
///
/// Same replacement semantics as [`decode_first`]: if the trailing bytes don't form
/// exactly one valid sequence, the result is U+FFFD covering just the last byte.
pub fn decode_last(source: &[u8]) -> Option<(char, usize)> {
    let &last = source.last()?;
    if last < 0x80 {
        return Some((last as char, 1));
    }

    let end = source.len();
    let limit = end.saturating_sub(4);
    let mut start = end - 1;
    while start > limit && source[start] & 0xC0 == 0x80 {
        start -= 1;
    }

    match decode_first(&source[start..]) {
        Some((ch, len)) if start + len == end => Some((ch, len)),
        _ => Some(INVALID),
    }
}

// On mixed Latin/CJK text this is measurably faster when kept out of line.
#[cold]
fn decode_multi(source: &[u8], lead: u8) -> (char, usize) {
    // See: https://datatracker.ietf.org/doc/html/rfc3629
    // as well as ICU's `utf8.h` for the bitmask approach.

    let (mut cp, len) = if lead < 0xE0 {
        // UTF8-2 = %xC2-DF UTF8-tail
        if lead < 0xC2 {
            return INVALID;
        }
        (lead as u32 & 0x1F, 2)
    } else if lead < 0xF0 {
        // UTF8-3 =
        //   %xE0    %xA0-BF   UTF8-tail
        //   %xE1-EC UTF8-tail UTF8-tail
        //   %xED    %x80-9F   UTF8-tail
        //   %xEE-EF UTF8-tail UTF8-tail
        //
        // The first trail byte's top 3 bits select a bit in a per-lead mask.
        const BITS_80_9F: u8 = 1 << 0b100;
        const BITS_A0_BF: u8 = 1 << 0b101;
        const BITS_BOTH: u8 = BITS_80_9F | BITS_A0_BF;
        const LEAD_TRAIL1_BITS: [u8; 16] = [
            BITS_A0_BF, // 0xE0
            BITS_BOTH,  // 0xE1
            BITS_BOTH,  // 0xE2
            BITS_BOTH,  // 0xE3
            BITS_BOTH,  // 0xE4
            BITS_BOTH,  // 0xE5
            BITS_BOTH,  // 0xE6
            BITS_BOTH,  // 0xE7
            BITS_BOTH,  // 0xE8
            BITS_BOTH,  // 0xE9
            BITS_BOTH,  // 0xEA
            BITS_BOTH,  // 0xEB
            BITS_BOTH,  // 0xEC
            BITS_80_9F, // 0xED
            BITS_BOTH,  // 0xEE
            BITS_BOTH,  // 0xEF
        ];

        let lead = lead & 0x0F;
        let Some(&t) = source.get(1) else {
            return INVALID;
        };
        if LEAD_TRAIL1_BITS[lead as usize] & (1u8 << (t >> 5)) == 0 {
            return INVALID;
        }
        (((lead as u32) << 6) | (t as u32 & 0x3F), 3)
    } else {
        // UTF8-4 =
        //   %xF0    %x90-BF   UTF8-tail UTF8-tail
        //   %xF1-F3 UTF8-tail UTF8-tail UTF8-tail
        //   %xF4    %x80-8F   UTF8-tail UTF8-tail
        //
        // Indices flipped compared to the above: the split at 0x90 needs more than 8 bits.
        const TRAIL1_LEAD_BITS: [u8; 16] = [
            // +------ 0xF4 lead
            // |+----- 0xF3 lead
            // ||+---- 0xF2 lead
            // |||+--- 0xF1 lead
            // ||||+-- 0xF0 lead
            // vvvvv
            0b_00000, //
            0b_00000, //
            0b_00000, //
            0b_00000, //
            0b_00000, //
            0b_00000, //
            0b_00000, // trail bytes:
            0b_00000, //
            0b_11110, // 0x80-8F -> 0x80-8F can be preceded by 0xF1-F4
            0b_01111, // 0x90-9F -v
            0b_01111, // 0xA0-AF -> 0x90-BF can be preceded by 0xF0-F3
            0b_01111, // 0xB0-BF -^
            0b_00000, //
            0b_00000, //
            0b_00000, //
            0b_00000, //
        ];

        // The lead byte *may* be 11110xxx, but could also be e.g. 11111xxx.
        let lead = lead & 0x0F;
        if lead > 4 {
            return INVALID;
        }
        let Some(&t) = source.get(1) else {
            return INVALID;
        };
        if TRAIL1_LEAD_BITS[(t >> 4) as usize] & (1u8 << lead) == 0 {
            return INVALID;
        }
        (((lead as u32) << 6) | (t as u32 & 0x3F), 4)
    };

    // The 2-byte form hasn't checked its only trail byte yet.
    let first_tail = if len == 2 { 1 } else { 2 };
    for i in first_tail..len {
        // UTF8-tail = %x80-BF
        let Some(&b) = source.get(i) else {
            return INVALID;
        };
        let t = (b as u32).wrapping_sub(0x80);
        if t > 0x3F {
            return INVALID;
        }
        cp = (cp << 6) | t;
    }

    match char::from_u32(cp) {
        Some(ch) => (ch, len),
        None => INVALID,
    }
}

/// Iterates the code points of a byte slice, substituting U+FFFD per malformed byte.
#[derive(Clone, Copy)]
pub struct Utf8Chars<'a> {
    source: &'a [u8],
    offset: usize,
}

impl<'a> Utf8Chars<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, offset: 0 }
    }

    /// Byte offset of the next code point.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (ch, len) = decode_first(&self.source[self.offset..])?;
        self.offset += len;
        Some(ch)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Lower bound: All remaining bytes are 4-byte sequences.
        // Upper bound: All remaining bytes are ASCII (or broken).
        let remaining = self.source.len() - self.offset;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl iter::FusedIterator for Utf8Chars<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8() {
        let text = "a\u{E9}\u{4E16}\u{1F600}";
        let chars: Vec<_> = Utf8Chars::new(text.as_bytes()).collect();
        assert_eq!(chars, text.chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_broken_utf8() {
        // An encoded surrogate: each of its 3 bytes is replaced individually.
        let source = [b'a', 0xED, 0xA0, 0x80, b'b'];
        let mut chars = Utf8Chars::new(&source);
        assert_eq!(chars.next(), Some('a'));
        for offset in 2..=4 {
            assert_eq!(chars.next(), Some(REPLACEMENT_CHARACTER));
            assert_eq!(chars.offset(), offset);
        }
        assert_eq!(chars.next(), Some('b'));
        assert_eq!(chars.next(), None);
    }

    #[test]
    fn test_truncated_sequence() {
        assert_eq!(decode_first(&[0xE4, 0xB8]), Some(INVALID));
        assert_eq!(decode_first(&[0xF0, 0x9F, 0x98]), Some(INVALID));
        assert_eq!(decode_first(&[0xC0, 0x80]), Some(INVALID));
        assert_eq!(decode_first(&[0xF5, 0x80, 0x80, 0x80]), Some(INVALID));
        assert_eq!(decode_first(&[]), None);
    }

    #[test]
    fn test_decode_last() {
        assert_eq!(decode_last("ab\n".as_bytes()), Some(('\n', 1)));
        assert_eq!(decode_last("a\u{2028}".as_bytes()), Some(('\u{2028}', 3)));
        assert_eq!(decode_last("x\u{1F600}".as_bytes()), Some(('\u{1F600}', 4)));
        // A dangling lead byte, and a trail byte without a lead.
        assert_eq!(decode_last(&[b'a', 0xE4]), Some(INVALID));
        assert_eq!(decode_last(&[b'a', 0x80]), Some(INVALID));
        assert_eq!(decode_last(&[]), None);
    }
}
