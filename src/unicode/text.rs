// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod sealed {
    pub trait Sealed {}

    impl Sealed for str {}
    impl Sealed for [u8] {}
}

/// Input accepted by the segmentation functions: `str` or UTF-8 `[u8]`.
///
/// Segments are handed back as the same type. For `[u8]`, invalid sequences
/// decode to U+FFFD one byte at a time, so every byte belongs to some segment.
pub trait Text: sealed::Sealed {
    fn code_units(&self) -> &[u8];

    /// Splits at a byte offset produced by the decoder.
    fn split_at_offset(&self, mid: usize) -> (&Self, &Self);
}

impl Text for str {
    #[inline]
    fn code_units(&self) -> &[u8] {
        self.as_bytes()
    }

    #[inline]
    fn split_at_offset(&self, mid: usize) -> (&Self, &Self) {
        // A valid `str` only ever decodes to whole scalar values,
        // so the decoder's offsets are always char boundaries.
        self.split_at(mid)
    }
}

impl Text for [u8] {
    #[inline]
    fn code_units(&self) -> &[u8] {
        self
    }

    #[inline]
    fn split_at_offset(&self, mid: usize) -> (&Self, &Self) {
        self.split_at(mid)
    }
}
