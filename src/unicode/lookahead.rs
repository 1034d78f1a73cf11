// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::utf8::Utf8Chars;

/// Scans `rest` for the first code point whose property `skip` rejects, and returns that property.
///
/// Returns `None` if the input ends first. Nothing is consumed: the caller only uses
/// the result to decide the boundary in front of the code point that preceded `rest`.
pub fn find_property<P: Copy>(
    rest: &[u8],
    classify: impl Fn(char) -> P,
    mut skip: impl FnMut(P) -> bool,
) -> Option<P> {
    Utf8Chars::new(rest).map(classify).find(|&prop| !skip(prop))
}

/// Returns the property of the code point at the start of `rest`.
pub fn peek_property<P>(rest: &[u8], classify: impl Fn(char) -> P) -> Option<P> {
    Utf8Chars::new(rest).next().map(classify)
}
