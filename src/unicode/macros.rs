// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Declares a fieldless `#[repr(u8)]` enum whose discriminants are dense and start at 0.
///
/// Every property and state enum in this crate is declared through this macro, because the
/// transition tables index by discriminant and the state packer stores discriminants as bits.
/// It adds:
/// * `ALL`: every variant in discriminant order.
/// * `COUNT`: `ALL.len()`, usable in array lengths.
/// * `index()` / `from_index()`: the lossless conversion used by the packer.
///
/// The variant marked `#[default]` must be the first one (index 0), the "Any" wildcard.
macro_rules! dense_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident,)+
        }
    ) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        #[allow(dead_code)]
        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
            pub const COUNT: usize = Self::ALL.len();

            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Inverse of [`Self::index`]. Out of range indices yield the default variant.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or_default()
            }
        }
    };
}

/// Builds a dense `[[Option<Transition>; PROPS]; STATES]` table from a list of rules,
/// evaluated at compile time. Listing the same `(state, property)` pair twice fails the build.
///
/// ```ignore
/// transition_table! {
///     static RULES: GraphemeState, GraphemeBreak => bool;
///     (S::Any, P::CR) => (S::CR, BREAK, 50),
/// }
/// ```
macro_rules! transition_table {
    (
        $vis:vis static $name:ident: $state:ty, $prop:ty => $boundary:ty;
        $(($from:expr, $on:expr) => ($to:expr, $brk:expr, $rule:expr),)*
    ) => {
        $vis static $name: [
            [Option<$crate::unicode::rules::Transition<$state, $boundary>>; <$prop>::COUNT];
            <$state>::COUNT
        ] = {
            let mut table = [[None; <$prop>::COUNT]; <$state>::COUNT];
            $(
                let (from, on) = (($from) as usize, ($on) as usize);
                assert!(
                    table[from][on].is_none(),
                    concat!("duplicate transition for ", stringify!($from), " x ", stringify!($on)),
                );
                table[from][on] = Some($crate::unicode::rules::Transition {
                    state: $to,
                    boundary: $brk,
                    rule: $rule,
                });
            )*
            table
        };
    };
}
