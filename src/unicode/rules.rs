// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The wildcard resolution shared by all rule families.
//!
//! Each family is a table of `(state, property) -> (state, boundary, rule)` entries in which
//! either key may be the family's `Any` wildcard. The rule number is the UAX rule multiplied
//! by 10 (so that GB9a becomes 91), with 9990 for "any other pairing". Lower numbers win ties.

/// The result of feeding one property into a rule family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, B> {
    pub state: S,
    pub boundary: B,
    pub rule: u16,
}

/// A rule family: its state and property sets, and its transition table.
pub trait RuleFamily {
    type State: Copy;
    type Prop: Copy;
    type Boundary: Copy;

    const ANY_STATE: Self::State;
    const ANY_PROP: Self::Prop;
    /// Used when neither the exact pair nor a wildcard matches.
    const DEFAULT: Transition<Self::State, Self::Boundary>;

    /// The table entry for exactly `(state, prop)`, wildcards not expanded.
    fn entry(
        state: Self::State,
        prop: Self::Prop,
    ) -> Option<Transition<Self::State, Self::Boundary>>;
}

/// Looks up the transition for `(state, prop)`:
/// 1. An exact `(state, prop)` entry wins outright.
/// 2. Otherwise `(state, Any)` and `(Any, prop)` are looked up independently.
/// 3. If both exist, the new state comes from `(Any, prop)`, but the boundary
///    (and rule) come from whichever of the two has the lower rule number.
/// 4. If only one exists, it is used.
/// 5. Otherwise the family's [`RuleFamily::DEFAULT`] applies.
pub fn resolve<F: RuleFamily>(state: F::State, prop: F::Prop) -> Transition<F::State, F::Boundary> {
    if let Some(t) = F::entry(state, prop) {
        return t;
    }

    match (F::entry(state, F::ANY_PROP), F::entry(F::ANY_STATE, prop)) {
        (Some(any_prop), Some(any_state)) => {
            if any_prop.rule < any_state.rule {
                Transition { boundary: any_prop.boundary, rule: any_prop.rule, ..any_state }
            } else {
                any_state
            }
        }
        (Some(t), None) | (None, Some(t)) => t,
        (None, None) => F::DEFAULT,
    }
}

/// Readability aliases for the `bool` boundary of the grapheme, word and sentence tables.
pub const BREAK: bool = true;
pub const JOIN: bool = false;
