// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Everything related to Unicode lives here.

#[macro_use]
mod macros;

mod grapheme;
mod line;
mod lookahead;
mod measurement;
mod packing;
mod properties;
mod rules;
mod segment;
mod sentence;
mod step;
mod tables;
mod text;
mod utf8;
mod width;
mod word;

pub use line::LineBreakOpportunity;
pub use measurement::*;
pub use packing::State;
pub use segment::*;
pub use step::{Boundaries, Step, step, step_with};
pub use text::Text;
pub use utf8::{REPLACEMENT_CHARACTER, Utf8Chars, decode_first, decode_last};
pub use width::{VS15, VS16};
