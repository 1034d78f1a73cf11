// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Streaming Unicode text segmentation and monospace display width.
//!
//! Text is cut into extended grapheme clusters, words and sentences (UAX #29)
//! and line break opportunities (UAX #14), one segment per call. Every call
//! returns a [`State`] that lets the next call resume exactly where it stopped,
//! so arbitrarily large texts can be processed piecewise without rescanning.
//!
//! ```
//! use textseg::{State, first_word, string_width};
//!
//! let mut rest = "Hello, 世界";
//! let mut state = State::INITIAL;
//! let mut words = Vec::new();
//! while let Some(word) = first_word(rest, state) {
//!     words.push(word.segment);
//!     rest = word.rest;
//!     state = word.state;
//! }
//! assert_eq!(words, ["Hello", ",", " ", "世", "界"]);
//! assert_eq!(string_width("Hello, 世界"), 11);
//! ```
//!
//! [`step`] combines all four kinds of boundaries with the cluster width in one pass.

pub mod apperr;
pub mod config;
pub mod unicode;

pub use config::{AmbiguousWidth, Config};
pub use unicode::{
    Boundaries, Cluster, Graphemes, LineBreakOpportunity, LineSegment, Segment, State, Step, Text,
    first_grapheme_cluster, first_grapheme_cluster_with, first_line_segment, first_sentence,
    first_word, grapheme_cluster_count, has_trailing_line_break, reverse_string, rune_width,
    rune_width_with, step, step_with, string_width, string_width_with,
};
