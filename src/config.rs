// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Width configuration.
//!
//! The only knob is how many columns East Asian Ambiguous characters occupy.
//! Terminals disagree on it, so it can be passed explicitly via [`Config`]
//! or installed process-wide with [`Config::install`]. The plain width
//! functions read the process-wide value once per call.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::{env, result};

use log::debug;

use crate::apperr::{Error, Result};
use crate::unicode::{self, Text};

/// The environment variable read by [`Config::from_env`].
pub const AMBIGUOUS_WIDTH_VAR: &str = "TEXTSEG_AMBIGUOUS_WIDTH";

/// Column count of East Asian Ambiguous characters.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AmbiguousWidth {
    #[default]
    Narrow = 1,
    Wide = 2,
}

impl AmbiguousWidth {
    #[inline]
    pub const fn columns(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for AmbiguousWidth {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Narrow),
            2 => Ok(Self::Wide),
            _ => Err(Error::InvalidAmbiguousWidth(value)),
        }
    }
}

impl FromStr for AmbiguousWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("narrow") {
            return Ok(Self::Narrow);
        }
        if s.eq_ignore_ascii_case("wide") {
            return Ok(Self::Wide);
        }
        match s.parse::<u8>() {
            Ok(n) => Self::try_from(n),
            Err(_) => Err(Error::UnparsableAmbiguousWidth(s.to_string())),
        }
    }
}

impl fmt::Display for AmbiguousWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        })
    }
}

static S_AMBIGUOUS_WIDTH: AtomicU8 = AtomicU8::new(AmbiguousWidth::Narrow as u8);

/// Settings for the width computations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    ambiguous_width: AmbiguousWidth,
}

impl Config {
    pub const fn new() -> Self {
        Self { ambiguous_width: AmbiguousWidth::Narrow }
    }

    /// Sets the width of East Asian Ambiguous characters.
    ///
    /// Defaults to [`AmbiguousWidth::Narrow`], which is what most Western terminals do.
    pub const fn with_ambiguous_width(mut self, ambiguous_width: AmbiguousWidth) -> Self {
        self.ambiguous_width = ambiguous_width;
        self
    }

    pub const fn ambiguous_width(&self) -> AmbiguousWidth {
        self.ambiguous_width
    }

    /// Builds a config from `TEXTSEG_AMBIGUOUS_WIDTH`. An unset variable yields the default.
    pub fn from_env() -> Result<Self> {
        let ambiguous_width = match env::var(AMBIGUOUS_WIDTH_VAR) {
            Ok(value) => value.parse()?,
            Err(env::VarError::NotPresent) => AmbiguousWidth::default(),
            Err(source) => return Err(Error::Env { var: AMBIGUOUS_WIDTH_VAR, source }),
        };
        debug!("{AMBIGUOUS_WIDTH_VAR}: ambiguous width is {ambiguous_width}");
        Ok(Self::new().with_ambiguous_width(ambiguous_width))
    }

    /// A snapshot of the process-wide config.
    pub fn global() -> Self {
        let ambiguous_width = match S_AMBIGUOUS_WIDTH.load(Ordering::Relaxed) {
            2 => AmbiguousWidth::Wide,
            _ => AmbiguousWidth::Narrow,
        };
        Self { ambiguous_width }
    }

    /// Makes this the process-wide config.
    ///
    /// Meant to be called once during initialization. Calls that are
    /// already running keep the snapshot they started with.
    pub fn install(self) {
        let previous = S_AMBIGUOUS_WIDTH.swap(self.ambiguous_width as u8, Ordering::Relaxed);
        if previous != self.ambiguous_width as u8 {
            debug!("ambiguous width changed to {}", self.ambiguous_width);
        }
    }

    /// The monospace width of `ch` on its own.
    pub fn rune_width(&self, ch: char) -> usize {
        unicode::rune_width_with(ch, self)
    }

    /// The monospace width of `text`, summed over its grapheme clusters.
    pub fn string_width<T: Text + ?Sized>(&self, text: &T) -> usize {
        unicode::string_width_with(text, self)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        Ok(Self::new().with_ambiguous_width(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ambiguous_width() {
        assert_eq!("1".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::Narrow);
        assert_eq!(" 2 ".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::Wide);
        assert_eq!("Wide".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::Wide);
        assert_eq!("NARROW".parse::<AmbiguousWidth>().unwrap(), AmbiguousWidth::Narrow);
        assert!(matches!("3".parse::<AmbiguousWidth>(), Err(Error::InvalidAmbiguousWidth(3))));
        assert!(matches!(
            "huge".parse::<AmbiguousWidth>(),
            Err(Error::UnparsableAmbiguousWidth(s)) if s == "huge"
        ));
    }

    #[test]
    fn test_try_from_and_display() {
        assert_eq!(AmbiguousWidth::try_from(2).unwrap(), AmbiguousWidth::Wide);
        assert!(AmbiguousWidth::try_from(0).is_err());
        assert_eq!(AmbiguousWidth::Wide.to_string(), "wide");
        assert_eq!(AmbiguousWidth::Wide.columns(), 2);
    }

    #[test]
    fn test_explicit_config() {
        let narrow = Config::new();
        let wide = Config::new().with_ambiguous_width(AmbiguousWidth::Wide);
        // U+00B1 PLUS-MINUS SIGN is East Asian Ambiguous.
        assert_eq!(narrow.rune_width('\u{00B1}'), 1);
        assert_eq!(wide.rune_width('\u{00B1}'), 2);
        assert_eq!(wide.string_width("a\u{00B1}b"), 4);
        assert_eq!(wide.rune_width('a'), 1);
        assert_eq!("wide".parse::<Config>().unwrap(), wide);
    }
}
