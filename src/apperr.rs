// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Errors raised at the configuration boundary.
//!
//! Segmentation itself is total: malformed input decodes to U+FFFD and
//! unknown code points fall back to a default property. Only turning
//! outside input into a [`Config`](crate::config::Config) can fail.

use std::{env, result};

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ambiguous width must be 1 or 2, got {0}")]
    InvalidAmbiguousWidth(u8),

    #[error("invalid ambiguous width {0:?}, expected 1, 2, narrow or wide")]
    UnparsableAmbiguousWidth(String),

    #[error("failed to read {var}")]
    Env {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidAmbiguousWidth(3).to_string(),
            "ambiguous width must be 1 or 2, got 3"
        );
        assert_eq!(
            Error::UnparsableAmbiguousWidth("huge".into()).to_string(),
            "invalid ambiguous width \"huge\", expected 1, 2, narrow or wide"
        );
    }

    #[test]
    fn test_env_source() {
        let err = Error::Env { var: "TEXTSEG_AMBIGUOUS_WIDTH", source: env::VarError::NotPresent };
        assert_eq!(err.to_string(), "failed to read TEXTSEG_AMBIGUOUS_WIDTH");
        assert!(err.source().is_some());
    }
}
