// SPDX-License-Identifier: MIT OR Apache-2.0

//! Origin-destination move notation.
//!
//! Moves are written as four characters, source label then target label,
//! e.g. "e2e4".

use std::str::FromStr;

use thiserror::Error;

use crate::square::ParseSquareError;
use crate::{Move, Square};

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError::Length(s.chars().count()));
        }

        let from = Square::from_label(&s[..2]).map_err(ParseMoveError::Source)?;
        let to = Square::from_label(&s[2..]).map_err(ParseMoveError::Target)?;
        Ok(Move::new(from, to))
    }
}

/// Errors from parsing origin-destination notation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Input was not exactly four characters
    #[error("move must be four characters, got {0}")]
    Length(usize),

    /// Source label did not parse
    #[error("bad source square: {0}")]
    Source(#[source] ParseSquareError),

    /// Target label did not parse
    #[error("bad target square: {0}")]
    Target(#[source] ParseSquareError),
}
