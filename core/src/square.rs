// SPDX-License-Identifier: MIT OR Apache-2.0

//! Square coordinates and the algebraic label table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of squares on the board
pub const SQUARE_COUNT: usize = 64;

/// The 64 algebraic labels in flat-index order: rank-major, a-file first.
/// This is the engine's move-call convention; the order is fixed.
pub const SQUARE_LABELS: [&str; SQUARE_COUNT] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
];

/// A board square, stored as its flat index 0-63
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Create a square from a flat index, if in range
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < SQUARE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a square from file and rank, each 0-7
    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Parse an algebraic label such as "e4"
    pub fn from_label(label: &str) -> Result<Self, ParseSquareError> {
        let mut chars = label.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(ParseSquareError::Length(label.len())),
        };

        let file = match file_ch {
            'a'..='h' => file_ch as u8 - b'a',
            _ => return Err(ParseSquareError::File(file_ch)),
        };
        let rank = match rank_ch {
            '1'..='8' => rank_ch as u8 - b'1',
            _ => return Err(ParseSquareError::Rank(rank_ch)),
        };

        Ok(Self(rank * 8 + file))
    }

    /// Flat index 0-63
    pub fn index(&self) -> u8 {
        self.0
    }

    /// File 0-7 (a-file is 0)
    pub fn file(&self) -> u8 {
        self.0 % 8
    }

    /// Rank 0-7 (rank 1 is 0)
    pub fn rank(&self) -> u8 {
        self.0 / 8
    }

    /// Algebraic label from the fixed table
    pub fn label(&self) -> &'static str {
        SQUARE_LABELS[self.0 as usize]
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from parsing an algebraic square label
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    /// Label was not exactly two characters
    #[error("square label must be two characters, got {0}")]
    Length(usize),

    /// File letter outside a-h
    #[error("invalid file letter '{0}'")]
    File(char),

    /// Rank digit outside 1-8
    #[error("invalid rank digit '{0}'")]
    Rank(char),
}
