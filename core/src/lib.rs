// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chessboard Core - Board Model and Engine Boundary
//!
//! This crate provides the model shared by the UI:
//! - Square coordinates and the 64-label algebraic table
//! - Display-level board state (no rule knowledge)
//! - Origin-destination move notation ("e2e4")
//! - The opaque engine trait boundary

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod notation;
pub mod square;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use square::Square;

/// Player color, also used as the board's facing orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// White player (white-facing orientation)
    White,
    /// Black player (black-facing orientation)
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind, without its owning color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A move as produced by drag-and-drop: source and target squares,
/// optionally the identity of the piece that was dragged.
///
/// Legality is not a property of this type; the external engine is the
/// sole judge of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece was picked up from
    pub from: Square,
    /// Square the piece was dropped on
    pub to: Square,
    /// The dragged piece, when known
    pub piece: Option<Piece>,
}

impl Move {
    /// Create a move between two squares with no piece identity
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            piece: None,
        }
    }

    /// Attach the identity of the moved piece
    pub fn with_piece(mut self, piece: Piece) -> Self {
        self.piece = Some(piece);
        self
    }
}

/// Errors from display-level board manipulation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The source square holds no piece to move
    #[error("no piece on source square {0}")]
    EmptySource(Square),

    /// Source and target are the same square
    #[error("move has identical source and target {0}")]
    NullMove(Square),
}
