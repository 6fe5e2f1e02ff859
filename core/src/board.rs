// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display-level board state.
//!
//! This is what the widget paints: piece placement on 64 squares and
//! nothing more. It knows no chess rules; the engine behind the trait
//! boundary is the sole judge of legality.

use crate::square::SQUARE_COUNT;
use crate::{BoardError, Color, Move, Piece, Square};

/// A piece together with its owning color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub color: Color,
    pub piece: Piece,
}

/// Piece placement on the 64 squares
#[derive(Clone)]
pub struct BoardState {
    squares: [Option<PlacedPiece>; SQUARE_COUNT],
}

impl BoardState {
    /// Create an empty board
    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// Create a board in the standard starting position
    pub fn start_position() -> Self {
        let mut board = Self::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        for (file, piece) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            board.squares[file as usize] = Some(PlacedPiece {
                color: Color::White,
                piece,
            });
            board.squares[(8 + file) as usize] = Some(PlacedPiece {
                color: Color::White,
                piece: Piece::Pawn,
            });
            board.squares[(48 + file) as usize] = Some(PlacedPiece {
                color: Color::Black,
                piece: Piece::Pawn,
            });
            board.squares[(56 + file) as usize] = Some(PlacedPiece {
                color: Color::Black,
                piece,
            });
        }

        board
    }

    /// Get the piece at the specified square
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.squares[square.index() as usize]
    }

    /// Apply a move to the display: pick the piece up from the source and
    /// put it down on the target, overwriting whatever was there (capture).
    /// The source must be occupied; nothing else is checked.
    pub fn apply(&mut self, mv: Move) -> Result<(), BoardError> {
        if mv.from == mv.to {
            return Err(BoardError::NullMove(mv.from));
        }

        let from_idx = mv.from.index() as usize;
        let placed = self.squares[from_idx].ok_or(BoardError::EmptySource(mv.from))?;

        self.squares[from_idx] = None;
        self.squares[mv.to.index() as usize] = Some(placed);
        tracing::trace!(%mv, "display move applied");
        Ok(())
    }

    /// Reset to the standard starting position
    pub fn reset(&mut self) {
        *self = Self::start_position();
        tracing::trace!("display position reset");
    }

    /// Count pieces currently on the board
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    /// Count pieces of the specified color
    pub fn piece_count_for(&self, color: Color) -> usize {
        self.squares
            .iter()
            .filter(|s| matches!(s, Some(p) if p.color == color))
            .count()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::start_position()
    }
}
