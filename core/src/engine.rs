// SPDX-License-Identifier: MIT OR Apache-2.0

//! The opaque engine boundary.
//!
//! All chess knowledge lives behind this trait: move generation, legality,
//! search, evaluation. The UI consumes exactly two operations plus a reset,
//! and treats the implementation as a black box.

use crate::Move;

/// External chess engine consumed by the board controller.
///
/// `attempt_move` takes the flat-index convention (0-63, rank-major,
/// a-file first) and returns the legality verdict. A `true` verdict means
/// the engine has applied the move to its own position.
pub trait Engine: Send {
    /// Return the engine to the standard starting position
    fn reset(&mut self);

    /// Attempt a move; returns whether the engine judged it legal and
    /// applied it
    fn attempt_move(&mut self, from: u8, to: u8) -> bool;

    /// Ask the engine for its reply to the last accepted move, or `None`
    /// when it has no reply (end of game)
    fn choose_reply(&mut self) -> Option<Move>;
}
