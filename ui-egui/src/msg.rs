// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message types for UI-engine communication.
//!
//! Attempts carry the game generation they belong to, and the worker echoes
//! it on every answer; the session uses the echo to discard answers that
//! outlived a restart.

use chessboard_core::Move;

/// Messages sent from UI to the engine worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiToEngine {
    /// Reset the engine to the starting position
    NewGame,
    /// Attempt a move; the worker answers with a verdict, and with a reply
    /// when the verdict is legal
    AttemptMove { mv: Move, game_id: u64 },
    /// Shutdown the engine worker
    Shutdown,
}

/// Messages sent from the engine worker to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineToUi {
    /// Legality verdict for an attempted move
    Verdict { mv: Move, legal: bool, game_id: u64 },
    /// The engine's chosen reply to the last accepted move
    Reply { mv: Move, game_id: u64 },
    /// The engine has no reply; the game is over
    GameOver { game_id: u64 },
    /// Acknowledgment that shutdown was processed
    ShutdownAck,
}
