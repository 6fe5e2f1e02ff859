// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted placeholder engine.
//!
//! Exists so the UI is runnable end to end without a real engine behind the
//! boundary. It implements no chess logic whatsoever: every attempted move
//! is accepted, and replies come from a canned line, chosen at random on
//! each reset. When the line is exhausted it reports game over.

use rand::seq::SliceRandom;

use chessboard_core::engine::Engine;
use chessboard_core::Move;

/// Canned reply lines (black's side of a few common openings)
const REPLY_LINES: &[&[&str]] = &[
    // Open game into the Italian
    &["e7e5", "b8c6", "g8f6", "f8c5", "e8g8"],
    // Sicilian
    &["c7c5", "d7d6", "g8f6", "b8c6", "e7e6"],
    // Caro-Kann
    &["c7c6", "d7d5", "d5e4", "g8f6", "b8d7"],
];

/// Engine stub that accepts everything and plays back a scripted line
pub struct ScriptedEngine {
    line: Vec<Move>,
    cursor: usize,
}

impl ScriptedEngine {
    /// Build from an explicit reply line (deterministic; used by tests)
    pub fn with_line(line: Vec<Move>) -> Self {
        Self { line, cursor: 0 }
    }

    /// Build with a randomly chosen canned line
    pub fn casual() -> Self {
        let mut engine = Self {
            line: Vec::new(),
            cursor: 0,
        };
        engine.pick_line();
        engine
    }

    fn pick_line(&mut self) {
        let mut rng = rand::thread_rng();
        let picked = REPLY_LINES
            .choose(&mut rng)
            .copied()
            .unwrap_or(REPLY_LINES[0]);
        self.line = picked
            .iter()
            .filter_map(|s| s.parse::<Move>().ok())
            .collect();
        self.cursor = 0;
    }
}

impl Engine for ScriptedEngine {
    fn reset(&mut self) {
        self.pick_line();
        tracing::debug!(replies = self.line.len(), "scripted engine reset");
    }

    fn attempt_move(&mut self, from: u8, to: u8) -> bool {
        // No rules here: the placeholder accepts whatever arrives
        tracing::debug!(from, to, "scripted engine accepting move");
        true
    }

    fn choose_reply(&mut self) -> Option<Move> {
        let reply = self.line.get(self.cursor).copied();
        if reply.is_some() {
            self.cursor += 1;
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_in_script_order_then_game_over() {
        let line = vec!["e7e5".parse().unwrap(), "b8c6".parse().unwrap()];
        let mut engine = ScriptedEngine::with_line(line);

        assert!(engine.attempt_move(12, 28));
        assert_eq!(engine.choose_reply().unwrap().to_string(), "e7e5");
        assert!(engine.attempt_move(6, 21));
        assert_eq!(engine.choose_reply().unwrap().to_string(), "b8c6");
        assert_eq!(engine.choose_reply(), None);
    }

    #[test]
    fn reset_restarts_the_line() {
        let mut engine = ScriptedEngine::casual();
        let first = engine.choose_reply();
        assert!(first.is_some());
        engine.reset();
        assert!(engine.choose_reply().is_some());
    }

    #[test]
    fn canned_lines_all_parse() {
        for line in REPLY_LINES {
            for mv in *line {
                assert!(mv.parse::<Move>().is_ok(), "bad canned move {mv}");
            }
        }
    }
}
