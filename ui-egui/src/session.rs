// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session state owned by the app.
//!
//! The session holds the displayed position, the facing orientation and the
//! phase of the current engine exchange. Lifecycle: `start` begins or
//! restarts a game; each drop walks Idle -> AwaitingVerdict and, when the
//! verdict is legal, AwaitingVerdict -> AwaitingReply -> Idle. Drops are
//! refused while an exchange is in flight.
//!
//! Every start bumps a game generation, and engine messages echo the
//! generation of the attempt that produced them. A verdict, reply or
//! game-over signal from a previous generation is logged and ignored, so a
//! restart mid-exchange cannot corrupt the fresh game.

use chessboard_core::board::BoardState;
use chessboard_core::{Color, Move, Square};

/// Phase of the engine exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No exchange in flight; drops are accepted
    Idle,
    /// A move was sent to the engine; waiting for the legality verdict
    AwaitingVerdict(Move),
    /// The move was accepted; waiting for the engine's reply move
    AwaitingReply,
    /// The engine reported no reply; drops refused until the next start
    GameOver,
}

/// Outcome of a drop, as signaled back to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The move was forwarded to the engine
    Sent(Move),
    /// The drop was refused; the widget reverts the piece to its source
    Snapback,
}

/// UI session state for one game
pub struct GameSession {
    board: BoardState,
    orientation: Color,
    phase: Phase,
    started: bool,
    last_move: Option<Move>,
    /// Generation counter, bumped on every start
    game_id: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: BoardState::start_position(),
            orientation: Color::White,
            phase: Phase::Idle,
            started: false,
            last_move: None,
            game_id: 0,
        }
    }

    /// Start (or restart) a game: reset the position, set the facing
    /// orientation and bump the game generation. May be invoked at any
    /// time, regardless of prior state.
    pub fn start(&mut self, orientation: Color) {
        self.board.reset();
        self.orientation = orientation;
        self.phase = Phase::Idle;
        self.started = true;
        self.last_move = None;
        self.game_id += 1;
        tracing::info!(?orientation, game_id = self.game_id, "game started");
    }

    /// Generation of the current game; attempts sent to the engine carry
    /// this value so stale answers can be told apart
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Whether a drop would currently be accepted
    pub fn can_drop(&self) -> bool {
        self.started && self.phase == Phase::Idle
    }

    /// Handle a drag-release from the widget. Returns the move to forward
    /// to the engine, or a snapback signal when drops are not accepted.
    pub fn handle_drop(&mut self, from: Square, to: Square) -> DropOutcome {
        if !self.can_drop() {
            tracing::debug!(%from, %to, phase = ?self.phase, "drop refused");
            return DropOutcome::Snapback;
        }
        if from == to {
            return DropOutcome::Snapback;
        }

        let mut mv = Move::new(from, to);
        if let Some(placed) = self.board.piece_at(from) {
            mv = mv.with_piece(placed.piece);
        }

        self.phase = Phase::AwaitingVerdict(mv);
        tracing::debug!(%mv, "move sent to engine");
        DropOutcome::Sent(mv)
    }

    /// Handle the engine's legality verdict. On a legal verdict the pending
    /// move is applied to the display; on an illegal one the board is left
    /// untouched (the widget's snapback outcome).
    pub fn handle_verdict(&mut self, game_id: u64, mv: Move, legal: bool) {
        if game_id != self.game_id {
            tracing::warn!(game_id, current = self.game_id, %mv, "verdict from a previous game");
            return;
        }
        let pending = match self.phase {
            Phase::AwaitingVerdict(pending) => pending,
            _ => {
                tracing::warn!(%mv, legal, phase = ?self.phase, "unexpected verdict");
                return;
            }
        };
        if pending.from != mv.from || pending.to != mv.to {
            tracing::warn!(%mv, %pending, "verdict for a different move");
            return;
        }

        if legal {
            match self.board.apply(pending) {
                Ok(()) => {
                    self.last_move = Some(pending);
                    self.phase = Phase::AwaitingReply;
                    tracing::debug!(%pending, "move accepted");
                }
                Err(err) => {
                    tracing::warn!(%pending, %err, "accepted move not applicable to display");
                    self.phase = Phase::Idle;
                }
            }
        } else {
            tracing::debug!(%pending, "move rejected, snapping back");
            self.phase = Phase::Idle;
        }
    }

    /// Handle the engine's reply move and apply it to the display
    pub fn handle_reply(&mut self, game_id: u64, mv: Move) {
        if game_id != self.game_id {
            tracing::warn!(game_id, current = self.game_id, %mv, "reply from a previous game");
            return;
        }
        if self.phase != Phase::AwaitingReply {
            tracing::warn!(%mv, phase = ?self.phase, "unexpected reply");
            return;
        }

        match self.board.apply(mv) {
            Ok(()) => {
                self.last_move = Some(mv);
                tracing::debug!(%mv, "reply applied");
            }
            Err(err) => {
                // The reply's legality is the engine's contract; all the
                // display can do with an inapplicable one is skip it.
                tracing::warn!(%mv, %err, "reply not applicable to display");
            }
        }
        self.phase = Phase::Idle;
    }

    /// Handle the engine reporting no reply. Only meaningful while a reply
    /// is awaited; anything else is a stale signal and is ignored.
    pub fn handle_game_over(&mut self, game_id: u64) {
        if game_id != self.game_id {
            tracing::warn!(game_id, current = self.game_id, "game-over from a previous game");
            return;
        }
        if self.phase != Phase::AwaitingReply {
            tracing::warn!(phase = ?self.phase, "unexpected game-over signal");
            return;
        }
        tracing::info!("engine has no reply, game over");
        self.phase = Phase::GameOver;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn orientation(&self) -> Color {
        self.orientation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
