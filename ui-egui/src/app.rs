// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and UI logic.

use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use chessboard_core::Color;

use crate::board_widget::BoardWidget;
use crate::msg::{EngineToUi, UiToEngine};
use crate::session::{DropOutcome, GameSession, Phase};
use crate::view::View;

/// Main application state
pub struct App {
    /// Channel to send messages to the engine worker
    ui_tx: Sender<UiToEngine>,
    /// Channel to receive messages from the engine worker
    ui_rx: Receiver<EngineToUi>,
    /// Worker thread handle for proper cleanup
    worker_handle: Option<JoinHandle<()>>,
    /// Current view/screen
    current_view: View,
    /// Orientation selected in the radio control
    selected_orientation: Color,
    /// Game session (board, orientation, exchange phase)
    session: GameSession,
    /// Board widget for rendering
    board_widget: BoardWidget,
}

impl App {
    pub fn new(
        ui_tx: Sender<UiToEngine>,
        ui_rx: Receiver<EngineToUi>,
        preselected: Color,
    ) -> Self {
        Self {
            ui_tx,
            ui_rx,
            worker_handle: None,
            current_view: View::default(),
            selected_orientation: preselected,
            session: GameSession::new(),
            board_widget: BoardWidget::new(),
        }
    }

    /// Attach the worker handle so shutdown can join it
    pub fn set_worker_handle(&mut self, handle: JoinHandle<()>) {
        self.worker_handle = Some(handle);
    }

    /// Drain pending engine messages without blocking
    fn drain_engine_messages(&mut self) {
        while let Ok(msg) = self.ui_rx.try_recv() {
            match msg {
                EngineToUi::Verdict { mv, legal, game_id } => {
                    self.session.handle_verdict(game_id, mv, legal)
                }
                EngineToUi::Reply { mv, game_id } => self.session.handle_reply(game_id, mv),
                EngineToUi::GameOver { game_id } => self.session.handle_game_over(game_id),
                EngineToUi::ShutdownAck => {}
            }
        }
    }

    /// Start (or restart) a game with the selected orientation
    fn start_game(&mut self) {
        self.session.start(self.selected_orientation);
        let _ = self.ui_tx.send(UiToEngine::NewGame);
        self.current_view = View::Game;
    }

    fn orientation_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Play as:");
            ui.radio_value(&mut self.selected_orientation, Color::White, "White");
            ui.radio_value(&mut self.selected_orientation, Color::Black, "Black");
        });
    }

    fn status_line(&self) -> &'static str {
        match self.session.phase() {
            Phase::Idle => "Your move",
            Phase::AwaitingVerdict(_) => "Checking move...",
            Phase::AwaitingReply => "Engine is thinking...",
            Phase::GameOver => "Game over",
        }
    }

    fn show_setup(&mut self, ui: &mut egui::Ui) {
        ui.heading("Chessboard");
        ui.add_space(8.0);
        self.orientation_selector(ui);
        ui.add_space(8.0);
        if ui.button("Start Game").clicked() {
            self.start_game();
        }
    }

    fn show_game(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.orientation_selector(ui);
            ui.separator();
            if ui.button("Start Game").clicked() {
                self.start_game();
            }
            ui.separator();
            ui.label(self.status_line());
        });
        ui.add_space(4.0);

        let interactive = self.session.can_drop();
        let dropped = self.board_widget.render(
            ui,
            self.session.board(),
            self.session.orientation(),
            self.session.last_move(),
            interactive,
        );

        if let Some((from, to)) = dropped {
            if let DropOutcome::Sent(mv) = self.session.handle_drop(from, to) {
                let _ = self.ui_tx.send(UiToEngine::AttemptMove {
                    mv,
                    game_id: self.session.game_id(),
                });
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_engine_messages();

        egui::CentralPanel::default().show(ctx, |ui| match self.current_view {
            View::Setup => self.show_setup(ui),
            View::Game => self.show_game(ui),
        });

        // Keep polling while an engine exchange is in flight
        if matches!(
            self.session.phase(),
            Phase::AwaitingVerdict(_) | Phase::AwaitingReply
        ) {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let _ = self.ui_tx.send(UiToEngine::Shutdown);
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
    }
}
