// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background worker owning the engine.
//!
//! The UI thread never calls the engine directly; it sends `UiToEngine`
//! over a channel and drains `EngineToUi` each frame. An accepted move is
//! answered with its verdict followed by the engine's reply (or a game-over
//! signal when the engine has none).

use std::thread;

use crossbeam_channel::{Receiver, Sender};

use chessboard_core::engine::Engine;

use crate::msg::{EngineToUi, UiToEngine};

/// Spawn the engine worker thread
pub fn spawn_worker(
    engine: Box<dyn Engine>,
    engine_rx: Receiver<UiToEngine>,
    ui_tx: Sender<EngineToUi>,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let handle = thread::spawn(move || {
        if let Err(e) = run_worker(engine, engine_rx, ui_tx) {
            tracing::error!("engine worker error: {e}");
        }
    });
    Ok(handle)
}

/// Service engine requests until shutdown or channel disconnect
pub fn run_worker(
    mut engine: Box<dyn Engine>,
    engine_rx: Receiver<UiToEngine>,
    ui_tx: Sender<EngineToUi>,
) -> anyhow::Result<()> {
    while let Ok(msg) = engine_rx.recv() {
        match msg {
            UiToEngine::NewGame => {
                tracing::debug!("resetting engine");
                engine.reset();
            }
            UiToEngine::AttemptMove { mv, game_id } => {
                let legal = engine.attempt_move(mv.from.index(), mv.to.index());
                tracing::debug!(%mv, legal, game_id, "engine verdict");
                ui_tx.send(EngineToUi::Verdict { mv, legal, game_id })?;

                if legal {
                    match engine.choose_reply() {
                        Some(reply) => {
                            tracing::debug!(%reply, game_id, "engine reply");
                            ui_tx.send(EngineToUi::Reply { mv: reply, game_id })?;
                        }
                        None => {
                            ui_tx.send(EngineToUi::GameOver { game_id })?;
                        }
                    }
                }
            }
            UiToEngine::Shutdown => {
                let _ = ui_tx.send(EngineToUi::ShutdownAck);
                break;
            }
        }
    }
    Ok(())
}
