// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui chessboard UI.

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::unbounded;
use tracing_subscriber::EnvFilter;

use chessboard_core::Color;
use chessboard_ui_egui::app::App;
use chessboard_ui_egui::grid::GridDemoApp;
use chessboard_ui_egui::msg::{EngineToUi, UiToEngine};
use chessboard_ui_egui::offline_engine::ScriptedEngine;
use chessboard_ui_egui::worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OrientationArg {
    White,
    Black,
}

impl From<OrientationArg> for Color {
    fn from(value: OrientationArg) -> Self {
        match value {
            OrientationArg::White => Color::White,
            OrientationArg::Black => Color::Black,
        }
    }
}

#[derive(Parser)]
#[command(name = "chessboard-ui-egui")]
#[command(about = "Chessboard UI over an opaque engine boundary")]
struct Args {
    /// Preselect the board orientation radio value
    #[arg(long, value_enum, default_value_t = OrientationArg::White)]
    orientation: OrientationArg,

    /// Show the static checkerboard grid demo instead of the game
    #[arg(long)]
    grid_demo: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    if args.grid_demo {
        return run_grid_demo();
    }

    // Channels between the UI and the engine worker
    let (ui_tx, engine_rx) = unbounded::<UiToEngine>();
    let (engine_tx, ui_rx) = unbounded::<EngineToUi>();

    // Spawn the background worker with the placeholder backend
    let engine = Box::new(ScriptedEngine::casual());
    let worker_handle = worker::spawn_worker(engine, engine_rx, engine_tx)?;

    let preselected = Color::from(args.orientation);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([420.0, 480.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Chessboard",
        options,
        Box::new(move |_cc| {
            let mut app = App::new(ui_tx, ui_rx, preselected);
            app.set_worker_handle(worker_handle);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run eframe: {e}"))
}

fn run_grid_demo() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 440.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Checkerboard Grid",
        options,
        Box::new(|_cc| Box::new(GridDemoApp::default())),
    )
    .map_err(|e| anyhow::anyhow!("failed to run eframe: {e}"))
}
