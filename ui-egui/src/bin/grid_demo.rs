// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standalone static checkerboard grid demo.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use chessboard_ui_egui::grid::GridDemoApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

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
