// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static checkerboard grid renderer.
//!
//! Illustrative demo component, deliberately unrelated to game state: it
//! fills a rect with 64 parity-shaded cells and nothing else. Runs as the
//! `grid_demo` binary; the board controller does not use it.

use egui::{self, Rect, Sense, Vec2};

use crate::theme::get_theme;

/// Shade of one checkerboard cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Dark cell, parity (rank + file) % 2 == 0
    Dark,
    /// Light cell
    Light,
}

/// One cell of the static grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub rank: u8,
    pub file: u8,
    pub shade: Shade,
}

/// Enumerate the 64 cells in rank-major, file-minor order
pub fn checkerboard_cells() -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(64);
    for rank in 0..8u8 {
        for file in 0..8u8 {
            let shade = if (rank + file) % 2 == 0 {
                Shade::Dark
            } else {
                Shade::Light
            };
            cells.push(GridCell { rank, file, shade });
        }
    }
    cells
}

/// Paints the static grid into an egui `Ui`
pub struct GridRenderer {
    cell_size: f32,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self { cell_size: 48.0 }
    }

    /// Fill the available space with the 64 cells. No interactivity, no
    /// return value; side effect is painting only.
    pub fn render(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        self.cell_size = (available.min_elem() / 8.0).clamp(16.0, 96.0);
        let desired_size = Vec2::splat(self.cell_size * 8.0);

        let (rect, _response) = ui.allocate_exact_size(desired_size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);
        let theme = get_theme();

        for cell in checkerboard_cells() {
            let min = egui::Pos2::new(
                rect.min.x + cell.file as f32 * self.cell_size,
                rect.min.y + cell.rank as f32 * self.cell_size,
            );
            let cell_rect = Rect::from_min_size(min, Vec2::splat(self.cell_size));
            let color = match cell.shade {
                Shade::Dark => theme.dark_square,
                Shade::Light => theme.light_square,
            };
            painter.rect_filled(cell_rect, 0.0, color);

            tracing::trace!(rank = cell.rank, file = cell.file, "grid cell painted");
        }
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal window around the grid renderer, shared by the `--grid-demo`
/// flag and the `grid_demo` binary
#[derive(Default)]
pub struct GridDemoApp {
    grid: GridRenderer,
}

impl eframe::App for GridDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.grid.render(ui);
        });
    }
}
