// SPDX-License-Identifier: MIT OR Apache-2.0

//! Draggable chessboard widget.
//!
//! Paints the 8x8 board with parity-shaded squares and piece glyphs, and
//! turns drag-and-drop gestures into (source, target) square pairs. The
//! widget applies nothing itself: a drop that is not accepted upstream
//! simply leaves the position unpainted-changed, which is the snapback
//! outcome.

use egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use chessboard_core::board::BoardState;
use chessboard_core::{Color, Move, Square};

use crate::theme::{get_theme, piece_glyph};

/// A drag in progress
#[derive(Debug, Clone, Copy)]
struct DragState {
    from: Square,
}

/// Widget for rendering and interacting with the chessboard
pub struct BoardWidget {
    /// Cell size in pixels (dynamically calculated)
    cell_size: f32,
    /// Drag in progress, if any
    drag: Option<DragState>,
}

impl BoardWidget {
    pub fn new() -> Self {
        Self {
            cell_size: 60.0,
            drag: None,
        }
    }

    /// Render the board and return the dropped (source, target) pair if a
    /// drag was released on a different square this frame.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &BoardState,
        orientation: Color,
        last_move: Option<Move>,
        interactive: bool,
    ) -> Option<(Square, Square)> {
        // Fit the board to the available space
        let available = ui.available_size();
        self.cell_size = (available.min_elem() * 0.9 / 8.0).clamp(32.0, 96.0);
        let board_pixel_size = self.cell_size * 8.0;
        let desired_size = Vec2::splat(board_pixel_size);

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        if ui.is_rect_visible(rect) {
            self.paint_board(ui, rect, board, orientation, last_move);
        }

        if !interactive {
            self.drag = None;
            return None;
        }

        // Pick up a piece
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(square) = pos_to_square(pos, rect, self.cell_size, orientation) {
                    if board.piece_at(square).is_some() {
                        tracing::debug!(%square, "drag started");
                        self.drag = Some(DragState { from: square });
                    }
                }
            }
        }

        // Paint the dragged piece under the pointer
        if let Some(drag) = self.drag {
            if let (Some(placed), Some(pos)) = (
                board.piece_at(drag.from),
                ui.input(|i| i.pointer.interact_pos()),
            ) {
                let painter = ui.painter();
                painter.text(
                    pos,
                    Align2::CENTER_CENTER,
                    piece_glyph(placed.color, placed.piece),
                    FontId::proportional(self.cell_size * 0.8),
                    piece_color(placed.color),
                );
            }
        }

        // Drop
        if response.drag_stopped() {
            if let Some(drag) = self.drag.take() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(target) = pos_to_square(pos, rect, self.cell_size, orientation) {
                        if target != drag.from {
                            tracing::debug!(from = %drag.from, to = %target, "piece dropped");
                            return Some((drag.from, target));
                        }
                    }
                }
                // Released off the board or on the source square: snapback
                tracing::debug!(from = %drag.from, "drag released without target");
            }
        }

        None
    }

    fn paint_board(
        &self,
        ui: &mut egui::Ui,
        rect: Rect,
        board: &BoardState,
        orientation: Color,
        last_move: Option<Move>,
    ) {
        let painter = ui.painter_at(rect);
        let theme = get_theme();

        painter.rect_stroke(rect, 0.0, Stroke::new(2.0, theme.board_border));

        for rank in 0..8u8 {
            for file in 0..8u8 {
                let square = match Square::from_coords(file, rank) {
                    Some(sq) => sq,
                    None => continue,
                };
                let cell = square_rect(square, rect, self.cell_size, orientation);

                // Checkerboard parity: dark iff (rank + file) is even
                let shade = if (rank + file) % 2 == 0 {
                    theme.dark_square
                } else {
                    theme.light_square
                };
                painter.rect_filled(cell, 0.0, shade);

                if let Some(mv) = last_move {
                    if mv.from == square || mv.to == square {
                        painter.rect_filled(cell, 0.0, theme.last_move);
                    }
                }

                if let Some(drag) = self.drag {
                    if drag.from == square {
                        painter.rect_filled(cell, 0.0, theme.drag_source);
                        // The dragged piece is painted at the pointer instead
                        continue;
                    }
                }

                if let Some(placed) = board.piece_at(square) {
                    painter.text(
                        cell.center(),
                        Align2::CENTER_CENTER,
                        piece_glyph(placed.color, placed.piece),
                        FontId::proportional(self.cell_size * 0.8),
                        piece_color(placed.color),
                    );
                }
            }
        }
    }
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self::new()
    }
}

fn piece_color(color: Color) -> Color32 {
    let theme = get_theme();
    match color {
        Color::White => theme.white_piece,
        Color::Black => theme.black_piece,
    }
}

/// Screen column and row (0..8, row 0 at the top) of a square under the
/// given orientation. White-facing puts a1 bottom-left; black-facing flips
/// both axes.
pub fn screen_cell(square: Square, orientation: Color) -> (u8, u8) {
    match orientation {
        Color::White => (square.file(), 7 - square.rank()),
        Color::Black => (7 - square.file(), square.rank()),
    }
}

/// Pixel rectangle of a square within the board rect
pub fn square_rect(square: Square, board_rect: Rect, cell_size: f32, orientation: Color) -> Rect {
    let (col, row) = screen_cell(square, orientation);
    let min = Pos2::new(
        board_rect.min.x + col as f32 * cell_size,
        board_rect.min.y + row as f32 * cell_size,
    );
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

/// Convert a screen position to the square under it, if any
pub fn pos_to_square(
    pos: Pos2,
    board_rect: Rect,
    cell_size: f32,
    orientation: Color,
) -> Option<Square> {
    if !board_rect.contains(pos) {
        return None;
    }

    let rel = pos - board_rect.min;
    let col = (rel.x / cell_size).floor() as i32;
    let row = (rel.y / cell_size).floor() as i32;
    if !(0..8).contains(&col) || !(0..8).contains(&row) {
        return None;
    }

    let (file, rank) = match orientation {
        Color::White => (col as u8, 7 - row as u8),
        Color::Black => (7 - col as u8, row as u8),
    };
    Square::from_coords(file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::splat(8.0 * 10.0))
    }

    #[test]
    fn white_orientation_puts_a1_bottom_left() {
        let a1 = Square::from_label("a1").unwrap();
        assert_eq!(screen_cell(a1, Color::White), (0, 7));
        let h8 = Square::from_label("h8").unwrap();
        assert_eq!(screen_cell(h8, Color::White), (7, 0));
    }

    #[test]
    fn black_orientation_flips_both_axes() {
        let a1 = Square::from_label("a1").unwrap();
        assert_eq!(screen_cell(a1, Color::Black), (7, 0));
        let h8 = Square::from_label("h8").unwrap();
        assert_eq!(screen_cell(h8, Color::Black), (0, 7));
    }

    #[test]
    fn pos_and_rect_agree() {
        let rect = board_rect();
        for index in 0..64u8 {
            let square = Square::from_index(index).unwrap();
            for orientation in [Color::White, Color::Black] {
                let cell = square_rect(square, rect, 10.0, orientation);
                let back = pos_to_square(cell.center(), rect, 10.0, orientation).unwrap();
                assert_eq!(back, square);
            }
        }
    }

    #[test]
    fn positions_off_the_board_map_to_none() {
        let rect = board_rect();
        assert_eq!(
            pos_to_square(Pos2::new(-1.0, 5.0), rect, 10.0, Color::White),
            None
        );
        assert_eq!(
            pos_to_square(Pos2::new(85.0, 5.0), rect, 10.0, Color::White),
            None
        );
    }
}
