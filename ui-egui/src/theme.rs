// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board colors and piece glyphs.

use egui::Color32;
use once_cell::sync::Lazy;

use chessboard_core::{Color, Piece};

/// Colors used by the board widget and the grid renderer
pub struct BoardTheme {
    /// Dark squares (checkerboard parity even)
    pub dark_square: Color32,
    /// Light squares
    pub light_square: Color32,
    /// Border around the board
    pub board_border: Color32,
    /// Last-move highlight overlay
    pub last_move: Color32,
    /// Highlight under the square a drag started from
    pub drag_source: Color32,
    /// White piece glyph color
    pub white_piece: Color32,
    /// Black piece glyph color
    pub black_piece: Color32,
}

static THEME: Lazy<BoardTheme> = Lazy::new(|| BoardTheme {
    dark_square: Color32::from_rgb(181, 136, 99),
    light_square: Color32::from_rgb(240, 217, 181),
    board_border: Color32::from_rgb(92, 64, 51),
    last_move: Color32::from_rgba_unmultiplied(155, 199, 0, 105),
    drag_source: Color32::from_rgba_unmultiplied(20, 85, 30, 120),
    white_piece: Color32::from_rgb(248, 248, 248),
    black_piece: Color32::from_rgb(22, 21, 18),
});

/// Get the board theme
pub fn get_theme() -> &'static BoardTheme {
    &THEME
}

/// Unicode glyph for a piece of the given color
pub fn piece_glyph(color: Color, piece: Piece) -> &'static str {
    match (color, piece) {
        (Color::White, Piece::King) => "\u{2654}",
        (Color::White, Piece::Queen) => "\u{2655}",
        (Color::White, Piece::Rook) => "\u{2656}",
        (Color::White, Piece::Bishop) => "\u{2657}",
        (Color::White, Piece::Knight) => "\u{2658}",
        (Color::White, Piece::Pawn) => "\u{2659}",
        (Color::Black, Piece::King) => "\u{265A}",
        (Color::Black, Piece::Queen) => "\u{265B}",
        (Color::Black, Piece::Rook) => "\u{265C}",
        (Color::Black, Piece::Bishop) => "\u{265D}",
        (Color::Black, Piece::Knight) => "\u{265E}",
        (Color::Black, Piece::Pawn) => "\u{265F}",
    }
}
