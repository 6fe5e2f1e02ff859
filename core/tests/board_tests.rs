// SPDX-License-Identifier: MIT OR Apache-2.0

use chessboard_core::board::BoardState;
use chessboard_core::{BoardError, Color, Move, Piece, Square};

fn sq(label: &str) -> Square {
    Square::from_label(label).unwrap()
}

#[test]
fn start_position_layout() {
    let board = BoardState::start_position();

    assert_eq!(board.piece_count(), 32);
    assert_eq!(board.piece_count_for(Color::White), 16);
    assert_eq!(board.piece_count_for(Color::Black), 16);

    let e2 = board.piece_at(sq("e2")).unwrap();
    assert_eq!(e2.color, Color::White);
    assert_eq!(e2.piece, Piece::Pawn);

    let e8 = board.piece_at(sq("e8")).unwrap();
    assert_eq!(e8.color, Color::Black);
    assert_eq!(e8.piece, Piece::King);

    let a1 = board.piece_at(sq("a1")).unwrap();
    assert_eq!(a1.color, Color::White);
    assert_eq!(a1.piece, Piece::Rook);

    let d1 = board.piece_at(sq("d1")).unwrap();
    assert_eq!(d1.piece, Piece::Queen);

    assert!(board.piece_at(sq("e4")).is_none());
    assert!(board.piece_at(sq("d5")).is_none());
}

#[test]
fn apply_moves_the_piece() {
    let mut board = BoardState::start_position();
    board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();

    assert!(board.piece_at(sq("e2")).is_none());
    let e4 = board.piece_at(sq("e4")).unwrap();
    assert_eq!(e4.color, Color::White);
    assert_eq!(e4.piece, Piece::Pawn);
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn apply_overwrites_target_on_capture() {
    let mut board = BoardState::start_position();
    board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
    board.apply(Move::new(sq("d7"), sq("d5"))).unwrap();
    board.apply(Move::new(sq("e4"), sq("d5"))).unwrap();

    let d5 = board.piece_at(sq("d5")).unwrap();
    assert_eq!(d5.color, Color::White);
    assert_eq!(board.piece_count(), 31);
}

#[test]
fn apply_from_empty_square_fails() {
    let mut board = BoardState::start_position();
    let result = board.apply(Move::new(sq("e4"), sq("e5")));
    assert_eq!(result, Err(BoardError::EmptySource(sq("e4"))));
}

#[test]
fn apply_null_move_fails() {
    let mut board = BoardState::start_position();
    let result = board.apply(Move::new(sq("e2"), sq("e2")));
    assert_eq!(result, Err(BoardError::NullMove(sq("e2"))));
}

#[test]
fn reset_restores_start_regardless_of_prior_state() {
    let mut board = BoardState::start_position();
    board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
    board.apply(Move::new(sq("g8"), sq("f6"))).unwrap();
    board.apply(Move::new(sq("d1"), sq("h5"))).unwrap();

    board.reset();

    assert_eq!(board.piece_count(), 32);
    assert!(board.piece_at(sq("e4")).is_none());
    assert!(board.piece_at(sq("h5")).is_none());
    assert_eq!(board.piece_at(sq("e2")).unwrap().piece, Piece::Pawn);
    assert_eq!(board.piece_at(sq("g8")).unwrap().piece, Piece::Knight);
}
