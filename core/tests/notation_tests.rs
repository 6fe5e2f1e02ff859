// SPDX-License-Identifier: MIT OR Apache-2.0

use chessboard_core::notation::ParseMoveError;
use chessboard_core::{Move, Square};

#[test]
fn parse_and_display_round_trip() {
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv.from, Square::from_label("e2").unwrap());
    assert_eq!(mv.to, Square::from_label("e4").unwrap());
    assert_eq!(mv.piece, None);
    assert_eq!(mv.to_string(), "e2e4");
}

#[test]
fn parse_various_squares() {
    let mv: Move = "a1h8".parse().unwrap();
    assert_eq!(mv.from.index(), 0);
    assert_eq!(mv.to.index(), 63);
}

#[test]
fn wrong_length_rejected() {
    assert!(matches!(
        "e2".parse::<Move>(),
        Err(ParseMoveError::Length(2))
    ));
    assert!(matches!(
        "e2e4x".parse::<Move>(),
        Err(ParseMoveError::Length(5))
    ));
    assert!(matches!("".parse::<Move>(), Err(ParseMoveError::Length(0))));
}

#[test]
fn bad_squares_rejected() {
    assert!(matches!(
        "i2e4".parse::<Move>(),
        Err(ParseMoveError::Source(_))
    ));
    assert!(matches!(
        "e2e9".parse::<Move>(),
        Err(ParseMoveError::Target(_))
    ));
}
