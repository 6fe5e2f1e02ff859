// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Chessboard UI library

pub mod app;
pub mod board_widget;
pub mod grid;
pub mod msg;
pub mod offline_engine;
pub mod session;
pub mod theme;
pub mod view;
pub mod worker;
