// SPDX-License-Identifier: MIT OR Apache-2.0

//! View management for the two screens.

/// Different views/screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Pre-game screen with the orientation selector
    #[default]
    Setup,
    /// Active game with the draggable board
    Game,
}
