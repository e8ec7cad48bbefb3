//! Theme constants for the Isolation GUI

use egui::Color32;

// Board colors - slate tiles
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 52, 64);
pub const CELL_OPEN: Color32 = Color32::from_rgb(216, 222, 233);
pub const CELL_BLOCKED: Color32 = Color32::from_rgb(76, 86, 106);
pub const GRID_LINE: Color32 = Color32::from_rgb(59, 66, 82);
pub const LABEL: Color32 = Color32::from_rgb(180, 188, 204);

// Token colors
pub const PLAYER_ONE: Color32 = Color32::from_rgb(94, 129, 172);
pub const PLAYER_ONE_HIGHLIGHT: Color32 = Color32::from_rgb(136, 170, 210);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(208, 135, 112);
pub const PLAYER_TWO_HIGHLIGHT: Color32 = Color32::from_rgb(235, 175, 150);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const SUGGESTION_MARKER: Color32 = Color32::from_rgb(50, 200, 90);

pub fn legal_move_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(163, 190, 140, 110)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const CELL_GAP: f32 = 3.0;
pub const TOKEN_RADIUS_RATIO: f32 = 0.35;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Fill and highlight colors of a player's token
pub fn token_colors(player: crate::Player) -> (Color32, Color32) {
    match player {
        crate::Player::One => (PLAYER_ONE, PLAYER_ONE_HIGHLIGHT),
        crate::Player::Two => (PLAYER_TWO, PLAYER_TWO_HIGHLIGHT),
    }
}
