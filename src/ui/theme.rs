//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - classic felt green
pub const BOARD_BG: Color32 = Color32::from_rgb(34, 120, 70);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(20, 70, 40);
pub const GRID_LINE: Color32 = Color32::from_rgb(15, 55, 30);
pub const STAR_POINT: Color32 = Color32::from_rgb(15, 55, 30);
pub const LABEL: Color32 = Color32::from_rgb(200, 230, 205);

// Disk colors
pub const BLACK_DISK: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_DISK_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_DISK: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_DISK_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn legal_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn disk_preview(side: crate::Side) -> Color32 {
    match side {
        crate::Side::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
        crate::Side::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const DISK_RADIUS_RATIO: f32 = 0.42;
pub const HINT_RADIUS_RATIO: f32 = 0.12;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Dots on the grid intersections around the center four squares
pub const STAR_POINTS: [(u8, u8); 4] = [(2, 2), (2, 6), (6, 2), (6, 6)];
