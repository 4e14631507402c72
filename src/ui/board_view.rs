//! Board rendering for the Othello GUI

use crate::{Board, Coord, Side, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if it is a legal move.
    ///
    /// `interactive` is false while the game is over or the engine is
    /// thinking; hover and clicks are ignored then.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Side,
        last_move: Option<Coord>,
        suggested_move: Option<Coord>,
        show_hints: bool,
        interactive: bool,
    ) -> Option<Coord> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_disks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if interactive && show_hints {
            for pos in board.legal_moves(to_move) {
                self.draw_legal_hint(&painter, pos);
            }
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, to_move);
        }

        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let flips = board.flips(pos, to_move);
                    let is_legal = !flips.is_empty();

                    if is_legal {
                        self.draw_disk_preview(&painter, pos, to_move);
                        // Outline the disks this move would turn over
                        for flipped in flips.iter_ones() {
                            let center = self.board_to_screen(flipped);
                            let radius = self.cell_size * DISK_RADIUS_RATIO + 2.0;
                            painter.circle_stroke(center, radius, Stroke::new(2.0, WIN_HIGHLIGHT));
                        }
                    } else if !board.is_occupied(pos) {
                        let radius = self.cell_size * DISK_RADIUS_RATIO;
                        painter.circle_filled(self.board_to_screen(pos), radius, hover_invalid());
                    }

                    if response.clicked() && is_legal {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 9 + 9 cell boundary lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(area.min.x + offset, area.min.y),
                    Pos2::new(area.min.x + offset, area.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(area.min.x, area.min.y + offset),
                    Pos2::new(area.max.x, area.min.y + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        let area = self.play_area();
        for (x, y) in STAR_POINTS {
            let center = area.min + Vec2::new(x as f32, y as f32) * self.cell_size;
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column (x) and row (y) indices along the margins, matching the
    /// coordinates the engine reports
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let area = self.play_area();
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let along = (i as f32 + 0.5) * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(area.min.x + along, self.board_rect.min.y + half);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);

            let left = Pos2::new(self.board_rect.min.x + half, area.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);
        }
    }

    fn draw_disks(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied().iter_ones() {
            if let Some(side) = board.cell(pos).side() {
                self.draw_disk(painter, pos, side);
            }
        }
    }

    /// Draw a single disk with a drop shadow
    fn draw_disk(&self, painter: &Painter, pos: Coord, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match side {
            Side::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 70),
                );
                painter.circle_filled(center, radius, BLACK_DISK);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_DISK_HIGHLIGHT);
            }
            Side::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 50),
                );
                painter.circle_filled(center, radius, WHITE_DISK);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.08, WHITE_DISK_SHADOW),
                );
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Coord) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_legal_hint(&self, painter: &Painter, pos: Coord) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, legal_hint());
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Coord, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        painter.circle_filled(center, radius, disk_preview(side));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(18.0),
            match side {
                Side::Black => WHITE_DISK,
                Side::White => BLACK_DISK,
            },
        );
    }

    fn draw_disk_preview(&self, painter: &Painter, pos: Coord, side: Side) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * DISK_RADIUS_RATIO, disk_preview(side));
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Coord> {
        let relative = screen_pos - self.play_area().min;
        let x = (relative.x / self.cell_size).floor() as i32;
        let y = (relative.y / self.cell_size).floor() as i32;
        Coord::try_new(x, y)
    }

    /// Center of a board cell in screen coordinates
    pub fn board_to_screen(&self, pos: Coord) -> Pos2 {
        let area = self.play_area();
        Pos2::new(
            area.min.x + (pos.x as f32 + 0.5) * self.cell_size,
            area.min.y + (pos.y as f32 + 0.5) * self.cell_size,
        )
    }
}
