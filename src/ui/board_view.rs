//! Board rendering for the Isolation GUI

use crate::{Board, GameBoard, Player, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: u8,
    cols: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

/// What the board view should draw on top of the cells
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub show_legal_moves: bool,
    pub game_over: bool,
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: Overlay) -> Option<Pos> {
        let (rows, cols) = board.dimensions();
        self.rows = rows;
        self.cols = cols;

        let available = ui.available_size();
        let span = f32::from(rows.max(cols));
        self.cell_size = ((available.x.min(available.y) - 20.0 - 2.0 * BOARD_MARGIN) / span).max(8.0);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + f32::from(cols) * self.cell_size,
            2.0 * BOARD_MARGIN + f32::from(rows) * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_coordinates(&painter);
        self.draw_cells(&painter, board);

        let mover = board.active_player();
        let legal = board.legal_moves(mover);
        if overlay.show_legal_moves && !overlay.game_over {
            for &pos in &legal {
                painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(3), legal_move_fill());
            }
        }

        for player in [Player::One, Player::Two] {
            if let Some(pos) = board.location(player) {
                self.draw_token(&painter, pos, player);
            }
        }

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !overlay.game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = legal.contains(&board_pos);
                    self.draw_hover_preview(&painter, board_pos, mover, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Pos::new(row, col);
                let fill = if board.is_blocked(pos) { CELL_BLOCKED } else { CELL_OPEN };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::same(3), fill);
            }
        }
        painter.rect_stroke(
            self.grid_rect(),
            CornerRadius::same(3),
            Stroke::new(1.0, GRID_LINE),
            egui::StrokeKind::Outside,
        );
    }

    /// Draw coordinate labels (columns A.., rows 0..)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.cols {
            let letter = (b'A' + col) as char;
            let x = self.cell_center(Pos::new(0, col)).x;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);
        }

        for row in 0..self.rows {
            let y = self.cell_center(Pos::new(row, 0)).y;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row.to_string(), font.clone(), LABEL);
        }
    }

    /// Draw a token with a small highlight
    fn draw_token(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * TOKEN_RADIUS_RATIO;
        let (fill, highlight) = token_colors(player);

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_filled(
            center + Vec2::new(-radius * 0.3, -radius * 0.3),
            radius * 0.25,
            highlight,
        );
        let label = match player {
            Player::One => "1",
            Player::Two => "2",
        };
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(radius),
            TEXT_PRIMARY,
        );
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * TOKEN_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(3.0, SUGGESTION_MARKER));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            SUGGESTION_MARKER,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, mover: Player, is_valid: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * TOKEN_RADIUS_RATIO;

        if is_valid {
            let (fill, _) = token_colors(mover);
            painter.circle_filled(center, radius, fill.gamma_multiply(0.5));
            painter.circle_filled(center, radius * 0.4, hover_valid());
        } else {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(3), hover_invalid());
        }
    }

    fn grid_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::new(
                f32::from(self.cols) * self.cell_size,
                f32::from(self.rows) * self.cell_size,
            ),
        )
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + f32::from(pos.col) * self.cell_size,
                BOARD_MARGIN + f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP * 0.5)
    }

    /// Convert board position to screen coordinates (cell center)
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as u32;
        let row = (relative.y / self.cell_size).floor() as u32;

        if row < u32::from(self.rows) && col < u32::from(self.cols) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
