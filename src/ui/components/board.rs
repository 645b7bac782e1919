use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::board::BoardGeometry;
use crate::board::square::{BOARD_SIZE, FILES, Square};
use crate::ui::theme::Theme;

/// Chessboard with rank labels on the left edge and file labels underneath.
/// Squares carry no names; finding them is the exercise.
pub struct BoardView<'a> {
    pub geometry: BoardGeometry,
    pub theme: &'a Theme,
}

impl<'a> BoardView<'a> {
    pub fn new(geometry: BoardGeometry, theme: &'a Theme) -> Self {
        Self { geometry, theme }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let g = self.geometry;

        for square in Square::all() {
            let bg = if square.is_light() {
                colors.light_square()
            } else {
                colors.dark_square()
            };
            let rect = g.square_rect(square).intersection(area);
            buf.set_style(rect, Style::default().bg(bg));
        }

        let label_style = Style::default().fg(colors.label());

        for row in 0..BOARD_SIZE as u16 {
            let y = g.origin_y + row * g.square_height + g.square_height / 2;
            let x = g.origin_x.saturating_sub(2);
            let rank = (BOARD_SIZE as u16 - row).to_string();
            if area.contains((x, y).into()) {
                buf.set_string(x, y, rank, label_style);
            }
        }

        let label_y = g.origin_y + g.height();
        for (col, file) in FILES.iter().enumerate() {
            let x = g.origin_x + col as u16 * g.square_width + g.square_width / 2;
            if area.contains((x, label_y).into()) {
                buf.set_string(x, label_y, file.to_string(), label_style);
            }
        }
    }
}
