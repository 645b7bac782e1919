use ratatui::layout::Rect;

use crate::board::square::{BOARD_SIZE, Square};

/// Height of the stats panel drawn above the board.
pub const STATS_HEIGHT: u16 = 6;
/// Columns reserved left of the board for rank labels.
pub const RANK_GUTTER: u16 = 2;
/// Rows reserved below the board for file labels.
pub const FILE_GUTTER: u16 = 1;

const MAX_SQUARE_HEIGHT: u16 = 3;

/// Integer-divides a position offset by the board origin into `(row, col)`.
/// Results are not clamped: positions outside the board yield rows or columns
/// outside `0..8`, including negative ones.
pub fn pixel_to_square(x: i32, y: i32, board_origin_y: i32, square_size: i32) -> (i32, i32) {
    (
        cell_index(y, board_origin_y, square_size),
        cell_index(x, 0, square_size),
    )
}

/// Index of the square along one axis, rounding toward negative infinity so
/// positions before the origin land on negative indices.
fn cell_index(pos: i32, origin: i32, size: i32) -> i32 {
    (pos - origin).div_euclid(size)
}

/// Where the board sits on the terminal and how big its squares are.
/// Terminal cells are roughly twice as tall as they are wide, so a square is
/// `square_width = 2 * square_height` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub square_width: u16,
    pub square_height: u16,
}

impl BoardGeometry {
    /// Largest board that fits in `area` under the stats panel, centered
    /// horizontally. Returns `None` when not even a one-row board fits.
    pub fn fit(area: Rect) -> Option<Self> {
        let avail_h = area.height.saturating_sub(STATS_HEIGHT + FILE_GUTTER);
        let avail_w = area.width.saturating_sub(RANK_GUTTER);

        let square_height = (1..=MAX_SQUARE_HEIGHT).rev().find(|&h| {
            h * BOARD_SIZE as u16 <= avail_h && 2 * h * BOARD_SIZE as u16 <= avail_w
        })?;
        let square_width = 2 * square_height;

        let total_w = RANK_GUTTER + square_width * BOARD_SIZE as u16;
        let left = area.x + (area.width - total_w) / 2;

        Some(Self {
            origin_x: left + RANK_GUTTER,
            origin_y: area.y + STATS_HEIGHT,
            square_width,
            square_height,
        })
    }

    pub fn width(&self) -> u16 {
        self.square_width * BOARD_SIZE as u16
    }

    pub fn height(&self) -> u16 {
        self.square_height * BOARD_SIZE as u16
    }

    pub fn area(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.width(), self.height())
    }

    /// Terminal rectangle covered by `square`.
    pub fn square_rect(&self, square: Square) -> Rect {
        Rect::new(
            self.origin_x + square.col() as u16 * self.square_width,
            self.origin_y + square.row() as u16 * self.square_height,
            self.square_width,
            self.square_height,
        )
    }

    /// Maps a terminal cell to unclamped board coordinates `(row, col)`.
    pub fn locate(&self, column: u16, row: u16) -> (i32, i32) {
        (
            cell_index(row as i32, self.origin_y as i32, self.square_height as i32),
            cell_index(column as i32, self.origin_x as i32, self.square_width as i32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_mapping_matches_square_grid() {
        // 512px board under a 188px stats strip, 64px squares
        assert_eq!(pixel_to_square(0, 188, 188, 64), (0, 0));
        assert_eq!(pixel_to_square(511, 699, 188, 64), (7, 7));
        assert_eq!(pixel_to_square(270, 188 + 4 * 64 + 10, 188, 64), (4, 4));
    }

    #[test]
    fn pixel_mapping_is_not_clamped() {
        assert_eq!(pixel_to_square(10, 100, 188, 64), (-2, 0));
        assert_eq!(pixel_to_square(600, 188, 188, 64), (0, 9));
    }

    #[test]
    fn fit_prefers_largest_squares() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 120, 40)).unwrap();
        assert_eq!(geometry.square_height, 3);
        assert_eq!(geometry.square_width, 6);
        assert_eq!(geometry.origin_y, STATS_HEIGHT);
        // centered: (120 - 50) / 2 = 35, plus the rank gutter
        assert_eq!(geometry.origin_x, 37);
    }

    #[test]
    fn fit_shrinks_for_small_terminals() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 80, 24)).unwrap();
        assert_eq!(geometry.square_height, 2);
        assert_eq!(geometry.square_width, 4);

        let geometry = BoardGeometry::fit(Rect::new(0, 0, 20, 16)).unwrap();
        assert_eq!(geometry.square_height, 1);

        assert!(BoardGeometry::fit(Rect::new(0, 0, 10, 10)).is_none());
    }

    #[test]
    fn locate_inverts_square_rect() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 120, 40)).unwrap();
        for square in Square::all() {
            let rect = geometry.square_rect(square);
            let corner = geometry.locate(rect.x, rect.y);
            let far = geometry.locate(rect.right() - 1, rect.bottom() - 1);
            let expected = (square.row() as i32, square.col() as i32);
            assert_eq!(corner, expected);
            assert_eq!(far, expected);
        }
    }

    #[test]
    fn locate_agrees_with_pixel_mapping_on_square_cells() {
        let geometry = BoardGeometry {
            origin_x: 0,
            origin_y: 6,
            square_width: 3,
            square_height: 3,
        };
        for column in 0..30 {
            for row in 0..32 {
                assert_eq!(
                    geometry.locate(column, row),
                    pixel_to_square(column as i32, row as i32, 6, 3),
                    "cell ({column}, {row})"
                );
            }
        }
    }

    #[test]
    fn locate_outside_board_is_off_grid() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 120, 40)).unwrap();
        let (row, _) = geometry.locate(geometry.origin_x, 0);
        assert!(row < 0);
        let (_, col) = geometry.locate(0, geometry.origin_y);
        assert!(col < 0);
    }
}
