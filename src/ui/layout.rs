use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MENU_WIDTH: u16 = 44;
const FIELD_WIDTH: u16 = 24;

/// Start menu regions. Both the renderer and click handling use this, so a
/// field is clickable exactly where it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub title: Rect,
    pub time_label: Rect,
    pub time_field: Rect,
    pub lives_label: Rect,
    pub lives_field: Rect,
    pub message: Rect,
    pub hint: Rect,
}

impl MenuLayout {
    pub fn new(area: Rect) -> Self {
        let column = centered_rect(MENU_WIDTH, 18, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(column);

        Self {
            title: rows[0],
            time_label: rows[2],
            time_field: centered_columns(FIELD_WIDTH, rows[3]),
            lives_label: rows[5],
            lives_field: centered_columns(FIELD_WIDTH, rows[6]),
            message: rows[8],
            hint: rows[9],
        }
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let left = area.x.saturating_add((area.width - w) / 2);
    let top = area.y.saturating_add((area.height - h) / 2);
    Rect::new(left, top, w, h)
}

fn centered_columns(width: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(44, 18, area), Rect::new(28, 11, 44, 18));

        let small = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(44, 18, small), small);
    }

    #[test]
    fn menu_fields_do_not_overlap() {
        let layout = MenuLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.time_field.height, 3);
        assert_eq!(layout.time_field.width, FIELD_WIDTH);
        assert!(layout.time_field.bottom() <= layout.lives_field.y);
        assert!(!layout.time_field.intersects(layout.lives_field));
        assert!(layout.time_label.y < layout.time_field.y);
        assert!(layout.message.y > layout.lives_field.y);
    }
}
