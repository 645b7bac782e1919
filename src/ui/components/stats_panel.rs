use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct StatsPanel<'a> {
    pub target: Option<String>,
    pub score: u32,
    pub errors: u32,
    pub max_errors: u32,
    pub remaining_secs: f64,
    pub theme: &'a Theme,
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let label = Style::default().fg(colors.fg());

        let target = self.target.unwrap_or_else(|| "-".to_string());
        let errors_color = if self.errors + 1 >= self.max_errors {
            colors.error()
        } else if self.errors > 0 {
            colors.warning()
        } else {
            colors.fg()
        };
        let time_color = if self.remaining_secs < 1.0 {
            colors.error()
        } else {
            colors.fg()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(" Target: ", label),
                Span::styled(
                    target,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Score:  ", label),
                Span::styled(self.score.to_string(), Style::default().fg(colors.success())),
            ]),
            Line::from(vec![
                Span::styled(" Errors: ", label),
                Span::styled(
                    format!("{}/{}", self.errors, self.max_errors),
                    Style::default().fg(errors_color),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Time:   ", label),
                Span::styled(
                    format!("{:.1}", self.remaining_secs.max(0.0)),
                    Style::default().fg(time_color),
                ),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn shows_target_score_errors_and_time() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        StatsPanel {
            target: Some("e4".to_string()),
            score: 7,
            errors: 1,
            max_errors: 3,
            remaining_secs: 2.46,
            theme: &theme,
        }
        .render(area, &mut buf);

        assert_eq!(line(&buf, 0), " Target: e4");
        assert_eq!(line(&buf, 1), " Score:  7");
        assert_eq!(line(&buf, 2), " Errors: 1/3");
        assert_eq!(line(&buf, 3), " Time:   2.5");
    }

    #[test]
    fn negative_time_is_shown_as_zero() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        StatsPanel {
            target: None,
            score: 0,
            errors: 0,
            max_errors: 3,
            remaining_secs: -0.4,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert_eq!(line(&buf, 0), " Target: -");
        assert_eq!(line(&buf, 3), " Time:   0.0");
    }
}
