use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::RunSummary;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

pub struct GameOver<'a> {
    pub summary: &'a RunSummary,
    pub theme: &'a Theme,
}

impl<'a> GameOver<'a> {
    pub fn new(summary: &'a RunSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for GameOver<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let popup = centered_rect(40, 12, area);

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            "Game Over",
            Style::default()
                .fg(colors.error())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Final Score: ", Style::default().fg(colors.fg())),
            Span::styled(
                self.summary.score.to_string(),
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        let dim = Style::default().fg(colors.text_pending());
        let average = self
            .summary
            .average_response
            .map(|d| format!("{:.2}s", d.as_secs_f64()))
            .unwrap_or_else(|| "-".to_string());
        let details = vec![
            Line::from(Span::styled(format!("Errors: {}", self.summary.errors), dim)),
            Line::from(Span::styled(format!("Timeouts: {}", self.summary.timeouts), dim)),
            Line::from(Span::styled(
                format!("Sequences cleared: {}", self.summary.sequences_completed),
                dim,
            )),
            Line::from(Span::styled(format!("Average response: {average}"), dim)),
        ];
        Paragraph::new(details)
            .alignment(Alignment::Center)
            .render(layout[2], buf);

        Paragraph::new(Line::from(Span::styled(
            "Press SPACE to restart  [q] Quit",
            Style::default().fg(colors.accent()),
        )))
        .alignment(Alignment::Center)
        .render(layout[4], buf);
    }
}
