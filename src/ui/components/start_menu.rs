use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::layout::MenuLayout;
use crate::ui::text_field::{TextField, TextFieldView};
use crate::ui::theme::Theme;

pub struct StartMenu<'a> {
    pub time_field: &'a TextField,
    pub lives_field: &'a TextField,
    pub message: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for StartMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let layout = MenuLayout::new(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "squaredr",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Chess Square Trainer",
                Style::default().fg(colors.fg()),
            )),
        ])
        .alignment(Alignment::Center);
        title.render(layout.title, buf);

        let prompt = Style::default().fg(colors.fg());
        Paragraph::new(Line::from(Span::styled("Time per square (seconds):", prompt)))
            .alignment(Alignment::Center)
            .render(layout.time_label, buf);
        TextFieldView::new(self.time_field, self.theme).render(layout.time_field, buf);

        Paragraph::new(Line::from(Span::styled("Number of lives:", prompt)))
            .alignment(Alignment::Center)
            .render(layout.lives_label, buf);
        TextFieldView::new(self.lives_field, self.theme).render(layout.lives_field, buf);

        if let Some(message) = self.message {
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(colors.error()),
            )))
            .alignment(Alignment::Center)
            .render(layout.message, buf);
        }

        Paragraph::new(Line::from(Span::styled(
            "[Enter] Start  [Tab] Next field  [Esc] Quit",
            Style::default().fg(colors.text_pending()),
        )))
        .alignment(Alignment::Center)
        .render(layout.hint, buf);
    }
}
