use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::event::AppEvent;
use crate::ui::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputResult {
    Ignored,
    Continue,
    /// Enter was pressed; carries the committed text. The field is cleared.
    Submit(String),
}

/// Single-line editable field with a clickable bounding box.
pub struct TextField {
    text: String,
    /// Where the field was last laid out. Clicks are tested against it.
    pub area: Rect,
    pub focused: bool,
}

impl TextField {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            area: Rect::default(),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> InputResult {
        match event {
            AppEvent::Click { column, row } => {
                self.focused = self.contains(*column, *row);
                InputResult::Continue
            }
            AppEvent::Key(key) if self.focused => self.handle_key(*key),
            _ => InputResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => return InputResult::Submit(std::mem::take(&mut self.text)),
            KeyCode::Backspace => {
                self.text.pop();
            }
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL) && !ch.is_control() =>
            {
                self.text.push(ch);
            }
            _ => return InputResult::Ignored,
        }
        InputResult::Continue
    }
}

pub struct TextFieldView<'a> {
    pub field: &'a TextField,
    pub theme: &'a Theme,
}

impl<'a> TextFieldView<'a> {
    pub fn new(field: &'a TextField, theme: &'a Theme) -> Self {
        Self { field, theme }
    }
}

impl Widget for TextFieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border = if self.field.focused {
            colors.border_focused()
        } else {
            colors.border()
        };

        let block = Block::bordered().border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(self.field.value(), Style::default().fg(colors.fg()))];
        if self.field.focused {
            spans.push(Span::styled(
                " ",
                Style::default()
                    .bg(colors.text_cursor_bg())
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
