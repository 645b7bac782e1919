pub mod components;
pub mod layout;
pub mod text_field;
pub mod theme;

use std::time::Instant;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::app::{App, AppScreen};
use crate::board::geometry::STATS_HEIGHT;
use components::board::BoardView;
use components::game_over::GameOver;
use components::start_menu::StartMenu;
use components::stats_panel::StatsPanel;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    draw(app, now, area, frame.buffer_mut());
}

/// Draws the whole screen for the current state. Nothing is carried between
/// frames.
pub fn draw(app: &App, now: Instant, area: Rect, buf: &mut Buffer) {
    let theme = &app.context.theme;
    Block::default()
        .style(Style::default().bg(theme.colors.bg()))
        .render(area, buf);

    match app.screen {
        AppScreen::StartMenu => StartMenu {
            time_field: &app.time_field,
            lives_field: &app.lives_field,
            message: app.menu_error.as_deref(),
            theme,
        }
        .render(area, buf),
        AppScreen::Active => draw_active(app, now, area, buf),
        AppScreen::GameOver => {
            if let Some(session) = app.session.as_ref() {
                GameOver::new(&session.summary(), theme).render(area, buf);
            }
        }
    }
}

fn draw_active(app: &App, now: Instant, area: Rect, buf: &mut Buffer) {
    let theme = &app.context.theme;
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let stats_area = Rect::new(area.x, area.y, area.width, STATS_HEIGHT.min(area.height));
    StatsPanel {
        target: session.current_target().map(|s| s.to_string()),
        score: session.score,
        errors: session.errors,
        max_errors: session.config.max_errors,
        remaining_secs: session.remaining_secs(now),
        theme,
    }
    .render(stats_area, buf);

    match app.context.board {
        Some(geometry) => BoardView::new(geometry, theme).render(area, buf),
        None => {
            let notice = Rect::new(
                area.x,
                area.y + stats_area.height,
                area.width,
                area.height.saturating_sub(stats_area.height),
            );
            Paragraph::new(Line::styled(
                "Terminal too small for the board",
                Style::default().fg(theme.colors.warning()),
            ))
            .alignment(Alignment::Center)
            .render(notice, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::AppContext;
    use crate::config::Config;
    use crate::event::AppEvent;
    use crate::ui::theme::Theme;

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn drawn(app: &App, now: Instant) -> String {
        let mut buf = Buffer::empty(app.context.area);
        draw(app, now, app.context.area, &mut buf);
        screen_text(&buf)
    }

    fn app() -> App {
        let area = Rect::new(0, 0, 100, 40);
        App::new(&Config::default(), AppContext::new(Theme::default(), area))
    }

    #[test]
    fn start_menu_shows_prompts() {
        let app = app();
        let text = drawn(&app, Instant::now());
        assert!(text.contains("Chess Square Trainer"));
        assert!(text.contains("Time per square (seconds):"));
        assert!(text.contains("Number of lives:"));
        assert!(text.contains("[Enter] Start"));
    }

    #[test]
    fn field_text_is_drawn_inside_its_box() {
        let app = app();
        let mut buf = Buffer::empty(app.context.area);
        draw(&app, Instant::now(), app.context.area, &mut buf);
        let field = app.time_field.area;
        assert_eq!(buf[(field.x + 1, field.y + 1)].symbol(), "3");
    }

    #[test]
    fn active_screen_shows_stats() {
        let mut app = app();
        let now = Instant::now();
        app.handle_event(
            AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            now,
        );
        let target = app.session.as_ref().unwrap().current_target().unwrap();
        let text = drawn(&app, now);
        assert!(text.contains(&format!("Target: {target}")));
        assert!(text.contains("Errors: 0/3"));
        assert!(text.contains("Time:   3.0"));
    }

    #[test]
    fn game_over_shows_final_score() {
        let mut app = app();
        let now = Instant::now();
        app.handle_event(
            AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            now,
        );
        for _ in 0..3 {
            app.handle_event(AppEvent::Click { column: 0, row: 0 }, now);
        }
        let text = drawn(&app, now);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Final Score: 0"));
        assert!(text.contains("Press SPACE to restart"));
    }

    #[test]
    fn tiny_terminal_gets_a_notice() {
        let mut app = app();
        let now = Instant::now();
        app.handle_event(
            AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            now,
        );
        app.resize(Rect::new(0, 0, 40, 12));
        let text = drawn(&app, now);
        assert!(text.contains("Terminal too small"));
    }
}
