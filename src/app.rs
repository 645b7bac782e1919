use std::time::Instant;

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::layout::Rect;

use crate::board::BoardGeometry;
use crate::config::Config;
use crate::event::AppEvent;
use crate::session::{Outcome, TrainerSession, TrialConfig};
use crate::ui::layout::MenuLayout;
use crate::ui::text_field::{InputResult, TextField};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    StartMenu,
    Active,
    GameOver,
}

/// Shared rendering and sizing state, built once at startup and handed to
/// whatever needs to draw or hit-test.
pub struct AppContext {
    pub theme: Theme,
    pub area: Rect,
    pub board: Option<BoardGeometry>,
}

impl AppContext {
    pub fn new(theme: Theme, area: Rect) -> Self {
        Self {
            theme,
            area,
            board: BoardGeometry::fit(area),
        }
    }

    /// Board coordinates under a terminal cell. Without a board every click
    /// lands off the grid.
    pub fn locate(&self, column: u16, row: u16) -> (i32, i32) {
        match self.board {
            Some(board) => board.locate(column, row),
            None => (-1, -1),
        }
    }
}

pub struct App {
    pub screen: AppScreen,
    pub context: AppContext,
    pub time_field: TextField,
    pub lives_field: TextField,
    /// Last start-menu parse failure, shown until the next edit.
    pub menu_error: Option<String>,
    pub session: Option<TrainerSession>,
    pub sequence_length: usize,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(config: &Config, context: AppContext) -> Self {
        let mut app = Self {
            screen: AppScreen::StartMenu,
            context,
            time_field: TextField::new(&config.default_time_limit.to_string()),
            lives_field: TextField::new(&config.default_lives.to_string()),
            menu_error: None,
            session: None,
            sequence_length: config.sequence_length,
            should_quit: false,
            rng: SmallRng::from_entropy(),
        };
        app.layout_fields();
        app
    }

    pub fn resize(&mut self, area: Rect) {
        self.context.area = area;
        self.context.board = BoardGeometry::fit(area);
        self.layout_fields();
    }

    fn layout_fields(&mut self) {
        let layout = MenuLayout::new(self.context.area);
        self.time_field.area = layout.time_field;
        self.lives_field.area = layout.lives_field;
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Resize(w, h) => self.resize(Rect::new(0, 0, w, h)),
            event => match self.screen {
                AppScreen::StartMenu => self.handle_menu_event(event, now),
                AppScreen::Active => self.handle_active_event(event, now),
                AppScreen::GameOver => self.handle_game_over_event(event),
            },
        }
    }

    fn handle_menu_event(&mut self, event: AppEvent, now: Instant) {
        if let AppEvent::Key(key) = &event {
            let editing = self.time_field.focused || self.lives_field.focused;
            match key.code {
                KeyCode::Enter => return self.submit_menu(now),
                KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('q') if !editing => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    self.cycle_focus();
                    return;
                }
                _ => {}
            }
        }

        let time = self.time_field.handle_event(&event);
        let lives = self.lives_field.handle_event(&event);
        if matches!(event, AppEvent::Key(_))
            && (time != InputResult::Ignored || lives != InputResult::Ignored)
        {
            self.menu_error = None;
        }
    }

    fn cycle_focus(&mut self) {
        let to_lives = self.time_field.focused;
        self.time_field.focused = !to_lives;
        self.lives_field.focused = to_lives;
    }

    /// Starts a session from the menu fields. A parse failure is reported
    /// and leaves the menu and its text as they were.
    pub fn submit_menu(&mut self, now: Instant) {
        match TrialConfig::parse(self.time_field.value(), self.lives_field.value()) {
            Ok(config) => {
                log::info!(
                    "session start: {:.2}s per square, {} lives, {} squares per sequence",
                    config.time_limit_secs(),
                    config.max_errors,
                    self.sequence_length
                );
                let rng = SmallRng::from_rng(&mut self.rng).unwrap_or_else(|_| SmallRng::from_entropy());
                self.session = Some(TrainerSession::new(config, self.sequence_length, rng, now));
                self.menu_error = None;
                self.time_field.focused = false;
                self.lives_field.focused = false;
                self.screen = AppScreen::Active;
            }
            Err(err) => {
                log::warn!("invalid start menu input: {err}");
                self.menu_error = Some(err.to_string());
            }
        }
    }

    fn handle_active_event(&mut self, event: AppEvent, now: Instant) {
        let AppEvent::Click { column, row } = event else {
            return;
        };
        let position = self.context.locate(column, row);
        if let Some(session) = self.session.as_mut() {
            let outcome = session.register_click(position, now);
            self.apply_outcome(outcome, now);
        }
    }

    fn handle_game_over_event(&mut self, event: AppEvent) {
        if let AppEvent::Key(key) = event {
            match key.code {
                KeyCode::Char(' ') => self.restart(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
        }
    }

    /// Once-per-frame deadline check.
    pub fn tick(&mut self, now: Instant) {
        if self.screen != AppScreen::Active {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            let outcome = session.check_timeout(now);
            self.apply_outcome(outcome, now);
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match outcome {
            Outcome::Continue => {}
            Outcome::SequenceComplete => {
                log::info!("sequence complete, score {}; dealing a new one", session.score);
                session.next_sequence(now);
            }
            Outcome::GameOver => {
                log::info!(
                    "game over: score {}, errors {}/{}",
                    session.score,
                    session.errors,
                    session.config.max_errors
                );
                self.screen = AppScreen::GameOver;
            }
        }
    }

    pub fn restart(&mut self) {
        self.session = None;
        self.screen = AppScreen::StartMenu;
    }
}
