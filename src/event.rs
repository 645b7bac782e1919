use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Left mouse button pressed on terminal cell `(column, row)`.
    Click { column: u16, row: u16 },
    Resize(u16, u16),
    Quit,
}

impl AppEvent {
    /// Maps a raw terminal event to an app event. Key releases, repeats and
    /// mouse motion are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    Some(AppEvent::Quit)
                } else {
                    Some(AppEvent::Key(key))
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(AppEvent::Click { column, row }),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Fixed-rate frame pacing. A frame that runs long re-anchors the schedule to
/// the current time instead of firing a burst of catch-up ticks.
pub struct FrameClock {
    tick_rate: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        let tick_rate = Duration::from_secs(1) / fps.max(1);
        Self {
            tick_rate,
            next_tick: now + tick_rate,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// How long to sleep at `now` before the next frame, advancing the schedule.
    pub fn advance(&mut self, now: Instant) -> Duration {
        let wait = self.next_tick.saturating_duration_since(now);
        if wait.is_zero() {
            self.next_tick = now + self.tick_rate;
        } else {
            self.next_tick += self.tick_rate;
        }
        wait
    }
}

/// Single-threaded input source: drains pending terminal events without
/// blocking, then sleeps out the rest of the frame.
pub struct EventHandler {
    clock: FrameClock,
}

impl EventHandler {
    pub fn new(fps: u32) -> Self {
        Self {
            clock: FrameClock::new(fps, Instant::now()),
        }
    }

    pub fn drain(&mut self) -> anyhow::Result<Vec<AppEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = AppEvent::from_terminal(event::read()?) {
                events.push(ev);
            }
        }
        Ok(events)
    }

    pub fn wait_for_tick(&mut self) {
        let wait = self.clock.advance(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}
