use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::board::Square;
use crate::session::config::TrialConfig;

pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;

/// Result of a click or a deadline check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The last square of the sequence was consumed; the caller should deal a
    /// fresh sequence with [`TrainerSession::next_sequence`].
    SequenceComplete,
    GameOver,
}

/// Final numbers for the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub score: u32,
    pub errors: u32,
    pub timeouts: u32,
    pub sequences_completed: u32,
    pub average_response: Option<Duration>,
}

pub struct TrainerSession {
    pub config: TrialConfig,
    pub sequence: Vec<Square>,
    pub current_index: usize,
    pub score: u32,
    pub errors: u32,
    pub timeouts: u32,
    pub sequences_completed: u32,
    pub trial_started: Instant,
    pub deadline: Instant,
    sequence_length: usize,
    response_total: Duration,
    rng: SmallRng,
}

impl TrainerSession {
    pub fn new(config: TrialConfig, sequence_length: usize, rng: SmallRng, now: Instant) -> Self {
        let mut session = Self {
            config,
            sequence: Vec::new(),
            current_index: 0,
            score: 0,
            errors: 0,
            timeouts: 0,
            sequences_completed: 0,
            trial_started: now,
            deadline: now + config.time_limit,
            sequence_length: sequence_length.max(1),
            response_total: Duration::ZERO,
            rng,
        };
        session.start(now);
        session
    }

    /// Session with a fixed first sequence. Later sequences are random with
    /// the same length. `None` for an empty sequence.
    pub fn with_sequence(config: TrialConfig, sequence: Vec<Square>, now: Instant) -> Option<Self> {
        if sequence.is_empty() {
            return None;
        }
        let mut session = Self::new(config, sequence.len(), SmallRng::from_entropy(), now);
        session.sequence = sequence;
        Some(session)
    }

    /// Resets all counters and deals a new random sequence.
    pub fn start(&mut self, now: Instant) {
        self.score = 0;
        self.errors = 0;
        self.timeouts = 0;
        self.sequences_completed = 0;
        self.response_total = Duration::ZERO;
        self.deal(now);
    }

    /// Replaces an exhausted sequence. Score and error counters carry over.
    pub fn next_sequence(&mut self, now: Instant) {
        self.sequences_completed += 1;
        self.deal(now);
    }

    fn deal(&mut self, now: Instant) {
        let rng = &mut self.rng;
        self.sequence = (0..self.sequence_length)
            .map(|_| Square::random(&mut *rng))
            .collect();
        self.current_index = 0;
        self.reset_deadline(now);
    }

    fn reset_deadline(&mut self, now: Instant) {
        self.trial_started = now;
        self.deadline = now + self.config.time_limit;
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn current_target(&self) -> Option<Square> {
        self.sequence.get(self.current_index).copied()
    }

    pub fn is_over(&self) -> bool {
        self.errors >= self.config.max_errors
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.sequence.len()
    }

    /// Seconds left for the current square, never negative.
    pub fn remaining_secs(&self, now: Instant) -> f64 {
        self.deadline.saturating_duration_since(now).as_secs_f64()
    }

    /// Judges a click on board coordinates `(row, col)`. Coordinates off the
    /// board never match the target and are charged as a miss.
    pub fn register_click(&mut self, (row, col): (i32, i32), now: Instant) -> Outcome {
        if self.is_over() {
            return Outcome::GameOver;
        }
        let Some(target) = self.current_target() else {
            return Outcome::SequenceComplete;
        };

        if Square::new(row, col) == Some(target) {
            self.score += 1;
            self.current_index += 1;
            self.response_total += now.saturating_duration_since(self.trial_started);
            self.reset_deadline(now);
            if self.is_exhausted() {
                return Outcome::SequenceComplete;
            }
            Outcome::Continue
        } else {
            self.errors += 1;
            log::debug!("miss: target {target}, clicked ({row}, {col})");
            if self.is_over() {
                return Outcome::GameOver;
            }
            Outcome::Continue
        }
    }

    /// Charges a miss once `now` is past the deadline and skips the missed
    /// square. Skipping past the end reports `SequenceComplete`.
    pub fn check_timeout(&mut self, now: Instant) -> Outcome {
        if self.is_over() {
            return Outcome::GameOver;
        }
        if now <= self.deadline {
            return Outcome::Continue;
        }

        self.errors += 1;
        self.timeouts += 1;
        if let Some(target) = self.current_target() {
            log::debug!("timeout on {target}");
        }
        if self.is_over() {
            return Outcome::GameOver;
        }

        self.current_index += 1;
        if self.is_exhausted() {
            return Outcome::SequenceComplete;
        }
        self.reset_deadline(now);
        Outcome::Continue
    }

    pub fn summary(&self) -> RunSummary {
        let average_response = (self.score > 0).then(|| self.response_total / self.score);
        RunSummary {
            score: self.score,
            errors: self.errors,
            timeouts: self.timeouts,
            sequences_completed: self.sequences_completed,
            average_response,
        }
    }
}
