//! Terminal chess square trainer: a target square is named, the player clicks
//! it on the board before the clock runs out.

pub mod app;
pub mod board;
pub mod config;
pub mod event;
pub mod session;
pub mod ui;
