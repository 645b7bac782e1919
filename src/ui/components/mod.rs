pub mod board;
pub mod game_over;
pub mod start_menu;
pub mod stats_panel;
