use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use squaredr::app::{App, AppContext};
use squaredr::config::Config;
use squaredr::event::EventHandler;
use squaredr::ui;
use squaredr::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "squaredr", version, about = "Terminal chess square trainer")]
struct Cli {
    #[arg(short, long, help = "Seconds per square shown in the start menu")]
    time: Option<f64>,

    #[arg(short = 'L', long, help = "Lives shown in the start menu")]
    lives: Option<u32>,

    #[arg(short = 'n', long, help = "Squares per sequence")]
    length: Option<usize>,

    #[arg(long, help = "Theme name (classic, green, or a user theme)")]
    theme: Option<String>,

    #[arg(long, help = "Log file path")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.clone());

    let mut config = Config::load()?;
    if let Some(time) = cli.time {
        config.default_time_limit = time;
    }
    if let Some(lives) = cli.lives {
        config.default_lives = lives;
    }
    if let Some(length) = cli.length {
        config.sequence_length = length;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    config.normalize();

    // Square colors are required; refuse to start without them.
    let theme = Theme::load(&config.theme).context("loading board theme")?;
    log::info!("starting with {config:?}");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = terminal
        .size()
        .map_err(anyhow::Error::from)
        .and_then(|size| {
            let area = Rect::new(0, 0, size.width, size.height);
            let mut app = App::new(&config, AppContext::new(theme, area));
            let mut events = EventHandler::new(config.fps);
            run_app(&mut terminal, &mut app, &mut events)
        });

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("{err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_logging(path: Option<PathBuf>) {
    let Some(path) = path.or_else(default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("squaredr").join("squaredr.log"))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        for event in events.drain()? {
            app.handle_event(event, Instant::now());
            if app.should_quit {
                return Ok(());
            }
        }

        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        events.wait_for_tick();
    }
}
