use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing_subscriber::EnvFilter;

use carousel::announcer::LiveRegion;
use carousel::constants::*;
use carousel::controller::CarouselController;
use carousel::deck;
use carousel::theme::{self, Theme};
use carousel::ui::{App, UiAction};

#[derive(Parser)]
#[command(name = "carousel", version, about = "Terminal testimonial carousel")]
struct Cli {
    /// Deck file with [[testimonial]] entries (TOML). Uses the built-in
    /// demo deck when omitted.
    deck: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL_MS as u64)]
    interval: u64,

    /// Start with autoplay paused
    #[arg(long)]
    no_autoplay: bool,

    /// Write tracing output to this file (the terminal belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carousel=debug")),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    // --- Load the deck ---
    let testimonials = match &cli.deck {
        Some(path) => deck::load_deck(path)?,
        None => deck::demo_deck(),
    };

    let interval_ms = cli.interval.max(1) as f32;
    let mut controller = CarouselController::new(testimonials, interval_ms, LiveRegion::new());
    if cli.no_autoplay {
        controller.pause_autoplay();
    }

    let theme = Theme::from_mode(theme::load_mode());
    let mut app = App::new(controller, theme);

    // --- Run the frontend, restoring the terminal on any exit path ---
    let mut terminal = ratatui::init();
    let capture = execute!(stdout(), EnableMouseCapture).context("failed to enable mouse capture");
    let result = match capture {
        Ok(()) => {
            let result = run(&mut terminal, &mut app);
            let _ = execute!(stdout(), DisableMouseCapture);
            result
        }
        Err(error) => Err(error),
    };
    ratatui::restore();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    let frame_time = Duration::from_millis(FRAME_TIME_MS as u64);
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = frame_time.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if app.handle_event(&event::read()?) == UiAction::Quit {
                return Ok(());
            }
        }

        let dt = last_tick.elapsed();
        last_tick = Instant::now();
        app.tick(dt.as_secs_f32() * 1000.0);
    }
}
