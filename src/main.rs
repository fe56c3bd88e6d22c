//! Terminal front end: CLI, logging and the input/render loop

use anyhow::{Context, Result};
use boggle::app::{App, Move, DEFAULT_ROUND_DURATION};
use boggle::config;
use boggle::game::{BoggleBoard, DEFAULT_SIZE};
use boggle::tui::{self, Tui};
use clap::{Parser, Subcommand};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "boggle")]
#[command(about = "Terminal Boggle", long_about = None)]
struct Cli {
    /// Board dimension (N for an NxN board)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Round length in seconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ROUND_DURATION,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    duration: u32,

    /// Word list, one word per line (repeatable; lists are merged)
    #[arg(short, long, value_name = "FILE")]
    words: Vec<PathBuf>,

    /// Words to remove from the dictionary (repeatable)
    #[arg(long, value_name = "FILE")]
    exclude: Vec<PathBuf>,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (defaults to boggle.log in the data directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a generated board and exit
    Board,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if let Some(Commands::Board) = cli.command {
        let board = BoggleBoard::generate_with_rng(cli.size, &mut rng)?;
        print!("{}", board);
        return Ok(());
    }

    let data_dir = config::data_dir();
    init_logging(&config::log_file_path(
        cli.log_file.as_deref(),
        data_dir.as_deref(),
    ))?;

    let word_lists = config::word_list_paths(&cli.words, data_dir.as_deref());
    let dictionary = config::load_dictionary(&word_lists, &cli.exclude)
        .context("failed to load dictionary")?;

    let mut app = App::new(cli.size, cli.duration, dictionary, rng)
        .context("failed to create board")?;
    run(&mut app)?;

    tracing::info!(score = app.score, "exiting");
    Ok(())
}

/// Log to a file (use RUST_LOG to control level, e.g. RUST_LOG=debug).
/// The TUI owns stdout, so nothing is written there.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Main event loop: render, handle one input event, tick the timer
fn run(app: &mut App) -> Result<()> {
    let mut terminal = Tui::start()?;

    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| tui::render(frame, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => on_key(app, key),
                Event::Mouse(mouse) => on_mouse(app, mouse, terminal.area()?),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    terminal.restore()?;
    Ok(())
}

fn on_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.new_round(),
        KeyCode::Char(' ') => app.on_select(),
        KeyCode::Enter => app.on_submit(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Esc => app.on_clear(),
        KeyCode::Up => app.on_move(Move::Up),
        KeyCode::Down => app.on_move(Move::Down),
        KeyCode::Left => app.on_move(Move::Left),
        KeyCode::Right => app.on_move(Move::Right),
        _ => {}
    }
}

fn on_mouse(app: &mut App, mouse: MouseEvent, area: ratatui::layout::Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let size = app.board().size();
    let board = tui::board_area(area, size);
    if let Some((x, y)) = tui::cell_at(board, size, mouse.column, mouse.row) {
        app.on_click(x, y);
    }
}
