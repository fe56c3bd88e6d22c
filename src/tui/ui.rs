//! UI rendering using ratatui
//!
//! One screen: header (title, current word, timer), the board grid,
//! a side panel (feedback, score, found words or the end-of-round
//! summary) and a key-help footer.

use crate::app::App;
use crate::game::{CellStatus, GridCell};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Width of one board cell in terminal columns (borders included)
const CELL_WIDTH: u16 = 7;
/// Height of one board cell in terminal rows (borders included)
const CELL_HEIGHT: u16 = 3;
const SIDE_PANEL_WIDTH: u16 = 30;

struct GameLayout {
    header: Rect,
    board: Rect,
    side: Rect,
    footer: Rect,
}

fn game_layout(area: Rect, size: usize) -> GameLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with word, timer
            Constraint::Min(0),    // Board and side panel
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(rows[1]);

    GameLayout {
        header: rows[0],
        board: centered_grid(columns[0], size),
        side: columns[1],
        footer: rows[2],
    }
}

/// Center a `size x size` grid of cells in `area`, clipped to fit.
fn centered_grid(area: Rect, size: usize) -> Rect {
    let cells = u16::try_from(size).unwrap_or(u16::MAX);
    let width = cells.saturating_mul(CELL_WIDTH).min(area.width);
    let height = cells.saturating_mul(CELL_HEIGHT).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Screen rectangle occupied by the board grid for a frame of `area`.
pub fn board_area(area: Rect, size: usize) -> Rect {
    game_layout(area, size).board
}

/// Map a terminal position to the board cell `(x, y)` drawn there.
pub fn cell_at(board: Rect, size: usize, column: u16, row: u16) -> Option<(usize, usize)> {
    if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
        return None;
    }
    let y = usize::from((column - board.x) / CELL_WIDTH);
    let x = usize::from((row - board.y) / CELL_HEIGHT);
    (x < size && y < size).then_some((x, y))
}

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App) {
    let layout = game_layout(frame.area(), app.board().size());

    render_header(frame, layout.header, app);
    render_board(frame, layout.board, app);
    if app.round_ended {
        render_end_summary(frame, layout.side, app);
    } else {
        render_side_panel(frame, layout.side, app);
    }
    render_footer(frame, layout.footer, app);
}

/// Render the header: logo, current word, timer
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Logo
            Constraint::Min(20),    // Current word
            Constraint::Length(10), // Timer
        ])
        .split(inner);

    let logo = Paragraph::new("BOGGLE")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let word = Paragraph::new(format_word(&app.current_word()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(word, header_layout[1]);

    let timer_color = if app.time_remaining <= 10 {
        Color::Red
    } else if app.time_remaining <= 30 {
        Color::Yellow
    } else {
        Color::Green
    };
    let timer = Paragraph::new(format_timer(app.time_remaining))
        .style(Style::default().fg(timer_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer, header_layout[2]);
}

/// Render every cell of the grid, bordered by its selection status
fn render_board(frame: &mut Frame, board: Rect, app: &App) {
    let cursor = app.cursor();
    for cell in app.selection().cells() {
        let Some(area) = cell_rect(board, cell) else {
            continue;
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if (cell.x, cell.y) == cursor && !app.round_ended {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(Style::default().fg(status_color(cell.status)));

        let text_style = match cell.status {
            CellStatus::Unavailable => Style::default().fg(Color::DarkGray),
            CellStatus::Available => Style::default().fg(Color::White).bold(),
            CellStatus::Selected => Style::default().fg(Color::Red).bold(),
        };
        let tile = Paragraph::new(cell.tile.as_str())
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(tile, area);
    }
}

/// Screen rectangle for one cell, or `None` if it was clipped away
fn cell_rect(board: Rect, cell: &GridCell) -> Option<Rect> {
    let dx = u16::try_from(cell.y).ok()?.checked_mul(CELL_WIDTH)?;
    let dy = u16::try_from(cell.x).ok()?.checked_mul(CELL_HEIGHT)?;
    if dx.saturating_add(CELL_WIDTH) > board.width || dy.saturating_add(CELL_HEIGHT) > board.height {
        return None;
    }
    Some(Rect::new(board.x + dx, board.y + dy, CELL_WIDTH, CELL_HEIGHT))
}

fn status_color(status: CellStatus) -> Color {
    match status {
        CellStatus::Unavailable => Color::DarkGray,
        CellStatus::Available => Color::Green,
        CellStatus::Selected => Color::Red,
    }
}

/// Render feedback, score and found words (right panel)
fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Feedback line
            Constraint::Length(1), // Score
            Constraint::Length(1), // Dictionary
            Constraint::Min(0),    // Found words
        ])
        .split(area);

    let (feedback_text, feedback_color) = format_feedback(&app.feedback);
    let feedback = Paragraph::new(feedback_text).style(Style::default().fg(feedback_color));
    frame.render_widget(feedback, layout[0]);

    let score = Paragraph::new(format!("Score: {}", app.score))
        .style(Style::default().fg(Color::Magenta).bold());
    frame.render_widget(score, layout[1]);

    let dictionary_text = match app.dictionary_size() {
        Some(count) => format!("Dictionary: {} words", count),
        None => "Free play (no dictionary)".to_string(),
    };
    let dictionary = Paragraph::new(dictionary_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(dictionary, layout[2]);

    // Most recent first
    let items: Vec<ListItem> = app
        .found_words()
        .iter()
        .rev()
        .map(|found| ListItem::new(format!("{} +{}", found.word, found.points)))
        .collect();
    let list = List::new(items).style(Style::default().fg(Color::Green)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Found ({})", app.found_words().len())),
    );
    frame.render_widget(list, layout[3]);
}

/// Render the end-of-round summary (right panel)
fn render_end_summary(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Final score
            Constraint::Length(1), // Words found
            Constraint::Min(0),    // Word list
        ])
        .split(area);

    let title = Paragraph::new("TIME'S UP!")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let score = Paragraph::new(format!("Final Score: {}", app.score))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, layout[1]);

    let words = Paragraph::new(format!("Words Found: {}", app.found_words().len()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(words, layout[2]);

    let mut found: Vec<&str> = app.found_words().iter().map(|f| f.word.as_str()).collect();
    found.sort_unstable();
    let items: Vec<ListItem> = found.into_iter().map(ListItem::new).collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, layout[3]);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help = if app.round_ended {
        "n New round  q Quit"
    } else {
        "Click/Space Select  Bksp Undo  Esc Clear  Enter Submit  n New  q Quit"
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Format the word being built for display
fn format_word(word: &str) -> String {
    if word.is_empty() {
        return String::from("[ select letters ]");
    }
    format!("[ {} ]", word.to_uppercase())
}

/// Format the timer display
fn format_timer(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Format feedback with appropriate color
fn format_feedback(feedback: &str) -> (String, Color) {
    if feedback.is_empty() {
        return (String::new(), Color::White);
    }

    let color = if feedback.starts_with("OK") {
        Color::Green
    } else if feedback.ends_with("Already found") || feedback.starts_with("TIME'S UP") {
        Color::Yellow
    } else {
        Color::Red
    };

    (feedback.to_string(), color)
}
