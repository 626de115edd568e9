//! Stateless UI rendering for tic-tac-toe.
//!
//! Layout is a pure function of the frame area, so mouse hit-testing uses
//! the same rectangles the board was drawn into.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_engine::{Cell, Player, Position, SIZE, winning_line};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, top to bottom.
struct Screen {
    title: Rect,
    board: Rect,
    status: Rect,
    help: Rect,
}

fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    Screen {
        title: chunks[0],
        board: center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT),
        status: chunks[2],
        help: chunks[3],
    }
}

/// Splits the board into separator-interleaved strips: cell, gap, cell, gap, cell.
fn strips(area: Rect, direction: Direction, cell: u16) -> [Rect; 5] {
    let parts = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Length(cell),
            Constraint::Length(1),
            Constraint::Length(cell),
            Constraint::Length(1),
            Constraint::Length(cell),
        ])
        .split(area);
    [parts[0], parts[1], parts[2], parts[3], parts[4]]
}

/// Cell rectangles, indexed `[row][col]`, for a frame of size `area`.
pub fn board_layout(area: Rect) -> [[Rect; SIZE]; SIZE] {
    let rows = strips(screen(area).board, Direction::Vertical, CELL_HEIGHT);
    let mut cells = [[Rect::default(); SIZE]; SIZE];
    for (r, row_cells) in cells.iter_mut().enumerate() {
        let cols = strips(rows[r * 2], Direction::Horizontal, CELL_WIDTH);
        for (c, cell) in row_cells.iter_mut().enumerate() {
            *cell = cols[c * 2];
        }
    }
    cells
}

/// Finds the board cell under the terminal coordinate `(column, row)`.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let cells = board_layout(area);
    cells.iter().enumerate().find_map(|(r, row_cells)| {
        row_cells
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(|c| Position::from_row_col(r, c))
    })
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let regions = screen(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, regions.title);

    draw_board(frame, area, regions.board, app);

    let controller = app.controller();
    let status_style = if controller.outcome().is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, regions.status);

    let mut help = String::from("1-9/click: play  arrows+enter: cursor");
    if controller.can_reset() {
        help.push_str("  r: reset");
    }
    help.push_str("  q: quit");
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);
}

fn draw_board(frame: &mut Frame, area: Rect, board_area: Rect, app: &App) {
    let grid = Style::default().fg(Color::DarkGray);
    let rows = strips(board_area, Direction::Vertical, CELL_HEIGHT);
    for gap in [rows[1], rows[3]] {
        let sep = Paragraph::new("─".repeat(usize::from(gap.width))).style(grid);
        frame.render_widget(sep, gap);
    }
    for strip in [rows[0], rows[2], rows[4]] {
        let cols = strips(strip, Direction::Horizontal, CELL_WIDTH);
        for gap in [cols[1], cols[3]] {
            let sep = Paragraph::new(vec![Line::from("│"); usize::from(gap.height)]).style(grid);
            frame.render_widget(sep, gap);
        }
    }

    let board = app.controller().board();
    let winning = winning_line(board);
    for (r, row_cells) in board_layout(area).iter().enumerate() {
        for (c, rect) in row_cells.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(r, c) {
                let highlighted = winning.is_some_and(|line| line.contains(pos));
                draw_cell(frame, *rect, board.at(pos), pos, highlighted, app);
            }
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Cell,
    pos: Position,
    highlighted: bool,
    app: &App,
) {
    let (symbol, base_style) = match cell {
        Cell::Empty if app.show_hints() => (
            pos.keypad().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::from(" "), Style::default()),
        Cell::Marked(Player::X) => (
            Player::X.to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Player::O) => (
            Player::O.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.fg(Color::Green)
    } else {
        base_style
    };
    let style = if pos == app.cursor() && !app.controller().outcome().is_terminal() {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(Span::styled(symbol, style))])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
