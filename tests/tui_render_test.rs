//! Rendering and hit-testing tests using ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictac::{Action, App, Position, Settings, board_layout, cell_at, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn click_all(app: &mut App, keys: &[u8]) {
    for &key in keys {
        let pos = Position::from_keypad(key).expect("keypad 1-9");
        app.handle(Action::Select(pos));
    }
}

#[test]
fn test_new_game_shows_turn_and_no_reset() {
    let app = App::new(&Settings::default());
    let screen = render(&app);
    assert!(screen.contains("x to move"));
    assert!(!screen.contains("r: reset"));
}

#[test]
fn test_reset_offered_after_first_move() {
    let mut app = App::new(&Settings::default());
    click_all(&mut app, &[5]);
    let screen = render(&app);
    assert!(screen.contains("o to move"));
    assert!(screen.contains("r: reset"));
}

#[test]
fn test_win_message_rendered() {
    let mut app = App::new(&Settings::default());
    click_all(&mut app, &[1, 5, 2, 9, 3]);
    assert!(render(&app).contains("x wins!"));
}

#[test]
fn test_draw_message_rendered() {
    let mut app = App::new(&Settings::default());
    // x o x / x o o / o x .
    click_all(&mut app, &[1, 2, 3, 5, 4, 6, 8, 7]);
    assert!(render(&app).contains("Cat's game!"));
}

#[test]
fn test_hints_can_be_hidden() {
    let with_hints = render(&App::new(&Settings::default()));
    let without = render(&App::new(&Settings::default().with_show_hints(false)));
    assert!(with_hints.contains('8'));
    assert!(!without.contains('8'));
}

#[test]
fn test_click_lands_on_drawn_cell() {
    let area = Rect::new(0, 0, 80, 24);
    let cells = board_layout(area);
    for pos in Position::ALL {
        let rect = cells[pos.row()][pos.col()];
        let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
        assert_eq!(cell_at(area, x, y), Some(pos));
    }
}
