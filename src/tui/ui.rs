//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_core::{GameState, GameStatus, Player, Position, Square};

use super::app::App;

/// Label for a history entry.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe - time travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app.state());

    let status = Paragraph::new(app.state().status().to_string())
        .style(status_style(app.state().status()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[2]);

    let help = Paragraph::new("arrows move | enter play | 0-9 jump | u undo | r restart | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[3]);
}

fn status_style(status: GameStatus) -> Style {
    match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
        GameStatus::InProgress(_) => Style::default().fg(Color::Yellow),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.state().current();
    let lines: Vec<Line> = (0..3)
        .flat_map(|row| {
            let cells: Vec<Span> = (0..3)
                .flat_map(|col| {
                    let pos = Position::at(row, col).unwrap_or(Position::Center);
                    let mut spans = vec![cell_span(board.square(pos), pos, app)];
                    if col < 2 {
                        spans.push(Span::raw("│"));
                    }
                    spans
                })
                .collect();
            let mut out = vec![Line::from(cells)];
            if row < 2 {
                out.push(Line::from("───┼───┼───"));
            }
            out
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Board").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn cell_span(square: Square, pos: Position, app: &App) -> Span<'static> {
    let (text, mut style) = match square {
        Square::Occupied(Player::X) => (" X ".to_string(), Style::default().fg(Color::Red)),
        Square::Occupied(Player::O) => (" O ".to_string(), Style::default().fg(Color::Blue)),
        Square::Empty if app.show_indices() => (
            format!(" {} ", pos.to_index()),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => ("   ".to_string(), Style::default()),
    };
    if pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn draw_history(frame: &mut Frame, area: Rect, state: &GameState) {
    let current = state.move_number();
    let items: Vec<ListItem> = (0..state.history().len())
        .map(|step| {
            let style = if step == current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", step, move_label(step))).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(list, area);
}
