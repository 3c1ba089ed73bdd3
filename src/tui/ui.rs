//! Stateless UI rendering for number baseball.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use number_baseball::render_score;

use super::app::App;

/// Renders the title, input box, guess list, status and key help.
pub fn draw<R>(frame: &mut Frame, app: &App<R>)
where
    R: rand::Rng,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Guesses
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Number Baseball")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let input = Paragraph::new(app.input())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Guess"));
    frame.render_widget(input, chunks[1]);

    let guesses: Vec<ListItem> = app
        .controller()
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let style = if record.result.is_solved() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(record.guess.to_string(), style),
                Span::raw("  "),
                Span::styled(render_score(record.result), style),
            ]))
        })
        .collect();
    let list = List::new(guesses).block(Block::default().borders(Borders::ALL).title("Guesses"));
    frame.render_widget(list, chunks[2]);

    let status = Paragraph::new(app.controller().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = if app.controller().allow_reveal() {
        "Enter: submit  Ctrl-R: reset  Ctrl-A: reveal  Esc: quit"
    } else {
        "Enter: submit  Ctrl-R: reset  Esc: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
