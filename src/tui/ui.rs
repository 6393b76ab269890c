//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;

/// Renders the title, play button, result panel and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Play button
            Constraint::Min(6),    // Result
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("ROCK PAPER SCISSORS ✋✌️✊")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_button(frame, chunks[1], app.can_play());

    let result = Paragraph::new(app.result().unwrap_or(""))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Result").borders(Borders::ALL));
    frame.render_widget(result, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_button(frame: &mut Frame, area: Rect, enabled: bool) {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(" Play! ")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, center_rect(area, 16, area.height));
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(Rect { height, ..area })[1]
}
