//! Error screen shown in place of a screen's content after a failed fetch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render the error display with retry and go-home actions.
pub fn draw(frame: &mut Frame, area: Rect, message: &str) {
    let [box_area] = Layout::horizontal([Constraint::Max(56)])
        .flex(Flex::Center)
        .areas(area);
    let [box_area] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(Span::styled(
            "Oops! Something went wrong",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::raw(message.to_owned())),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " [r] Retry ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" [h] Go Home ", Style::default().add_modifier(Modifier::BOLD)),
        ]),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(body, box_area);
}
