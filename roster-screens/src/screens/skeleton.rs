//! Static skeleton placeholders drawn while a transition is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use roster_utils::loading::Placeholder;

/// Render the skeleton for the given placeholder view.
pub fn draw(frame: &mut Frame, area: Rect, view: Placeholder) {
    match view {
        Placeholder::Overview => draw_overview_skeleton(frame, area),
        Placeholder::Listing => draw_listing_skeleton(frame, area),
    }
}

fn draw_overview_skeleton(frame: &mut Frame, area: Rect) {
    let [hero_area, tiles_area, _] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(placeholder_block("Loading dashboard…"), hero_area);

    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(tiles_area);
    for cell_area in cells.iter() {
        frame.render_widget(placeholder_block(""), *cell_area);
    }
}

fn draw_listing_skeleton(frame: &mut Frame, area: Rect) {
    let [bar_area, grid_area, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(placeholder_block("Loading students…"), bar_area);

    let rows = Layout::vertical([Constraint::Ratio(1, 3); 3]).split(grid_area);
    for row_area in rows.iter() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row_area);
        for cell_area in cells.iter() {
            frame.render_widget(placeholder_block(""), *cell_area);
        }
    }
}

fn placeholder_block(label: &str) -> Paragraph<'_> {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            label.to_owned(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "▒▒▒▒▒▒▒▒▒▒▒▒",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
}
