//! Per-screen render functions composed by the root draw pass.

mod error;
mod home;
mod modal;
mod skeleton;
mod students;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Screen};

/// Render one frame of the whole application.
///
/// While a transition is in flight the active skeleton replaces the
/// screen content outright; it is not drawn on top of it.
pub fn draw(frame: &mut Frame, app: &App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header_area, app.screen);

    if let Some(view) = app.loading.active_view() {
        skeleton::draw(frame, body_area, view);
    } else if let Some(message) = app.error.as_deref() {
        error::draw(frame, body_area, message);
    } else {
        match app.screen {
            Screen::Home => home::draw(frame, body_area, app),
            Screen::Students => students::draw(frame, body_area, app),
        }
    }

    draw_footer(frame, footer_area, app);

    if app.listing.modal_open
        && !app.loading.is_loading()
        && app.error.is_none()
        && let Some(student) = app.selected_student()
    {
        modal::draw(frame, student);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, screen: Screen) {
    let tab = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray))
        }
    };

    let tabs = Line::from(vec![
        Span::styled(
            " Student Management Portal ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        tab("[h] Home", screen == Screen::Home),
        Span::raw(" "),
        tab("[s] Students", screen == Screen::Students),
    ]);

    let header = Paragraph::new(tabs).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.listing.modal_open {
        " Esc close"
    } else if app.error.is_some() {
        " r retry • h home • q quit"
    } else if app.screen == Screen::Students {
        " ←/→ page • ↑/↓ card • 1-9 jump • Enter details • q quit"
    } else {
        " h home • s students • q quit"
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
