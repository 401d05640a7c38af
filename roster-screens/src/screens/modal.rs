//! Details modal drawn over the listing for one student.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use roster_service::Student;
use roster_utils::text::initials;

/// Render the details modal centered over the current frame.
pub fn draw(frame: &mut Frame, student: &Student) {
    let area = centered_rect(frame.area(), 60, 14);

    // Clear whatever the listing drew underneath first.
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .title(" Student Information ")
        .title_alignment(Alignment::Center);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", initials(&student.name)),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                student.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Student ID: #{}", student.id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(format!("Course Enrolled   {}", student.course)),
        Line::from(format!("Academic Year     Year {}", student.year)),
        Line::from(vec![
            Span::raw("Enrollment Status "),
            Span::styled("Active", Style::default().fg(Color::Green)),
            Span::raw(" / "),
            Span::styled("Full-time", Style::default().fg(Color::Red)),
        ]),
        Line::default(),
        Line::from(Span::raw(format!(
            "{} (#{}) is enrolled in {} and currently in year {} of their academic program.",
            student.name, student.id, student.course, student.year
        ))),
        Line::default(),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(body, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}
