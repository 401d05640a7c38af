//! Overview screen: hero banner plus stat tiles computed from the roster.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use roster_service::Student;

use crate::app::App;

/// Render the overview screen into `area`.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [hero_area, tiles_area, years_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    draw_hero(frame, hero_area);

    let students = app.students.as_deref().unwrap_or(&[]);
    draw_stat_tiles(frame, tiles_area, students);
    draw_year_breakdown(frame, years_area, students);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Student Management",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Portal Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Browse student records and academic data at a glance",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hero, area);
}

fn draw_stat_tiles(frame: &mut Frame, area: Rect, students: &[Student]) {
    let total = students.len();
    let courses: BTreeSet<&str> = students.iter().map(|s| s.course.as_str()).collect();
    let average_year = if total == 0 {
        0.0
    } else {
        students.iter().map(|s| f64::from(s.year)).sum::<f64>() / total as f64
    };

    let tiles = [
        ("Total Students", total.to_string()),
        ("Active Courses", courses.len().to_string()),
        ("Average Year", format!("{average_year:.1}")),
    ];

    let cells = Layout::horizontal([Constraint::Ratio(1, tiles.len() as u32); 3]).split(area);

    for ((label, value), cell_area) in tiles.iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                value.clone(),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                (*label).to_owned(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let tile = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(tile, *cell_area);
    }
}

fn draw_year_breakdown(frame: &mut Frame, area: Rect, students: &[Student]) {
    let mut counts = [0usize; 4];
    for student in students {
        if (1..=4).contains(&student.year) {
            counts[(student.year - 1) as usize] += 1;
        }
    }

    let mut lines = vec![Line::from(Span::styled(
        "Enrollment by year",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (index, count) in counts.iter().enumerate() {
        let bar = "█".repeat(*count);
        lines.push(Line::from(vec![
            Span::raw(format!("  Year {}  ", index + 1)),
            Span::styled(bar, Style::default().fg(Color::Red)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let breakdown = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(breakdown, area);
}
