//! Paginated student listing: stats bar, card grid, pagination footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use roster_service::Student;
use roster_utils::pagination::{PAGE_SIZE, PageToken, page_labels, page_window};
use roster_utils::text::{initials, truncate};

use crate::app::App;

/// Grid dimensions for the card layout.
const GRID_COLUMNS: usize = 3;
const GRID_ROWS: usize = 3;

/// Render the listing screen into `area`.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [stats_area, grid_area, pager_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_stats_bar(frame, stats_area, app);
    draw_card_grid(frame, grid_area, app);
    draw_pager(frame, pager_area, app);
}

fn draw_stats_bar(frame: &mut Frame, area: Rect, app: &App) {
    let total_students = app.students.as_deref().map_or(0, <[Student]>::len);
    let (start, end) = page_window(total_students, PAGE_SIZE, app.listing.current_page);

    let showing = if total_students == 0 {
        "Showing 0".to_owned()
    } else {
        format!("Showing {}-{}", start + 1, end)
    };

    let line = Line::from(vec![
        Span::styled(
            " Student Directory ",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("│ Total Students: {total_students} ")),
        Span::raw(format!(
            "│ Page {} of {} ",
            app.listing.current_page,
            app.total_pages()
        )),
        Span::raw(format!("│ {showing} ")),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn draw_card_grid(frame: &mut Frame, area: Rect, app: &App) {
    let students = app.current_page_students();

    let rows = Layout::vertical([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS]).split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (column_index, cell_area) in cells.iter().enumerate() {
            let card_index = row_index * GRID_COLUMNS + column_index;
            if let Some(student) = students.get(card_index) {
                let selected = card_index == app.listing.cursor;
                draw_card(frame, *cell_area, student, selected);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, student: &Student, selected: bool) {
    let border_style = if selected {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(border_style)
        .title(format!(" #{} ", student.id));

    let max_width = area.width.saturating_sub(4).max(8) as usize;
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
                truncate(&student.name, max_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::raw(format!(
            "Course: {}",
            truncate(&student.course, max_width)
        ))),
        Line::from(Span::raw(format!("Year {}", student.year))),
    ];

    let card = Paragraph::new(lines).block(block);
    frame.render_widget(card, area);
}

fn draw_pager(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.listing.current_page;
    let total = app.total_pages();
    if total <= 1 {
        return;
    }

    let mut spans = Vec::new();

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    spans.push(Span::styled(" ◀ Prev ", nav_style(current > 1)));

    for token in page_labels(current, total) {
        spans.push(Span::raw(" "));
        let span = match token {
            PageToken::Page(page) if page == current => Span::styled(
                format!(" {page} "),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            PageToken::Page(page) => Span::raw(format!(" {page} ")),
            PageToken::Ellipsis => {
                Span::styled(" ... ", Style::default().fg(Color::DarkGray))
            }
        };
        spans.push(span);
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(" Next ▶ ", nav_style(current < total)));

    let pager = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(pager, area);
}
