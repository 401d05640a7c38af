/// Root application state and screen transitions.
pub mod app;
/// Events delivered to the main loop besides terminal input.
pub mod event;
/// Per-screen render functions.
pub mod screens;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub use app::{App, Screen};
pub use event::AppEvent;
pub use screens::draw;

/// Route one key press to the current screen's handler.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The modal captures input while open.
    if app.listing.modal_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.close_modal();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('h') => app.open_home(),
        KeyCode::Char('s') => app.open_students(),
        KeyCode::Char('r') if app.error.is_some() => app.retry(),
        _ => {}
    }

    if app.screen == Screen::Students && app.error.is_none() {
        handle_listing_key(app, key);
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.go_to_previous(),
        KeyCode::Right => app.go_to_next(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Enter => app.open_modal(),
        KeyCode::Char(digit @ '1'..='9') => {
            // Jumps outside the valid range are ignored, like a disabled
            // page button.
            let page = digit as usize - '0' as usize;
            app.go_to_page(page);
        }
        _ => {}
    }
}
