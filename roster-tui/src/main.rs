use std::env;
use std::fs::File;
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use crossterm::event::{Event, EventStream};
use futures::StreamExt as _;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use roster_core::{AppConfig, Context};
use roster_screens::{App, AppEvent, draw, handle_key};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();
    init_logging()?;

    let config = AppConfig::from_env();
    info!(base_url = %config.api_base_url, "roster is starting");

    // Create a single shared HTTP client
    let http = Arc::new(reqwest::Client::new());
    let ctx = Context::new(http, config);

    // Background tasks report back over this channel
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut app = App::new(ctx, event_tx);

    // The overview is the landing screen; opening it kicks off the fetch
    app.open_home();

    let mut terminal = ratatui::init();
    let mut term_events = EventStream::new();

    let run_result = loop {
        if let Err(source) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(anyhow::Error::from(source));
        }

        // Our ears: terminal input on one side, resolved fetches on the other
        tokio::select! {
            maybe_event = term_events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => handle_key(&mut app, key),
                    Some(Ok(_)) => {} // resizes redraw on the next pass
                    Some(Err(source)) => {
                        error!(?source, "terminal event stream error");
                    }
                    None => break Ok(()),
                }
            }
            Some(event) = event_rx.recv() => {
                match event {
                    AppEvent::StudentsLoaded { seq, result } => {
                        debug!(seq, ok = result.is_ok(), "fetch resolved");
                        app.on_students_loaded(seq, result);
                    }
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("roster shut down cleanly");

    run_result
}

/// Route tracing output to a file so log lines never corrupt the UI.
///
/// Logging stays off unless `ROSTER_LOG_FILE` names a destination.
fn init_logging() -> anyhow::Result<()> {
    let Ok(path) = env::var("ROSTER_LOG_FILE") else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
