//! Life RPG terminal client.
//!
//! A vim-style terminal interface for the Life RPG backend: tell the GM
//! about your day in free text, watch your stats, inventory, and quests
//! update from the server's responses, and manage your character.
//!
//! Configuration comes from the environment (or a `.env` file):
//!
//! ```bash
//! LIFE_RPG_API_URL=http://127.0.0.1:8000/api cargo run -p liferpg
//! ```

mod allocation;
mod app;
mod config;
mod events;
mod ui;
mod worker;

use std::ffi::OsStr;
use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use liferpg_api::GameClient;

use app::App;
use config::ClientConfig;
use events::{handle_event, EventResult};
use ui::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    setup_logging(&config)?;
    tracing::info!("starting Life RPG client against {}", config.api_url);

    let client = GameClient::new(config.api_url.as_str()).with_timeout(config.request_timeout);
    let (request_tx, event_rx) = worker::spawn(client);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(request_tx, event_rx);
    app.request_initialize();

    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Route tracing output to a file; the TUI owns stdout and stderr.
fn setup_logging(config: &ClientConfig) -> io::Result<()> {
    let directory = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = config
        .log_file
        .file_name()
        .unwrap_or_else(|| OsStr::new("liferpg.log"))
        .to_os_string();

    std::fs::create_dir_all(directory)?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the whole program.
    std::mem::forget(guard);

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Fold in any worker results before drawing
        app.process_events();

        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        } else {
            app.tick();
        }
    }
}
