use incidash::app::AppState;
use incidash::cli::Cli;
use incidash::events::{AppEvent, EventHandler};
use incidash::input;
use incidash::seed;
use incidash::store::RecordStore;
use incidash::tui;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn setup_verbose_logging() -> Result<()> {
    let state_dir = state_dir();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    tracing::info!(
        "incidash v{} starting with verbose logging",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn state_dir() -> PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        PathBuf::from(state).join("incidash")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("incidash")
    } else {
        PathBuf::from("/tmp/incidash")
    }
}

fn build_store(args: &Cli) -> Result<RecordStore> {
    let records = if args.empty {
        Vec::new()
    } else if let Some(path) = &args.seed {
        seed::load(path)?
    } else {
        seed::builtin()
    };
    let store = RecordStore::from_records(records)?;
    tracing::info!("session seeded with {} incidents", store.len());
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    if args.verbose {
        setup_verbose_logging()?;
    }

    let store = build_store(&args)?;
    let mut state = AppState::new(store, args.filter, args.sort);

    if args.dump {
        println!("{}", state.visible_json()?);
        return Ok(());
    }

    // Restore the terminal before the panic message prints
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle("incidash: AI Safety Incident Dashboard")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let events = EventHandler::new(Duration::from_millis(250));
    let result = run_app(&mut terminal, &mut state, events).await;

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    mut events: EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| tui::render::render(f, state))?;

        let Some(event) = events.next().await else {
            tracing::warn!("event channel closed");
            break;
        };
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, &state.input_context());
                state.handle_action(action, chrono::Utc::now());
            }
            AppEvent::Resize(..) | AppEvent::Tick => {}
            AppEvent::Error(e) => {
                events.stop();
                return Err(eyre!(e));
            }
        }

        if state.should_quit {
            break;
        }
    }
    events.stop();
    Ok(())
}
