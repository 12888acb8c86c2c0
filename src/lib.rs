pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, SessionEvent, spawn_input_task};
use app::fetch::Services;
use app::state::{Session, session_event_for_input};
use chrono::Local;
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    logging::init(cli.log_file.as_deref(), !cli.one_shot)?;
    let services = Services::from_cli(&cli)?;

    if cli.one_shot {
        let output = report::run_one_shot(&cli, &services).await?;
        println!("{output}");
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli, &services).await;
    restore_terminal(&mut terminal)?;
    result
}

/// The event the dashboard starts from, derived from the command line.
pub fn startup_event(cli: &Cli) -> Option<SessionEvent> {
    if let Some(place) = cli.coordinate_place() {
        return Some(SessionEvent::PlaceSelected(place));
    }
    cli.city.clone().map(SessionEvent::Lookup)
}

/// Applies one event and hands any resulting effect to the services.
pub fn dispatch(
    session: &mut Session,
    event: SessionEvent,
    services: &Services,
    tx: &mpsc::Sender<AppEvent>,
) {
    if let Some(effect) = session.apply(event) {
        tracing::debug!(?effect, "spawning effect");
        services.spawn(effect, tx.clone());
    }
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    services: &Services,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut session = Session::new(cli.initial_day());

    if let Some(event) = startup_event(cli) {
        dispatch(&mut session, event, services, &tx);
    }
    terminal.draw(|frame| ui::render(frame, &session, cli, Local::now().naive_local()))?;

    while session.running {
        let event = tokio::select! {
            maybe_input = input_stream.next() => match maybe_input {
                Some(input) => session_event_for_input(&session, &input),
                None => Some(SessionEvent::Quit),
            },
            maybe_event = rx.recv() => match maybe_event {
                Some(AppEvent::Session(event)) => Some(event),
                Some(AppEvent::Input(input)) => session_event_for_input(&session, &input),
                None => None,
            },
        };

        if let Some(event) = event {
            dispatch(&mut session, event, services, &tx);
        }

        terminal.draw(|frame| ui::render(frame, &session, cli, Local::now().naive_local()))?;
    }

    tracing::info!("dashboard closed");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
