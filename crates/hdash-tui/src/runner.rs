//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use hdash_app::config::Settings;
use hdash_app::{process_message, signals, AppState, Message, StreamTasks};
use hdash_client::{ApiClient, HttpApiClient};
use hdash_core::prelude::*;
use tokio::sync::mpsc;

use super::startup::{self, StartOptions};
use super::{event, render, terminal};

const MESSAGE_BUFFER: usize = 256;

/// Run the dashboard against `settings.server.base_url`
pub async fn run(settings: Settings, options: StartOptions) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let client = Arc::new(
        HttpApiClient::new(&settings.server.base_url, settings.server.timeout())
            .context("Creating the backend client")?,
    );
    info!(
        "Connecting to {} (view={}, app={})",
        settings.server.base_url, options.view, options.app
    );

    let mut state = AppState::with_settings(settings);
    let mut term = terminal::init().context("Initializing the terminal")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_BUFFER);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut tasks = StreamTasks::new();

    for message in startup::startup(&mut state, &options) {
        process_message(&mut state, message, &msg_tx, &client, &mut tasks);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &client, &mut tasks);

    tasks.abort_all();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
    tasks: &mut StreamTasks,
) -> Result<()>
where
    C: ApiClient + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, client, tasks);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, client, tasks);
        }
    }

    info!("Quitting");
    Ok(())
}
