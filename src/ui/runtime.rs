use std::sync::mpsc::RecvTimeoutError;

use anyhow::Context;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::ProductApi;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::effects::{spawn_fetch_worker, COMMAND_QUEUE};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the dashboard until the user quits.
///
/// Blocks the calling thread; fetches run on `runtime`.
pub fn run(config: Config, runtime: &Handle) -> anyhow::Result<()> {
    let api = ProductApi::new(&config.api).context("Failed to build API client")?;
    let tick_rate = config.tick_rate();

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = spawn_fetch_worker(runtime, api, command_rx, events.sender());

    let mut app = App::new(&config);
    app.attach_commands(command_tx);
    app.start();
    tracing::info!(route = app.route().title(), "Dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Layout is recomputed from the frame on every draw
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchCompleted { request, outcome }) => {
                app.on_fetch_completed(request, outcome)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    worker.abort();
    drop(guard);
    tracing::info!("Dashboard stopped");
    Ok(())
}
