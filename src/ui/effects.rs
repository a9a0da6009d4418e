//! Async side of the fetch lifecycle.
//!
//! The UI thread never awaits. It sends [`UiCommand`]s; this worker runs each
//! fetch as its own task and reports back as [`AppEvent::FetchCompleted`].

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::ProductApi;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker command queue.
pub const COMMAND_QUEUE: usize = 32;

/// Spawn the fetch worker on `runtime`.
///
/// Fetches run concurrently and are never cancelled; ordering is restored by
/// the request tag on the UI side.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    api: ProductApi,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Fetch { request, query } => {
                    let api = api.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        let outcome = api.fetch(&query).await;
                        match &outcome {
                            Ok(page) => tracing::info!(
                                request = request.0,
                                items = page.items.len(),
                                total = page.total,
                                skip = page.skip,
                                "Fetch completed"
                            ),
                            Err(err) => tracing::warn!(
                                request = request.0,
                                kind = err.kind(),
                                "Fetch failed: {err}"
                            ),
                        }
                        if events
                            .send(AppEvent::FetchCompleted { request, outcome })
                            .is_err()
                        {
                            tracing::trace!("Fetch result dropped (UI gone)");
                        }
                    });
                }
            }
        }
        tracing::debug!("Fetch worker stopped");
    })
}
