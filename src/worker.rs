//! Async executor for catalog requests.
//!
//! The UI loop is synchronous; catalog calls are not. Commands flow from
//! the UI to a dedicated thread running a tokio runtime, each request
//! runs as its own task, and results come back as `AppEvent`s tagged
//! with the request's generation so the UI can ignore superseded
//! responses.

use std::sync::mpsc::Sender as EventSender;
use std::thread;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::catalog::{CatalogClient, SearchQuery};
use crate::ui::events::AppEvent;

/// Requests the UI can hand to the worker.
#[derive(Debug)]
pub enum CatalogCommand {
    Search {
        query: SearchQuery,
        generation: u64,
    },
    FetchDetail {
        id: String,
        generation: u64,
    },
    /// Fetch full records for the whole favorite set. Fetches run
    /// concurrently; individual failures are logged and omitted from
    /// the result, never fatal to the batch.
    FetchFavorites {
        ids: Vec<String>,
        generation: u64,
    },
}

pub type CatalogCommandSender = mpsc::Sender<CatalogCommand>;

/// Spawn the worker thread. Returns the command channel; the thread
/// exits when the last sender is dropped.
pub fn spawn(client: CatalogClient, event_tx: EventSender<AppEvent>) -> CatalogCommandSender {
    let (tx, mut rx) = mpsc::channel::<CatalogCommand>(16);

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to build catalog runtime");

        runtime.block_on(async move {
            while let Some(command) = rx.recv().await {
                let client = client.clone();
                let event_tx = event_tx.clone();
                tokio::spawn(handle_command(client, event_tx, command));
            }
        });
    });

    tx
}

async fn handle_command(
    client: CatalogClient,
    event_tx: EventSender<AppEvent>,
    command: CatalogCommand,
) {
    match command {
        CatalogCommand::Search { query, generation } => {
            let event = match client.search(&query).await {
                Ok(movies) => AppEvent::SearchLoaded { generation, movies },
                Err(err) => {
                    tracing::info!("search '{}' failed: {}", query.term(), err);
                    AppEvent::SearchFailed {
                        generation,
                        message: err.user_message(),
                    }
                }
            };
            let _ = event_tx.send(event);
        }

        CatalogCommand::FetchDetail { id, generation } => {
            let event = match client.get_by_id(&id).await {
                Ok(detail) => AppEvent::DetailLoaded {
                    generation,
                    detail: Box::new(detail),
                },
                Err(err) => {
                    tracing::info!("detail fetch for '{}' failed: {}", id, err);
                    AppEvent::DetailFailed {
                        generation,
                        message: err.user_message(),
                    }
                }
            };
            let _ = event_tx.send(event);
        }

        CatalogCommand::FetchFavorites { ids, generation } => {
            let mut tasks = JoinSet::new();
            for (index, id) in ids.into_iter().enumerate() {
                let client = client.clone();
                tasks.spawn(async move {
                    let result = client.get_by_id(&id).await;
                    (index, id, result)
                });
            }

            let mut loaded = Vec::new();
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((index, _, Ok(detail))) => loaded.push((index, detail)),
                    Ok((_, id, Err(err))) => {
                        // Partial-failure tolerance: skip the item, keep
                        // the rest of the batch.
                        tracing::warn!("skipping favorite '{}': {}", id, err);
                    }
                    Err(err) => {
                        tracing::warn!("favorite fetch task failed: {}", err);
                    }
                }
            }

            // Store order, not completion order.
            loaded.sort_by_key(|(index, _)| *index);
            let movies = loaded.into_iter().map(|(_, detail)| detail).collect();
            let _ = event_tx.send(AppEvent::FavoritesLoaded { generation, movies });
        }
    }
}
