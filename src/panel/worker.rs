//! Background fetch worker for panels
//!
//! Runs panel fetches off the UI thread and sends tagged results back
//! over a channel. The generation tag travels with the job so the panel
//! can discard results that were superseded before they resolved.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::remote::RemoteError;

/// A fetch job tagged with the generation that issued it.
pub struct FetchJob<Q> {
    pub generation: u64,
    pub query: Q,
}

/// Outcome of a background fetch, carrying its generation tag back.
pub struct FetchResult<T> {
    pub generation: u64,
    pub outcome: Result<T, RemoteError>,
}

/// A thread-safe, shared fetch function.
pub type SharedFetch<Q, T> = Arc<dyn Fn(&Q) -> Result<T, RemoteError> + Send + Sync>;

/// Spawn the worker thread that executes fetch jobs in order.
///
/// The worker pulls jobs from `job_rx`, runs `fetch` for each, and sends
/// the tagged result back via `result_tx`. It exits when the job channel
/// closes (the owning panel was dropped).
pub fn spawn_fetch_worker<Q, T>(
    job_rx: Receiver<FetchJob<Q>>,
    result_tx: Sender<FetchResult<T>>,
    fetch: SharedFetch<Q, T>,
) where
    Q: Send + 'static,
    T: Send + 'static,
{
    thread::spawn(move || {
        while let Ok(job) = job_rx.recv() {
            let outcome = fetch(&job.query);
            // Ignore send errors (UI thread may have exited)
            let _ = result_tx.send(FetchResult {
                generation: job.generation,
                outcome,
            });
        }
    });
}
