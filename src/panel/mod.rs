//! Async panel state machine
//!
//! Every remote-backed panel drives its visible state through the same
//! lifecycle: issue a fetch, show `Loading`, then commit exactly one of
//! `Loaded`, `Empty` or `Error`. Fetches run on a background worker; the
//! UI thread calls [`PanelFetcher::poll`] each tick to apply completed
//! results. A monotonically increasing generation counter guarantees that
//! a superseded in-flight fetch can never overwrite a newer one.

pub mod favorites;
pub mod preview;
pub mod worker;

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use tracing::warn;

use crate::remote::{Preview, RemoteError};
use worker::{spawn_fetch_worker, FetchJob, FetchResult};

pub use favorites::FavoritesPanel;
pub use preview::PreviewPanel;

/// Visible state of a remote-backed panel. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// A fetch is outstanding.
    Loading,
    /// The last committed fetch succeeded with data.
    Loaded(T),
    /// The last committed fetch succeeded but returned nothing.
    Empty,
    /// The last committed fetch failed. Rendered as `Empty`; the message
    /// goes to the diagnostic channel, never to the UI.
    Error(String),
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    /// Loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            PanelState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Whether this state renders as the empty presentation.
    ///
    /// Fetch failures deliberately degrade to the empty rendering so the
    /// panel stays navigable.
    pub fn renders_empty(&self) -> bool {
        matches!(self, PanelState::Empty | PanelState::Error(_))
    }
}

/// Data that can tell the panel it should show the empty presentation.
pub trait PanelData {
    fn is_empty_data(&self) -> bool;
}

impl<T> PanelData for Vec<T> {
    fn is_empty_data(&self) -> bool {
        self.is_empty()
    }
}

impl PanelData for Preview {
    fn is_empty_data(&self) -> bool {
        self.preview.trim().is_empty()
    }
}

/// A committed fetch result, reported to the caller by [`PanelFetcher::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEvent {
    /// Generation of the fetch that committed.
    pub generation: u64,
    /// Whether the fetch succeeded.
    pub ok: bool,
}

/// Generic fetch-driven panel state.
///
/// `Q` is the fetch query (e.g. the fidelity flag), `T` the payload.
pub struct PanelFetcher<Q, T> {
    /// Stable prefix identifying this panel's operation in diagnostics.
    label: &'static str,
    /// Latest issued generation; only this generation may commit.
    generation: u64,
    state: PanelState<T>,
    job_tx: Sender<FetchJob<Q>>,
    result_rx: Receiver<FetchResult<T>>,
}

impl<Q, T> PanelFetcher<Q, T>
where
    Q: Send + 'static,
    T: PanelData + Send + 'static,
{
    /// Create a fetcher whose jobs run `fetch` on a background thread.
    ///
    /// The initial state is `Loading`; callers are expected to issue the
    /// first fetch immediately after construction.
    pub fn new(
        label: &'static str,
        fetch: impl Fn(&Q) -> Result<T, RemoteError> + Send + Sync + 'static,
    ) -> Self {
        let (job_tx, job_rx) = channel::<FetchJob<Q>>();
        let (result_tx, result_rx) = channel::<FetchResult<T>>();
        spawn_fetch_worker(job_rx, result_tx, Arc::new(fetch));

        Self {
            label,
            generation: 0,
            state: PanelState::Loading,
            job_tx,
            result_rx,
        }
    }

    /// Issue a fetch, superseding any outstanding one, and re-enter
    /// `Loading`. Returns the generation assigned to this fetch.
    pub fn fetch(&mut self, query: Q) -> u64 {
        self.generation += 1;
        self.state = PanelState::Loading;
        // Ignore send errors (worker may have exited)
        let _ = self.job_tx.send(FetchJob {
            generation: self.generation,
            query,
        });
        self.generation
    }

    /// Drain completed fetches and commit the current-generation one, if
    /// it resolved. Returns the commit applied this poll, if any.
    pub fn poll(&mut self) -> Option<CommitEvent> {
        let mut committed = None;
        while let Ok(result) = self.result_rx.try_recv() {
            if let Some(event) = self.apply(result) {
                committed = Some(event);
            }
        }
        committed
    }

    /// Current panel state.
    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    /// Latest issued generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one fetch result. Stale generations are discarded silently:
    /// being superseded is not a failure.
    fn apply(&mut self, result: FetchResult<T>) -> Option<CommitEvent> {
        if result.generation != self.generation {
            return None;
        }

        let ok = match result.outcome {
            Ok(data) => {
                self.state = if data.is_empty_data() {
                    PanelState::Empty
                } else {
                    PanelState::Loaded(data)
                };
                true
            }
            Err(e) => {
                warn!("{} failed: {}", self.label, e);
                self.state = PanelState::Error(e.to_string());
                false
            }
        };

        Some(CommitEvent {
            generation: result.generation,
            ok,
        })
    }
}
