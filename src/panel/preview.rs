//! Content preview panel
//!
//! Fetches the preview at one of two fidelities: the truncated summary or
//! the full content. Toggling re-issues the fetch at the opposite
//! fidelity; the committed mode only flips when that fetch succeeds, so a
//! failed expand leaves the panel collapsed in intent while rendering the
//! degraded empty state.

use std::sync::Arc;

use crate::remote::{BoardClient, Preview};

use super::{CommitEvent, PanelFetcher, PanelState};

/// Preview pane driven by the preview fetch.
pub struct PreviewPanel {
    fetcher: PanelFetcher<bool, Preview>,
    /// Committed fidelity: true once a full fetch has succeeded.
    expanded: bool,
    /// Latest issued fetch and the fidelity it targets.
    requested: Option<(u64, bool)>,
}

impl PreviewPanel {
    /// Create the panel and issue the initial summary fetch.
    pub fn new(client: Arc<dyn BoardClient>) -> Self {
        let fetcher =
            PanelFetcher::new("preview fetch", move |full: &bool| client.get_preview(*full));
        let mut panel = Self {
            fetcher,
            expanded: false,
            requested: None,
        };
        panel.request(false);
        panel
    }

    /// Toggle between summary and full fidelity.
    pub fn toggle(&mut self) {
        self.request(!self.expanded);
    }

    /// Re-fetch at the current committed fidelity.
    pub fn refresh(&mut self) {
        self.request(self.expanded);
    }

    /// Apply any completed fetch and record the committed fidelity.
    pub fn poll(&mut self) {
        if let Some(event) = self.fetcher.poll() {
            self.on_commit(event);
        }
    }

    pub fn state(&self) -> &PanelState<Preview> {
        self.fetcher.state()
    }

    /// Committed fidelity (false = summary, true = full).
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    fn request(&mut self, full: bool) {
        let generation = self.fetcher.fetch(full);
        self.requested = Some((generation, full));
    }

    fn on_commit(&mut self, event: CommitEvent) {
        if !event.ok {
            return;
        }
        if let Some((generation, full)) = self.requested {
            if generation == event.generation {
                self.expanded = full;
            }
        }
    }
}
