//! Favorites panel
//!
//! Shows the favorite folders from the board configuration. Zero
//! configured favorites is a legitimate state, rendered as "No favorites
//! configured" rather than an error.

use std::sync::Arc;

use crate::remote::{BoardClient, Favorite};

use super::{PanelFetcher, PanelState};

/// Favorites list driven by the board config fetch.
pub struct FavoritesPanel {
    fetcher: PanelFetcher<(), Vec<Favorite>>,
}

impl FavoritesPanel {
    /// Create the panel and issue the initial fetch.
    pub fn new(client: Arc<dyn BoardClient>) -> Self {
        let fetcher = PanelFetcher::new("config fetch", move |_: &()| {
            client.get_config().map(|config| config.favorites)
        });
        let mut panel = Self { fetcher };
        panel.refresh();
        panel
    }

    /// Re-fetch the board configuration.
    pub fn refresh(&mut self) {
        self.fetcher.fetch(());
    }

    /// Apply any completed fetch.
    pub fn poll(&mut self) {
        self.fetcher.poll();
    }

    pub fn state(&self) -> &PanelState<Vec<Favorite>> {
        self.fetcher.state()
    }

    /// Favorites to render; empty while loading, empty or failed.
    pub fn favorites(&self) -> &[Favorite] {
        self.state().data().map(Vec::as_slice).unwrap_or(&[])
    }
}
