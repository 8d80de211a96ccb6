//! Board service client
//!
//! The panels only depend on the [`BoardClient`] trait; the HTTP
//! implementation lives in [`http`]. The trait is blocking on purpose:
//! fetches run on panel worker threads, never on the UI thread.

pub mod error;
pub mod http;

use serde::{Deserialize, Serialize};

pub use error::RemoteError;
pub use http::HttpBoardClient;

/// A favorite folder from the board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub label: String,
    pub path: String,
}

/// Board configuration slice the panels consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

/// Content preview payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default)]
    pub preview: String,
}

/// Client contract for the board/preview service.
pub trait BoardClient: Send + Sync {
    /// Fetch the board configuration (favorites).
    fn get_config(&self) -> Result<BoardConfig, RemoteError>;

    /// Fetch the content preview. `full` selects complete content over
    /// the truncated summary.
    fn get_preview(&self, full: bool) -> Result<Preview, RemoteError>;
}
