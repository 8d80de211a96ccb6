//! boardctl library
//!
//! Client-side state core for a terminal control panel: remote-backed
//! panel state machines, a bounded recent-folders cache over durable
//! local storage, and the drawer overlay controller.

pub mod config;
pub mod panel;
pub mod recent;
pub mod remote;
pub mod tui;

pub use config::Config;
pub use panel::{FavoritesPanel, PanelState, PreviewPanel};
pub use recent::{FileStore, KvStore, MemoryStore, RecentEntry, RecentFolders, RECENT_LIMIT};
pub use remote::{BoardClient, BoardConfig, Favorite, HttpBoardClient, Preview, RemoteError};
