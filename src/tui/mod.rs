//! Terminal user interface for the control panel
//!
//! Event loop, drawer overlay and panel rendering. All remote-backed
//! state is owned by the panel state machines in `crate::panel`.

pub mod app;
pub mod event;
pub mod overlay;
pub mod panel_app;
pub mod theme;
pub mod ui;

pub use app::App;
pub use overlay::{DialogRole, Dismiss, OverlayController, VisualState};
pub use panel_app::{run, PanelApp};
pub use theme::{current_theme, Theme};
