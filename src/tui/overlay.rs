//! Modal overlay controller for the navigation drawer
//!
//! Owns the dismissal semantics and accessibility exposure of a single
//! top-level overlay. The controller never holds the open/closed state
//! itself: `is_open` is supplied by the caller on every call and the
//! controller only reports dismissal intent back. The drawer content is
//! rendered every frame regardless of `is_open` - the closed state
//! collapses its area instead of skipping the render, so open/close is a
//! visual transition, not a mount/unmount cycle, and the dialog role
//! stays stable. Intentional; see the product note in DESIGN.md about
//! closed dialogs remaining in the tree.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Widest the drawer content gets, in columns.
const DRAWER_MAX_WIDTH: u16 = 36;

/// Dismissal intent reported to the caller. The caller decides what to do
/// with it (normally: set `is_open` to false).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismiss;

/// Discrete visual state of the overlay, a pure function of `is_open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Drawer is in position, content visible.
    OnScreen,
    /// Drawer is translated away; content still rendered, zero area.
    OffScreen,
}

/// Accessibility exposure of the overlay root. Static while mounted,
/// independent of open/closed, since the content is never unmounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRole {
    pub role: &'static str,
    pub label: &'static str,
    pub modal: bool,
}

/// Controller for a dismissible modal drawer.
pub struct OverlayController {
    label: &'static str,
}

impl OverlayController {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// The overlay's dialog role, label and modal flag.
    pub fn accessibility(&self) -> DialogRole {
        DialogRole {
            role: "dialog",
            label: self.label,
            modal: true,
        }
    }

    /// Map `is_open` to the drawer's visual state.
    pub fn visual_state(is_open: bool) -> VisualState {
        if is_open {
            VisualState::OnScreen
        } else {
            VisualState::OffScreen
        }
    }

    /// The drawer content rectangle within `frame`.
    ///
    /// Closed collapses to zero width at the left edge; the render pass
    /// still runs against it.
    pub fn content_area(frame: Rect, is_open: bool) -> Rect {
        match Self::visual_state(is_open) {
            VisualState::OnScreen => Rect {
                x: frame.x,
                y: frame.y,
                width: DRAWER_MAX_WIDTH.min(frame.width),
                height: frame.height,
            },
            VisualState::OffScreen => Rect {
                x: frame.x,
                y: frame.y,
                width: 0,
                height: frame.height,
            },
        }
    }

    /// Escape dismisses the overlay, once per keypress, only while open.
    pub fn on_key(&self, is_open: bool, key: &KeyEvent) -> Option<Dismiss> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if is_open && key.code == KeyCode::Esc {
            Some(Dismiss)
        } else {
            None
        }
    }

    /// A left click on the backdrop (inside the frame, outside the drawer
    /// content) dismisses the overlay, once per click, only while open.
    pub fn on_mouse(&self, is_open: bool, mouse: &MouseEvent, content: Rect) -> Option<Dismiss> {
        if !is_open {
            return None;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return None;
        }
        let position = Position::new(mouse.column, mouse.row);
        if content.contains(position) {
            None
        } else {
            Some(Dismiss)
        }
    }
}
