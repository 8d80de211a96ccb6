//! Unit tests for the panel state machines through their public API
//!
//! The stub client blocks each fetch on a channel so the tests control
//! resolution order deterministically instead of racing worker threads.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use tracing_subscriber::fmt::MakeWriter;

use boardctl::{
    BoardClient, BoardConfig, Favorite, FavoritesPanel, PanelState, Preview, PreviewPanel,
    RemoteError,
};

/// Client whose responses are fed in by the test, one per fetch.
struct GateClient {
    config_rx: Mutex<Receiver<Result<BoardConfig, RemoteError>>>,
    preview_rx: Mutex<Receiver<Result<Preview, RemoteError>>>,
}

struct Gate {
    config_tx: Sender<Result<BoardConfig, RemoteError>>,
    preview_tx: Sender<Result<Preview, RemoteError>>,
}

fn gated_client() -> (Gate, Arc<GateClient>) {
    let (config_tx, config_rx) = channel();
    let (preview_tx, preview_rx) = channel();
    (
        Gate {
            config_tx,
            preview_tx,
        },
        Arc::new(GateClient {
            config_rx: Mutex::new(config_rx),
            preview_rx: Mutex::new(preview_rx),
        }),
    )
}

impl BoardClient for GateClient {
    fn get_config(&self) -> Result<BoardConfig, RemoteError> {
        self.config_rx.lock().unwrap().recv().unwrap()
    }

    fn get_preview(&self, _full: bool) -> Result<Preview, RemoteError> {
        self.preview_rx.lock().unwrap().recv().unwrap()
    }
}

/// Collects subscriber output so tests can count warnings.
#[derive(Clone, Default)]
struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with all warnings captured into the returned buffer.
fn capture_warnings<F: FnOnce()>(f: F) -> String {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

fn preview(text: &str) -> Preview {
    Preview {
        preview: text.to_string(),
    }
}

/// Poll until the panel leaves `Loading` or the deadline passes.
fn settle<F: FnMut() -> bool>(mut done: F) {
    for _ in 0..200 {
        if done() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("panel did not settle in time");
}

#[test]
fn favorites_load_through_the_worker() {
    let (gate, client) = gated_client();
    let mut panel = FavoritesPanel::new(client);

    gate.config_tx
        .send(Ok(BoardConfig {
            favorites: vec![Favorite {
                label: "Home".to_string(),
                path: "/home/user".to_string(),
            }],
        }))
        .unwrap();

    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });
    assert_eq!(panel.favorites().len(), 1);
}

#[test]
fn zero_favorites_settle_as_empty() {
    let (gate, client) = gated_client();
    let mut panel = FavoritesPanel::new(client);

    gate.config_tx
        .send(Ok(BoardConfig { favorites: vec![] }))
        .unwrap();

    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });
    assert!(matches!(panel.state(), PanelState::Empty));
}

#[test]
fn favorites_fetch_failure_renders_empty() {
    let (gate, client) = gated_client();
    let mut panel = FavoritesPanel::new(client);

    gate.config_tx
        .send(Err(RemoteError::Status { status: 503 }))
        .unwrap();

    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });
    assert!(panel.state().renders_empty());
    assert!(panel.favorites().is_empty());
}

#[test]
fn failed_fetch_warns_exactly_once() {
    let (gate, client) = gated_client();
    let mut panel = FavoritesPanel::new(client);

    gate.config_tx
        .send(Err(RemoteError::Status { status: 503 }))
        .unwrap();

    let log = capture_warnings(|| {
        settle(|| {
            panel.poll();
            !panel.state().is_loading()
        });
        // Further polls after the commit must not repeat the diagnostic
        for _ in 0..5 {
            panel.poll();
        }
    });

    assert_eq!(log.matches("config fetch failed").count(), 1);
}

#[test]
fn superseded_failure_is_not_logged() {
    let (gate, client) = gated_client();
    let mut panel = PreviewPanel::new(client);

    // The toggle supersedes the initial summary fetch, so its failure
    // arrives carrying a stale generation.
    panel.toggle();
    gate.preview_tx
        .send(Err(RemoteError::Status { status: 500 }))
        .unwrap();
    gate.preview_tx.send(Ok(preview("from B"))).unwrap();

    let log = capture_warnings(|| {
        settle(|| {
            panel.poll();
            !panel.state().is_loading()
        });
    });

    assert_eq!(panel.state().data().unwrap().preview, "from B");
    assert!(!log.contains("preview fetch failed"));
}

#[test]
fn superseded_preview_fetch_never_wins() {
    let (gate, client) = gated_client();
    let mut panel = PreviewPanel::new(client);

    // The initial summary fetch (A) is still blocked when the toggle
    // issues the full fetch (B).
    panel.toggle();

    gate.preview_tx.send(Ok(preview("from A"))).unwrap();
    gate.preview_tx.send(Ok(preview("from B"))).unwrap();

    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });

    // B was the last-issued fetch, so its result is the one on screen
    assert_eq!(panel.state().data().unwrap().preview, "from B");
    assert!(panel.expanded());
}

#[test]
fn failed_expand_keeps_the_collapsed_mode() {
    let (gate, client) = gated_client();
    let mut panel = PreviewPanel::new(client);

    gate.preview_tx.send(Ok(preview("summary"))).unwrap();
    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });
    assert!(!panel.expanded());

    panel.toggle();
    gate.preview_tx
        .send(Err(RemoteError::Status { status: 500 }))
        .unwrap();
    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });

    assert!(!panel.expanded());
    assert!(panel.state().renders_empty());
}

#[test]
fn whitespace_preview_settles_as_empty() {
    let (gate, client) = gated_client();
    let mut panel = PreviewPanel::new(client);

    gate.preview_tx.send(Ok(preview("   \n  "))).unwrap();
    settle(|| {
        panel.poll();
        !panel.state().is_loading()
    });
    assert!(matches!(panel.state(), PanelState::Empty));
}
