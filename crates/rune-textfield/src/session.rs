//! Async driver: every detector as its own task under one session.
//!
//! Each detector task owns its detector and receives the events of its
//! surface in arrival order. [`TextFieldSession::dispatch`] hands an event to
//! every detector of the surface in turn and waits for each to acknowledge
//! it, so callers observe fully applied state once it returns. An observer
//! task follows the coordinator's revision channel and keeps the toolbar in
//! sync.
//!
//! The shared state sits behind a `parking_lot` mutex that is never held
//! across an `.await`. Cancelling a task drops its guard, which runs the
//! detector's teardown (or, for the observer, releases the cursor handle and
//! toolbar), so aborting the session mid-gesture leaves no drag behind.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use rune_config::GestureConfig;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::error::{Result, SessionError};
use crate::gestures::{GestureDetector, PointerEvent, Surface, detectors_for};
use crate::selection::TextFieldSelectionState;

pub type SharedSelectionState = Arc<Mutex<TextFieldSelectionState>>;

struct Envelope {
    event: PointerEvent,
    ack: oneshot::Sender<()>,
}

struct DetectorRoute {
    name: &'static str,
    events: mpsc::UnboundedSender<Envelope>,
    task: JoinHandle<()>,
}

/// Runs detector teardown however the task ends.
struct DetectorGuard {
    state: SharedSelectionState,
    detector: Box<dyn GestureDetector>,
}

impl Drop for DetectorGuard {
    fn drop(&mut self) {
        let cleared = self.detector.teardown(&mut self.state.lock());
        if cleared {
            tracing::debug!(detector = self.detector.name(), "cleared handle drag on teardown");
        }
    }
}

struct ObserverGuard {
    state: SharedSelectionState,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.state.lock().release_transient_ui();
    }
}

pub struct TextFieldSession {
    state: SharedSelectionState,
    config: GestureConfig,
    routes: HashMap<Surface, Vec<DetectorRoute>>,
    observer: Option<JoinHandle<()>>,
    /// Last revision the toolbar observer synced, `None` before its first pass.
    synced: watch::Receiver<Option<u64>>,
    closed: bool,
}

impl TextFieldSession {
    /// Start detectors for every surface plus the toolbar observer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(state: TextFieldSelectionState, config: GestureConfig) -> Self {
        let state = Arc::new(Mutex::new(state));
        let (synced_tx, synced) = watch::channel(None);
        let observer = tokio::spawn(observe(state.clone(), synced_tx));

        let mut session = Self {
            state,
            config,
            routes: HashMap::new(),
            observer: Some(observer),
            synced,
            closed: false,
        };
        for surface in Surface::ALL {
            session.attach(surface);
        }
        session
    }

    pub fn state(&self) -> SharedSelectionState {
        self.state.clone()
    }

    /// Lock the shared state. Do not hold the guard across an `.await`.
    pub fn lock(&self) -> MutexGuard<'_, TextFieldSelectionState> {
        self.state.lock()
    }

    pub fn is_attached(&self, surface: Surface) -> bool {
        self.routes.contains_key(&surface)
    }

    /// Start fresh detectors for `surface`. No-op if already attached.
    pub fn attach(&mut self, surface: Surface) {
        if self.closed || self.routes.contains_key(&surface) {
            return;
        }
        let routes = detectors_for(surface, &self.config)
            .into_iter()
            .map(|detector| {
                let name = detector.name();
                let (events, rx) = mpsc::unbounded_channel();
                let guard = DetectorGuard {
                    state: self.state.clone(),
                    detector,
                };
                let task = tokio::spawn(run_detector(guard, rx));
                DetectorRoute { name, events, task }
            })
            .collect();
        tracing::debug!(?surface, "attached gesture detectors");
        self.routes.insert(surface, routes);
    }

    /// Stop the detectors of `surface`, e.g. when a handle leaves the
    /// screen. Waits until their teardown has run.
    pub async fn detach(&mut self, surface: Surface) {
        if let Some(routes) = self.routes.remove(&surface) {
            tracing::debug!(?surface, "detaching gesture detectors");
            abort_all(routes).await;
        }
    }

    /// Deliver `event` to every detector of `surface`, in order, and wait
    /// until all of them processed it.
    pub async fn dispatch(&self, surface: Surface, event: PointerEvent) -> Result<()> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        let routes = self
            .routes
            .get(&surface)
            .ok_or(SessionError::Detached(surface))?;

        for route in routes {
            let (ack, done) = oneshot::channel();
            route
                .events
                .send(Envelope { event, ack })
                .map_err(|_| SessionError::Closed)?;
            if done.await.is_err() {
                tracing::warn!(detector = route.name, "detector stopped before acknowledging event");
                return Err(SessionError::Closed);
            }
        }
        Ok(())
    }

    /// Wait until the toolbar observer has caught up with the latest state.
    pub async fn settle(&mut self) -> Result<()> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        let target = self.state.lock().revision();
        self.synced
            .wait_for(|synced| synced.is_some_and(|synced| synced >= target))
            .await
            .map(|_| ())
            .map_err(|_| SessionError::Closed)
    }

    /// Cancel every task and wait for their cleanup to finish.
    pub async fn shutdown(mut self) {
        self.close().await;
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        for (_, routes) in self.routes.drain() {
            abort_all(routes).await;
        }
        if let Some(observer) = self.observer.take() {
            observer.abort();
            let _ = observer.await;
        }
        tracing::debug!("text field session shut down");
    }
}

impl Drop for TextFieldSession {
    fn drop(&mut self) {
        for routes in self.routes.values() {
            for route in routes {
                route.task.abort();
            }
        }
        if let Some(observer) = &self.observer {
            observer.abort();
        }
    }
}

async fn abort_all(routes: Vec<DetectorRoute>) {
    for route in &routes {
        route.task.abort();
    }
    for route in routes {
        // Cancellation is the expected outcome here.
        let _ = route.task.await;
    }
}

async fn run_detector(mut guard: DetectorGuard, mut events: mpsc::UnboundedReceiver<Envelope>) {
    while let Some(Envelope { event, ack }) = events.recv().await {
        {
            let mut state = guard.state.lock();
            guard.detector.on_event(&mut state, &event);
        }
        let _ = ack.send(());
    }
}

async fn observe(state: SharedSelectionState, synced: watch::Sender<Option<u64>>) {
    let guard = ObserverGuard { state };
    let mut revisions = guard.state.lock().subscribe();

    loop {
        let revision = {
            let mut state = guard.state.lock();
            state.sync_toolbar();
            state.revision()
        };
        synced.send_replace(Some(revision));

        if revisions.changed().await.is_err() {
            break;
        }
    }
}
