//! Headless walkthrough of a text field session: scripted taps and drags
//! against a monospace layout, with the host services logging what the
//! coordinator asks of them.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use rune_config::RuneConfig;
use rune_text::{MonospaceLayout, Point, Rect};
use rune_textfield::{
    Clipboard, FocusController, HapticFeedback, HapticFeedbackType, PointerEvent, Surface,
    TextFieldSelectionState, TextFieldSession, TextFieldValue, TextToolbar, ToolbarAction,
    ToolbarActions, ToolbarStatus, Viewport,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_TEXT: &str = "The quick brown fox\njumps over the lazy dog";
const CHAR_WIDTH: f32 = 10.0;
const LINE_HEIGHT: f32 = 20.0;

struct FixedViewport {
    bounds: Rect,
    origin: Point,
}

impl Viewport for FixedViewport {
    fn visible_bounds(&self) -> Option<Rect> {
        Some(self.bounds)
    }

    fn local_to_root(&self, point: Point) -> Point {
        point + self.origin
    }
}

#[derive(Default)]
struct LoggingToolbar {
    shown: Mutex<bool>,
}

impl TextToolbar for LoggingToolbar {
    fn show_menu(&self, rect: Rect, actions: ToolbarActions) {
        let actions: Vec<ToolbarAction> = actions.iter().collect();
        tracing::info!(?rect, ?actions, "toolbar shown");
        *self.shown.lock() = true;
    }

    fn hide(&self) {
        tracing::info!("toolbar hidden");
        *self.shown.lock() = false;
    }

    fn status(&self) -> ToolbarStatus {
        if *self.shown.lock() {
            ToolbarStatus::Shown
        } else {
            ToolbarStatus::Hidden
        }
    }
}

struct LoggingHaptics;

impl HapticFeedback for LoggingHaptics {
    fn perform(&self, kind: HapticFeedbackType) {
        tracing::debug!(?kind, "haptic feedback");
    }
}

struct GrantingFocus;

impl FocusController for GrantingFocus {
    fn request_focus(&self) -> bool {
        true
    }

    fn show_keyboard(&self) {
        tracing::debug!("soft keyboard requested");
    }
}

/// Stand-in when no system clipboard is reachable (e.g. no display).
#[derive(Default)]
struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) {
        *self.text.lock() = Some(text.to_string());
    }

    fn get_text(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

fn clipboard() -> Arc<dyn Clipboard> {
    match rune_textfield::SystemClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(err) => {
            tracing::warn!(%err, "system clipboard unavailable, using in-memory clipboard");
            Arc::new(MemoryClipboard::default())
        }
    }
}

fn report(session: &TextFieldSession, step: &str) {
    let state = session.lock();
    let selection = state.selection();
    println!(
        "{step:<28} selection {}..{} {:?}  cursor handle: {}  dragging: {:?}",
        selection.start,
        selection.end,
        selection.text(state.value().text()),
        state.cursor_handle().visible,
        state.dragging_handle(),
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = RuneConfig::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(?config, "starting text field demo");

    let state = TextFieldSelectionState::new(
        TextFieldValue::with_cursor_at_end(SAMPLE_TEXT),
        &config.selection,
    )
    .with_layout(Arc::new(MonospaceLayout::new(
        SAMPLE_TEXT,
        CHAR_WIDTH,
        LINE_HEIGHT,
    )))
    .with_viewport(Arc::new(FixedViewport {
        bounds: Rect::new(0.0, 0.0, 400.0, 200.0),
        origin: Point::new(16.0, 32.0),
    }))
    .with_clipboard(clipboard())
    .with_toolbar(Arc::new(LoggingToolbar::default()))
    .with_haptics(Arc::new(LoggingHaptics))
    .with_focus_controller(Arc::new(GrantingFocus));

    let mut session = TextFieldSession::spawn(state, config.gestures.clone());
    let long_press_ms = config.gestures.long_press_timeout_ms;

    // Tap inside "quick".
    let at = Point::new(64.0, 8.0);
    session.dispatch(Surface::Field, PointerEvent::down(at, 0)).await?;
    session.dispatch(Surface::Field, PointerEvent::up(at, 50)).await?;
    session.settle().await?;
    report(&session, "tap");

    // Second tap in time makes it a double tap.
    session.dispatch(Surface::Field, PointerEvent::down(at, 120)).await?;
    session.dispatch(Surface::Field, PointerEvent::up(at, 170)).await?;
    session.settle().await?;
    report(&session, "double tap");

    // Long press on "jumps", then drag onto "lazy".
    let press = Point::new(24.0, 28.0);
    let t = 1_000;
    session.dispatch(Surface::Field, PointerEvent::down(press, t)).await?;
    session
        .dispatch(Surface::Field, PointerEvent::moved(press, t + long_press_ms))
        .await?;
    report(&session, "long press");
    let lazy = Point::new(164.0, 28.0);
    session
        .dispatch(Surface::Field, PointerEvent::moved(lazy, t + long_press_ms + 40))
        .await?;
    session
        .dispatch(Surface::Field, PointerEvent::up(lazy, t + long_press_ms + 80))
        .await?;
    session.settle().await?;
    report(&session, "long press drag");

    // Pull the start handle back to the first line.
    let t = 3_000;
    session
        .dispatch(Surface::SelectionStart, PointerEvent::down(Point::ZERO, t))
        .await?;
    session
        .dispatch(
            Surface::SelectionStart,
            PointerEvent::moved(Point::new(40.0, -20.0), t + 30),
        )
        .await?;
    report(&session, "start handle drag");
    session
        .dispatch(
            Surface::SelectionStart,
            PointerEvent::up(Point::new(40.0, -20.0), t + 60),
        )
        .await?;
    session.settle().await?;

    session.lock().on_toolbar_action(ToolbarAction::Copy);
    session.settle().await?;
    report(&session, "copy");

    session.shutdown().await;
    Ok(())
}
