//! Pointer event streams to gestures.
//!
//! Recognizers only look at event timestamps; nothing here owns a timer.
//! A press held perfectly still is recognized as a long press on the next
//! event that arrives after the timeout, so hosts that do not report moves
//! while a pointer rests should repeat the last position as a `Move`.
//!
//! Each recognizer follows the first pointer that goes down and ignores
//! others until it is released.

use rune_config::GestureConfig;
use rune_text::Point;

use super::pointer::{PointerEvent, PointerEventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapGesture {
    Tap(Point),
    /// Second tap of a double tap. The first one was already reported as
    /// a [`TapGesture::Tap`].
    DoubleTap(Point),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer: u64,
    position: Point,
    time_ms: u64,
    valid: bool,
    second: bool,
}

#[derive(Debug, Clone, Copy)]
struct LastTap {
    position: Point,
    up_time_ms: u64,
}

/// Taps and, optionally, double taps.
#[derive(Debug, Clone)]
pub struct TapRecognizer {
    touch_slop: f32,
    long_press_timeout_ms: u64,
    double_tap: Option<(u64, f32)>,
    press: Option<Press>,
    last_tap: Option<LastTap>,
}

impl TapRecognizer {
    /// Recognizer reporting both taps and double taps.
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            double_tap: Some((config.double_tap_timeout_ms, config.double_tap_slop)),
            ..Self::single(config)
        }
    }

    /// Recognizer that reports every tap as a plain tap.
    pub fn single(config: &GestureConfig) -> Self {
        Self {
            touch_slop: config.touch_slop,
            long_press_timeout_ms: config.long_press_timeout_ms,
            double_tap: None,
            press: None,
            last_tap: None,
        }
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Option<TapGesture> {
        match event.kind {
            PointerEventKind::Down => {
                if self.press.is_some() {
                    return None;
                }
                let second = match (self.double_tap, self.last_tap) {
                    (Some((timeout, slop)), Some(last)) => {
                        event.time_ms.saturating_sub(last.up_time_ms) <= timeout
                            && event.position.distance(last.position) <= slop
                    }
                    _ => false,
                };
                if !second {
                    self.last_tap = None;
                }
                self.press = Some(Press {
                    pointer: event.pointer,
                    position: event.position,
                    time_ms: event.time_ms,
                    valid: true,
                    second,
                });
                None
            }
            PointerEventKind::Move => {
                let (slop, timeout) = (self.touch_slop, self.long_press_timeout_ms);
                if let Some(press) = self.press.as_mut().filter(|p| p.pointer == event.pointer) {
                    if !within(press, event, slop, timeout) {
                        press.valid = false;
                    }
                }
                None
            }
            PointerEventKind::Up => {
                let press = self.press.filter(|p| p.pointer == event.pointer)?;
                self.press = None;

                if !(press.valid && within(&press, event, self.touch_slop, self.long_press_timeout_ms)) {
                    self.last_tap = None;
                    return None;
                }
                if press.second {
                    self.last_tap = None;
                    return Some(TapGesture::DoubleTap(event.position));
                }
                self.last_tap = Some(LastTap {
                    position: press.position,
                    up_time_ms: event.time_ms,
                });
                Some(TapGesture::Tap(event.position))
            }
            PointerEventKind::Cancel => {
                self.press = None;
                self.last_tap = None;
                None
            }
        }
    }
}

fn within(press: &Press, event: &PointerEvent, slop: f32, long_press_timeout_ms: u64) -> bool {
    event.position.distance(press.position) <= slop
        && event.time_ms.saturating_sub(press.time_ms) < long_press_timeout_ms
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragGesture {
    /// Drag recognized; carries where the pointer went down.
    Start(Point),
    /// Movement since the previous report.
    Drag(Point),
    End,
    Cancel,
}

#[derive(Debug, Clone, Copy, Default)]
enum DragTrack {
    #[default]
    Idle,
    Pressed {
        pointer: u64,
        origin: Point,
    },
    Dragging {
        pointer: u64,
        last: Point,
    },
}

/// Drags that begin once the pointer leaves the touch slop.
#[derive(Debug, Clone)]
pub struct DragRecognizer {
    touch_slop: f32,
    track: DragTrack,
}

impl DragRecognizer {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            touch_slop: config.touch_slop,
            track: DragTrack::Idle,
        }
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Vec<DragGesture> {
        match (self.track, event.kind) {
            (DragTrack::Idle, PointerEventKind::Down) => {
                self.track = DragTrack::Pressed {
                    pointer: event.pointer,
                    origin: event.position,
                };
                Vec::new()
            }
            (DragTrack::Pressed { pointer, origin }, PointerEventKind::Move)
                if pointer == event.pointer =>
            {
                if event.position.distance(origin) <= self.touch_slop {
                    return Vec::new();
                }
                self.track = DragTrack::Dragging {
                    pointer,
                    last: event.position,
                };
                vec![DragGesture::Start(origin), DragGesture::Drag(event.position - origin)]
            }
            (DragTrack::Dragging { pointer, last }, PointerEventKind::Move)
                if pointer == event.pointer =>
            {
                self.track = DragTrack::Dragging {
                    pointer,
                    last: event.position,
                };
                let delta = event.position - last;
                if delta == Point::ZERO {
                    Vec::new()
                } else {
                    vec![DragGesture::Drag(delta)]
                }
            }
            (DragTrack::Pressed { pointer, .. }, PointerEventKind::Up | PointerEventKind::Cancel)
                if pointer == event.pointer =>
            {
                self.track = DragTrack::Idle;
                Vec::new()
            }
            (DragTrack::Dragging { pointer, .. }, PointerEventKind::Up) if pointer == event.pointer => {
                self.track = DragTrack::Idle;
                vec![DragGesture::End]
            }
            (DragTrack::Dragging { pointer, .. }, PointerEventKind::Cancel)
                if pointer == event.pointer =>
            {
                self.track = DragTrack::Idle;
                vec![DragGesture::Cancel]
            }
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum LongPressTrack {
    #[default]
    Idle,
    Pending {
        pointer: u64,
        origin: Point,
        time_ms: u64,
    },
    Rejected {
        pointer: u64,
    },
    Dragging {
        pointer: u64,
        last: Point,
    },
}

/// Drags that begin with a long press.
#[derive(Debug, Clone)]
pub struct LongPressDragRecognizer {
    touch_slop: f32,
    long_press_timeout_ms: u64,
    track: LongPressTrack,
}

impl LongPressDragRecognizer {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            touch_slop: config.touch_slop,
            long_press_timeout_ms: config.long_press_timeout_ms,
            track: LongPressTrack::Idle,
        }
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Vec<DragGesture> {
        match self.track {
            LongPressTrack::Idle => {
                if event.kind == PointerEventKind::Down {
                    self.track = LongPressTrack::Pending {
                        pointer: event.pointer,
                        origin: event.position,
                        time_ms: event.time_ms,
                    };
                }
                Vec::new()
            }
            LongPressTrack::Pending { pointer, origin, time_ms } if pointer == event.pointer => {
                let held = event.time_ms.saturating_sub(time_ms) >= self.long_press_timeout_ms;
                match event.kind {
                    PointerEventKind::Move if held => {
                        self.track = LongPressTrack::Dragging {
                            pointer,
                            last: event.position,
                        };
                        let mut gestures = vec![DragGesture::Start(origin)];
                        if event.position != origin {
                            gestures.push(DragGesture::Drag(event.position - origin));
                        }
                        gestures
                    }
                    PointerEventKind::Move => {
                        if event.position.distance(origin) > self.touch_slop {
                            self.track = LongPressTrack::Rejected { pointer };
                        }
                        Vec::new()
                    }
                    PointerEventKind::Up if held => {
                        self.track = LongPressTrack::Idle;
                        vec![DragGesture::Start(origin), DragGesture::End]
                    }
                    PointerEventKind::Up | PointerEventKind::Cancel => {
                        self.track = LongPressTrack::Idle;
                        Vec::new()
                    }
                    PointerEventKind::Down => Vec::new(),
                }
            }
            LongPressTrack::Rejected { pointer } if pointer == event.pointer => {
                if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
                    self.track = LongPressTrack::Idle;
                }
                Vec::new()
            }
            LongPressTrack::Dragging { pointer, last } if pointer == event.pointer => match event.kind {
                PointerEventKind::Move => {
                    self.track = LongPressTrack::Dragging {
                        pointer,
                        last: event.position,
                    };
                    let delta = event.position - last;
                    if delta == Point::ZERO {
                        Vec::new()
                    } else {
                        vec![DragGesture::Drag(delta)]
                    }
                }
                PointerEventKind::Up => {
                    self.track = LongPressTrack::Idle;
                    vec![DragGesture::End]
                }
                PointerEventKind::Cancel => {
                    self.track = LongPressTrack::Idle;
                    vec![DragGesture::Cancel]
                }
                PointerEventKind::Down => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressGesture {
    Down(Point),
    /// Released or cancelled.
    Up,
}

/// Raw press and release notifications.
#[derive(Debug, Clone, Default)]
pub struct PressRecognizer {
    pressed: Option<u64>,
}

impl PressRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Option<PressGesture> {
        match (self.pressed, event.kind) {
            (None, PointerEventKind::Down) => {
                self.pressed = Some(event.pointer);
                Some(PressGesture::Down(event.position))
            }
            (Some(pointer), PointerEventKind::Up | PointerEventKind::Cancel) if pointer == event.pointer => {
                self.pressed = None;
                Some(PressGesture::Up)
            }
            _ => None,
        }
    }
}
