use rune_text::Point;

/// Kind of input device behind a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerDevice {
    #[default]
    Touch,
    Mouse,
    Stylus,
    Eraser,
    Unknown,
}

impl PointerDevice {
    /// Mouse and pen input hit exactly where they point; fingers do not.
    pub fn is_precise(&self) -> bool {
        matches!(
            self,
            PointerDevice::Mouse | PointerDevice::Stylus | PointerDevice::Eraser
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One raw pointer event, in the coordinate space of the surface it was
/// delivered to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: u64,
    pub kind: PointerEventKind,
    pub position: Point,
    pub device: PointerDevice,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: u64) -> Self {
        Self {
            pointer: 0,
            kind,
            position,
            device: PointerDevice::default(),
            time_ms,
        }
    }

    pub fn down(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(position: Point, time_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, position, time_ms)
    }

    pub fn with_device(mut self, device: PointerDevice) -> Self {
        self.device = device;
        self
    }

    pub fn with_pointer(mut self, pointer: u64) -> Self {
        self.pointer = pointer;
        self
    }
}
