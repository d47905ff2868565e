use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

/// Paragraph direction used when resolving embedding levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseDirection {
    /// Taken from the first strong character of each paragraph.
    #[default]
    Auto,
    Ltr,
    Rtl,
}

impl BaseDirection {
    fn level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Direction of one resolved bidi run, e.g. the one a selection handle
/// points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedDirection {
    #[default]
    Ltr,
    Rtl,
}

impl From<Level> for ResolvedDirection {
    fn from(level: Level) -> Self {
        if level.is_rtl() {
            ResolvedDirection::Rtl
        } else {
            ResolvedDirection::Ltr
        }
    }
}

/// Direction of the run containing the character at `offset`.
///
/// `offset` is clamped into the text; an offset at the very end resolves to
/// the last character. Empty text falls back to the base direction (LTR for
/// `Auto`).
pub fn run_direction_at(text: &str, offset: usize, base: BaseDirection) -> ResolvedDirection {
    if text.is_empty() {
        return match base {
            BaseDirection::Rtl => ResolvedDirection::Rtl,
            _ => ResolvedDirection::Ltr,
        };
    }
    // `levels` has one entry per byte of `text`.
    let info = BidiInfo::new(text, base.level());
    let index = offset.min(info.levels.len() - 1);
    info.levels[index].into()
}
