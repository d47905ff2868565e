use super::geometry::Rect;
use super::oracle::LayoutDirection;

/// Fit a cursor stroke of `thickness` pixels onto the caret rectangle the
/// layout reported.
///
/// The stroke starts at the leading edge of `raw` (left for LTR, right for
/// RTL) and its centre is kept within `[thickness / 2, layout_width -
/// thickness / 2]` so it is never clipped by the field. For layouts narrower
/// than the stroke the lower bound wins, which still draws a cursor in an
/// empty field.
pub fn centered_cursor_rect(
    raw: Rect,
    thickness: f32,
    layout_width: f32,
    direction: LayoutDirection,
) -> Rect {
    let half = thickness / 2.0;
    let center_x = match direction {
        LayoutDirection::Ltr => raw.left + half,
        LayoutDirection::Rtl => raw.right - half,
    };

    // Not `clamp`: min may exceed max here.
    let center_x = center_x.min(layout_width - half).max(half);

    Rect::new(center_x - half, raw.top, center_x + half, raw.bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltr_cursor_starts_at_left_edge() {
        let raw = Rect::new(30.0, 0.0, 30.0, 16.0);
        let rect = centered_cursor_rect(raw, 2.0, 100.0, LayoutDirection::Ltr);
        assert_eq!(rect, Rect::new(30.0, 0.0, 32.0, 16.0));
    }

    #[test]
    fn rtl_cursor_ends_at_right_edge() {
        let raw = Rect::new(30.0, 0.0, 30.0, 16.0);
        let rect = centered_cursor_rect(raw, 2.0, 100.0, LayoutDirection::Rtl);
        assert_eq!(rect, Rect::new(28.0, 0.0, 30.0, 16.0));
    }

    #[test]
    fn cursor_at_trailing_edge_is_pulled_inside() {
        let raw = Rect::new(100.0, 0.0, 100.0, 16.0);
        let rect = centered_cursor_rect(raw, 2.0, 100.0, LayoutDirection::Ltr);
        assert_eq!(rect, Rect::new(98.0, 0.0, 100.0, 16.0));
    }

    #[test]
    fn empty_layout_still_draws_cursor() {
        let raw = Rect::new(0.0, 0.0, 0.0, 16.0);
        let rect = centered_cursor_rect(raw, 2.0, 0.0, LayoutDirection::Ltr);
        assert_eq!(rect, Rect::new(0.0, 0.0, 2.0, 16.0));
    }
}
