#![forbid(unsafe_code)]

//! Coordinate normalization.
//!
//! Maps a raw cursor position and a viewport into a logical coordinate
//! space measured from the viewport's top-left in reading order, no matter
//! how the display is oriented. With `FLIP_XY` the axes swap roles
//! (logical Y derives from raw X and vice versa); `INVERT_HORIZONTAL` and
//! `INVERT_VERTICAL` then mirror the *logical* axis so the distance is
//! measured from the far edge instead of the near edge.
//!
//! Everything in this module is a pure function of
//! `(cursor, viewport, behaviour, font)`.

use vdu_core::{CursorBehaviour, FontMetrics, Point, Viewport};

/// Pixels of viewport width that do not fit a whole glyph cell.
///
/// Used to trim the usable viewport so the cursor never rests partway
/// into a cell.
#[inline]
pub fn x_adjustment(viewport: &Viewport, font: FontMetrics) -> i32 {
    viewport.width() % font.width_px().max(1)
}

/// Pixels of viewport height that do not fit a whole glyph cell.
#[inline]
pub fn y_adjustment(viewport: &Viewport, font: FontMetrics) -> i32 {
    viewport.height() % font.height_px().max(1)
}

/// Usable extent along the logical horizontal axis.
pub fn normalised_width(viewport: &Viewport, behaviour: CursorBehaviour, font: FontMetrics) -> i32 {
    if behaviour.flip_xy() {
        viewport.height() - y_adjustment(viewport, font)
    } else {
        viewport.width() - x_adjustment(viewport, font)
    }
}

/// Usable extent along the logical vertical axis.
///
/// When the logical vertical axis is not inverted, one glyph cell's worth
/// of margin (less one pixel) is subtracted so the bottommost cursor
/// origin still leaves a whole cell inside bounds.
pub fn normalised_height(viewport: &Viewport, behaviour: CursorBehaviour, font: FontMetrics) -> i32 {
    if behaviour.flip_xy() {
        let mut height = viewport.width() - x_adjustment(viewport, font);
        if !behaviour.invert_horizontal() {
            height -= font.width_px() - 1;
        }
        height
    } else {
        let mut height = viewport.height() - y_adjustment(viewport, font);
        if !behaviour.invert_vertical() {
            height -= font.height_px() - 1;
        }
        height
    }
}

/// Map a raw cursor position into logical reading-order coordinates.
///
/// Subtraction saturates: a cursor clamped at the `i32` range by movement
/// must still normalize (to a huge off-edge value), not overflow.
pub fn normalised_position(cursor: Point, viewport: &Viewport, behaviour: CursorBehaviour) -> Point {
    let mut p = Point::default();
    if behaviour.flip_xy() {
        // Logical Y takes its value from raw X and vice versa.
        p.y = if behaviour.invert_horizontal() {
            viewport.x2.saturating_sub(cursor.x)
        } else {
            cursor.x.saturating_sub(viewport.x1)
        };
        p.x = if behaviour.invert_vertical() {
            viewport.y2.saturating_sub(cursor.y)
        } else {
            cursor.y.saturating_sub(viewport.y1)
        };
    } else {
        p.x = if behaviour.invert_horizontal() {
            viewport.x2.saturating_sub(cursor.x)
        } else {
            cursor.x.saturating_sub(viewport.x1)
        };
        p.y = if behaviour.invert_vertical() {
            viewport.y2.saturating_sub(cursor.y)
        } else {
            cursor.y.saturating_sub(viewport.y1)
        };
    }
    p
}

/// Usable viewport width in whole text columns.
#[inline]
pub fn char_width(viewport: &Viewport, behaviour: CursorBehaviour, font: FontMetrics) -> i32 {
    normalised_width(viewport, behaviour, font) / font.width_px().max(1)
}

/// Usable viewport height in whole text rows.
#[inline]
pub fn char_height(viewport: &Viewport, behaviour: CursorBehaviour, font: FontMetrics) -> i32 {
    normalised_height(viewport, behaviour, font) / font.height_px().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdu_core::CursorBehaviour as B;

    const FONT: FontMetrics = FontMetrics::new(8, 8);

    fn vp() -> Viewport {
        // 640x480, both extents whole multiples of the font cell.
        Viewport::new(0, 0, 639, 479)
    }

    fn ragged_vp() -> Viewport {
        // 131x45: 3 spare pixels horizontally, 5 vertically.
        Viewport::new(10, 20, 140, 64)
    }

    #[test]
    fn adjustments_are_cell_remainders() {
        assert_eq!(x_adjustment(&vp(), FONT), 0);
        assert_eq!(y_adjustment(&vp(), FONT), 0);
        assert_eq!(x_adjustment(&ragged_vp(), FONT), 3);
        assert_eq!(y_adjustment(&ragged_vp(), FONT), 5);
    }

    #[test]
    fn normalised_width_trims_adjustment_only() {
        assert_eq!(normalised_width(&vp(), B::default(), FONT), 640);
        assert_eq!(normalised_width(&ragged_vp(), B::default(), FONT), 128);
    }

    #[test]
    fn normalised_width_follows_flip() {
        assert_eq!(normalised_width(&vp(), B::FLIP_XY, FONT), 480);
        assert_eq!(normalised_width(&ragged_vp(), B::FLIP_XY, FONT), 40);
    }

    #[test]
    fn normalised_height_subtracts_cell_margin_when_not_inverted() {
        // 480 - 0 - (8 - 1)
        assert_eq!(normalised_height(&vp(), B::default(), FONT), 473);
        // Inverted vertical keeps the full trimmed extent.
        assert_eq!(normalised_height(&vp(), B::INVERT_VERTICAL, FONT), 480);
    }

    #[test]
    fn normalised_height_follows_flip_and_horizontal_inversion() {
        // Flipped: vertical extent comes from the raw width.
        assert_eq!(normalised_height(&vp(), B::FLIP_XY, FONT), 633);
        assert_eq!(
            normalised_height(&vp(), B::FLIP_XY | B::INVERT_HORIZONTAL, FONT),
            640
        );
    }

    #[test]
    fn position_measured_from_near_edge_by_default() {
        let p = normalised_position(Point::new(26, 36), &ragged_vp(), B::default());
        assert_eq!(p, Point::new(16, 16));
    }

    #[test]
    fn position_measured_from_far_edge_when_inverted() {
        let b = B::INVERT_HORIZONTAL | B::INVERT_VERTICAL;
        let p = normalised_position(Point::new(140, 64), &ragged_vp(), b);
        assert_eq!(p, Point::new(0, 0));
        let q = normalised_position(Point::new(132, 56), &ragged_vp(), b);
        assert_eq!(q, Point::new(8, 8));
    }

    #[test]
    fn position_swaps_axes_when_flipped() {
        let p = normalised_position(Point::new(26, 36), &ragged_vp(), B::FLIP_XY);
        assert_eq!(p, Point::new(16, 16));
        let q = normalised_position(Point::new(34, 36), &ragged_vp(), B::FLIP_XY);
        // Raw X feeds logical Y.
        assert_eq!(q, Point::new(16, 24));
    }

    #[test]
    fn home_normalises_to_origin_for_all_orientations() {
        // The viewport-home raw position depends on the orientation; for
        // the default orientation it is the top-left corner.
        let p = normalised_position(Point::new(10, 20), &ragged_vp(), B::default());
        assert_eq!(p, Point::new(0, 0));
    }

    #[test]
    fn char_extents() {
        assert_eq!(char_width(&vp(), B::default(), FONT), 80);
        // 473 / 8
        assert_eq!(char_height(&vp(), B::default(), FONT), 59);
        assert_eq!(char_height(&vp(), B::INVERT_VERTICAL, FONT), 60);
        assert_eq!(char_width(&ragged_vp(), B::default(), FONT), 16);
    }

    #[test]
    fn position_saturates_at_coordinate_extremes() {
        // Movement clamps cursors at the i32 range; normalization of such
        // a cursor must saturate too instead of overflowing.
        let clamped = Point::new(i32::MIN, i32::MIN);
        let b = B::INVERT_HORIZONTAL | B::INVERT_VERTICAL;
        assert_eq!(
            normalised_position(clamped, &vp(), b),
            Point::new(i32::MAX, i32::MAX)
        );
        assert_eq!(
            normalised_position(clamped, &vp(), b | B::FLIP_XY),
            Point::new(i32::MAX, i32::MAX)
        );
        let far = Point::new(i32::MAX, i32::MAX);
        assert_eq!(
            normalised_position(far, &vp(), B::default()),
            Point::new(i32::MAX, i32::MAX)
        );
    }

    #[test]
    fn zero_sized_font_does_not_divide_by_zero() {
        let font = FontMetrics::new(0, 0);
        assert_eq!(x_adjustment(&vp(), font), 0);
        assert_eq!(char_width(&vp(), B::default(), font), 640);
    }
}
