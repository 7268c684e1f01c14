//! Property tests for cursor normalization and edge resolution.

use proptest::prelude::*;

use vdu_context::testing::test_context;
use vdu_core::{CursorBehaviour, CursorType, Point, Viewport};

/// Any subset of the orientation flags.
fn arb_orientation() -> impl Strategy<Value = CursorBehaviour> {
    (0u8..8).prop_map(|bits| {
        let mut b = CursorBehaviour::empty();
        if bits & 1 != 0 {
            b |= CursorBehaviour::FLIP_XY;
        }
        if bits & 2 != 0 {
            b |= CursorBehaviour::INVERT_HORIZONTAL;
        }
        if bits & 4 != 0 {
            b |= CursorBehaviour::INVERT_VERTICAL;
        }
        b
    })
}

/// A viewport at least two 8x8 cells in each direction, inside a
/// 640x480 canvas.
fn arb_viewport() -> impl Strategy<Value = Viewport> {
    (0i32..320, 0i32..240, 16i32..320, 16i32..240)
        .prop_map(|(x1, y1, w, h)| Viewport::new(x1, y1, x1 + w - 1, y1 + h - 1))
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-700i32..1400, -500i32..1000).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    /// Homing lands on the origin cell for every orientation. On a
    /// non-inverted logical axis the normalized coordinate is exactly 0;
    /// on an inverted one the home cell's drawing origin normalizes to
    /// `cell − 1` pixels from the far edge.
    #[test]
    fn home_normalizes_to_the_origin_cell(flags in arb_orientation()) {
        let mut ctx = test_context();
        ctx.set_behaviour_flags(flags);
        ctx.cursor_home();

        let x_inverted = if flags.flip_xy() {
            flags.invert_vertical()
        } else {
            flags.invert_horizontal()
        };
        let y_inverted = if flags.flip_xy() {
            flags.invert_horizontal()
        } else {
            flags.invert_vertical()
        };
        let expected = Point::new(
            if x_inverted { 7 } else { 0 },
            if y_inverted { 7 } else { 0 },
        );
        prop_assert_eq!(ctx.normalised_position(), expected);

        prop_assert!(!ctx.cursor_off_left());
        prop_assert!(!ctx.cursor_off_right());
        prop_assert!(!ctx.cursor_off_top());
        prop_assert!(!ctx.cursor_off_bottom());
    }

    /// Flipped normalization is exactly unflipped normalization on the
    /// transposed point/viewport, with the inversion flags swapped.
    #[test]
    fn flip_is_transposition(
        p in arb_point(),
        vp in arb_viewport(),
        invert_h in any::<bool>(),
        invert_v in any::<bool>(),
    ) {
        let mut flipped = CursorBehaviour::FLIP_XY;
        let mut transposed = CursorBehaviour::empty();
        if invert_h {
            flipped |= CursorBehaviour::INVERT_HORIZONTAL;
            transposed |= CursorBehaviour::INVERT_VERTICAL;
        }
        if invert_v {
            flipped |= CursorBehaviour::INVERT_VERTICAL;
            transposed |= CursorBehaviour::INVERT_HORIZONTAL;
        }

        let a = vdu_context::normalise::normalised_position(p, &vp, flipped);
        let vp_t = Viewport::new(vp.y1, vp.x1, vp.y2, vp.x2);
        let b = vdu_context::normalise::normalised_position(
            Point::new(p.y, p.x),
            &vp_t,
            transposed,
        );
        prop_assert_eq!(a, b);
    }

    /// Wrapping always restores a stray graphics cursor to the viewport
    /// (unless special actions are suppressed, which is tested separately).
    #[test]
    fn wrap_restores_graphics_cursor(
        flags in arb_orientation(),
        p in arb_point(),
    ) {
        let mut ctx = test_context();
        ctx.set_behaviour_flags(flags);
        ctx.set_active_cursor(CursorType::Graphics);
        ctx.move_to(p);

        ctx.scroll_or_wrap();

        prop_assert!(!ctx.cursor_off_left());
        prop_assert!(!ctx.cursor_off_right());
        prop_assert!(!ctx.cursor_off_top());
        prop_assert!(!ctx.cursor_off_bottom());
    }

    /// A run of line feeds never leaves the text cursor outside the
    /// viewport, whatever the orientation: the viewport scrolls under it.
    #[test]
    fn line_feed_runs_stay_inside(
        flags in arb_orientation(),
        downs in 1usize..80,
    ) {
        let mut ctx = test_context();
        ctx.set_behaviour_flags(flags);
        ctx.cursor_home();
        for _ in 0..downs {
            ctx.cursor_down(false);
            prop_assert!(!ctx.cursor_off_bottom());
            prop_assert!(!ctx.cursor_off_top());
        }
    }

    /// Same for reverse line feeds.
    #[test]
    fn reverse_line_feed_runs_stay_inside(
        flags in arb_orientation(),
        ups in 1usize..80,
    ) {
        let mut ctx = test_context();
        ctx.set_behaviour_flags(flags);
        ctx.cursor_home();
        for _ in 0..ups {
            ctx.cursor_up(false);
            prop_assert!(!ctx.cursor_off_bottom());
            prop_assert!(!ctx.cursor_off_top());
        }
    }

    /// With Y_WRAP the text cursor wraps like the graphics cursor and the
    /// backend never scrolls.
    #[test]
    fn y_wrap_never_scrolls(downs in 1usize..80) {
        use vdu_context::testing::BackendCall;

        let mut ctx = test_context();
        ctx.set_behaviour_flags(CursorBehaviour::Y_WRAP);
        ctx.cursor_home();
        for _ in 0..downs {
            ctx.cursor_down(false);
        }
        prop_assert!(!ctx.cursor_off_bottom());
        let scrolled = ctx
            .backend()
            .calls
            .iter()
            .any(|c| matches!(c, BackendCall::ScrollRegion { .. }));
        prop_assert!(!scrolled);
    }
}
