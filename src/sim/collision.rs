//! Collision predicates for the physics step
//!
//! All checks sample the ball at discrete per-tick positions; there is no
//! continuous collision resolution, so a fast enough ball can tunnel through
//! a thin block. Accepted limitation.

use glam::Vec2;

use super::state::Block;
use crate::consts::*;

/// Ball center strictly inside the block's rectangle
pub fn ball_inside_block(ball_pos: Vec2, block: &Block) -> bool {
    ball_pos.x > block.x
        && ball_pos.x < block.x + block.width
        && ball_pos.y > block.y
        && ball_pos.y < block.y + block.height
}

/// Would the next horizontal position cross the left or right canvas edge?
pub fn hits_side_wall(pos: Vec2, vel: Vec2, canvas_width: f32) -> bool {
    let next_x = pos.x + vel.x;
    next_x > canvas_width - BALL_RADIUS || next_x < BALL_RADIUS
}

/// Would the next vertical position go above the top edge?
pub fn hits_top_wall(pos: Vec2, vel: Vec2) -> bool {
    pos.y + vel.y < BALL_RADIUS
}

/// Would the next vertical position reach the paddle's vertical band?
pub fn reaches_paddle_band(pos: Vec2, vel: Vec2, canvas_height: f32) -> bool {
    pos.y + vel.y > canvas_height - BALL_RADIUS - PADDLE_BOTTOM_OFFSET
}

/// Is the ball's horizontal position within the paddle's span?
pub fn within_paddle_span(ball_x: f32, paddle_x: f32) -> bool {
    ball_x > paddle_x && ball_x < paddle_x + PADDLE_WIDTH
}

/// Horizontal velocity after a paddle hit.
///
/// The hit offset ratio across the paddle (0 at the left edge, 1 at the
/// right) maps linearly onto [-2.5, +2.5]; a dead-center hit goes straight
/// up.
pub fn paddle_deflection(ball_x: f32, paddle_x: f32) -> f32 {
    let ratio = (ball_x - paddle_x) / PADDLE_WIDTH;
    2.0 * PADDLE_DEFLECT_RANGE * (ratio - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BlockColor;
    use proptest::prelude::*;

    fn block(x: f32, y: f32, w: f32, h: f32) -> Block {
        Block {
            x,
            y,
            width: w,
            height: h,
            color: BlockColor::Red,
            alive: true,
        }
    }

    #[test]
    fn test_ball_inside_block_strict() {
        let b = block(100.0, 100.0, 10.0, 10.0);
        assert!(ball_inside_block(Vec2::new(105.0, 105.0), &b));
        // Edges are exclusive
        assert!(!ball_inside_block(Vec2::new(100.0, 105.0), &b));
        assert!(!ball_inside_block(Vec2::new(110.0, 105.0), &b));
        assert!(!ball_inside_block(Vec2::new(105.0, 100.0), &b));
        assert!(!ball_inside_block(Vec2::new(105.0, 110.0), &b));
        assert!(!ball_inside_block(Vec2::new(50.0, 50.0), &b));
    }

    #[test]
    fn test_side_wall_hits() {
        let width = 800.0;
        assert!(hits_side_wall(Vec2::new(787.0, 100.0), Vec2::new(6.0, 0.0), width));
        assert!(hits_side_wall(Vec2::new(12.0, 100.0), Vec2::new(-6.0, 0.0), width));
        assert!(!hits_side_wall(Vec2::new(400.0, 100.0), Vec2::new(6.0, 0.0), width));
    }

    #[test]
    fn test_top_wall_hit() {
        assert!(hits_top_wall(Vec2::new(400.0, 12.0), Vec2::new(0.0, -8.0)));
        assert!(!hits_top_wall(Vec2::new(400.0, 100.0), Vec2::new(0.0, -8.0)));
    }

    #[test]
    fn test_paddle_deflection_scenarios() {
        let paddle_x = 340.0;
        // Left edge, center, right edge of a 120-wide paddle
        assert!((paddle_deflection(340.0, paddle_x) - (-2.5)).abs() < 1e-6);
        assert!((paddle_deflection(400.0, paddle_x)).abs() < 1e-6);
        assert!((paddle_deflection(460.0, paddle_x) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_within_paddle_span() {
        assert!(within_paddle_span(400.0, 340.0));
        assert!(!within_paddle_span(339.0, 340.0));
        assert!(!within_paddle_span(461.0, 340.0));
    }

    proptest! {
        #[test]
        fn prop_deflection_bounded(offset in 0.0f32..=PADDLE_WIDTH) {
            let v = paddle_deflection(340.0 + offset, 340.0);
            prop_assert!(v >= -PADDLE_DEFLECT_RANGE - 1e-4);
            prop_assert!(v <= PADDLE_DEFLECT_RANGE + 1e-4);
        }

        #[test]
        fn prop_deflection_monotonic(a in 0.0f32..=PADDLE_WIDTH, b in 0.0f32..=PADDLE_WIDTH) {
            // Offsets closer than this can round to the same deflection
            prop_assume!(b - a >= 0.5);
            let va = paddle_deflection(340.0 + a, 340.0);
            let vb = paddle_deflection(340.0 + b, 340.0);
            prop_assert!(va < vb);
        }
    }
}
