//! Collision response for balls
//!
//! Bounces don't reflect the incoming angle. The struck rectangle is split
//! into three equal zones and the zone under the ball's centre picks the new
//! horizontal direction; the vertical direction always flips.

use glam::IVec2;

use super::rect::Rect;

/// Horizontal direction for a ball hitting `target`: -1 on the left third,
/// 0 on the middle third, +1 on the right third.
///
/// Zone width uses integer division, so any remainder columns belong to the
/// right zone.
pub fn zone_direction(ball: &Rect, target: &Rect) -> i32 {
    let ball_center = ball.center_x();
    let zone_width = target.w / 3;

    if ball_center < target.x + zone_width {
        -1
    } else if ball_center < target.x + 2 * zone_width {
        0
    } else {
        1
    }
}

/// Direction after bouncing off `target`
#[inline]
pub fn bounce_direction(dir: IVec2, ball: &Rect, target: &Rect) -> IVec2 {
    IVec2::new(zone_direction(ball, target), -dir.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zones() {
        let paddle = Rect::new(10, 20, 12, 1);
        // zones: [10, 14) left, [14, 18) middle, [18, 22) right
        assert_eq!(zone_direction(&Rect::new(9, 19, 2, 1), &paddle), -1);
        assert_eq!(zone_direction(&Rect::new(12, 19, 2, 1), &paddle), -1);
        assert_eq!(zone_direction(&Rect::new(13, 19, 2, 1), &paddle), 0);
        assert_eq!(zone_direction(&Rect::new(16, 19, 2, 1), &paddle), 0);
        assert_eq!(zone_direction(&Rect::new(17, 19, 2, 1), &paddle), 1);
        assert_eq!(zone_direction(&Rect::new(21, 19, 2, 1), &paddle), 1);
    }

    #[test]
    fn test_bounce_flips_vertical() {
        let brick = Rect::new(10, 5, 12, 1);
        let ball = Rect::new(19, 6, 2, 1);
        let dir = bounce_direction(IVec2::new(1, -1), &ball, &brick);
        assert_eq!(dir, IVec2::new(1, 1));

        let dir = bounce_direction(IVec2::new(-1, 1), &ball, &brick);
        assert_eq!(dir, IVec2::new(1, -1));
    }

    #[test]
    fn test_narrow_target_has_only_right_zone() {
        // w / 3 == 0: every ball lands in the right zone
        let target = Rect::new(10, 5, 2, 1);
        assert_eq!(zone_direction(&Rect::new(9, 4, 2, 1), &target), 1);
    }

    proptest! {
        #[test]
        fn bounce_stays_in_unit_range(
            dx in -1i32..=1,
            dy in prop::sample::select(vec![-1i32, 1]),
            bx in -20i32..60,
            tx in 0i32..40,
            tw in 1i32..40,
        ) {
            let ball = Rect::new(bx, 4, 2, 1);
            let target = Rect::new(tx, 5, tw, 1);
            let dir = bounce_direction(IVec2::new(dx, dy), &ball, &target);
            prop_assert!((-1..=1).contains(&dir.x));
            prop_assert_eq!(dir.y, -dy);
        }
    }
}
