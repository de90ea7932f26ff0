// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of a finished gesture.
//!
//! [`classify`] is a pure function of the configuration, the signed travel, and
//! the elapsed time. The recognizer calls it once per gesture, at release.
//!
//! ## Radius policy
//!
//! 1. Too slow (`duration > allowed_time`): [`Verdict::Tap`].
//! 2. Too short (`|distance| < threshold`): [`Verdict::Tap`].
//! 3. Otherwise the dominant axis picks the direction. Both axis checks are
//!    inclusive and the vertical one runs last, so `|dx| == |dy|` is vertical.
//! 4. A swipe is only confirmed when both components are non-zero. Travel along
//!    a perfectly horizontal or vertical line is a [`Verdict::Tap`].
//!
//! ## Axis policy
//!
//! A swipe needs one axis at or beyond the threshold while the other stays within
//! the restraint; horizontal is checked first. Anything else is [`Verdict::Ignore`].
//!
//! ```
//! use kurbo::Vec2;
//! use understory_swipe::{classify, Direction, SwipeConfig, Verdict};
//!
//! let config = SwipeConfig::default();
//! assert_eq!(
//!     classify(&config, Vec2::new(-90.0, -60.0), 120),
//!     Verdict::Swipe(Direction::Left)
//! );
//! // Exactly vertical travel is not a swipe under the radius policy.
//! assert_eq!(classify(&config, Vec2::new(0.0, 150.0), 120), Verdict::Tap);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::{ClassifyPolicy, Direction, SwipeConfig};

/// Outcome of classifying a finished gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Emit a `swipe` event in this direction.
    Swipe(Direction),
    /// Re-dispatch the release as a click on the element under it.
    Tap,
    /// Drop the gesture without emitting anything.
    Ignore,
}

/// Classify a gesture that travelled `distance` over `duration` milliseconds.
pub fn classify(config: &SwipeConfig, distance: Vec2, duration: u64) -> Verdict {
    match config.policy {
        ClassifyPolicy::RadiusDominance => radius_dominance(config, distance, duration),
        ClassifyPolicy::AxisRestraint { restraint } => {
            axis_restraint(config, restraint, distance, duration)
        }
    }
}

fn radius_dominance(config: &SwipeConfig, distance: Vec2, duration: u64) -> Verdict {
    if duration > config.allowed_time {
        return Verdict::Tap;
    }
    // Compare squared lengths.
    if distance.hypot2() < config.threshold * config.threshold {
        return Verdict::Tap;
    }

    let (ax, ay) = (distance.x.abs(), distance.y.abs());
    let mut direction = None;
    if ax >= ay {
        direction = Some(horizontal(distance.x));
    }
    if ay >= ax {
        direction = Some(vertical(distance.y));
    }

    match direction {
        Some(direction) if distance.x != 0.0 && distance.y != 0.0 => Verdict::Swipe(direction),
        _ => Verdict::Tap,
    }
}

fn axis_restraint(config: &SwipeConfig, restraint: f64, distance: Vec2, duration: u64) -> Verdict {
    if duration > config.allowed_time {
        return Verdict::Ignore;
    }

    let (ax, ay) = (distance.x.abs(), distance.y.abs());
    if ax >= config.threshold && ay <= restraint {
        Verdict::Swipe(horizontal(distance.x))
    } else if ay >= config.threshold && ax <= restraint {
        Verdict::Swipe(vertical(distance.y))
    } else {
        Verdict::Ignore
    }
}

fn horizontal(dx: f64) -> Direction {
    if dx < 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

fn vertical(dy: f64) -> Direction {
    if dy < 0.0 { Direction::Up } else { Direction::Down }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_RESTRAINT;

    fn radius() -> SwipeConfig {
        SwipeConfig::default()
    }

    fn axis() -> SwipeConfig {
        SwipeConfig::default().with_restraint(DEFAULT_RESTRAINT)
    }

    #[test]
    fn diagonal_left_swipe() {
        assert_eq!(
            classify(&radius(), Vec2::new(-90.0, -60.0), 120),
            Verdict::Swipe(Direction::Left)
        );
    }

    #[test]
    fn dominant_axis_picks_direction() {
        let config = radius();
        assert_eq!(
            classify(&config, Vec2::new(120.0, 10.0), 100),
            Verdict::Swipe(Direction::Right)
        );
        assert_eq!(
            classify(&config, Vec2::new(10.0, 120.0), 100),
            Verdict::Swipe(Direction::Down)
        );
        assert_eq!(
            classify(&config, Vec2::new(-10.0, -120.0), 100),
            Verdict::Swipe(Direction::Up)
        );
    }

    #[test]
    fn equal_axes_resolve_vertically() {
        let config = radius();
        assert_eq!(
            classify(&config, Vec2::new(-70.0, 70.0), 100),
            Verdict::Swipe(Direction::Down)
        );
        assert_eq!(
            classify(&config, Vec2::new(70.0, -70.0), 100),
            Verdict::Swipe(Direction::Up)
        );
    }

    #[test]
    fn below_threshold_is_tap() {
        // Magnitude 70 and 80 against a threshold of 85.
        assert_eq!(classify(&radius(), Vec2::new(0.0, -70.0), 100), Verdict::Tap);
        assert_eq!(classify(&radius(), Vec2::new(-80.0, 0.0), 150), Verdict::Tap);
        assert_eq!(classify(&radius(), Vec2::new(40.0, 40.0), 100), Verdict::Tap);
    }

    #[test]
    fn exact_threshold_counts() {
        // 51^2 + 68^2 = 85^2
        assert_eq!(
            classify(&radius(), Vec2::new(51.0, 68.0), 100),
            Verdict::Swipe(Direction::Down)
        );
    }

    #[test]
    fn orthogonal_travel_is_tap() {
        let config = radius();
        assert_eq!(classify(&config, Vec2::new(200.0, 0.0), 100), Verdict::Tap);
        assert_eq!(classify(&config, Vec2::new(0.0, -200.0), 100), Verdict::Tap);
    }

    #[test]
    fn too_slow_is_tap() {
        assert_eq!(classify(&radius(), Vec2::new(0.0, 150.0), 400), Verdict::Tap);
        assert_eq!(classify(&radius(), Vec2::new(-90.0, -60.0), 301), Verdict::Tap);
        assert_eq!(
            classify(&radius(), Vec2::new(-90.0, -60.0), 300),
            Verdict::Swipe(Direction::Left)
        );
    }

    #[test]
    fn axis_policy_accepts_orthogonal_travel() {
        let config = axis();
        assert_eq!(
            classify(&config, Vec2::new(200.0, 0.0), 100),
            Verdict::Swipe(Direction::Right)
        );
        assert_eq!(
            classify(&config, Vec2::new(0.0, -200.0), 100),
            Verdict::Swipe(Direction::Up)
        );
    }

    #[test]
    fn axis_policy_bounds_drift() {
        let config = axis();
        assert_eq!(
            classify(&config, Vec2::new(-100.0, 75.0), 100),
            Verdict::Swipe(Direction::Left)
        );
        assert_eq!(classify(&config, Vec2::new(-100.0, 76.0), 100), Verdict::Ignore);
    }

    #[test]
    fn axis_policy_prefers_horizontal() {
        // Both axes qualify when the restraint exceeds the threshold.
        let config = SwipeConfig::default().with_restraint(200.0);
        assert_eq!(
            classify(&config, Vec2::new(90.0, 120.0), 100),
            Verdict::Swipe(Direction::Right)
        );
    }

    #[test]
    fn axis_policy_ignores_short_and_slow() {
        let config = axis();
        assert_eq!(classify(&config, Vec2::new(30.0, 0.0), 100), Verdict::Ignore);
        assert_eq!(classify(&config, Vec2::new(200.0, 0.0), 301), Verdict::Ignore);
    }
}
