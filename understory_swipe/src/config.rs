// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer configuration.

use crate::SwipeError;

/// Default minimum travel, in pixels, for a gesture to count as a swipe.
pub const DEFAULT_THRESHOLD: f64 = 85.0;

/// Default maximum duration, in milliseconds, for a gesture to count as a swipe.
pub const DEFAULT_ALLOWED_TIME: u64 = 300;

/// Default perpendicular drift, in pixels, tolerated by [`ClassifyPolicy::AxisRestraint`].
pub const DEFAULT_RESTRAINT: f64 = 75.0;

/// How a finished gesture is turned into a swipe.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ClassifyPolicy {
    /// Total travel (Euclidean) must reach the threshold; the dominant axis picks
    /// the direction, with vertical winning exact ties.
    ///
    /// Non-swipes are passed through as taps on the element under the release point.
    #[default]
    RadiusDominance,
    /// One axis must reach the threshold while the other stays within `restraint`.
    ///
    /// Non-swipes are dropped; no tap is passed through.
    AxisRestraint {
        /// Maximum perpendicular drift in pixels.
        restraint: f64,
    },
}

impl ClassifyPolicy {
    /// Whether gestures that do not qualify as swipes are re-dispatched as clicks.
    pub const fn passes_through_taps(&self) -> bool {
        matches!(self, Self::RadiusDominance)
    }
}

/// Thresholds and policy for a recognizer.
///
/// ```
/// use understory_swipe::{ClassifyPolicy, SwipeConfig};
///
/// let config = SwipeConfig::default().with_threshold(60.0).with_restraint(40.0);
/// assert_eq!(config.policy, ClassifyPolicy::AxisRestraint { restraint: 40.0 });
/// assert_eq!(config.allowed_time, 300);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum travel in pixels.
    pub threshold: f64,
    /// Maximum duration in milliseconds.
    pub allowed_time: u64,
    /// Classification policy.
    pub policy: ClassifyPolicy,
}

impl SwipeConfig {
    /// Radius policy with the default threshold and allowed time.
    pub const fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            allowed_time: DEFAULT_ALLOWED_TIME,
            policy: ClassifyPolicy::RadiusDominance,
        }
    }

    /// Replace the minimum travel.
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the maximum duration.
    pub const fn with_allowed_time(mut self, allowed_time: u64) -> Self {
        self.allowed_time = allowed_time;
        self
    }

    /// Switch to [`ClassifyPolicy::AxisRestraint`] with the given drift bound.
    pub const fn with_restraint(mut self, restraint: f64) -> Self {
        self.policy = ClassifyPolicy::AxisRestraint { restraint };
        self
    }

    /// Replace the policy.
    pub const fn with_policy(mut self, policy: ClassifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check that every bound is positive and finite.
    pub fn validate(&self) -> Result<(), SwipeError> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(SwipeError::InvalidConfig { field: "threshold" });
        }
        if self.allowed_time == 0 {
            return Err(SwipeError::InvalidConfig {
                field: "allowed_time",
            });
        }
        if let ClassifyPolicy::AxisRestraint { restraint } = self.policy
            && !(restraint.is_finite() && restraint > 0.0)
        {
            return Err(SwipeError::InvalidConfig { field: "restraint" });
        }
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::new()
    }
}
