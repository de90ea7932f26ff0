// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture data carried through the recognizer.

use kurbo::{Point, Vec2};

/// Direction of a confirmed swipe.
///
/// Screen coordinates grow rightwards and downwards, so a negative horizontal
/// distance is [`Direction::Left`] and a negative vertical distance is [`Direction::Up`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal travel towards smaller `x`.
    Left,
    /// Horizontal travel towards larger `x`.
    Right,
    /// Vertical travel towards smaller `y`.
    Up,
    /// Vertical travel towards larger `y`.
    Down,
}

impl Direction {
    /// Returns `true` for [`Direction::Left`] and [`Direction::Right`].
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns `true` for [`Direction::Up`] and [`Direction::Down`].
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

/// A point-in-time touch reading.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Page-space position of the touch point.
    pub position: Point,
    /// Timestamp in milliseconds.
    pub timestamp: u64,
}

impl GestureSample {
    /// Create a sample at `(x, y)` taken at `timestamp` milliseconds.
    pub fn new(x: f64, y: f64, timestamp: u64) -> Self {
        Self {
            position: Point::new(x, y),
            timestamp,
        }
    }
}

/// Working state for a single gesture.
///
/// The record is a plain value: resetting it assigns a fresh [`GestureRecord::default`],
/// so no state survives from one gesture into the next.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureRecord {
    /// Direction assigned by classification, `None` until a swipe is confirmed.
    pub direction: Option<Direction>,
    /// Elapsed time between `start` and `end`, in milliseconds.
    pub duration: u64,
    /// Signed travel from `start` to `end`.
    pub distance: Vec2,
    /// Sample recorded when the gesture opened.
    pub start: GestureSample,
    /// Sample recorded when the gesture closed.
    pub end: GestureSample,
}

impl GestureRecord {
    /// A fresh record opened at `start`.
    pub fn started(start: GestureSample) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    /// Close the record at `end`, filling in distance and duration.
    ///
    /// Out-of-order timestamps saturate to a zero duration.
    pub fn close(&mut self, end: GestureSample) {
        self.end = end;
        self.distance = end.position - self.start.position;
        self.duration = end.timestamp.saturating_sub(self.start.timestamp);
    }

    /// Snapshot the record as a swipe payload, if a direction was confirmed.
    pub fn detail(&self) -> Option<SwipeDetail> {
        self.direction.map(|direction| SwipeDetail {
            direction,
            distance: self.distance,
            duration: self.duration,
            start: self.start,
            end: self.end,
        })
    }
}

/// Payload of an emitted `swipe` event.
///
/// This is an owned copy of the completed [`GestureRecord`]; later resets of the
/// recognizer never reach it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeDetail {
    /// Confirmed direction.
    pub direction: Direction,
    /// Signed travel from `start` to `end`.
    pub distance: Vec2,
    /// Elapsed time in milliseconds.
    pub duration: u64,
    /// Sample where the gesture opened.
    pub start: GestureSample,
    /// Sample where the gesture closed.
    pub end: GestureSample,
}

/// Touch lifecycle signal consumed by the recognizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TouchPhase {
    /// A finger touched the container.
    Start,
    /// The finger moved.
    Move,
    /// The platform aborted the touch.
    Abort,
    /// The finger was lifted.
    End,
}

impl TouchPhase {
    /// All phases, in the order the recognizer subscribes to them.
    pub const ALL: [Self; 4] = [Self::Start, Self::Move, Self::Abort, Self::End];
}

/// A single touch input delivered to the recognizer.
///
/// "Default prevented" lives on the event: the recognizer calls
/// [`TouchEvent::prevent_default`] while it owns the gesture, and the host
/// reads [`TouchEvent::default_prevented`] afterwards to decide whether to
/// scroll or select text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Lifecycle phase.
    pub phase: TouchPhase,
    /// Position and time of the changed touch.
    pub sample: GestureSample,
    /// Set when default platform handling must be suppressed.
    pub default_prevented: bool,
}

impl TouchEvent {
    /// Create an event with default handling still allowed.
    pub fn new(phase: TouchPhase, sample: GestureSample) -> Self {
        Self {
            phase,
            sample,
            default_prevented: false,
        }
    }

    /// Shorthand for a [`TouchPhase::Start`] event.
    pub fn start(x: f64, y: f64, timestamp: u64) -> Self {
        Self::new(TouchPhase::Start, GestureSample::new(x, y, timestamp))
    }

    /// Shorthand for a [`TouchPhase::Move`] event.
    pub fn moved(x: f64, y: f64, timestamp: u64) -> Self {
        Self::new(TouchPhase::Move, GestureSample::new(x, y, timestamp))
    }

    /// Shorthand for a [`TouchPhase::Abort`] event.
    pub fn abort(x: f64, y: f64, timestamp: u64) -> Self {
        Self::new(TouchPhase::Abort, GestureSample::new(x, y, timestamp))
    }

    /// Shorthand for a [`TouchPhase::End`] event.
    pub fn end(x: f64, y: f64, timestamp: u64) -> Self {
        Self::new(TouchPhase::End, GestureSample::new(x, y, timestamp))
    }

    /// Ask the host to skip its default handling (scrolling, text selection).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_computes_signed_distance_and_duration() {
        let mut record = GestureRecord::started(GestureSample::new(100.0, 100.0, 1000));
        record.close(GestureSample::new(10.0, 40.0, 1120));

        assert_eq!(record.distance, Vec2::new(-90.0, -60.0));
        assert_eq!(record.duration, 120);
        assert_eq!(record.direction, None);
    }

    #[test]
    fn close_saturates_backwards_time() {
        let mut record = GestureRecord::started(GestureSample::new(0.0, 0.0, 500));
        record.close(GestureSample::new(0.0, 0.0, 400));
        assert_eq!(record.duration, 0);
    }

    #[test]
    fn detail_requires_direction() {
        let mut record = GestureRecord::started(GestureSample::new(0.0, 0.0, 0));
        record.close(GestureSample::new(-90.0, -60.0, 120));
        assert!(record.detail().is_none());

        record.direction = Some(Direction::Left);
        let detail = record.detail().unwrap();

        // The payload is a copy: clearing the record leaves it untouched.
        record = GestureRecord::default();
        assert_eq!(record.direction, None);
        assert_eq!(detail.direction, Direction::Left);
        assert_eq!(detail.distance, Vec2::new(-90.0, -60.0));
        assert_eq!(detail.duration, 120);
    }

    #[test]
    fn started_record_does_not_inherit_previous_state() {
        let mut first = GestureRecord::started(GestureSample::new(5.0, 5.0, 10));
        first.close(GestureSample::new(200.0, 5.0, 50));
        first.direction = Some(Direction::Right);

        let second = GestureRecord::started(GestureSample::new(1.0, 2.0, 60));
        assert_eq!(second.direction, None);
        assert_eq!(second.distance, Vec2::ZERO);
        assert_eq!(second.end, GestureSample::default());
    }

    #[test]
    fn prevent_default_sets_flag() {
        let mut event = TouchEvent::moved(1.0, 2.0, 3);
        assert!(!event.default_prevented);
        event.prevent_default();
        assert!(event.default_prevented);
    }
}
