// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Swipe: directional swipe recognition with tap pass-through.
//!
//! ## Overview
//!
//! A [`SwipeRecognizer`] watches one container for touch input and turns every
//! gesture into exactly one of two outcomes:
//!
//! - a `swipe` event carrying a [`SwipeDetail`] (direction, signed distance,
//!   duration, start and end samples), or
//! - a synthesized click, plus focus, on the element under the release point,
//!   so that taps on child items keep their click semantics.
//!
//! Recognition is switched off while the container holds an "active" item, so
//! taps can reach open content.
//!
//! ## Host capabilities
//!
//! The recognizer does no element lookup or event plumbing itself. Hosts
//! provide an [`ElementLocator`] (resolve the container, check for an active
//! item, hit test a point) and an [`EventBridge`] (subscribe to touch phases,
//! dispatch `swipe`, click and focus). The [`headless`] module has in-memory
//! versions of both.
//!
//! ## Classification
//!
//! [`classify`] is a pure function of [`SwipeConfig`], travel and duration. Two
//! policies are available through [`ClassifyPolicy`]:
//!
//! - [`ClassifyPolicy::RadiusDominance`] (default): total travel must reach the
//!   threshold within the allowed time, and the dominant axis picks the
//!   direction. Vertical wins exact ties. Travel with a zero component is
//!   never a swipe. Anything that is not a swipe is passed through as a tap.
//! - [`ClassifyPolicy::AxisRestraint`]: one axis must reach the threshold while
//!   the other stays within the restraint. Anything else is dropped.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_swipe::headless::{BridgeCall, HeadlessBridge, HeadlessScene};
//! use understory_swipe::{SwipeOptions, SwipeRecognizer, TouchEvent};
//!
//! let mut scene = HeadlessScene::new();
//! let list = scene.insert(None, Rect::new(0.0, 0.0, 320.0, 480.0), &["#list"]);
//! let row = scene.insert(Some(list), Rect::new(0.0, 0.0, 320.0, 60.0), &[".row"]);
//!
//! let mut recognizer = SwipeRecognizer::new(
//!     scene,
//!     HeadlessBridge::new(),
//!     SwipeOptions::new("#list", ".row", ".open"),
//! )
//! .unwrap();
//! recognizer.attach();
//! recognizer.bridge_mut().clear();
//!
//! // A short tap on the row is re-dispatched as a click.
//! let mut down = TouchEvent::start(40.0, 30.0, 0);
//! recognizer.handle(&mut down);
//! recognizer.handle(&mut TouchEvent::end(42.0, 31.0, 80));
//! assert!(down.default_prevented);
//! assert_eq!(
//!     recognizer.bridge().calls(),
//!     &[
//!         BridgeCall::Click { target: row, position: Point::new(42.0, 31.0) },
//!         BridgeCall::Focus(row),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classify;
mod config;
mod error;
pub mod headless;
mod host;
mod recognizer;
mod types;

pub use classify::{Verdict, classify};
pub use config::{
    ClassifyPolicy, DEFAULT_ALLOWED_TIME, DEFAULT_RESTRAINT, DEFAULT_THRESHOLD, SwipeConfig,
};
pub use error::{SelectorKind, SwipeError};
pub use host::{ElementLocator, EventBridge, ListenerOptions, Target};
pub use recognizer::{SwipeOptions, SwipeRecognizer};
pub use types::{Direction, GestureRecord, GestureSample, SwipeDetail, TouchEvent, TouchPhase};
