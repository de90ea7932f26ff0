// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe recognizer state machine.
//!
//! A recognizer is either idle or tracking one gesture. A start sample opens a
//! gesture; an end sample closes and classifies it; an abort discards it. Moves
//! only keep the gesture exclusive by preventing the default.
//!
//! While the container holds an active item (see
//! [`ElementLocator::is_active_child_present`]) every sample is left alone:
//! no state changes, no events, and the default is not prevented, so taps
//! reach the open item normally.

use alloc::string::String;
use core::fmt;

use kurbo::Point;
use log::{debug, trace};

use crate::classify::{Verdict, classify};
use crate::host::{ElementLocator, EventBridge, ListenerOptions, Target};
use crate::{
    GestureRecord, GestureSample, SelectorKind, SwipeConfig, SwipeError, TouchEvent, TouchPhase,
};

/// Construction parameters for a [`SwipeRecognizer`].
#[derive(Clone, Debug)]
pub struct SwipeOptions<E> {
    /// Container to watch.
    pub target: Target<E>,
    /// Selector of the swipeable items inside the container.
    pub item_selector: Option<String>,
    /// Selector that marks an item as active.
    pub active_selector: Option<String>,
    /// Thresholds and policy.
    pub config: SwipeConfig,
}

impl<E> SwipeOptions<E> {
    /// Options with both selectors set and the default configuration.
    pub fn new(
        target: impl Into<Target<E>>,
        item_selector: impl Into<String>,
        active_selector: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            item_selector: Some(item_selector.into()),
            active_selector: Some(active_selector.into()),
            config: SwipeConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }
}

/// Turns touch samples on one container into `swipe` events or pass-through clicks.
///
/// ```
/// use kurbo::Rect;
/// use understory_swipe::headless::{HeadlessBridge, HeadlessScene};
/// use understory_swipe::{Direction, SwipeOptions, SwipeRecognizer, TouchEvent};
///
/// let mut scene = HeadlessScene::new();
/// scene.insert(None, Rect::new(0.0, 0.0, 400.0, 400.0), &["#list"]);
///
/// let options = SwipeOptions::new("#list", ".item", ".open");
/// let mut recognizer = SwipeRecognizer::new(scene, HeadlessBridge::new(), options).unwrap();
/// recognizer.attach();
///
/// recognizer.handle(&mut TouchEvent::start(100.0, 100.0, 0));
/// recognizer.handle(&mut TouchEvent::end(10.0, 40.0, 120));
///
/// let swipe = recognizer.bridge().swipes().next().unwrap();
/// assert_eq!(swipe.direction, Direction::Left);
/// assert_eq!(swipe.duration, 120);
/// ```
pub struct SwipeRecognizer<L: ElementLocator, B> {
    locator: L,
    bridge: B,
    container: L::Element,
    item_selector: String,
    active_selector: String,
    config: SwipeConfig,
    record: GestureRecord,
    /// A gesture is open.
    swiping: bool,
    /// The gesture being closed is to be re-dispatched as a click.
    pending_click: bool,
    attached: bool,
}

impl<L, B> SwipeRecognizer<L, B>
where
    L: ElementLocator,
    B: EventBridge<L::Element>,
{
    /// Create a detached recognizer.
    ///
    /// Fails if the target does not resolve, if either selector is absent or
    /// empty, or if the configuration is out of range. Nothing is subscribed
    /// until [`attach`](Self::attach).
    pub fn new(
        locator: L,
        bridge: B,
        options: SwipeOptions<L::Element>,
    ) -> Result<Self, SwipeError> {
        let container = locator
            .resolve(&options.target)
            .ok_or(SwipeError::InvalidTarget)?;
        let item_selector = non_empty(options.item_selector, SelectorKind::Item)?;
        let active_selector = non_empty(options.active_selector, SelectorKind::Active)?;
        options.config.validate()?;

        Ok(Self {
            locator,
            bridge,
            container,
            item_selector,
            active_selector,
            config: options.config,
            record: GestureRecord::default(),
            swiping: false,
            pending_click: false,
            attached: false,
        })
    }

    /// Subscribe to all four touch phases on the container.
    ///
    /// Calling this while attached does nothing.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        for phase in TouchPhase::ALL {
            self.bridge
                .subscribe(&self.container, phase, ListenerOptions::NON_PASSIVE);
        }
        self.attached = true;
    }

    /// Unsubscribe from the container.
    ///
    /// Calling this while detached does nothing. Any open gesture is discarded.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for phase in TouchPhase::ALL {
            self.bridge
                .unsubscribe(&self.container, phase, ListenerOptions::NON_PASSIVE);
        }
        self.attached = false;
        self.reset();
    }

    /// Whether the recognizer is currently subscribed.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feed one touch event.
    ///
    /// Events delivered while detached are ignored.
    pub fn handle(&mut self, event: &mut TouchEvent) {
        if !self.attached {
            return;
        }
        match event.phase {
            TouchPhase::Start => self.on_start(event),
            TouchPhase::Move => self.on_move(event),
            TouchPhase::Abort => self.on_abort(event),
            TouchPhase::End => self.on_end(event),
        }
    }

    /// Open a gesture at the event's sample, unless one is already open.
    fn on_start(&mut self, event: &mut TouchEvent) {
        if self.is_suppressed() {
            return;
        }
        event.prevent_default();
        self.pending_click = false;

        if !self.swiping {
            self.record = GestureRecord::started(event.sample);
            self.swiping = true;
            trace!("gesture started at {:?}", event.sample.position);
        }
    }

    /// Keep the gesture exclusive to the recognizer.
    fn on_move(&mut self, event: &mut TouchEvent) {
        if self.is_suppressed() {
            return;
        }
        event.prevent_default();

        if !self.swiping {
            self.record.direction = None;
        }
    }

    /// Discard the open gesture without emitting anything.
    fn on_abort(&mut self, event: &mut TouchEvent) {
        if self.is_suppressed() {
            return;
        }
        event.prevent_default();

        if self.swiping {
            trace!("gesture aborted");
        }
        self.reset();
    }

    /// Close and classify the open gesture.
    ///
    /// Emits a `swipe` for a confirmed swipe. Otherwise, under a policy that
    /// passes taps through, clicks and focuses the element under the release
    /// point. A release with no open gesture is treated as a tap.
    fn on_end(&mut self, event: &mut TouchEvent) {
        if self.is_suppressed() {
            return;
        }
        event.prevent_default();

        let release = event.sample;
        if self.swiping {
            self.record.close(release);
            let verdict = classify(&self.config, self.record.distance, self.record.duration);
            debug!(
                "gesture ended: distance={:?} duration={}ms verdict={verdict:?}",
                self.record.distance, self.record.duration
            );
            match verdict {
                Verdict::Swipe(direction) => {
                    self.record.direction = Some(direction);
                    if let Some(detail) = self.record.detail() {
                        self.bridge.dispatch_swipe(&self.container, detail);
                    }
                }
                Verdict::Tap => self.pending_click = true,
                Verdict::Ignore => {}
            }
        } else if self.config.policy.passes_through_taps() {
            trace!("release without an open gesture");
            self.pending_click = true;
        }

        if self.pending_click {
            self.click_through(release);
        }
        self.pending_click = false;
        self.reset();
    }

    /// The resolved container.
    pub fn container(&self) -> &L::Element {
        &self.container
    }

    /// The configuration this recognizer was built with.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The element locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Mutable access to the element locator, for hosts that own their tree through it.
    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }

    /// The event bridge.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Mutable access to the event bridge.
    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    /// Detach and give back the collaborators.
    pub fn into_parts(mut self) -> (L, B) {
        self.detach();
        (self.locator, self.bridge)
    }

    fn is_suppressed(&self) -> bool {
        self.locator.is_active_child_present(
            &self.container,
            &self.item_selector,
            &self.active_selector,
        )
    }

    fn click_through(&mut self, release: GestureSample) {
        let position: Point = release.position;
        match self.locator.element_at_point(position) {
            Some(target) => {
                debug!("passing tap through at {position:?}");
                self.bridge.dispatch_click(&target, position);
                self.bridge.focus(&target);
            }
            None => trace!("no element under tap at {position:?}"),
        }
    }

    fn reset(&mut self) {
        self.record = GestureRecord::default();
        self.swiping = false;
    }
}

impl<L, B> fmt::Debug for SwipeRecognizer<L, B>
where
    L: ElementLocator,
    L::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRecognizer")
            .field("container", &self.container)
            .field("item_selector", &self.item_selector)
            .field("active_selector", &self.active_selector)
            .field("config", &self.config)
            .field("swiping", &self.swiping)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

fn non_empty(selector: Option<String>, kind: SelectorKind) -> Result<String, SwipeError> {
    selector
        .filter(|s| !s.is_empty())
        .ok_or(SwipeError::MissingSelector(kind))
}
