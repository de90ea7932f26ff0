// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the recognizer needs from its host.
//!
//! The recognizer never queries a UI tree or an event system directly. Hosts
//! implement [`ElementLocator`] over their element tree (a DOM, a box tree,
//! a widget tree) and [`EventBridge`] over their event system, then feed
//! [`TouchEvent`](crate::TouchEvent)s to [`SwipeRecognizer::handle`](crate::SwipeRecognizer::handle).

use alloc::string::String;

use kurbo::Point;

use crate::{SwipeDetail, TouchPhase};

/// How the container to watch is named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<E> {
    /// A selector the locator resolves.
    Selector(String),
    /// An element handle the host already holds.
    Element(E),
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.into())
    }
}

/// Read-only queries against the host's element tree.
pub trait ElementLocator {
    /// Handle to an element in the host tree.
    type Element;

    /// Resolve a target to a concrete on-screen element.
    fn resolve(&self, target: &Target<Self::Element>) -> Option<Self::Element>;

    /// Whether `container` has a descendant matching both `item_selector` and
    /// `active_selector`.
    fn is_active_child_present(
        &self,
        container: &Self::Element,
        item_selector: &str,
        active_selector: &str,
    ) -> bool;

    /// Topmost element under `point`, in page coordinates.
    fn element_at_point(&self, point: Point) -> Option<Self::Element>;
}

/// Listener registration options.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// A passive listener promises never to prevent the default.
    pub passive: bool,
}

impl ListenerOptions {
    /// Options for listeners that may call [`TouchEvent::prevent_default`](crate::TouchEvent::prevent_default).
    pub const NON_PASSIVE: Self = Self { passive: false };
}

/// Subscriptions and outbound events on the host's event system.
///
/// Implementations own whatever branching their platform needs to build
/// custom or synthetic events.
pub trait EventBridge<E> {
    /// Start delivering `phase` events on `container`.
    fn subscribe(&mut self, container: &E, phase: TouchPhase, options: ListenerOptions);

    /// Stop delivering `phase` events on `container`.
    fn unsubscribe(&mut self, container: &E, phase: TouchPhase, options: ListenerOptions);

    /// Dispatch a `swipe` event on `container` carrying `detail`.
    fn dispatch_swipe(&mut self, container: &E, detail: SwipeDetail);

    /// Dispatch a synthetic, bubbling click on `target` at `position`.
    fn dispatch_click(&mut self, target: &E, position: Point);

    /// Move input focus to `target`.
    fn focus(&mut self, target: &E);
}
