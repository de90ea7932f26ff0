// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host: an element scene and a recording event bridge.
//!
//! [`HeadlessScene`] is a flat list of rectangles with parent links and opaque
//! selector tokens. A selector matches an item when the item carries exactly
//! that token; there is no CSS parsing. Later inserts sit above earlier ones
//! for [`element_at_point`](ElementLocator::element_at_point).
//!
//! [`HeadlessBridge`] records every call as a [`BridgeCall`] so tests can
//! assert on the exact sequence of subscriptions and emitted events.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_swipe::ElementLocator;
//! use understory_swipe::headless::HeadlessScene;
//!
//! let mut scene = HeadlessScene::new();
//! let list = scene.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0), &["#list"]);
//! let card = scene.insert(Some(list), Rect::new(0.0, 0.0, 100.0, 50.0), &[".card"]);
//!
//! assert_eq!(scene.element_at_point(Point::new(10.0, 10.0)), Some(card));
//! assert_eq!(scene.element_at_point(Point::new(10.0, 80.0)), Some(list));
//! assert!(!scene.is_active_child_present(&list, ".card", ".open"));
//!
//! scene.add_selector(card, ".open");
//! assert!(scene.is_active_child_present(&list, ".card", ".open"));
//! ```

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::host::{ElementLocator, EventBridge, ListenerOptions, Target};
use crate::{SwipeDetail, TouchPhase};

/// Handle to an item in a [`HeadlessScene`].
pub type HeadlessId = u32;

/// One element of a [`HeadlessScene`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessItem {
    /// Parent element, if any.
    pub parent: Option<HeadlessId>,
    /// Page-space bounds.
    pub bounds: Rect,
    /// Selector tokens this item matches.
    pub selectors: BTreeSet<String>,
}

/// A minimal element tree implementing [`ElementLocator`].
#[derive(Clone, Debug, Default)]
pub struct HeadlessScene {
    items: Vec<HeadlessItem>,
}

impl HeadlessScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item on top of all existing items and return its id.
    pub fn insert(
        &mut self,
        parent: Option<HeadlessId>,
        bounds: Rect,
        selectors: &[&str],
    ) -> HeadlessId {
        let id = HeadlessId::try_from(self.items.len()).expect("headless scene id overflow");
        self.items.push(HeadlessItem {
            parent,
            bounds,
            selectors: selectors.iter().map(|s| String::from(*s)).collect(),
        });
        id
    }

    /// The item for `id`, if it exists.
    pub fn get(&self, id: HeadlessId) -> Option<&HeadlessItem> {
        self.items.get(usize::try_from(id).ok()?)
    }

    /// Add a selector token to an item. Returns `false` if the item does not exist.
    pub fn add_selector(&mut self, id: HeadlessId, selector: &str) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.selectors.insert(selector.into());
                true
            }
            None => false,
        }
    }

    /// Remove a selector token from an item. Returns `true` if it was present.
    pub fn remove_selector(&mut self, id: HeadlessId, selector: &str) -> bool {
        self.get_mut(id)
            .is_some_and(|item| item.selectors.remove(selector))
    }

    /// Whether `id` carries `selector`.
    pub fn matches(&self, id: HeadlessId, selector: &str) -> bool {
        self.get(id)
            .is_some_and(|item| item.selectors.contains(selector))
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_descendant(&self, id: HeadlessId, ancestor: HeadlessId) -> bool {
        let mut current = self.get(id).and_then(|item| item.parent);
        // Bounded walk so a malformed parent cycle cannot hang.
        for _ in 0..self.items.len() {
            match current {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => current = self.get(parent).and_then(|item| item.parent),
                None => return false,
            }
        }
        false
    }

    fn get_mut(&mut self, id: HeadlessId) -> Option<&mut HeadlessItem> {
        self.items.get_mut(usize::try_from(id).ok()?)
    }

    fn ids(&self) -> impl DoubleEndedIterator<Item = HeadlessId> + '_ {
        (0..self.items.len()).filter_map(|i| HeadlessId::try_from(i).ok())
    }
}

impl ElementLocator for HeadlessScene {
    type Element = HeadlessId;

    fn resolve(&self, target: &Target<HeadlessId>) -> Option<HeadlessId> {
        match target {
            Target::Selector(selector) => self.ids().find(|&id| self.matches(id, selector)),
            Target::Element(id) => self.get(*id).map(|_| *id),
        }
    }

    fn is_active_child_present(
        &self,
        container: &HeadlessId,
        item_selector: &str,
        active_selector: &str,
    ) -> bool {
        self.ids().any(|id| {
            self.is_descendant(id, *container)
                && self.matches(id, item_selector)
                && self.matches(id, active_selector)
        })
    }

    fn element_at_point(&self, point: Point) -> Option<HeadlessId> {
        self.ids()
            .rev()
            .find(|&id| self.get(id).is_some_and(|item| item.bounds.contains(point)))
    }
}

/// A call made on a [`HeadlessBridge`].
#[derive(Clone, Debug, PartialEq)]
pub enum BridgeCall {
    /// [`EventBridge::subscribe`].
    Subscribe {
        /// Container element.
        container: HeadlessId,
        /// Subscribed phase.
        phase: TouchPhase,
        /// Listener options.
        options: ListenerOptions,
    },
    /// [`EventBridge::unsubscribe`].
    Unsubscribe {
        /// Container element.
        container: HeadlessId,
        /// Unsubscribed phase.
        phase: TouchPhase,
        /// Listener options.
        options: ListenerOptions,
    },
    /// [`EventBridge::dispatch_swipe`].
    Swipe {
        /// Container element.
        container: HeadlessId,
        /// Swipe payload.
        detail: SwipeDetail,
    },
    /// [`EventBridge::dispatch_click`].
    Click {
        /// Clicked element.
        target: HeadlessId,
        /// Click position.
        position: Point,
    },
    /// [`EventBridge::focus`].
    Focus(HeadlessId),
}

/// An [`EventBridge`] that records calls and tracks live subscriptions.
#[derive(Clone, Debug, Default)]
pub struct HeadlessBridge {
    calls: Vec<BridgeCall>,
    subscriptions: BTreeSet<(HeadlessId, TouchPhase)>,
}

impl HeadlessBridge {
    /// Create a bridge with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> &[BridgeCall] {
        &self.calls
    }

    /// Forget recorded calls. Live subscriptions are kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Whether `phase` is currently subscribed on `container`.
    pub fn is_subscribed(&self, container: HeadlessId, phase: TouchPhase) -> bool {
        self.subscriptions.contains(&(container, phase))
    }

    /// Payloads of recorded swipes.
    pub fn swipes(&self) -> impl Iterator<Item = &SwipeDetail> + '_ {
        self.calls.iter().filter_map(|call| match call {
            BridgeCall::Swipe { detail, .. } => Some(detail),
            _ => None,
        })
    }

    /// Targets and positions of recorded clicks.
    pub fn clicks(&self) -> impl Iterator<Item = (HeadlessId, Point)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            BridgeCall::Click { target, position } => Some((*target, *position)),
            _ => None,
        })
    }
}

impl EventBridge<HeadlessId> for HeadlessBridge {
    fn subscribe(&mut self, container: &HeadlessId, phase: TouchPhase, options: ListenerOptions) {
        self.subscriptions.insert((*container, phase));
        self.calls.push(BridgeCall::Subscribe {
            container: *container,
            phase,
            options,
        });
    }

    fn unsubscribe(&mut self, container: &HeadlessId, phase: TouchPhase, options: ListenerOptions) {
        self.subscriptions.remove(&(*container, phase));
        self.calls.push(BridgeCall::Unsubscribe {
            container: *container,
            phase,
            options,
        });
    }

    fn dispatch_swipe(&mut self, container: &HeadlessId, detail: SwipeDetail) {
        self.calls.push(BridgeCall::Swipe {
            container: *container,
            detail,
        });
    }

    fn dispatch_click(&mut self, target: &HeadlessId, position: Point) {
        self.calls.push(BridgeCall::Click {
            target: *target,
            position,
        });
    }

    fn focus(&mut self, target: &HeadlessId) {
        self.calls.push(BridgeCall::Focus(*target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> (HeadlessScene, HeadlessId, HeadlessId, HeadlessId) {
        let mut scene = HeadlessScene::new();
        let root = scene.insert(None, Rect::new(0.0, 0.0, 300.0, 300.0), &["#root"]);
        let list = scene.insert(Some(root), Rect::new(0.0, 0.0, 200.0, 200.0), &["#list"]);
        let item = scene.insert(
            Some(list),
            Rect::new(0.0, 0.0, 200.0, 100.0),
            &[".item", ".open"],
        );
        (scene, root, list, item)
    }

    #[test]
    fn resolve_by_selector_and_handle() {
        let (scene, _, list, _) = scene();
        assert_eq!(scene.resolve(&Target::from("#list")), Some(list));
        assert_eq!(scene.resolve(&Target::Element(list)), Some(list));
        assert_eq!(scene.resolve(&Target::from("#nope")), None);
        assert_eq!(scene.resolve(&Target::Element(42)), None);
    }

    #[test]
    fn active_child_must_be_descendant() {
        let (mut scene, root, list, item) = scene();
        assert!(scene.is_active_child_present(&list, ".item", ".open"));
        assert!(scene.is_active_child_present(&root, ".item", ".open"));
        assert!(!scene.is_active_child_present(&item, ".item", ".open"));

        assert!(scene.remove_selector(item, ".open"));
        assert!(!scene.remove_selector(item, ".open"));
        assert!(!scene.is_active_child_present(&list, ".item", ".open"));
    }

    #[test]
    fn topmost_item_wins_hit_test() {
        let (scene, root, list, item) = scene();
        assert_eq!(scene.element_at_point(Point::new(10.0, 10.0)), Some(item));
        assert_eq!(scene.element_at_point(Point::new(10.0, 150.0)), Some(list));
        assert_eq!(scene.element_at_point(Point::new(250.0, 250.0)), Some(root));
        assert_eq!(scene.element_at_point(Point::new(400.0, 400.0)), None);
    }

    #[test]
    fn parent_cycle_terminates() {
        let mut scene = HeadlessScene::new();
        let a = scene.insert(Some(1), Rect::ZERO, &[]);
        let b = scene.insert(Some(a), Rect::ZERO, &[]);
        assert!(scene.is_descendant(a, b));
        assert!(!scene.is_descendant(a, 7));
    }

    #[test]
    fn bridge_tracks_subscriptions() {
        let mut bridge = HeadlessBridge::new();
        bridge.subscribe(&3, TouchPhase::Start, ListenerOptions::NON_PASSIVE);
        assert!(bridge.is_subscribed(3, TouchPhase::Start));
        bridge.unsubscribe(&3, TouchPhase::Start, ListenerOptions::NON_PASSIVE);
        assert!(!bridge.is_subscribed(3, TouchPhase::Start));
        assert_eq!(bridge.calls().len(), 2);

        bridge.clear();
        assert!(bridge.calls().is_empty());
    }
}
