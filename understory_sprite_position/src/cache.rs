// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sprite position cache.
//!
//! [`PositionCache`] is a typed side-table keyed by sprite identity. Each
//! sprite that has been touched owns one [`PositionEntry`] holding, per axis,
//! the last known position and the position before the most recent change.
//!
//! Entries are created lazily on the first read or write of either axis and
//! are only dropped by [`PositionCache::remove`].

use alloc::format;
use alloc::string::String;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::axis::Axis;

/// Cached state for one axis of one sprite.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisSlot {
    /// Last known position, or `None` before the axis is first read.
    pub current: Option<i32>,
    /// Position before the most recent change, or `None` if it never changed
    /// and the history has not been queried.
    pub previous: Option<i32>,
}

/// Cached state for both axes of one sprite.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionEntry {
    /// Horizontal axis state.
    pub horizontal: AxisSlot,
    /// Vertical axis state.
    pub vertical: AxisSlot,
}

impl PositionEntry {
    /// Returns the slot for `axis`.
    #[must_use]
    #[inline]
    pub fn slot(&self, axis: Axis) -> &AxisSlot {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    #[inline]
    fn slot_mut(&mut self, axis: Axis) -> &mut AxisSlot {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

/// Names one cached field of a sprite.
///
/// Storage itself is typed; the slot only renders stable key names, which
/// [`Positioner`](crate::Positioner) uses in its log lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheSlot {
    /// The cached position of an axis.
    Current(Axis),
    /// The previous position of an axis.
    Previous(Axis),
}

impl CacheSlot {
    /// Renders the key name under `namespace`, e.g. `"sprite.x"` or
    /// `"sprite.prevy"`.
    ///
    /// ```rust
    /// use understory_sprite_position::{Axis, CacheSlot};
    ///
    /// assert_eq!(CacheSlot::Current(Axis::Horizontal).key("sprite."), "sprite.x");
    /// assert_eq!(CacheSlot::Previous(Axis::Vertical).key("sprite."), "sprite.prevy");
    /// ```
    #[must_use]
    pub fn key(self, namespace: &str) -> String {
        match self {
            Self::Current(axis) => format!("{namespace}{}", axis.name()),
            Self::Previous(axis) => format!("{namespace}prev{}", axis.name()),
        }
    }
}

/// Typed side-table of cached sprite positions.
///
/// # Example
///
/// ```rust
/// use understory_sprite_position::{Axis, PositionCache};
///
/// let mut cache = PositionCache::<u32>::new();
/// assert_eq!(cache.current(1, Axis::Horizontal), None);
///
/// cache.store_current(1, Axis::Horizontal, 10);
/// cache.record_change(1, Axis::Horizontal, 10, 20);
///
/// assert_eq!(cache.current(1, Axis::Horizontal), Some(20));
/// assert_eq!(cache.previous(1, Axis::Horizontal), Some(10));
/// assert_eq!(cache.revision(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PositionCache<K> {
    entries: HashMap<K, PositionEntry>,
    revision: u64,
}

impl<K> Default for PositionCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            revision: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> PositionCache<K> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sprites with a cache entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sprite has a cache entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` has a cache entry.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the whole entry for `key`.
    #[must_use]
    pub fn entry(&self, key: K) -> Option<&PositionEntry> {
        self.entries.get(&key)
    }

    /// Reads one cached field.
    #[must_use]
    pub fn get(&self, key: K, slot: CacheSlot) -> Option<i32> {
        match slot {
            CacheSlot::Current(axis) => self.current(key, axis),
            CacheSlot::Previous(axis) => self.previous(key, axis),
        }
    }

    /// Last known position of `axis`.
    #[must_use]
    #[inline]
    pub fn current(&self, key: K, axis: Axis) -> Option<i32> {
        self.entries.get(&key).and_then(|e| e.slot(axis).current)
    }

    /// Recorded previous position of `axis`.
    #[must_use]
    #[inline]
    pub fn previous(&self, key: K, axis: Axis) -> Option<i32> {
        self.entries.get(&key).and_then(|e| e.slot(axis).previous)
    }

    /// Overwrites the cached position without touching history or revision.
    pub fn store_current(&mut self, key: K, axis: Axis, value: i32) {
        self.slot_mut(key, axis).current = Some(value);
    }

    /// Overwrites the recorded previous position.
    pub fn store_previous(&mut self, key: K, axis: Axis, value: i32) {
        self.slot_mut(key, axis).previous = Some(value);
    }

    /// Records a change from `previous` to `value` and bumps the revision.
    pub fn record_change(&mut self, key: K, axis: Axis, previous: i32, value: i32) {
        let slot = self.slot_mut(key, axis);
        slot.previous = Some(previous);
        slot.current = Some(value);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Drops the entry for `key`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, key: K) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Drops every entry. The revision is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Counter bumped on every recorded change.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn slot_mut(&mut self, key: K, axis: Axis) -> &mut AxisSlot {
        self.entries.entry(key).or_default().slot_mut(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_created_lazily() {
        let mut cache = PositionCache::<u32>::new();
        assert!(cache.is_empty());
        assert_eq!(cache.current(1, Axis::Vertical), None);
        assert!(!cache.contains(1));

        cache.store_current(1, Axis::Vertical, 5);
        assert!(cache.contains(1));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.current(1, Axis::Vertical), Some(5));
        assert_eq!(cache.current(1, Axis::Horizontal), None);
    }

    #[test]
    fn axes_are_independent() {
        let mut cache = PositionCache::<u32>::new();
        cache.store_current(1, Axis::Horizontal, 3);
        cache.record_change(1, Axis::Vertical, 0, 9);

        let entry = cache.entry(1).unwrap();
        assert_eq!(entry.horizontal.current, Some(3));
        assert_eq!(entry.horizontal.previous, None);
        assert_eq!(entry.vertical.current, Some(9));
        assert_eq!(entry.vertical.previous, Some(0));
    }

    #[test]
    fn revision_bumps_only_on_change() {
        let mut cache = PositionCache::<u32>::new();
        cache.store_current(1, Axis::Horizontal, 3);
        cache.store_previous(1, Axis::Horizontal, 3);
        assert_eq!(cache.revision(), 0);

        cache.record_change(1, Axis::Horizontal, 3, 4);
        cache.record_change(2, Axis::Vertical, 1, 2);
        assert_eq!(cache.revision(), 2);
    }

    #[test]
    fn get_by_slot() {
        let mut cache = PositionCache::<u32>::new();
        cache.record_change(7, Axis::Horizontal, 1, 2);
        assert_eq!(cache.get(7, CacheSlot::Current(Axis::Horizontal)), Some(2));
        assert_eq!(cache.get(7, CacheSlot::Previous(Axis::Horizontal)), Some(1));
        assert_eq!(cache.get(7, CacheSlot::Previous(Axis::Vertical)), None);
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = PositionCache::<u32>::new();
        cache.record_change(1, Axis::Horizontal, 1, 2);
        cache.store_current(2, Axis::Horizontal, 1);

        assert!(cache.remove(1));
        assert!(!cache.remove(1));
        assert_eq!(cache.current(1, Axis::Horizontal), None);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.revision(), 1);
    }

    #[test]
    fn slot_key_names() {
        assert_eq!(CacheSlot::Current(Axis::Vertical).key("ns_"), "ns_y");
        assert_eq!(CacheSlot::Previous(Axis::Horizontal).key(""), "prevx");
    }
}
