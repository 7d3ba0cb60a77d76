// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style property stores.
//!
//! The positioner does not own sprites. It reads and writes their placement
//! through a [`StyleStore`], addressed by sprite key and property name.
//! [`StyleTable`] is a small in-memory implementation for headless use and
//! tests.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Most sprites carry only a handful of style properties (`left`, `top`, and
/// perhaps a size), so this avoids heap allocation in the common case.
const INLINE_CAPACITY: usize = 4;

/// Access to the style properties of sprites.
pub trait StyleStore<K> {
    /// Reads a property of the sprite identified by `key`.
    ///
    /// Returns `None` if the sprite or the property is unknown.
    fn read_property(&self, key: K, property: &str) -> Option<Cow<'_, str>>;

    /// Writes a property of the sprite identified by `key`.
    fn write_property(&mut self, key: K, property: &str, value: &str);
}

impl<K, S: StyleStore<K> + ?Sized> StyleStore<K> for &mut S {
    #[inline]
    fn read_property(&self, key: K, property: &str) -> Option<Cow<'_, str>> {
        (**self).read_property(key, property)
    }

    #[inline]
    fn write_property(&mut self, key: K, property: &str, value: &str) {
        (**self).write_property(key, property, value);
    }
}

/// In-memory style properties per sprite.
///
/// Properties are kept in a small vector sorted by name and found by binary
/// search. Every write is counted, which makes it easy to observe how often a
/// positioner actually touches the store.
///
/// # Example
///
/// ```rust
/// use understory_sprite_position::{StyleStore, StyleTable};
///
/// let mut styles = StyleTable::<u32>::new();
/// styles.insert(1, "left", "10px");
///
/// assert_eq!(styles.get(1, "left"), Some("10px"));
/// assert_eq!(styles.read_property(1, "top"), None);
///
/// styles.write_property(1, "top", "4px");
/// assert_eq!(styles.get(1, "top"), Some("4px"));
/// assert_eq!(styles.writes(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct StyleTable<K> {
    sprites: HashMap<K, SmallVec<[(String, String); INLINE_CAPACITY]>>,
    writes: u64,
}

impl<K> Default for StyleTable<K> {
    fn default() -> Self {
        Self {
            sprites: HashMap::new(),
            writes: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> StyleTable<K> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property without counting it as a write.
    ///
    /// Use this to seed initial styles.
    pub fn insert(&mut self, key: K, property: &str, value: &str) {
        let props = self.sprites.entry(key).or_default();
        match props.binary_search_by(|(name, _)| name.as_str().cmp(property)) {
            Ok(idx) => props[idx].1 = value.to_string(),
            Err(idx) => props.insert(idx, (property.to_string(), value.to_string())),
        }
    }

    /// Reads a property.
    #[must_use]
    pub fn get(&self, key: K, property: &str) -> Option<&str> {
        let props = self.sprites.get(&key)?;
        props
            .binary_search_by(|(name, _)| name.as_str().cmp(property))
            .ok()
            .map(|idx| props[idx].1.as_str())
    }

    /// Removes every property of a sprite.
    ///
    /// Returns `true` if the sprite had any properties.
    pub fn remove_sprite(&mut self, key: K) -> bool {
        self.sprites.remove(&key).is_some()
    }

    /// Number of [`StyleStore::write_property`] calls so far.
    #[must_use]
    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl<K: Copy + Eq + Hash> StyleStore<K> for StyleTable<K> {
    fn read_property(&self, key: K, property: &str) -> Option<Cow<'_, str>> {
        self.get(key, property).map(Cow::Borrowed)
    }

    fn write_property(&mut self, key: K, property: &str, value: &str) {
        self.writes += 1;
        self.insert(key, property, value);
    }
}
