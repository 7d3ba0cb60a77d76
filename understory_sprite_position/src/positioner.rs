// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached position accessors.
//!
//! [`Positioner`] layers a [`PositionCache`] over a [`StyleStore`]. All
//! accessors funnel into two primitives:
//!
//! - [`Positioner::get_position`] reads through the cache, filling it from the
//!   store on first use or on request.
//! - [`Positioner::set_position`] writes through the cache, touching the store
//!   and the history only when the value actually changes.
//!
//! [`Positioner::resolve_position`] sits on top of those and handles every
//! request shape (read, absolute, relative, literal, deferred) for one axis;
//! [`Positioner::position`] and [`Positioner::move_by`] apply it to both axes.

use core::hash::Hash;

use crate::axis::Axis;
use crate::cache::{CacheSlot, PositionCache};
use crate::config::PositionerConfig;
use crate::pixels::{self, NOT_A_NUMBER};
use crate::request::{AxisRequest, PositionRequest};
use crate::sprite::Sprite;
use crate::style::StyleStore;
use crate::value::{PositionValue, RelativeFlag};

/// Namespace of the cache key names rendered in log lines.
const LOG_NAMESPACE: &str = "sprite.";

/// Position accessors for sprites in a [`StyleStore`].
///
/// # Example
///
/// ```rust
/// use understory_sprite_position::{AxisRequest, Positioner, PositionRequest, StyleTable};
///
/// let mut styles = StyleTable::<u32>::new();
/// styles.insert(1, "left", "10px");
/// styles.insert(1, "top", "30px");
///
/// let mut positioner = Positioner::new(styles);
/// assert_eq!(positioner.getx(1, false), 10);
///
/// positioner.setx(1, 20);
/// assert_eq!(positioner.previous_x(1), 10);
///
/// positioner.x(1, Some(AxisRequest::by(5)), None);
/// assert_eq!(positioner.getx(1, false), 25);
///
/// positioner.move_by(1, PositionRequest::from(-5), None, None);
/// assert_eq!(positioner.getx(1, false), 20);
/// assert_eq!(positioner.store().get(1, "left"), Some("20px"));
/// ```
#[derive(Debug)]
pub struct Positioner<K, S> {
    store: S,
    cache: PositionCache<K>,
    config: PositionerConfig,
}

impl<K, S> Positioner<K, S>
where
    K: Copy + Eq + Hash,
    S: StyleStore<K>,
{
    /// Creates a positioner over `store` with the default configuration.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, PositionerConfig::default())
    }

    /// Creates a positioner over `store` with an explicit configuration.
    #[must_use]
    pub fn with_config(store: S, config: PositionerConfig) -> Self {
        Self {
            store,
            cache: PositionCache::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &PositionerConfig {
        &self.config
    }

    /// Returns the underlying style store.
    #[must_use]
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying style store mutably.
    ///
    /// Writes made here bypass the cache; follow them with a refreshing read
    /// (`getx(key, true)`) or [`Positioner::forget`].
    #[inline]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the positioner, returning the style store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the position cache.
    #[must_use]
    #[inline]
    pub fn cache(&self) -> &PositionCache<K> {
        &self.cache
    }

    /// Counter bumped on every actual position change.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.cache.revision()
    }

    /// Drops the cached positions and history of a sprite.
    ///
    /// Call this when the sprite leaves the scene. Returns `true` if the
    /// sprite had a cache entry.
    pub fn forget(&mut self, key: K) -> bool {
        self.cache.remove(key)
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// Returns the cached position of `axis`.
    ///
    /// The store is read when the axis has no cached value yet or `refresh` is
    /// `true`; the parsed value then replaces the cached one. A value that
    /// does not parse, or a missing property, reads as [`NOT_A_NUMBER`].
    pub fn get_position(&mut self, key: K, axis: Axis, refresh: bool) -> i32 {
        if !refresh && let Some(pos) = self.cache.current(key, axis) {
            return pos;
        }

        let property = self.config.property(axis);
        let pos = match self.store.read_property(key, property) {
            Some(raw) => pixels::try_parse_pixels(&raw).unwrap_or_else(|err| {
                log::debug!("`{property}` value {raw:?} is not a position: {err}");
                NOT_A_NUMBER
            }),
            None => {
                log::debug!("`{property}` is not set; caching it as not-a-number");
                NOT_A_NUMBER
            }
        };
        log::trace!(
            "cached {} = {pos} from `{property}`",
            CacheSlot::Current(axis).key(LOG_NAMESPACE)
        );
        self.cache.store_current(key, axis, pos);
        pos
    }

    /// Sets the position of `axis` to `value`, returning `value`.
    ///
    /// When `value` equals the cached position this does nothing else.
    /// Otherwise the old position becomes the previous one and `value` is
    /// written to the store.
    ///
    /// The comparison is plain integer equality, so writing [`NOT_A_NUMBER`]
    /// over a cached [`NOT_A_NUMBER`] is also a no-op: no store write, no
    /// history change, no revision bump.
    pub fn set_position(&mut self, key: K, axis: Axis, value: i32) -> i32 {
        let current = self.get_position(key, axis, false);
        if value != current {
            self.cache.record_change(key, axis, current, value);
            let property = self.config.property(axis);
            let text = pixels::format_pixels(value, self.config.unit());
            log::trace!(
                "{} {current} -> {value} ({} = {current}), writing `{property}: {text}`",
                CacheSlot::Current(axis).key(LOG_NAMESPACE),
                CacheSlot::Previous(axis).key(LOG_NAMESPACE)
            );
            self.store.write_property(key, property, &text);
        }
        value
    }

    // =========================================================================
    // Unified accessor
    // =========================================================================

    /// Reads or writes one axis.
    ///
    /// With no `request` this returns the current position. Otherwise the
    /// request is completed with defaults (value: the current position,
    /// relative: `false`), `relative` replaces its flag when given, deferred
    /// fields are evaluated for `key`, and the result is written with
    /// [`Positioner::set_position`]. A relative value is added to the
    /// current position first.
    ///
    /// Returns the resulting position.
    pub fn resolve_position(
        &mut self,
        key: K,
        axis: Axis,
        request: Option<AxisRequest<'_, K>>,
        relative: Option<RelativeFlag<'_, K>>,
    ) -> i32 {
        let current = self.get_position(key, axis, false);
        let Some(request) = request else {
            return current;
        };

        let (value, relative) = request.resolve(key, current, relative);
        let target = if relative {
            pixels::offset(current, value)
        } else {
            value
        };
        self.set_position(key, axis, target)
    }

    /// Reads or writes the horizontal position. See [`Positioner::resolve_position`].
    pub fn x(
        &mut self,
        key: K,
        request: Option<AxisRequest<'_, K>>,
        relative: Option<RelativeFlag<'_, K>>,
    ) -> i32 {
        self.resolve_position(key, Axis::Horizontal, request, relative)
    }

    /// Reads or writes the vertical position. See [`Positioner::resolve_position`].
    pub fn y(
        &mut self,
        key: K,
        request: Option<AxisRequest<'_, K>>,
        relative: Option<RelativeFlag<'_, K>>,
    ) -> i32 {
        self.resolve_position(key, Axis::Vertical, request, relative)
    }

    /// Returns the horizontal position, re-reading the store if `refresh`.
    pub fn getx(&mut self, key: K, refresh: bool) -> i32 {
        self.get_position(key, Axis::Horizontal, refresh)
    }

    /// Returns the vertical position, re-reading the store if `refresh`.
    pub fn gety(&mut self, key: K, refresh: bool) -> i32 {
        self.get_position(key, Axis::Vertical, refresh)
    }

    /// Sets the horizontal position.
    pub fn setx(&mut self, key: K, value: i32) -> i32 {
        self.set_position(key, Axis::Horizontal, value)
    }

    /// Sets the vertical position.
    pub fn sety(&mut self, key: K, value: i32) -> i32 {
        self.set_position(key, Axis::Vertical, value)
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Returns the position of `axis` before its most recent change.
    ///
    /// If the axis never changed, the current position is recorded as the
    /// previous one and returned.
    pub fn get_previous_position(&mut self, key: K, axis: Axis) -> i32 {
        if let Some(prev) = self.cache.previous(key, axis) {
            return prev;
        }
        let prev = self.get_position(key, axis, false);
        log::trace!(
            "no change recorded yet; {} = {prev}",
            CacheSlot::Previous(axis).key(LOG_NAMESPACE)
        );
        self.cache.store_previous(key, axis, prev);
        prev
    }

    /// Horizontal position before its most recent change.
    pub fn previous_x(&mut self, key: K) -> i32 {
        self.get_previous_position(key, Axis::Horizontal)
    }

    /// Vertical position before its most recent change.
    pub fn previous_y(&mut self, key: K) -> i32 {
        self.get_previous_position(key, Axis::Vertical)
    }

    // =========================================================================
    // Composites
    // =========================================================================

    /// Writes both axes from one request.
    ///
    /// `y` and `relative`, when given, replace the corresponding request
    /// fields; a request without a flag uses `default_relative`. Each axis is
    /// then written if its value is present and either truthy or the request
    /// is absolute. A relative delta of exactly `0` therefore writes nothing.
    pub fn set_combined_position<'a>(
        &mut self,
        key: K,
        request: PositionRequest<'a, K>,
        y: Option<PositionValue<'a, K>>,
        relative: Option<RelativeFlag<'a, K>>,
        default_relative: bool,
    ) -> &mut Self {
        let merged = request.merge(y, relative, default_relative);
        for axis in Axis::ALL {
            if let Some(request) = merged.axis_request(axis) {
                self.resolve_position(key, axis, Some(request), None);
            }
        }
        self
    }

    /// Writes both axes, absolute unless the request says otherwise.
    pub fn position<'a>(
        &mut self,
        key: K,
        request: impl Into<PositionRequest<'a, K>>,
        y: Option<PositionValue<'a, K>>,
        relative: Option<RelativeFlag<'a, K>>,
    ) -> &mut Self {
        self.set_combined_position(key, request.into(), y, relative, false)
    }

    /// Moves both axes, relative unless the request says otherwise.
    pub fn move_by<'a>(
        &mut self,
        key: K,
        request: impl Into<PositionRequest<'a, K>>,
        y: Option<PositionValue<'a, K>>,
        relative: Option<RelativeFlag<'a, K>>,
    ) -> &mut Self {
        self.set_combined_position(key, request.into(), y, relative, true)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns a handle addressing one sprite.
    pub fn sprite(&mut self, key: K) -> Sprite<'_, K, S> {
        Sprite::new(self, key)
    }

    /// Calls `f` with a handle for each key, in order.
    ///
    /// ```rust
    /// use understory_sprite_position::{Positioner, PositionRequest, StyleTable};
    ///
    /// let speeds = [0, 2, 4];
    /// let mut styles = StyleTable::<usize>::new();
    /// for key in 0..3 {
    ///     styles.insert(key, "left", "100px");
    ///     styles.insert(key, "top", "0px");
    /// }
    ///
    /// let mut positioner = Positioner::new(styles);
    /// positioner.each(0..3, |sprite| {
    ///     sprite.move_by(PositionRequest::new().x_with(|key: usize| -speeds[key]), None, None);
    /// });
    ///
    /// assert_eq!(positioner.getx(0, false), 100);
    /// assert_eq!(positioner.getx(2, false), 96);
    /// ```
    pub fn each<I, F>(&mut self, keys: I, mut f: F) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&mut Sprite<'_, K, S>),
    {
        for key in keys {
            f(&mut self.sprite(key));
        }
        self
    }
}
