// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position update requests.
//!
//! [`AxisRequest`] describes a write to one axis and [`PositionRequest`] a
//! write to both. Absent fields are filled from defaults in one place, when
//! the request is applied:
//!
//! | Field | Default |
//! |-------|---------|
//! | axis value | the current position |
//! | `relative` | `false` for axis accessors and `position`, `true` for `move_by` |

use crate::axis::Axis;
use crate::value::{Lazy, PositionValue, RelativeFlag};

/// A write to a single axis.
///
/// ```rust
/// use understory_sprite_position::AxisRequest;
///
/// // Absolute target.
/// let _ = AxisRequest::<u32>::from(120);
/// // Relative delta.
/// let _ = AxisRequest::<u32>::by(-4);
/// // Computed per sprite, applied relative to the current position.
/// let _ = AxisRequest::<u32>::new()
///     .value_with(|key| key as i32 * 2)
///     .relative(true);
/// ```
#[derive(Clone, Debug)]
pub struct AxisRequest<'a, K> {
    /// Target value, or the delta when relative. Defaults to the current position.
    pub value: Option<PositionValue<'a, K>>,
    /// Whether `value` is added to the current position. Defaults to `false`.
    pub relative: Option<RelativeFlag<'a, K>>,
}

impl<K> Default for AxisRequest<'_, K> {
    fn default() -> Self {
        Self {
            value: None,
            relative: None,
        }
    }
}

impl<'a, K> AxisRequest<'a, K> {
    /// An empty request; every field takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A relative move by `delta` pixels.
    #[must_use]
    pub fn by(delta: i32) -> Self {
        Self::new().value(delta).relative(true)
    }

    /// Sets the target value (or delta).
    #[must_use]
    pub fn value(mut self, value: impl Into<PositionValue<'a, K>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the target value to a computation over the sprite key.
    #[must_use]
    pub fn value_with(mut self, f: impl Fn(K) -> i32 + 'a) -> Self {
        self.value = Some(Lazy::deferred(f));
        self
    }

    /// Sets the relative flag.
    #[must_use]
    pub fn relative(mut self, relative: impl Into<RelativeFlag<'a, K>>) -> Self {
        self.relative = Some(relative.into());
        self
    }

    /// Sets the relative flag to a computation over the sprite key.
    #[must_use]
    pub fn relative_with(mut self, f: impl Fn(K) -> bool + 'a) -> Self {
        self.relative = Some(Lazy::deferred(f));
        self
    }
}

impl<K: Copy> AxisRequest<'_, K> {
    /// Applies the override and defaults, then evaluates deferred fields.
    ///
    /// Returns the value and whether it is relative. The value is evaluated
    /// before the flag.
    pub(crate) fn resolve(
        self,
        key: K,
        current: i32,
        relative_override: Option<RelativeFlag<'_, K>>,
    ) -> (i32, bool) {
        let value = self.value.map_or(current, |v| v.resolve(key));
        let relative = match relative_override {
            Some(flag) => flag.resolve(key),
            None => self.relative.is_some_and(|r| r.resolve(key)),
        };
        (value, relative)
    }
}

impl<K> From<i32> for AxisRequest<'_, K> {
    fn from(value: i32) -> Self {
        Self::new().value(value)
    }
}

impl<'a, K> From<PositionValue<'a, K>> for AxisRequest<'a, K> {
    fn from(value: PositionValue<'a, K>) -> Self {
        Self::new().value(value)
    }
}

/// A write to both axes at once.
///
/// Each axis is written only when it is present and either truthy or the
/// request is absolute. In particular, a relative delta of exactly `0` is
/// skipped rather than written, while an absolute `0` is written.
///
/// ```rust
/// use understory_sprite_position::PositionRequest;
///
/// let _ = PositionRequest::<u32>::new().x(5).y(5).relative(true);
/// // A bare value addresses the horizontal axis.
/// let _ = PositionRequest::<u32>::from(40);
/// ```
#[derive(Clone, Debug)]
pub struct PositionRequest<'a, K> {
    /// Horizontal value, if any.
    pub x: Option<PositionValue<'a, K>>,
    /// Vertical value, if any.
    pub y: Option<PositionValue<'a, K>>,
    /// Whether values are deltas. Defaults depend on the accessor.
    pub relative: Option<RelativeFlag<'a, K>>,
}

impl<K> Default for PositionRequest<'_, K> {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            relative: None,
        }
    }
}

impl<'a, K> PositionRequest<'a, K> {
    /// An empty request; nothing is written.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizontal value.
    #[must_use]
    pub fn x(mut self, value: impl Into<PositionValue<'a, K>>) -> Self {
        self.x = Some(value.into());
        self
    }

    /// Sets the horizontal value to a computation over the sprite key.
    #[must_use]
    pub fn x_with(mut self, f: impl Fn(K) -> i32 + 'a) -> Self {
        self.x = Some(Lazy::deferred(f));
        self
    }

    /// Sets the vertical value.
    #[must_use]
    pub fn y(mut self, value: impl Into<PositionValue<'a, K>>) -> Self {
        self.y = Some(value.into());
        self
    }

    /// Sets the vertical value to a computation over the sprite key.
    #[must_use]
    pub fn y_with(mut self, f: impl Fn(K) -> i32 + 'a) -> Self {
        self.y = Some(Lazy::deferred(f));
        self
    }

    /// Sets the relative flag.
    #[must_use]
    pub fn relative(mut self, relative: impl Into<RelativeFlag<'a, K>>) -> Self {
        self.relative = Some(relative.into());
        self
    }

    /// Sets the relative flag to a computation over the sprite key.
    #[must_use]
    pub fn relative_with(mut self, f: impl Fn(K) -> bool + 'a) -> Self {
        self.relative = Some(Lazy::deferred(f));
        self
    }

    /// Folds the positional arguments and defaults into the request.
    pub(crate) fn merge(
        mut self,
        y: Option<PositionValue<'a, K>>,
        relative_override: Option<RelativeFlag<'a, K>>,
        default_relative: bool,
    ) -> MergedPosition<'a, K> {
        if y.is_some() {
            self.y = y;
        }
        if relative_override.is_some() {
            self.relative = relative_override;
        }
        MergedPosition {
            x: self.x,
            y: self.y,
            relative: self
                .relative
                .unwrap_or(Lazy::Literal(default_relative)),
        }
    }
}

impl<K> From<i32> for PositionRequest<'_, K> {
    fn from(x: i32) -> Self {
        Self::new().x(x)
    }
}

impl<'a, K> From<PositionValue<'a, K>> for PositionRequest<'a, K> {
    fn from(x: PositionValue<'a, K>) -> Self {
        Self::new().x(x)
    }
}

/// A [`PositionRequest`] with its relative flag settled.
pub(crate) struct MergedPosition<'a, K> {
    x: Option<PositionValue<'a, K>>,
    y: Option<PositionValue<'a, K>>,
    relative: RelativeFlag<'a, K>,
}

impl<'a, K> MergedPosition<'a, K> {
    /// The single-axis request for `axis`, if that axis should be written.
    pub(crate) fn axis_request(&self, axis: Axis) -> Option<AxisRequest<'a, K>> {
        let value = match axis {
            Axis::Horizontal => self.x.as_ref(),
            Axis::Vertical => self.y.as_ref(),
        }?;
        (value.is_truthy() || !self.relative.is_truthy()).then(|| AxisRequest {
            value: Some(value.clone()),
            relative: Some(self.relative.clone()),
        })
    }
}
