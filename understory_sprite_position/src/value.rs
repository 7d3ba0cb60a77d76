// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Literal or deferred request fields.
//!
//! A position or relative flag may be given directly, or as a computation that
//! is evaluated against the key of the sprite being written. The latter lets a
//! single request be applied across many sprites while each evaluates its own
//! value (for example, a per-sprite speed lookup).

use alloc::rc::Rc;
use core::fmt;

use crate::pixels::NOT_A_NUMBER;

/// A value supplied either directly or as a computation over the sprite key.
pub enum Lazy<'a, K, T> {
    /// A value known up front.
    Literal(T),
    /// A computation invoked with the key of the sprite being written.
    Deferred(Rc<dyn Fn(K) -> T + 'a>),
}

/// A position, in pixels, possibly computed per sprite.
pub type PositionValue<'a, K> = Lazy<'a, K, i32>;

/// A relative/absolute flag, possibly computed per sprite.
pub type RelativeFlag<'a, K> = Lazy<'a, K, bool>;

impl<'a, K, T: Copy> Lazy<'a, K, T> {
    /// Wraps a computation to be evaluated when the request is applied.
    ///
    /// ```rust
    /// use understory_sprite_position::PositionValue;
    ///
    /// let speeds = [3, 5, 8];
    /// let value = PositionValue::<usize>::deferred(move |key| speeds[key] * 2);
    /// assert_eq!(value.resolve(1), 10);
    /// ```
    pub fn deferred(f: impl Fn(K) -> T + 'a) -> Self {
        Self::Deferred(Rc::new(f))
    }

    /// Produces the value for the sprite identified by `key`.
    ///
    /// A deferred computation is invoked every time this is called; panics
    /// inside it propagate to the caller.
    pub fn resolve(&self, key: K) -> T {
        match self {
            Self::Literal(value) => *value,
            Self::Deferred(f) => f(key),
        }
    }

    /// Returns `true` if this value is computed at application time.
    #[must_use]
    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<K> Lazy<'_, K, i32> {
    /// Whether the value requests a write on its own.
    ///
    /// Zero and [`NOT_A_NUMBER`] literals are not truthy. Deferred values are
    /// always truthy; they are not evaluated.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Literal(value) => *value != 0 && *value != NOT_A_NUMBER,
            Self::Deferred(_) => true,
        }
    }
}

impl<K> Lazy<'_, K, bool> {
    /// Whether the flag reads as set without evaluating it.
    ///
    /// Deferred flags are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Literal(value) => *value,
            Self::Deferred(_) => true,
        }
    }
}

impl<K, T: Copy> Clone for Lazy<'_, K, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(value) => Self::Literal(*value),
            Self::Deferred(f) => Self::Deferred(Rc::clone(f)),
        }
    }
}

impl<K, T: fmt::Debug> fmt::Debug for Lazy<'_, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").finish_non_exhaustive(),
        }
    }
}

impl<K> From<i32> for Lazy<'_, K, i32> {
    fn from(value: i32) -> Self {
        Self::Literal(value)
    }
}

impl<K> From<bool> for Lazy<'_, K, bool> {
    fn from(value: bool) -> Self {
        Self::Literal(value)
    }
}
