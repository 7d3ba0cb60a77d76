// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-sprite handle.

use core::hash::Hash;

use crate::axis::Axis;
use crate::positioner::Positioner;
use crate::request::{AxisRequest, PositionRequest};
use crate::style::StyleStore;
use crate::value::{PositionValue, RelativeFlag};

/// A [`Positioner`] bound to one sprite.
///
/// Every accessor forwards to the positioner with this sprite's key. Writes
/// that do not return a position return the handle, so they chain.
///
/// ```rust
/// use understory_sprite_position::{Positioner, PositionRequest, StyleTable};
///
/// let mut styles = StyleTable::<u32>::new();
/// styles.insert(7, "left", "0px");
/// styles.insert(7, "top", "0px");
///
/// let mut positioner = Positioner::new(styles);
/// let mut sprite = positioner.sprite(7);
/// sprite
///     .position(PositionRequest::new().x(40).y(240), None, None)
///     .move_by(PositionRequest::new().x(2).y(-1), None, None);
///
/// assert_eq!((sprite.getx(false), sprite.gety(false)), (42, 239));
/// assert_eq!(sprite.previous_y(), 240);
/// ```
#[derive(Debug)]
pub struct Sprite<'p, K, S> {
    positioner: &'p mut Positioner<K, S>,
    key: K,
}

impl<'p, K, S> Sprite<'p, K, S>
where
    K: Copy + Eq + Hash,
    S: StyleStore<K>,
{
    pub(crate) fn new(positioner: &'p mut Positioner<K, S>, key: K) -> Self {
        Self { positioner, key }
    }

    /// The key of this sprite.
    #[must_use]
    #[inline]
    pub fn key(&self) -> K {
        self.key
    }

    /// Reads or writes the horizontal position.
    pub fn x(
        &mut self,
        request: Option<AxisRequest<'_, K>>,
        relative: Option<RelativeFlag<'_, K>>,
    ) -> i32 {
        self.positioner.x(self.key, request, relative)
    }

    /// Reads or writes the vertical position.
    pub fn y(
        &mut self,
        request: Option<AxisRequest<'_, K>>,
        relative: Option<RelativeFlag<'_, K>>,
    ) -> i32 {
        self.positioner.y(self.key, request, relative)
    }

    /// Reads or writes one axis.
    pub fn resolve_position(
        &mut self,
        axis: Axis,
        request: Option<AxisRequest<'_, K>>,
        relative: Option<RelativeFlag<'_, K>>,
    ) -> i32 {
        self.positioner
            .resolve_position(self.key, axis, request, relative)
    }

    /// Returns the horizontal position, re-reading the store if `refresh`.
    pub fn getx(&mut self, refresh: bool) -> i32 {
        self.positioner.getx(self.key, refresh)
    }

    /// Returns the vertical position, re-reading the store if `refresh`.
    pub fn gety(&mut self, refresh: bool) -> i32 {
        self.positioner.gety(self.key, refresh)
    }

    /// Sets the horizontal position.
    pub fn setx(&mut self, value: i32) -> i32 {
        self.positioner.setx(self.key, value)
    }

    /// Sets the vertical position.
    pub fn sety(&mut self, value: i32) -> i32 {
        self.positioner.sety(self.key, value)
    }

    /// Horizontal position before its most recent change.
    pub fn previous_x(&mut self) -> i32 {
        self.positioner.previous_x(self.key)
    }

    /// Vertical position before its most recent change.
    pub fn previous_y(&mut self) -> i32 {
        self.positioner.previous_y(self.key)
    }

    /// Writes both axes, absolute unless the request says otherwise.
    pub fn position<'a>(
        &mut self,
        request: impl Into<PositionRequest<'a, K>>,
        y: Option<PositionValue<'a, K>>,
        relative: Option<RelativeFlag<'a, K>>,
    ) -> &mut Self {
        self.positioner.position(self.key, request, y, relative);
        self
    }

    /// Moves both axes, relative unless the request says otherwise.
    pub fn move_by<'a>(
        &mut self,
        request: impl Into<PositionRequest<'a, K>>,
        y: Option<PositionValue<'a, K>>,
        relative: Option<RelativeFlag<'a, K>>,
    ) -> &mut Self {
        self.positioner.move_by(self.key, request, y, relative);
        self
    }

    /// Current position as a point.
    ///
    /// An axis holding [`NOT_A_NUMBER`](crate::NOT_A_NUMBER) maps to `NaN`.
    #[cfg(feature = "kurbo")]
    pub fn point(&mut self) -> kurbo::Point {
        fn to_f64(pos: i32) -> f64 {
            if pos == crate::NOT_A_NUMBER {
                f64::NAN
            } else {
                f64::from(pos)
            }
        }
        kurbo::Point::new(to_f64(self.getx(false)), to_f64(self.gety(false)))
    }

    /// Moves to `point`, rounded to whole pixels.
    ///
    /// A `NaN` coordinate writes [`NOT_A_NUMBER`](crate::NOT_A_NUMBER).
    #[cfg(feature = "kurbo")]
    pub fn set_point(&mut self, point: kurbo::Point) -> &mut Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "float to int casts saturate, which is the clamping we want"
        )]
        fn to_i32(coord: f64) -> i32 {
            if coord.is_nan() {
                crate::NOT_A_NUMBER
            } else {
                (coord as i32).max(crate::NOT_A_NUMBER + 1)
            }
        }
        let point = point.round();
        self.setx(to_i32(point.x));
        self.sety(to_i32(point.y));
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{AxisRequest, Positioner, PositionRequest, StyleTable};

    fn positioner() -> Positioner<u32, StyleTable<u32>> {
        let mut styles = StyleTable::new();
        styles.insert(1, "left", "10px");
        styles.insert(1, "top", "20px");
        styles.insert(2, "left", "0px");
        styles.insert(2, "top", "0px");
        Positioner::new(styles)
    }

    #[test]
    fn handle_targets_its_own_sprite() {
        let mut p = positioner();
        {
            let mut sprite = p.sprite(2);
            assert_eq!(sprite.key(), 2);
            assert_eq!(sprite.x(Some(AxisRequest::from(8)), None), 8);
            assert_eq!(sprite.y(None, None), 0);
        }
        assert_eq!(p.getx(1, false), 10);
        assert_eq!(p.getx(2, false), 8);
    }

    #[test]
    fn chained_composites() {
        let mut p = positioner();
        p.sprite(1)
            .move_by(PositionRequest::from(5), None, None)
            .position(PositionRequest::new().y(0), None, None);
        assert_eq!(p.getx(1, false), 15);
        assert_eq!(p.gety(1, false), 0);
        assert_eq!(p.previous_y(1), 20);
    }

    #[test]
    fn low_level_accessors() {
        let mut p = positioner();
        let mut sprite = p.sprite(1);
        assert_eq!(sprite.setx(3), 3);
        assert_eq!(sprite.sety(4), 4);
        assert_eq!(sprite.previous_x(), 10);
        assert_eq!(sprite.previous_y(), 20);
        assert_eq!(sprite.getx(true), 3);
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn point_round_trip() {
        let mut p = positioner();
        let mut sprite = p.sprite(1);
        assert_eq!(sprite.point(), kurbo::Point::new(10.0, 20.0));

        sprite.set_point(kurbo::Point::new(4.6, -2.4));
        assert_eq!((sprite.getx(false), sprite.gety(false)), (5, -2));

        sprite.set_point(kurbo::Point::new(f64::NAN, 1.0));
        assert!(sprite.point().x.is_nan());
    }
}
