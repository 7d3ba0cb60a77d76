// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_sprite_position` crate.
//!
//! These drive a [`Positioner`] through a store that records every read and
//! write, checking what reaches the store as well as what the accessors return.

use std::borrow::Cow;
use std::cell::Cell;
use std::collections::HashMap;

use understory_sprite_position::{
    Axis, AxisRequest, NOT_A_NUMBER, PositionRequest, PositionValue, Positioner, StyleStore,
};

/// A scene of sprites indexed by slot, counting store traffic.
#[derive(Debug, Default)]
struct Scene {
    styles: Vec<HashMap<String, String>>,
    reads: Cell<usize>,
    writes: Vec<(usize, String, String)>,
}

impl Scene {
    fn with_sprite(left: &str, top: &str) -> Self {
        let mut scene = Self::default();
        scene.add(left, top);
        scene
    }

    fn add(&mut self, left: &str, top: &str) -> usize {
        let mut props = HashMap::new();
        props.insert("left".to_string(), left.to_string());
        props.insert("top".to_string(), top.to_string());
        self.styles.push(props);
        self.styles.len() - 1
    }
}

impl StyleStore<usize> for Scene {
    fn read_property(&self, key: usize, property: &str) -> Option<Cow<'_, str>> {
        self.reads.set(self.reads.get() + 1);
        self.styles
            .get(key)?
            .get(property)
            .map(|v| Cow::Borrowed(v.as_str()))
    }

    fn write_property(&mut self, key: usize, property: &str, value: &str) {
        self.writes
            .push((key, property.to_string(), value.to_string()));
        if let Some(props) = self.styles.get_mut(key) {
            props.insert(property.to_string(), value.to_string());
        }
    }
}

#[test]
fn repeated_reads_hit_the_store_once() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "20px"));
    for _ in 0..5 {
        assert_eq!(p.getx(0, false), 10);
        assert_eq!(p.get_position(0, Axis::Horizontal, false), 10);
    }
    assert_eq!(p.store().reads.get(), 1);

    assert_eq!(p.getx(0, true), 10);
    assert_eq!(p.store().reads.get(), 2);
}

#[test]
fn set_then_get_returns_value() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "20px"));
    for value in [0, -1, 7, 10, 1_000_000, i32::MAX] {
        for axis in Axis::ALL {
            assert_eq!(p.set_position(0, axis, value), value);
            assert_eq!(p.get_position(0, axis, false), value);
        }
    }
}

#[test]
fn identical_writes_are_idempotent() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "20px"));
    p.sety(0, 40);
    let previous = p.previous_y(0);
    let revision = p.revision();

    p.sety(0, 40);
    assert_eq!(p.previous_y(0), previous);
    assert_eq!(p.revision(), revision);
    assert_eq!(p.store().writes.len(), 1);
}

#[test]
fn relative_write_adds_delta() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "20px"));
    for delta in [3, -8, 0, 12] {
        let before = p.gety(0, false);
        let after = p.resolve_position(
            0,
            Axis::Vertical,
            Some(AxisRequest::new().value(delta).relative(true)),
            None,
        );
        assert_eq!(after, before + delta);
        assert_eq!(p.gety(0, false), before + delta);
    }
}

#[test]
fn deferred_value_sets_position() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "20px"));
    let value = PositionValue::deferred(|_| 5);
    assert_eq!(
        p.resolve_position(0, Axis::Horizontal, Some(value.into()), None),
        5
    );
    assert_eq!(p.getx(0, false), 5);
}

#[test]
fn documented_scenario() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "30px"));

    assert_eq!(p.getx(0, false), 10);

    assert_eq!(p.setx(0, 20), 20);
    assert_eq!(p.previous_x(0), 10);

    p.x(0, Some(AxisRequest::from(5).relative(true)), None);
    assert_eq!(p.getx(0, false), 25);

    p.move_by(0, PositionRequest::from(-5), Some(PositionValue::from(0)), None);
    assert_eq!(p.getx(0, false), 20);
    assert_eq!(p.gety(0, false), 30);

    p.position(0, PositionRequest::new().y(0), None, None);
    assert_eq!(p.gety(0, false), 0);
    assert_eq!(p.previous_y(0), 30);

    let writes: Vec<_> = p
        .store()
        .writes
        .iter()
        .map(|(_, prop, value)| (prop.as_str(), value.as_str()))
        .collect();
    assert_eq!(
        writes,
        [
            ("left", "20px"),
            ("left", "25px"),
            ("left", "20px"),
            ("top", "0px")
        ]
    );
}

#[test]
fn relative_zero_move_is_skipped() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "30px"));
    p.move_by(0, PositionRequest::from(0), None, None);
    assert_eq!(p.getx(0, false), 10);
    assert!(p.store().writes.is_empty());
    // Nothing changed, so history still falls back to the current position.
    assert_eq!(p.previous_x(0), 10);
}

#[test]
fn each_applies_per_sprite_velocity() {
    let mut scene = Scene::default();
    let ids: Vec<usize> = (0..4).map(|_| scene.add("100px", "50px")).collect();
    let hspeed = [0, 2, -3, 4];

    let mut p = Positioner::new(scene);
    p.each(ids.iter().copied(), |sprite| {
        sprite.move_by(
            PositionRequest::new()
                .x_with(|key: usize| hspeed[key])
                .y(-1),
            None,
            None,
        );
    });

    assert_eq!(p.getx(0, false), 100);
    assert_eq!(p.getx(1, false), 102);
    assert_eq!(p.getx(2, false), 97);
    assert_eq!(p.getx(3, false), 104);
    for id in ids {
        assert_eq!(p.gety(id, false), 49);
    }
    // Sprite 0 evaluates to a zero delta, which leaves its `left` untouched.
    assert_eq!(p.store().writes.len(), 3 + 4);
}

#[test]
fn unknown_sprite_reads_not_a_number() {
    let mut p = Positioner::new(Scene::with_sprite("10px", "30px"));
    assert_eq!(p.getx(9, false), NOT_A_NUMBER);
    assert_eq!(p.previous_x(9), NOT_A_NUMBER);
    p.move_by(9, PositionRequest::from(4), None, None);
    assert_eq!(p.getx(9, false), NOT_A_NUMBER);
}

#[test]
fn borrowed_store_sees_writes() {
    let mut scene = Scene::with_sprite("1px", "2px");
    {
        let mut p: Positioner<usize, _> = Positioner::new(&mut scene);
        p.position(0, PositionRequest::new().x(8).y(9), None, None);
    }
    assert_eq!(scene.styles[0]["left"], "8px");
    assert_eq!(scene.styles[0]["top"], "9px");
}
