// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sprite_position --heading-base-level=0

//! Understory Sprite Position: cached position accessors for 2D sprites.
//!
//! Sprites keep their placement in style properties (`left` and `top`, as
//! pixel lengths). Reading and re-parsing those on every frame is wasteful,
//! so this crate keeps a typed cache beside the style store and routes every
//! read and write through it.
//!
//! ## Core Concepts
//!
//! - [`StyleStore`]: where sprite styles live. The crate never owns sprites;
//!   they are addressed by a caller-chosen key `K`. [`StyleTable`] is an
//!   in-memory store for headless use.
//! - [`PositionCache`]: per-sprite, per-axis cached position and previous
//!   position, created on first access.
//! - [`Positioner`]: the accessors. Writes only reach the store when the
//!   value changes, and only changes move the previous position.
//! - [`AxisRequest`] / [`PositionRequest`]: what to write. Values and the
//!   relative flag can be literals or [deferred](Lazy::Deferred)
//!   computations over the sprite key.
//!
//! ### Key Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `getx(key, refresh)` / `gety` | cached read, re-reading the store if `refresh` |
//! | `setx(key, value)` / `sety` | write-if-different |
//! | `x(key, request, relative)` / `y` | read (no request) or absolute/relative/deferred write |
//! | `position(key, request, y, relative)` | both axes, absolute by default |
//! | `move_by(key, request, y, relative)` | both axes, relative by default |
//! | `previous_x(key)` / `previous_y` | position before the last change |
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_sprite_position::{
//!     AxisRequest, PositionRequest, PositionValue, Positioner, StyleTable,
//! };
//!
//! let mut styles = StyleTable::<u32>::new();
//! styles.insert(65, "left", "10px");
//! styles.insert(65, "top", "30px");
//!
//! let mut positioner = Positioner::new(styles);
//!
//! // Reads are cached after the first one.
//! assert_eq!(positioner.getx(65, false), 10);
//!
//! // Absolute and relative single-axis writes.
//! positioner.setx(65, 20);
//! positioner.x(65, Some(AxisRequest::by(5)), None);
//! assert_eq!(positioner.getx(65, false), 25);
//! assert_eq!(positioner.previous_x(65), 20);
//!
//! // Both axes at once; `move_by` is relative, `position` absolute.
//! positioner
//!     .move_by(65, PositionRequest::from(-5), Some(PositionValue::from(0)), None)
//!     .position(65, PositionRequest::new().y(0), None, None);
//! assert_eq!(positioner.getx(65, false), 20);
//! assert_eq!(positioner.gety(65, false), 0);
//!
//! assert_eq!(positioner.store().get(65, "left"), Some("20px"));
//! ```
//!
//! ## Zero deltas in composite writes
//!
//! [`Positioner::position`] and [`Positioner::move_by`] write an axis only if
//! its value is present and either truthy (non-zero, or deferred) or the
//! request is absolute. An absolute `0` is written; a relative `0` is not.
//! Single-axis accessors have no such rule.
//!
//! ## Unparsable styles
//!
//! A style value without a leading integer (or a missing property) reads as
//! [`NOT_A_NUMBER`]. Relative moves keep it; absolute writes replace it.
//!
//! ## Logging
//!
//! Cache fills and store writes are logged at `trace` level through the
//! [`log`] facade, and unparsable values at `debug` level.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `kurbo` feature adds
//! `Sprite::point` and `Sprite::set_point`; pair it with `std` (default)
//! or `libm`.

#![no_std]

extern crate alloc;

mod axis;
mod cache;
mod config;
mod pixels;
mod positioner;
mod request;
mod sprite;
mod style;
mod value;

pub use axis::Axis;
pub use cache::{AxisSlot, CacheSlot, PositionCache, PositionEntry};
pub use config::{PositionerConfig, PositionerConfigBuilder};
pub use pixels::{NOT_A_NUMBER, ParsePixelsError, format_pixels, parse_pixels, try_parse_pixels};
pub use positioner::Positioner;
pub use request::{AxisRequest, PositionRequest};
pub use sprite::Sprite;
pub use style::{StyleStore, StyleTable};
pub use value::{Lazy, PositionValue, RelativeFlag};
