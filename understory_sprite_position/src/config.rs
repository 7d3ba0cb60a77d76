// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioner configuration.
//!
//! This module provides [`PositionerConfig`] and [`PositionerConfigBuilder`]
//! for choosing which style properties back each axis.

use crate::axis::Axis;

/// Which style properties a positioner reads and writes.
///
/// # Example
///
/// ```rust
/// use understory_sprite_position::{Axis, PositionerConfig};
///
/// let config = PositionerConfig::builder()
///     .vertical_property("bottom")
///     .build();
///
/// assert_eq!(config.property(Axis::Horizontal), "left");
/// assert_eq!(config.property(Axis::Vertical), "bottom");
/// assert_eq!(config.unit(), "px");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionerConfig {
    horizontal_property: &'static str,
    vertical_property: &'static str,
    unit: &'static str,
}

impl PositionerConfig {
    /// Style property backing the horizontal axis by default.
    pub const DEFAULT_HORIZONTAL_PROPERTY: &'static str = "left";
    /// Style property backing the vertical axis by default.
    pub const DEFAULT_VERTICAL_PROPERTY: &'static str = "top";
    /// Unit suffix appended to written positions by default.
    pub const DEFAULT_UNIT: &'static str = "px";

    /// Creates a configuration with the default `left`/`top`/`px` settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            horizontal_property: Self::DEFAULT_HORIZONTAL_PROPERTY,
            vertical_property: Self::DEFAULT_VERTICAL_PROPERTY,
            unit: Self::DEFAULT_UNIT,
        }
    }

    /// Starts building a configuration from the defaults.
    #[must_use]
    pub const fn builder() -> PositionerConfigBuilder {
        PositionerConfigBuilder { config: Self::new() }
    }

    /// Returns the style property backing `axis`.
    #[must_use]
    #[inline]
    pub const fn property(&self, axis: Axis) -> &'static str {
        match axis {
            Axis::Horizontal => self.horizontal_property,
            Axis::Vertical => self.vertical_property,
        }
    }

    /// Returns the unit suffix appended to written positions.
    #[must_use]
    #[inline]
    pub const fn unit(&self) -> &'static str {
        self.unit
    }
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`PositionerConfig`].
#[derive(Copy, Clone, Debug)]
pub struct PositionerConfigBuilder {
    config: PositionerConfig,
}

impl PositionerConfigBuilder {
    /// Sets the style property backing the horizontal axis.
    #[must_use]
    pub const fn horizontal_property(mut self, property: &'static str) -> Self {
        self.config.horizontal_property = property;
        self
    }

    /// Sets the style property backing the vertical axis.
    #[must_use]
    pub const fn vertical_property(mut self, property: &'static str) -> Self {
        self.config.vertical_property = property;
        self
    }

    /// Sets the unit suffix appended to written positions.
    ///
    /// Reads ignore any suffix, so this only affects writes.
    #[must_use]
    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.config.unit = unit;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub const fn build(self) -> PositionerConfig {
        self.config
    }
}
