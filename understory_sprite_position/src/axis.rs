// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement axes.

/// One of the two independent placement axes of a sprite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal offset, stored in the `left` style property by default.
    Horizontal,
    /// Vertical offset, stored in the `top` style property by default.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Short name of the axis (`"x"` or `"y"`).
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_order() {
        assert_eq!(Axis::Horizontal.name(), "x");
        assert_eq!(Axis::Vertical.name(), "y");
        assert_eq!(Axis::ALL, [Axis::Horizontal, Axis::Vertical]);
    }
}
