// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel length parsing and formatting.
//!
//! Style values are lengths such as `"10px"`. Reading one keeps the leading
//! integer and ignores whatever follows, so `"10.7px"` reads as `10` and
//! `"-3em"` as `-3`. Values that have no leading integer coerce to
//! [`NOT_A_NUMBER`] instead of failing the read.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Sentinel position for a style value that could not be parsed.
///
/// Relative moves leave the sentinel unchanged, and it is written back to the
/// store as `NaN` followed by the unit, which parses back to the sentinel.
pub const NOT_A_NUMBER: i32 = i32::MIN;

/// Why a style value could not be read as a pixel position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParsePixelsError {
    /// The value was empty or only whitespace.
    Empty,
    /// The value does not start with an integer.
    NoDigits,
    /// The integer does not fit in an `i32` (or collides with [`NOT_A_NUMBER`]).
    Overflow,
}

impl fmt::Display for ParsePixelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty pixel value"),
            Self::NoDigits => f.write_str("pixel value does not start with an integer"),
            Self::Overflow => f.write_str("pixel value is out of range"),
        }
    }
}

impl core::error::Error for ParsePixelsError {}

/// Parses the leading integer of a style length.
///
/// Leading whitespace and a single `+` or `-` sign are accepted. Parsing stops
/// at the first character that is not an ASCII digit.
///
/// ```rust
/// use understory_sprite_position::{ParsePixelsError, try_parse_pixels};
///
/// assert_eq!(try_parse_pixels(" 10px"), Ok(10));
/// assert_eq!(try_parse_pixels("-4.5px"), Ok(-4));
/// assert_eq!(try_parse_pixels("auto"), Err(ParsePixelsError::NoDigits));
/// ```
pub fn try_parse_pixels(text: &str) -> Result<i32, ParsePixelsError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(ParsePixelsError::Empty);
    }
    let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ParsePixelsError::NoDigits);
    }

    let mut value: i32 = 0;
    for byte in rest[..digits].bytes() {
        let digit = i32::from(byte - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or(ParsePixelsError::Overflow)?;
    }
    if value == NOT_A_NUMBER {
        return Err(ParsePixelsError::Overflow);
    }
    Ok(value)
}

/// Parses the leading integer of a style length, coercing failures to
/// [`NOT_A_NUMBER`].
#[must_use]
pub fn parse_pixels(text: &str) -> i32 {
    try_parse_pixels(text).unwrap_or(NOT_A_NUMBER)
}

/// Formats a position as a style length with the given unit suffix.
///
/// ```rust
/// use understory_sprite_position::{NOT_A_NUMBER, format_pixels};
///
/// assert_eq!(format_pixels(-12, "px"), "-12px");
/// assert_eq!(format_pixels(NOT_A_NUMBER, "px"), "NaNpx");
/// ```
#[must_use]
pub fn format_pixels(value: i32, unit: &str) -> String {
    if value == NOT_A_NUMBER {
        format!("NaN{unit}")
    } else {
        format!("{value}{unit}")
    }
}

/// Adds a relative delta to a position.
///
/// The sentinel is sticky on either side; other sums saturate short of it.
pub(crate) fn offset(current: i32, delta: i32) -> i32 {
    if current == NOT_A_NUMBER || delta == NOT_A_NUMBER {
        NOT_A_NUMBER
    } else {
        current.saturating_add(delta).max(NOT_A_NUMBER + 1)
    }
}
