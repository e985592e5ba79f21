//! Pointwise arithmetic operations
//!
//! This module provides per-pixel operations on the color channels:
//!
//! - Brightness adjustment (`adjust_brightness`)
//! - Constant arithmetic (`arithmetic` with [`ArithOp`])
//!
//! Alpha is never modified. Each formula clamps on one side only (Add and
//! Multiply at 255, Subtract at 0); the store back into the 8-bit channel
//! then saturates the other side, so no value ever wraps.

use std::fmt;
use std::str::FromStr;

use super::Raster;
use crate::color;
use crate::error::{Error, Result};

/// Constant arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `min(c + v, 255)`
    Add,
    /// `max(c - v, 0)`
    Subtract,
    /// `min(c * v, 255)`
    Multiply,
    /// `min(c / v, 255)`, fails for `v == 0`
    Divide,
}

impl ArithOp {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "add",
            ArithOp::Subtract => "subtract",
            ArithOp::Multiply => "multiply",
            ArithOp::Divide => "divide",
        }
    }

    /// Apply the operator to a single channel value.
    #[inline]
    fn apply(self, c: f64, value: f64) -> f64 {
        match self {
            ArithOp::Add => (c + value).min(255.0),
            ArithOp::Subtract => (c - value).max(0.0),
            ArithOp::Multiply => (c * value).min(255.0),
            ArithOp::Divide => (c / value).min(255.0),
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArithOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(ArithOp::Add),
            "subtract" => Ok(ArithOp::Subtract),
            "multiply" => Ok(ArithOp::Multiply),
            "divide" => Ok(ArithOp::Divide),
            _ => Err(Error::InvalidMethod(format!(
                "unknown arithmetic operation '{s}'"
            ))),
        }
    }
}

impl Raster {
    /// Adjust brightness by adding `amount` to every color channel.
    ///
    /// `R' = min(R + amount, 255)`, likewise for G and B; alpha unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::Raster;
    ///
    /// let raster = Raster::filled(2, 2, [10, 10, 10, 255]).unwrap();
    /// let brighter = raster.adjust_brightness(5);
    /// assert_eq!(brighter.get_rgba(0, 0), Some([15, 15, 15, 255]));
    /// ```
    pub fn adjust_brightness(&self, amount: i32) -> Raster {
        let mut result = self.clone();
        result.adjust_brightness_inplace(amount);
        result
    }

    /// Adjust brightness in place. See [`Raster::adjust_brightness`].
    pub fn adjust_brightness_inplace(&mut self, amount: i32) {
        log::trace!(
            "adjust_brightness: {}x{} amount={}",
            self.width(),
            self.height(),
            amount
        );
        let amount = amount as i64;
        for px in self.pixels_mut() {
            for c in color::RGB {
                px[c] = (px[c] as i64 + amount).clamp(0, 255) as u8;
            }
        }
    }

    /// Apply a constant arithmetic operation to every color channel.
    ///
    /// # Errors
    ///
    /// - [`Error::DivisionByZero`] for [`ArithOp::Divide`] with `value == 0`.
    /// - [`Error::InvalidParameter`] if `value` is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::{ArithOp, Raster};
    ///
    /// let raster = Raster::filled(1, 1, [100, 50, 20, 128]).unwrap();
    /// let halved = raster.arithmetic(ArithOp::Divide, 2.0).unwrap();
    /// assert_eq!(halved.get_rgba(0, 0), Some([50, 25, 10, 128]));
    /// assert!(raster.arithmetic(ArithOp::Divide, 0.0).is_err());
    /// ```
    pub fn arithmetic(&self, op: ArithOp, value: f64) -> Result<Raster> {
        let mut result = self.clone();
        result.arithmetic_inplace(op, value)?;
        Ok(result)
    }

    /// Apply a constant arithmetic operation in place.
    ///
    /// Parameters are validated before any pixel is written, so on error
    /// the raster is unchanged.
    pub fn arithmetic_inplace(&mut self, op: ArithOp, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "{op} value must be finite, got {value}"
            )));
        }
        if op == ArithOp::Divide && value == 0.0 {
            return Err(Error::DivisionByZero);
        }
        log::trace!(
            "arithmetic: {}x{} {} {}",
            self.width(),
            self.height(),
            op,
            value
        );

        for px in self.pixels_mut() {
            for c in color::RGB {
                px[c] = color::clamp_channel(op.apply(px[c] as f64, value));
            }
        }
        Ok(())
    }
}
