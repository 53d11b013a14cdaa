//! Validation utilities for construction and configuration inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a floating-point input is a finite number
#[inline(always)]
pub fn finite(value: f64, name: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::param(name, format!("expected a finite number, got {}", value)));
    }
    Ok(())
}

/// Validate that an integer input lies in `min..=max`
#[inline(always)]
pub fn range<T>(value: T, min: T, max: T, name: &'static str) -> Result<()>
where
    T: PartialOrd + core::fmt::Display,
{
    if value < min || value > max {
        return Err(Error::param(
            name,
            format!("{} is outside the supported range {}..={}", value, min, max),
        ));
    }
    Ok(())
}
