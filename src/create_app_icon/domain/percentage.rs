use std::fmt;

use crate::domain::error::DomainError;

/// Fraction of the larger image dimension added as padding on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingPercent(f64);

impl PaddingPercent {
    pub const DEFAULT: f64 = 0.15;

    /// Accepts finite values in `(0, 1]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPercent {
                name: "padding percent",
                value,
                range: "(0, 1]",
            })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for PaddingPercent {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for PaddingPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Fraction of the smaller image dimension used as the corner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadiusPercent(f64);

impl CornerRadiusPercent {
    pub const DEFAULT: f64 = 0.22;

    /// Accepts finite values in `[0, 0.5)`. At 0.5 the straight edges vanish.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && (0.0..0.5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPercent {
                name: "corner radius percent",
                value,
                range: "[0, 0.5)",
            })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for CornerRadiusPercent {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for CornerRadiusPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
