//! Scale functions and scalable dimensions
//!
//! A template grows with an integer scale parameter `k`. Each side of a
//! template is described by a [`Dimension`], which is either fixed or a
//! [`LinearFunction`] of `k`. Dimensions never store a computed value: they
//! are evaluated at the owning template's current scale, so a rescale can
//! never leave a stale size behind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TemplateError};

/// Smallest scale parameter any template accepts.
pub const MIN_SCALE: i64 = 1;

/// Check that `k` is a usable scale parameter.
pub fn check_scale(k: i64) -> Result<()> {
    if k < MIN_SCALE {
        return Err(TemplateError::invalid_scale(
            k,
            format!("scale must be at least {MIN_SCALE}"),
        ));
    }
    Ok(())
}

/// The function `k -> slope * k + intercept`.
///
/// The slope must be strictly positive so that dimensions grow with the scale.
///
/// # Example
///
/// ```
/// use tqec::LinearFunction;
///
/// let f = LinearFunction::new(2, 1).unwrap();
/// assert_eq!(f.call(3), 7);
/// assert!(LinearFunction::new(0, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLinearFunction")]
pub struct LinearFunction {
    slope: i64,
    intercept: i64,
}

#[derive(Deserialize)]
struct RawLinearFunction {
    slope: i64,
    #[serde(default)]
    intercept: i64,
}

impl TryFrom<RawLinearFunction> for LinearFunction {
    type Error = TemplateError;

    fn try_from(raw: RawLinearFunction) -> Result<Self> {
        LinearFunction::new(raw.slope, raw.intercept)
    }
}

impl Default for LinearFunction {
    fn default() -> Self {
        Self {
            slope: 2,
            intercept: 0,
        }
    }
}

impl LinearFunction {
    /// Create a new linear function, rejecting non-positive slopes.
    pub fn new(slope: i64, intercept: i64) -> Result<Self> {
        if slope <= 0 {
            return Err(TemplateError::invalid_configuration(format!(
                "linear function slope must be positive, got {slope}"
            )));
        }
        Ok(Self { slope, intercept })
    }

    /// Create `k -> slope * k`.
    pub fn with_slope(slope: i64) -> Result<Self> {
        Self::new(slope, 0)
    }

    /// Slope of the function.
    pub fn slope(&self) -> i64 {
        self.slope
    }

    /// Value of the function at `k = 0`.
    pub fn intercept(&self) -> i64 {
        self.intercept
    }

    /// Evaluate the function, saturating at the `i64` bounds.
    pub fn call(&self, k: i64) -> i64 {
        self.slope.saturating_mul(k).saturating_add(self.intercept)
    }

    /// Evaluate the function, returning `None` on overflow.
    pub fn checked_call(&self, k: i64) -> Option<i64> {
        self.slope.checked_mul(k)?.checked_add(self.intercept)
    }

    /// The same function with its intercept moved by `delta`.
    pub fn shifted(&self, delta: i64) -> Self {
        Self {
            slope: self.slope,
            intercept: self.intercept.saturating_add(delta),
        }
    }
}

impl fmt::Display for LinearFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intercept {
            0 => write!(f, "{}*k", self.slope),
            b if b < 0 => write!(f, "{}*k - {}", self.slope, -b),
            b => write!(f, "{}*k + {}", self.slope, b),
        }
    }
}

/// One side of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Grows linearly with the scale
    Linear(LinearFunction),

    /// Does not depend on the scale
    Fixed(usize),
}

impl Dimension {
    /// A dimension following `k -> slope * k + intercept`.
    pub fn linear(slope: i64, intercept: i64) -> Result<Self> {
        LinearFunction::new(slope, intercept).map(Dimension::Linear)
    }

    /// A dimension that never changes.
    pub fn fixed(value: usize) -> Self {
        Dimension::Fixed(value)
    }

    /// Value of the dimension at scale `k`.
    ///
    /// Fails with `InvalidScale` when the value is negative or overflows.
    pub fn value_at(&self, k: i64) -> Result<usize> {
        match self {
            Dimension::Fixed(value) => Ok(*value),
            Dimension::Linear(function) => {
                let value = function
                    .checked_call(k)
                    .ok_or_else(|| TemplateError::invalid_scale(k, "dimension overflows"))?;
                usize::try_from(value).map_err(|_| {
                    TemplateError::invalid_scale(
                        k,
                        format!("dimension {function} evaluates to negative size {value}"),
                    )
                })
            }
        }
    }

    /// The same dimension, moved by `delta` at every scale.
    ///
    /// A linear dimension has its intercept moved. A fixed dimension fails
    /// with `InvalidConfiguration` if the moved value is negative or
    /// overflows.
    pub fn shifted(&self, delta: i64) -> Result<Self> {
        match self {
            Dimension::Linear(function) => Ok(Dimension::Linear(function.shifted(delta))),
            Dimension::Fixed(value) => {
                let moved = isize::try_from(delta)
                    .ok()
                    .and_then(|delta| value.checked_add_signed(delta))
                    .ok_or_else(|| {
                        TemplateError::invalid_configuration(format!(
                            "fixed dimension {value} cannot be shifted by {delta}"
                        ))
                    })?;
                Ok(Dimension::Fixed(moved))
            }
        }
    }

    /// True when the dimension depends on the scale.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Dimension::Linear(_))
    }
}

impl From<LinearFunction> for Dimension {
    fn from(function: LinearFunction) -> Self {
        Dimension::Linear(function)
    }
}
