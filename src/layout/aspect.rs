//! Aspect-ratio fitting of a 2D selection.

use crate::primitives::cast;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent<F> {
    pub min: F,
    pub max: F,
}

impl<F: Float> Extent<F> {
    #[inline]
    pub fn new(min: F, max: F) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn length(self) -> F {
        self.max - self.min
    }

    #[inline]
    pub fn center(self) -> F {
        (self.min + self.max) / cast(2.0)
    }

    /// An extent of `length` centered where this one is.
    #[inline]
    pub fn resized(self, length: F) -> Self {
        let half = length / cast(2.0);
        let c = self.center();
        Self::new(c - half, c + half)
    }
}

/// Which axis [`fit_to_aspect_ratio`] adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FitMode {
    /// Grow the axis that is too short.
    #[default]
    Expand,
    /// Shrink the axis that is too long.
    Contract,
}

/// Adjusts two extents so that `width / height == ratio`.
///
/// Only one axis changes, symmetrically about its center. A non-positive or
/// non-finite ratio leaves both extents untouched.
///
/// # Example
///
/// ```
/// use plangraph::layout::{fit_to_aspect_ratio, Extent, FitMode};
///
/// let (x, y) = fit_to_aspect_ratio(
///     Extent::new(0.0, 10.0),
///     Extent::new(0.0, 10.0),
///     2.0,
///     FitMode::Expand,
/// );
/// assert_eq!(x, Extent::new(-5.0, 15.0));
/// assert_eq!(y, Extent::new(0.0, 10.0));
/// ```
pub fn fit_to_aspect_ratio<F: Float>(
    x_extent: Extent<F>,
    y_extent: Extent<F>,
    ratio: F,
    mode: FitMode,
) -> (Extent<F>, Extent<F>) {
    if !ratio.is_finite() || ratio <= F::zero() {
        return (x_extent, y_extent);
    }

    let width = x_extent.length();
    let height = y_extent.length();
    let too_narrow = width < height * ratio;

    match (mode, too_narrow) {
        (FitMode::Expand, true) | (FitMode::Contract, false) => {
            (x_extent.resized(height * ratio), y_extent)
        }
        (FitMode::Expand, false) | (FitMode::Contract, true) => {
            (x_extent, y_extent.resized(width / ratio))
        }
    }
}
