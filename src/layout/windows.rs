//! Evenly spaced window placement along a wall.

use crate::primitives::{cast, Point2};
use crate::tolerance::VERTEX_EPSILON;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for [`repeating_window_centers`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowRun<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
    /// Minimum gap between the edges of adjacent windows.
    pub spacing: F,
    /// Width of a single window along the wall.
    pub width: F,
}

/// Placement of one window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowCenter<F> {
    pub point: Point2<F>,
    /// Normalized position along `start → end`, in `[0, 1]`.
    pub alpha: F,
}

/// Places as many windows as fit along `start → end`, centered as a group.
///
/// The first window starts at the segment start and each further window sits
/// `width + spacing` after the previous one. Placement stops before a window
/// would overrun the end. The run is then shifted by half of the leftover
/// length so both end margins are equal.
///
/// Returns an empty vector when not even one window fits.
///
/// # Example
///
/// ```
/// use plangraph::layout::{repeating_window_centers, WindowRun};
/// use plangraph::Point2;
///
/// let centers = repeating_window_centers(WindowRun {
///     start: Point2::new(0.0, 0.0),
///     end: Point2::new(100.0, 0.0),
///     spacing: 10.0,
///     width: 20.0,
/// });
/// assert_eq!(centers.len(), 3);
/// for (c, x) in centers.iter().zip([20.0, 50.0, 80.0]) {
///     assert!((c.point.x - x).abs() < 1e-9);
/// }
/// ```
pub fn repeating_window_centers<F: Float>(run: WindowRun<F>) -> Vec<WindowCenter<F>> {
    let WindowRun {
        start,
        end,
        spacing,
        width,
    } = run;

    let length = start.distance(end);
    let step = width + spacing;
    if width <= F::zero() || step <= F::zero() || length <= F::zero() {
        return Vec::new();
    }

    let half = width / cast(2.0);
    let slack: F = cast(VERTEX_EPSILON);

    let mut offsets = Vec::new();
    let mut d = half;
    while d + half <= length + slack {
        offsets.push(d);
        d = d + step;
    }

    let Some(&last) = offsets.last() else {
        return Vec::new();
    };
    let shift = (length - (last + half)) / cast(2.0);

    offsets
        .into_iter()
        .map(|offset| {
            let alpha = ((offset + shift) / length).max(F::zero()).min(F::one());
            WindowCenter {
                point: start.lerp(end, alpha),
                alpha,
            }
        })
        .collect()
}
