//! Layout helpers for interactive editing.
//!
//! These are the small geometric computations the editor runs while the user
//! drags: fitting a selection to an aspect ratio, spacing windows evenly
//! along a wall, and offering snap targets for rectangle corners.

mod aspect;
mod snaps;
mod windows;

pub use aspect::{fit_to_aspect_ratio, Extent, FitMode};
pub use snaps::{synthetic_rectangle_snaps, ReflectionAxis, SyntheticSnap};
pub use windows::{repeating_window_centers, WindowCenter, WindowRun};
