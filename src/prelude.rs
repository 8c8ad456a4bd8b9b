//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdsweep::prelude::*;
//! ```

pub use crate::closest_pair::closest_pair;
pub use crate::error::Error;
pub use crate::frontier::Frontier;
pub use crate::kd_tree::{Axis, KdTree, DEFAULT_MAX_DEPTH};
pub use crate::point::Point;
