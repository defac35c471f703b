//! Sprite layout resolution.
//!
//! Turns a grid description into concrete sheet regions. Stylesheet rules
//! carry their own offsets and need no layout step.

mod grid;

pub use grid::{plan, AxisMode, GridCursor, GridLayout, Placement, Placements};
