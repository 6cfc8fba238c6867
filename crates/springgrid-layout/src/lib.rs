// ABOUTME: Spring-constraint grid layout for springgrid.
// ABOUTME: Arranges a container's elements into uniform or compact grids.

mod container;
mod grid;
mod spring;

pub use container::{Bounds, Constraints, Edge, Element, SpringContainer, SpringPanel};
pub use grid::{locate, solve, solve_compact_grid, solve_uniform_grid, LayoutError};
pub use spring::Spring;
pub use springgrid_core::{GridMode, GridSpec, Rect, Size};
