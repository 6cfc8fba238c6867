// ABOUTME: Shared types and configuration for springgrid.
// ABOUTME: Defines geometry, grid specifications, and config/layout file handling.

pub mod config;
pub mod geometry;
pub mod grid;
pub mod layout_file;

pub use config::{Config, ConfigError, Origin, OutputFormat, Padding};
pub use geometry::{Rect, Size};
pub use grid::{GridMode, GridSpec};
pub use layout_file::{ElementSpec, GridSection, LayoutFile};
