// ABOUTME: Grid specification shared by the solvers and the config layer.
// ABOUTME: Row/column counts, starting offset, inter-cell padding, and solve mode.

use serde::{Deserialize, Serialize};

/// How cell sizes are shared across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridMode {
    /// Every cell gets the widest width and the tallest height
    Uniform,
    /// Width is shared per column, height per row
    #[default]
    Compact,
}

impl GridMode {
    pub fn label(&self) -> &'static str {
        match self {
            GridMode::Uniform => "uniform",
            GridMode::Compact => "compact",
        }
    }
}

/// Shape and spacing of a grid layout.
///
/// Cells are addressed row-major: the element at `(row, col)` is
/// `row * cols + col` in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Left edge of the first column
    pub origin_x: i32,
    /// Top edge of the first row
    pub origin_y: i32,
    /// Horizontal gap after every column (including the last)
    pub pad_x: i32,
    /// Vertical gap after every row (including the last)
    pub pad_y: i32,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            origin_x: 0,
            origin_y: 0,
            pad_x: 0,
            pad_y: 0,
        }
    }

    pub fn origin(mut self, x: i32, y: i32) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn padding(mut self, x: i32, y: i32) -> Self {
        self.pad_x = x;
        self.pad_y = y;
        self
    }

    /// Number of cells, or `None` if rows * cols overflows
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.cols
    }

    pub fn col_of(&self, index: usize) -> usize {
        index % self.cols
    }
}
