// ABOUTME: Uniform and compact grid solvers over spring containers.
// ABOUTME: Chains cell positions row-major and sets the container's bounds.

use springgrid_core::{GridMode, GridSpec};

use crate::{Bounds, Constraints, Edge, Element, Spring, SpringContainer, SpringPanel};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid grid configuration: {0}")]
    Configuration(String),

    #[error("Cell ({row}, {col}) is outside a {cols}-column grid of {len} elements")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        cols: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn extent(self) -> Edge {
        match self {
            Axis::Horizontal => Edge::Width,
            Axis::Vertical => Edge::Height,
        }
    }
}

fn cell_index(len: usize, cols: usize, row: usize, col: usize) -> Result<usize, LayoutError> {
    row.checked_mul(cols)
        .and_then(|base| base.checked_add(col))
        .filter(|&index| col < cols && index < len)
        .ok_or(LayoutError::IndexOutOfRange {
            row,
            col,
            cols,
            len,
        })
}

/// Constraints of the cell at `(row, col)` in a row-major grid of `cols` columns
pub fn locate<C: SpringContainer + ?Sized>(
    container: &C,
    cols: usize,
    row: usize,
    col: usize,
) -> Result<&Constraints, LayoutError> {
    let index = cell_index(container.len(), cols, row, col)?;
    container
        .constraints(index)
        .ok_or(LayoutError::IndexOutOfRange {
            row,
            col,
            cols,
            len: container.len(),
        })
}

impl SpringPanel {
    /// Element at `(row, col)` in a row-major grid of `cols` columns
    pub fn element_at(
        &self,
        cols: usize,
        row: usize,
        col: usize,
    ) -> Result<&Element, LayoutError> {
        let index = cell_index(self.elements().len(), cols, row, col)?;
        self.element(index).ok_or(LayoutError::IndexOutOfRange {
            row,
            col,
            cols,
            len: self.elements().len(),
        })
    }
}

/// Check the grid against the container, returning the number of cells
fn validate<C: SpringContainer + ?Sized>(
    container: &C,
    spec: &GridSpec,
) -> Result<usize, LayoutError> {
    if spec.rows == 0 || spec.cols == 0 {
        return Err(LayoutError::Configuration(format!(
            "grid needs at least one row and one column, got {}x{}",
            spec.rows, spec.cols
        )));
    }
    let count = spec.cell_count().ok_or_else(|| {
        LayoutError::Configuration(format!("{}x{} grid is too large", spec.rows, spec.cols))
    })?;
    if count > container.len() {
        return Err(LayoutError::Configuration(format!(
            "{}x{} grid needs {} elements, container has {}",
            spec.rows,
            spec.cols,
            count,
            container.len()
        )));
    }
    Ok(count)
}

/// Largest extent along `axis` within each group of cells.
///
/// `key` maps `(row, col)` to a group in `0..groups`; each group is folded
/// with pairwise max, seeded from its first cell in row-major order.
fn group_max<C, K>(
    container: &C,
    spec: &GridSpec,
    axis: Axis,
    groups: usize,
    key: K,
) -> Result<Vec<Spring>, LayoutError>
where
    C: SpringContainer + ?Sized,
    K: Fn(usize, usize) -> usize,
{
    let mut buckets: Vec<Vec<Spring>> = vec![Vec::new(); groups];
    for row in 0..spec.rows {
        for col in 0..spec.cols {
            let constraints = locate(container, spec.cols, row, col)?;
            let bucket = buckets.get_mut(key(row, col)).ok_or_else(|| {
                LayoutError::Configuration(format!("cell ({row}, {col}) maps to no group"))
            })?;
            bucket.push(constraints.edge(axis.extent()));
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(group, springs)| {
            Spring::fold_max(springs)
                .ok_or_else(|| LayoutError::Configuration(format!("group {group} has no cells")))
        })
        .collect()
}

/// Write the buffered constraint sets and bounds in one go
fn commit<C: SpringContainer + ?Sized>(
    container: &mut C,
    cells: Vec<Constraints>,
    bounds: Bounds,
) {
    tracing::trace!(cells = cells.len(), "committing grid constraints");
    for (index, constraints) in cells.into_iter().enumerate() {
        if let Some(slot) = container.constraints_mut(index) {
            *slot = constraints;
        }
    }
    container.set_bounds(bounds);
}

/// Lay out the first `rows * cols` elements as a grid of identical cells.
///
/// Every cell takes the largest width and the largest height found among
/// them. Cells chain off their left and upper neighbours, and the container
/// grows to the last cell's far edges plus one more padding.
pub fn solve_uniform_grid<C: SpringContainer + ?Sized>(
    container: &mut C,
    spec: &GridSpec,
) -> Result<(), LayoutError> {
    let count = validate(container, spec)?;
    tracing::debug!(rows = spec.rows, cols = spec.cols, "solving uniform grid");

    let single = |springs: Vec<Spring>| {
        springs
            .into_iter()
            .next()
            .ok_or_else(|| LayoutError::Configuration("grid has no cells".into()))
    };
    let width = single(group_max(&*container, spec, Axis::Horizontal, 1, |_, _| 0)?)?;
    let height = single(group_max(&*container, spec, Axis::Vertical, 1, |_, _| 0)?)?;

    let pad_x = Spring::constant(spec.pad_x);
    let pad_y = Spring::constant(spec.pad_y);
    let origin_x = Spring::constant(spec.origin_x);
    let origin_y = Spring::constant(spec.origin_y);

    let mut cells: Vec<Constraints> = Vec::with_capacity(count);
    for index in 0..count {
        let x = if spec.col_of(index) == 0 {
            origin_x.clone()
        } else {
            Spring::sum(cells[index - 1].east(), pad_x.clone())
        };
        let y = if spec.row_of(index) == 0 {
            origin_y.clone()
        } else {
            Spring::sum(cells[index - spec.cols].south(), pad_y.clone())
        };
        cells.push(Constraints::new(x, y, width.clone(), height.clone()));
    }

    let last = cells
        .last()
        .ok_or_else(|| LayoutError::Configuration("grid has no cells".into()))?;
    let bounds = Bounds::new(
        Spring::sum(last.east(), pad_x),
        Spring::sum(last.south(), pad_y),
    );

    commit(container, cells, bounds);
    Ok(())
}

/// Lay out the first `rows * cols` elements as a compact grid.
///
/// Each column is as wide as its widest cell and each row as tall as its
/// tallest cell. Columns and rows are placed by running cursors that advance
/// by the extent plus padding; the final cursors become the container bounds.
pub fn solve_compact_grid<C: SpringContainer + ?Sized>(
    container: &mut C,
    spec: &GridSpec,
) -> Result<(), LayoutError> {
    let count = validate(container, spec)?;
    tracing::debug!(rows = spec.rows, cols = spec.cols, "solving compact grid");

    let widths = group_max(&*container, spec, Axis::Horizontal, spec.cols, |_, col| col)?;
    let heights = group_max(&*container, spec, Axis::Vertical, spec.rows, |row, _| row)?;

    let (xs, east) = advance(spec.origin_x, &widths, spec.pad_x);
    let (ys, south) = advance(spec.origin_y, &heights, spec.pad_y);

    let cells = (0..count)
        .map(|index| {
            let (row, col) = (spec.row_of(index), spec.col_of(index));
            Constraints::new(
                xs[col].clone(),
                ys[row].clone(),
                widths[col].clone(),
                heights[row].clone(),
            )
        })
        .collect();

    commit(container, cells, Bounds::new(east, south));
    Ok(())
}

/// Start of each track along one axis, plus the cursor after the last one
fn advance(origin: i32, extents: &[Spring], pad: i32) -> (Vec<Spring>, Spring) {
    let pad = Spring::constant(pad);
    let mut cursor = Spring::constant(origin);
    let mut starts = Vec::with_capacity(extents.len());
    for extent in extents {
        starts.push(cursor.clone());
        cursor = Spring::sum(cursor, Spring::sum(extent.clone(), pad.clone()));
    }
    (starts, cursor)
}

/// Run the solver for `mode`
pub fn solve<C: SpringContainer + ?Sized>(
    container: &mut C,
    spec: &GridSpec,
    mode: GridMode,
) -> Result<(), LayoutError> {
    match mode {
        GridMode::Uniform => solve_uniform_grid(container, spec),
        GridMode::Compact => solve_compact_grid(container, spec),
    }
}
