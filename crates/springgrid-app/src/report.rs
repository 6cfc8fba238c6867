// ABOUTME: Solved layout output for the command line.
// ABOUTME: Renders cell rectangles and panel size as a text table or JSON.

use std::io::Write;

use serde::Serialize;
use springgrid_core::{GridMode, GridSpec, OutputFormat};
use springgrid_layout::SpringPanel;

#[derive(Debug, Serialize)]
pub struct CellReport {
    pub row: usize,
    pub col: usize,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: GridMode,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<CellReport>,
    pub width: i32,
    pub height: i32,
}

impl Report {
    /// Collect the first `rows * cols` cells of a solved panel
    pub fn from_panel(panel: &SpringPanel, spec: &GridSpec, mode: GridMode) -> Self {
        let cells = panel
            .elements()
            .iter()
            .take(spec.rows * spec.cols)
            .enumerate()
            .map(|(index, element)| {
                let rect = element.rect();
                CellReport {
                    row: spec.row_of(index),
                    col: spec.col_of(index),
                    name: element.name().to_string(),
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                }
            })
            .collect();
        let size = panel.size().unwrap_or_default();

        Self {
            mode,
            rows: spec.rows,
            cols: spec.cols,
            cells,
            width: size.width,
            height: size.height,
        }
    }

    pub fn write(&self, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Table => {
                writeln!(
                    out,
                    "{} grid, {} x {}",
                    self.mode.label(),
                    self.rows,
                    self.cols
                )?;
                writeln!(
                    out,
                    "{:>4} {:>4}  {:<16} {:>6} {:>6} {:>6} {:>6}",
                    "row", "col", "name", "x", "y", "width", "height"
                )?;
                for cell in &self.cells {
                    writeln!(
                        out,
                        "{:>4} {:>4}  {:<16} {:>6} {:>6} {:>6} {:>6}",
                        cell.row, cell.col, cell.name, cell.x, cell.y, cell.width, cell.height
                    )?;
                }
                writeln!(out, "panel size: {} x {}", self.width, self.height)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use springgrid_core::Size;
    use springgrid_layout::solve;

    fn solved() -> (SpringPanel, GridSpec) {
        let mut panel = SpringPanel::new();
        for (i, (w, h)) in [(30, 10), (20, 15), (50, 25), (20, 5)].into_iter().enumerate() {
            panel.push(format!("c{i}"), Size::new(w, h));
        }
        let spec = GridSpec::new(2, 2).padding(2, 2);
        solve(&mut panel, &spec, GridMode::Compact).unwrap();
        (panel, spec)
    }

    #[test]
    fn report_lists_cells_row_major() {
        let (panel, spec) = solved();
        let report = Report::from_panel(&panel, &spec, GridMode::Compact);

        assert_eq!(report.cells.len(), 4);
        assert_eq!((report.cells[3].row, report.cells[3].col), (1, 1));
        assert_eq!((report.cells[3].x, report.cells[3].y), (52, 17));
        assert_eq!((report.width, report.height), (74, 44));
    }

    #[test]
    fn json_output() {
        let (panel, spec) = solved();
        let report = Report::from_panel(&panel, &spec, GridMode::Compact);
        let mut out = Vec::new();
        report.write(OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["mode"], "compact");
        assert_eq!(value["width"], 74);
        assert_eq!(value["cells"][1]["name"], "c1");
    }

    #[test]
    fn table_output() {
        let (panel, spec) = solved();
        let report = Report::from_panel(&panel, &spec, GridMode::Compact);
        let mut out = Vec::new();
        report.write(OutputFormat::Table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("compact grid, 2 x 2"));
        assert!(text.trim_end().ends_with("panel size: 74 x 44"));
        assert_eq!(text.lines().count(), 7);
    }
}
