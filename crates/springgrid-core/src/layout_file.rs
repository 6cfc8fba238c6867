// ABOUTME: TOML description of a grid to solve.
// ABOUTME: Lists elements with preferred sizes plus optional grid overrides.

use serde::{Deserialize, Serialize};

use crate::{Config, ConfigError, GridMode, GridSpec, Size};

/// One element and its preferred size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(default)]
    pub name: String,
    pub width: i32,
    pub height: i32,
}

impl ElementSpec {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Grid settings; anything left out falls back to the config
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    /// Defaults to as many full rows as the elements fill
    pub rows: Option<usize>,
    /// Defaults to a single row holding every element
    pub cols: Option<usize>,
    pub mode: Option<GridMode>,
    pub pad_x: Option<i32>,
    pub pad_y: Option<i32>,
    pub origin_x: Option<i32>,
    pub origin_y: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub grid: GridSection,

    #[serde(default, rename = "element")]
    pub elements: Vec<ElementSpec>,
}

impl LayoutFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Resolve the grid to solve, filling gaps from `config`.
    ///
    /// A trailing partial row is left out when `rows` is derived.
    pub fn grid_spec(&self, config: &Config) -> Result<(GridSpec, GridMode), ConfigError> {
        let count = self.elements.len();
        if count == 0 {
            return Err(ConfigError::EmptyLayout);
        }

        let cols = self.grid.cols.unwrap_or(count);
        if cols == 0 {
            return Err(ConfigError::InvalidGrid("cols must be at least 1".into()));
        }
        let rows = self.grid.rows.unwrap_or(count / cols);
        if rows == 0 {
            return Err(ConfigError::InvalidGrid(format!(
                "{count} elements do not fill one row of {cols} columns"
            )));
        }

        let spec = GridSpec::new(rows, cols)
            .origin(
                self.grid.origin_x.unwrap_or(config.origin.x),
                self.grid.origin_y.unwrap_or(config.origin.y),
            )
            .padding(
                self.grid.pad_x.unwrap_or(config.padding.x),
                self.grid.pad_y.unwrap_or(config.padding.y),
            );
        let mode = self.grid.mode.unwrap_or(config.mode);

        Ok((spec, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Origin, Padding};

    const FORM: &str = r#"
[grid]
cols = 2
mode = "uniform"
pad_x = 5

[[element]]
name = "label"
width = 30
height = 10

[[element]]
name = "field"
width = 80
height = 14

[[element]]
width = 20
height = 12
"#;

    #[test]
    fn parses_elements_and_grid() {
        let layout = LayoutFile::parse(FORM).unwrap();
        assert_eq!(layout.elements.len(), 3);
        assert_eq!(layout.elements[1].name, "field");
        assert_eq!(layout.elements[1].size(), Size::new(80, 14));
        assert_eq!(layout.elements[2].name, "");
        assert_eq!(layout.grid.cols, Some(2));
    }

    #[test]
    fn grid_spec_merges_config() {
        let layout = LayoutFile::parse(FORM).unwrap();
        let config = Config {
            padding: Padding { x: 1, y: 2 },
            origin: Origin { x: 3, y: 4 },
            ..Config::default()
        };

        let (spec, mode) = layout.grid_spec(&config).unwrap();
        assert_eq!(mode, GridMode::Uniform);
        // Third element spills into a partial row and is left out
        assert_eq!((spec.rows, spec.cols), (1, 2));
        assert_eq!((spec.pad_x, spec.pad_y), (5, 2));
        assert_eq!((spec.origin_x, spec.origin_y), (3, 4));
    }

    #[test]
    fn missing_grid_is_a_single_row() {
        let layout = LayoutFile::parse(
            "[[element]]\nwidth = 1\nheight = 1\n[[element]]\nwidth = 2\nheight = 2\n",
        )
        .unwrap();
        let (spec, mode) = layout.grid_spec(&Config::default()).unwrap();
        assert_eq!((spec.rows, spec.cols), (1, 2));
        assert_eq!(mode, GridMode::Compact);
    }

    #[test]
    fn rejects_empty_and_zero_columns() {
        let empty = LayoutFile::default();
        assert!(matches!(
            empty.grid_spec(&Config::default()),
            Err(ConfigError::EmptyLayout)
        ));

        let mut layout = LayoutFile::parse(FORM).unwrap();
        layout.grid.cols = Some(0);
        assert!(matches!(
            layout.grid_spec(&Config::default()),
            Err(ConfigError::InvalidGrid(_))
        ));

        layout.grid.cols = Some(4);
        assert!(matches!(
            layout.grid_spec(&Config::default()),
            Err(ConfigError::InvalidGrid(_))
        ));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.toml");
        std::fs::write(&path, FORM).unwrap();

        let layout = LayoutFile::load(&path).unwrap();
        assert_eq!(layout, LayoutFile::parse(FORM).unwrap());
    }
}
