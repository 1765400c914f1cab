//! Grid configuration.
//!
//! [`GridConfig`] is plain serializable data, so hosts can keep it next to
//! the rest of their view settings:
//!
//! ```
//! use lattice_grid::{GridConfig, SelectionMode};
//!
//! let config = GridConfig::default()
//!     .with_cell_width(160.0)
//!     .with_selection_mode(SelectionMode::Single);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.effective_cell_width(), 160.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{DEFAULT_CELL_WIDTH, validate_cell_width};

/// How many cells may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// At most one cell; selecting clears the previous selection.
    Single,
    /// Any number of cells.
    #[default]
    Multiple,
}

/// Configuration of a [`DynamicGrid`](crate::DynamicGrid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Requested width of one cell.
    pub cell_width: f64,
    /// Multiplier applied to `cell_width`, used for zooming.
    pub cell_width_scale: f64,
    /// Selection mode of the position surface.
    pub selection_mode: SelectionMode,
    /// Width available to the grid when it is created.
    pub available_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_width_scale: 1.0,
            selection_mode: SelectionMode::default(),
            available_width: 0.0,
        }
    }
}

impl GridConfig {
    /// Sets the requested cell width.
    pub fn with_cell_width(mut self, width: f64) -> Self {
        self.cell_width = width;
        self
    }

    /// Sets the cell width multiplier.
    pub fn with_cell_width_scale(mut self, scale: f64) -> Self {
        self.cell_width_scale = scale;
        self
    }

    /// Sets the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Sets the initial available width.
    pub fn with_available_width(mut self, width: f64) -> Self {
        self.available_width = width;
        self
    }

    /// `cell_width * cell_width_scale`.
    pub fn effective_cell_width(&self) -> f64 {
        self.cell_width * self.cell_width_scale
    }

    /// Rejects cell widths that cannot produce a column count.
    pub fn validate(&self) -> Result<()> {
        validate_cell_width(self.cell_width)?;
        validate_cell_width(self.effective_cell_width())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.cell_width, 200.0);
        assert_eq!(config.cell_width_scale, 1.0);
        assert_eq!(config.selection_mode, SelectionMode::Multiple);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let config = GridConfig::default().with_cell_width(0.0);
        assert_eq!(config.validate(), Err(GridError::InvalidCellWidth { width: 0.0 }));

        let config = GridConfig::default().with_cell_width_scale(-2.0);
        assert_eq!(
            config.validate(),
            Err(GridError::InvalidCellWidth { width: -400.0 })
        );

        let config = GridConfig::default().with_cell_width(f64::NAN);
        assert!(config.validate().is_err());
    }
}
