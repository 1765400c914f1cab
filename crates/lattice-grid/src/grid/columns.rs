//! Column count policy: how many columns fit the available width.

use std::num::NonZeroUsize;

use lattice_grid_core::logging::targets;

use crate::error::{GridError, Result};

/// Default requested cell width, in layout units.
pub const DEFAULT_CELL_WIDTH: f64 = 200.0;

/// A column definition published to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridColumn {
    /// Column index.
    pub index: usize,
    /// Column width, the effective cell width.
    pub width: f64,
}

/// Number of columns for the given widths: `max(1, floor(available / cell))`.
///
/// Degenerate inputs (zero, negative or non-finite widths) yield one column.
pub fn desired_column_count(available_width: f64, cell_width: f64) -> NonZeroUsize {
    let fitted = (available_width / cell_width).floor();
    if fitted.is_finite() && fitted >= 1.0 {
        // Saturates for absurdly wide viewports.
        NonZeroUsize::new(fitted as usize).unwrap_or(NonZeroUsize::MIN)
    } else {
        NonZeroUsize::MIN
    }
}

/// Checks that a cell width can produce a column count.
pub(crate) fn validate_cell_width(width: f64) -> Result<f64> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(GridError::InvalidCellWidth { width })
    }
}

/// Tracks the inputs of the column count and republishes it only on change.
#[derive(Debug, Clone)]
pub struct ColumnCountPolicy {
    available_width: f64,
    cell_width: f64,
    scale: f64,
    columns: NonZeroUsize,
}

impl ColumnCountPolicy {
    /// Creates a policy for a requested cell width and scale multiplier.
    pub fn new(cell_width: f64, scale: f64, available_width: f64) -> Result<Self> {
        validate_cell_width(cell_width)?;
        let effective = validate_cell_width(cell_width * scale)?;
        Ok(Self {
            available_width,
            cell_width,
            scale,
            columns: desired_column_count(available_width, effective),
        })
    }

    /// The current column count.
    pub fn column_count(&self) -> NonZeroUsize {
        self.columns
    }

    /// The available width last reported by the layout.
    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    /// The requested cell width, before scaling.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// The cell width multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `cell_width * scale`, the width each column actually gets.
    pub fn effective_cell_width(&self) -> f64 {
        self.cell_width * self.scale
    }

    /// Records a new available width.
    ///
    /// Returns the new column count if it changed.
    pub fn set_available_width(&mut self, width: f64) -> Option<NonZeroUsize> {
        self.available_width = width;
        self.recompute()
    }

    /// Records a new requested cell width.
    ///
    /// Returns the new column count if it changed. Invalid widths are
    /// rejected without touching the policy.
    pub fn set_cell_width(&mut self, width: f64) -> Result<Option<NonZeroUsize>> {
        validate_cell_width(width)?;
        validate_cell_width(width * self.scale)?;
        self.cell_width = width;
        Ok(self.recompute())
    }

    /// Records a new cell width multiplier.
    pub fn set_scale(&mut self, scale: f64) -> Result<Option<NonZeroUsize>> {
        validate_cell_width(self.cell_width * scale)?;
        self.scale = scale;
        Ok(self.recompute())
    }

    /// Column definitions matching the current count and width.
    pub fn column_defs(&self) -> Vec<GridColumn> {
        let width = self.effective_cell_width();
        (0..self.columns.get())
            .map(|index| GridColumn { index, width })
            .collect()
    }

    fn recompute(&mut self) -> Option<NonZeroUsize> {
        let desired = desired_column_count(self.available_width, self.effective_cell_width());
        if desired == self.columns {
            return None;
        }
        tracing::debug!(
            target: targets::COLUMNS,
            from = self.columns.get(),
            to = desired.get(),
            available_width = self.available_width,
            cell_width = self.effective_cell_width(),
            "column count changed"
        );
        self.columns = desired;
        Some(desired)
    }
}

impl Default for ColumnCountPolicy {
    fn default() -> Self {
        Self {
            available_width: 0.0,
            cell_width: DEFAULT_CELL_WIDTH,
            scale: 1.0,
            columns: NonZeroUsize::MIN,
        }
    }
}

/// Brings `defs` in line with `count` columns of `width`.
///
/// Appends or truncates definitions and rewrites every width. Returns the
/// number of columns added and removed.
pub(crate) fn resize_column_defs(
    defs: &mut Vec<GridColumn>,
    count: NonZeroUsize,
    width: f64,
) -> (usize, usize) {
    let before = defs.len();
    let count = count.get();

    defs.truncate(count);
    for column in defs.iter_mut() {
        column.width = width;
    }
    defs.extend((before.min(count)..count).map(|index| GridColumn { index, width }));

    (count.saturating_sub(before), before.saturating_sub(count))
}
