//! Year-progress grid model.

use time::Date;

use super::summary::{DayCounts, SummaryIndex};

/// Weekday column headers, Sunday first (pt-BR single-letter abbreviations).
pub const WEEK_DAY_LABELS: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

pub const GRID_WEEKS: usize = 18;
pub const WEEK_COLUMNS: usize = 7;

/// The grid never renders fewer cells than 18 full weeks of columns; short
/// ranges early in the year are padded with inert filler cells.
pub const MIN_GRID_CELLS: usize = GRID_WEEKS * WEEK_COLUMNS;

/// One tappable day cell. `counts` is `None` when the summary carries no
/// entry for that day, which renders differently from zero completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: Date,
    pub counts: Option<DayCounts>,
}

/// The resolved grid: one cell per generated date plus trailing filler
/// padding the total up to [`MIN_GRID_CELLS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressGrid {
    pub cells: Vec<GridCell>,
    pub filler_count: usize,
}

impl ProgressGrid {
    pub fn build(dates: &[Date], summary: &SummaryIndex) -> Self {
        let cells: Vec<GridCell> = dates
            .iter()
            .map(|&date| GridCell {
                date,
                counts: summary.counts_for(date),
            })
            .collect();
        let filler_count = MIN_GRID_CELLS.saturating_sub(cells.len());

        Self {
            cells,
            filler_count,
        }
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len() + self.filler_count
    }
}
