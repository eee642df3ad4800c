use miette::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cost::regular_cost;
use crate::grid::Grid;
use crate::region::build_regions;

/// Totals the regular fencing cost over the whole grid: every region is
/// priced at its perimeter times its area.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input).context("load plot grid")?;
    info!(width = grid.width(), height = grid.height(), "loaded grid");

    let regions = build_regions(&grid);

    for region in &regions {
        debug!(
            label = %region.label(),
            area = region.area(),
            perimeter = region.perimeter(),
            cost = regular_cost(region),
            "sealed region"
        );
    }

    // The partition is sealed and read-only from here on, so per-region
    // costing is safe to fan out.
    let total: u64 = regions.par_iter().map(regular_cost).sum();

    Ok(total.to_string())
}
