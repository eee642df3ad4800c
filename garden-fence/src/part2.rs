use miette::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cost::{discounted_cost, total_sides};
use crate::grid::Grid;
use crate::region::build_regions;

/// Totals the discounted fencing cost over the whole grid: every region
/// is priced at its number of straight fence sides times its area.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input).context("load plot grid")?;
    info!(width = grid.width(), height = grid.height(), "loaded grid");

    let regions = build_regions(&grid);

    for region in &regions {
        debug!(
            label = %region.label(),
            area = region.area(),
            sides = total_sides(region),
            cost = discounted_cost(region),
            "sealed region"
        );
    }

    let total: u64 = regions.par_iter().map(discounted_cost).sum();

    Ok(total.to_string())
}
