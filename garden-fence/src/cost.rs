//! Fence costing over sealed regions.
//!
//! Two price models: the regular cost charges every unit of boundary
//! wall, the discounted cost charges per straight fence side. Side
//! counting reduces all four directions to one primitive: the boundary
//! points facing a direction are sorted and their maximal runs of
//! adjacent points are counted. Fence segments on left/right faces run
//! vertically, so those points are transposed first and the horizontal
//! run counter is applied in transposed space, where a row is `height`
//! cells long.

use itertools::Itertools;

use crate::adjacency::{are_points_adjacent, is_left_edge, is_right_edge, transpose};
use crate::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The coordinate one step in this direction, or `None` at the grid
    /// edge.
    fn step(self, idx: usize, width: usize, height: usize) -> Option<usize> {
        match self {
            Direction::Up => idx.checked_sub(width),
            Direction::Down => {
                let target = idx + width;
                (target < width * height).then_some(target)
            }
            Direction::Left => (!is_left_edge(idx, width)).then(|| idx - 1),
            Direction::Right => (!is_right_edge(idx, width)).then(|| idx + 1),
        }
    }
}

/// Cost of fencing the region at one price unit per boundary wall.
pub fn regular_cost(region: &Region) -> u64 {
    region.perimeter() * region.area()
}

/// Cost of fencing the region at one price unit per straight fence side.
pub fn discounted_cost(region: &Region) -> u64 {
    total_sides(region) * region.area()
}

/// Number of straight fence sides around the region.
///
/// A side is a maximal straight run of boundary edges facing the same
/// cardinal direction, so the total is the sum of the per-direction
/// segment counts. A single cell has one segment per direction, four
/// sides in all.
pub fn total_sides(region: &Region) -> u64 {
    Direction::ALL
        .iter()
        .map(|&direction| directional_segments(region, direction))
        .sum()
}

fn directional_segments(region: &Region, direction: Direction) -> u64 {
    let width = region.width();
    let height = region.height();
    let boundary = boundary_points(region, direction);

    match direction {
        Direction::Up | Direction::Down => adjacent_runs(&boundary, width),
        Direction::Left | Direction::Right => {
            let transposed: Vec<usize> = boundary
                .iter()
                .map(|&point| transpose(point, width, height))
                .sorted_unstable()
                .collect();
            adjacent_runs(&transposed, height)
        }
    }
}

/// Region cells with no same-region neighbor in `direction`, in
/// ascending linear order.
fn boundary_points(region: &Region, direction: Direction) -> Vec<usize> {
    region
        .coordinates()
        .filter(|&point| {
            direction
                .step(point, region.width(), region.height())
                .map_or(true, |target| !region.contains(target))
        })
        .collect()
}

/// Counts maximal runs of consecutive adjacent points in a sorted
/// sequence. Every non-adjacent consecutive pair opens a new run.
fn adjacent_runs(points: &[usize], width: usize) -> u64 {
    if points.is_empty() {
        return 0;
    }

    1 + points
        .iter()
        .tuple_windows()
        .filter(|(&a, &b)| !are_points_adjacent(a, b, width))
        .count() as u64
}
