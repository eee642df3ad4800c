//! Adjacency queries over linear grid coordinates.
//!
//! Cells are addressed by a single `usize`, `idx = width * row + col`,
//! row-major and 0-indexed. Naive `±1` adjacency on a linearized grid is
//! wrong at row boundaries, so every horizontal step is guarded against
//! wrapping into the neighboring row.

/// Returns true if `idx` sits on the grid's left boundary.
pub fn is_left_edge(idx: usize, width: usize) -> bool {
    idx % width == 0
}

/// Returns true if `idx` sits on the grid's right boundary.
pub fn is_right_edge(idx: usize, width: usize) -> bool {
    idx % width == width - 1
}

/// Returns true iff `b` is exactly one step left, right, up, or down of
/// `a`. Horizontal steps never cross a row boundary: two indices that
/// differ by one but sit in different rows are not adjacent.
pub fn are_points_adjacent(a: usize, b: usize, width: usize) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let delta = hi - lo;

    // Vertical first: on a width-1 grid a vertical step is also a delta
    // of one and must win over the horizontal edge guard.
    if delta == width {
        return true;
    }

    delta == 1 && !is_right_edge(lo, width)
}

/// Maps `idx` to its position in the transposed grid, swapping the row
/// and column roles. The transposed grid has width `height`.
pub fn transpose(idx: usize, width: usize, height: usize) -> usize {
    let row = idx / width;
    let col = idx % width;
    col * height + row
}

/// The in-bounds 4-connected neighbors of `idx`.
pub fn neighbors(idx: usize, width: usize, height: usize) -> impl Iterator<Item = usize> {
    let up = idx.checked_sub(width);
    let down = (idx + width < width * height).then_some(idx + width);
    let left = (!is_left_edge(idx, width)).then(|| idx - 1);
    let right = (!is_right_edge(idx, width)).then(|| idx + 1);

    [up, down, left, right].into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(4, true)]
    #[case(8, true)]
    #[case(1, false)]
    #[case(3, false)]
    #[case(7, false)]
    fn test_is_left_edge(#[case] idx: usize, #[case] expected: bool) {
        assert_eq!(expected, is_left_edge(idx, 4));
    }

    #[rstest]
    #[case(3, true)]
    #[case(7, true)]
    #[case(11, true)]
    #[case(0, false)]
    #[case(4, false)]
    #[case(6, false)]
    fn test_is_right_edge(#[case] idx: usize, #[case] expected: bool) {
        assert_eq!(expected, is_right_edge(idx, 4));
    }

    #[rstest]
    #[case::horizontal(0, 1, 4, true)]
    #[case::horizontal_reversed(2, 1, 4, true)]
    #[case::vertical(0, 4, 4, true)]
    #[case::vertical_reversed(8, 4, 4, true)]
    #[case::row_wrap(3, 4, 4, false)]
    #[case::row_wrap_reversed(4, 3, 4, false)]
    #[case::row_wrap_interior(7, 8, 4, false)]
    #[case::diagonal(0, 5, 4, false)]
    #[case::same_point(5, 5, 4, false)]
    #[case::two_apart(1, 3, 4, false)]
    #[case::single_column(0, 1, 1, true)]
    fn test_are_points_adjacent(
        #[case] a: usize,
        #[case] b: usize,
        #[case] width: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(expected, are_points_adjacent(a, b, width));
    }

    /// The edge-wrap guard holds along the entire seam of a grid.
    #[test]
    fn test_no_wraparound_along_seam() {
        let width = 5;
        for row in 0..4 {
            let right = width * row + (width - 1);
            assert!(!are_points_adjacent(right, right + 1, width));
            assert!(!are_points_adjacent(right + 1, right, width));
        }
    }

    #[rstest]
    #[case::square_off_diagonal(1, 3, 3, 3)]
    #[case::square_off_diagonal_far(5, 3, 3, 7)]
    #[case::square_center(4, 3, 3, 4)]
    #[case::wide_grid(4, 3, 2, 3)]
    #[case::wide_grid_corner(2, 3, 2, 4)]
    fn test_transpose(
        #[case] idx: usize,
        #[case] width: usize,
        #[case] height: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(expected, transpose(idx, width, height));
    }

    /// Transposing twice with swapped dimensions is the identity, square
    /// or not.
    #[test]
    fn test_transpose_involution() {
        let (width, height) = (4, 3);
        for idx in 0..width * height {
            assert_eq!(idx, transpose(transpose(idx, width, height), height, width));
        }
    }

    #[test]
    fn test_neighbors() {
        let collect = |idx| neighbors(idx, 3, 3).collect::<Vec<_>>();

        let mut corner = collect(0);
        corner.sort_unstable();
        assert_eq!(vec![1, 3], corner);

        let mut center = collect(4);
        center.sort_unstable();
        assert_eq!(vec![1, 3, 5, 7], center);

        let mut right_edge = collect(5);
        right_edge.sort_unstable();
        assert_eq!(vec![2, 4, 8], right_edge);
    }
}
