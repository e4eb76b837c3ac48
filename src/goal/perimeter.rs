use crate::core::Colour;
use crate::logic::Grid;

/// Target-colour cells on the outer edge. Edge cells score 1, corner cells 2.
pub fn perimeter_score(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.len();
    if side == 0 {
        return 0;
    }
    let last = side - 1;
    let mut score = 0;

    for i in 1..last {
        for (x, y) in [(i, 0), (i, last), (0, i), (last, i)] {
            if grid[x][y] == colour {
                score += 1;
            }
        }
    }

    // 1x1 の盤面では四隅が同じセルになる
    let mut corners = vec![(0, 0), (0, last), (last, 0), (last, last)];
    corners.sort_unstable();
    corners.dedup();
    for (x, y) in corners {
        if grid[x][y] == colour {
            score += 2;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Block;
    use crate::logic::flatten;

    const R: Colour = Colour::RealRed;
    const B: Colour = Colour::PacificPoint;

    #[test]
    fn uniform_board_scores_whole_edge() {
        for depth in 1..=5 {
            let grid = flatten(&Block::root(R, depth));
            let side = 1u32 << depth;
            assert_eq!(perimeter_score(&grid, R), 4 * (side - 1) + 4);
        }
    }

    #[test]
    fn single_cell_board_is_one_corner() {
        let grid = flatten(&Block::root(R, 0));
        assert_eq!(perimeter_score(&grid, R), 2);
        assert_eq!(perimeter_score(&grid, B), 0);
    }

    #[test]
    fn two_by_two_top_row() {
        let mut board = Block::root(R, 1);
        board.subdivide([R, R, B, B]);
        let grid = flatten(&board);
        assert_eq!(perimeter_score(&grid, R), 4);
        assert_eq!(perimeter_score(&grid, B), 4);
        assert_eq!(perimeter_score(&grid, Colour::OldOlive), 0);
    }

    #[test]
    fn interior_cells_do_not_count() {
        let mut board = Block::root(B, 2);
        board.subdivide([R, B, B, B]);
        let grid = flatten(&board);
        // (2,0) edge, (3,0) corner, (3,1) edge, (2,1) interior
        assert_eq!(perimeter_score(&grid, R), 1 + 2 + 1);
    }
}
