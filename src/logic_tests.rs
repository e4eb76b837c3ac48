#[cfg(test)]
mod tests {
    use crate::core::{Block, Colour, Position, PALETTE};
    use crate::goal::{blob_score, perimeter_score, Goal, GoalKind};
    use crate::logic::{flatten, locate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_flatten_is_square_power_of_two() {
        let mut rng = StdRng::seed_from_u64(1);
        for depth in 0..=6 {
            let board = Block::random(depth, &mut rng);
            let grid = flatten(&board);
            assert_eq!(grid.len(), 1 << depth);
            assert!(grid.iter().all(|column| column.len() == 1 << depth));
        }
    }

    #[test]
    fn test_flatten_matches_locate_on_every_cell() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = Block::random(4, &mut rng);
        let grid = flatten(&board);
        for x in 0..16 {
            for y in 0..16 {
                let leaf = locate(&board, Position::new(x, y), 4).unwrap();
                assert!(leaf.is_leaf());
                assert_eq!(Some(grid[x][y]), leaf.colour, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_uniform_board_scores() {
        for depth in 0..=5 {
            let board = Block::root(Colour::OldOlive, depth);
            let side = 1u32 << depth;
            let blob = Goal::new(GoalKind::Blob, Colour::OldOlive);
            let perimeter = Goal::new(GoalKind::Perimeter, Colour::OldOlive);
            assert_eq!(blob.score(&board), side * side);
            let expected = if side == 1 { 2 } else { 4 * (side - 1) + 4 };
            assert_eq!(perimeter.score(&board), expected);
        }
    }

    #[test]
    fn test_missing_colour_scores_zero() {
        let mut board = Block::root(Colour::RealRed, 3);
        board.subdivide([
            Colour::RealRed,
            Colour::PacificPoint,
            Colour::RealRed,
            Colour::PacificPoint,
        ]);
        let grid = flatten(&board);
        for colour in [Colour::OldOlive, Colour::DaffodilDelight] {
            assert_eq!(perimeter_score(&grid, colour), 0);
            assert_eq!(blob_score(&grid, colour), 0);
        }
    }

    #[test]
    fn test_scores_on_random_boards_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for depth in 1..=5 {
            let board = Block::random(depth, &mut rng);
            let side = 1u32 << depth;
            let grid = flatten(&board);
            for colour in PALETTE {
                assert!(blob_score(&grid, colour) <= side * side);
                assert!(perimeter_score(&grid, colour) <= 4 * side);
            }
        }
    }

    #[test]
    fn test_locate_edges_are_exclusive() {
        let mut board = Block::root(Colour::RealRed, 3);
        board.subdivide([
            Colour::RealRed,
            Colour::PacificPoint,
            Colour::OldOlive,
            Colour::DaffodilDelight,
        ]);
        board.children[1].subdivide([
            Colour::RealRed,
            Colour::RealRed,
            Colour::OldOlive,
            Colour::OldOlive,
        ]);

        let target = &board.children[1].children[3];
        assert_eq!(target.position, Position::new(2, 2));
        assert_eq!(target.size, 2);

        let inside = Position::new(3, 3);
        let found = locate(&board, inside, target.level).unwrap();
        assert_eq!(found, target);

        let right = locate(&board, Position::new(4, 3), target.level).unwrap();
        assert_ne!(right, target);
        assert_eq!(right.position, Position::new(4, 0));

        let below = locate(&board, Position::new(3, 4), target.level).unwrap();
        assert_ne!(below, target);
        assert_eq!(below.position, Position::new(0, 4));

        assert!(locate(&board, Position::new(8, 3), 0).is_none());
        assert!(locate(&board, Position::new(3, 8), 2).is_none());
    }

    #[test]
    fn test_two_by_two_perimeter_example() {
        let mut board = Block::root(Colour::RealRed, 1);
        board.subdivide([
            Colour::RealRed,
            Colour::RealRed,
            Colour::PacificPoint,
            Colour::PacificPoint,
        ]);
        // both red cells are corners on a 2x2 board
        let goal = Goal::new(GoalKind::Perimeter, Colour::RealRed);
        assert_eq!(goal.score(&board), 2 + 2);
    }
}
