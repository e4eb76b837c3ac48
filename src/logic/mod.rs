use crate::core::{Block, Colour, Move, Position};
use crate::error::{Error, Result};
use rand::Rng;

/// Unit cells of a board: `grid[x][y]` is column `x`, row `y`, `grid[0][0]`
/// the top-left cell.
pub type Grid = Vec<Vec<Colour>>;

/// 四分木を unit cell の二次元配列に展開する
///
/// The result is `2^(max_depth - level)` cells on each side.
pub fn flatten(block: &Block) -> Grid {
    let side = block.unit_side();

    if block.is_leaf() {
        let colour = match block.colour {
            Some(colour) => colour,
            None => unreachable!("leaf block at {} has no colour", block.position),
        };
        vec![vec![colour; side]; side]
    } else {
        let [top_right, top_left, bottom_left, bottom_right] = [
            flatten(&block.children[0]),
            flatten(&block.children[1]),
            flatten(&block.children[2]),
            flatten(&block.children[3]),
        ];

        let mut grid = Vec::with_capacity(side);
        for (top, bottom) in top_left.into_iter().zip(bottom_left) {
            grid.push([top, bottom].concat());
        }
        for (top, bottom) in top_right.into_iter().zip(bottom_right) {
            grid.push([top, bottom].concat());
        }
        grid
    }
}

/// The node at `level` containing `point`.
///
/// When the board stops subdividing above `level` at that point, the
/// deepest leaf there is returned instead. `None` only when the point is
/// outside `block`.
pub fn locate(block: &Block, point: Position, level: usize) -> Option<&Block> {
    debug_assert!(level <= block.max_depth);
    if block.level > level || !block.contains(point) {
        return None;
    }
    if block.level == level || block.is_leaf() {
        return Some(block);
    }
    block
        .children
        .iter()
        .find(|child| child.contains(point))
        .and_then(|child| locate(child, point, level))
}

pub fn locate_mut(block: &mut Block, point: Position, level: usize) -> Option<&mut Block> {
    debug_assert!(level <= block.max_depth);
    if block.level > level || !block.contains(point) {
        return None;
    }
    if block.level == level || block.is_leaf() {
        return Some(block);
    }
    block
        .children
        .iter_mut()
        .find(|child| child.contains(point))
        .and_then(|child| locate_mut(child, point, level))
}

/// 指し手を盤面に適用する
///
/// Returns `Ok(false)` when the target cannot be found or the action is
/// invalid there; the board is left untouched in that case.
pub fn apply_move<R: Rng + ?Sized>(board: &mut Block, mv: &Move, rng: &mut R) -> Result<bool> {
    if mv.level > board.max_depth {
        return Err(Error::DepthOutOfRange {
            level: mv.level,
            max_depth: board.max_depth,
        });
    }
    match locate_mut(board, mv.position, mv.level) {
        Some(target) => Ok(target.perform(&mv.action, rng)),
        None => Ok(false),
    }
}
