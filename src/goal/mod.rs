//! Player goals and the two scorers behind them.

pub mod blob;
pub mod perimeter;

use crate::core::{Block, Colour, PALETTE};
use crate::error::{Error, Result};
use crate::logic::flatten;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use blob::blob_score;
pub use perimeter::perimeter_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    /// Most target-colour cells on the outer edge, corners count double.
    Perimeter,
    /// Largest 4-connected region of the target colour.
    Blob,
}

/// プレイヤーの目標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub kind: GoalKind,
    pub colour: Colour,
}

impl Goal {
    pub fn new(kind: GoalKind, colour: Colour) -> Self {
        Goal { kind, colour }
    }

    /// Score of `board` for this goal, move penalties not included.
    pub fn score(&self, board: &Block) -> u32 {
        let grid = flatten(board);
        match self.kind {
            GoalKind::Perimeter => perimeter_score(&grid, self.colour),
            GoalKind::Blob => blob_score(&grid, self.colour),
        }
    }

    pub fn description(&self) -> String {
        match self.kind {
            GoalKind::Perimeter => format!(
                "Put the most possible units of {} on the outer perimeter.",
                self.colour
            ),
            GoalKind::Blob => format!(
                "Build the largest group of connected blocks of {}.",
                self.colour
            ),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} ({})", self.kind, self.colour)
    }
}

/// `n` goals of one randomly chosen kind, each with a different colour.
pub fn generate_goals<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<Goal>> {
    if n > PALETTE.len() {
        return Err(Error::TooManyGoals {
            requested: n,
            available: PALETTE.len(),
        });
    }
    let kind = if rng.gen_bool(0.5) {
        GoalKind::Perimeter
    } else {
        GoalKind::Blob
    };
    Ok(PALETTE
        .choose_multiple(rng, n)
        .map(|&colour| Goal::new(kind, colour))
        .collect())
}
