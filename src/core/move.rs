use super::block::Block;
use super::colour::Colour;
use super::types::{Axis, Position, Rotation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ブロックに対する操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Rotate(Rotation),
    Swap(Axis),
    Smash,
    Paint(Colour),
    Combine,
    Pass,
}

impl Action {
    /// Every action a non-human player may try with the given paint colour.
    /// `Pass` is never part of this set.
    pub fn candidates(paint: Colour) -> [Action; 7] {
        [
            Action::Rotate(Rotation::Clockwise),
            Action::Rotate(Rotation::CounterClockwise),
            Action::Swap(Axis::Horizontal),
            Action::Swap(Axis::Vertical),
            Action::Smash,
            Action::Paint(paint),
            Action::Combine,
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Rotate(Rotation::Clockwise) => write!(f, "rotate clockwise"),
            Action::Rotate(Rotation::CounterClockwise) => write!(f, "rotate counter-clockwise"),
            Action::Swap(Axis::Horizontal) => write!(f, "swap horizontal"),
            Action::Swap(Axis::Vertical) => write!(f, "swap vertical"),
            Action::Smash => write!(f, "smash"),
            Action::Paint(colour) => write!(f, "paint {}", colour),
            Action::Combine => write!(f, "combine"),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// 指し手。対象ブロックは位置とレベルで指す (コピー後もたどれるように)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub position: Position,
    pub level: usize,
}

impl Move {
    pub fn new(action: Action, target: &Block) -> Self {
        Move {
            action,
            position: target.position,
            level: target.level,
        }
    }

    /// Pass always targets the whole board.
    pub fn pass(board: &Block) -> Self {
        Move::new(Action::Pass, board)
    }

    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_pass() {
            write!(f, "pass")
        } else {
            write!(f, "{} at {} (level {})", self.action, self.position, self.level)
        }
    }
}
