use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面座標 (unit cell 単位, 左上が原点)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Quarter turns applied by a rotate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Number of clockwise quarter turns.
    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left and right halves trade places.
    Horizontal,
    /// Top and bottom halves trade places.
    Vertical,
}
