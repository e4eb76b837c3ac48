use super::colour::{Colour, PALETTE};
use super::r#move::Action;
use super::types::{Axis, Position, Rotation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 四分木の盤面ノード
///
/// A node is a leaf iff `children` is empty; a leaf carries a colour, an
/// internal node carries `None` and exactly four children in
/// `[top-right, top-left, bottom-left, bottom-right]` order.
/// Positions and sizes are absolute, in unit cells, so the root of a board
/// with `max_depth = d` is `2^d` cells wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub position: Position,
    pub size: usize,
    pub level: usize,
    pub max_depth: usize,
    pub colour: Option<Colour>,
    pub children: Vec<Block>,
}

pub fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

impl Block {
    pub fn leaf(
        position: Position,
        size: usize,
        colour: Colour,
        level: usize,
        max_depth: usize,
    ) -> Self {
        Block {
            position,
            size,
            level,
            max_depth,
            colour: Some(colour),
            children: Vec::new(),
        }
    }

    /// Single-coloured board whose unit cells are 1x1.
    pub fn root(colour: Colour, max_depth: usize) -> Self {
        Block::leaf(Position::new(0, 0), 1 << max_depth, colour, 0, max_depth)
    }

    /// Random board. Every node under `max_depth` is split with probability
    /// `exp(-0.25 * level)`, the root always is.
    pub fn random<R: Rng + ?Sized>(max_depth: usize, rng: &mut R) -> Self {
        let mut board = Block::root(random_colour(rng), max_depth);
        if board.smash(rng) {
            board.grow(rng);
        }
        board
    }

    fn grow<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for child in self.children.iter_mut() {
            let p = (-0.25 * child.level as f64).exp();
            if child.level < child.max_depth && rng.gen::<f64>() < p && child.smash(rng) {
                child.grow(rng);
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Side length of this node in unit cells.
    pub fn unit_side(&self) -> usize {
        1 << (self.max_depth - self.level)
    }

    /// Top/left edges are inside, bottom/right edges are not.
    pub fn contains(&self, point: Position) -> bool {
        self.position.x <= point.x
            && point.x < self.position.x + self.size
            && self.position.y <= point.y
            && point.y < self.position.y + self.size
    }

    fn child_positions(&self) -> [Position; 4] {
        let half = self.size / 2;
        let Position { x, y } = self.position;
        [
            Position::new(x + half, y),
            Position::new(x, y),
            Position::new(x, y + half),
            Position::new(x + half, y + half),
        ]
    }

    /// Replace this node with four leaves of the given colours, one level deeper.
    pub fn subdivide(&mut self, colours: [Colour; 4]) -> bool {
        if self.level >= self.max_depth {
            return false;
        }
        let half = self.size / 2;
        let (level, max_depth) = (self.level + 1, self.max_depth);
        self.children = self
            .child_positions()
            .into_iter()
            .zip(colours)
            .map(|(pos, colour)| Block::leaf(pos, half, colour, level, max_depth))
            .collect();
        self.colour = None;
        true
    }

    /// Rewrite the absolute position of this node and all its descendants.
    fn update_position(&mut self, position: Position) {
        self.position = position;
        if self.is_leaf() {
            return;
        }
        let positions = self.child_positions();
        for (child, pos) in self.children.iter_mut().zip(positions) {
            child.update_position(pos);
        }
    }

    pub fn smash<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let colours = [
            random_colour(rng),
            random_colour(rng),
            random_colour(rng),
            random_colour(rng),
        ];
        self.subdivide(colours)
    }

    pub fn swap(&mut self, axis: Axis) -> bool {
        if self.is_leaf() {
            return false;
        }
        match axis {
            Axis::Horizontal => {
                self.children.swap(0, 1);
                self.children.swap(2, 3);
            }
            Axis::Vertical => {
                self.children.swap(0, 3);
                self.children.swap(1, 2);
            }
        }
        self.update_position(self.position);
        true
    }

    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        if self.is_leaf() {
            return false;
        }
        for _ in 0..rotation.quarter_turns() {
            self.rotate_clockwise();
        }
        self.update_position(self.position);
        true
    }

    // 右上 <- 左上 <- 左下 <- 右下 <- 右上
    fn rotate_clockwise(&mut self) {
        if self.is_leaf() {
            return;
        }
        self.children.rotate_left(1);
        for child in self.children.iter_mut() {
            child.rotate_clockwise();
        }
    }

    pub fn paint(&mut self, colour: Colour) -> bool {
        if !self.is_leaf() || self.colour == Some(colour) {
            return false;
        }
        self.colour = Some(colour);
        true
    }

    /// Merge four leaf children into one leaf of their most frequent colour.
    /// Equal counts go to the colour that shows up first in quadrant order.
    pub fn combine(&mut self) -> bool {
        if self.is_leaf() || self.children.iter().any(|c| !c.is_leaf()) {
            return false;
        }
        let colours: Vec<Colour> = self.children.iter().filter_map(|c| c.colour).collect();
        let mut best: Option<(Colour, usize)> = None;
        for &colour in &colours {
            let count = colours.iter().filter(|&&c| c == colour).count();
            if best.map_or(true, |(_, n)| count > n) {
                best = Some((colour, count));
            }
        }
        match best {
            Some((colour, _)) => {
                self.children.clear();
                self.colour = Some(colour);
                true
            }
            None => false,
        }
    }

    /// Apply an action to this node; `false` means the board is untouched.
    pub fn perform<R: Rng + ?Sized>(&mut self, action: &Action, rng: &mut R) -> bool {
        match *action {
            Action::Rotate(rotation) => self.rotate(rotation),
            Action::Swap(axis) => self.swap(axis),
            Action::Smash => self.smash(rng),
            Action::Paint(colour) => self.paint(colour),
            Action::Combine => self.combine(),
            Action::Pass => true,
        }
    }
}
