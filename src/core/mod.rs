pub mod block;
pub mod colour;
pub mod r#move;
pub mod types;

pub use block::{random_colour, Block};
pub use colour::{Colour, PALETTE};
pub use r#move::{Action, Move};
pub use types::{Axis, Position, Rotation};
