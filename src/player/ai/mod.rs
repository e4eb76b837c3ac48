pub mod random;
pub mod smart;

pub use random::{random_valid_move, RandomAI};
pub use smart::SmartAI;
