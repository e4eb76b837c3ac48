use crate::core::{Block, Move};
use crate::error::Result;
use crate::goal::Goal;

/// プレイヤー操作のtrait
pub trait PlayerController: Send {
    fn id(&self) -> usize;
    fn goal(&self) -> &Goal;
    fn name(&self) -> &str;

    /// The move this player wants to make on `board`, or `None` while it is
    /// not ready yet. Never mutates `board`.
    fn generate_move(&mut self, board: &Block) -> Result<Option<Move>>;

    /// Turn-ready signal from the game loop. Consumed by the next move.
    fn signal_ready(&mut self) {}
}
