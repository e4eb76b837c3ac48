use crate::core::{Action, Axis, Block, Move, Position, Rotation};
use crate::error::Result;
use crate::goal::Goal;
use crate::logic::locate;
use crate::player::PlayerController;

/// 人間プレイヤーの入力コマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select one level deeper (smaller blocks).
    Deeper,
    /// Select one level shallower (larger blocks).
    Shallower,
    RotateClockwise,
    RotateCounterClockwise,
    SwapHorizontal,
    SwapVertical,
    Smash,
    Paint,
    Combine,
    Pass,
}

/// Interactive player: a pointer position, a selected depth and a pending action.
pub struct HumanController {
    player_id: usize,
    name: String,
    goal: Goal,
    level: usize,
    pending: Option<Action>,
    pointer: Option<Position>,
}

impl HumanController {
    pub fn new(player_id: usize, name: &str, goal: Goal) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            goal,
            level: 0,
            pending: None,
            pointer: None,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn pending_action(&self) -> Option<Action> {
        self.pending
    }

    pub fn set_pointer(&mut self, point: Position) {
        self.pointer = Some(point);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn process_command(&mut self, command: Command) {
        let action = match command {
            Command::Deeper => {
                self.level += 1;
                self.pending = None;
                return;
            }
            Command::Shallower => {
                self.level = self.level.saturating_sub(1);
                self.pending = None;
                return;
            }
            Command::RotateClockwise => Action::Rotate(Rotation::Clockwise),
            Command::RotateCounterClockwise => Action::Rotate(Rotation::CounterClockwise),
            Command::SwapHorizontal => Action::Swap(Axis::Horizontal),
            Command::SwapVertical => Action::Swap(Axis::Vertical),
            Command::Smash => Action::Smash,
            Command::Paint => Action::Paint(self.goal.colour),
            Command::Combine => Action::Combine,
            Command::Pass => Action::Pass,
        };
        self.pending = Some(action);
    }

    /// Block under the pointer at the selected depth, capped at `max_depth`.
    pub fn selected_block<'a>(&self, board: &'a Block) -> Option<&'a Block> {
        let point = self.pointer?;
        locate(board, point, self.level.min(board.max_depth))
    }
}

impl PlayerController for HumanController {
    fn id(&self) -> usize {
        self.player_id
    }

    fn goal(&self) -> &Goal {
        &self.goal
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// The move may still be invalid on the board.
    fn generate_move(&mut self, board: &Block) -> Result<Option<Move>> {
        let (block, action) = match (self.selected_block(board), self.pending) {
            (Some(block), Some(action)) => (block, action),
            _ => return Ok(None),
        };
        self.pending = None;

        if action == Action::Pass {
            Ok(Some(Move::pass(board)))
        } else {
            Ok(Some(Move::new(action, block)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;
    use crate::goal::GoalKind;

    fn board() -> Block {
        let mut board = Block::root(Colour::RealRed, 2);
        board.subdivide([
            Colour::RealRed,
            Colour::PacificPoint,
            Colour::OldOlive,
            Colour::DaffodilDelight,
        ]);
        board
    }

    fn human() -> HumanController {
        HumanController::new(0, "Human", Goal::new(GoalKind::Blob, Colour::OldOlive))
    }

    #[test]
    fn no_move_without_action_or_pointer() {
        let board = board();
        let mut player = human();
        assert_eq!(player.generate_move(&board).unwrap(), None);

        player.process_command(Command::Smash);
        assert_eq!(player.generate_move(&board).unwrap(), None);
        assert_eq!(player.pending_action(), Some(Action::Smash));
    }

    #[test]
    fn emits_move_once_and_clears_action() {
        let board = board();
        let mut player = human();
        player.set_pointer(Position::new(3, 1));
        player.process_command(Command::Deeper);
        player.process_command(Command::Paint);

        let mv = player.generate_move(&board).unwrap().unwrap();
        assert_eq!(mv.action, Action::Paint(Colour::OldOlive));
        assert_eq!(mv.position, Position::new(2, 0));
        assert_eq!(mv.level, 1);
        assert_eq!(player.generate_move(&board).unwrap(), None);
    }

    #[test]
    fn level_never_goes_negative_and_is_capped_on_lookup() {
        let board = board();
        let mut player = human();
        player.process_command(Command::Shallower);
        assert_eq!(player.level(), 0);

        for _ in 0..5 {
            player.process_command(Command::Deeper);
        }
        assert_eq!(player.level(), 5);
        player.set_pointer(Position::new(0, 0));
        // board only splits once here, so the level-1 leaf comes back
        let block = player.selected_block(&board).unwrap();
        assert_eq!(block.level, 1);
    }

    #[test]
    fn changing_level_drops_pending_action() {
        let mut player = human();
        player.process_command(Command::Combine);
        player.process_command(Command::Deeper);
        assert_eq!(player.pending_action(), None);
    }

    #[test]
    fn pass_targets_whole_board() {
        let board = board();
        let mut player = human();
        player.set_pointer(Position::new(3, 3));
        player.process_command(Command::Deeper);
        player.process_command(Command::Pass);
        let mv = player.generate_move(&board).unwrap().unwrap();
        assert!(mv.is_pass());
        assert_eq!(mv.level, 0);
    }
}
