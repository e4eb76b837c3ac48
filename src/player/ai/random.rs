use crate::config::DEFAULT_MAX_RETRIES;
use crate::core::{Action, Block, Colour, Move, Position};
use crate::error::{Error, Result};
use crate::goal::Goal;
use crate::logic::locate;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::Rng;

/// ランダムな合法手を一つ選ぶ (pass は選ばない)
///
/// Draws a point, a level and an action, and keeps the draw if the action
/// succeeds on a private copy of the located block. Gives up after
/// `max_retries` draws.
pub fn random_valid_move<R: Rng + ?Sized>(
    board: &Block,
    paint: Colour,
    rng: &mut R,
    max_retries: usize,
) -> Result<Move> {
    let actions = Action::candidates(paint);

    for _ in 0..max_retries {
        let point = Position::new(
            board.position.x + rng.gen_range(0..board.size),
            board.position.y + rng.gen_range(0..board.size),
        );
        let level = rng.gen_range(0..=board.max_depth);
        let block = match locate(board, point, level) {
            Some(block) => block,
            None => continue,
        };

        let action = actions[rng.gen_range(0..actions.len())];
        let mut scratch = block.clone();
        if scratch.perform(&action, rng) {
            return Ok(Move::new(action, block));
        }
    }

    Err(Error::RetryLimitExceeded {
        attempts: max_retries,
    })
}

pub struct RandomAI {
    player_id: usize,
    name: String,
    goal: Goal,
    rng: StdRng,
    ready: bool,
    max_retries: usize,
}

impl RandomAI {
    pub fn new(player_id: usize, name: &str, goal: Goal, rng: StdRng) -> Self {
        RandomAI {
            player_id,
            name: name.to_string(),
            goal,
            rng,
            ready: false,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl PlayerController for RandomAI {
    fn id(&self) -> usize {
        self.player_id
    }

    fn goal(&self) -> &Goal {
        &self.goal
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn generate_move(&mut self, board: &Block) -> Result<Option<Move>> {
        if !self.ready {
            return Ok(None);
        }
        self.ready = false;

        random_valid_move(board, self.goal.colour, &mut self.rng, self.max_retries).map(Some)
    }

    fn signal_ready(&mut self) {
        self.ready = true;
    }
}
