pub mod ai;
pub mod controller;
pub mod human;

pub use ai::{RandomAI, SmartAI};
pub use controller::PlayerController;
pub use human::{Command, HumanController};

use crate::error::Result;
use crate::goal::generate_goals;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// プレイヤー一覧を作る (人間, ランダム, スマートの順)
///
/// Ids run from 0 in that order. Each player gets its own goal and, for the
/// AIs, its own RNG seeded from `rng`.
pub fn create_players<R: Rng + ?Sized>(
    num_human: usize,
    num_random: usize,
    smart_difficulties: &[usize],
    max_retries: usize,
    rng: &mut R,
) -> Result<Vec<Box<dyn PlayerController>>> {
    let total = num_human + num_random + smart_difficulties.len();
    let mut goals = generate_goals(total, rng)?;
    goals.shuffle(rng);
    let mut goals = goals.into_iter();

    let mut players: Vec<Box<dyn PlayerController>> = Vec::with_capacity(total);
    for (id, goal) in (0..num_human).zip(goals.by_ref()) {
        let name = format!("Human {}", id);
        players.push(Box::new(HumanController::new(id, &name, goal)));
    }
    for (id, goal) in (num_human..num_human + num_random).zip(goals.by_ref()) {
        let name = format!("Random AI {}", id);
        let ai_rng = StdRng::seed_from_u64(rng.gen());
        players.push(Box::new(
            RandomAI::new(id, &name, goal, ai_rng).with_max_retries(max_retries),
        ));
    }
    for ((id, &difficulty), goal) in (num_human + num_random..)
        .zip(smart_difficulties)
        .zip(goals.by_ref())
    {
        let name = format!("Smart AI {} (difficulty {})", id, difficulty);
        let ai_rng = StdRng::seed_from_u64(rng.gen());
        players.push(Box::new(
            SmartAI::new(id, &name, goal, difficulty, ai_rng)?.with_max_retries(max_retries),
        ));
    }

    Ok(players)
}
