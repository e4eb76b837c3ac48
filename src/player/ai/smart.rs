use super::random::random_valid_move;
use crate::config::DEFAULT_MAX_RETRIES;
use crate::core::{Block, Move};
use crate::error::{Error, Result};
use crate::goal::Goal;
use crate::logic::apply_move;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Samples `difficulty` random legal moves and plays the one that raises its
/// score the most. Passes unless some candidate strictly beats the current score.
///
/// Smash candidates are scored with colours from a per-candidate seed; the game
/// applies the chosen smash with its own RNG, so the resulting colours can differ.
pub struct SmartAI {
    player_id: usize,
    name: String,
    goal: Goal,
    difficulty: usize,
    rng: StdRng,
    ready: bool,
    max_retries: usize,
    candidates_evaluated: usize,
}

impl SmartAI {
    pub fn new(
        player_id: usize,
        name: &str,
        goal: Goal,
        difficulty: usize,
        rng: StdRng,
    ) -> Result<Self> {
        if difficulty == 0 {
            return Err(Error::InvalidDifficulty(difficulty));
        }
        Ok(Self {
            player_id,
            name: name.to_string(),
            goal,
            difficulty,
            rng,
            ready: false,
            max_retries: DEFAULT_MAX_RETRIES,
            candidates_evaluated: 0,
        })
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Candidates scored during the last search.
    pub fn candidates_evaluated(&self) -> usize {
        self.candidates_evaluated
    }

    fn search(&mut self, board: &Block) -> Result<Move> {
        let current = self.goal.score(board);
        let paint = self.goal.colour;
        let max_retries = self.max_retries;

        // 候補手とその評価用シード (smash の色はシードで決まる)
        let mut candidates = Vec::with_capacity(self.difficulty);
        for _ in 0..self.difficulty {
            let mv = random_valid_move(board, paint, &mut self.rng, max_retries)?;
            candidates.push((mv, self.rng.gen::<u64>()));
        }

        let goal = self.goal;
        let scores: Vec<Option<u32>> = candidates
            .par_iter()
            .map(|(mv, seed)| {
                let mut copy = board.clone();
                let mut rng = StdRng::seed_from_u64(*seed);
                match apply_move(&mut copy, mv, &mut rng) {
                    Ok(true) => Some(goal.score(&copy)),
                    _ => None,
                }
            })
            .collect();
        self.candidates_evaluated = scores.len();

        let mut best = Move::pass(board);
        let mut best_score = current;
        for ((mv, _), score) in candidates.iter().zip(scores) {
            if let Some(score) = score {
                if score > best_score {
                    best = *mv;
                    best_score = score;
                }
            }
        }
        Ok(best)
    }
}

impl PlayerController for SmartAI {
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

        self.search(board).map(Some)
    }

    fn signal_ready(&mut self) {
        self.ready = true;
    }
}
