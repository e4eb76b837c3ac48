use crate::config::GameConfig;
use crate::core::Block;
use crate::error::Result;
use crate::game::{Game, GameResult};
use crate::player::create_players;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub time_ms: u128,
    #[serde(flatten)]
    pub result: GameResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub started_at: String,
    pub seed: u64,
    pub total_games: usize,
    /// Player names by seat.
    pub players: Vec<String>,
    /// Wins by seat.
    pub wins: Vec<usize>,
    pub draws: usize,
    /// Mean score of the winner, over decided games only.
    pub avg_winning_score: f64,
    pub avg_time_ms: f64,
    pub games: Vec<GameRecord>,
}

impl SelfPlayStats {
    fn new(seed: u64, players: Vec<String>) -> Self {
        Self {
            started_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            seed,
            total_games: 0,
            wins: vec![0; players.len()],
            players,
            draws: 0,
            avg_winning_score: 0.0,
            avg_time_ms: 0.0,
            games: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: GameRecord) {
        self.total_games += 1;
        match record.result.winner {
            Some(seat) if seat < self.wins.len() => self.wins[seat] += 1,
            _ => self.draws += 1,
        }
        self.games.push(record);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        let winning: Vec<u32> = self
            .games
            .iter()
            .filter_map(|g| g.result.winner.and_then(|seat| g.result.scores.get(seat).copied()))
            .collect();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_winning_score = if winning.is_empty() {
            0.0
        } else {
            winning.iter().sum::<u32>() as f64 / winning.len() as f64
        };
        self.avg_time_ms = total_time as f64 / n;
    }
}

/// AI 同士の対局をまとめて回す
///
/// Games run in parallel; each one gets its own seed drawn from the
/// configured seed, so a seeded run is reproducible.
pub fn run_selfplay(config: &GameConfig) -> Result<SelfPlayStats> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut master = StdRng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..config.num_games).map(|_| master.gen()).collect();

    let outcomes = seeds
        .par_iter()
        .map(|&game_seed| play_one(config, game_seed))
        .collect::<Result<Vec<_>>>()?;

    let names = outcomes
        .first()
        .map(|(names, _)| names.clone())
        .unwrap_or_default();
    let mut stats = SelfPlayStats::new(seed, names);
    for (_, record) in outcomes {
        stats.add_record(record);
    }
    Ok(stats)
}

fn play_one(config: &GameConfig, seed: u64) -> Result<(Vec<String>, GameRecord)> {
    let start_time = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);

    let board = Block::random(config.max_depth, &mut rng);
    let players = create_players(
        0,
        config.random_players,
        &config.smart_difficulties,
        config.max_retries,
        &mut rng,
    )?;
    let names = players.iter().map(|p| p.name().to_string()).collect();

    let mut game = Game::new(board, players, config.max_turns, StdRng::seed_from_u64(rng.gen()));
    let result = game.run();

    Ok((
        names,
        GameRecord {
            seed,
            time_ms: start_time.elapsed().as_millis(),
            result,
        },
    ))
}
