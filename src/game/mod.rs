use crate::core::{Block, Move};
use crate::logic::apply_move;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    /// Final score per player id.
    pub scores: Vec<u32>,
    /// Highest scorer; `None` on a tie at the top.
    pub winner: Option<usize>,
    pub turns: usize,
}

/// 対局 (描画・入力なし)
pub struct Game {
    pub board: Block,
    pub players: Vec<Box<dyn PlayerController>>,
    pub turn: usize,
    pub max_turns: usize,
    pub history: Vec<(usize, Move)>,
    rng: StdRng,
}

impl Game {
    pub fn new(
        board: Block,
        players: Vec<Box<dyn PlayerController>>,
        max_turns: usize,
        rng: StdRng,
    ) -> Self {
        Game {
            board,
            players,
            turn: 0,
            max_turns,
            history: Vec::new(),
            rng,
        }
    }

    pub fn current_player(&self) -> usize {
        self.turn % self.players.len()
    }

    pub fn is_over(&self) -> bool {
        self.players.is_empty() || self.turn >= self.max_turns
    }

    /// One turn of the current player. Returns the move that was applied,
    /// or `None` when the player had nothing (valid) to play.
    ///
    /// A player that is not ready yet keeps the turn; an invalid move or a
    /// policy error uses it up.
    pub fn play_turn(&mut self) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let index = self.current_player();

        let player = &mut self.players[index];
        player.signal_ready();
        let mv = match player.generate_move(&self.board) {
            Ok(Some(mv)) => mv,
            Ok(None) => return None,
            Err(e) => {
                eprintln!("{} could not move: {}", player.name(), e);
                self.turn += 1;
                return None;
            }
        };
        self.turn += 1;

        match apply_move(&mut self.board, &mv, &mut self.rng) {
            Ok(true) => {
                self.history.push((player.id(), mv));
                Some(mv)
            }
            Ok(false) => {
                eprintln!("{} tried an invalid move: {}", player.name(), mv);
                None
            }
            Err(e) => {
                eprintln!("{} tried an invalid move: {}", player.name(), e);
                None
            }
        }
    }

    pub fn scores(&self) -> Vec<u32> {
        self.players
            .iter()
            .map(|p| p.goal().score(&self.board))
            .collect()
    }

    /// Plays until the turn limit, or until the current player is still
    /// waiting for input.
    pub fn run(&mut self) -> GameResult {
        while !self.is_over() {
            let turn = self.turn;
            self.play_turn();
            if self.turn == turn {
                break;
            }
        }
        let scores = self.scores();
        GameResult {
            winner: winner(&scores),
            scores,
            turns: self.turn,
        }
    }
}

fn winner(scores: &[u32]) -> Option<usize> {
    let best = *scores.iter().max()?;
    let mut leaders = scores.iter().enumerate().filter(|&(_, &s)| s == best);
    match (leaders.next(), leaders.next()) {
        (Some((id, _)), None) => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_RETRIES;
    use crate::core::{Action, Colour, Position};
    use crate::goal::{Goal, GoalKind};
    use crate::player::{create_players, Command, HumanController, RandomAI};
    use rand::SeedableRng;

    #[test]
    fn ai_game_runs_to_turn_limit() {
        let mut rng = StdRng::seed_from_u64(10);
        let board = Block::random(3, &mut rng);
        let players = create_players(0, 2, &[3], DEFAULT_MAX_RETRIES, &mut rng).unwrap();
        let mut game = Game::new(board, players, 12, StdRng::seed_from_u64(11));

        let result = game.run();
        assert_eq!(result.turns, 12);
        assert_eq!(result.scores.len(), 3);
        assert!(game.history.len() <= 12);
        assert!(game.history.iter().all(|(id, _)| *id < 3));
        assert_eq!(result.scores, game.scores());
    }

    #[test]
    fn human_move_is_applied_to_the_board() {
        let mut board = Block::root(Colour::RealRed, 1);
        board.subdivide([
            Colour::RealRed,
            Colour::PacificPoint,
            Colour::OldOlive,
            Colour::DaffodilDelight,
        ]);
        let goal = Goal::new(GoalKind::Blob, Colour::OldOlive);
        let mut human = HumanController::new(0, "Human", goal);
        human.set_pointer(Position::new(0, 0));
        human.process_command(Command::Deeper);
        human.process_command(Command::Paint);

        let players: Vec<Box<dyn PlayerController>> = vec![Box::new(human)];
        let mut game = Game::new(board, players, 5, StdRng::seed_from_u64(0));
        let mv = game.play_turn().unwrap();
        assert_eq!(mv.action, Action::Paint(Colour::OldOlive));
        assert_eq!(game.board.children[1].colour, Some(Colour::OldOlive));
        assert_eq!(game.scores(), vec![2]);

        // nothing pending any more: the human keeps the turn
        assert!(game.play_turn().is_none());
        assert_eq!(game.turn, 1);
    }

    #[test]
    fn waiting_human_keeps_the_turn() {
        let mut rng = StdRng::seed_from_u64(14);
        let board = Block::random(2, &mut rng);
        let mut human =
            HumanController::new(0, "Human", Goal::new(GoalKind::Blob, Colour::RealRed));
        human.set_pointer(Position::new(0, 0));
        let random = RandomAI::new(
            1,
            "Random AI",
            Goal::new(GoalKind::Blob, Colour::OldOlive),
            StdRng::seed_from_u64(15),
        );
        let players: Vec<Box<dyn PlayerController>> = vec![Box::new(human), Box::new(random)];
        let mut game = Game::new(board, players, 10, StdRng::seed_from_u64(16));

        assert!(game.play_turn().is_none());
        assert_eq!(game.turn, 0);
        assert_eq!(game.current_player(), 0);
        assert!(game.history.is_empty());

        // run stops instead of spinning on a player waiting for input
        let result = game.run();
        assert_eq!(result.turns, 0);
    }

    #[test]
    fn tie_at_the_top_has_no_winner() {
        assert_eq!(winner(&[3, 7, 1]), Some(1));
        assert_eq!(winner(&[7, 7, 1]), None);
        assert_eq!(winner(&[]), None);
    }
}
