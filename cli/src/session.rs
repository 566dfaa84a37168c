use rand::prelude::*;
use rand::rngs::StdRng;
use sweep_core::{BoardEngine, Difficulty, GameError, Snapshot, WinPolicy};

use crate::command::Command;

/// What the front end should do after a command ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Redraw,
    Unchanged,
    Help,
    Quit,
}

/// One player sitting: the current board plus the settings used to deal new ones.
pub struct Session {
    difficulty: Difficulty,
    win_policy: WinPolicy,
    seeds: StdRng,
    engine: BoardEngine,
}

impl Session {
    /// With a seed every board of the session is reproducible, otherwise boards are random.
    pub fn new(difficulty: Difficulty, win_policy: WinPolicy, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        log::debug!("session seed: {}", seed);
        let mut seeds = StdRng::seed_from_u64(seed);
        let engine = Self::deal(difficulty, win_policy, &mut seeds);
        Self {
            difficulty,
            win_policy,
            seeds,
            engine,
        }
    }

    fn deal(difficulty: Difficulty, win_policy: WinPolicy, seeds: &mut StdRng) -> BoardEngine {
        let seed: u64 = seeds.random();
        log::info!("New {} game, board seed {}", difficulty, seed);
        BoardEngine::with_seed(difficulty, seed).with_win_policy(win_policy)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    pub fn new_game(&mut self, difficulty: Option<Difficulty>) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self.engine = Self::deal(self.difficulty, self.win_policy, &mut self.seeds);
    }

    pub fn execute(&mut self, command: Command) -> Result<Step, GameError> {
        let changed = match command {
            Command::Reveal(coords) => self.engine.reveal_cell(coords)?.has_update(),
            Command::Flag(coords) => self.engine.toggle_flag(coords)?.has_update(),
            Command::NewGame(difficulty) => {
                self.new_game(difficulty);
                true
            }
            Command::Help => return Ok(Step::Help),
            Command::Quit => return Ok(Step::Quit),
        };

        Ok(if changed { Step::Redraw } else { Step::Unchanged })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::Outcome;

    fn session() -> Session {
        Session::new(Difficulty::Beginner, WinPolicy::RevealSafe, Some(11))
    }

    #[test]
    fn seeded_sessions_deal_identical_boards() {
        let first = session();
        let second = session();

        assert_eq!(first.engine(), second.engine());
    }

    #[test]
    fn revealing_a_mine_loses_and_further_moves_are_unchanged() {
        let mut session = session();
        let mine = session.engine().mine_layout().iter_mines().next().unwrap();

        assert_eq!(session.execute(Command::Reveal(mine)), Ok(Step::Redraw));
        assert_eq!(session.engine().outcome(), Outcome::Lost);
        assert_eq!(session.execute(Command::Flag((0, 0))), Ok(Step::Unchanged));
    }

    #[test]
    fn out_of_range_moves_are_reported() {
        let mut session = session();

        assert_eq!(
            session.execute(Command::Reveal((10, 0))),
            Err(GameError::OutOfRange)
        );
    }

    #[test]
    fn new_game_switches_difficulty_and_resets() {
        let mut session = session();
        session.execute(Command::Flag((0, 0))).unwrap();

        assert_eq!(
            session.execute(Command::NewGame(Some(Difficulty::Expert))),
            Ok(Step::Redraw)
        );
        assert_eq!(session.difficulty(), Difficulty::Expert);
        assert_eq!(session.engine().size(), (20, 20));
        assert_eq!(session.engine().flagged_count(), 0);
        assert_eq!(session.snapshot().outcome, Outcome::InProgress);
    }

    #[test]
    fn help_and_quit_pass_through() {
        let mut session = session();

        assert_eq!(session.execute(Command::Help), Ok(Step::Help));
        assert_eq!(session.execute(Command::Quit), Ok(Step::Quit));
    }
}
