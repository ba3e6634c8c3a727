use std::fmt::{self, Display};

use log::{debug, info};
use uct::{Agent, Game, GameResult, Player, UctError};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PitResult {
    wins: u32,
    draws: u32,
    losses: u32,
}

impl PitResult {
    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.draws + self.losses;
        if games == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.draws as f64 / 2.) / games as f64
    }

    /// Count a finished game from the perspective of `player`.
    pub fn update(&mut self, result: GameResult, player: Player) {
        match result {
            GameResult::Winner(winner) => {
                if winner == player {
                    self.wins += 1
                } else {
                    self.losses += 1
                }
            }
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing => {}
        }
    }
}

impl Display for PitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wins: {}, draws: {}, losses: {}, score: {:.1}%",
            self.wins,
            self.draws,
            self.losses,
            100. * self.win_rate()
        )
    }
}

/// Play one game to the end. Both agents hear about every move of the other.
pub fn play_match<'a, G: Game + Display>(
    max: &'a mut dyn Agent<G>,
    min: &'a mut dyn Agent<G>,
    mut game: G,
) -> Result<GameResult, UctError> {
    while game.result().is_ongoing() {
        let (mover, other) = match game.player_turn() {
            Player::Max => (&mut *max, &mut *min),
            Player::Min => (&mut *min, &mut *max),
        };
        let action = mover.pick(&game)?;
        debug!("{} played {action:?}", mover.name());
        other.observe(action);
        game.play(action);
    }
    debug!("final position:\n{game}");
    Ok(game.result())
}

/// Play `matches` games, the agent made by `new_agent` switching sides each
/// game. Agents are rebuilt for every game.
pub fn pit<G, A, B>(
    matches: u64,
    new_game: impl Fn() -> G,
    mut new_agent: impl FnMut(u64) -> Result<A, UctError>,
    mut new_opponent: impl FnMut(u64) -> Result<B, UctError>,
) -> Result<PitResult, UctError>
where
    G: Game + Display,
    A: Agent<G>,
    B: Agent<G>,
{
    let mut result = PitResult::default();
    for i in 0..matches {
        let mut agent = new_agent(i)?;
        let mut opponent = new_opponent(i)?;
        let side = if i % 2 == 0 { Player::Max } else { Player::Min };
        let outcome = match side {
            Player::Max => play_match(&mut agent, &mut opponent, new_game())?,
            Player::Min => play_match(&mut opponent, &mut agent, new_game())?,
        };
        info!("game {} ({} as {side:?}): {outcome:?}", i + 1, agent.name());
        result.update(outcome, side);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use games::{Nim, TicTacToe};
    use uct::{RandomPlayer, RandomRollout, Uct, UctConfig};

    use super::*;

    #[test]
    fn result_counts_from_perspective() {
        let mut result = PitResult::default();
        result.update(GameResult::Winner(Player::Max), Player::Max);
        result.update(GameResult::Winner(Player::Max), Player::Min);
        result.update(GameResult::Draw, Player::Min);
        result.update(GameResult::Ongoing, Player::Min);
        assert_eq!(result, PitResult {
            wins: 1,
            draws: 1,
            losses: 1
        });
        assert!((result.win_rate() - 0.5).abs() < 1e-9);
        assert_eq!(PitResult::default().win_rate(), 0.0);
    }

    #[test]
    fn random_games_finish() {
        let outcome = play_match(&mut RandomPlayer, &mut RandomPlayer, TicTacToe::default()).unwrap();
        assert!(!outcome.is_ongoing());
    }

    #[test]
    fn uct_wins_nim_from_winning_position() {
        let config = UctConfig::new(1.0, 2000).unwrap();
        // the first game puts the search on the winning side of [1, 2]
        let result = pit(
            1,
            || Nim::new(&[1, 2]).unwrap(),
            |i| Uct::<Nim, _>::new(config, RandomRollout::seeded(i)),
            |_| Ok(RandomPlayer),
        )
        .unwrap();
        assert_eq!(result, PitResult {
            wins: 1,
            draws: 0,
            losses: 0
        });
    }
}
