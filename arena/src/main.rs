use std::{error::Error, fmt::Display};

use clap::Parser;
use games::{Nim, TicTacToe};
use log::{info, LevelFilter};
use mimalloc::MiMalloc;
use uct::{Game, RandomPlayer, RandomRollout, Uct, UctConfig, UctError};

use crate::{
    cli::{Args, GameKind, Opponent},
    pit::{pit, PitResult},
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod pit;

const NIM_HEAPS: [u8; 3] = [3, 4, 5];
// keeps the two searches of a uct-vs-uct pit from sharing rollouts
const OPPONENT_SEED_OFFSET: u64 = 1 << 32;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, level)?,
        None => simple_logging::log_to_stderr(level),
    }

    let config = UctConfig {
        exploration: args.exploration,
        simulations: args.simulations,
        reuse_tree: !args.no_reuse,
    };
    config.validate()?;
    info!(
        "pitting uct against {:?} at {:?} for {} matches ({config:?})",
        args.opponent, args.game, args.matches
    );

    let result = match args.game {
        GameKind::TicTacToe => run(&args, config, TicTacToe::default)?,
        GameKind::Nim => {
            let nim = Nim::new(&NIM_HEAPS)?;
            run(&args, config, move || nim.clone())?
        }
    };
    println!("{result}");
    Ok(())
}

fn rollouts(seed: Option<u64>, game: u64) -> RandomRollout {
    match seed {
        Some(seed) => RandomRollout::seeded(seed.wrapping_add(game)),
        None => RandomRollout::default(),
    }
}

fn run<G>(args: &Args, config: UctConfig, new_game: impl Fn() -> G) -> Result<PitResult, UctError>
where
    G: Game + Display,
{
    let seed = args.seed;
    let new_agent = |i| Uct::<G, _>::new(config, rollouts(seed, i));
    match args.opponent {
        Opponent::Random => pit(args.matches, new_game, new_agent, |_| Ok(RandomPlayer)),
        Opponent::Uct => pit(args.matches, new_game, new_agent, |i| {
            Uct::<G, _>::new(config, rollouts(seed, i.wrapping_add(OPPONENT_SEED_OFFSET)))
        }),
    }
}
