#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use flotilla::{
    coord_to_string, init_logging, print_player_view, CliPlayer, GameEngine, Owner, Player,
    RandomPlayer,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Watch two random players play a full game.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play as Player 1 against a random opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_match(
    engine: &mut GameEngine,
    players: &mut [Box<dyn Player>; 2],
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    while !engine.is_game_over() {
        let actor = engine.current_player();
        let view = engine.visible_board(actor);
        let open = engine.legal_targets(actor);
        let (r, c) = players[actor.index()].select_target(rng, &view, open);
        match engine.submit_move(actor, r, c) {
            Ok(outcome) => {
                log::info!("{} fires at {} -> {:?}", actor, coord_to_string(r, c), outcome.shot)
            }
            Err(e) => println!("Move rejected: {}", e),
        }
    }
    let winner = engine
        .winner()
        .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;
    println!("{} wins!", winner);
    for viewer in Owner::ALL {
        print_player_view(engine, viewer);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new();
            engine.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut players: [Box<dyn Player>; 2] =
                [Box::new(RandomPlayer::new()), Box::new(RandomPlayer::new())];
            run_match(&mut engine, &mut players, &mut rng)?;
        }
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new();
            engine.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            println!("You are Player 1. Your ships are marked S; fire at the rest.");
            let mut players: [Box<dyn Player>; 2] =
                [Box::new(CliPlayer::new()), Box::new(RandomPlayer::new())];
            run_match(&mut engine, &mut players, &mut rng)?;
        }
    }
    Ok(())
}
