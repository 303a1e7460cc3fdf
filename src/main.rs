#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, random_board, ui, AiPlayer, CliPlayer, Game, GameError, GameStatus,
    PlayerError,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6×6 grid against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let player_board = random_board(&mut rng, false);
            let opponent_board = random_board(&mut rng, true);
            ui::write_greeting(&mut stdout)?;

            let mut game = Game::new(
                player_board,
                opponent_board,
                Box::new(CliPlayer::stdio()),
                Box::new(AiPlayer::new()),
            );
            match game.run(&mut rng) {
                Ok(status) => finish(&mut game, status)?,
                Err(GameError::Player(PlayerError::InputClosed)) => {
                    println!("\nInput closed, leaving the game.");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let player_board = random_board(&mut rng, false);
            let opponent_board = random_board(&mut rng, false);
            let mut game = Game::new(
                player_board,
                opponent_board,
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
            );
            while !game.status().is_over() {
                let report = game.step(&mut rng)?;
                println!(
                    "{:?} fires at {} -> {:?}",
                    report.shooter, report.target, report.result
                );
            }
            let status = game.status();
            finish(&mut game, status)?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn finish(game: &mut Game, status: GameStatus) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    game.opponent_board_mut().set_concealed(false);
    println!("\nGame over after {} shots.", game.shots_fired());
    ui::write_boards(&mut stdout, game.player_board(), game.opponent_board())?;
    ui::write_outcome(&mut stdout, status)?;
    Ok(())
}
