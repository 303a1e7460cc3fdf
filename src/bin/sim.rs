use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{random_board, AiPlayer, Game, GameStatus};
use serde::Serialize;

#[derive(Serialize)]
struct MatchResult {
    seed: u64,
    winner: &'static str,
    shots: usize,
}

#[derive(Serialize)]
struct Summary {
    games: usize,
    player_wins: usize,
    opponent_wins: usize,
    average_shots: f64,
    matches: Vec<MatchResult>,
}

fn play(seed: u64) -> anyhow::Result<MatchResult> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let player_board = random_board(&mut rng, false);
    let opponent_board = random_board(&mut rng, true);
    let mut game = Game::new(
        player_board,
        opponent_board,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );
    let winner = match game.run(&mut rng)? {
        GameStatus::PlayerWon => "player",
        GameStatus::OpponentWon => "opponent",
        other => anyhow::bail!("game stopped without a winner: {:?}", other),
    };
    Ok(MatchResult {
        seed,
        winner,
        shots: game.shots_fired(),
    })
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let matches = (0..games as u64)
        .map(|i| play(seed.wrapping_add(i)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let player_wins = matches.iter().filter(|m| m.winner == "player").count();
    let total_shots: usize = matches.iter().map(|m| m.shots).sum();
    let summary = Summary {
        games,
        player_wins,
        opponent_wins: games - player_wins,
        average_shots: if games == 0 {
            0.0
        } else {
            total_shots as f64 / games as f64
        },
        matches,
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
