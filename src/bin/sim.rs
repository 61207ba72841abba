use anyhow::Context;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use solo_battleship::{init_logging, run_session, GameConfig, RandomPlayer};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse().context("seed must be an unsigned integer")?;
    let rounds: usize = args[2].parse().context("rounds must be an unsigned integer")?;
    anyhow::ensure!(rounds > 0, "rounds must be at least 1");

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = RandomPlayer::new(rounds);
    let config = GameConfig::default();
    let session = run_session(&config, &mut player, &mut rng)?;

    let shots: Vec<usize> = session.rounds.iter().map(|r| r.shots).collect();
    let min = shots.iter().copied().min().unwrap_or(0);
    let max = shots.iter().copied().max().unwrap_or(0);
    let mean = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };

    let result = json!({
        "seed": seed,
        "rounds": shots.len(),
        "shots": shots,
        "min_shots": min,
        "max_shots": max,
        "mean_shots": mean,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
