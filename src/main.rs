use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use solo_battleship::{init_logging, run_session, CliPlayer, GameConfig};

#[derive(Parser)]
#[command(author, version, about = "Sink a hidden fleet on a 7x7 grid", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Player name; prompted for when omitted")]
    name: Option<String>,
    #[arg(long, help = "Show intact ship cells on the board")]
    reveal: bool,
    #[arg(long, help = "Do not clear the terminal between turns")]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut player = CliPlayer::stdio()
        .reveal(cli.reveal)
        .clear_screen(!cli.no_clear);
    player.greet()?;
    match cli.name {
        Some(name) => player = player.with_name(name),
        None => player.prompt_name()?,
    }

    let config = GameConfig::default();
    let session = run_session(&config, &mut player, &mut rng)?;
    log::debug!("session summary: {:?}", session);

    player.farewell()?;
    Ok(())
}
