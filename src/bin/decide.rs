//! Decide Binary
//!
//! Reads a table snapshot as JSON and prints the chosen intent as JSON.
//!
//! Options: --snapshot, --name, --pocket, --seed, --config, --simulations, --passive

use anyhow::Context;
use clap::Parser;
use ::headsup::cards::Hole;
use ::headsup::evaluation::Bitwise;
use ::headsup::strategy::*;
use ::headsup::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Choose one heads-up betting action", long_about = None)]
struct Args {
    #[arg(long, required = true, help = "Path to the snapshot JSON")]
    snapshot: std::path::PathBuf,
    #[arg(long, required = true, help = "Our seat name at the table")]
    name: String,
    #[arg(long, required = true, help = "Our two hole cards, e.g. \"As Kd\"")]
    pocket: String,
    #[arg(long, help = "Seed for a reproducible decision")]
    seed: Option<u64>,
    #[arg(long, help = "Path to a JSON config overriding defaults")]
    config: Option<std::path::PathBuf>,
    #[arg(long, help = "Monte Carlo trials for preflop odds")]
    simulations: Option<usize>,
    #[arg(long, help = "Check or call instead of thinking")]
    passive: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))
            .and_then(|s| serde_json::from_str::<Config>(&s).context("parse config"))?,
        None => Config::default(),
    };
    if let Some(simulations) = args.simulations {
        config.simulations = simulations;
    }
    let snapshot = std::fs::read_to_string(&args.snapshot)
        .with_context(|| format!("read snapshot {}", args.snapshot.display()))
        .and_then(|s| serde_json::from_str::<Snapshot>(&s).context("parse snapshot"))?;
    let pocket = Hole::try_from(args.pocket.as_str())?;
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    log::info!("{:<32}{}", "pocket", pocket);
    log::info!("{:<32}{}", "board", snapshot.board);
    let intent = if args.passive {
        play(Passive, &args.name, pocket, &snapshot, rng)?
    } else {
        play(HeadsUp::new(Bitwise, config), &args.name, pocket, &snapshot, rng)?
    };
    log::info!("{:<32}{}", "intent", intent);
    println!("{}", serde_json::to_string(&intent)?);
    Ok(())
}

fn play<S: Strategy>(
    strategy: S,
    name: &str,
    pocket: Hole,
    snapshot: &Snapshot,
    rng: &mut SmallRng,
) -> anyhow::Result<Intent> {
    let mut agent = Agent::new(name, strategy, rng);
    agent.deal(pocket);
    Ok(agent.act(snapshot, rng)?)
}
