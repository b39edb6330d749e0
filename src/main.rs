//! HMAC Rock-Paper-Scissors
//!
//! Plays one round against the computer. The computer's move is committed
//! with an HMAC tag before the player chooses; the key is printed after.

use std::io;

use anyhow::Result;
use rand::rngs::OsRng;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hmac_rps::{GameConfig, Round, RoundResult, VERSION};

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout carries only the game)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("HMAC RPS v{}", VERSION);

    let config = GameConfig::from_env();

    // Configuration errors are reported as plain messages, not failures
    let setup = match config.setup() {
        Ok(setup) => setup,
        Err(e) => {
            warn!("Rejected configuration: {:?}", e);
            println!("{}", e);
            return Ok(());
        }
    };

    let rules = setup.rules;
    info!("Moves: {}", rules.moves().join(", "));

    let mut rng = OsRng;
    let round = match setup.key {
        Some(key) => Round::with_key(&rules, key, &mut rng)?,
        None => Round::new(&rules, &mut rng)?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match round.play(stdin.lock(), stdout.lock())? {
        RoundResult::Resolved { outcome, .. } => info!("Round finished: {:?}", outcome),
        RoundResult::Exited => info!("Round exited"),
        RoundResult::Abandoned => info!("Round abandoned"),
    }

    Ok(())
}
