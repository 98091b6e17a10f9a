//! Console blackjack table.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use core::time::Duration;

use bjtable::{Console, GameOptions, GameSession, MAX_PLAYERS, RemainderPolicy, StdConsole};

#[derive(Parser)]
#[command(name = "bjtable", about = "Blackjack at the console for up to five players")]
struct Cli {
    /// Seed for shuffling; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between dealer draws, in milliseconds
    #[arg(long, default_value_t = 3000)]
    dealer_delay_ms: u64,

    /// Maximum number of human players
    #[arg(long, default_value_t = MAX_PLAYERS, value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_PLAYERS)))]
    max_players: u8,

    /// Stop after this many laps
    #[arg(long)]
    laps: Option<u32>,

    /// Drop cents that do not split evenly instead of paying the first seats
    #[arg(long)]
    forfeit_remainder: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let options = GameOptions::default()
        .with_max_players(cli.max_players)
        .with_dealer_delay(Duration::from_millis(cli.dealer_delay_ms))
        .with_remainder(if cli.forfeit_remainder {
            RemainderPolicy::Forfeit
        } else {
            RemainderPolicy::FirstSeats
        });

    let mut console = StdConsole::new();

    let Ok(mut session) = GameSession::invite(&mut console, options, seed) else {
        return ExitCode::SUCCESS;
    };

    let code = match session.run(&mut console, cli.laps) {
        Ok(laps) => {
            log::info!("played {laps} laps");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("lap {} failed: {err}", session.laps_played() + 1);
            ExitCode::FAILURE
        }
    };

    console.display_line("");
    session.display_seats(&mut console);
    code
}
