// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hands evaluation CLI.
//!
//! Cards are given as comma separated tokens, in rank-suit (`AH`) or
//! suit-rank (`HA`) order:
//!
//! ```bash
//! $ holdem evaluate --hole AH,KH --board QH,JH,TH,2S,3C
//! $ holdem compare --hole1 AC,KC --hole2 QD,QS --board 2D,7C,9S,KH,AD
//! $ holdem odds --hole AH,AS --players 4 --trials 100000 --tasks 4
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::{error, info};
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;

use holdem_eval::api::{self, HandRequest, ProbabilityReport, ProbabilityRequest};

#[derive(Debug, Parser)]
struct Cli {
    /// Print the reports as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate the best five cards hand of a player.
    Evaluate {
        /// The player hole cards.
        #[clap(long)]
        hole: String,
        /// The community cards.
        #[clap(long, default_value = "")]
        board: String,
    },
    /// Compare the hands of two players.
    Compare {
        /// The first player hole cards.
        #[clap(long)]
        hole1: String,
        /// The second player hole cards.
        #[clap(long)]
        hole2: String,
        /// The community cards shared by both players.
        #[clap(long, default_value = "")]
        board: String,
        /// The second player community cards if different from the first.
        #[clap(long)]
        board2: Option<String>,
    },
    /// Estimate a player odds with a Monte Carlo simulation.
    Odds {
        /// The player hole cards.
        #[clap(long)]
        hole: String,
        /// The known community cards.
        #[clap(long, default_value = "")]
        board: String,
        /// Number of players including this player.
        #[clap(long, default_value_t = 2, value_parser = value_parser!(u8).range(2..=23))]
        players: u8,
        /// Number of trials, a non positive number runs the default trials.
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        trials: i64,
        /// Number of parallel tasks.
        #[clap(long, default_value_t = 1, value_parser = value_parser!(u8).range(1..=64))]
        tasks: u8,
        /// Seed for a reproducible simulation.
        #[clap(long)]
        seed: Option<u64>,
    },
}

/// The odds command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OddsConfig {
    /// The simulation request.
    request: ProbabilityRequest,
    /// Number of parallel tasks.
    tasks: usize,
    /// Optional random generator seed.
    seed: Option<u64>,
}

/// Splits a comma separated list of cards into uppercase tokens.
fn split_tokens(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect()
}

fn hand_request(hole: &str, board: &str) -> HandRequest {
    HandRequest::new(&split_tokens(hole), &split_tokens(board))
}

fn print_report<T: Serialize>(
    json: bool,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", text(report));
    }

    Ok(())
}

fn run_odds(config: &OddsConfig) -> Result<ProbabilityReport> {
    let simulation = config.request.simulation()?;

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    info!(
        "Running {} trials against {} opponents",
        simulation.trials(),
        simulation.opponents()
    );

    let outcome = if config.tasks > 1 {
        simulation.par_run(config.tasks, &mut rng)
    } else {
        simulation.run(&mut rng)
    };

    Ok(outcome.into())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Evaluate { hole, board } => {
            let report = api::evaluate_hand(&hand_request(&hole, &board))?;
            print_report(cli.json, &report, |r| {
                format!("{} ({}): {}", r.rank_name, r.rank_value, r.best_hand.join(" "))
            })
        }
        Command::Compare {
            hole1,
            hole2,
            board,
            board2,
        } => {
            let board2 = board2.as_deref().unwrap_or(&board);
            let report = api::compare_hands(
                &hand_request(&hole1, &board),
                &hand_request(&hole2, board2),
            )?;
            print_report(cli.json, &report, |r| match r.winner {
                0 => format!("Tie with {}", r.winning_hand_name),
                n => format!("Player {n} wins with {}", r.winning_hand_name),
            })
        }
        Command::Odds {
            hole,
            board,
            players,
            trials,
            tasks,
            seed,
        } => {
            let config = OddsConfig {
                request: ProbabilityRequest {
                    hole_cards: split_tokens(&hole),
                    community_cards: split_tokens(&board),
                    num_players: i64::from(players),
                    num_simulations: trials,
                },
                tasks: tasks as usize,
                seed,
            };

            let report = run_odds(&config)?;
            print_report(cli.json, &report, |r| {
                format!(
                    "Win {:.2}%  Tie {:.2}%  Lose {:.2}%",
                    r.win_probability * 100.0,
                    r.tie_probability * 100.0,
                    r.lose_probability * 100.0
                )
            })
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
