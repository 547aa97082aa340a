// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the preflop win odds of every starting hand.
//
// ```bash
// $ cargo r --release --features=parallel --example chart -- --num-players 2
// ```
use clap::{Parser, value_parser};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::Instant;

use holdem_eval::*;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of players at the table including the hero.
    #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(2..=10))]
    num_players: u8,
    /// The number of trials for each starting hand.
    #[clap(long, short, default_value_t = 20_000)]
    trials: usize,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 4, value_parser = value_parser!(u8).range(1..=64))]
    tasks: u8,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = SmallRng::seed_from_u64(0x5eed);

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            let sim = match Simulation::new(&[c1, c2], &[], cli.num_players as usize, cli.trials)
            {
                Ok(sim) => sim,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };

            let outcome = sim.par_run(cli.tasks as usize, &mut rng);
            probs.push(outcome.win() * 100.0);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
