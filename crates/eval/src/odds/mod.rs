// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo odds simulation.
//!
//! A [Simulation] estimates the probability that a player wins, ties or loses
//! a hand against a number of opponents by repeatedly dealing the unseen
//! cards, two to each opponent and the rest to complete the board:
//!
//! ```
//! # use holdem_eval::{Card, Simulation};
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let hole = [Card::parse("AH").unwrap(), Card::parse("AS").unwrap()];
//! let sim = Simulation::new(&hole, &[], 2, 500).unwrap();
//!
//! let outcome = sim.run(&mut SmallRng::seed_from_u64(7));
//! assert_eq!(outcome.trials(), 500);
//! assert!(outcome.win() > 0.7);
//! assert!((outcome.win() + outcome.tie() + outcome.lose() - 1.0).abs() < 1e-9);
//! ```
//!
//! With the **`parallel`** feature [Simulation::par_run] splits the trials
//! across a number of tasks, each task with its own random generator seeded
//! from the caller generator.
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, iter, ops};

use holdem_cards::{Card, Deck, Rank, Suit};

use crate::{
    error::{EvalError, Result},
    eval::best_value,
};

#[cfg(feature = "parallel")]
mod parallel;

/// Number of trials used when the given number is not positive.
pub const DEFAULT_TRIALS: usize = 1000;

/// Number of cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Number of hole cards dealt to each opponent.
const HOLE_SIZE: usize = 2;

/// Win, tie and loss counts of a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    wins: u64,
    ties: u64,
    trials: u64,
}

impl Outcome {
    /// Number of trials the player hand beat every opponent.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Number of trials the player hand tied the best opponent hand.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// Number of trials the player hand lost.
    pub fn losses(&self) -> u64 {
        self.trials - self.wins - self.ties
    }

    /// Number of trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// The fraction of trials won.
    pub fn win(&self) -> f64 {
        self.fraction(self.wins)
    }

    /// The fraction of trials tied.
    pub fn tie(&self) -> f64 {
        self.fraction(self.ties)
    }

    /// The fraction of trials lost, computed so that the three fractions sum
    /// to one.
    pub fn lose(&self) -> f64 {
        // Rounding can take the difference just below zero with no losses.
        (1.0 - self.win() - self.tie()).max(0.0)
    }

    fn fraction(&self, count: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }

    fn record(&mut self, result: Ordering) {
        match result {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => {}
        }

        self.trials += 1;
    }
}

impl ops::Add for Outcome {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Outcome {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            trials: self.trials + rhs.trials,
        }
    }
}

impl iter::Sum for Outcome {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Outcome::default(), ops::Add::add)
    }
}

/// A Monte Carlo simulation of a player hand against random opponents.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The player hole cards.
    hole: Vec<Card>,
    /// The known community cards.
    community: Vec<Card>,
    /// Number of opponents dealt at each trial.
    opponents: usize,
    /// Number of trials to run.
    trials: usize,
    /// The deck without the player and community cards.
    deck: Deck,
}

impl Simulation {
    /// Creates a simulation for a player hand.
    ///
    /// The `num_players` count includes the player, a zero `trials` count
    /// runs [DEFAULT_TRIALS] trials.
    pub fn new(
        hole: &[Card],
        community: &[Card],
        num_players: usize,
        trials: usize,
    ) -> Result<Self> {
        if num_players < 2 {
            return Err(EvalError::TooFewPlayers(num_players as i64));
        }

        if community.len() > BOARD_SIZE {
            return Err(EvalError::TooManyCommunityCards(community.len()));
        }

        let mut deck = Deck::default();
        for &card in hole.iter().chain(community) {
            deck.remove(card);
        }

        let opponents = num_players - 1;
        let needed = opponents * HOLE_SIZE + BOARD_SIZE - community.len();
        if needed > deck.count() {
            return Err(EvalError::NotEnoughCards {
                needed,
                available: deck.count(),
            });
        }

        Ok(Self {
            hole: hole.to_vec(),
            community: community.to_vec(),
            opponents,
            trials: if trials == 0 { DEFAULT_TRIALS } else { trials },
            deck,
        })
    }

    /// Number of trials this simulation runs.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Number of opponents dealt at each trial.
    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// Runs the simulation trials with the given random generator.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        debug!(
            "Simulating {} trials against {} opponents, {} cards in the deck",
            self.trials,
            self.opponents,
            self.deck.count()
        );

        let outcome = self.run_trials(self.trials, rng);

        debug!(
            "Simulation done wins={} ties={} losses={}",
            outcome.wins(),
            outcome.ties(),
            outcome.losses()
        );

        outcome
    }

    /// Runs `trials` trials and returns their outcome.
    fn run_trials<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R) -> Outcome {
        let mut outcome = Outcome::default();
        let mut deck = self.deck.clone();

        let known = self.community.len();
        let mut board = [Card::new(Rank::Ace, Suit::Hearts); BOARD_SIZE];
        board[..known].copy_from_slice(&self.community);

        let mut pool = Vec::with_capacity(self.hole.len().max(HOLE_SIZE) + BOARD_SIZE);

        for _ in 0..trials {
            deck.shuffle(rng);

            // Opponents hole cards first, then the missing board cards.
            let (holes, rest) = deck.cards().split_at(self.opponents * HOLE_SIZE);
            board[known..].copy_from_slice(&rest[..BOARD_SIZE - known]);

            pool.clear();
            pool.extend_from_slice(&self.hole);
            pool.extend_from_slice(&board);
            let player = best_value(&pool);

            let best_opponent = holes
                .chunks_exact(HOLE_SIZE)
                .map(|hole| {
                    pool.clear();
                    pool.extend_from_slice(hole);
                    pool.extend_from_slice(&board);
                    best_value(&pool)
                })
                .max();

            match best_opponent {
                Some(opponent) => outcome.record(player.cmp(&opponent)),
                None => outcome.record(Ordering::Greater),
            }
        }

        outcome
    }
}
