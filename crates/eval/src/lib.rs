// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand evaluator.
//!
//! Classifies five cards hands, selects the best five cards out of a larger
//! pool, compares two players hands and estimates a player odds of winning
//! with a Monte Carlo simulation.
//!
//! To evaluate a hand use [HandValue] for exactly five cards or [BestHand]
//! for a pool with five or more cards:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = ["HA", "HK", "HQ", "HJ", "HT", "S2", "S3"]
//!     .map(|t| Card::parse(t).unwrap());
//!
//! let best = BestHand::select(&cards).unwrap();
//! assert_eq!(best.rank(), HandRank::RoyalFlush);
//! assert!(best.value() > HandValue::eval(&cards[2..]));
//! ```
//!
//! The [api] module exposes the same operations on text card tokens with
//! serializable reports for use from a service endpoint.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod api;
pub mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{BestHand, HAND_SIZE, HandRank, HandValue};

pub mod odds;
pub use odds::{DEFAULT_TRIALS, Outcome, Simulation};

pub mod showdown;
pub use showdown::{PlayerCards, Showdown, Winner};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, InvalidCardFormat, Rank, Suit};
