// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! [HandValue::eval] classifies exactly five cards into a [HandRank] plus the
//! ranks that break ties between hands of the same category, and
//! [BestHand::select] searches all the five cards subsets of a larger pool,
//! for example the two hole cards and five community cards of a Texas Hold'em
//! hand, and returns the subset with the highest value.
//!
//! Use [BestHand::value_of] when only the value is needed, as when comparing
//! hands during a simulation.

mod best;
pub use best::BestHand;
pub(crate) use best::best_value;

mod value;
pub use value::{HAND_SIZE, HandRank, HandValue};
