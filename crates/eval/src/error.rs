// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use holdem_cards::InvalidCardFormat;

/// Errors returned by the evaluation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card token could not be parsed.
    #[error(transparent)]
    InvalidCardFormat(#[from] InvalidCardFormat),
    /// Less than 5 cards were given to a hand evaluation.
    #[error("need at least 5 cards to evaluate a hand, got {0}")]
    InsufficientCards(usize),
    /// A simulation needs at least two players.
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(i64),
    /// The board cannot have more than 5 cards.
    #[error("too many community cards {0}, the board has 5 cards")]
    TooManyCommunityCards(usize),
    /// The deck has not enough cards to deal all players and the board.
    #[error("not enough cards in the deck, needed {needed} available {available}")]
    NotEnoughCards {
        /// Cards needed to deal opponents and the board.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, EvalError>;
