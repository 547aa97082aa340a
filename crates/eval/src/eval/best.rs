// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use holdem_cards::{Card, for_each_ksubset};

use super::value::{HAND_SIZE, HandRank, HandValue};
use crate::error::{EvalError, Result};

/// The best five cards hand out of a pool of five or more cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    value: HandValue,
    cards: [Card; HAND_SIZE],
    indices: [usize; HAND_SIZE],
}

impl BestHand {
    /// Selects the five cards subset with the highest value.
    ///
    /// When more than one subset has the highest value the first one in
    /// lexicographic order of the pool positions is returned.
    pub fn select(cards: &[Card]) -> Result<BestHand> {
        if cards.len() < HAND_SIZE {
            return Err(EvalError::InsufficientCards(cards.len()));
        }

        let mut best: Option<BestHand> = None;
        let mut hand = [cards[0]; HAND_SIZE];

        for_each_ksubset(cards.len(), HAND_SIZE, |subset| {
            for (c, &idx) in hand.iter_mut().zip(subset) {
                *c = cards[idx];
            }

            let value = HandValue::eval(&hand);
            if best.is_none_or(|b| value > b.value) {
                let mut indices = [0; HAND_SIZE];
                indices.copy_from_slice(subset);
                best = Some(BestHand {
                    value,
                    cards: hand,
                    indices,
                });
            }
        });

        best.ok_or(EvalError::InsufficientCards(cards.len()))
    }

    /// Returns the highest value of the five cards subsets of a pool.
    pub fn value_of(cards: &[Card]) -> Result<HandValue> {
        if cards.len() < HAND_SIZE {
            return Err(EvalError::InsufficientCards(cards.len()));
        }

        Ok(best_value(cards))
    }

    /// The best hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The best hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank()
    }

    /// The best hand cards.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The positions of the best hand cards in the evaluated pool.
    pub fn indices(&self) -> &[usize; HAND_SIZE] {
        &self.indices
    }
}

/// Highest subset value of a pool with at least five cards.
pub(crate) fn best_value(cards: &[Card]) -> HandValue {
    debug_assert!(cards.len() >= HAND_SIZE);

    let mut best = HandValue::eval(&cards[..HAND_SIZE]);
    let mut hand = [cards[0]; HAND_SIZE];

    for_each_ksubset(cards.len(), HAND_SIZE, |subset| {
        for (c, &idx) in hand.iter_mut().zip(subset) {
            *c = cards[idx];
        }

        best = best.max(HandValue::eval(&hand));
    });

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(tokens: &str) -> Vec<Card> {
        tokens.split(',').map(|t| Card::parse(t).unwrap()).collect()
    }

    #[test]
    fn seven_cards_royal_flush() {
        let cards = pool("HA,HK,HQ,HJ,HT,S2,S3");
        let best = BestHand::select(&cards).unwrap();

        assert_eq!(best.rank(), HandRank::RoyalFlush);
        assert_eq!(best.indices(), &[0, 1, 2, 3, 4]);
        assert_eq!(best.cards().as_slice(), &cards[..5]);
        assert_eq!(best.value().tiebreak(), &[14, 13, 12, 11, 10]);
    }

    #[test]
    fn insufficient_cards() {
        let cards = pool("HA,HK,HQ,HJ");
        assert_eq!(
            BestHand::select(&cards),
            Err(EvalError::InsufficientCards(4))
        );
        assert_eq!(
            BestHand::value_of(&[]),
            Err(EvalError::InsufficientCards(0))
        );
    }

    #[test]
    fn five_cards_evaluates_itself() {
        let cards = pool("7S,3H,2D,KC,9H");
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.value(), HandValue::eval(&cards));
        assert_eq!(best.indices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn six_and_seven_cards() {
        // The flush beats the straight on the board.
        let cards = pool("9H,2H,5S,6H,7H,8C,KH");
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.rank(), HandRank::Flush);
        assert_eq!(best.value().tiebreak(), &[13, 9, 7, 6, 2]);

        // Two pairs out of three pairs keeps the best kicker.
        let cards = pool("QS,QH,5D,5C,2H,2S,9C");
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.rank(), HandRank::TwoPair);
        assert_eq!(best.value().tiebreak(), &[12, 5, 9]);

        // Full house from two trips.
        let cards = pool("QS,QH,QD,5C,5H,5S");
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.rank(), HandRank::FullHouse);
        assert_eq!(best.value().tiebreak(), &[12, 5]);

        // Wheel with an extra six plays six high.
        let cards = pool("AS,2H,3D,4C,5H,6S,KD");
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.rank(), HandRank::Straight);
        assert_eq!(best.value().tiebreak(), &[6, 5, 4, 3, 2]);
    }

    #[test]
    fn select_and_value_agree() {
        let mut deck = holdem_cards::Deck::new_and_shuffled(&mut rand::rng());
        for n in [5, 6, 7, 8, 9] {
            for _ in 0..200 {
                let cards = &deck.cards()[..n];
                let best = BestHand::select(cards).unwrap();
                assert_eq!(BestHand::value_of(cards), Ok(best.value()));

                // The selected cards are the ones at the returned positions.
                for (card, &idx) in best.cards().iter().zip(best.indices()) {
                    assert_eq!(*card, cards[idx]);
                }

                deck.shuffle(&mut rand::rng());
            }
        }
    }
}
