// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::Card;

/// Number of cards in a Poker hand.
pub const HAND_SIZE: usize = 5;

/// Sorted ranks of a royal flush.
const ROYAL: [u8; HAND_SIZE] = [14, 13, 12, 11, 10];

/// Sorted ranks of a five high straight.
const WHEEL: [u8; HAND_SIZE] = [14, 5, 4, 3, 2];

/// Five high straight tiebreak with the ace playing low.
const WHEEL_TIEBREAK: [u8; HAND_SIZE] = [5, 4, 3, 2, 1];

/// The category of a five cards hand from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// All ranks from the lowest to the highest.
    pub const ALL: [HandRank; 10] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    /// The category numeric value, 0 for high card up to 9 for a royal flush.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The category display name.
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a five cards hand.
///
/// Values are ordered by rank and then by the tiebreak ranks, so that a
/// stronger hand has a greater value and hands of equal strength have equal
/// values independently of the cards suits and order:
///
/// ```
/// # use holdem_eval::{Card, HandRank, HandValue};
/// let parse = |s: &str| s.split(',').map(|t| Card::parse(t).unwrap()).collect::<Vec<_>>();
///
/// let wheel = HandValue::eval(&parse("AH,2S,3C,4D,5H"));
/// assert_eq!(wheel.rank(), HandRank::Straight);
/// assert_eq!(wheel.tiebreak(), &[5, 4, 3, 2, 1]);
///
/// let six_high = HandValue::eval(&parse("2H,3S,4C,5D,6H"));
/// assert!(six_high > wheel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: [u8; HAND_SIZE],
    len: u8,
}

impl HandValue {
    /// Evaluates a five cards hand.
    ///
    /// Panics if the hand doesn't have exactly five cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert_eq!(cards.len(), HAND_SIZE, "a hand has {HAND_SIZE} cards");

        let mut ranks = [0u8; HAND_SIZE];
        for (r, c) in ranks.iter_mut().zip(cards) {
            *r = c.rank().value();
        }
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_tiebreak(&ranks);

        if is_flush {
            return if ranks == ROYAL {
                Self::new(HandRank::RoyalFlush, &ranks)
            } else if let Some(tiebreak) = straight {
                Self::new(HandRank::StraightFlush, &tiebreak)
            } else {
                Self::new(HandRank::Flush, &ranks)
            };
        }

        let groups = Groups::new(&ranks);
        match groups.counts() {
            [4, 1] => return Self::new(HandRank::FourOfAKind, groups.ranks()),
            [3, 2] => return Self::new(HandRank::FullHouse, groups.ranks()),
            _ => {}
        }

        if let Some(tiebreak) = straight {
            return Self::new(HandRank::Straight, &tiebreak);
        }

        let rank = match groups.counts() {
            [3, 1, 1] => HandRank::ThreeOfAKind,
            [2, 2, 1] => HandRank::TwoPair,
            [2, 1, 1, 1] => HandRank::OnePair,
            _ => HandRank::HighCard,
        };

        Self::new(rank, groups.ranks())
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The ranks that break ties between hands of the same category.
    ///
    /// Grouped ranks come first, larger groups before smaller ones, followed
    /// by the kickers in descending order.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }

    fn new(rank: HandRank, ranks: &[u8]) -> Self {
        let mut tiebreak = [0u8; HAND_SIZE];
        tiebreak[..ranks.len()].copy_from_slice(ranks);
        Self {
            rank,
            tiebreak,
            len: ranks.len() as u8,
        }
    }
}

/// Returns the straight tiebreak for ranks sorted in descending order.
fn straight_tiebreak(ranks: &[u8; HAND_SIZE]) -> Option<[u8; HAND_SIZE]> {
    if ranks.windows(2).any(|w| w[0] == w[1]) {
        None
    } else if ranks[0] - ranks[HAND_SIZE - 1] == 4 {
        Some(*ranks)
    } else if *ranks == WHEEL {
        Some(WHEEL_TIEBREAK)
    } else {
        None
    }
}

/// Distinct ranks grouped by count.
///
/// Groups are sorted by count and then by rank, both descending.
struct Groups {
    counts: [u8; HAND_SIZE],
    ranks: [u8; HAND_SIZE],
    len: usize,
}

impl Groups {
    fn new(sorted: &[u8; HAND_SIZE]) -> Self {
        let mut groups = [(0u8, 0u8); HAND_SIZE];
        let mut len = 0;

        for &r in sorted {
            if len > 0 && groups[len - 1].1 == r {
                groups[len - 1].0 += 1;
            } else {
                groups[len] = (1, r);
                len += 1;
            }
        }

        groups[..len].sort_unstable_by(|a, b| b.cmp(a));

        let mut counts = [0u8; HAND_SIZE];
        let mut ranks = [0u8; HAND_SIZE];
        for (idx, &(count, rank)) in groups[..len].iter().enumerate() {
            counts[idx] = count;
            ranks[idx] = rank;
        }

        Self { counts, ranks, len }
    }

    fn counts(&self) -> &[u8] {
        &self.counts[..self.len]
    }

    fn ranks(&self) -> &[u8] {
        &self.ranks[..self.len]
    }
}
