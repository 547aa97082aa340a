// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads up hands comparison.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use holdem_cards::Card;

use crate::{
    error::Result,
    eval::{BestHand, HandRank},
};

/// The cards a player can use, the hole cards and the community cards.
///
/// Each player has its own community cards so that players with different
/// boards can still be compared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerCards {
    /// The player hole cards.
    pub hole: Vec<Card>,
    /// The community cards for this player.
    pub community: Vec<Card>,
}

impl PlayerCards {
    /// Creates player cards from hole and community cards.
    pub fn new(hole: &[Card], community: &[Card]) -> Self {
        Self {
            hole: hole.to_vec(),
            community: community.to_vec(),
        }
    }

    /// All the player cards, hole cards first.
    pub fn pool(&self) -> Vec<Card> {
        self.hole.iter().chain(&self.community).copied().collect()
    }

    /// The best five cards hand for this player.
    pub fn best_hand(&self) -> Result<BestHand> {
        BestHand::select(&self.pool())
    }
}

/// The winner of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Both hands have the same value.
    Tie,
    /// The first player has the best hand.
    Player1,
    /// The second player has the best hand.
    Player2,
}

impl Winner {
    /// The winner code, 0 for a tie, 1 or 2 for the winning player.
    pub fn code(self) -> u8 {
        match self {
            Winner::Tie => 0,
            Winner::Player1 => 1,
            Winner::Player2 => 2,
        }
    }
}

/// The result of comparing two players hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    winner: Winner,
    hands: [BestHand; 2],
}

impl Showdown {
    /// Compares the best hands of two players.
    pub fn compare(player1: &PlayerCards, player2: &PlayerCards) -> Result<Showdown> {
        let hands = [player1.best_hand()?, player2.best_hand()?];
        let winner = match hands[0].value().cmp(&hands[1].value()) {
            Ordering::Greater => Winner::Player1,
            Ordering::Less => Winner::Player2,
            Ordering::Equal => Winner::Tie,
        };

        Ok(Showdown { winner, hands })
    }

    /// The comparison winner.
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// The winning hand category, on a tie the category shared by both hands.
    pub fn winning_rank(&self) -> HandRank {
        match self.winner {
            Winner::Player2 => self.hands[1].rank(),
            Winner::Player1 | Winner::Tie => self.hands[0].rank(),
        }
    }

    /// The best hand of the first player.
    pub fn player1(&self) -> &BestHand {
        &self.hands[0]
    }

    /// The best hand of the second player.
    pub fn player2(&self) -> &BestHand {
        &self.hands[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    fn cards(tokens: &str) -> Vec<Card> {
        tokens.split(',').map(|t| Card::parse(t).unwrap()).collect()
    }

    fn player(hole: &str, board: &str) -> PlayerCards {
        PlayerCards::new(&cards(hole), &cards(board))
    }

    #[test]
    fn board_straight_flush_is_a_tie() {
        let board = "SA,S2,S3,S4,S5";
        let s = Showdown::compare(&player("CA,CK", board), &player("DA,DK", board)).unwrap();

        // Both players play the board straight flush.
        assert_eq!(s.winner(), Winner::Tie);
        assert_eq!(s.winning_rank(), HandRank::StraightFlush);
        assert_eq!(s.player1().value(), s.player2().value());
    }

    #[test]
    fn same_category_kicker_wins() {
        let board = "D2,D7,S9,CK,HA";
        let p1 = player("HK,SK", board);
        let p2 = player("CA,C3", board);

        let s = Showdown::compare(&p1, &p2).unwrap();
        assert_eq!(s.winner(), Winner::Player1);
        assert_eq!(s.winning_rank(), HandRank::ThreeOfAKind);

        let s = Showdown::compare(&p2, &p1).unwrap();
        assert_eq!(s.winner(), Winner::Player2);
        assert_eq!(s.winning_rank(), HandRank::ThreeOfAKind);

        // Same pair of aces, the second player has the better kicker.
        let p1 = player("AS,QC", board);
        let p2 = player("AD,JC", board);
        let p2_kicker = player("AC,8C", board);
        assert_eq!(
            Showdown::compare(&p1, &p2).unwrap().winner(),
            Winner::Player1
        );
        assert_eq!(
            Showdown::compare(&p2, &p2_kicker).unwrap().winner(),
            Winner::Player1
        );
    }

    #[test]
    fn tie_with_split_kickers() {
        let board = "DA,DK,S9,C7,H4";
        let s = Showdown::compare(&player("CA,C2", board), &player("HA,S3", board)).unwrap();
        assert_eq!(s.winner(), Winner::Tie);
        assert_eq!(s.winning_rank(), HandRank::OnePair);
        assert_eq!(s.winner().code(), 0);
    }

    #[test]
    fn different_boards() {
        let p1 = player("HA,SA", "D2,D7,S9");
        let p2 = player("H2,S3", "C4,C5,C6");

        let s = Showdown::compare(&p1, &p2).unwrap();
        assert_eq!(s.winner(), Winner::Player2);
        assert_eq!(s.winning_rank(), HandRank::Straight);
        assert_eq!(s.winner().code(), 2);
    }

    #[test]
    fn insufficient_cards() {
        let p1 = player("HA,SA", "D2,D7,S9");
        let p2 = player("H2,S3", "C4,C5");
        assert_eq!(
            Showdown::compare(&p1, &p2),
            Err(EvalError::InsufficientCards(4))
        );
    }
}
