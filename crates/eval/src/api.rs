// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card tokens operations.
//!
//! These functions take cards as text tokens, as received by a service
//! endpoint, and return serializable reports. Tokens can be in rank-suit
//! (`AH`) or suit-rank (`HA`) order and the best hand cards are reported
//! with the same tokens used in the request.
use rand::Rng;
use serde::{Deserialize, Serialize};

use holdem_cards::Card;

use crate::{
    error::{EvalError, Result},
    odds::{Outcome, Simulation},
    showdown::{PlayerCards, Showdown},
};

/// A player hand request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRequest {
    /// The player hole cards tokens.
    #[serde(default)]
    pub hole_cards: Vec<String>,
    /// The community cards tokens.
    #[serde(default)]
    pub community_cards: Vec<String>,
}

impl HandRequest {
    /// Creates a request from hole and community tokens.
    pub fn new<S: AsRef<str>>(hole_cards: &[S], community_cards: &[S]) -> Self {
        let to_strings = |tokens: &[S]| -> Vec<String> {
            tokens.iter().map(|t| t.as_ref().to_string()).collect()
        };
        Self {
            hole_cards: to_strings(hole_cards),
            community_cards: to_strings(community_cards),
        }
    }

    /// Parses the request tokens into player cards.
    pub fn player_cards(&self) -> Result<PlayerCards> {
        Ok(PlayerCards {
            hole: parse_cards(&self.hole_cards)?,
            community: parse_cards(&self.community_cards)?,
        })
    }

    /// All the request tokens, hole cards first.
    fn tokens(&self) -> impl Iterator<Item = &String> {
        self.hole_cards.iter().chain(&self.community_cards)
    }
}

/// A win probability request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityRequest {
    /// The player hole cards tokens.
    #[serde(default)]
    pub hole_cards: Vec<String>,
    /// The known community cards tokens.
    #[serde(default)]
    pub community_cards: Vec<String>,
    /// Number of players including the requesting player.
    pub num_players: i64,
    /// Number of trials, a non positive number runs the default trials.
    #[serde(default)]
    pub num_simulations: i64,
}

impl ProbabilityRequest {
    /// Creates the simulation for this request.
    pub fn simulation(&self) -> Result<Simulation> {
        let hole = parse_cards(&self.hole_cards)?;
        let community = parse_cards(&self.community_cards)?;
        let num_players = usize::try_from(self.num_players)
            .map_err(|_| EvalError::TooFewPlayers(self.num_players))?;
        let trials = usize::try_from(self.num_simulations).unwrap_or(0);
        Simulation::new(&hole, &community, num_players, trials)
    }
}

/// The best hand of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandReport {
    /// The hand category value from 0 (high card) to 9 (royal flush).
    pub rank_value: u8,
    /// The hand category name.
    pub rank_name: String,
    /// The five cards tokens of the best hand.
    pub best_hand: Vec<String>,
}

/// The result of comparing two hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareReport {
    /// 0 for a tie, 1 or 2 for the winning player.
    pub winner: u8,
    /// The winning hand category name.
    pub winning_hand_name: String,
}

/// Win, tie and lose probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityReport {
    /// Probability of winning.
    pub win_probability: f64,
    /// Probability of tying.
    pub tie_probability: f64,
    /// Probability of losing.
    pub lose_probability: f64,
}

impl From<Outcome> for ProbabilityReport {
    fn from(outcome: Outcome) -> Self {
        Self {
            win_probability: outcome.win(),
            tie_probability: outcome.tie(),
            lose_probability: outcome.lose(),
        }
    }
}

/// Parses a list of card tokens.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>> {
    let cards = tokens
        .iter()
        .map(|t| Card::parse(t.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(cards)
}

/// Evaluates the best five cards hand of the request cards.
pub fn evaluate_hand(request: &HandRequest) -> Result<HandReport> {
    let best = request.player_cards()?.best_hand()?;
    let tokens = request.tokens().collect::<Vec<_>>();

    Ok(HandReport {
        rank_value: best.rank().value(),
        rank_name: best.rank().to_string(),
        best_hand: best.indices().iter().map(|&i| tokens[i].clone()).collect(),
    })
}

/// Compares the best hands of two players.
pub fn compare_hands(hand1: &HandRequest, hand2: &HandRequest) -> Result<CompareReport> {
    let showdown = Showdown::compare(&hand1.player_cards()?, &hand2.player_cards()?)?;

    Ok(CompareReport {
        winner: showdown.winner().code(),
        winning_hand_name: showdown.winning_rank().to_string(),
    })
}

/// Estimates the request player win probability.
pub fn calculate_probability<R: Rng + ?Sized>(
    request: &ProbabilityRequest,
    rng: &mut R,
) -> Result<ProbabilityReport> {
    let simulation = request.simulation()?;
    Ok(simulation.run(rng).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn request(hole: &str, community: &str) -> HandRequest {
        let split = |s: &str| {
            s.split(',')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        HandRequest::new(&split(hole), &split(community))
    }

    #[test]
    fn evaluate_royal_flush() {
        let report = evaluate_hand(&request("HA,HK", "HQ,HJ,HT,S2,S3")).unwrap();
        assert_eq!(report.rank_value, 9);
        assert_eq!(report.rank_name, "Royal Flush");
        assert_eq!(report.best_hand, ["HA", "HK", "HQ", "HJ", "HT"]);
    }

    #[test]
    fn evaluate_keeps_input_tokens() {
        let report = evaluate_hand(&request("ah,Kd", "AS,2c,KH,7d,9S")).unwrap();
        assert_eq!(report.rank_name, "Two Pair");
        assert_eq!(report.rank_value, 2);
        assert_eq!(report.best_hand, ["ah", "Kd", "AS", "KH", "9S"]);
    }

    #[test]
    fn evaluate_errors() {
        assert_eq!(
            evaluate_hand(&request("HA,HK", "HQ,HJ")),
            Err(EvalError::InsufficientCards(4))
        );

        let err = evaluate_hand(&request("HA,H1", "HQ,HJ,HT")).unwrap_err();
        assert!(matches!(err, EvalError::InvalidCardFormat(_)));
    }

    #[test]
    fn compare() {
        let board = "SA,S2,S3,S4,S5";
        let report = compare_hands(&request("CA,CK", board), &request("DA,DK", board)).unwrap();
        assert_eq!(report.winner, 0);
        assert_eq!(report.winning_hand_name, "Straight Flush");

        let board = "D2,D7,S9,CK,HA";
        let report = compare_hands(&request("CA,C3", board), &request("HK,SK", board)).unwrap();
        assert_eq!(report.winner, 2);
        assert_eq!(report.winning_hand_name, "Three of a Kind");

        let report = compare_hands(&request("HK,SK", board), &request("CA,C3", board)).unwrap();
        assert_eq!(report.winner, 1);
    }

    #[test]
    fn probability() {
        let req = ProbabilityRequest {
            hole_cards: vec!["HA".to_string(), "SA".to_string()],
            community_cards: vec!["CA".to_string(), "DA".to_string()],
            num_players: 2,
            num_simulations: -5,
        };

        let mut rng = SmallRng::seed_from_u64(17);
        assert_eq!(req.simulation().unwrap().trials(), 1000);

        let report = calculate_probability(&req, &mut rng).unwrap();
        assert!(report.win_probability > 0.99);
        let sum = report.win_probability + report.tie_probability + report.lose_probability;
        assert!((sum - 1.0).abs() < 1e-9);

        let req = ProbabilityRequest {
            num_players: 0,
            ..req
        };
        assert_eq!(
            calculate_probability(&req, &mut rng),
            Err(EvalError::TooFewPlayers(0))
        );

        let req = ProbabilityRequest {
            num_players: -3,
            ..req
        };
        assert_eq!(req.simulation().unwrap_err(), EvalError::TooFewPlayers(-3));
    }

    #[test]
    fn request_from_json() {
        let req: ProbabilityRequest =
            serde_json::from_str(r#"{"hole_cards":["AH","KH"],"num_players":3}"#).unwrap();
        assert!(req.community_cards.is_empty());
        assert_eq!(req.simulation().unwrap().trials(), 1000);

        let report = ProbabilityReport::from(Outcome::default());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"lose_probability\":1.0"));
    }
}
