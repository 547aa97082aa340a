// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and subsets iteration.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// The largest subset size supported by [for_each_ksubset].
pub const MAX_SUBSET: usize = 7;

/// Calls the `f` closure with the indices of each k-subset of `0..n`.
///
/// Subsets are generated in lexicographic order with indices in increasing
/// order, no subset is generated if k > n.
///
/// Panics if k > [MAX_SUBSET].
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!(k <= MAX_SUBSET, "k={k} must be k <= {MAX_SUBSET}");

    if k > n {
        return;
    }

    let mut c = [0usize; MAX_SUBSET];
    for (i, slot) in c[..k].iter_mut().enumerate() {
        *slot = i;
    }

    loop {
        f(&c[..k]);

        // Find the rightmost index that can still move right.
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }

            i -= 1;
            if c[i] < n - k + i {
                break;
            }
        }

        c[i] += 1;
        for j in (i + 1)..k {
            c[j] = c[j - 1] + 1;
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// The cards in the deck in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=MAX_SUBSET).contains(&k), "1 <= k <= {MAX_SUBSET}");

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); MAX_SUBSET];
        for_each_ksubset(self.cards.len(), k, |subset| {
            for (pos, &idx) in subset.iter().enumerate() {
                h[pos] = self.cards[idx];
            }

            f(&h[..k]);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards_unique() {
        let deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        deck.remove(ad);
        deck.remove(ad);
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(!deck.cards().contains(&ad));
    }

    #[test]
    fn deck_shuffle_keeps_cards() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Deuce, Suit::Clubs));
        deck.shuffle(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let cards = deck.cards().iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE - 1);
    }

    #[test]
    fn ksubsets() {
        let mut subsets = Vec::new();
        for_each_ksubset(5, 3, |s| subsets.push(s.to_vec()));
        assert_eq!(
            subsets,
            vec![
                vec![0, 1, 2],
                vec![0, 1, 3],
                vec![0, 1, 4],
                vec![0, 2, 3],
                vec![0, 2, 4],
                vec![0, 3, 4],
                vec![1, 2, 3],
                vec![1, 2, 4],
                vec![1, 3, 4],
                vec![2, 3, 4],
            ]
        );

        let mut count = 0;
        for_each_ksubset(7, 5, |_| count += 1);
        assert_eq!(count, 21);

        count = 0;
        for_each_ksubset(5, 5, |s| {
            assert_eq!(s, &[0, 1, 2, 3, 4]);
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_ksubset(4, 5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);
    }
}
