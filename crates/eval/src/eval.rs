// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! [classify] maps exactly 5 cards to a [HandCategory], its fixed strength,
//! and a description naming the deciding values. Categories are checked
//! from strongest to weakest and the first match wins, with high card as
//! the unconditional fallback, so classification is total once the hand
//! size check passes.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use highhand_cards::{Card, Rank};

/// The number of cards in a playable hand.
pub const HAND_SIZE: usize = 5;

/// Errors returned by hand classification and comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The classifier input is not exactly 5 cards.
    #[error("a poker hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The comparator input has fewer than 2 hands.
    #[error("must have at least 2 hands for comparison, got {0}")]
    InsufficientHands(usize),
}

/// The ten standard hand categories.
///
/// Discriminants are the category strength, 1 for high card up to 10 for a
/// royal flush, so the derived ordering follows strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandCategory {
    /// No matching combination, the highest card decides.
    HighCard = 1,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks, the ace may play low.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// Ten to ace in one suit.
    RoyalFlush,
}

impl HandCategory {
    /// The category strength, 1 to 10.
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// The category name used for storage and transport.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high-card",
            HandCategory::OnePair => "one-pair",
            HandCategory::TwoPair => "two-pair",
            HandCategory::ThreeOfAKind => "three-of-a-kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full-house",
            HandCategory::FourOfAKind => "four-of-a-kind",
            HandCategory::StraightFlush => "straight-flush",
            HandCategory::RoyalFlush => "royal-flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        };

        write!(f, "{name}")
    }
}

impl FromStr for HandCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s {
            "high-card" => HandCategory::HighCard,
            "one-pair" => HandCategory::OnePair,
            "two-pair" => HandCategory::TwoPair,
            "three-of-a-kind" => HandCategory::ThreeOfAKind,
            "straight" => HandCategory::Straight,
            "flush" => HandCategory::Flush,
            "full-house" => HandCategory::FullHouse,
            "four-of-a-kind" => HandCategory::FourOfAKind,
            "straight-flush" => HandCategory::StraightFlush,
            "royal-flush" => HandCategory::RoyalFlush,
            _ => return Err(ParseCategoryError(s.to_string())),
        };

        Ok(category)
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand category {0:?}")]
pub struct ParseCategoryError(String);

/// A classified 5 cards hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedHand {
    /// The hand cards in dealt order.
    pub cards: [Card; HAND_SIZE],
    /// The matched category.
    pub category: HandCategory,
    /// The category strength, 1 to 10.
    pub strength: u8,
    /// Human readable description naming the deciding values.
    pub description: String,
}

/// Classifies a 5 cards hand.
///
/// Fails with [EvalError::InvalidHandSize] when `cards` is not exactly 5
/// cards, classification of 5 cards never fails.
pub fn classify(cards: &[Card]) -> Result<RankedHand, EvalError> {
    let cards: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

    // Rank frequencies computed once and shared by all category checks.
    let mut counts = AHashMap::with_capacity(HAND_SIZE);
    for card in &cards {
        *counts.entry(card.rank()).or_insert(0u8) += 1;
    }

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = is_straight(&cards);
    let trips = highest_with_count(&counts, 3);
    let pairs = ranks_with_count(&counts, 2);

    // First matching category wins, checked from strongest to weakest.
    let (category, description) = if flush && is_royal(&cards) {
        (HandCategory::RoyalFlush, "Royal flush".to_string())
    } else if flush && straight {
        (HandCategory::StraightFlush, "Straight flush".to_string())
    } else if let Some(rank) = highest_with_count(&counts, 4) {
        (HandCategory::FourOfAKind, format!("Four of a kind: {rank}"))
    } else if let (Some(trips), Some(pair)) = (trips, pairs.first()) {
        (
            HandCategory::FullHouse,
            format!("Full house: {trips} over {pair}"),
        )
    } else if flush {
        (HandCategory::Flush, "Flush".to_string())
    } else if straight {
        (HandCategory::Straight, "Straight".to_string())
    } else if let Some(rank) = trips {
        (HandCategory::ThreeOfAKind, format!("Three of a kind: {rank}"))
    } else if let [high, low] = pairs.as_slice() {
        (HandCategory::TwoPair, format!("Two pair: {high} and {low}"))
    } else if let [pair] = pairs.as_slice() {
        (HandCategory::OnePair, format!("One pair: {pair}"))
    } else {
        let high = cards.iter().map(|c| c.rank()).fold(Rank::Deuce, Rank::max);
        (HandCategory::HighCard, format!("High card: {high}"))
    };

    Ok(RankedHand {
        cards,
        strength: category.strength(),
        category,
        description,
    })
}

/// Checks for 5 consecutive rank values, with the A-2-3-4-5 wheel where
/// the ace plays low counting as a straight.
fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let mut values = cards.map(|c| c.rank().value());
    values.sort_unstable();

    values.windows(2).all(|w| w[1] == w[0] + 1) || values == [2, 3, 4, 5, 14]
}

/// Checks for the ten to ace values of a royal flush.
fn is_royal(cards: &[Card; HAND_SIZE]) -> bool {
    let mut values = cards.map(|c| c.rank().value());
    values.sort_unstable();

    values == [10, 11, 12, 13, 14]
}

/// The highest rank appearing exactly `count` times.
fn highest_with_count(counts: &AHashMap<Rank, u8>, count: u8) -> Option<Rank> {
    counts
        .iter()
        .filter(|&(_, &c)| c == count)
        .map(|(&rank, _)| rank)
        .max()
}

/// The ranks appearing exactly `count` times, highest first.
fn ranks_with_count(counts: &AHashMap<Rank, u8>, count: u8) -> Vec<Rank> {
    let mut ranks = counts
        .iter()
        .filter(|&(_, &c)| c == count)
        .map(|(&rank, _)| rank)
        .collect::<Vec<_>>();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use highhand_cards::Deck;

    fn cards(codes: &str) -> Vec<Card> {
        codes
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    fn check(codes: &str, category: HandCategory, description: &str) {
        let hand = classify(&cards(codes)).unwrap();
        assert_eq!(hand.category, category, "{codes}");
        assert_eq!(hand.strength, category.strength(), "{codes}");
        assert_eq!(hand.description, description, "{codes}");
    }

    #[test]
    fn invalid_hand_size() {
        assert_eq!(
            classify(&cards("AH KH QH JH")),
            Err(EvalError::InvalidHandSize(4))
        );
        assert_eq!(
            classify(&cards("AH KH QH JH TH 9H")),
            Err(EvalError::InvalidHandSize(6))
        );
        assert_eq!(classify(&[]), Err(EvalError::InvalidHandSize(0)));
    }

    #[test]
    fn high_card() {
        check("2C 7D 9H JS AC", HandCategory::HighCard, "High card: A");
        check("2C 7D 9H JS QC", HandCategory::HighCard, "High card: Q");
    }

    #[test]
    fn one_pair() {
        check("QC QD 9H 7S 4C", HandCategory::OnePair, "One pair: Q");
    }

    #[test]
    fn two_pair() {
        // Higher pair named first.
        check("9C KD 9H KS 4C", HandCategory::TwoPair, "Two pair: K and 9");
    }

    #[test]
    fn three_of_a_kind() {
        check(
            "4C 4D 4H JS AC",
            HandCategory::ThreeOfAKind,
            "Three of a kind: 4",
        );
    }

    #[test]
    fn straight() {
        check("5C 6D 7H 8S 9C", HandCategory::Straight, "Straight");
        check("TC JD QH KS AC", HandCategory::Straight, "Straight");
    }

    #[test]
    fn wheel_straight() {
        // The ace plays low, not high card and not no match.
        check("2C 3D 4H 5S AC", HandCategory::Straight, "Straight");
    }

    #[test]
    fn flush() {
        check("2H 7H 9H JH AH", HandCategory::Flush, "Flush");
    }

    #[test]
    fn full_house() {
        check(
            "9C 9D 9H KS KC",
            HandCategory::FullHouse,
            "Full house: 9 over K",
        );
    }

    #[test]
    fn four_of_a_kind() {
        check(
            "4C 4D 4H 4S KC",
            HandCategory::FourOfAKind,
            "Four of a kind: 4",
        );
    }

    #[test]
    fn straight_flush_beats_flush_and_straight() {
        // Simultaneous flush and straight must not classify as either.
        check("5H 6H 7H 8H 9H", HandCategory::StraightFlush, "Straight flush");
    }

    #[test]
    fn wheel_straight_flush() {
        check("2H 3H 4H 5H AH", HandCategory::StraightFlush, "Straight flush");
    }

    #[test]
    fn royal_flush() {
        check("TH JH QH KH AH", HandCategory::RoyalFlush, "Royal flush");
        // Same values in mixed suits are only a straight.
        check("TH JC QH KH AH", HandCategory::Straight, "Straight");
    }

    #[test]
    fn category_strengths() {
        assert_eq!(HandCategory::HighCard.strength(), 1);
        assert_eq!(HandCategory::OnePair.strength(), 2);
        assert_eq!(HandCategory::TwoPair.strength(), 3);
        assert_eq!(HandCategory::ThreeOfAKind.strength(), 4);
        assert_eq!(HandCategory::Straight.strength(), 5);
        assert_eq!(HandCategory::Flush.strength(), 6);
        assert_eq!(HandCategory::FullHouse.strength(), 7);
        assert_eq!(HandCategory::FourOfAKind.strength(), 8);
        assert_eq!(HandCategory::StraightFlush.strength(), 9);
        assert_eq!(HandCategory::RoyalFlush.strength(), 10);
        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
    }

    #[test]
    fn category_name_round_trip() {
        for category in [
            HandCategory::HighCard,
            HandCategory::OnePair,
            HandCategory::TwoPair,
            HandCategory::ThreeOfAKind,
            HandCategory::Straight,
            HandCategory::Flush,
            HandCategory::FullHouse,
            HandCategory::FourOfAKind,
            HandCategory::StraightFlush,
            HandCategory::RoyalFlush,
        ] {
            assert_eq!(category.name().parse::<HandCategory>(), Ok(category));
        }

        assert!("four-of-a-kin".parse::<HandCategory>().is_err());
    }

    #[test]
    fn category_serde_names() {
        let json = serde_json::to_string(&HandCategory::FullHouse).unwrap();
        assert_eq!(json, "\"full-house\"");

        let category = serde_json::from_str::<HandCategory>("\"royal-flush\"").unwrap();
        assert_eq!(category, HandCategory::RoyalFlush);
    }

    #[test]
    fn random_hands_always_classify() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let hand = classify(&Deck::deal_hand(&mut rng)).unwrap();
            assert!((1..=10).contains(&hand.strength));
            assert_eq!(hand.strength, hand.category.strength());
            assert!(!hand.description.is_empty());
        }
    }
}
