// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands comparison and winner selection.
//!
//! Hands order by category strength first, then by comparing the 5 card
//! values sorted descending position by position. Two hands matching on
//! all positions are a true tie and compare equal, [find_winner] keeps the
//! earliest input hand in that case.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use highhand_cards::Card;

use crate::eval::{EvalError, HAND_SIZE, RankedHand};

/// The outcome of comparing two or more classified hands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showdown {
    /// The compared hands in input order.
    pub hands: Vec<RankedHand>,
    /// The strongest hand.
    pub winner: RankedHand,
    /// Human readable outcome, the winner description followed by "wins".
    pub description: String,
}

/// Compares two classified hands.
///
/// Returns [Ordering::Less] when `a` is the stronger hand, so sorting with
/// this comparator puts the strongest hand first.
pub fn compare_hands(a: &RankedHand, b: &RankedHand) -> Ordering {
    b.strength
        .cmp(&a.strength)
        .then_with(|| kicker_values(&b.cards).cmp(&kicker_values(&a.cards)))
}

/// The index of the strongest hand, ties keep the earliest input.
///
/// Fails with [EvalError::InsufficientHands] when fewer than 2 hands are
/// supplied.
pub fn winner_index(hands: &[RankedHand]) -> Result<usize, EvalError> {
    if hands.len() < 2 {
        return Err(EvalError::InsufficientHands(hands.len()));
    }

    let mut indices = (0..hands.len()).collect::<Vec<_>>();
    indices.sort_by(|&a, &b| compare_hands(&hands[a], &hands[b]));
    Ok(indices[0])
}

/// Finds the winner of a competition between classified hands.
pub fn find_winner(hands: &[RankedHand]) -> Result<Showdown, EvalError> {
    let winner = hands[winner_index(hands)?].clone();
    let description = format!("{} wins", winner.description);

    Ok(Showdown {
        hands: hands.to_vec(),
        winner,
        description,
    })
}

/// The hand card values sorted descending for positional comparison.
///
/// A wheel plays as five high, its ace compares as 1 rather than 14 so a
/// six high straight beats it.
fn kicker_values(cards: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut values = cards.map(|c| c.rank().value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    if values == [14, 5, 4, 3, 2] {
        values = [5, 4, 3, 2, 1];
    }

    values
}
