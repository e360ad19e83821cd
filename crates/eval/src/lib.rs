// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Highhand Poker hand classifier and comparator.
//!
//! The classifier maps a 5 cards hand to one of the ten standard Poker
//! categories with a numeric strength and a human readable description:
//!
//! ```
//! # use highhand_eval::*;
//! let cards = Deck::deal_hand(&mut rand::rng());
//! let hand = classify(&cards).unwrap();
//! assert!((1..=10).contains(&hand.strength));
//! ```
//!
//! the comparator orders two or more classified hands by strength and, on
//! equal strength, by descending kicker values:
//!
//! ```
//! # use highhand_eval::*;
//! let mut rng = rand::rng();
//! let hands = vec![
//!     classify(&Deck::deal_hand(&mut rng)).unwrap(),
//!     classify(&Deck::deal_hand(&mut rng)).unwrap(),
//! ];
//! let showdown = find_winner(&hands).unwrap();
//! assert!(showdown.description.ends_with(" wins"));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, ParseCategoryError, RankedHand, classify};

pub mod showdown;
pub use showdown::{Showdown, compare_hands, find_winner, winner_index};

// Reexport cards types.
pub use highhand_cards::{Card, Deck, Rank, Suit};
