// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Highhand Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use highhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!("ah".parse(), Ok(ah));
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use highhand_cards::{Card, Deck};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! assert_eq!(deck.count(), Deck::SIZE);
//!
//! let card = deck.deal();
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! [Deck::deal_hand] composes the two to produce a playable 5 cards hand:
//!
//! ```
//! # use highhand_cards::Deck;
//! let hand = Deck::deal_hand(&mut rand::rng());
//! assert_eq!(hand.len(), 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
