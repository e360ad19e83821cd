// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Highhand Poker hands server.
//!
//! Deals, classifies, and stores 5 cards Poker hands, and compares stored
//! hands by id over a small JSON HTTP API.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod db;
pub mod server;
pub use server::{Config, run};
