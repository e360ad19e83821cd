// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Highhand server entry point.
//!
//! Exposes the deal and compare paths over a JSON HTTP API:
//!
//! - `POST /api/new` deals, classifies, and stores a new hand.
//! - `GET /api/all` returns all stored hands, newest first.
//! - `POST /api/compare` takes `{"ids": [..]}` and returns the winner
//!   among the stored hands with those ids.
use anyhow::Result;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, net::SocketAddr, path::PathBuf};
use tokio::signal;
use warp::{Filter, Rejection, Reply, http::StatusCode, reply::Response};

use highhand_eval::{Deck, RankedHand, classify, winner_index};

use crate::db::{Db, StoredHand};

/// Server config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// The hands database path, in memory when not set.
    pub db_path: Option<PathBuf>,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let db = match &config.db_path {
        Some(path) => Db::open(path)?,
        None => Db::open_in_memory()?,
    };

    let addr: SocketAddr = format!("{}:{}", config.address, config.port).parse()?;
    info!("Starting server listening on {addr}");

    let (_, server) = warp::serve(routes(db)).bind_with_graceful_shutdown(addr, async {
        let _ = signal::ctrl_c().await;
        info!("Received shutdown signal...");
    });

    server.await;
    Ok(())
}

/// The API routes.
pub fn routes(db: Db) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_db = warp::any().map(move || db.clone());

    let new_hand = warp::path!("api" / "new")
        .and(warp::post())
        .and(with_db.clone())
        .and_then(deal_hand);

    let all_hands = warp::path!("api" / "all")
        .and(warp::get())
        .and(with_db.clone())
        .and_then(list_hands);

    let compare = warp::path!("api" / "compare")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_db)
        .and_then(compare_hands);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"]);

    new_hand.or(all_hands).or(compare).with(cors)
}

/// A hands comparison request.
#[derive(Debug, Deserialize)]
struct CompareRequest {
    ids: Vec<i64>,
}

/// A hands comparison response.
#[derive(Debug, Serialize)]
struct CompareResponse {
    hands: Vec<StoredHand>,
    winner: StoredHand,
    description: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

/// Deals, classifies, and stores a new hand.
async fn deal_hand(db: Db) -> Result<Response, Infallible> {
    let cards = Deck::deal_hand(&mut rand::rng());
    let hand = match classify(&cards) {
        Ok(hand) => hand,
        Err(e) => return Ok(error_reply(StatusCode::BAD_REQUEST, e.to_string())),
    };

    match db.insert_hand(hand).await {
        Ok(stored) => Ok(warp::reply::json(&stored).into_response()),
        Err(e) => {
            error!("Failed to store hand: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to store hand",
            ))
        }
    }
}

/// Returns all stored hands, newest first.
async fn list_hands(db: Db) -> Result<Response, Infallible> {
    match db.all_hands().await {
        Ok(hands) => Ok(warp::reply::json(&hands).into_response()),
        Err(e) => {
            error!("Failed to list hands: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list hands",
            ))
        }
    }
}

/// Finds the winner among previously stored hands.
async fn compare_hands(req: CompareRequest, db: Db) -> Result<Response, Infallible> {
    if req.ids.len() < 2 {
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "Must provide at least 2 hand IDs",
        ));
    }

    let stored = match db.hands_by_ids(req.ids.clone()).await {
        Ok(hands) => hands,
        Err(e) => {
            error!("Failed to load hands: {e}");
            return Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load hands",
            ));
        }
    };

    if stored.len() != req.ids.len() {
        return Ok(error_reply(
            StatusCode::NOT_FOUND,
            "One or more hands were not found",
        ));
    }

    // Stored hands are re-ranked from their persisted classification.
    let ranked = stored
        .iter()
        .map(StoredHand::to_ranked)
        .collect::<Vec<RankedHand>>();

    match winner_index(&ranked) {
        Ok(index) => {
            let winner = stored[index].clone();
            let description = format!("{} wins", winner.description);
            let response = CompareResponse {
                hands: stored,
                winner,
                description,
            };
            Ok(warp::reply::json(&response).into_response())
        }
        Err(e) => Ok(error_reply(StatusCode::BAD_REQUEST, e.to_string())),
    }
}
