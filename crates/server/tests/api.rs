// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! HTTP API tests.
use serde_json::{Value, json};

use highhand_server::db::Db;
use highhand_server::server::routes;

fn body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn deal_returns_a_classified_hand() {
    let api = routes(Db::open_in_memory().unwrap());

    let res = warp::test::request()
        .method("POST")
        .path("/api/new")
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);

    let hand = body(res.body());
    assert!(hand["id"].as_i64().unwrap() > 0);
    assert_eq!(hand["cards"].as_array().unwrap().len(), 5);
    assert!((1..=10).contains(&hand["strength"].as_i64().unwrap()));
    assert!(hand["category"].is_string());
    assert!(!hand["description"].as_str().unwrap().is_empty());
    assert!(hand["created_at"].is_string());
}

#[tokio::test]
async fn all_lists_hands_newest_first() {
    let api = routes(Db::open_in_memory().unwrap());

    let mut ids = Vec::new();
    for _ in 0..3 {
        let res = warp::test::request()
            .method("POST")
            .path("/api/new")
            .reply(&api)
            .await;
        ids.push(body(res.body())["id"].as_i64().unwrap());
    }

    let res = warp::test::request().path("/api/all").reply(&api).await;
    assert_eq!(res.status(), 200);

    let hands = body(res.body());
    let listed = hands
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect::<Vec<_>>();

    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn compare_returns_a_winner() {
    let api = routes(Db::open_in_memory().unwrap());

    let mut ids = Vec::new();
    for _ in 0..2 {
        let res = warp::test::request()
            .method("POST")
            .path("/api/new")
            .reply(&api)
            .await;
        ids.push(body(res.body())["id"].as_i64().unwrap());
    }

    let res = warp::test::request()
        .method("POST")
        .path("/api/compare")
        .json(&json!({ "ids": ids }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);

    let showdown = body(res.body());
    assert_eq!(showdown["hands"].as_array().unwrap().len(), 2);
    assert!(ids.contains(&showdown["winner"]["id"].as_i64().unwrap()));

    let description = showdown["description"].as_str().unwrap();
    assert!(description.ends_with(" wins"));
    assert!(description.starts_with(showdown["winner"]["description"].as_str().unwrap()));
}

#[tokio::test]
async fn compare_rejects_fewer_than_two_ids() {
    let api = routes(Db::open_in_memory().unwrap());

    let res = warp::test::request()
        .method("POST")
        .path("/api/new")
        .reply(&api)
        .await;
    let id = body(res.body())["id"].as_i64().unwrap();

    let res = warp::test::request()
        .method("POST")
        .path("/api/compare")
        .json(&json!({ "ids": [id] }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 400);
    assert_eq!(
        body(res.body())["error"].as_str().unwrap(),
        "Must provide at least 2 hand IDs"
    );
}

#[tokio::test]
async fn compare_unknown_ids_not_found() {
    let api = routes(Db::open_in_memory().unwrap());

    let res = warp::test::request()
        .method("POST")
        .path("/api/compare")
        .json(&json!({ "ids": [998, 999] }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 404);
    assert_eq!(
        body(res.body())["error"].as_str().unwrap(),
        "One or more hands were not found"
    );
}
