// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Database types for persisting dealt hands.
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{Connection, params, params_from_iter};
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};

use highhand_eval::{Card, HandCategory, RankedHand};

/// A database hand row.
///
/// A stored hand carries the identifier and creation timestamp assigned on
/// insert, the classification itself is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredHand {
    /// The hand row id.
    pub id: i64,
    /// The hand cards.
    pub cards: [Card; 5],
    /// The matched category.
    pub category: HandCategory,
    /// The category strength, 1 to 10.
    pub strength: u8,
    /// The hand description.
    pub description: String,
    /// The row creation timestamp.
    pub created_at: String,
}

impl StoredHand {
    /// The classified hand for comparison.
    pub fn to_ranked(&self) -> RankedHand {
        RankedHand {
            cards: self.cards,
            category: self.category,
            strength: self.strength,
            description: self.description.clone(),
        }
    }
}

/// Database for persisting dealt hands.
#[derive(Debug, Clone)]
pub struct Db {
    db: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Opens an in memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Create tables
        conn.execute(
            "CREATE TABLE IF NOT EXISTS hands (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               cards TEXT NOT NULL,
               category TEXT NOT NULL,
               strength INTEGER NOT NULL,
               description TEXT NOT NULL,
               created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        Ok(Db {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Stores a classified hand and returns its row.
    pub async fn insert_hand(&self, hand: RankedHand) -> Result<StoredHand> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let cards = serde_json::to_string(&hand.cards)?;
            db.execute(
                "INSERT INTO hands (cards, category, strength, description)
                 VALUES (?1, ?2, ?3, ?4)",
                params![cards, hand.category.name(), hand.strength, hand.description],
            )?;

            let id = db.last_insert_rowid();
            let created_at = db.query_row(
                "SELECT created_at FROM hands WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )?;

            Ok(StoredHand {
                id,
                cards: hand.cards,
                category: hand.category,
                strength: hand.strength,
                description: hand.description,
                created_at,
            })
        })
        .await?
    }

    /// All stored hands, newest first.
    pub async fn all_hands(&self) -> Result<Vec<StoredHand>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let mut stmt = db.prepare(
                "SELECT id, cards, category, strength, description, created_at
                 FROM hands
                 ORDER BY id DESC",
            )?;

            let rows = stmt.query_map((), read_row)?;
            rows.map(|row| row?.into_hand()).collect()
        })
        .await?
    }

    /// The stored hands matching the given ids.
    ///
    /// Unknown ids are skipped, the caller checks the returned length.
    pub async fn hands_by_ids(&self, ids: Vec<i64>) -> Result<Vec<StoredHand>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let placeholders = vec!["?"; ids.len()].join(",");
            let mut stmt = db.prepare(&format!(
                "SELECT id, cards, category, strength, description, created_at
                 FROM hands
                 WHERE id IN ({placeholders})"
            ))?;

            let rows = stmt.query_map(params_from_iter(ids), read_row)?;
            rows.map(|row| row?.into_hand()).collect()
        })
        .await?
    }
}

/// A raw hands row before the cards and category text is decoded.
struct HandRow {
    id: i64,
    cards: String,
    category: String,
    strength: u8,
    description: String,
    created_at: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HandRow> {
    Ok(HandRow {
        id: row.get(0)?,
        cards: row.get(1)?,
        category: row.get(2)?,
        strength: row.get(3)?,
        description: row.get(4)?,
        created_at: row.get(5)?,
    })
}

impl HandRow {
    fn into_hand(self) -> Result<StoredHand> {
        Ok(StoredHand {
            id: self.id,
            cards: serde_json::from_str(&self.cards)?,
            category: self.category.parse()?,
            strength: self.strength,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highhand_eval::classify;

    fn hand(codes: &str) -> RankedHand {
        let cards = codes
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<_>>();
        classify(&cards).unwrap()
    }

    #[tokio::test]
    async fn insert_and_list_hands() {
        let db = Db::open_in_memory().unwrap();

        let first = db.insert_hand(hand("2C 7D 9H JS AC")).await.unwrap();
        let second = db.insert_hand(hand("9C 9D 9H KS KC")).await.unwrap();
        assert!(second.id > first.id);
        assert!(!second.created_at.is_empty());

        // Newest first.
        let hands = db.all_hands().await.unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].id, second.id);
        assert_eq!(hands[0].description, "Full house: 9 over K");
        assert_eq!(hands[1].id, first.id);
    }

    #[tokio::test]
    async fn stored_hand_round_trip() {
        let db = Db::open_in_memory().unwrap();

        let ranked = hand("4C 4D 4H 4S KC");
        let stored = db.insert_hand(ranked.clone()).await.unwrap();

        let loaded = db.hands_by_ids(vec![stored.id]).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].cards, ranked.cards);
        assert_eq!(loaded[0].category, ranked.category);
        assert_eq!(loaded[0].strength, ranked.strength);
        assert_eq!(loaded[0].description, ranked.description);

        let again = loaded[0].to_ranked();
        assert_eq!(again.cards, ranked.cards);
        assert_eq!(again.strength, ranked.strength);
    }

    #[tokio::test]
    async fn unknown_ids_are_skipped() {
        let db = Db::open_in_memory().unwrap();

        let stored = db.insert_hand(hand("QC QD 9H 7S 4C")).await.unwrap();

        let hands = db.hands_by_ids(vec![stored.id, stored.id + 100]).await.unwrap();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].id, stored.id);
    }
}
