#![allow(dead_code)]

use album_catalog::infrastructure::persistence::SqliteAlbumRepository;
use album_catalog::prelude::*;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// An unpersisted album with placeholder URLs and a fixed price.
pub fn unsaved_album(name: &str, artists: &str) -> Album {
    Album::new(
        None,
        name.to_string(),
        artists.to_string(),
        date("2001-03-12"),
        format!("https://example.com/{}", name.to_lowercase()),
        format!("https://example.com/{}.jpg", name.to_lowercase()),
        19.99,
    )
}

/// Inserts a row directly, bypassing the repository, and returns its id.
pub async fn seed_album(pool: &SqlitePool, name: &str, artists: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO albums (name, artists, release_date, url, image, price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(name)
    .bind(artists)
    .bind("2001-03-12")
    .bind(format!("https://example.com/{}", name.to_lowercase()))
    .bind(format!("https://example.com/{}.jpg", name.to_lowercase()))
    .bind(19.99)
    .execute(pool)
    .await
    .unwrap();

    result.last_insert_rowid()
}

pub async fn count_albums(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM albums")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(SqliteAlbumRepository::new(pool)))
}
