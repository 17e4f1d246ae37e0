//! SQLite implementation of the album repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::SqlitePool;

use crate::domain::entities::Album;
use crate::domain::repositories::AlbumRepository;
use crate::error::AppError;

/// SQLite repository for album storage and retrieval.
///
/// Uses SQLx bound parameters for SQL injection protection. Each operation
/// is one statement against the `albums` table; there is no transaction
/// scoping beyond the implicit per-statement unit of work.
pub struct SqliteAlbumRepository {
    pool: SqlitePool,
}

impl SqliteAlbumRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `albums` table.
///
/// The column set is fixed and known, so mapping is a plain conversion
/// rather than anything reflective. `image` is the table's historical
/// column name for the image URL.
#[derive(sqlx::FromRow)]
struct AlbumRow {
    id: i64,
    name: String,
    artists: String,
    release_date: NaiveDate,
    url: String,
    image: String,
    price: f64,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Album::new(
            Some(row.id),
            row.name,
            row.artists,
            row.release_date,
            row.url,
            row.image,
            row.price,
        )
    }
}

#[async_trait]
impl AlbumRepository for SqliteAlbumRepository {
    async fn list_all(&self) -> Result<Vec<Album>, AppError> {
        // No ORDER BY: callers get the store-natural row order.
        let rows = sqlx::query_as::<_, AlbumRow>(
            "SELECT id, name, artists, release_date, url, image, price FROM albums",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Album>, AppError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            "SELECT id, name, artists, release_date, url, image, price
             FROM albums
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Album::from))
    }

    async fn find_by_artists(&self, artists: &str) -> Result<Vec<Album>, AppError> {
        // Lower-case and wildcard-wrap the needle so "punk" matches "Daft Punk".
        let pattern = format!("%{}%", artists.to_lowercase());

        let rows = sqlx::query_as::<_, AlbumRow>(
            "SELECT id, name, artists, release_date, url, image, price
             FROM albums
             WHERE LOWER(artists) LIKE ?1",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn insert(&self, album: &mut Album) -> Result<(), AppError> {
        if let Some(id) = album.id {
            return Err(AppError::bad_request(
                "Album already has an id; use update instead",
                json!({ "id": id }),
            ));
        }

        let result = sqlx::query(
            "INSERT INTO albums (name, artists, release_date, url, image, price)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&album.name)
        .bind(&album.artists)
        .bind(album.release_date)
        .bind(&album.url)
        .bind(&album.image_url)
        .bind(album.price)
        .execute(&self.pool)
        .await?;

        album.id = Some(result.last_insert_rowid());
        Ok(())
    }

    async fn update(&self, album: &Album) -> Result<(), AppError> {
        let Some(id) = album.id else {
            return Err(AppError::bad_request(
                "Album has no id yet; use insert instead",
                json!({ "name": album.name }),
            ));
        };

        sqlx::query(
            "UPDATE albums
             SET name = ?1, artists = ?2, release_date = ?3, url = ?4, image = ?5, price = ?6
             WHERE id = ?7",
        )
        .bind(&album.name)
        .bind(&album.artists)
        .bind(album.release_date)
        .bind(&album.url)
        .bind(&album.image_url)
        .bind(album.price)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
