//! Album entity, the single record type of the catalog.

use chrono::NaiveDate;

/// A music album as stored in the catalog.
///
/// `id` is `None` until the album has been persisted; the store assigns it
/// on insert and it never changes afterwards. All other fields are plain
/// mutable data supplied at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: Option<i64>,
    pub name: String,
    pub artists: String,
    pub release_date: NaiveDate,
    pub url: String,
    pub image_url: String,
    pub price: f64,
}

impl Album {
    /// Creates a new Album instance.
    pub fn new(
        id: Option<i64>,
        name: String,
        artists: String,
        release_date: NaiveDate,
        url: String,
        image_url: String,
        price: f64,
    ) -> Self {
        Self {
            id,
            name,
            artists,
            release_date,
            url,
            image_url,
            price,
        }
    }

    /// Returns true once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery() -> Album {
        Album::new(
            None,
            "Discovery".to_string(),
            "Daft Punk".to_string(),
            NaiveDate::from_ymd_opt(2001, 3, 12).unwrap(),
            "https://example.com/discovery".to_string(),
            "https://example.com/discovery.jpg".to_string(),
            19.99,
        )
    }

    #[test]
    fn test_album_creation() {
        let album = discovery();

        assert!(album.id.is_none());
        assert!(!album.is_persisted());
        assert_eq!(album.name, "Discovery");
        assert_eq!(album.artists, "Daft Punk");
        assert_eq!(album.release_date.to_string(), "2001-03-12");
        assert_eq!(album.price, 19.99);
    }

    #[test]
    fn test_album_with_id_is_persisted() {
        let mut album = discovery();
        album.id = Some(7);

        assert!(album.is_persisted());
        assert_eq!(album.id, Some(7));
    }

    #[test]
    fn test_album_fields_are_mutable() {
        let mut album = discovery();
        album.name = "Homework".to_string();
        album.price = 9.99;

        assert_eq!(album.name, "Homework");
        assert_eq!(album.price, 9.99);
    }
}
