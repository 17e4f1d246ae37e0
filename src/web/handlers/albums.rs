//! Album listing page and form-submission handlers.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use crate::domain::entities::Album;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the album listing and submission page.
///
/// Renders `templates/albums.html` with:
/// - A table of all albums (one placeholder row when the catalog is empty)
/// - A submission form, pre-filled from `form_values` and annotated with
///   per-field messages from `errors`
///
/// All values pass through askama's HTML auto-escaping; album fields are
/// externally supplied and must never reach the markup raw.
#[derive(Template, WebTemplate)]
#[template(path = "albums.html")]
pub struct AlbumsTemplate {
    pub albums: Vec<Album>,
    pub search: String,
    pub form_values: HashMap<String, String>,
    pub errors: HashMap<String, String>,
}

impl AlbumsTemplate {
    /// Previously submitted raw value for a form field, or empty.
    fn value(&self, field: &str) -> &str {
        self.form_values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Validation message for a form field, if any.
    fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Query parameters for the listing page.
#[derive(Debug, Deserialize)]
pub struct AlbumSearchQuery {
    /// Case-insensitive substring to match against the artists field.
    pub artiesten: Option<String>,
}

/// Raw form submission for adding an album.
///
/// All fields arrive as strings so invalid input can be echoed back into
/// the form untouched. Field names match the form's Dutch input names.
#[derive(Debug, Deserialize)]
pub struct AlbumForm {
    #[serde(default)]
    pub naam: String,
    #[serde(default)]
    pub artiesten: String,
    #[serde(default)]
    pub release_datum: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub afbeelding: String,
    #[serde(default)]
    pub prijs: String,
}

impl AlbumForm {
    /// Validates the submission and builds an unpersisted [`Album`].
    ///
    /// On failure returns a field-name → message map; every offending field
    /// gets its own entry so the view can place messages next to inputs.
    pub fn validate(&self) -> Result<Album, HashMap<String, String>> {
        let mut errors = HashMap::new();

        if self.naam.trim().is_empty() {
            errors.insert("naam".to_string(), "Naam is verplicht".to_string());
        }
        if self.artiesten.trim().is_empty() {
            errors.insert("artiesten".to_string(), "Artiesten is verplicht".to_string());
        }

        let release_date = NaiveDate::parse_from_str(self.release_datum.trim(), "%Y-%m-%d");
        if release_date.is_err() {
            errors.insert(
                "release_datum".to_string(),
                "Ongeldige releasedatum (JJJJ-MM-DD)".to_string(),
            );
        }

        if Url::parse(self.url.trim()).is_err() {
            errors.insert("url".to_string(), "Ongeldige URL".to_string());
        }
        if Url::parse(self.afbeelding.trim()).is_err() {
            errors.insert(
                "afbeelding".to_string(),
                "Ongeldige afbeeldings-URL".to_string(),
            );
        }

        let price = self
            .prijs
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| *p >= 0.0 && p.is_finite());
        if price.is_none() {
            errors.insert(
                "prijs".to_string(),
                "Prijs moet een niet-negatief bedrag zijn".to_string(),
            );
        }

        let (Ok(release_date), Some(price)) = (release_date, price) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Album::new(
            None,
            self.naam.trim().to_string(),
            self.artiesten.trim().to_string(),
            release_date,
            self.url.trim().to_string(),
            self.afbeelding.trim().to_string(),
            price,
        ))
    }

    /// Raw submitted values, keyed by form field name, for echoing back.
    pub fn values(&self) -> HashMap<String, String> {
        HashMap::from([
            ("naam".to_string(), self.naam.clone()),
            ("artiesten".to_string(), self.artiesten.clone()),
            ("release_datum".to_string(), self.release_datum.clone()),
            ("url".to_string(), self.url.clone()),
            ("afbeelding".to_string(), self.afbeelding.clone()),
            ("prijs".to_string(), self.prijs.clone()),
        ])
    }
}

/// Renders the album listing and submission page.
///
/// # Endpoint
///
/// `GET /albums` — optional `?artiesten=<substring>` filters the table via
/// a case-insensitive artist search.
pub async fn albums_page_handler(
    State(state): State<AppState>,
    Query(query): Query<AlbumSearchQuery>,
) -> Result<AlbumsTemplate, AppError> {
    let search = query.artiesten.unwrap_or_default();

    let albums = if search.trim().is_empty() {
        state.albums.list_all().await?
    } else {
        state.albums.find_by_artists(search.trim()).await?
    };

    Ok(AlbumsTemplate {
        albums,
        search,
        form_values: HashMap::new(),
        errors: HashMap::new(),
    })
}

/// Handles an album form submission.
///
/// # Endpoint
///
/// `POST /albums`
///
/// Valid input is inserted and answered with a redirect back to the listing
/// (post/redirect/get). Invalid input re-renders the page with status 422,
/// the user's raw input echoed into the form, and a message next to each
/// offending field.
pub async fn add_album_handler(
    State(state): State<AppState>,
    Form(form): Form<AlbumForm>,
) -> Result<Response, AppError> {
    match form.validate() {
        Ok(mut album) => {
            state.albums.insert(&mut album).await?;
            tracing::info!(id = ?album.id, name = %album.name, "album added");
            Ok(Redirect::to("/albums").into_response())
        }
        Err(errors) => {
            let albums = state.albums.list_all().await?;
            let template = AlbumsTemplate {
                albums,
                search: String::new(),
                form_values: form.values(),
                errors,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAlbumRepository;
    use serde_json::json;
    use std::sync::Arc;

    fn valid_form() -> AlbumForm {
        AlbumForm {
            naam: "Discovery".to_string(),
            artiesten: "Daft Punk".to_string(),
            release_datum: "2001-03-12".to_string(),
            url: "https://example.com/discovery".to_string(),
            afbeelding: "https://example.com/discovery.jpg".to_string(),
            prijs: "19.99".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_unpersisted_album() {
        let album = valid_form().validate().unwrap();

        assert!(album.id.is_none());
        assert_eq!(album.name, "Discovery");
        assert_eq!(album.release_date.to_string(), "2001-03-12");
        assert_eq!(album.price, 19.99);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut form = valid_form();
        form.naam = "  ".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("naam").unwrap(), "Naam is verplicht");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_bad_date_and_negative_price_are_both_reported() {
        let mut form = valid_form();
        form.release_datum = "12-03-2001".to_string();
        form.prijs = "-1".to_string();

        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("release_datum"));
        assert!(errors.contains_key("prijs"));
    }

    #[test]
    fn test_relative_urls_are_rejected() {
        let mut form = valid_form();
        form.url = "not a url".to_string();
        form.afbeelding = "/relative.jpg".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("url").unwrap(), "Ongeldige URL");
        assert_eq!(errors.get("afbeelding").unwrap(), "Ongeldige afbeeldings-URL");
    }

    #[test]
    fn test_empty_catalog_renders_placeholder_row() {
        let template = AlbumsTemplate {
            albums: vec![],
            search: String::new(),
            form_values: HashMap::new(),
            errors: HashMap::new(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Geen albums gevonden."));
    }

    #[test]
    fn test_errors_and_prior_values_are_rendered_into_form() {
        let template = AlbumsTemplate {
            albums: vec![],
            search: String::new(),
            form_values: HashMap::from([(
                "artiesten".to_string(),
                "Daft Punk".to_string(),
            )]),
            errors: HashMap::from([(
                "naam".to_string(),
                "Naam is verplicht".to_string(),
            )]),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Naam is verplicht"));
        assert!(html.contains(r#"value="Daft Punk""#));
        assert!(html.contains("Geen albums gevonden."));
    }

    #[test]
    fn test_album_fields_are_escaped() {
        let album = Album::new(
            Some(1),
            "<script>alert('x')</script>".to_string(),
            "Daft Punk".to_string(),
            chrono::NaiveDate::from_ymd_opt(2001, 3, 12).unwrap(),
            "https://example.com".to_string(),
            "https://example.com/a.jpg".to_string(),
            19.99,
        );
        let template = AlbumsTemplate {
            albums: vec![album],
            search: String::new(),
            form_values: HashMap::new(),
            errors: HashMap::new(),
        };

        let html = template.render().unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_page_handler_propagates_store_errors() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_list_all()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let state = AppState::new(Arc::new(repo));
        let result =
            albums_page_handler(State(state), Query(AlbumSearchQuery { artiesten: None })).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
