//! HTML page handlers.

mod albums;

pub use albums::{AlbumForm, AlbumSearchQuery, AlbumsTemplate, add_album_handler, albums_page_handler};
