use axum::{
    Router,
    routing::{delete, get},
};

use super::handler;
use crate::handler::{AppState, method_not_allowed, not_found};

/// Book and genre routes, relative to the API version prefix.
///
/// Deleting a whole collection is a 405 rather than a 404. Trailing slashes
/// are trimmed before routing, so each path also answers with one.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(handler::list_books)
                .post(handler::create_book)
                .delete(method_not_allowed)
                .fallback(not_found),
        )
        .route("/books/:bookId", delete(handler::delete_book).fallback(not_found))
        .route(
            "/genres",
            get(handler::list_genres)
                .post(handler::create_genre)
                .delete(method_not_allowed)
                .fallback(not_found),
        )
        .route("/genres/:genreId", delete(handler::delete_genre).fallback(not_found))
        .route(
            "/genres/:genreId/books/:bookId",
            get(handler::get_book).patch(handler::update_book).fallback(not_found),
        )
}
