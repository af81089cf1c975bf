//! HTTP Handlers for the Catalog API

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::api::BookQuery;
use crate::error::{CatalogError, Result};
use crate::handler::AppState;
use crate::model::{CreateBook, CreateGenre, UpdateBook};
use crate::validation::{PathId, parse_path_id};
use crate::{created, success};

// ============================================================================
// Request Parsing
// ============================================================================

/// Reads a JSON object body. Empty, malformed and non-object bodies all count
/// as a missing body.
fn parse_body<T: DeserializeOwned>(body: &Bytes, missing_msg: &str) -> Result<T> {
    let value: JsonValue =
        serde_json::from_slice(body).map_err(|_| CatalogError::invalid(missing_msg))?;
    if !value.is_object() {
        return Err(CatalogError::invalid(missing_msg));
    }
    serde_json::from_value(value).map_err(|_| CatalogError::invalid(missing_msg))
}

fn book_path(genre_id: &str, book_id: &str) -> Result<(PathId, PathId)> {
    match (parse_path_id(genre_id), parse_path_id(book_id)) {
        (Some(genre), Some(book)) => Ok((genre, book)),
        _ => Err(CatalogError::invalid(
            "Invalid input. Book id and genre id must be numbers",
        )),
    }
}

// ============================================================================
// Book Handlers
// ============================================================================

pub async fn list_books(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Result<Response> {
    let query = BookQuery::parse(raw.as_deref())?;
    let books = state.catalog.list_books(&query).await;
    Ok(success(books))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path((genre_id, book_id)): Path<(String, String)>,
) -> Result<Response> {
    let (genre, book) = book_path(&genre_id, &book_id)?;
    let book = state.catalog.get_book(genre, book).await?;
    Ok(success(book))
}

pub async fn create_book(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let payload: CreateBook = parse_body(
        &body,
        "Invalid input. Please provide a title, author and genreId.",
    )?;
    let book = state.catalog.create_book(payload).await?;
    Ok(created(book))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path((genre_id, book_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response> {
    let payload: UpdateBook = parse_body(
        &body,
        "Invalid input. Please provide a title, author, id and genreId.",
    )?;
    let (genre, book) = book_path(&genre_id, &book_id)?;
    let book = state.catalog.update_book(genre, book, payload).await?;
    Ok(success(book))
}

pub async fn delete_book(State(state): State<AppState>, Path(book_id): Path<String>) -> Result<Response> {
    let book = parse_path_id(&book_id)
        .ok_or_else(|| CatalogError::invalid("Invalid input. Book id must be a number"))?;
    let book = state.catalog.delete_book(book).await?;
    Ok(success(book))
}

// ============================================================================
// Genre Handlers
// ============================================================================

pub async fn list_genres(State(state): State<AppState>) -> Response {
    success(state.catalog.list_genres().await)
}

pub async fn create_genre(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let payload: CreateGenre =
        parse_body(&body, "Invalid input. Please provide a name for the genre.")?;
    let genre = state.catalog.create_genre(payload).await?;
    Ok(created(genre))
}

pub async fn delete_genre(State(state): State<AppState>, Path(genre_id): Path<String>) -> Result<Response> {
    let genre = parse_path_id(&genre_id)
        .ok_or_else(|| CatalogError::invalid("Invalid input. Genre id must be valid"))?;
    let genre = state.catalog.delete_genre(genre).await?;
    Ok(success(genre))
}
