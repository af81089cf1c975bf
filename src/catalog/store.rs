use tokio::sync::Mutex;

use crate::api::BookQuery;
use crate::config::IdStrategy;
use crate::error::{CatalogError, Result};
use crate::model::{Book, CreateBook, CreateGenre, Genre, UpdateBook, seed_books, seed_genres};
use crate::validation::{PathId, json_id, non_blank_text, required_text};

struct Collections {
    genres: Vec<Genre>,
    books: Vec<Book>,
    next_genre_id: i64,
    next_book_id: i64,
}

impl Collections {
    fn genre_exists(&self, id: i64) -> bool {
        self.genres.iter().any(|g| g.id == id)
    }

    fn find_book(&self, id: Option<i64>) -> Option<&Book> {
        let id = id?;
        self.books.iter().find(|b| b.id == id)
    }

    fn genre_in_use(&self, id: i64) -> bool {
        self.books.iter().any(|b| b.genre_id == id)
    }

    /// Existence checks shared by the single-book read and update paths.
    /// The book is checked before the genre.
    fn check_book_path(&self, genre: PathId, book: PathId) -> Result<()> {
        if self.find_book(book.id()).is_none() {
            return Err(CatalogError::not_found("Book not found"));
        }
        if !genre.id().is_some_and(|id| self.genre_exists(id)) {
            return Err(CatalogError::not_found("Genre not found"));
        }
        Ok(())
    }
}

fn next_id(strategy: IdStrategy, len: usize, counter: &mut i64) -> i64 {
    match strategy {
        IdStrategy::Length => len as i64 + 1,
        IdStrategy::Counter => {
            let id = *counter;
            *counter += 1;
            id
        }
    }
}

/// In-memory book and genre collections.
///
/// Every operation holds the lock for its whole check-then-act sequence, so a
/// genre can't gain a book between the "in use" check and its removal.
pub struct Catalog {
    inner: Mutex<Collections>,
    id_strategy: IdStrategy,
}

impl Catalog {
    pub fn new(id_strategy: IdStrategy, seed: bool) -> Self {
        if seed {
            Catalog::with_data(seed_genres(), seed_books(), id_strategy)
        } else {
            Catalog::with_data(Vec::new(), Vec::new(), id_strategy)
        }
    }

    pub fn with_data(genres: Vec<Genre>, books: Vec<Book>, id_strategy: IdStrategy) -> Self {
        let next_genre_id = genres.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;

        Catalog {
            inner: Mutex::new(Collections {
                genres,
                books,
                next_genre_id,
                next_book_id,
            }),
            id_strategy,
        }
    }

    pub async fn list_books(&self, query: &BookQuery) -> Vec<Book> {
        let inner = self.inner.lock().await;

        let Some(names) = query.genre_names() else {
            return inner.books.clone();
        };

        let genre_ids: Vec<i64> = inner
            .genres
            .iter()
            .filter(|g| names.contains(&g.name.to_lowercase()))
            .map(|g| g.id)
            .collect();

        inner
            .books
            .iter()
            .filter(|b| genre_ids.contains(&b.genre_id))
            .cloned()
            .collect()
    }

    /// Looks the book up by id alone; `genre` only has to exist.
    pub async fn get_book(&self, genre: PathId, book: PathId) -> Result<Book> {
        let inner = self.inner.lock().await;
        inner.check_book_path(genre, book)?;

        inner
            .find_book(book.id())
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Book not found"))
    }

    pub async fn create_book(&self, payload: CreateBook) -> Result<Book> {
        let mut inner = self.inner.lock().await;

        let title = required_text(payload.title.as_ref()).ok_or_else(|| {
            CatalogError::invalid("Invalid input. 'title' is required and must be a non-empty string.")
        })?;
        let author = required_text(payload.author.as_ref()).ok_or_else(|| {
            CatalogError::invalid("Invalid input. 'author' is required and must be a non-empty string.")
        })?;
        let genre_id = json_id(payload.genre_id.as_ref())
            .filter(|id| *id != 0 && inner.genre_exists(*id))
            .ok_or_else(|| {
                CatalogError::invalid(
                    "Invalid input. 'genreId' is required and must correspond to a valid genre.",
                )
            })?;

        let len = inner.books.len();
        let id = next_id(self.id_strategy, len, &mut inner.next_book_id);
        let book = Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre_id,
        };
        inner.books.push(book.clone());

        tracing::info!(book_id = book.id, genre_id = book.genre_id, "created book");
        Ok(book)
    }

    /// Applies the present fields of `payload` to a book that must belong to
    /// `genre`. Text is stored as sent. Every book carrying the id is
    /// rewritten; the first one is returned.
    pub async fn update_book(&self, genre: PathId, book: PathId, payload: UpdateBook) -> Result<Book> {
        let mut inner = self.inner.lock().await;
        inner.check_book_path(genre, book)?;

        let book_id = book.id();
        let belongs = inner
            .books
            .iter()
            .any(|b| Some(b.id) == book_id && Some(b.genre_id) == genre.id());
        if !belongs {
            return Err(CatalogError::not_found("Book not found in the specified genre"));
        }

        let title = match payload.title.as_ref() {
            Some(value) => Some(non_blank_text(Some(value)).ok_or_else(|| {
                CatalogError::invalid("Invalid input. 'title' must be a non-empty string.")
            })?),
            None => None,
        };
        let author = match payload.author.as_ref() {
            Some(value) => Some(non_blank_text(Some(value)).ok_or_else(|| {
                CatalogError::invalid("Invalid input. 'author' must be a non-empty string.")
            })?),
            None => None,
        };
        let genre_id = match payload.genre_id.as_ref() {
            Some(value) => {
                let id = json_id(Some(value)).filter(|id| inner.genre_exists(*id));
                Some(id.ok_or_else(|| {
                    CatalogError::invalid("Invalid input. 'genreId' must correspond to a valid genre.")
                })?)
            }
            None => None,
        };

        let mut updated: Option<Book> = None;
        for existing in inner.books.iter_mut().filter(|b| Some(b.id) == book_id) {
            if let Some(title) = title {
                existing.title = title.to_string();
            }
            if let Some(author) = author {
                existing.author = author.to_string();
            }
            if let Some(genre_id) = genre_id {
                existing.genre_id = genre_id;
            }
            if updated.is_none() {
                updated = Some(existing.clone());
            }
        }

        let updated = updated.ok_or_else(|| CatalogError::not_found("Book not found"))?;
        tracing::info!(book_id = updated.id, genre_id = updated.genre_id, "updated book");
        Ok(updated)
    }

    pub async fn delete_book(&self, book: PathId) -> Result<Book> {
        let mut inner = self.inner.lock().await;

        let book_id = book.id();
        let Some(pos) = inner.books.iter().position(|b| Some(b.id) == book_id) else {
            return Err(CatalogError::not_found("Book not found"));
        };

        // Under the length strategy ids can repeat; every copy goes, the first is returned.
        let removed = inner.books[pos].clone();
        inner.books.retain(|b| b.id != removed.id);

        tracing::info!(book_id = removed.id, "deleted book");
        Ok(removed)
    }

    pub async fn list_genres(&self) -> Vec<Genre> {
        self.inner.lock().await.genres.clone()
    }

    pub async fn create_genre(&self, payload: CreateGenre) -> Result<Genre> {
        let mut inner = self.inner.lock().await;

        let name = required_text(payload.name.as_ref())
            .ok_or_else(|| CatalogError::invalid("Invalid input. 'name' must be a non-empty string."))?;

        let lowered = name.to_lowercase();
        if inner.genres.iter().any(|g| g.name.to_lowercase() == lowered) {
            return Err(CatalogError::conflict("Genre already exists!"));
        }

        let len = inner.genres.len();
        let id = next_id(self.id_strategy, len, &mut inner.next_genre_id);
        let genre = Genre {
            id,
            name: name.to_string(),
        };
        inner.genres.push(genre.clone());

        tracing::info!(genre_id = genre.id, name = %genre.name, "created genre");
        Ok(genre)
    }

    /// Removes a genre no book references. The "in use" check runs before the
    /// existence check.
    pub async fn delete_genre(&self, genre: PathId) -> Result<Genre> {
        let mut inner = self.inner.lock().await;

        if genre.id().is_some_and(|id| inner.genre_in_use(id)) {
            return Err(CatalogError::conflict("Invalid input. Genre is in use!"));
        }

        let genre_id = genre.id().filter(|id| *id != 0);
        let Some(pos) = inner.genres.iter().position(|g| Some(g.id) == genre_id) else {
            return Err(CatalogError::not_found(
                "Invalid input. Genre is in use or not found!",
            ));
        };

        let removed = inner.genres[pos].clone();
        inner.genres.retain(|g| g.id != removed.id);

        tracing::info!(genre_id = removed.id, "deleted genre");
        Ok(removed)
    }
}
