//! Catalog Module
//!
//! Books and genres kept in process memory, with referential integrity
//! between them: every book points at an existing genre, and a genre can't be
//! removed while a book still points at it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use catalog::catalog;
//!
//! let app = Router::new()
//!     .nest("/api/v1", catalog::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;
mod store;

pub use routes::routes;
pub use store::Catalog;
