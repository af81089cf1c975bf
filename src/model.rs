use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "genreId")]
    pub genre_id: i64,
}

// Payload fields stay as raw JSON so that type mismatches ("title": 5) are
// reported as validation failures instead of body rejections.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBook {
    pub title: Option<JsonValue>,
    pub author: Option<JsonValue>,
    #[serde(rename = "genreId")]
    pub genre_id: Option<JsonValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBook {
    pub title: Option<JsonValue>,
    pub author: Option<JsonValue>,
    #[serde(rename = "genreId")]
    pub genre_id: Option<JsonValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGenre {
    pub name: Option<JsonValue>,
}

pub fn seed_genres() -> Vec<Genre> {
    [
        (1, "Fiction"),
        (2, "Non-Fiction"),
        (3, "Science Fiction"),
        (4, "Fantasy"),
    ]
    .into_iter()
    .map(|(id, name)| Genre {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn seed_books() -> Vec<Book> {
    [
        (1, "Pride and Prejudice", "Jane Austin", 1),
        (2, "Independent People", "Halldór Laxnes", 1),
        (3, "Brief Answers to the Big Questions", "Stephen Hawking", 2),
    ]
    .into_iter()
    .map(|(id, title, author, genre_id)| Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        genre_id,
    })
    .collect()
}
