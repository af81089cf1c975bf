use axum::Json;
use serde::Serialize;

use crate::error::{CatalogError, Result};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

pub fn error_body(msg: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        message: msg.to_owned(),
    })
}

const FILTER_PARAM: &str = "filter";

/// Query parameters accepted by the book listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub filter: Vec<String>,
}

impl BookQuery {
    /// Parses a raw query string. `filter` may repeat (`filter=a&filter=b`,
    /// or `filter[]=a`); any other key is rejected.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let mut query = BookQuery::default();
        let Some(raw) = raw else {
            return Ok(query);
        };

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(key)?;
            if key != FILTER_PARAM && key != "filter[]" {
                return Err(CatalogError::invalid(
                    "Invalid input. Only 'filter' query parameter is allowed.",
                ));
            }
            query.filter.push(decode(value)?);
        }

        Ok(query)
    }

    /// Lowercased genre names to match, or `None` when the listing is unfiltered.
    pub fn genre_names(&self) -> Option<Vec<String>> {
        match self.filter.as_slice() {
            [] => None,
            [only] if only.is_empty() => None,
            names => Some(names.iter().map(|n| n.to_lowercase()).collect()),
        }
    }
}

fn decode(component: &str) -> Result<String> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|_| CatalogError::invalid("Invalid input. Malformed query string."))
}
