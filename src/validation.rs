//! Input rules shared by the book and genre operations.

use serde_json::Value as JsonValue;

/// Outcome of coercing a path segment to an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathId {
    /// An integral value that can match a stored id.
    Id(i64),
    /// Numeric, but can never match a stored id (fractional, infinite, out of range).
    Unmatchable,
}

impl PathId {
    pub fn id(self) -> Option<i64> {
        match self {
            PathId::Id(id) => Some(id),
            PathId::Unmatchable => None,
        }
    }
}

/// Coerces a raw path segment the way a numeric cast does: surrounding
/// whitespace is ignored, the remainder must be a number. Returns `None` for
/// non-numeric input.
pub fn parse_path_id(raw: &str) -> Option<PathId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(PathId::Id(0));
    }

    // Only the exact `Infinity` spelling is numeric; `inf` and friends are not.
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
        return (unsigned == "Infinity").then_some(PathId::Unmatchable);
    }

    let value: f64 = trimmed.parse().ok()?;
    if value.is_nan() {
        return None;
    }

    Some(integral(value).map_or(PathId::Unmatchable, PathId::Id))
}

/// Returns the text as sent when the value is a string with at least one
/// non-whitespace character.
pub fn non_blank_text(value: Option<&JsonValue>) -> Option<&str> {
    match value {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Like [`non_blank_text`], but trimmed.
pub fn required_text(value: Option<&JsonValue>) -> Option<&str> {
    non_blank_text(value).map(str::trim)
}

/// Reads a JSON number holding an integral value. Strings, booleans and
/// fractional numbers are rejected.
pub fn json_id(value: Option<&JsonValue>) -> Option<i64> {
    let number = match value {
        Some(JsonValue::Number(n)) => n,
        _ => return None,
    };

    if let Some(id) = number.as_i64() {
        return Some(id);
    }
    number.as_f64().and_then(integral)
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
