use serde_json::Value;
use thiserror::Error;

use crate::database::models::NewBookmark;

/// Required fields, checked in this order with fail-fast on the first miss
const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("Please provide a valid url ex: http:// or https://")]
    InvalidUrl,

    #[error("Please provide a valid rating between 0-5")]
    InvalidRating,
}

/// Check a candidate create payload and produce the record to insert.
///
/// Pure and synchronous. A field is missing when it is absent, null, or
/// (for the string fields) empty. The url check is a substring match,
/// not a full scheme parse. The rating must be a JSON integer in [0,5];
/// floats and strings are rejected.
pub fn validate(payload: &Value) -> Result<NewBookmark, ValidationError> {
    for field in REQUIRED_FIELDS {
        if !is_present(payload.get(field)) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let title = non_empty_str(payload.get("title"))
        .ok_or(ValidationError::MissingField("title"))?;
    let url = non_empty_str(payload.get("url"))
        .ok_or(ValidationError::MissingField("url"))?;

    if !(url.contains("http://") || url.contains("https://")) {
        return Err(ValidationError::InvalidUrl);
    }

    let rating = payload
        .get("rating")
        .and_then(Value::as_i64)
        .ok_or(ValidationError::InvalidRating)?;
    if !(0..=5).contains(&rating) {
        return Err(ValidationError::InvalidRating);
    }

    let description = payload
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(NewBookmark {
        title: title.to_string(),
        url: url.to_string(),
        description,
        rating: rating as i32,
    })
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
