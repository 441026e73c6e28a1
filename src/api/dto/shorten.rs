//! DTOs for the shorten and resolve endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Form body of `POST /api/shorturl`.
///
/// A missing `url` field deserializes as an empty string and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Successful shorten response.
///
/// ```json
/// { "original_url": "https://www.example.com/page", "short_url": 1 }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.short_url,
        }
    }
}
