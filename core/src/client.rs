//! Request builder for the Ed slides endpoint.
//!
//! # Design
//! `SlideClient` holds only a `base_url` and carries no state between calls.
//! It produces an `HttpRequest`; executing it is the caller's job.
//!
//! The multipart body is a literal, not the output of an encoder. Note the
//! part delimiter in the body carries two more leading dashes than the
//! `boundary=` parameter, as multipart framing requires.

use crate::http::{HttpMethod, HttpRequest};

/// Root of the Ed REST API.
pub const DEFAULT_BASE_URL: &str = "https://edstem.org/api";

/// Overrides `DEFAULT_BASE_URL` when set. Used to point the binary at a
/// local mock server.
pub const BASE_URL_VAR: &str = "EDSTEM_API_URL";

/// Lesson that receives the new slide.
pub const LESSON_ID: u64 = 44601;

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "EDSTEM_TOKEN";

/// Header carrying the token in place of `Authorization`.
pub const TOKEN_HEADER: &str = "X-Token";

pub const CONTENT_TYPE: &str =
    "multipart/form-data; boundary=---------------------------264592028829639346041448524574";

/// One `slide` part whose value is `{"type":"document"}`.
pub const SLIDE_BODY: &str = "-----------------------------264592028829639346041448524574\n\
Content-Disposition: form-data; name=\"slide\"\n\
\n\
{\"type\":\"document\"}\n\
-----------------------------264592028829639346041448524574--";

/// Stateless builder for slide requests.
#[derive(Debug, Clone)]
pub struct SlideClient {
    base_url: String,
}

impl Default for SlideClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SlideClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_slide(&self, lesson_id: u64, token: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/lessons/{lesson_id}/slides", self.base_url),
            headers: vec![
                ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
                (TOKEN_HEADER.to_string(), token.to_string()),
            ],
            body: SLIDE_BODY.as_bytes().to_vec(),
        }
    }
}
