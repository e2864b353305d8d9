//! I/O-free core of the slide poster.
//!
//! # Overview
//! Builds the one `HttpRequest` the program sends, hands it to a
//! `Transport` supplied by the host, and prints the response. The core never
//! opens a socket, so every behavior can be checked with a test double.
//!
//! # Design
//! - `SlideClient` is stateless; it holds only `base_url`.
//! - The multipart body is a literal constant, not an encoder's output.
//! - `run` reads the token through an injected lookup and writes to an
//!   injected writer, which keeps process globals out of the tests.

pub mod client;
pub mod error;
pub mod http;
pub mod run;

pub use client::{SlideClient, BASE_URL_VAR, CONTENT_TYPE, DEFAULT_BASE_URL, LESSON_ID, SLIDE_BODY, TOKEN_HEADER, TOKEN_VAR};
pub use error::{Error, TransportError};
pub use http::{BodyLiteral, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use run::run;
