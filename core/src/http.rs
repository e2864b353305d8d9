//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds an `HttpRequest`
//! and renders an `HttpResponse` without touching the network; a
//! `Transport` implementation supplied by the host performs the round-trip.
//!
//! Bodies are raw bytes. The slide payload is sent byte-for-byte and the
//! response body is printed as received, so nothing here assumes UTF-8.

use std::fmt;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `SlideClient::build_create_slide`. Headers keep their insertion
/// order so a captured request can be compared field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// First header value whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// `Display` yields the short descriptor printed after the body, e.g.
/// `<Response [201]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response [{}]>", self.status)
    }
}

/// Executes an `HttpRequest` and returns whatever response the server sent.
///
/// Implementations must not treat 4xx/5xx as errors: only a failure to
/// obtain a response at all (DNS, connect, TLS, broken stream) is an `Err`.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Renders raw bytes the way a byte-string literal reads: `b'ok'`.
///
/// Printable ASCII passes through; tab, newline, carriage return and
/// backslash get their short escapes; everything else becomes `\xNN`. The
/// quote character flips to `"` when the bytes contain `'` but no `"`.
pub struct BodyLiteral<'a>(pub &'a [u8]);

impl fmt::Display for BodyLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
            b'"'
        } else {
            b'\''
        };

        f.write_str("b")?;
        write!(f, "{}", quote as char)?;
        for &b in bytes {
            match b {
                b'\t' => f.write_str("\\t")?,
                b'\n' => f.write_str("\\n")?,
                b'\r' => f.write_str("\\r")?,
                b'\\' => f.write_str("\\\\")?,
                _ if b == quote => write!(f, "\\{}", b as char)?,
                0x20..=0x7e => write!(f, "{}", b as char)?,
                _ => write!(f, "\\x{b:02x}")?,
            }
        }
        write!(f, "{}", quote as char)
    }
}
