//! The whole program as one function: read the token, send one request,
//! print three lines.

use std::{env, io::Write};

use tracing::debug;

use crate::client::{SlideClient, LESSON_ID, TOKEN_VAR};
use crate::error::Error;
use crate::http::{BodyLiteral, HttpResponse, Transport};

/// Post the slide once and print status, raw body and descriptor to `out`.
///
/// `lookup` stands in for `std::env::var` so tests can control the
/// environment. The transport is called exactly once whatever the status;
/// nothing is written unless a response arrives.
pub fn run<L, T, W>(
    client: &SlideClient,
    lookup: L,
    transport: &mut T,
    out: &mut W,
) -> Result<HttpResponse, Error>
where
    L: FnOnce(&str) -> Result<String, env::VarError>,
    T: Transport + ?Sized,
    W: Write + ?Sized,
{
    let token = lookup(TOKEN_VAR).map_err(|source| Error::MissingToken {
        var: TOKEN_VAR,
        source,
    })?;

    let request = client.build_create_slide(LESSON_ID, &token);
    debug!(method = %request.method, url = %request.url, bytes = request.body.len(), "sending slide request");

    let response = transport.execute(&request)?;
    debug!(status = response.status, bytes = response.body.len(), "response received");

    writeln!(out, "{}", response.status)?;
    writeln!(out, "{}", BodyLiteral(&response.body))?;
    writeln!(out, "{response}")?;
    out.flush()?;

    Ok(response)
}
