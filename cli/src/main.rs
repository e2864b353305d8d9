use std::{env, io};

use post_slide::{telemetry, UreqTransport};
use slide_core::{Error, SlideClient, BASE_URL_VAR, DEFAULT_BASE_URL};

fn main() -> Result<(), Error> {
    if let Err(e) = telemetry::init() {
        eprintln!("logging disabled: {e}");
    }

    let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let stdout = io::stdout();
    slide_core::run(
        &SlideClient::new(&base_url),
        |name| env::var(name),
        &mut UreqTransport::new(),
        &mut stdout.lock(),
    )?;
    Ok(())
}
