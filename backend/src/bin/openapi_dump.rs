//! Print the OpenAPI document as JSON.

use std::io;

use lunchmate::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|error| io::Error::other(format!("serialize OpenAPI document: {error}")))?;
    println!("{json}");
    Ok(())
}
