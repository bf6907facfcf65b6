// src/store.rs

use std::{error::Error, fs, path::Path};

use crate::net;

/// Return the document text, from the cache file if it exists, otherwise
/// by fetching `url` and persisting the body verbatim for future runs.
/// Delete the cache file to force a fresh download.
pub fn load_or_fetch(path: &Path, url: &str) -> Result<String, Box<dyn Error>> {
    if path.is_file() {
        println!("Loading the data via the file.");
        logd!("Store: cache hit at {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    println!("Fetching the data via the URL.");
    logd!("Store: cache miss, fetching {url}");
    let body = net::http_get(url)?;
    fs::write(path, &body)?;
    Ok(body)
}
