// src/net.rs
// Single blocking GET; the source is HTTPS so this goes through reqwest
// rather than a raw socket.

use std::{error::Error, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    Ok(resp.text()?)
}
