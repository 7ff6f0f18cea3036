// src/core/net.rs

// Blocking HTTPS GET (reqwest + rustls), redirects followed

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::AppConfig;
use crate::error::BoxError;

/// One client per scraper; timeout, user agent and redirect cap come from config.
pub fn client(cfg: &AppConfig) -> Result<Client, BoxError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .user_agent(cfg.user_agent.as_str())
        .redirect(Policy::limited(cfg.max_redirects))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Any non-2xx final status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String, BoxError> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} ({})", resp.url()).into());
    }
    Ok(resp.text()?)
}
