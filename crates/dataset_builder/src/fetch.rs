//! HTTP access with retry and rate limit handling

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::FetchConfig;

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("dataset_builder/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .context("build http client")
}

/// GET a JSON endpoint with the auth header. Transient failures are
/// retried with a short pause; an HTTP 429 waits out the rate limit
/// window first and consumes one attempt like any other failure.
pub fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
    config: &FetchConfig,
) -> Result<T> {
    let mut last_err: Option<anyhow::Error> = None;

    for attempt in 1..=config.max_retries {
        match client.get(url).header("X-Auth-Token", api_key).send() {
            Ok(response) => {
                if response.status() == StatusCode::TOO_MANY_REQUESTS {
                    eprintln!(
                        "⚠️  Rate limited on {url}, waiting {}s",
                        config.rate_limit_backoff.as_secs()
                    );
                    last_err = Some(anyhow::anyhow!("rate limited on attempt {attempt}"));
                    thread::sleep(config.rate_limit_backoff);
                    continue;
                }
                match response.error_for_status() {
                    Ok(ok) => {
                        return ok
                            .json::<T>()
                            .with_context(|| format!("decode response from {url}"));
                    }
                    Err(err) => last_err = Some(err.into()),
                }
            }
            Err(err) => last_err = Some(err.into()),
        }
        if attempt < config.max_retries {
            thread::sleep(config.retry_backoff);
        }
    }

    let err = last_err.unwrap_or_else(|| anyhow::anyhow!("no attempts were made"));
    Err(err.context(format!(
        "request to {url} failed after {} attempts",
        config.max_retries
    )))
}
