//! Input acquisition for the command line tool: local files or HTTP(S) URLs.

use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Timeout applied to the whole HTTP request
const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL")]
    Url(#[from] url::ParseError),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetch VAST bytes from a `file://` URL, a local path or an HTTP(S) URL
pub async fn fetch_vast_content(url_or_path: &str) -> Result<Vec<u8>, FetchError> {
    if let Some(path) = url_or_path.strip_prefix("file://") {
        #[cfg(target_os = "windows")]
        let path = path.trim_start_matches('/');

        return read_file(Path::new(path)).await;
    }

    let path = Path::new(url_or_path);
    if path.exists() {
        return read_file(path).await;
    }

    fetch_vast_from_url(url_or_path).await
}

async fn read_file(path: &Path) -> Result<Vec<u8>, FetchError> {
    debug!("Reading from file: {}", path.display());
    tokio::fs::read(path).await.map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetch VAST XML from a URL
async fn fetch_vast_from_url(url: &str) -> Result<Vec<u8>, FetchError> {
    // Random request id to correlate log lines
    let req_id: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    let url = url::Url::parse(url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
    }

    info!("[{}] Fetching from URL: {}", req_id, url);
    let start_time = Instant::now();

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let response = client.get(url).send().await.inspect_err(|_| {
        info!("[{}] Request failed after {:?}", req_id, start_time.elapsed());
    })?;

    debug!("[{}] Received response in {:?}", req_id, start_time.elapsed());

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await?;
    info!(
        "[{}] Total request completed in {:?} ({} bytes)",
        req_id,
        start_time.elapsed(),
        body.len()
    );

    Ok(body.to_vec())
}
