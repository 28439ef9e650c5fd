//! Blocking line-by-line acquisition of a text resource.
//!
//! `http`/`https` go through a ureq agent with native root certificates,
//! `file` URLs are read from the local filesystem.

mod config;
mod error;
mod reader;
mod tls;

use std::fs::File;
use std::io::Read;

use url::Url;

pub use crate::config::{FetchConfig, TIMEOUT_ENV, USER_AGENT_ENV};
pub use crate::error::FetchError;
pub use crate::reader::LineReader;

/// Open `url` and return its lines in order.
///
/// Failing to reach the resource is an error here; failures while reading
/// surface from the returned iterator.
pub fn open_lines(url: &str, config: &FetchConfig) -> Result<LineReader, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_owned(),
        source,
    })?;

    let source: Box<dyn Read + Send> = match parsed.scheme() {
        "http" | "https" => open_http(&parsed, config)?,
        "file" => open_file(&parsed)?,
        other => return Err(FetchError::UnsupportedScheme(other.to_owned())),
    };

    Ok(LineReader::new(source, config.chunk_size))
}

fn open_http(url: &Url, config: &FetchConfig) -> Result<Box<dyn Read + Send>, FetchError> {
    let agent = ureq::AgentBuilder::new()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .tls_config(tls::client_config()?)
        .build();

    log::debug!(target: "net.fetch", "GET {url}");
    let response = agent.request_url("GET", url).call().map_err(|err| match err {
        ureq::Error::Status(code, _) => FetchError::Status {
            url: url.to_string(),
            code,
        },
        ureq::Error::Transport(transport) => FetchError::Http(Box::new(transport)),
    })?;

    log::debug!(
        target: "net.fetch",
        "{} {} content-type={:?}",
        response.get_url(),
        response.status(),
        response.header("content-type")
    );
    Ok(Box::new(response.into_reader()))
}

fn open_file(url: &Url) -> Result<Box<dyn Read + Send>, FetchError> {
    let path = url
        .to_file_path()
        .map_err(|()| FetchError::NotLocalPath(url.to_string()))?;
    log::debug!(target: "net.fetch", "open {}", path.display());
    Ok(Box::new(File::open(path)?))
}
