use thiserror::Error;

/// Failure to open or read the input resource.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("file URL does not name a local path: {0}")]
    NotLocalPath(String),
    #[error("TLS setup failed: {0}")]
    Tls(#[from] rustls::Error),
    #[error("request failed: {0}")]
    Http(#[source] Box<ureq::Transport>),
    #[error("{url} returned HTTP {code}")]
    Status { url: String, code: u16 },
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}
