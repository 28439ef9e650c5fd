// crates/runtime_analyze/src/lib.rs
use html::{Analysis, DepthTracker, Report, TrackerStatus};
use net::{FetchConfig, FetchError};

pub type Lines = Box<dyn Iterator<Item = Result<String, FetchError>>>;

/// Where the lines of a URL come from.
pub trait LineSource {
    fn open(&self, url: &str) -> Result<Lines, FetchError>;
}

/// Lines fetched over the network or from a `file:` URL.
#[derive(Clone, Debug, Default)]
pub struct NetSource {
    config: FetchConfig,
}

impl NetSource {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

impl LineSource for NetSource {
    fn open(&self, url: &str) -> Result<Lines, FetchError> {
        Ok(Box::new(net::open_lines(url, &self.config)?))
    }
}

/// Analyze the document at `url`.
///
/// Any failure to open or read the source yields [`Report::ConnectionError`],
/// whatever was processed before it. Reading stops as soon as the document is
/// known to be malformed.
pub fn analyze_url(source: &dyn LineSource, url: &str) -> Report {
    match track(source, url) {
        Ok(analysis) => {
            log::debug!(target: "runtime.analyze", "{url}: {analysis:?}");
            Report::Analysis(analysis)
        }
        Err(err) => {
            log::debug!(target: "runtime.analyze", "{url}: {err}");
            Report::ConnectionError
        }
    }
}

fn track(source: &dyn LineSource, url: &str) -> Result<Analysis, FetchError> {
    let mut tracker = DepthTracker::new();
    for line in source.open(url)? {
        if tracker.feed(&line?) == TrackerStatus::Malformed {
            break;
        }
    }
    Ok(tracker.finish())
}
