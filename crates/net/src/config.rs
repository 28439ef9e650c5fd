use std::time::Duration;

pub const TIMEOUT_ENV: &str = "DEEPEST_TEXT_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "DEEPEST_TEXT_USER_AGENT";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    /// Applies to connecting and to the whole transfer.
    pub timeout: Duration,
    pub user_agent: String,
    /// Bytes requested per read from the source.
    pub chunk_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("deepest-text/{}", env!("CARGO_PKG_VERSION")),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` provides. Unusable values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "ignoring {TIMEOUT_ENV}={raw:?}: expected a positive number of seconds"
                ),
            }
        }

        if let Some(agent) = lookup(USER_AGENT_ENV) {
            if agent.trim().is_empty() {
                log::warn!("ignoring empty {USER_AGENT_ENV}");
            } else {
                config.user_agent = agent;
            }
        }

        config
    }
}
