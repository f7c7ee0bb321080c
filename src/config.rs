use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Deployment configuration for the upload handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search domain, e.g. `https://vpc-docs.us-east-1.es.amazonaws.com`.
    pub search_host: String,
    /// Index receiving the parsed documents.
    pub index_name: String,
    /// Document type segment of the upsert path.
    pub document_type: String,
    /// Region used when signing search requests.
    pub signing_region: String,
    /// Service name used when signing search requests.
    pub signing_service: String,
    /// What to do when writing a document to the index fails.
    pub index_failure_policy: IndexFailurePolicy,
}

/// Outcome applied to an invocation when a document upsert fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexFailurePolicy {
    /// Log the failure and continue with the next record.
    #[default]
    LogAndContinue,
    /// Abort the invocation with the index error.
    FailFast,
}

const DEFAULT_INDEX_NAME: &str = "mygoogle";
const DEFAULT_DOCUMENT_TYPE: &str = "_doc";
const DEFAULT_SIGNING_REGION: &str = "us-east-1";
const DEFAULT_SIGNING_SERVICE: &str = "es";

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        let search_host = load_env("SEARCH_HOST")?;
        reqwest::Url::parse(&search_host)
            .map_err(|_| ConfigError::InvalidValue("SEARCH_HOST".to_string()))?;

        Ok(Self {
            search_host,
            index_name: load_env_or("SEARCH_INDEX", DEFAULT_INDEX_NAME),
            document_type: load_env_or("SEARCH_DOCUMENT_TYPE", DEFAULT_DOCUMENT_TYPE),
            signing_region: load_env_or("SEARCH_REGION", DEFAULT_SIGNING_REGION),
            signing_service: load_env_or("SEARCH_SIGNING_SERVICE", DEFAULT_SIGNING_SERVICE),
            index_failure_policy: load_env_optional("INDEX_FAILURE_POLICY")
                .map(|value| {
                    value.parse().map_err(|()| {
                        ConfigError::InvalidValue("INDEX_FAILURE_POLICY".to_string())
                    })
                })
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    load_env_optional(key).ok_or_else(|| ConfigError::MissingVariable(key.to_string()))
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn load_env_or(key: &str, default: &str) -> String {
    load_env_optional(key).unwrap_or_else(|| default.to_string())
}

impl std::str::FromStr for IndexFailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" | "ignore" | "log-and-continue" => Ok(Self::LogAndContinue),
            "fail" | "fail-fast" => Ok(Self::FailFast),
            _ => Err(()),
        }
    }
}

/// Global configuration cache populated during cold start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Merge a `.env` file, if one is found, into the process environment.
///
/// Must run before anything reads the environment, logging included. Variables already set
/// in the environment win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Load configuration from the environment and install it in the global cache.
///
/// Subsequent calls return the configuration installed by the first successful call.
pub fn init_config() -> Result<&'static Config, ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    let config = Config::from_env()?;
    tracing::debug!(
        search_host = %config.search_host,
        index = %config.index_name,
        document_type = %config.document_type,
        region = %config.signing_region,
        service = %config.signing_service,
        policy = ?config.index_failure_policy,
        "Loaded configuration"
    );
    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_failure_policy_aliases() {
        assert_eq!("log".parse(), Ok(IndexFailurePolicy::LogAndContinue));
        assert_eq!("Ignore".parse(), Ok(IndexFailurePolicy::LogAndContinue));
        assert_eq!(" fail-fast ".parse(), Ok(IndexFailurePolicy::FailFast));
        assert_eq!("FAIL".parse(), Ok(IndexFailurePolicy::FailFast));
        assert_eq!("retry".parse::<IndexFailurePolicy>(), Err(()));
    }

    #[test]
    fn default_policy_swallows_index_failures() {
        assert_eq!(
            IndexFailurePolicy::default(),
            IndexFailurePolicy::LogAndContinue
        );
    }
}
