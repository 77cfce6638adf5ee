use dotenv::dotenv;
use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "APPOINTMENTS_API_URL";

// baked in by the build, overridden by the runtime environment
const BUILD_API_URL: Option<&str> = option_env!("APPOINTMENTS_API_URL");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APPOINTMENTS_API_URL is not set")]
    MissingApiUrl,
    #[error("invalid backend url {url:?}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url {0} cannot carry endpoint paths")]
    NotABase(String),
}

/// Backend location for the appointments component.
#[derive(Debug, Clone)]
pub struct Config {
    api_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // a missing .env file is fine, the variable may come from the shell
        dotenv().ok();

        let raw = std::env::var(API_URL_VAR)
            .ok()
            .or_else(|| BUILD_API_URL.map(str::to_string))
            .ok_or(ConfigError::MissingApiUrl)?;

        Self::new(&raw)
    }

    /// Normalises `raw` to end with exactly one `/` so endpoint paths join
    /// underneath it instead of replacing its last segment.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let base = format!("{}/", raw.trim().trim_end_matches('/'));
        let api_url = Url::parse(&base).map_err(|source| ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            source,
        })?;

        if api_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(raw.to_string()));
        }

        Ok(Config { api_url })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.api_url
            .join(path)
            .map_err(|source| ConfigError::InvalidApiUrl {
                url: format!("{}{}", self.api_url, path),
                source,
            })
    }
}
