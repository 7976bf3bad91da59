//! Build-time configuration.
//!
//! A wasm bundle has no process environment at runtime, so the variables are
//! captured by `option_env!` when the crate is compiled and read once by
//! [`AppConfig::from_env`] when the application starts.

use std::str::FromStr;

use gloo::console::error;

use crate::error::ConfigError;

/// Number of projects requested per page.
pub const PAGE_SIZE: usize = 15;

/// Upper bound on the number of pages a single feed will request.
pub const MAX_PAGES: usize = 15;

/// Size of the synthetic project list served by the mock source.
pub const DEFAULT_MOCK_PROJECT_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    Http,
    Mock,
}

impl FromStr for DataSourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(DataSourceKind::Http),
            "mock" => Ok(DataSourceKind::Mock),
            _ => Err(ConfigError::UnknownDataSource(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: Option<String>,
    pub data_source: DataSourceKind,
    pub mock_count: usize,
    pub page_size: usize,
    pub max_pages: usize,
}

impl AppConfig {
    /// Reads `API_BASE_URL`, `DATA_SOURCE` and `MOCK_PROJECT_COUNT` as they
    /// were set at build time. Invalid values are logged and replaced by the
    /// defaults for the given base URL.
    pub fn from_env() -> Self {
        let base_url = option_env!("API_BASE_URL");
        match Self::from_vars(base_url, option_env!("DATA_SOURCE"), option_env!("MOCK_PROJECT_COUNT")) {
            Ok(config) => config,
            Err(e) => {
                error!(format!("Invalid configuration: {e}"));
                Self::defaults(base_url)
            }
        }
    }

    pub fn from_vars(
        base_url: Option<&str>,
        data_source: Option<&str>,
        mock_count: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::defaults(base_url);

        if let Some(kind) = data_source.filter(|s| !s.trim().is_empty()) {
            config.data_source = kind.parse()?;
        }
        if config.data_source == DataSourceKind::Http && config.api_base_url.is_none() {
            return Err(ConfigError::MissingBaseUrl);
        }

        if let Some(count) = mock_count.filter(|s| !s.trim().is_empty()) {
            config.mock_count = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "MOCK_PROJECT_COUNT",
                    value: count.to_string(),
                })?;
        }

        Ok(config)
    }

    /// Http when a base URL is known, the synthetic source otherwise.
    pub fn defaults(base_url: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(String::from);
        let data_source = if api_base_url.is_some() {
            DataSourceKind::Http
        } else {
            DataSourceKind::Mock
        };

        Self {
            api_base_url,
            data_source,
            mock_count: DEFAULT_MOCK_PROJECT_COUNT,
            page_size: PAGE_SIZE,
            max_pages: MAX_PAGES,
        }
    }
}
