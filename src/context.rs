use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{HttpProjectSource, MockProjectSource, ProjectSource};
use crate::config::{AppConfig, DataSourceKind};
use crate::error::ConfigError;

/// Configuration and data source shared by the page components. Built once
/// in [`crate::App`] and handed down through Leptos context.
#[derive(Clone)]
pub struct ApiContext {
    config: AppConfig,
    source: Arc<dyn ProjectSource>,
}

impl ApiContext {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let source: Arc<dyn ProjectSource> = match config.data_source {
            DataSourceKind::Http => {
                let base_url = config.api_base_url.as_deref().ok_or(ConfigError::MissingBaseUrl)?;
                Arc::new(HttpProjectSource::new(base_url))
            }
            DataSourceKind::Mock => Arc::new(MockProjectSource::new(config.mock_count)),
        };
        Ok(Self { config, source })
    }

    pub fn with_source(config: AppConfig, source: Arc<dyn ProjectSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> Arc<dyn ProjectSource> {
        Arc::clone(&self.source)
    }
}

pub fn provide_api_context(context: ApiContext) {
    provide_context(context);
}

pub fn use_api_context() -> ApiContext {
    expect_context::<ApiContext>()
}
