use async_trait::async_trait;

use super::{PageRequest, ProjectSource};
use crate::error::FetchError;
use crate::types::Project;

/// Reads pages from `{base_url}/projects`.
#[derive(Clone, Debug)]
pub struct HttpProjectSource {
    base_url: String,
}

impl HttpProjectSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, request: &PageRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

#[async_trait(?Send)]
impl ProjectSource for HttpProjectSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Project>, FetchError> {
        let url = self.url_for(request);

        let response = reqwest::Client::new().get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
