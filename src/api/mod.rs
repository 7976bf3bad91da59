//! Sources of project pages.
//!
//! The feed only talks to [`ProjectSource`]; the caller decides whether that
//! is the real API ([`HttpProjectSource`]) or the synthetic placeholder
//! ([`MockProjectSource`]).

pub mod http;
pub mod mock;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::Project;

pub use http::HttpProjectSource;
pub use mock::{mock_projects, MockProjectSource};

/// One page of the project listing. `index` is the zero-based page cursor;
/// the API itself counts pages from one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub index: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    pub fn page(&self) -> usize {
        self.index + 1
    }

    pub fn path(&self) -> String {
        format!("/projects?page={}&size={}", self.page(), self.size)
    }
}

#[async_trait(?Send)]
pub trait ProjectSource: Send + Sync {
    /// Short label used in log lines.
    fn name(&self) -> &'static str;

    /// Fetches one page. An empty page means there is nothing after it.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Project>, FetchError>;
}
