use async_trait::async_trait;

use super::{PageRequest, ProjectSource};
use crate::error::FetchError;
use crate::types::Project;

const MOCK_NAME: &str = "Lorem Ipsum";
const MOCK_DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetuer adipiscing elit. \
    Aenean commodo ligula eget dolor. Aenean massa. Cum sociis natoque penatibus et magnis \
    dis parturient montes, nascetur ridiculus mus. Donec qu";
const MOCK_TAGS: [&str; 4] = ["Foo", "Bar", "Ipsum", "Foo Bar"];
const MOCK_SKILLS: [&str; 6] = ["C++", "Rust", "JavaScript", "HTML", "CSS", "AWS"];

/// `n` placeholder projects with ids `0..n`. Every other field is the same.
pub fn mock_projects(n: usize) -> Vec<Project> {
    (0..n)
        .map(|i| Project {
            id: i as u64,
            name: MOCK_NAME.to_string(),
            short_description: MOCK_DESCRIPTION.to_string(),
            tags: MOCK_TAGS.iter().map(|t| t.to_string()).collect(),
            skills: MOCK_SKILLS.iter().map(|s| s.to_string()).collect(),
            url: "/".to_string(),
        })
        .collect()
}

/// Serves a fixed synthetic list, sliced into pages, while the real API
/// does not exist.
#[derive(Clone, Debug)]
pub struct MockProjectSource {
    projects: Vec<Project>,
}

impl MockProjectSource {
    pub fn new(count: usize) -> Self {
        Self {
            projects: mock_projects(count),
        }
    }

    fn page(&self, request: &PageRequest) -> Vec<Project> {
        let start = request.index.saturating_mul(request.size);
        let end = start.saturating_add(request.size).min(self.projects.len());
        self.projects
            .get(start..end)
            .map(<[Project]>::to_vec)
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl ProjectSource for MockProjectSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Project>, FetchError> {
        Ok(self.page(request))
    }
}
