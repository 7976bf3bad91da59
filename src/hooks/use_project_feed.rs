use std::sync::Arc;

use gloo::console::{error, log};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{PageRequest, ProjectSource};
use crate::error::FetchError;
use crate::feed::FeedState;
use crate::types::Project;

/// Reactive handle on a paginated project feed.
#[derive(Clone, Copy)]
pub struct ProjectFeed {
    state: RwSignal<FeedState>,
    source: StoredValue<Arc<dyn ProjectSource>>,
}

/// Creates a feed over `source` and requests its first page.
pub fn use_project_feed(source: Arc<dyn ProjectSource>, page_size: usize, max_pages: usize) -> ProjectFeed {
    let feed = ProjectFeed {
        state: RwSignal::new(FeedState::new(page_size, max_pages)),
        source: StoredValue::new(source),
    };

    if let Some(request) = feed.state.try_update(FeedState::start).flatten() {
        feed.fetch(request);
    }

    feed
}

impl ProjectFeed {
    pub fn projects(&self) -> Vec<Project> {
        self.state.with(FeedState::projects)
    }

    pub fn error(&self) -> Option<FetchError> {
        self.state.with(|s| s.error().cloned())
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.with(FeedState::is_loading_more)
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.with(FeedState::is_refreshing)
    }

    /// Number of pages requested so far.
    pub fn size(&self) -> usize {
        self.state.with(FeedState::size)
    }

    /// Requests the next page if a visible sentinel allows it. Reads the
    /// state untracked so callers can run it inside an effect that only
    /// depends on visibility.
    pub fn load_more(&self, visible: bool) {
        if !self.state.with_untracked(|s| s.should_advance(visible)) {
            return;
        }
        if let Some(request) = self.state.try_update(FeedState::advance).flatten() {
            self.fetch(request);
        }
    }

    /// Re-fetches every requested page, in order, keeping the page count.
    pub fn revalidate(&self) {
        let Some(requests) = self.state.try_update(FeedState::begin_revalidation) else {
            return;
        };
        if requests.is_empty() {
            return;
        }

        let source = self.source.get_value();
        let state = self.state;
        spawn_local(async move {
            let mut pages = Vec::with_capacity(requests.len());
            let mut failure = None;
            for request in &requests {
                match source.fetch_page(request).await {
                    Ok(projects) => pages.push((request.index, projects)),
                    Err(e) => {
                        error!(format!("Revalidating page {} failed: {e}", request.page()));
                        failure = Some(e);
                        break;
                    }
                }
            }
            state.try_update(|s| s.finish_revalidation(pages, failure));
        });
    }

    fn fetch(&self, request: PageRequest) {
        let source = self.source.get_value();
        let state = self.state;
        log!(format!("Requesting {} from {} source", request.path(), source.name()));

        spawn_local(async move {
            let result = source.fetch_page(&request).await;
            match &result {
                Ok(projects) => log!(format!("Page {} returned {} projects", request.page(), projects.len())),
                Err(e) => error!(format!("Page {} failed: {e}", request.page())),
            }
            state.try_update(|s| s.settle(&request, result));
        });
    }
}
