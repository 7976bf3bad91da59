//! Pagination state of the incremental project feed.
//!
//! `FeedState` is a plain value: the reactive hook in
//! [`crate::hooks::use_project_feed`] owns one inside a signal, asks it which
//! page to request next, runs the request, and hands the outcome back through
//! [`FeedState::settle`]. Keeping the bookkeeping here makes every decision
//! testable without a browser.

use crate::api::PageRequest;
use crate::error::FetchError;
use crate::types::Project;

/// The key function of the feed: the request for cursor `index`, or `None`
/// once the previous page came back empty.
pub fn page_request(index: usize, previous: Option<&[Project]>, page_size: usize) -> Option<PageRequest> {
    match previous {
        Some(page) if page.is_empty() => None,
        _ => Some(PageRequest::new(index, page_size)),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    page_size: usize,
    max_pages: usize,
    /// One slot per requested page, in request order. `None` until settled.
    pages: Vec<Option<Vec<Project>>>,
    /// Index of the page request currently in flight.
    pending: Option<usize>,
    error: Option<FetchError>,
    validating: bool,
}

impl FeedState {
    pub fn new(page_size: usize, max_pages: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_pages,
            pages: Vec::new(),
            pending: None,
            error: None,
            validating: false,
        }
    }

    /// Number of pages requested so far, which is also the cursor of the
    /// next request.
    pub fn size(&self) -> usize {
        self.pages.len()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Settled pages, or `None` while nothing has settled yet.
    pub fn data(&self) -> Option<Vec<&[Project]>> {
        let settled: Vec<&[Project]> = self.pages.iter().flatten().map(Vec::as_slice).collect();
        if settled.is_empty() {
            None
        } else {
            Some(settled)
        }
    }

    /// All settled pages concatenated in request order.
    pub fn projects(&self) -> Vec<Project> {
        self.pages.iter().flatten().flatten().cloned().collect()
    }

    pub fn is_loading_initial(&self) -> bool {
        self.data().is_none() && self.error.is_none()
    }

    /// True while the first page is outstanding, or while some data is shown
    /// and the latest requested slot is still empty. A failed latest page
    /// keeps its slot empty, so the loader stays next to the error.
    pub fn is_loading_more(&self) -> bool {
        if self.is_loading_initial() {
            return true;
        }
        self.data().is_some() && matches!(self.pages.last(), Some(None))
    }

    /// The most recent page settled with zero items.
    pub fn reached_end(&self) -> bool {
        matches!(self.pages.last(), Some(Some(page)) if page.is_empty())
    }

    pub fn has_more_to_load(&self) -> bool {
        self.size() < self.max_pages && !self.reached_end()
    }

    /// A revalidation is running over data that already covers every
    /// requested page.
    pub fn is_refreshing(&self) -> bool {
        self.validating && self.pages.iter().all(Option::is_some)
    }

    /// Whether a visible sentinel should move the cursor forward right now.
    pub fn should_advance(&self, visible: bool) -> bool {
        visible
            && self.has_more_to_load()
            && !self.is_refreshing()
            && self.pending.is_none()
            && self.pages.last().map_or(true, Option::is_some)
    }

    /// Requests the first page. Does nothing once the feed has started.
    pub fn start(&mut self) -> Option<PageRequest> {
        if !self.pages.is_empty() {
            return None;
        }
        self.request_next()
    }

    /// Moves the cursor forward by one page when [`Self::should_advance`]
    /// would allow it for a visible sentinel.
    pub fn advance(&mut self) -> Option<PageRequest> {
        if !self.should_advance(true) {
            return None;
        }
        self.request_next()
    }

    fn request_next(&mut self) -> Option<PageRequest> {
        let index = self.pages.len();
        let previous = self.pages.last().and_then(Option::as_deref);
        let request = page_request(index, previous, self.page_size)?;

        self.pages.push(None);
        self.pending = Some(index);
        Some(request)
    }

    /// Stores the outcome of a page request. Returns `false` when the
    /// response does not belong to the request in flight and was dropped.
    pub fn settle(&mut self, request: &PageRequest, result: Result<Vec<Project>, FetchError>) -> bool {
        if self.pending != Some(request.index) {
            return false;
        }
        self.pending = None;

        match result {
            Ok(projects) => {
                self.pages[request.index] = Some(projects);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        true
    }

    /// Marks a revalidation as running and returns every requested page to
    /// re-fetch, in order, including one whose last attempt failed. Empty
    /// when nothing was requested or another request is running.
    pub fn begin_revalidation(&mut self) -> Vec<PageRequest> {
        if self.validating || self.pending.is_some() {
            return Vec::new();
        }
        let requests: Vec<PageRequest> = (0..self.pages.len())
            .map(|index| PageRequest::new(index, self.page_size))
            .collect();

        self.validating = !requests.is_empty();
        requests
    }

    /// Replaces the slots that were re-fetched, then records `failure` if the
    /// revalidation stopped early. Slots after the failure keep their previous
    /// data; the number of pages never changes.
    pub fn finish_revalidation(&mut self, pages: Vec<(usize, Vec<Project>)>, failure: Option<FetchError>) {
        if !self.validating {
            return;
        }
        self.validating = false;

        for (index, projects) in pages {
            if let Some(slot) = self.pages.get_mut(index) {
                *slot = Some(projects);
            }
        }
        self.error = failure;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{mock_projects, MockProjectSource, ProjectSource};
    use crate::config::{MAX_PAGES, PAGE_SIZE};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Replays a fixed list of pages and records every request it receives.
    struct ScriptedSource {
        pages: Vec<Result<Vec<Project>, FetchError>>,
        seen: Mutex<Vec<PageRequest>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<Vec<Project>, FetchError>>) -> Self {
            Self { pages, seen: Mutex::new(Vec::new()) }
        }

        fn seen(&self) -> Vec<PageRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl ProjectSource for ScriptedSource {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Project>, FetchError> {
            self.seen.lock().unwrap().push(request.clone());
            self.pages.get(request.index).cloned().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn projects(ids: std::ops::Range<u64>) -> Vec<Project> {
        let template = mock_projects(1).remove(0);
        ids.map(|id| Project { id, ..template.clone() }).collect()
    }

    /// Starts the feed and keeps scrolling with a visible sentinel until it
    /// refuses to advance.
    fn scroll_to_end(state: &mut FeedState, source: &dyn ProjectSource) {
        let mut next = state.start();
        while let Some(request) = next {
            let result = block_on(source.fetch_page(&request));
            assert!(state.settle(&request, result));
            next = state.advance();
        }
    }

    #[test]
    fn key_function_stops_after_empty_page() {
        assert_eq!(page_request(0, None, 15), Some(PageRequest::new(0, 15)));
        assert_eq!(page_request(3, Some(projects(0..2).as_slice()), 15), Some(PageRequest::new(3, 15)));
        assert_eq!(page_request(3, Some(&[][..]), 15), None);
    }

    #[test]
    fn starts_loading_first_page() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        assert!(state.is_loading_initial());
        assert!(state.is_loading_more());

        let request = state.start().unwrap();
        assert_eq!(request, PageRequest::new(0, PAGE_SIZE));
        assert_eq!(state.size(), 1);
        assert!(state.start().is_none());
    }

    #[test]
    fn pages_of_fifteen_then_zero_show_fifteen_and_stop() {
        let source = ScriptedSource::new(vec![Ok(projects(0..15)), Ok(Vec::new())]);
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);

        scroll_to_end(&mut state, &source);

        assert_eq!(state.projects().len(), 15);
        assert_eq!(source.seen(), vec![PageRequest::new(0, 15), PageRequest::new(1, 15)]);
        assert!(state.reached_end());
        assert!(!state.should_advance(true));
        assert!(state.advance().is_none());
        assert!(!state.is_loading_more());
    }

    #[test]
    fn accumulated_list_keeps_request_order() {
        let source = ScriptedSource::new(vec![
            Ok(projects(0..15)),
            Ok(projects(15..30)),
            Ok(projects(30..37)),
            Ok(Vec::new()),
        ]);
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);

        scroll_to_end(&mut state, &source);

        let ids: Vec<u64> = state.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..37).collect::<Vec<_>>());
        assert_eq!(state.data().map(|pages| pages.len()), Some(4));
    }

    #[test]
    fn duplicates_from_the_api_are_kept() {
        let source = ScriptedSource::new(vec![Ok(projects(0..3)), Ok(projects(0..3)), Ok(Vec::new())]);
        let mut state = FeedState::new(3, MAX_PAGES);

        scroll_to_end(&mut state, &source);

        assert_eq!(state.projects().len(), 6);
    }

    #[test]
    fn page_bound_caps_requests() {
        let source = ScriptedSource::new((0..10).map(|i| Ok(projects(i * 2..i * 2 + 2))).collect());
        let mut state = FeedState::new(2, 4);

        scroll_to_end(&mut state, &source);

        assert_eq!(source.seen().len(), 4);
        assert_eq!(state.projects().len(), 8);
        assert!(!state.has_more_to_load());
    }

    #[test]
    fn hidden_sentinel_never_advances() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let request = state.start().unwrap();
        state.settle(&request, Ok(projects(0..15)));

        for _ in 0..100 {
            assert!(!state.should_advance(false));
        }
        assert_eq!(state.size(), 1);
    }

    #[test]
    fn next_page_waits_for_previous_to_settle() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();

        assert!(!state.should_advance(true));
        assert!(state.advance().is_none());

        state.settle(&first, Ok(projects(0..15)));
        let second = state.advance().unwrap();
        assert_eq!(second.index, 1);
        assert!(state.is_loading_more());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();
        state.settle(&first, Ok(projects(0..15)));

        assert!(!state.settle(&first, Ok(projects(100..115))));
        assert_eq!(state.projects()[0].id, 0);
    }

    #[test]
    fn failure_sets_error_without_data_loss() {
        let source = ScriptedSource::new(vec![
            Ok(projects(0..15)),
            Err(FetchError::Status(502)),
        ]);
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);

        scroll_to_end(&mut state, &source);

        assert_eq!(state.error(), Some(&FetchError::Status(502)));
        assert_eq!(state.projects().len(), 15);
        assert!(state.is_loading_more());
        assert!(!state.should_advance(true));
    }

    #[test]
    fn first_page_failure_shows_no_loader() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();
        state.settle(&first, Err(FetchError::Request("offline".into())));

        assert!(!state.is_loading_initial());
        assert!(!state.is_loading_more());
        assert!(state.data().is_none());
    }

    #[test]
    fn revalidation_blocks_advance_and_keeps_page_count() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();
        state.settle(&first, Ok(projects(0..15)));
        let second = state.advance().unwrap();
        state.settle(&second, Ok(projects(15..30)));

        let requests = state.begin_revalidation();
        assert_eq!(requests, vec![PageRequest::new(0, 15), PageRequest::new(1, 15)]);
        assert!(state.is_refreshing());
        assert!(!state.should_advance(true));
        assert!(state.begin_revalidation().is_empty());

        state.finish_revalidation(vec![(0, projects(100..115)), (1, projects(115..130))], None);

        assert!(!state.is_refreshing());
        assert_eq!(state.size(), 2);
        assert_eq!(state.projects().len(), 30);
        assert_eq!(state.projects()[0].id, 100);
        assert!(state.should_advance(true));
    }

    #[test]
    fn failed_revalidation_keeps_previous_data() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();
        state.settle(&first, Ok(projects(0..15)));

        state.begin_revalidation();
        state.finish_revalidation(Vec::new(), Some(FetchError::Status(500)));

        assert_eq!(state.projects().len(), 15);
        assert_eq!(state.error(), Some(&FetchError::Status(500)));
    }

    #[test]
    fn revalidation_keeps_pages_fetched_before_a_failure() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();
        state.settle(&first, Ok(projects(0..15)));
        let second = state.advance().unwrap();
        state.settle(&second, Ok(projects(15..30)));

        state.begin_revalidation();
        state.finish_revalidation(vec![(0, projects(100..115))], Some(FetchError::Status(503)));

        let ids: Vec<u64> = state.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, (100..115).chain(15..30).collect::<Vec<u64>>());
        assert_eq!(state.size(), 2);
        assert_eq!(state.error(), Some(&FetchError::Status(503)));
        assert!(!state.is_refreshing());
    }

    #[test]
    fn revalidation_refills_a_failed_page() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        let first = state.start().unwrap();
        state.settle(&first, Ok(projects(0..15)));
        let second = state.advance().unwrap();
        state.settle(&second, Err(FetchError::Request("offline".into())));

        let requests = state.begin_revalidation();
        assert_eq!(requests.len(), 2);
        assert!(!state.is_refreshing());

        state.finish_revalidation(vec![(0, projects(0..15)), (1, projects(15..20))], None);

        assert_eq!(state.error(), None);
        assert_eq!(state.projects().len(), 20);
        assert!(state.should_advance(true));
    }

    #[test]
    fn no_revalidation_while_a_page_is_in_flight() {
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);
        state.start();

        assert!(state.begin_revalidation().is_empty());
        assert!(!state.is_refreshing());
    }

    #[test]
    fn mock_source_with_ten_projects_fills_one_page() {
        let source = MockProjectSource::new(10);
        let mut state = FeedState::new(PAGE_SIZE, MAX_PAGES);

        scroll_to_end(&mut state, &source);

        let ids: Vec<u64> = state.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        assert!(state.reached_end());
    }
}
