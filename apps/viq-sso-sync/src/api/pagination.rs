//! Server-driven page iteration

use serde::de::DeserializeOwned;

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::Page;
use crate::output::print_progress;

/// Tracks which page to request next.
///
/// The next page is taken from the page number the server echoes back,
/// not from a local counter, and the loop ends once that number passes
/// the server's `total_pages`. A server that keeps echoing an old page
/// number would loop forever, so the cursor refuses to continue after
/// `max_pages` responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    next: u32,
    total: u32,
    fetched: u32,
    max_pages: u32,
}

impl PageCursor {
    pub fn new(max_pages: u32) -> Self {
        Self {
            next: 1,
            total: 1,
            fetched: 0,
            max_pages,
        }
    }

    /// Whether another page should be requested
    pub fn has_next(&self) -> bool {
        self.next <= self.total
    }

    pub fn next_page(&self) -> u32 {
        self.next
    }

    pub fn fetched(&self) -> u32 {
        self.fetched
    }

    /// Record a response. Returns `false` when the guard trips: the server
    /// still reports pages left after `max_pages` responses.
    pub fn advance(&mut self, reported_page: u32, total_pages: u32) -> bool {
        self.fetched += 1;
        self.total = total_pages;
        self.next = reported_page.saturating_add(1);
        !(self.has_next() && self.fetched >= self.max_pages)
    }
}

impl ApiClient {
    /// Fetch every page of a listing endpoint.
    ///
    /// Any failed page aborts the whole listing; partial results are
    /// dropped.
    pub(crate) async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
    ) -> CliResult<Vec<T>> {
        let endpoint = self.config().endpoint(path);
        let page_size = self.config().page_size;
        let mut cursor = PageCursor::new(self.config().max_pages);
        let mut rows = Vec::new();

        while cursor.has_next() {
            let requested = cursor.next_page();
            let url = format!("{endpoint}?page={requested}&limit={page_size}");
            let response = self.get_authenticated(&url).await?;

            if !response.is_ok() {
                return Err(response.into_error());
            }

            let page: Page<T> = response.json()?;
            rows.extend(page.data);
            print_progress(&format!(
                "Completed page {} of {} collecting {}",
                requested, page.total_pages, label
            ));

            if !cursor.advance(page.page, page.total_pages) {
                return Err(CliError::PaginationRunaway {
                    endpoint: path.to_string(),
                    limit: self.config().max_pages,
                });
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_page_one() {
        let cursor = PageCursor::new(10);
        assert!(cursor.has_next());
        assert_eq!(cursor.next_page(), 1);
    }

    #[test]
    fn test_cursor_walks_reported_pages() {
        let mut cursor = PageCursor::new(10);
        assert!(cursor.advance(1, 3));
        assert_eq!(cursor.next_page(), 2);
        assert!(cursor.advance(2, 3));
        assert!(cursor.advance(3, 3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.fetched(), 3);
    }

    #[test]
    fn test_cursor_follows_server_page_not_local_count() {
        let mut cursor = PageCursor::new(10);
        // Server skips ahead to page 4 on the first response
        assert!(cursor.advance(4, 5));
        assert_eq!(cursor.next_page(), 5);
    }

    #[test]
    fn test_cursor_zero_total_pages_stops() {
        let mut cursor = PageCursor::new(10);
        assert!(cursor.advance(1, 0));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_cursor_guard_trips_on_stuck_server() {
        let mut cursor = PageCursor::new(3);
        assert!(cursor.advance(1, 2));
        assert!(cursor.advance(1, 2));
        assert!(!cursor.advance(1, 2));
    }

    #[test]
    fn test_cursor_guard_allows_exact_page_count() {
        let mut cursor = PageCursor::new(2);
        assert!(cursor.advance(1, 2));
        assert!(cursor.advance(2, 2));
        assert!(!cursor.has_next());
    }
}
