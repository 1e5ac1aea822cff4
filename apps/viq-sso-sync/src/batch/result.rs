//! Batch operation result types
//!
//! Types for tracking batch operation outcomes with per-item status.

/// Status of a single batch item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchItemStatus {
    /// The server accepted the item
    Success,
    /// The server rejected the item or the request never completed
    Failed,
}

/// Result for a single item in a batch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItemResult {
    /// Position in the worklist (0-based)
    pub index: usize,
    /// Login name of the user
    pub name: String,
    pub status: BatchItemStatus,
    /// Error detail if failed
    pub error: Option<String>,
}

impl BatchItemResult {
    pub fn success(index: usize, name: String) -> Self {
        Self {
            index,
            name,
            status: BatchItemStatus::Success,
            error: None,
        }
    }

    pub fn failed(index: usize, name: String, error: String) -> Self {
        Self {
            index,
            name,
            status: BatchItemStatus::Failed,
            error: Some(error),
        }
    }
}

/// Summary of a completed batch operation
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Type of operation performed
    pub operation: String,
    /// Total items attempted
    pub total: usize,
    pub success_count: usize,
    pub failure_count: usize,
    /// Per-item results, in processing order
    pub items: Vec<BatchItemResult>,
    /// Total operation duration in milliseconds
    pub duration_ms: u64,
}

impl BatchResult {
    pub fn new(operation: &str, total: usize) -> Self {
        Self {
            operation: operation.to_string(),
            total,
            success_count: 0,
            failure_count: 0,
            items: Vec::with_capacity(total),
            duration_ms: 0,
        }
    }

    pub fn add_success(&mut self, index: usize, name: String) {
        self.success_count += 1;
        self.items.push(BatchItemResult::success(index, name));
    }

    pub fn add_failure(&mut self, index: usize, name: String, error: String) {
        self.failure_count += 1;
        self.items.push(BatchItemResult::failed(index, name, error));
    }

    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure_count == 0
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }

    pub fn failed_items(&self) -> impl Iterator<Item = &BatchItemResult> {
        self.items
            .iter()
            .filter(|i| i.status == BatchItemStatus::Failed)
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{}: {} of {} succeeded, {} failed ({}ms)",
            self.operation, self.success_count, self.total, self.failure_count, self.duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_track_items() {
        let mut result = BatchResult::new("create external users", 3);
        result.add_success(0, "a@saml.login".into());
        result.add_failure(1, "b@saml.login".into(), "HTTP 400: exists".into());
        result.add_success(2, "c@saml.login".into());

        assert_eq!(result.success_count, 2);
        assert_eq!(result.failure_count, 1);
        assert!(result.has_failures());
        assert!(!result.all_succeeded());

        let failed: Vec<_> = result.failed_items().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].index, 1);
    }

    #[test]
    fn test_summary() {
        let mut result = BatchResult::new("create external users", 1);
        result.add_success(0, "a@saml.login".into());
        result.set_duration(15);
        assert_eq!(
            result.summary(),
            "create external users: 1 of 1 succeeded, 0 failed (15ms)"
        );
    }
}
