/// Counters describing one invocation, logged when it completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InvocationMetrics {
    /// Records fetched and parsed.
    pub records_processed: u64,
    /// Documents accepted by the search engine.
    pub documents_indexed: u64,
    /// Upserts that failed and were logged instead of aborting the invocation.
    pub index_failures: u64,
}

impl InvocationMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a record whose object was fetched and parsed.
    pub fn record_processed(&mut self) {
        self.records_processed += 1;
    }

    /// Record a successful upsert.
    pub fn record_indexed(&mut self) {
        self.documents_indexed += 1;
    }

    /// Record a swallowed upsert failure.
    pub fn record_index_failure(&mut self) {
        self.index_failures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_outcomes() {
        let mut metrics = InvocationMetrics::new();
        metrics.record_processed();
        metrics.record_processed();
        metrics.record_indexed();
        metrics.record_index_failure();

        assert_eq!(
            metrics,
            InvocationMetrics {
                records_processed: 2,
                documents_indexed: 1,
                index_failures: 1,
            }
        );
    }

    #[test]
    fn starts_empty() {
        let metrics = InvocationMetrics::new();
        assert_eq!(metrics.records_processed, 0);
        assert_eq!(metrics.documents_indexed, 0);
        assert_eq!(metrics.index_failures, 0);
    }
}
