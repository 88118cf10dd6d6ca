use std::time::Duration;

use roster_model::{DatasetId, RawRow};

use crate::error::SourceError;
use crate::source::RowSource;

/// Wraps a row source with bounded retries and linear backoff.
///
/// A fetch that keeps failing surfaces as a single dataset-level
/// `SourceError::Exhausted`; no partial dataset is ever returned.
#[derive(Debug, Clone)]
pub struct RetryingSource<S> {
    inner: S,
    max_attempts: u32,
    base_delay: Duration,
}

impl<S: RowSource> RetryingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }
}

impl<S: RowSource> RowSource for RetryingSource<S> {
    fn fetch(&self, dataset: &DatasetId) -> Result<Vec<RawRow>, SourceError> {
        let mut last = String::new();
        for attempt in 1..=self.max_attempts {
            match self.inner.fetch(dataset) {
                Ok(rows) => return Ok(rows),
                Err(error) => {
                    last = error.to_string();
                    if attempt < self.max_attempts {
                        let delay = self.base_delay * attempt;
                        tracing::warn!(
                            dataset = %dataset,
                            attempt,
                            max_attempts = self.max_attempts,
                            error = %last,
                            "row source fetch failed, retrying"
                        );
                        std::thread::sleep(delay);
                    }
                }
            }
        }
        Err(SourceError::Exhausted {
            attempts: self.max_attempts,
            last,
        })
    }
}
