use crate::models::Record;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Local stand-in for the suggestions endpoint
///
/// Serves an injected record set after a random delay in
/// `[min_delay, max_delay]` to imitate network latency.
#[derive(Debug, Clone)]
pub struct MockApi {
    records: Arc<[Record]>,
    min_delay: Duration,
    max_delay: Duration,
}

impl MockApi {
    pub fn new(records: Vec<Record>, min_delay: Duration, max_delay: Duration) -> Self {
        // A reversed range would panic in gen_range
        let max_delay = max_delay.max(min_delay);

        Self {
            records: records.into(),
            min_delay,
            max_delay,
        }
    }

    /// Mock with no artificial latency
    pub fn instant(records: Vec<Record>) -> Self {
        Self::new(records, Duration::ZERO, Duration::ZERO)
    }

    /// Wait out the simulated latency and hand back the record set
    pub async fn fetch(&self) -> Arc<[Record]> {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tracing::trace!("Mock API sleeping for {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        Arc::clone(&self.records)
    }

    fn next_delay(&self) -> Duration {
        if self.min_delay == self.max_delay {
            return self.min_delay;
        }

        rand::thread_rng().gen_range(self.min_delay..=self.max_delay)
    }
}
