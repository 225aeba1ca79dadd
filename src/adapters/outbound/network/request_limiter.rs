use std::sync::Arc;
use tokio::sync::{Semaphore, SemaphorePermit};

/// RequestLimiter bounding the number of in-flight HTTP requests
///
/// The walker fans out over every dependency at once, so a wide tree can
/// open hundreds of connections. Network adapters take a permit for the
/// duration of each request. The limit never changes what is fetched, only
/// how many requests overlap.
#[derive(Debug, Clone, Default)]
pub struct RequestLimiter {
    permits: Option<Arc<Semaphore>>,
}

impl RequestLimiter {
    /// Limiter allowing at most `max_concurrent` requests; `0` means unbounded
    pub fn new(max_concurrent: usize) -> Self {
        if max_concurrent == 0 {
            return Self::unbounded();
        }
        Self {
            permits: Some(Arc::new(Semaphore::new(max_concurrent))),
        }
    }

    pub fn unbounded() -> Self {
        Self { permits: None }
    }

    /// Waits for a permit. Dropping the returned guard releases it.
    pub async fn acquire(&self) -> Option<SemaphorePermit<'_>> {
        match &self.permits {
            Some(semaphore) => semaphore.acquire().await.ok(),
            None => None,
        }
    }

    /// Free permits, `None` when unbounded
    #[cfg(test)]
    pub fn available(&self) -> Option<usize> {
        self.permits
            .as_ref()
            .map(|semaphore| semaphore.available_permits())
    }
}
