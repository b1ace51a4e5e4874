//! Per-mood request fan-out.
//!
//! Results come back in input order whatever the strategy, so everything
//! merged downstream sees the same sequence for sequential and concurrent
//! runs.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// How dependent per-item requests are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanOut {
    /// One request at a time.
    Sequential,
    /// At most `limit` requests in flight.
    Concurrent { limit: usize },
}

impl Default for FanOut {
    fn default() -> Self {
        FanOut::Concurrent { limit: 8 }
    }
}

impl FanOut {
    fn width(self) -> usize {
        match self {
            FanOut::Sequential => 1,
            FanOut::Concurrent { limit } => limit.max(1),
        }
    }

    /// Run `task` for every item and gather the outputs in input order.
    pub async fn gather<I, F, Fut, T>(self, items: I, task: F) -> Vec<T>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Fut,
        Fut: Future<Output = T>,
    {
        stream::iter(items).map(task).buffered(self.width()).collect().await
    }
}
