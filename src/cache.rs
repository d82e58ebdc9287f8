use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use crate::client::{DescribeShards, PutRecords};
use crate::error::BroadcastResult;
use crate::types::{DescribeShardsRequest, PutRecordsRequest, PutRecordsResponse, ShardPage};

struct CachedPage {
    stored_at: Instant,
    page: ShardPage,
}

/// Time-to-live caching decorator for the describe capability.
///
/// Shard topology rarely changes, but a broadcast re-enumerates it on every
/// call. Wrapping the client in `CachedDescribe` reuses successful describe
/// pages for up to `ttl`, trading bounded staleness (a split or merge within
/// the window goes unseen) for fewer describe calls. Errors are never cached.
///
/// Batched writes pass through untouched, so a wrapped full client still
/// satisfies [`StreamClient`](crate::StreamClient).
pub struct CachedDescribe<C> {
    inner: C,
    ttl: Duration,
    pages: Mutex<HashMap<DescribeShardsRequest, CachedPage>>,
}

impl<C> CachedDescribe<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            pages: Mutex::new(HashMap::new()),
        }
    }

    /// Drop every cached page, forcing fresh describes.
    pub fn invalidate(&self) {
        self.pages.lock().expect("lock poisoned").clear();
    }

    /// Number of live (possibly expired) cache entries.
    pub fn len(&self) -> usize {
        self.pages.lock().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.lock().expect("lock poisoned").is_empty()
    }

    /// Consume the decorator, returning the wrapped client.
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn lookup(&self, request: &DescribeShardsRequest) -> Option<ShardPage> {
        let mut pages = self.pages.lock().expect("lock poisoned");
        match pages.get(request) {
            Some(cached) if cached.stored_at.elapsed() < self.ttl => Some(cached.page.clone()),
            Some(_) => {
                pages.remove(request);
                None
            }
            None => None,
        }
    }

    fn store(&self, request: DescribeShardsRequest, page: ShardPage) {
        let cached = CachedPage {
            stored_at: Instant::now(),
            page,
        };
        self.pages.lock().expect("lock poisoned").insert(request, cached);
    }
}

#[async_trait]
impl<C: DescribeShards> DescribeShards for CachedDescribe<C> {
    async fn describe_shards(&self, request: &DescribeShardsRequest) -> BroadcastResult<ShardPage> {
        if let Some(page) = self.lookup(request) {
            debug!(stream = %request.stream_name, "serving shard page from cache");
            return Ok(page);
        }
        let page = self.inner.describe_shards(request).await?;
        self.store(request.clone(), page.clone());
        Ok(page)
    }
}

#[async_trait]
impl<C: PutRecords> PutRecords for CachedDescribe<C> {
    async fn put_records(&self, request: PutRecordsRequest) -> BroadcastResult<PutRecordsResponse> {
        self.inner.put_records(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BroadcastError;
    use crate::types::{HashKeyRange, Shard};
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDescribe {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingDescribe {
        fn new() -> Self {
            Self { calls: AtomicUsize::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { calls: AtomicUsize::new(0), fail: true }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DescribeShards for CountingDescribe {
        async fn describe_shards(
            &self,
            _request: &DescribeShardsRequest,
        ) -> BroadcastResult<ShardPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BroadcastError::transport(io::Error::new(
                    io::ErrorKind::Other,
                    "describe down",
                )));
            }
            Ok(ShardPage {
                shards: vec![Shard {
                    shard_id: "s1".into(),
                    hash_key_range: HashKeyRange {
                        starting_hash_key: "100".into(),
                        ending_hash_key: "199".into(),
                    },
                }],
                has_more_shards: false,
            })
        }
    }

    #[tokio::test]
    async fn repeated_describe_hits_the_cache() {
        let cached = CachedDescribe::new(CountingDescribe::new(), Duration::from_secs(60));
        let request = DescribeShardsRequest::new("orders");

        let first = cached.describe_shards(&request).await.unwrap();
        let second = cached.describe_shards(&request).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.into_inner().calls(), 1);
    }

    #[tokio::test]
    async fn distinct_requests_are_cached_separately() {
        let cached = CachedDescribe::new(CountingDescribe::new(), Duration::from_secs(60));
        let first = DescribeShardsRequest::new("orders");
        let mut second = DescribeShardsRequest::new("orders");
        second.exclusive_start_shard_id = Some("s1".into());

        cached.describe_shards(&first).await.unwrap();
        cached.describe_shards(&second).await.unwrap();

        assert_eq!(cached.len(), 2);
        assert_eq!(cached.into_inner().calls(), 2);
    }

    #[tokio::test]
    async fn expired_entries_are_refetched() {
        // Zero TTL expires entries immediately.
        let cached = CachedDescribe::new(CountingDescribe::new(), Duration::ZERO);
        let request = DescribeShardsRequest::new("orders");

        cached.describe_shards(&request).await.unwrap();
        cached.describe_shards(&request).await.unwrap();

        assert_eq!(cached.into_inner().calls(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_a_fresh_describe() {
        let cached = CachedDescribe::new(CountingDescribe::new(), Duration::from_secs(60));
        let request = DescribeShardsRequest::new("orders");

        cached.describe_shards(&request).await.unwrap();
        cached.invalidate();
        assert!(cached.is_empty());
        cached.describe_shards(&request).await.unwrap();

        assert_eq!(cached.into_inner().calls(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cached = CachedDescribe::new(CountingDescribe::failing(), Duration::from_secs(60));
        let request = DescribeShardsRequest::new("orders");

        cached.describe_shards(&request).await.unwrap_err();
        assert!(cached.is_empty());
        cached.describe_shards(&request).await.unwrap_err();

        assert_eq!(cached.into_inner().calls(), 2);
    }
}
