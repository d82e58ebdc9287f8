use async_trait::async_trait;

use crate::error::BroadcastResult;
use crate::types::{DescribeShardsRequest, PutRecordsRequest, PutRecordsResponse, ShardPage};

/// Capability: enumerate the shards of a named stream, one page at a time.
///
/// Service errors (throttling, not-found, access-denied) are returned as
/// [`BroadcastError::Transport`](crate::BroadcastError::Transport) and
/// propagated unchanged by everything built on top.
#[async_trait]
pub trait DescribeShards: Send + Sync {
    async fn describe_shards(&self, request: &DescribeShardsRequest) -> BroadcastResult<ShardPage>;
}

/// Capability: issue a batched multi-record write.
#[async_trait]
pub trait PutRecords: Send + Sync {
    async fn put_records(&self, request: PutRecordsRequest) -> BroadcastResult<PutRecordsResponse>;
}

/// The full capability set a broadcast needs: describe plus batch write.
///
/// Blanket-implemented for any type providing both, so a concrete service
/// client satisfies it with no extra code, and each operation can still be
/// given the narrowest capability it uses.
pub trait StreamClient: DescribeShards + PutRecords {}

impl<T: DescribeShards + PutRecords + ?Sized> StreamClient for T {}
