//! Broadcast-style delivery for partitioned streams.
//!
//! A partitioned log routes each record to exactly one shard by hashing its
//! partition key. `shardcast` inverts that: one logical record is replicated
//! to *every* shard of a stream by discovering the current shard topology and
//! issuing a single batched write with one entry per shard, each addressed by
//! the explicit hash key that owns the shard's key range.
//!
//! The pipeline is three composable steps plus an orchestrator:
//!
//! - [`list_shards`] — paginated enumeration of a stream's shards
//! - [`explicit_hash_keys`] — one deterministic routing key per shard
//! - [`fan_out`] — one single-record write into an N-entry batched write
//! - [`broadcast`] — the composition, delegating the final write to the client
//!
//! The stream service itself is reached through the narrow capability traits
//! [`DescribeShards`] and [`PutRecords`]; a concrete service client
//! implements both and thereby satisfies [`StreamClient`]. Delivery is
//! best-effort: per-entry failures in the batch response are surfaced to the
//! caller untouched, and a broadcast costs N single-shard writes of capacity.

pub mod broadcast;
pub mod cache;
pub mod client;
pub mod enumerate;
pub mod error;
pub mod fanout;
pub mod routing;
pub mod types;

pub use broadcast::{broadcast, broadcast_with, BroadcastOptions};
pub use cache::CachedDescribe;
pub use client::{DescribeShards, PutRecords, StreamClient};
pub use enumerate::list_shards;
pub use error::{BroadcastError, BroadcastResult};
pub use fanout::fan_out;
pub use routing::explicit_hash_keys;
pub use types::{
    DescribeShardsRequest, HashKeyRange, PutRecordRequest, PutRecordsEntry,
    PutRecordsEntryResult, PutRecordsRequest, PutRecordsResponse, Shard, ShardPage,
};
