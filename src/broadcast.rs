use tracing::debug;

use crate::client::StreamClient;
use crate::enumerate::list_shards;
use crate::error::BroadcastResult;
use crate::fanout::fan_out;
use crate::routing::explicit_hash_keys;
use crate::types::{PutRecordRequest, PutRecordsResponse};

/// Tuning knobs for a broadcast.
#[derive(Clone, Debug, Default)]
pub struct BroadcastOptions {
    /// Maximum shards per describe page. `None` uses the service default.
    pub page_limit: Option<usize>,
}

/// Replicate one record to every shard of its stream.
///
/// Enumerates the stream's current shard topology, derives one explicit hash
/// key per shard, and issues a single batched write addressed to all of them.
/// The first error at any step aborts the call. The batch response is
/// returned as-is, per-entry failures included: retrying failed entries and
/// absorbing the N-fold write-capacity cost are the caller's responsibility.
///
/// The topology is re-enumerated on every call and never cached here; wrap
/// the client in [`CachedDescribe`](crate::CachedDescribe) to trade staleness
/// for fewer describe calls.
pub async fn broadcast<C>(
    client: &C,
    request: &PutRecordRequest,
) -> BroadcastResult<PutRecordsResponse>
where
    C: StreamClient + ?Sized,
{
    broadcast_with(client, request, BroadcastOptions::default()).await
}

/// [`broadcast`] with explicit options.
pub async fn broadcast_with<C>(
    client: &C,
    request: &PutRecordRequest,
    options: BroadcastOptions,
) -> BroadcastResult<PutRecordsResponse>
where
    C: StreamClient + ?Sized,
{
    let shards = list_shards(client, &request.stream_name, options.page_limit).await?;
    let keys = explicit_hash_keys(&shards);
    let batch = fan_out(request, &keys)?;

    debug!(
        stream = %batch.stream_name,
        entries = batch.entries.len(),
        "dispatching fan-out batch"
    );
    client.put_records(batch).await
}
