use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The contiguous range of the hash-key space owned by a shard.
///
/// Keys are string-encoded decimal integers, as the service returns them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashKeyRange {
    /// Lowest hash key that routes to the shard. Always present on a
    /// well-formed shard; a write addressed to this key is guaranteed to
    /// land on the shard that owns the range.
    pub starting_hash_key: String,
    pub ending_hash_key: String,
}

/// A partition of a stream, as returned by the describe operation.
///
/// Shards are immutable snapshots of the topology at enumeration time; the
/// shard id is opaque and used only as a pagination cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shard {
    pub shard_id: String,
    pub hash_key_range: HashKeyRange,
}

/// One page request against the stream-description API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeShardsRequest {
    pub stream_name: String,
    /// Resume enumeration after this shard id. `None` starts from the
    /// beginning of the shard list.
    pub exclusive_start_shard_id: Option<String>,
    /// Maximum shards per page. `None` leaves the page size to the service.
    pub limit: Option<usize>,
}

impl DescribeShardsRequest {
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            exclusive_start_shard_id: None,
            limit: None,
        }
    }
}

/// One page of the shard listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardPage {
    pub shards: Vec<Shard>,
    /// `true` if further pages remain past the last shard in `shards`.
    pub has_more_shards: bool,
}

/// A caller-supplied single-record write, the input to a broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRecordRequest {
    pub stream_name: String,
    /// Record payload, shared unchanged across every fan-out entry.
    pub data: Bytes,
    /// Partition key for ordinary single-shard routing. Ignored by fan-out,
    /// where explicit hash keys take precedence.
    pub partition_key: String,
    /// Strict per-producer ordering token. Incompatible with fan-out: the
    /// batch-write API has no equivalent, so a broadcast rejects it.
    pub sequence_token: Option<String>,
}

impl PutRecordRequest {
    pub fn new(
        stream_name: impl Into<String>,
        partition_key: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            partition_key: partition_key.into(),
            data: data.into(),
            sequence_token: None,
        }
    }

    pub fn with_sequence_token(mut self, token: impl Into<String>) -> Self {
        self.sequence_token = Some(token.into());
        self
    }
}

/// One entry of a batched multi-record write.
///
/// Carries an explicit hash key and no partition key: the explicit key alone
/// determines the target shard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRecordsEntry {
    pub data: Bytes,
    pub explicit_hash_key: String,
}

/// A batched multi-record write addressed to one stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRecordsRequest {
    pub stream_name: String,
    pub entries: Vec<PutRecordsEntry>,
}

/// Per-entry outcome of a batched write.
///
/// Exactly one of the success fields or the error fields is populated by the
/// service; this crate does not interpret them (partial-failure policy is the
/// caller's).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRecordsEntryResult {
    pub sequence_number: Option<String>,
    pub shard_id: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl PutRecordsEntryResult {
    /// `true` if the service rejected this entry.
    pub fn is_failure(&self) -> bool {
        self.error_code.is_some()
    }
}

/// Result of a batched write: one outcome per entry, in request order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRecordsResponse {
    pub records: Vec<PutRecordsEntryResult>,
}

impl PutRecordsResponse {
    /// Number of entries the service rejected.
    pub fn failed_record_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_failure()).count()
    }
}
