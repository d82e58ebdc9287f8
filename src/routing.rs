use crate::types::Shard;

/// Map each shard to the hash key that deterministically routes to it.
///
/// The starting key of a shard's hash-key range is owned by that shard under
/// the service's hashing contract, so it serves as a collision-free address
/// for an explicit-routing write. Output order and length match the input.
pub fn explicit_hash_keys(shards: &[Shard]) -> Vec<String> {
    shards
        .iter()
        .map(|s| s.hash_key_range.starting_hash_key.clone())
        .collect()
}
