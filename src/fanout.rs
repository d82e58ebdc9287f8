use crate::error::{BroadcastError, BroadcastResult};
use crate::types::{PutRecordRequest, PutRecordsEntry, PutRecordsRequest};

/// Turn one single-record write into a batched write with one entry per
/// routing key, every entry carrying the same payload.
///
/// A sequence token on the request is rejected: the batch-write API has no
/// per-producer ordering, and dropping the token silently would fake a
/// guarantee the fan-out cannot keep. Entries carry only the explicit hash
/// key, which takes precedence over any partition-key routing.
///
/// An empty key set produces a zero-entry batch; whether the service accepts
/// that is the delegate's concern.
pub fn fan_out(request: &PutRecordRequest, keys: &[String]) -> BroadcastResult<PutRecordsRequest> {
    if request.sequence_token.is_some() {
        return Err(BroadcastError::UnsupportedOption("sequence_token"));
    }

    let entries = keys
        .iter()
        .map(|key| PutRecordsEntry {
            data: request.data.clone(),
            explicit_hash_key: key.clone(),
        })
        .collect();

    Ok(PutRecordsRequest {
        stream_name: request.stream_name.clone(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn one_entry_per_key_with_shared_payload() {
        let request = PutRecordRequest::new("orders", "pk", &b"blob payload"[..]);
        let keys = keys(&["100", "200", "300"]);
        let batch = fan_out(&request, &keys).unwrap();

        assert_eq!(batch.stream_name, "orders");
        assert_eq!(batch.entries.len(), 3);
        for (entry, key) in batch.entries.iter().zip(&keys) {
            assert_eq!(entry.data, Bytes::from_static(b"blob payload"));
            assert_eq!(&entry.explicit_hash_key, key);
        }
    }

    #[test]
    fn sequence_token_is_rejected() {
        let request = PutRecordRequest::new("orders", "pk", &b"data"[..])
            .with_sequence_token("seq-1");
        let err = fan_out(&request, &keys(&["100"])).unwrap_err();
        assert!(matches!(err, BroadcastError::UnsupportedOption("sequence_token")));
    }

    #[test]
    fn sequence_token_is_rejected_even_with_no_keys() {
        let request = PutRecordRequest::new("orders", "pk", &b"data"[..])
            .with_sequence_token("seq-1");
        let err = fan_out(&request, &[]).unwrap_err();
        assert!(matches!(err, BroadcastError::UnsupportedOption(_)));
    }

    #[test]
    fn empty_keys_yield_empty_batch() {
        let request = PutRecordRequest::new("orders", "pk", &b"data"[..]);
        let batch = fan_out(&request, &[]).unwrap();
        assert_eq!(batch.stream_name, "orders");
        assert!(batch.entries.is_empty());
    }
}
