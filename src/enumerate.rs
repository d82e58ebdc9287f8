use tracing::debug;

use crate::client::DescribeShards;
use crate::error::{BroadcastError, BroadcastResult};
use crate::types::{DescribeShardsRequest, Shard};

/// Enumerate every shard of `stream_name`, in service order.
///
/// Pages through the describe capability with an explicit loop: the cursor
/// for each page is the id of the last shard of the previous page, and
/// enumeration ends when the service reports no further shards. Any describe
/// error aborts immediately with no partial results.
///
/// A page that claims more shards remain but carries no shards leaves no
/// cursor to resume from; that inconsistency fails with
/// [`BroadcastError::InvalidPage`] rather than looping or panicking.
pub async fn list_shards<D>(
    describe: &D,
    stream_name: &str,
    page_limit: Option<usize>,
) -> BroadcastResult<Vec<Shard>>
where
    D: DescribeShards + ?Sized,
{
    let mut shards: Vec<Shard> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let request = DescribeShardsRequest {
            stream_name: stream_name.to_string(),
            exclusive_start_shard_id: cursor.take(),
            limit: page_limit,
        };
        let page = describe.describe_shards(&request).await?;

        if page.has_more_shards && page.shards.is_empty() {
            return Err(BroadcastError::InvalidPage {
                stream: stream_name.to_string(),
            });
        }

        shards.extend(page.shards);
        if !page.has_more_shards {
            break;
        }
        // Non-empty page guaranteed by the check above.
        cursor = shards.last().map(|s| s.shard_id.clone());
    }

    debug!(stream = %stream_name, shard_count = shards.len(), "shard enumeration complete");
    Ok(shards)
}
