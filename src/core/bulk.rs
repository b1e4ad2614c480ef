//! Concurrent bulk search over the remote corpus.
//!
//! Fans a list of queries out to the search client, isolates
//! per-query failures, and aggregates the top matches per query into
//! one keyed map. A failing query never affects its siblings.

use crate::core::client::SearchClient;
use crate::core::types::{BulkResultMap, RankedMatch, SearchResult};
use tracing::warn;

/// Default number of matches kept per query
pub const DEFAULT_BULK_LIMIT: usize = 3;

/// Search every query concurrently and collect the top `limit`
/// matches for each.
///
/// Each query owns one future resolving to a `(query, matches)` pair;
/// a remote failure is logged and becomes `(query, [])`. The map is
/// assembled only after all futures have settled, so no future ever
/// writes shared state. Duplicate input queries collapse to one key,
/// last writer wins.
pub async fn bulk_search(
    client: &SearchClient,
    queries: &[String],
    limit: usize,
) -> BulkResultMap {
    let lookups = queries.iter().map(|query| async move {
        match client.search(query).await {
            Ok(results) => (query.clone(), top_matches(results, limit)),
            Err(e) => {
                warn!(query = %query, error = %e, "Bulk sub-query failed, returning empty result set");
                (query.clone(), Vec::new())
            }
        }
    });

    futures::future::join_all(lookups).await.into_iter().collect()
}

/// Stable-sort hits by descending score, keep the first `limit`, and
/// project them down to [`RankedMatch`]. Ties keep the remote
/// ranker's relative order.
fn top_matches(mut results: Vec<SearchResult>, limit: usize) -> Vec<RankedMatch> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results.into_iter().take(limit).map(RankedMatch::from).collect()
}
