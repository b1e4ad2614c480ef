//! HTTP client for the hosted search API.
//!
//! One outbound POST per search call, no caching, no retry. The
//! remote service performs all ranking (hybrid keyword + vector with
//! typo tolerance); this client only shapes the request and flattens
//! the nested response into [`SearchResult`] records.

use crate::core::config::Config;
use crate::core::error::{RapportError, Result};
use crate::core::types::SearchResult;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Request body for the remote `chunk/search` endpoint.
///
/// The filter set is always empty and pagination is pinned to the
/// first page: the remote ranker is asked for one bounded page of
/// candidates and everything else happens locally.
#[derive(Debug, Clone, Serialize)]
struct ChunkSearchRequest<'a> {
    filters: serde_json::Value,
    page: u32,
    page_size: usize,
    typo_options: TypoOptions,
    query: &'a str,
    search_type: &'static str,
    use_weights: bool,
}

#[derive(Debug, Clone, Serialize)]
struct TypoOptions {
    correct_typos: bool,
}

/// Wire shape of the remote response. Decoded with typed structs so a
/// shape mismatch surfaces as a serde error instead of a panic.
#[derive(Debug, Deserialize)]
struct ChunkSearchResponse {
    #[serde(default)]
    chunks: Vec<ScoredChunk>,
}

#[derive(Debug, Deserialize)]
struct ScoredChunk {
    chunk: ChunkBody,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct ChunkBody {
    #[serde(default)]
    tracking_id: Option<String>,
    #[serde(default)]
    metadata: Option<ChunkMetadata>,
}

#[derive(Debug, Deserialize)]
struct ChunkMetadata {
    #[serde(default, rename = "questionType")]
    question_type: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Client for the hosted search service.
///
/// Constructed once at startup from [`Config`] and shared by all tool
/// handlers. Holds no per-request state.
pub struct SearchClient {
    http: reqwest::Client,
    search_url: String,
    api_key: String,
    dataset_id: String,
    organization_id: String,
    page_size: usize,
}

impl SearchClient {
    /// Build a client from validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            search_url: format!(
                "{}/chunk/search",
                config.remote.base_url.trim_end_matches('/')
            ),
            api_key: config.remote.api_key.clone(),
            dataset_id: config.remote.dataset_id.clone(),
            organization_id: config.remote.organization_id.clone(),
            page_size: config.search.page_size,
        })
    }

    /// Candidate page size requested from the remote ranker
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run one hybrid search against the remote corpus.
    ///
    /// Returns the remote hits in ranker order. A non-success status
    /// becomes [`RapportError::RemoteSearch`] carrying the status code
    /// and reason phrase.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let body = ChunkSearchRequest {
            filters: json!({}),
            page: 1,
            page_size: self.page_size,
            typo_options: TypoOptions {
                correct_typos: true,
            },
            query,
            search_type: "hybrid",
            use_weights: true,
        };

        debug!(query = %query, page_size = self.page_size, "Sending search request");

        let response = self
            .http
            .post(&self.search_url)
            .header("Authorization", &self.api_key)
            .header("TR-Dataset", &self.dataset_id)
            .header("TR-Organization", &self.organization_id)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RapportError::RemoteSearch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let payload: ChunkSearchResponse = response.json().await?;
        Ok(normalize(payload))
    }
}

/// Flatten the nested wire response into [`SearchResult`] records.
///
/// Absent metadata fields stay `None`; hits are kept in the order the
/// remote ranker returned them.
fn normalize(payload: ChunkSearchResponse) -> Vec<SearchResult> {
    payload
        .chunks
        .into_iter()
        .map(|hit| {
            let metadata = hit.chunk.metadata.unwrap_or(ChunkMetadata {
                question_type: None,
                category: None,
                content: None,
            });

            SearchResult {
                id: hit.chunk.tracking_id,
                question_type: metadata.question_type,
                category: metadata.category,
                text: metadata.content,
                score: hit.score,
            }
        })
        .collect()
}
