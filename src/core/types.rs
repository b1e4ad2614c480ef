//! Core data types for the rapport service.
//!
//! This module defines the data structures shared between the search
//! client and the MCP tool handlers. All of them are request-scoped:
//! constructed while answering one tool call, dropped afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One normalized hit from the remote search service.
///
/// The remote ranker returns nested `chunk`/`metadata` objects; the
/// search client flattens them into this record. Fields the corpus
/// did not populate stay `None` and are omitted from serialized
/// output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Opaque tracking identifier, stable across re-indexing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Prompt taxonomy tag (e.g. "icebreaker", "deep-dive")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,

    /// Corpus category tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Prompt body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Remote relevance score, higher = more relevant
    pub score: f64,
}

/// Projection of a [`SearchResult`] kept in bulk responses.
///
/// Bulk callers only need enough to pick a prompt, so the tracking id
/// and taxonomy tag are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub score: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<SearchResult> for RankedMatch {
    fn from(result: SearchResult) -> Self {
        Self {
            text: result.text,
            score: result.score,
            category: result.category,
        }
    }
}

/// Map from input query string to its top-`limit` matches, sorted by
/// descending score. Every input query appears as a key, failed
/// queries map to an empty vector. BTreeMap keeps serialized output
/// deterministic.
pub type BulkResultMap = BTreeMap<String, Vec<RankedMatch>>;
