use axum::Json;
use axum::extract::State;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::application::ports::KnowledgeBase;
use crate::infrastructure::observability::sanitize_question;
use crate::presentation::error::ValidatedJson;
use crate::presentation::state::AppState;

pub const DEFAULT_MAX_RESULTS: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    /// Accepted for compatibility; matching ignores it. Any integer is
    /// allowed, including ones beyond the 64-bit range.
    #[serde(default, deserialize_with = "deserialize_integer")]
    pub max_results: Option<Number>,
}

impl QueryRequest {
    /// Requested result count, saturated to the `i64` range.
    pub fn max_results(&self) -> i64 {
        match &self.max_results {
            None => DEFAULT_MAX_RESULTS,
            Some(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(DEFAULT_MAX_RESULTS),
        }
    }
}

fn is_integral(n: &Number) -> bool {
    n.is_i64()
        || n.is_u64()
        || n.as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

fn deserialize_integer<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Number>::deserialize(deserializer)? {
        Some(n) if !is_integral(&n) => Err(de::Error::custom(format!(
            "expected an integer, found {}",
            n
        ))),
        other => Ok(other),
    }
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub confidence: f64,
}

#[tracing::instrument(skip(state, request))]
pub async fn query_handler<K>(
    State(state): State<AppState<K>>,
    ValidatedJson(request): ValidatedJson<QueryRequest>,
) -> Json<QueryResponse>
where
    K: KnowledgeBase + ?Sized + 'static,
{
    tracing::debug!(
        question = %sanitize_question(&request.question),
        max_results = request.max_results(),
        "Processing query"
    );

    let answer = state
        .query_service
        .query(&request.question, request.max_results());

    tracing::info!(
        sources_count = answer.sources.len(),
        confidence = answer.confidence,
        "Query answered"
    );

    Json(QueryResponse {
        answer: answer.answer,
        sources: answer.sources,
        confidence: answer.confidence,
    })
}
