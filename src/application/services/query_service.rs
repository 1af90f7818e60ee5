use std::sync::Arc;

use crate::application::ports::KnowledgeBase;
use crate::domain::KnowledgeEntry;

pub const NO_MATCH_ANSWER: &str =
    "I don't have specific information about that topic in my current knowledge base.";

const CONFIDENCE_PER_OCCURRENCE: f64 = 0.3;
const MAX_CONFIDENCE: f64 = 1.0;

pub struct QueryService<K>
where
    K: KnowledgeBase + ?Sized,
{
    knowledge_base: Arc<K>,
}

impl<K> QueryService<K>
where
    K: KnowledgeBase + ?Sized,
{
    pub fn new(knowledge_base: Arc<K>) -> Self {
        Self { knowledge_base }
    }

    /// Answers a question by keyword matching against the knowledge base.
    ///
    /// Each topic is scored by how many times it occurs in the lower-cased
    /// question; the strictly highest score wins and ties keep the earlier
    /// entry. `_max_results` is accepted for request compatibility and has
    /// no effect on matching.
    pub fn query(&self, question: &str, _max_results: i64) -> QueryAnswer {
        let lowered = question.to_lowercase();

        let mut best: Option<(&KnowledgeEntry, usize)> = None;
        for entry in self.knowledge_base.entries() {
            let score = entry.occurrences_in(&lowered);
            if score == 0 {
                continue;
            }
            let best_score = best.map(|(_, s)| s).unwrap_or(0);
            if score > best_score {
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) => {
                tracing::debug!(topic = %entry.topic, score, "Matched knowledge entry");
                QueryAnswer {
                    answer: entry.fact.clone(),
                    sources: vec![entry.source_label()],
                    confidence: confidence_for(score),
                }
            }
            None => {
                tracing::debug!("No knowledge entry matched");
                QueryAnswer::no_match()
            }
        }
    }
}

/// `min(score * 0.3, 1.0)`; saturates from four occurrences upwards.
pub fn confidence_for(score: usize) -> f64 {
    (score as f64 * CONFIDENCE_PER_OCCURRENCE).min(MAX_CONFIDENCE)
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    pub answer: String,
    pub sources: Vec<String>,
    pub confidence: f64,
}

impl QueryAnswer {
    pub fn no_match() -> Self {
        Self {
            answer: NO_MATCH_ANSWER.to_string(),
            sources: Vec::new(),
            confidence: 0.0,
        }
    }
}
