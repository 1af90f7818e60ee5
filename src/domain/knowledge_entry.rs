const SOURCE_LABEL_PREFIX: &str = "automotive_knowledge_";

/// A canned maintenance fact keyed by a short lower-case topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub topic: String,
    pub fact: String,
}

impl KnowledgeEntry {
    pub fn new(topic: impl Into<String>, fact: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            fact: fact.into(),
        }
    }

    /// Label reported to clients as the origin of an answer.
    pub fn source_label(&self) -> String {
        format!("{}{}", SOURCE_LABEL_PREFIX, self.topic)
    }

    /// Non-overlapping occurrences of the topic in an already lower-cased question.
    pub fn occurrences_in(&self, lowered_question: &str) -> usize {
        if self.topic.is_empty() {
            return 0;
        }
        lowered_question.matches(self.topic.as_str()).count()
    }
}
