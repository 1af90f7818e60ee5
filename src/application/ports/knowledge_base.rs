use crate::domain::KnowledgeEntry;

/// Read-only, ordered view over the topic mapping.
///
/// Entry order is significant: the query matcher breaks score ties in favour
/// of the entry that comes first.
pub trait KnowledgeBase: Send + Sync {
    fn entries(&self) -> &[KnowledgeEntry];

    fn topics(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.topic.as_str()).collect()
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
