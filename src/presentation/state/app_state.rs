use std::sync::Arc;

use crate::application::ports::KnowledgeBase;
use crate::application::services::{DocumentService, QueryService};

pub struct AppState<K>
where
    K: KnowledgeBase + ?Sized,
{
    pub query_service: Arc<QueryService<K>>,
    pub document_service: Arc<DocumentService<K>>,
}

impl<K> AppState<K>
where
    K: KnowledgeBase + ?Sized,
{
    /// Wires both services over one shared knowledge base.
    pub fn new(knowledge_base: Arc<K>) -> Self {
        Self {
            query_service: Arc::new(QueryService::new(Arc::clone(&knowledge_base))),
            document_service: Arc::new(DocumentService::new(knowledge_base)),
        }
    }
}

impl<K> Clone for AppState<K>
where
    K: KnowledgeBase + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            query_service: Arc::clone(&self.query_service),
            document_service: Arc::clone(&self.document_service),
        }
    }
}
