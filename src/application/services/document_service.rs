use std::sync::Arc;

use crate::application::ports::KnowledgeBase;
use crate::domain::UploadedDocument;

const PROCESSED_STATUS: &str = "processed";

/// Upload acknowledgement and topic listing.
///
/// Uploads are never stored: the receipt is derived from the request alone,
/// and listings always reflect the knowledge base.
pub struct DocumentService<K>
where
    K: KnowledgeBase + ?Sized,
{
    knowledge_base: Arc<K>,
}

impl<K> DocumentService<K>
where
    K: KnowledgeBase + ?Sized,
{
    pub fn new(knowledge_base: Arc<K>) -> Self {
        Self { knowledge_base }
    }

    pub fn upload(&self, document: UploadedDocument) -> UploadReceipt {
        let size = document.size();
        UploadReceipt {
            message: format!("Document '{}' uploaded successfully", document.filename),
            document_type: document.document_type,
            size,
            status: PROCESSED_STATUS.to_string(),
        }
    }

    pub fn list(&self) -> DocumentListing {
        let documents: Vec<String> = self
            .knowledge_base
            .topics()
            .into_iter()
            .map(String::from)
            .collect();
        let total = documents.len();
        DocumentListing { documents, total }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub message: String,
    pub document_type: String,
    pub size: usize,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentListing {
    pub documents: Vec<String>,
    pub total: usize,
}
