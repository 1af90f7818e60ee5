mod document;
mod knowledge_entry;

pub use document::UploadedDocument;
pub use knowledge_entry::KnowledgeEntry;
