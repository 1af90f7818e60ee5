mod document_service;
mod query_service;

pub use document_service::{DocumentListing, DocumentService, UploadReceipt};
pub use query_service::{NO_MATCH_ANSWER, QueryAnswer, QueryService, confidence_for};
