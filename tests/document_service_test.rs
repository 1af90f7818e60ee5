use std::sync::Arc;

use automotive_rag::application::ports::KnowledgeBase;
use automotive_rag::application::services::DocumentService;
use automotive_rag::domain::UploadedDocument;
use automotive_rag::infrastructure::knowledge::StaticKnowledgeBase;

fn service() -> DocumentService<StaticKnowledgeBase> {
    DocumentService::new(Arc::new(StaticKnowledgeBase::new()))
}

fn document(filename: &str, content: &str, document_type: &str) -> UploadedDocument {
    UploadedDocument::new(
        filename.to_string(),
        content.to_string(),
        document_type.to_string(),
    )
}

#[test]
fn given_document_when_uploading_then_receipt_echoes_request() {
    let receipt = service().upload(document("brakes.pdf", "abc", "manual"));

    assert_eq!(receipt.message, "Document 'brakes.pdf' uploaded successfully");
    assert_eq!(receipt.document_type, "manual");
    assert_eq!(receipt.size, 3);
    assert_eq!(receipt.status, "processed");
}

#[test]
fn given_multibyte_content_when_uploading_then_size_counts_characters() {
    let receipt = service().upload(document("notes.txt", "héllo ✓", "note"));

    assert_eq!(receipt.size, 7);
}

#[test]
fn given_empty_content_when_uploading_then_size_is_zero() {
    let receipt = service().upload(document("empty.txt", "", "note"));

    assert_eq!(receipt.size, 0);
}

#[test]
fn given_same_filename_twice_when_uploading_then_receipts_are_independent() {
    let service = service();

    let first = service.upload(document("dup.txt", "one", "a"));
    let second = service.upload(document("dup.txt", "three", "b"));

    assert_eq!(first.size, 3);
    assert_eq!(second.size, 5);
    assert_eq!(second.document_type, "b");
}

#[test]
fn given_uploads_when_listing_then_returns_only_builtin_topics() {
    let service = service();
    service.upload(document("oil_filter.pdf", "content", "manual"));

    let listing = service.list();

    assert_eq!(
        listing.documents,
        vec!["oil_change", "brake_pads", "tire_rotation", "engine_maintenance"]
    );
    assert_eq!(listing.total, 4);
}

#[test]
fn given_static_knowledge_base_when_inspected_then_has_four_entries() {
    let knowledge_base = StaticKnowledgeBase::new();

    assert_eq!(knowledge_base.len(), 4);
    assert!(!knowledge_base.is_empty());
    assert_eq!(
        knowledge_base.entries()[3].source_label(),
        "automotive_knowledge_engine_maintenance"
    );
}
