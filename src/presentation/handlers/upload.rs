use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::application::ports::KnowledgeBase;
use crate::domain::UploadedDocument;
use crate::presentation::error::ValidatedJson;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub filename: String,
    pub content: String,
    pub document_type: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub document_type: String,
    pub size: usize,
    pub status: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn upload_handler<K>(
    State(state): State<AppState<K>>,
    ValidatedJson(request): ValidatedJson<UploadRequest>,
) -> Json<UploadResponse>
where
    K: KnowledgeBase + ?Sized + 'static,
{
    let document_filename = request.filename.clone();
    let document = UploadedDocument::new(request.filename, request.content, request.document_type);
    let receipt = state.document_service.upload(document);

    tracing::info!(
        filename = %document_filename,
        document_type = %receipt.document_type,
        size = receipt.size,
        "Document acknowledged"
    );

    Json(UploadResponse {
        message: receipt.message,
        document_type: receipt.document_type,
        size: receipt.size,
        status: receipt.status,
    })
}
