use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::KnowledgeBase;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub documents: Vec<String>,
    pub total: usize,
}

pub async fn documents_handler<K>(State(state): State<AppState<K>>) -> Json<DocumentsResponse>
where
    K: KnowledgeBase + ?Sized + 'static,
{
    let listing = state.document_service.list();
    Json(DocumentsResponse {
        documents: listing.documents,
        total: listing.total,
    })
}
