use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::KnowledgeBase;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    documents_handler, health_handler, openapi_handler, query_handler, root_handler,
    upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<K>(state: AppState<K>) -> Router
where
    K: KnowledgeBase + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/query", post(query_handler::<K>))
        .route("/upload", post(upload_handler::<K>))
        .route("/documents", get(documents_handler::<K>))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
