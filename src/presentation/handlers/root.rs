use axum::Json;
use serde::Serialize;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub query: &'static str,
    pub upload: &'static str,
    pub documents: &'static str,
}

pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Welcome to Automotive RAG System",
        version: SERVICE_VERSION,
        endpoints: Endpoints {
            health: "/health",
            query: "/query",
            upload: "/upload",
            documents: "/documents",
        },
    })
}
