mod documents;
mod health;
mod openapi;
mod query;
mod root;
mod upload;

pub use documents::{DocumentsResponse, documents_handler};
pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use openapi::{openapi_document, openapi_handler};
pub use query::{DEFAULT_MAX_RESULTS, QueryRequest, QueryResponse, query_handler};
pub use root::{SERVICE_VERSION, ServiceInfoResponse, root_handler};
pub use upload::{UploadRequest, UploadResponse, upload_handler};
