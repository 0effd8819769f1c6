use serde::Serialize;

/// Body of every JSON error response.
#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// Body of a successful `DELETE`.
#[derive(Serialize, Debug, Clone)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
}
