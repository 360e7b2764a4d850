//! Wire types for the name-generation endpoint.
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-name`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateNameRequest {
    /// The user-supplied real name. Absent and empty are both rejected.
    #[serde(default)]
    pub name: Option<String>,
}

/// Success body of `POST /generate-name`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateNameResponse {
    #[serde(rename = "generatedName")]
    pub generated_name: String,
}

/// Body of `GET /health`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
}
