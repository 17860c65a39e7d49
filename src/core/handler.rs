use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::page::DeploymentPage;
use crate::utils::error::Result;

pub const CONTENT_TYPE_HTML: &str = "text/html";

/// Inbound request event in the hosting platform's proxy format. Every field
/// is optional so any event shape deserializes; the handler reads none of
/// them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpRequest {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
    pub is_base64_encoded: Option<bool>,
}

/// Outbound response record in the hosting platform's proxy format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Answer an invocation. The request is ignored; every invocation yields the
/// same 200 text/html response.
pub fn respond(_request: &HttpRequest) -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), CONTENT_TYPE_HTML.to_string());

    HttpResponse {
        status_code: 200,
        headers,
        body: DeploymentPage::default().render(),
    }
}

/// Serialize the fixed response envelope as pretty JSON.
pub fn envelope_json() -> Result<String> {
    let envelope = serde_json::to_string_pretty(&respond(&HttpRequest::default()))?;
    Ok(envelope)
}
