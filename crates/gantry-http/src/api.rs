//! Backend endpoint paths and request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST /admin/login
pub(crate) const LOGIN: &str = "/admin/login";

/// POST /admin/ingest
pub(crate) const INGEST: &str = "/admin/ingest";

/// GET /admin/stats
pub(crate) const STATS: &str = "/admin/stats";

/// GET /admin/analytics/queries_per_dept
pub(crate) const QUERIES_PER_DEPT: &str = "/admin/analytics/queries_per_dept";

/// POST /chat
pub(crate) const CHAT: &str = "/chat";

/// GET /welcome
pub(crate) const WELCOME: &str = "/welcome";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Response from login.
///
/// Domain-level rejections (wrong email domain, bad name) arrive as a
/// 200 with `success: false` and a message; they are not HTTP failures.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A chat prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ChatPrompt {
    /// User id from the active session.
    pub user: String,
    /// Department knowledge base to ask against.
    pub department: String,
    /// The question.
    pub query: String,
    /// Answer language code, if not the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Reply from the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's answer.
    pub answer: String,
}

/// Welcome banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub title: String,
    pub subtitle: String,
    pub greeting: String,
    pub is_welcome: bool,
}
