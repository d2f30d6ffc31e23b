use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::{RequestId, RequestRecord};

/// Recording header carried on the first line of a session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Wall-clock capture time of the recording.
    pub captured_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Successful resolution of an earlier request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// Request this response resolves.
    pub id: RequestId,

    /// Full response payload.
    pub result: Value,

    /// Milliseconds since the session epoch.
    pub recorded_at: u64,
}

/// Error resolution of an earlier request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedError {
    /// Request this error resolves.
    pub id: RequestId,

    pub code: i64,

    pub message: String,

    /// Protocol-specific error detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Milliseconds since the session epoch.
    pub recorded_at: u64,
}

/// One line of a session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum ProtocolMessage {
    /// Recording header. At most one per log.
    Session(SessionMeta),

    /// Outgoing protocol call.
    Request(RequestRecord),

    /// Response matching an earlier request by id.
    Response(RecordedResponse),

    /// Error matching an earlier request by id.
    Error(RecordedError),
}
