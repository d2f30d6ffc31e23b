//! Protocol message builders for tests.

use anyhow::Result;
use chrono::{DateTime, Utc};
use protoscope_types::{
    ProtocolMessage, RecordedError, RecordedResponse, RequestId, RequestRecord, SessionMeta,
};
use std::fs;
use std::path::Path;

/// Build a request message.
pub fn request(id: u64, class: &str, method: &str, recorded_at: u64) -> ProtocolMessage {
    ProtocolMessage::Request(RequestRecord {
        id: RequestId::new(id),
        class: class.to_string(),
        method: method.to_string(),
        recorded_at,
    })
}

/// Build a response message with a stock payload.
pub fn response(id: u64, recorded_at: u64) -> ProtocolMessage {
    response_with(id, serde_json::json!({ "ok": true }), recorded_at)
}

/// Build a response message with an explicit payload.
pub fn response_with(id: u64, result: serde_json::Value, recorded_at: u64) -> ProtocolMessage {
    ProtocolMessage::Response(RecordedResponse {
        id: RequestId::new(id),
        result,
        recorded_at,
    })
}

/// Build an error message.
pub fn error(id: u64, code: i64, message: &str, recorded_at: u64) -> ProtocolMessage {
    ProtocolMessage::Error(RecordedError {
        id: RequestId::new(id),
        code,
        message: message.to_string(),
        data: None,
        recorded_at,
    })
}

/// Build a session header from an RFC 3339 timestamp.
pub fn session(captured_at: &str, title: Option<&str>) -> ProtocolMessage {
    ProtocolMessage::Session(SessionMeta {
        captured_at: captured_at
            .parse::<DateTime<Utc>>()
            .expect("valid RFC 3339 timestamp"),
        title: title.map(str::to_string),
    })
}

/// Write messages as a JSONL session log.
pub fn write_session_log(path: &Path, messages: &[ProtocolMessage]) -> Result<()> {
    let mut contents = String::new();
    for message in messages {
        contents.push_str(&serde_json::to_string(message)?);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}
