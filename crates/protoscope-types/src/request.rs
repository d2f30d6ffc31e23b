use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the protocol client assigns to each outgoing request.
/// Strictly increasing in arrival order within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Request as it appears on the wire and in a session log.
///
/// Status flags are not part of the wire record; the store derives them
/// when the request is ingested (see `RequestSummary`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: RequestId,

    /// Capability/namespace the method belongs to (e.g. "Network").
    pub class: String,

    /// Operation name within the class (e.g. "getCookies").
    pub method: String,

    /// Milliseconds since the session epoch.
    pub recorded_at: u64,
}

/// One observed protocol call with its resolution status.
///
/// Appended in arrival order; the store mutates `pending`/`errored` in
/// place when the matching response or error arrives. Everything else is
/// immutable after ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub id: RequestId,

    pub class: String,

    pub method: String,

    /// Response has not arrived yet.
    pub pending: bool,

    /// Resolved with a protocol error.
    pub errored: bool,

    /// Milliseconds since the session epoch, non-decreasing across the stream.
    pub recorded_at: u64,
}

impl RequestSummary {
    /// Grouping key for timeline display: `class.method`.
    pub fn full_method(&self) -> String {
        format!("{}.{}", self.class, self.method)
    }
}

impl From<RequestRecord> for RequestSummary {
    fn from(record: RequestRecord) -> Self {
        Self {
            id: record.id,
            class: record.class,
            method: record.method,
            pending: true,
            errored: false,
            recorded_at: record.recorded_at,
        }
    }
}
