use std::collections::HashMap;

use protoscope_types::{
    ProtocolMessage, RecordLookup, RecordedError, RecordedResponse, RequestId, RequestRecord,
    RequestSummary, SessionMeta,
};

use crate::{Error, Result};

/// In-memory replay of one recorded protocol session.
///
/// Request summaries are append-only and kept in arrival order; the only
/// in-place mutation is the `pending`/`errored` transition applied when the
/// matching response or error arrives. Responses and errors are indexed by
/// request id for detail lookup. When both arrive for the same id (retried
/// call), both are kept and each transition applies its own flag updates.
#[derive(Debug, Default)]
pub struct SessionStore {
    requests: Vec<RequestSummary>,
    index: HashMap<RequestId, usize>,
    responses: HashMap<RequestId, RecordedResponse>,
    errors: HashMap<RequestId, RecordedError>,
    meta: Option<SessionMeta>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one protocol message to the session.
    pub fn apply(&mut self, message: ProtocolMessage) -> Result<()> {
        match message {
            ProtocolMessage::Session(meta) => self.set_meta(meta),
            ProtocolMessage::Request(record) => self.record_request(record),
            ProtocolMessage::Response(response) => self.record_response(response),
            ProtocolMessage::Error(error) => self.record_error(error),
        }
    }

    pub fn set_meta(&mut self, meta: SessionMeta) -> Result<()> {
        if self.meta.is_some() {
            return Err(Error::replay("duplicate session header"));
        }
        self.meta = Some(meta);
        Ok(())
    }

    /// Append a request. Starts pending; identifiers are protocol-unique, so
    /// a duplicate id means a corrupt log.
    pub fn record_request(&mut self, record: RequestRecord) -> Result<()> {
        if self.index.contains_key(&record.id) {
            return Err(Error::replay(format!("duplicate request id {}", record.id)));
        }
        self.index.insert(record.id, self.requests.len());
        self.requests.push(RequestSummary::from(record));
        Ok(())
    }

    /// Store a response and clear the owning request's `pending` flag.
    pub fn record_response(&mut self, response: RecordedResponse) -> Result<()> {
        let row = self.row_mut(response.id, "response")?;
        row.pending = false;
        self.responses.insert(response.id, response);
        Ok(())
    }

    /// Store an error; clears `pending` and sets `errored` on the owner.
    pub fn record_error(&mut self, error: RecordedError) -> Result<()> {
        let row = self.row_mut(error.id, "error")?;
        row.pending = false;
        row.errored = true;
        self.errors.insert(error.id, error);
        Ok(())
    }

    fn row_mut(&mut self, id: RequestId, kind: &str) -> Result<&mut RequestSummary> {
        match self.index.get(&id) {
            Some(&idx) => Ok(&mut self.requests[idx]),
            None => Err(Error::replay(format!(
                "{} for unknown request id {}",
                kind, id
            ))),
        }
    }

    /// Request summaries in arrival order.
    pub fn requests(&self) -> &[RequestSummary] {
        &self.requests
    }

    pub fn meta(&self) -> Option<&SessionMeta> {
        self.meta.as_ref()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl RecordLookup for SessionStore {
    fn summary(&self, id: RequestId) -> Option<&RequestSummary> {
        self.index.get(&id).map(|&idx| &self.requests[idx])
    }

    fn response(&self, id: RequestId) -> Option<&RecordedResponse> {
        self.responses.get(&id)
    }

    fn error(&self, id: RequestId) -> Option<&RecordedError> {
        self.errors.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: u64, recorded_at: u64) -> RequestRecord {
        RequestRecord {
            id: RequestId::new(id),
            class: "Network".to_string(),
            method: "getCookies".to_string(),
            recorded_at,
        }
    }

    fn response(id: u64, recorded_at: u64) -> RecordedResponse {
        RecordedResponse {
            id: RequestId::new(id),
            result: serde_json::json!({ "cookies": [] }),
            recorded_at,
        }
    }

    fn error(id: u64, recorded_at: u64) -> RecordedError {
        RecordedError {
            id: RequestId::new(id),
            code: -32000,
            message: "boom".to_string(),
            data: None,
            recorded_at,
        }
    }

    #[test]
    fn test_request_starts_pending() {
        let mut store = SessionStore::new();
        store.record_request(request(1, 0)).unwrap();

        let summary = store.summary(RequestId::new(1)).unwrap();
        assert!(summary.pending);
        assert!(!summary.errored);
    }

    #[test]
    fn test_response_clears_pending() {
        let mut store = SessionStore::new();
        store.record_request(request(1, 0)).unwrap();
        store.record_response(response(1, 10)).unwrap();

        let summary = store.summary(RequestId::new(1)).unwrap();
        assert!(!summary.pending);
        assert!(!summary.errored);
        assert!(store.response(RequestId::new(1)).is_some());
        assert!(store.error(RequestId::new(1)).is_none());
    }

    #[test]
    fn test_error_sets_errored_and_clears_pending() {
        let mut store = SessionStore::new();
        store.record_request(request(1, 0)).unwrap();
        store.record_error(error(1, 10)).unwrap();

        let summary = store.summary(RequestId::new(1)).unwrap();
        assert!(!summary.pending);
        assert!(summary.errored);
        assert!(store.error(RequestId::new(1)).is_some());
    }

    #[test]
    fn test_retried_call_keeps_both_payloads() {
        let mut store = SessionStore::new();
        store.record_request(request(1, 0)).unwrap();
        store.record_error(error(1, 10)).unwrap();
        store.record_response(response(1, 20)).unwrap();

        assert!(store.response(RequestId::new(1)).is_some());
        assert!(store.error(RequestId::new(1)).is_some());

        // Each transition applies its own flags: the error already marked
        // the request errored, the later response only clears pending.
        let summary = store.summary(RequestId::new(1)).unwrap();
        assert!(!summary.pending);
        assert!(summary.errored);
    }

    #[test]
    fn test_duplicate_request_id_is_rejected() {
        let mut store = SessionStore::new();
        store.record_request(request(1, 0)).unwrap();

        let err = store.record_request(request(1, 5)).unwrap_err();
        assert!(err.to_string().contains("duplicate request id 1"));
    }

    #[test]
    fn test_orphan_response_is_rejected() {
        let mut store = SessionStore::new();

        let err = store.record_response(response(9, 10)).unwrap_err();
        assert!(err.to_string().contains("unknown request id 9"));
    }

    #[test]
    fn test_requests_keep_arrival_order() {
        let mut store = SessionStore::new();
        for id in [3u64, 1, 2] {
            store.record_request(request(id, id * 10)).unwrap();
        }

        let observed: Vec<u64> = store.requests().iter().map(|r| r.id.value()).collect();
        assert_eq!(observed, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicate_session_header_is_rejected() {
        let mut store = SessionStore::new();
        let meta = SessionMeta {
            captured_at: "2026-01-15T09:30:00Z".parse().unwrap(),
            title: None,
        };
        store.set_meta(meta.clone()).unwrap();

        let err = store.set_meta(meta).unwrap_err();
        assert!(err.to_string().contains("duplicate session header"));
    }
}
