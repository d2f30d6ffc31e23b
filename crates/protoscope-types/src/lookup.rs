use crate::message::{RecordedError, RecordedResponse};
use crate::request::{RequestId, RequestSummary};

/// Read-only lookup surface the detail resolver consults.
///
/// The response and error slots are exposed independently rather than as a
/// single "resolution" value: a retried call can leave both populated, and
/// callers decide how to present that.
pub trait RecordLookup {
    /// Owning summary for an identifier. Expected to be present for any
    /// id derived from this store's own request sequence.
    fn summary(&self, id: RequestId) -> Option<&RequestSummary>;

    fn response(&self, id: RequestId) -> Option<&RecordedResponse>;

    fn error(&self, id: RequestId) -> Option<&RecordedError>;
}
