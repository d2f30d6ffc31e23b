use protoscope_types::{RequestId, RequestSummary};
use serde::{Deserialize, Serialize};

/// A maximal contiguous run of requests sharing the same full method, the
/// same `pending` flag, and the same `errored` flag.
///
/// Concatenating all chunks' `ids` in order reproduces the input sequence
/// exactly; a chunk never spans a change in any of the three grouping keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestChunk {
    /// Member identifiers in arrival order.
    pub ids: Vec<RequestId>,

    /// Number of members (= `ids.len()`).
    pub count: usize,

    /// Shared grouping key, `class.method`.
    pub method: String,

    pub pending: bool,

    pub errored: bool,

    /// `recorded_at` of the first member, milliseconds since the session epoch.
    pub started_at: u64,
}

impl RequestChunk {
    fn open(request: &RequestSummary, method: String) -> Self {
        Self {
            ids: vec![request.id],
            count: 1,
            method,
            pending: request.pending,
            errored: request.errored,
            started_at: request.recorded_at,
        }
    }

    fn accepts(&self, request: &RequestSummary, method: &str) -> bool {
        self.method == method && self.pending == request.pending && self.errored == request.errored
    }
}

/// Reduce an ordered request sequence into contiguous run-groups for
/// timeline display.
///
/// Single left-to-right scan with one open chunk at a time: extend it while
/// the incoming request matches all three grouping keys, seal it and open a
/// new one on any mismatch, flush the open chunk after the last request.
/// Pure and deterministic; the input is not validated or reordered.
pub fn chunk_requests(requests: &[RequestSummary]) -> Vec<RequestChunk> {
    let mut chunks = Vec::new();
    let mut current: Option<RequestChunk> = None;

    for request in requests {
        let method = request.full_method();
        match &mut current {
            Some(chunk) if chunk.accepts(request, &method) => {
                chunk.count += 1;
                chunk.ids.push(request.id);
            }
            slot => {
                if let Some(sealed) = slot.take() {
                    chunks.push(sealed);
                }
                *slot = Some(RequestChunk::open(request, method));
            }
        }
    }

    if let Some(sealed) = current {
        chunks.push(sealed);
    }

    chunks
}
