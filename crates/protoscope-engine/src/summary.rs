use protoscope_types::RequestSummary;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate statistics over a session's request sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_requests: usize,

    /// Requests still awaiting a response.
    pub pending: usize,

    /// Requests resolved with a protocol error.
    pub errored: usize,

    /// Distinct `class.method` keys observed.
    pub distinct_methods: usize,

    /// Request count per capability class.
    pub by_class: BTreeMap<String, usize>,

    /// First to last `recorded_at`, milliseconds. None for an empty session.
    pub duration_ms: Option<u64>,
}

/// Summarize an ordered request sequence.
pub fn summarize_requests(requests: &[RequestSummary]) -> SessionSummary {
    let mut pending = 0;
    let mut errored = 0;
    let mut by_class: BTreeMap<String, usize> = BTreeMap::new();
    let mut methods: BTreeSet<String> = BTreeSet::new();

    for request in requests {
        if request.pending {
            pending += 1;
        }
        if request.errored {
            errored += 1;
        }
        *by_class.entry(request.class.clone()).or_insert(0) += 1;
        methods.insert(request.full_method());
    }

    let duration_ms = match (requests.first(), requests.last()) {
        (Some(first), Some(last)) => Some(last.recorded_at.saturating_sub(first.recorded_at)),
        _ => None,
    };

    SessionSummary {
        total_requests: requests.len(),
        pending,
        errored,
        distinct_methods: methods.len(),
        by_class,
        duration_ms,
    }
}
