use protoscope_types::{RecordLookup, RecordedError, RecordedResponse, RequestId, RequestSummary};
use serde::{Deserialize, Serialize};

/// Resolved detail for one selected request.
///
/// Absent response and error means the request is still pending or resolved
/// with no recorded payload. Both slots can be populated for a retried call;
/// they are never unioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDetail {
    pub request: RequestSummary,
    pub response: Option<RecordedResponse>,
    pub error: Option<RecordedError>,
}

/// Outcome of resolving a selection against the store.
///
/// `missing` holds selected identifiers with no owning summary. Selections
/// are chunk-derived, so a missing summary is an invariant violation the
/// caller should surface rather than silently drop.
#[derive(Debug, Clone, Default)]
pub struct DetailResolution {
    /// One record per resolvable selected id, in selection order.
    pub records: Vec<RequestDetail>,

    pub missing: Vec<RequestId>,
}

/// Resolve a selection of request identifiers into full detail records.
///
/// Read-only against the store. Order follows `selected`; chunk-derived
/// selections are already in arrival order.
pub fn resolve_details<S: RecordLookup>(store: &S, selected: &[RequestId]) -> DetailResolution {
    let mut resolution = DetailResolution::default();

    for &id in selected {
        let Some(request) = store.summary(id) else {
            resolution.missing.push(id);
            continue;
        };

        resolution.records.push(RequestDetail {
            request: request.clone(),
            response: store.response(id).cloned(),
            error: store.error(id).cloned(),
        });
    }

    resolution
}
