mod lookup;
mod message;
mod request;

pub use lookup::RecordLookup;
pub use message::{ProtocolMessage, RecordedError, RecordedResponse, SessionMeta};
pub use request::{RequestId, RequestRecord, RequestSummary};
