//! Lodestone shared crate.
//!
//! The wire protocol between the access-service server and its clients:
//! the response envelope, request bodies, paging/sequencing types, and the
//! error and audit message catalogs. Both sides depend on this crate so the
//! contract cannot drift.

pub mod messages;
pub mod paging;
pub mod requests;
pub mod responses;

// Re-export the element beans that travel inside response envelopes so
// clients can depend on this crate alone.
pub use lodestone_domain::elements;

pub use messages::{AuditCode, AuditSeverity, CatalogError, MessageDefinition};
pub use paging::{PageRequest, SearchFilter, Sequencing, SequencingOrder, MAX_PAGE_SIZE};
pub use responses::{ResponseEnvelope, ServiceErrorCode, ServiceFault};
