//! Request bodies accepted by the REST surface.
//!
//! Bodies are validated with `validator` derives before any repository
//! call; a validation failure surfaces as an invalid-parameter fault.

mod asset;
mod glossary;
mod project;
mod search;

pub use asset::NewSoftwareCapabilityRequest;
pub use glossary::{NewGlossaryRequest, NewGlossaryTermRequest, UpdateGlossaryTermRequest};
pub use project::{NewProjectRequest, UpdateProjectRequest};
pub use search::SearchRequest;
