//! Find-style request body shared by every view service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::paging::{PageRequest, SearchFilter, Sequencing};

/// Body of the `.../by-search-string` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "search criteria cannot be empty"))]
    pub search_criteria: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paging: PageRequest,
    #[serde(default)]
    pub sequencing: Sequencing,
}

impl SearchRequest {
    pub fn new(search_criteria: impl Into<String>) -> Self {
        Self {
            search_criteria: search_criteria.into(),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> SearchFilter {
        SearchFilter {
            search_criteria: self.search_criteria.clone(),
            as_of_time: self.as_of_time,
        }
    }
}
