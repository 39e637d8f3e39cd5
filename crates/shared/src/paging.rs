//! Paging, sequencing and search filter types shared by every find-style
//! operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest page any find-style operation will return.
pub const MAX_PAGE_SIZE: usize = 500;

const DEFAULT_PAGE_SIZE: usize = 100;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Window into a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub start_from: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            start_from: 0,
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    pub fn new(start_from: usize, page_size: usize) -> Self {
        Self {
            start_from,
            page_size,
        }
    }

    /// Whether the page size is inside the supported range.
    pub fn is_valid(&self) -> bool {
        self.page_size >= 1 && self.page_size <= MAX_PAGE_SIZE
    }

    /// Apply this window to an already-sequenced vector.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.start_from)
            .take(self.page_size)
            .collect()
    }
}

/// Property to order a result set by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencingOrder {
    /// Repository-chosen order
    Any,
    /// Order by guid for a stable walk
    Guid,
    CreationDateRecent,
    CreationDateOldest,
    /// Order by the string property named in [`Sequencing::property`]
    Property,
}

impl Default for SequencingOrder {
    fn default() -> Self {
        Self::Any
    }
}

/// Sequencing directive for find-style operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequencing {
    pub order: SequencingOrder,
    /// Required when `order` is [`SequencingOrder::Property`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl Sequencing {
    pub fn by_property(property: impl Into<String>) -> Self {
        Self {
            order: SequencingOrder::Property,
            property: Some(property.into()),
        }
    }
}

/// Free-text search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Case-insensitive substring matched against string property values
    pub search_criteria: String,
    /// Point-in-time filter; repositories without history ignore it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_time: Option<DateTime<Utc>>,
}

impl SearchFilter {
    pub fn new(search_criteria: impl Into<String>) -> Self {
        Self {
            search_criteria: search_criteria.into(),
            as_of_time: None,
        }
    }
}
