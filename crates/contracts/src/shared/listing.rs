use serde::{Deserialize, Serialize};

use crate::shared::errors::ValidationError;

/// Sort direction for server-side list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One fully-resolved server-side list query.
///
/// Immutable value: the view controller never mutates a query in place,
/// every change produces a new one that replaces the old wholesale.
/// `F` is the page-specific filter enum (activity for customers, status
/// for orders, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery<F> {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub filter: F,
}

impl<F> ListQuery<F> {
    pub fn new(sort_by: impl Into<String>, sort_order: SortOrder, filter: F) -> Self {
        Self {
            page: 1,
            limit: 20,
            search: String::new(),
            sort_by: sort_by.into(),
            sort_order,
            filter,
        }
    }

    /// Local sanity check, performed before the query is ever sent out.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page == 0 {
            return Err(ValidationError::PageOutOfRange);
        }
        if self.limit == 0 {
            return Err(ValidationError::LimitOutOfRange);
        }
        Ok(())
    }
}

/// One page of records as returned by the gateway for exactly one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> ListPage<T> {
    /// `ceil(total / limit)`; at least 1 so that an empty result set still
    /// renders as "page 1 of 1".
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }
}

pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = (total + u64::from(limit) - 1) / u64::from(limit);
    (pages.max(1)).min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(100, 20), 5);
    }

    #[test]
    fn validate_rejects_degenerate_queries() {
        let mut q: ListQuery<()> = ListQuery::new("nama", SortOrder::Asc, ());
        assert!(q.validate().is_ok());
        q.page = 0;
        assert_eq!(q.validate(), Err(ValidationError::PageOutOfRange));
        q.page = 1;
        q.limit = 0;
        assert_eq!(q.validate(), Err(ValidationError::LimitOutOfRange));
    }

    #[test]
    fn sort_order_flips() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
    }

    #[test]
    fn sort_order_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    }
}
