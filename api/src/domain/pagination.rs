//! Listing contract: page/limit slicing ordered by creation time

use std::fmt;

/// Direction for ordering by `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only an exact `"desc"` sorts descending; anything else, empty
    /// included, falls back to ascending.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// A request for one page of an ordered listing.
///
/// A zero `page` or zero `limit` disables pagination entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64, sort: &str) -> Self {
        Self {
            page,
            limit,
            sort: SortOrder::normalize(sort),
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.page != 0 && self.limit != 0
    }

    /// Rows to skip, `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Apply this request to an already ordered sequence
    pub fn slice<T>(&self, ordered: Vec<T>) -> Vec<T> {
        if !self.is_paginated() {
            return ordered;
        }

        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);

        ordered.into_iter().skip(offset).take(limit).collect()
    }
}
