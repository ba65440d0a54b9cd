//!
//! # Task Pagination Engine
//!
//! Turns the textual `?offset=&limit=` query parameters (1-based page number
//! and page size) into a concrete store window and a total-page count.
//!
//! Parameters are validated strictly: missing, non-numeric, zero or negative
//! values are rejected with a `ValidationError` instead of being clamped or
//! silently coerced. The store is always asked for exactly one page
//! (`skip = (offset - 1) * limit`, `take = limit`), so the fetched window
//! never grows with the page number.

use serde::Deserialize;

use crate::error::AppError;

/// Raw pagination query parameters as they arrive on the wire.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
}

fn parse_positive(name: &str, value: &Option<String>) -> Result<i64, AppError> {
    let raw = value
        .as_deref()
        .ok_or_else(|| AppError::ValidationError(format!("{} is required", name)))?;
    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::ValidationError(format!("{} must be an integer", name)))?;
    if parsed < 1 {
        return Err(AppError::ValidationError(format!(
            "{} must be a positive integer",
            name
        )));
    }
    Ok(parsed)
}

impl PageParams {
    /// Validates raw query parameters into page parameters.
    pub fn from_query(query: &PageQuery) -> Result<Self, AppError> {
        Ok(Self {
            offset: parse_positive("offset", &query.offset)?,
            limit: parse_positive("limit", &query.limit)?,
        })
    }

    /// Number of records the store must skip before the requested page.
    pub fn skip(&self) -> Result<i64, AppError> {
        (self.offset - 1)
            .checked_mul(self.limit)
            .ok_or_else(|| AppError::ValidationError("page window out of range".into()))
    }

    /// Number of records the store must return, counted from the skip point.
    pub fn take(&self) -> i64 {
        self.limit
    }

    /// Total number of pages needed to cover `total` matching records.
    pub fn total_pages(&self, total: i64) -> i64 {
        // limit is validated >= 1, so this cannot divide by zero.
        (total + self.limit - 1) / self.limit
    }
}
