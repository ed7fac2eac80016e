use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    /// Applies defaults and rejects values outside `page >= 1, 1 <= limit <= max_limit`,
    /// as well as pages whose row offset would not fit in an `i64`.
    pub fn validate(page: Option<i64>, limit: Option<i64>, default_limit: i64, max_limit: i64) -> Result<Self, Error> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);
        if page < 1 || limit < 1 || limit > max_limit || (page - 1).checked_mul(limit).is_none() {
            return Err(Error::BusinessError(format!(
                "Invalid pagination parameters. Page must be >= 1, limit must be between 1-{}",
                max_limit
            )));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    pub fn info(&self, total_count: i64) -> PageInfo {
        let total_pages = (total_count + self.limit - 1) / self.limit;
        PageInfo {
            current_page: self.page,
            total_pages,
            total_count,
            limit: self.limit,
            has_next_page: self.page < total_pages,
            has_prev_page: self.page > 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub limit: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything but `asc` sorts descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Treats absent and whitespace-only strings alike.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
