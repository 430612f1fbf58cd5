use serde::{Deserialize, Serialize};

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            1
        };

        Self {
            data: items,
            meta: PaginationMeta {
                page,
                limit,
                total,
                total_pages,
                has_next: page < total_pages,
                has_prev: page > 1,
            },
        }
    }
}

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp pagination params to safe values: page >= 1, limit in 1..=100.
pub fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, limit)
}

/// Parameters of a list request (search box, status filter, paging).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub status: Option<String>,
    /// Restricts results to a single customer (user view).
    pub customer_id: Option<i64>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Blank search text is treated as no search.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// `"all"` and blank values clear the filter.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        let status = status.into();
        self.status = (!status.is_empty() && status != "all").then_some(status);
        self
    }

    pub fn customer(mut self, customer_id: Option<i64>) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Encode as a URL query string (without the leading `?`). Paging is
    /// always present and normalized.
    pub fn to_query_string(&self) -> String {
        let (page, limit) = normalize_pagination(self.page, self.limit);
        let mut pairs = vec![format!("page={page}"), format!("limit={limit}")];
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(status) = &self.status {
            pairs.push(format!("status={}", urlencoding::encode(status)));
        }
        if let Some(customer_id) = self.customer_id {
            pairs.push(format!("customer_id={customer_id}"));
        }
        pairs.join("&")
    }
}
