use serde::{Deserialize, Serialize};

const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_sql(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Query parameters shared by every list endpoint.
/// `page` is 1-based; `order_by` is matched against a per-entity column
/// whitelist before it gets anywhere near SQL.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default, alias = "orderBy")]
    pub order_by: Option<String>,
    #[serde(default)]
    pub order: Option<Order>,
}

fn default_page() -> i64 {
    1
}
fn default_size() -> i64 {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            order_by: None,
            order: None,
        }
    }
}

impl ListQuery {
    pub fn limit(&self) -> i64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Resolve the requested sort column against `allowed`, falling back to
    /// `default` for anything unknown.
    pub fn order_column<'a>(&self, allowed: &[&'a str], default: &'a str) -> &'a str {
        match self.order_by.as_deref() {
            Some(requested) => allowed
                .iter()
                .copied()
                .find(|col| *col == requested)
                .unwrap_or(default),
            None => default,
        }
    }

    pub fn order_dir(&self) -> &'static str {
        self.order.unwrap_or(Order::Desc).as_sql()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
}

/// Envelope for list responses: `{data, meta}`.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, query: &ListQuery) -> Self {
        let size = query.limit();
        let total_pages = if total == 0 { 0 } else { (total + size - 1) / size };
        Self {
            data,
            meta: ListMeta {
                total,
                page: query.page.max(1),
                size,
                total_pages,
            },
        }
    }
}
