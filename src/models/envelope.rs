// ============================================================================
// ENVELOPE - Wire wrapper around every API response
// ============================================================================
// { success, message?, data, pagination?, details? }
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Missing counters decode as 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

/// Unwrapped result of a request
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    /// 204 No Content
    Empty,
    Data(Value),
    Paginated { data: Value, pagination: Pagination },
}

impl ApiPayload {
    /// `data`, or `Value::Null` for an empty response
    pub fn into_data(self) -> Value {
        match self {
            ApiPayload::Empty => Value::Null,
            ApiPayload::Data(data) => data,
            ApiPayload::Paginated { data, .. } => data,
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            ApiPayload::Paginated { pagination, .. } => Some(pagination),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ApiPayload::Empty)
    }
}

/// Typed page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.pagination
            .map(|p| p.page < p.total_pages)
            .unwrap_or(false)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { data: Vec::new(), pagination: None }
    }
}

/// Decodes `data` of a payload into `T`
pub(crate) fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(data)
}

/// Paging and filtering parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// `?page=1&limit=20&...`, or an empty string without parameters
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".into(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".into(), limit.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search".into(), search.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        build_query(&pairs)
    }

    /// `base` with the query string appended
    pub fn apply(&self, base: &str) -> String {
        format!("{}{}", base, self.to_query_string())
    }
}

pub(crate) fn build_query(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pagination_uses_camel_case_total_pages() {
        let p: Pagination =
            serde_json::from_value(json!({"page": 2, "limit": 20, "total": 45, "totalPages": 3})).unwrap();
        assert_eq!(p.total_pages, 3);
        assert_eq!(serde_json::to_value(p).unwrap()["totalPages"], 3);
    }

    #[test]
    fn empty_payload_reads_as_null() {
        assert_eq!(ApiPayload::Empty.into_data(), Value::Null);
        assert!(ApiPayload::Empty.pagination().is_none());
    }

    #[test]
    fn page_has_next() {
        let page: Page<u32> = Page {
            data: vec![1, 2],
            pagination: Some(Pagination { page: 1, limit: 2, total: 3, total_pages: 2 }),
        };
        assert!(page.has_next());
        assert!(!Page::<u32>::default().has_next());
    }

    #[test]
    fn list_query_encodes_values() {
        let query = ListQuery::new()
            .page(2)
            .limit(25)
            .search("josé garcía")
            .filter("department_id", "d&1");
        assert_eq!(
            query.apply("/api/employees"),
            "/api/employees?page=2&limit=25&search=jos%C3%A9%20garc%C3%ADa&department_id=d%261"
        );
        assert_eq!(ListQuery::new().apply("/api/employees"), "/api/employees");
    }
}
