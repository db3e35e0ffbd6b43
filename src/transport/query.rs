use std::fmt;

use crate::domain::Pagination;

/// Builds the query fragment for list endpoints.
///
/// Pagination always comes first, either the filter's window verbatim or the
/// client defaults. Every other field passes a strict truthiness filter:
/// absent values, empty strings, zero numbers, and `false` flags are not
/// emitted at all. Array fields emit one `key=value` pair per element in
/// input order. Values are concatenated as plain text; any percent-encoding
/// is left to the HTTP layer.
pub(crate) struct QueryBuilder {
    out: String,
}

impl QueryBuilder {
    pub(crate) fn new(pagination: Option<Pagination>, defaults: Pagination) -> Self {
        let page = pagination.unwrap_or(defaults);
        Self {
            out: format!(
                "pageNumber={}&pageSize={}",
                page.page_number, page.page_size
            ),
        }
    }

    pub(crate) fn scalar_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.out.push_str(&format!("&{key}={value}"));
            }
        }
    }

    pub(crate) fn scalar_num(&mut self, key: &str, value: Option<u64>) {
        if let Some(value) = value {
            if value != 0 {
                self.out.push_str(&format!("&{key}={value}"));
            }
        }
    }

    pub(crate) fn flag(&mut self, key: &str, value: bool) {
        if value {
            self.out.push_str(&format!("&{key}=true"));
        }
    }

    pub(crate) fn repeated<T: fmt::Display>(&mut self, key: &str, values: &[T]) {
        for value in values {
            self.out.push_str(&format!("&{key}={value}"));
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
