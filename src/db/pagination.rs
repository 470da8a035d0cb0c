use crate::proto::common::{PageInfo, PageRequest};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Normalized 1-based page window, translated to `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageParams {
    pub page: i64,
    pub page_size: i64,
    pub search: Option<String>,
}

impl PageParams {
    pub fn from_request(req: Option<&PageRequest>) -> Self {
        let (page, page_size, search) = match req {
            Some(r) => (r.page as i64, r.page_size as i64, r.search.trim()),
            None => (0, 0, ""),
        };
        let page_size = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };
        Self {
            page: page.max(1),
            page_size,
            search: search_pattern(search),
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn page_info(&self, total_count: i64) -> PageInfo {
        let total_count = total_count.max(0);
        let total_pages = (total_count + self.page_size - 1) / self.page_size;
        PageInfo {
            page: self.page as i32,
            page_size: self.page_size as i32,
            total_count,
            total_pages: total_pages as i32,
        }
    }
}

/// `ILIKE` pattern matching `term` anywhere, with LIKE metacharacters escaped.
/// Returns `None` for a blank term.
pub fn search_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    Some(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: i32, page_size: i32, search: &str) -> PageRequest {
        PageRequest {
            page,
            page_size,
            search: search.to_string(),
        }
    }

    #[test]
    fn test_defaults_when_missing() {
        let params = PageParams::from_request(None);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.search, None);
    }

    #[test]
    fn test_offset_and_cap() {
        let params = PageParams::from_request(Some(&request(3, 20, "")));
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);

        let params = PageParams::from_request(Some(&request(1, 1000, "")));
        assert_eq!(params.limit(), MAX_PAGE_SIZE);

        let params = PageParams::from_request(Some(&request(-4, -1, "")));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_info_rounds_up() {
        let params = PageParams::from_request(Some(&request(2, 10, "")));
        let info = params.page_info(21);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_count, 21);
        assert_eq!(info.page, 2);
        assert_eq!(params.page_info(0).total_pages, 0);
        assert_eq!(params.page_info(20).total_pages, 2);
    }

    #[test]
    fn test_search_pattern_escapes() {
        assert_eq!(search_pattern("  "), None);
        assert_eq!(search_pattern("para"), Some("%para%".to_string()));
        assert_eq!(search_pattern("50%_a\\b"), Some("%50\\%\\_a\\\\b%".to_string()));
    }
}
