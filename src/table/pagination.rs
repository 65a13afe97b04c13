use serde::Serialize;

/// 1-indexed page cursor over a result set of varying size.
///
/// The cursor deliberately survives changes to the result set: shrinking the
/// set below the current page leaves the cursor where it is and the page
/// comes back empty until the user navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_rows: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size)
    }

    /// Jump to `page`, clamped to the pages that exist for `total_rows`.
    pub fn go_to(&mut self, page: usize, total_rows: usize) -> usize {
        let last = self.total_pages(total_rows).max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    pub fn next(&mut self, total_rows: usize) -> usize {
        self.go_to(self.current_page.saturating_add(1), total_rows)
    }

    pub fn previous(&mut self, total_rows: usize) -> usize {
        self.go_to(self.current_page.saturating_sub(1), total_rows)
    }

    /// The slice of `rows` shown on the current page. Empty when the cursor
    /// is past the end.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= rows.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(rows.len());
        &rows[start..end]
    }

    pub fn info(&self, total_rows: usize) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(total_rows),
            page_size: self.page_size,
            total_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let pages = Pagination::new(50);
        assert_eq!(pages.total_pages(0), 0);
        assert_eq!(pages.total_pages(1), 1);
        assert_eq!(pages.total_pages(50), 1);
        assert_eq!(pages.total_pages(51), 2);
        assert_eq!(pages.total_pages(1_215), 25);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut pages = Pagination::new(50);
        assert_eq!(pages.previous(120), 1);
        assert_eq!(pages.next(120), 2);
        assert_eq!(pages.next(120), 3);
        assert_eq!(pages.next(120), 3);
        assert_eq!(pages.go_to(0, 120), 1);
        assert_eq!(pages.go_to(99, 120), 3);
        assert_eq!(pages.go_to(4, 0), 1);
    }

    #[test]
    fn pages_concatenate_to_whole_set() {
        let rows: Vec<usize> = (0..173).collect();
        let mut pages = Pagination::new(50);
        let total = pages.total_pages(rows.len());
        assert_eq!(total, 4);

        let mut joined = Vec::new();
        for page in 1..=total {
            pages.go_to(page, rows.len());
            joined.extend_from_slice(pages.slice(&rows));
        }
        assert_eq!(joined, rows);
        assert_eq!(pages.slice(&rows).len(), 23);
    }

    #[test]
    fn cursor_survives_shrinking_result_set() {
        let mut pages = Pagination::new(50);
        pages.go_to(3, 150);

        let fewer: Vec<usize> = (0..20).collect();
        assert_eq!(pages.current_page(), 3);
        assert!(pages.slice(&fewer).is_empty());
        assert_eq!(pages.info(fewer.len()).total_pages, 1);
    }
}
