//! Pagination
//!
//! Page arithmetic for the DataTable and the footer model built from it.
//! Pages are 1-based.

/// The slice of the sorted rows shown on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective page after clamping to `[1, total_pages]`
    pub page: usize,
    pub total_pages: usize,
    /// First row (inclusive)
    pub start: usize,
    /// Last row (exclusive), never past the row count
    pub end: usize,
}

impl PageWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// `max(1, ceil(count / page_size))`. A zero page size is treated as 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Compute the rows shown for `page` out of `count` rows
pub fn paginate(count: usize, page: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_pages(count, page_size);
    let page = clamp_page(page, total_pages);
    let start = ((page - 1) * page_size).min(count);
    let end = (start + page_size).min(count);
    PageWindow {
        page,
        total_pages,
        start,
        end,
    }
}

/// Footer model: row counts and previous/next affordances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    visible_items: usize,
    selected_items: Option<usize>,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            visible_items: 0,
            selected_items: None,
        }
    }

    /// Set the number of rows on the current page
    pub fn visible_items(mut self, visible: usize) -> Self {
        self.visible_items = visible;
        self
    }

    /// Show the selected-row count in the summary
    pub fn selected_items(mut self, selected: usize) -> Self {
        self.selected_items = Some(selected);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn can_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Showing 5 of 6 row(s)", with " • N selected" when selection is on
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Showing {} of {} row(s)",
            self.visible_items, self.total_items
        );
        if let Some(selected) = self.selected_items {
            summary.push_str(&format!(" • {selected} selected"));
        }
        summary
    }

    /// "Page 1 of 2"
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_paginate_slices() {
        let first = paginate(6, 1, 5);
        assert_eq!((first.start, first.end, first.total_pages), (0, 5, 2));

        let last = paginate(6, 2, 5);
        assert_eq!((last.start, last.end), (5, 6));
        assert_eq!(last.len(), 1);
    }

    #[test]
    fn test_page_is_clamped() {
        let window = paginate(1, 3, 5);
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!((window.start, window.end), (0, 1));

        let empty = paginate(0, 0, 10);
        assert_eq!(empty.page, 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_slice_length_property() {
        for count in 0..25 {
            for page_size in 1..7 {
                for page in 0..8 {
                    let window = paginate(count, page, page_size);
                    assert!(window.page >= 1 && window.page <= window.total_pages);
                    let expected = page_size.min(count.saturating_sub((window.page - 1) * page_size));
                    assert_eq!(window.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_footer_labels() {
        let footer = Pagination::new(1, 2, 6).visible_items(5);
        assert_eq!(footer.summary(), "Showing 5 of 6 row(s)");
        assert_eq!(footer.page_label(), "Page 1 of 2");
        assert!(!footer.can_previous());
        assert!(footer.can_next());

        let footer = Pagination::new(1, 1, 1).visible_items(1).selected_items(0);
        assert_eq!(footer.summary(), "Showing 1 of 1 row(s) • 0 selected");
        assert!(!footer.can_next());
    }
}
