//! Paging window and the page envelope returned by paged searches.

use serde::Serialize;

use crate::domain::types::TypeConstraintError;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 2000;

/// Zero-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, TypeConstraintError> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(TypeConstraintError::InvalidPageSize(MAX_PAGE_SIZE));
        }
        // The offset must be representable as an SQL integer.
        let offset = page.checked_mul(size);
        if offset.is_none_or(|offset| i64::try_from(offset).is_err()) {
            return Err(TypeConstraintError::PageOutOfRange(page));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Works out the total row count for a page, running `count` only when the
/// page content cannot tell.
///
/// A first page that is not full holds every row; a later page that is not
/// full but not empty ends the result set, so the total is its offset plus its
/// length. Any other page needs the count query.
pub fn resolve_total<E, F>(request: PageRequest, content_len: usize, count: F) -> Result<usize, E>
where
    F: FnOnce() -> Result<usize, E>,
{
    let partial = content_len < request.size();

    if request.offset() == 0 {
        if partial {
            return Ok(content_len);
        }
        return count();
    }

    if content_len != 0 && partial {
        return Ok(request.offset().saturating_add(content_len));
    }

    count()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    /// Zero-based page number.
    pub number: usize,
    pub size: usize,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        let total_pages = total_elements.div_ceil(request.size());

        Self {
            content,
            total_elements,
            total_pages,
            number: request.page(),
            size: request.size(),
            first: request.page() == 0,
            last: request.page().saturating_add(1) >= total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counted(calls: &Cell<usize>, total: usize) -> impl FnOnce() -> Result<usize, ()> + '_ {
        move || {
            calls.set(calls.get() + 1);
            Ok(total)
        }
    }

    #[test]
    fn page_request_rejects_zero_size() {
        assert_eq!(
            PageRequest::new(0, 0),
            Err(TypeConstraintError::InvalidPageSize(MAX_PAGE_SIZE))
        );
        assert!(PageRequest::new(0, MAX_PAGE_SIZE + 1).is_err());
        assert_eq!(PageRequest::new(3, 10).map(|r| r.offset()), Ok(30));
    }

    #[test]
    fn page_request_rejects_unaddressable_offset() {
        assert_eq!(
            PageRequest::new(usize::MAX, 2),
            Err(TypeConstraintError::PageOutOfRange(usize::MAX))
        );
        assert_eq!(
            PageRequest::new(1 << 62, 2),
            Err(TypeConstraintError::PageOutOfRange(1 << 62))
        );

        let last = i64::MAX as usize;
        assert_eq!(PageRequest::new(last, 1).map(|r| r.offset()), Ok(last));
    }

    #[test]
    fn far_page_metadata_does_not_overflow() {
        let request = PageRequest::new(i64::MAX as usize / 2, 2).unwrap();

        let total = resolve_total(request, 1, || Ok::<_, ()>(0)).unwrap();
        let page = Page::new(vec![1], request, total);

        assert_eq!(total, i64::MAX as usize);
        assert_eq!(page.total_pages, request.page() + 1);
        assert!(page.last);
    }

    #[test]
    fn partial_first_page_skips_count() {
        let calls = Cell::new(0);
        let request = PageRequest::new(0, 10).unwrap();

        let total = resolve_total(request, 4, counted(&calls, 99)).unwrap();

        assert_eq!(total, 4);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn full_first_page_runs_count() {
        let calls = Cell::new(0);
        let request = PageRequest::new(0, 3).unwrap();

        let total = resolve_total(request, 3, counted(&calls, 4)).unwrap();

        assert_eq!(total, 4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn partial_last_page_derives_total_from_offset() {
        let calls = Cell::new(0);
        let request = PageRequest::new(1, 3).unwrap();

        let total = resolve_total(request, 1, counted(&calls, 99)).unwrap();

        assert_eq!(total, 4);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_page_past_the_end_runs_count() {
        let calls = Cell::new(0);
        let request = PageRequest::new(5, 3).unwrap();

        let total = resolve_total(request, 0, counted(&calls, 4)).unwrap();

        assert_eq!(total, 4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn page_metadata() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3).unwrap(), 4);

        assert_eq!(page.total_pages, 2);
        assert!(page.first);
        assert!(!page.last);

        let empty: Page<i32> = Page::new(vec![], PageRequest::default(), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.last);
    }
}
