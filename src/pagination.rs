//! Fixed-size page slicing for question listings.

use thiserror::Error;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page must be a positive number, got {0}")]
    NotPositive(i64),
}

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: i64) -> Result<Self, PageError> {
        match usize::try_from(number) {
            Ok(n) if n > 0 => Ok(Page(n)),
            _ => Err(PageError::NotPositive(number)),
        }
    }

    /// Missing page numbers default to the first page.
    pub fn from_query(number: Option<i64>) -> Result<Self, PageError> {
        number.map_or(Ok(Self::FIRST), Self::new)
    }

    pub fn number(self) -> usize {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Returns the `page`-th run of [`QUESTIONS_PER_PAGE`] items. Pages past the
/// end of `items` are empty.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start = (page.0 - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, Page::FIRST), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        let page = Page::new(3).unwrap();
        assert_eq!(paginate(&items, page), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, Page::new(4).unwrap()).is_empty());
        assert!(paginate(&items, Page::new(1_000_000).unwrap()).is_empty());
        assert!(paginate::<u32>(&[], Page::FIRST).is_empty());
    }

    #[test]
    fn page_length_matches_remaining_items() {
        for len in 0..35usize {
            let items: Vec<usize> = (0..len).collect();
            for n in 1..6usize {
                let page = Page::new(n as i64).unwrap();
                let expected = len.saturating_sub(10 * (n - 1)).min(10);
                assert_eq!(paginate(&items, page).len(), expected, "len={len} page={n}");
            }
        }
    }

    #[test]
    fn zero_and_negative_pages_are_rejected() {
        assert_eq!(Page::new(0), Err(PageError::NotPositive(0)));
        assert_eq!(Page::new(-3), Err(PageError::NotPositive(-3)));
    }

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(Page::from_query(None), Ok(Page::FIRST));
        assert_eq!(Page::from_query(Some(2)).map(Page::number), Ok(2));
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let items = [1, 2, 3];
        let page = Page::new(i64::MAX).unwrap();
        assert!(paginate(&items, page).is_empty());
    }
}
