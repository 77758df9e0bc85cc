//! Client-side pagination over an in-memory result set.

use serde::Serialize;

/// Number of results shown per page. Not configurable.
pub const PAGE_SIZE: usize = 10;

/// Returns the 1-indexed `page` of `items`.
///
/// Page `0` is treated as page `1`; pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(total / page_size)`; zero for an empty set.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Page numbers to render in the page strip; `None` marks a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let past_last = last_page.saturating_add(1);

    let left_end = left_edge.saturating_add(1).min(past_last);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(past_last);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge).saturating_add(1));

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One rendered page of results plus the page strip around it.
#[derive(Clone, Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_five_holds_the_tail() {
        let items: Vec<usize> = (0..25).collect();

        let page = page_slice(&items, 3, PAGE_SIZE);

        assert_eq!(page, &[20, 21, 22, 23, 24]);
        assert_eq!(total_pages(items.len(), PAGE_SIZE), 3);
    }

    #[test]
    fn slice_length_matches_formula() {
        for len in [0usize, 1, 9, 10, 11, 25, 40] {
            let items: Vec<usize> = (0..len).collect();
            for page in 1..=6 {
                let expected = PAGE_SIZE.min(len.saturating_sub((page - 1) * PAGE_SIZE));
                let slice = page_slice(&items, page, PAGE_SIZE);
                assert_eq!(slice.len(), expected, "len={len} page={page}");
                if let Some(first) = slice.first() {
                    assert_eq!(*first, (page - 1) * PAGE_SIZE);
                }
            }
        }
    }

    #[test]
    fn page_zero_is_first_page_and_overflow_is_empty() {
        let items: Vec<usize> = (0..12).collect();

        assert_eq!(page_slice(&items, 0, PAGE_SIZE), page_slice(&items, 1, PAGE_SIZE));
        assert!(page_slice(&items, 3, PAGE_SIZE).is_empty());
        assert!(page_slice(&items, usize::MAX, PAGE_SIZE).is_empty());
    }

    #[test]
    fn total_pages_is_zero_for_empty_set() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
    }

    #[test]
    fn page_strip_collapses_distant_pages() {
        assert_eq!(get_pages(0, 1, 2, 2, 4, 2), Vec::<Option<usize>>::new());
        assert_eq!(
            get_pages(3, 1, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3)]
        );
        assert_eq!(
            get_pages(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn paginated_treats_page_zero_as_first() {
        let zero = Paginated::new(Vec::<u8>::new(), 0, 0);
        assert_eq!(zero.page, 1);
        assert!(zero.pages.is_empty());
    }

    #[test]
    fn largest_page_number_renders_an_empty_page() {
        let items: Vec<usize> = (0..25).collect();

        let slice = page_slice(&items, usize::MAX, PAGE_SIZE);
        let page = Paginated::new(slice.to_vec(), usize::MAX, total_pages(items.len(), PAGE_SIZE));

        assert!(page.items.is_empty());
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.pages.first(), Some(&Some(1)));
        assert!(page.pages.iter().flatten().all(|number| *number <= 3));
    }
}
