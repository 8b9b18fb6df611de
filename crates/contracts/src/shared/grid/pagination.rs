//! Client-side windowing over an already filtered list.

/// Returns the 1-based `page` of `items`, `[(page-1)*page_size, page*page_size)`.
///
/// Pages past the end, page `0` and a zero page size all yield an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items; at least 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 10, 3), &items[20..25]);
        assert_eq!(paginate(&items, 10, 3).len(), 5);
        assert_eq!(paginate(&items, 10, 1), &items[0..10]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 10, 10).is_empty());
        assert!(paginate(&items, 10, 4).is_empty());
        assert!(paginate(&items, 10, 0).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
        assert!(paginate::<u32>(&[], 10, 1).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(1, 50), 1);
        assert_eq!(page_count(5, 0), 1);
    }
}
