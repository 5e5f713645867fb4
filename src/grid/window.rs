//! Page-number window for the pagination bar

/// Maximum number of page buttons shown at once
pub const WINDOW_SIZE: u32 = 5;

/// Up to five contiguous page numbers around `current_page`.
///
/// - `total_pages <= 5`: every page
/// - `current_page <= 3`: pages 1..=5
/// - `current_page >= total_pages - 2`: the last five pages
/// - otherwise `current_page - 2 ..= current_page + 2`
pub fn page_window(total_pages: u32, current_page: u32) -> Vec<u32> {
    let len = total_pages.min(WINDOW_SIZE);
    let start = if total_pages <= WINDOW_SIZE || current_page <= 3 {
        1
    } else if current_page >= total_pages - 2 {
        total_pages - (WINDOW_SIZE - 1)
    } else {
        current_page - 2
    };
    (start..start + len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_cases() {
        assert_eq!(page_window(3, 2), vec![1, 2, 3]);
        assert_eq!(page_window(10, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 9), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(page_window(0, 1), Vec::<u32>::new());
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 3), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 4), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(10, 8), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 7), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_window_always_contains_current_page() {
        for total in 1..=20 {
            for current in 1..=total {
                let window = page_window(total, current);
                assert!(window.contains(&current), "total {total}, current {current}");
                assert_eq!(window.len() as u32, total.min(WINDOW_SIZE));
            }
        }
    }
}
