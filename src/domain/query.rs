//! Query state and result pages

use super::icon::{IconDescriptor, StyleFilter};

/// Icons per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 90;

/// Everything that determines which page of icons is requested
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub text: String,
    pub style_filter: StyleFilter,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

impl QueryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            text: String::new(),
            style_filter: StyleFilter::All,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// True when both states target the same text and style filter
    pub fn same_filter(&self, other: &QueryState) -> bool {
        self.text == other.text && self.style_filter == other.style_filter
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page of search results in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<IconDescriptor>,
    pub total_matching: u64,
}

impl ResultPage {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `ceil(total_matching / page_size)`
    pub fn total_pages(&self, page_size: u32) -> u32 {
        let pages = self.total_matching.div_ceil(u64::from(page_size.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
