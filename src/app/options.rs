use std::time::Duration;

use super::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD};

#[derive(Debug, Clone)]
pub struct UiOptions {
    /// Redraw interval while idle.
    pub tick_rate: Duration,
    /// Users requested per page.
    pub page_size: u32,
    /// Rows left below the viewport at which the next page is requested.
    pub scroll_threshold: usize,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            page_size: DEFAULT_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            show_help: true,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_scroll_threshold(mut self, rows: usize) -> Self {
        self.scroll_threshold = rows;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_never_drops_to_zero() {
        let options = UiOptions::default().with_page_size(0);
        assert_eq!(options.page_size, 1);
    }
}
