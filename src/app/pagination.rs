//! Scroll observation for incremental loading.

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Rows between the bottom of the viewport and the end of the content at
/// which the next page is requested.
pub const DEFAULT_SCROLL_THRESHOLD: usize = 3;

/// Viewport geometry in table rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub content_height: usize,
    pub viewport_height: usize,
    pub offset: usize,
}

impl ScrollMetrics {
    pub fn distance_to_bottom(&self) -> usize {
        self.content_height
            .saturating_sub(self.offset.saturating_add(self.viewport_height))
    }
}

/// Live interest in scroll positions. Once cancelled it never reports
/// "near bottom" again.
#[derive(Debug, Clone)]
pub struct ScrollSubscription {
    threshold: usize,
    active: bool,
}

impl ScrollSubscription {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            active: true,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_near_bottom(&self, metrics: ScrollMetrics) -> bool {
        self.active && metrics.distance_to_bottom() <= self.threshold
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    Up(usize),
    Down(usize),
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Selection and first visible row of the user table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCursor {
    selected: Option<usize>,
    offset: usize,
    height: usize,
}

impl TableCursor {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        if let Some(selected) = self.selected {
            self.reveal(selected);
        }
    }

    pub fn scroll(&mut self, step: ScrollStep, len: usize) {
        if len == 0 {
            self.selected = None;
            self.offset = 0;
            return;
        }
        let last = len - 1;
        let page = self.height.max(1);
        let target = match (self.selected, step) {
            (None, ScrollStep::Bottom) => last,
            (None, _) => 0,
            (Some(current), ScrollStep::Up(n)) => current.saturating_sub(n),
            (Some(current), ScrollStep::Down(n)) => current.saturating_add(n).min(last),
            (Some(current), ScrollStep::PageUp) => current.saturating_sub(page),
            (Some(current), ScrollStep::PageDown) => current.saturating_add(page).min(last),
            (Some(_), ScrollStep::Top) => 0,
            (Some(_), ScrollStep::Bottom) => last,
        };
        self.selected = Some(target);
        self.reveal(target);
    }

    /// Keep the cursor inside `0..len` after the collection changed.
    pub fn clamp(&mut self, len: usize) {
        match self.selected {
            Some(_) if len == 0 => {
                self.selected = None;
                self.offset = 0;
            }
            Some(selected) if selected >= len => {
                self.selected = Some(len - 1);
                self.reveal(len - 1);
            }
            _ => {}
        }
        self.offset = self.offset.min(len.saturating_sub(1));
    }

    pub fn metrics(&self, len: usize) -> ScrollMetrics {
        ScrollMetrics {
            content_height: len,
            viewport_height: self.height,
            offset: self.offset,
        }
    }

    fn reveal(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if self.height > 0 && row >= self.offset + self.height {
            self.offset = row + 1 - self.height;
        }
    }
}
