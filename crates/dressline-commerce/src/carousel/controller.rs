//! Review carousel paging and auto-advance state machine.

use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeInclusive};
use std::time::Duration;

/// Carousel timing and responsive layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Viewport width at which the wide layout starts.
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
    /// Reviews per page at or above the breakpoint.
    #[serde(default = "default_wide_items")]
    pub wide_items_per_page: usize,
    /// Reviews per page below the breakpoint.
    #[serde(default = "default_narrow_items")]
    pub narrow_items_per_page: usize,
}

fn default_interval_ms() -> u64 {
    4000
}

fn default_breakpoint_px() -> u32 {
    768
}

fn default_wide_items() -> usize {
    3
}

fn default_narrow_items() -> usize {
    1
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            breakpoint_px: default_breakpoint_px(),
            wide_items_per_page: default_wide_items(),
            narrow_items_per_page: default_narrow_items(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Page size for a viewport width.
    pub fn items_per_page_for(&self, viewport_width: u32) -> usize {
        if viewport_width >= self.breakpoint_px {
            self.wide_items_per_page
        } else {
            self.narrow_items_per_page
        }
    }
}

/// Whether the auto-advance timer should be running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoAdvance {
    Running,
    /// The pointer is over the carousel.
    Paused,
}

/// What the owner of the timer handle must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerCommand {
    /// Drop any existing timer and start a fresh one for `generation`.
    Schedule { generation: u64, interval: Duration },
    /// Drop any existing timer.
    Cancel,
}

/// Paging state over the review list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Carousel {
    review_count: usize,
    current_index: usize,
    items_per_page: usize,
    mode: AutoAdvance,
    /// Timer epoch, 0 until the first timer is scheduled. Ticks from
    /// other epochs are ignored.
    generation: u64,
    config: CarouselConfig,
}

impl Carousel {
    /// Create a carousel in the narrow layout, running.
    ///
    /// Call [`Carousel::start`] once the owner can hold a timer.
    pub fn new(review_count: usize, config: CarouselConfig) -> Self {
        let items_per_page = config.narrow_items_per_page.max(1);
        Self {
            review_count,
            current_index: 0,
            items_per_page,
            mode: AutoAdvance::Running,
            generation: 0,
            config,
        }
    }

    /// Initial timer for a running carousel.
    pub fn start(&mut self) -> TimerCommand {
        self.reschedule()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn mode(&self) -> AutoAdvance {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn review_count(&self) -> usize {
        self.review_count
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Last valid page offset.
    pub fn max_index(&self) -> usize {
        self.review_count.saturating_sub(self.items_per_page)
    }

    /// Handle a timer tick.
    ///
    /// Wraps to 0 past the last offset. Returns false when no timer has been
    /// scheduled yet, the tick is stale, or the carousel is paused.
    pub fn tick(&mut self, generation: u64) -> bool {
        if self.generation == 0
            || generation != self.generation
            || self.mode == AutoAdvance::Paused
        {
            tracing::trace!(generation, current = self.generation, "Ignoring carousel tick");
            return false;
        }
        self.advance();
        true
    }

    /// Move one page forward, wrapping to 0.
    pub fn advance(&mut self) {
        self.current_index = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
    }

    /// Pointer entered or left the carousel.
    ///
    /// Entering cancels the timer; leaving starts a fresh full interval.
    /// Returns None when the hover state did not change.
    pub fn set_hovering(&mut self, hovering: bool) -> Option<TimerCommand> {
        let mode = if hovering {
            AutoAdvance::Paused
        } else {
            AutoAdvance::Running
        };
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(self.reschedule())
    }

    /// Viewport width changed.
    ///
    /// Recomputes the page size and clamps the offset to the new bound.
    /// Returns None when the page size did not change.
    pub fn resize(&mut self, viewport_width: u32) -> Option<TimerCommand> {
        let items_per_page = self.config.items_per_page_for(viewport_width).max(1);
        if items_per_page == self.items_per_page {
            return None;
        }
        self.items_per_page = items_per_page;
        self.current_index = self.current_index.min(self.max_index());
        Some(self.reschedule())
    }

    /// Jump to a page offset. Offsets past [`Carousel::max_index`] are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index > self.max_index() {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Offsets that get a dot indicator.
    pub fn indicators(&self) -> RangeInclusive<usize> {
        0..=self.max_index()
    }

    /// Track translation as a percentage of the viewport.
    pub fn offset_percent(&self) -> f64 {
        self.current_index as f64 * (100.0 / self.items_per_page as f64)
    }

    /// Indices of the reviews on screen.
    pub fn visible(&self) -> Range<usize> {
        let end = (self.current_index + self.items_per_page).min(self.review_count);
        self.current_index.min(end)..end
    }

    fn reschedule(&mut self) -> TimerCommand {
        self.generation += 1;
        match self.mode {
            AutoAdvance::Running => TimerCommand::Schedule {
                generation: self.generation,
                interval: self.config.interval(),
            },
            AutoAdvance::Paused => TimerCommand::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(review_count: usize) -> Carousel {
        let mut carousel = Carousel::new(review_count, CarouselConfig::default());
        carousel.resize(1280);
        carousel
    }

    #[test]
    fn test_items_per_page_breakpoint() {
        let config = CarouselConfig::default();
        assert_eq!(config.items_per_page_for(767), 1);
        assert_eq!(config.items_per_page_for(768), 3);
        assert_eq!(config.interval(), Duration::from_millis(4000));
    }

    #[test]
    fn test_auto_advance_wraps_at_max_index() {
        let mut carousel = wide(10);
        let generation = carousel.generation();
        assert_eq!(carousel.max_index(), 7);

        let mut seen = vec![carousel.current_index()];
        for _ in 0..10 {
            assert!(carousel.tick(generation));
            seen.push(carousel.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2]);
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut carousel = Carousel::new(10, CarouselConfig::default());
        assert_eq!(carousel.generation(), 0);
        assert!(!carousel.tick(0));
        assert_eq!(carousel.current_index(), 0);

        let TimerCommand::Schedule { generation, .. } = carousel.start() else {
            panic!("running carousel should schedule");
        };
        assert_eq!(generation, 1);
        assert!(carousel.tick(generation));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_fewer_reviews_than_page() {
        let mut carousel = wide(2);
        assert_eq!(carousel.max_index(), 0);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.indicators(), 0..=0);
        assert_eq!(carousel.visible(), 0..2);
    }

    #[test]
    fn test_hover_pauses_and_resumes_with_new_generation() {
        let mut carousel = wide(10);
        let first = carousel.generation();

        assert_eq!(carousel.set_hovering(true), Some(TimerCommand::Cancel));
        assert_eq!(carousel.mode(), AutoAdvance::Paused);
        assert!(!carousel.tick(carousel.generation()));
        assert_eq!(carousel.set_hovering(true), None);

        let resumed = carousel.set_hovering(false);
        assert_eq!(
            resumed,
            Some(TimerCommand::Schedule {
                generation: first + 2,
                interval: Duration::from_millis(4000),
            })
        );
        assert!(!carousel.tick(first));
        assert!(carousel.tick(first + 2));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_resize_clamps_index() {
        let mut carousel = Carousel::new(10, CarouselConfig::default());
        assert!(carousel.go_to(9));
        assert_eq!(carousel.max_index(), 9);

        let command = carousel.resize(1024);
        assert!(matches!(command, Some(TimerCommand::Schedule { .. })));
        assert_eq!(carousel.max_index(), 7);
        assert_eq!(carousel.current_index(), 7);

        // Same layout again is not a transition.
        assert_eq!(carousel.resize(1500), None);

        carousel.resize(320);
        assert_eq!(carousel.current_index(), 7);
        assert_eq!(carousel.visible(), 7..8);
    }

    #[test]
    fn test_resize_while_paused_cancels() {
        let mut carousel = Carousel::new(10, CarouselConfig::default());
        carousel.set_hovering(true);
        assert_eq!(carousel.resize(1024), Some(TimerCommand::Cancel));
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut carousel = wide(10);
        assert!(carousel.go_to(7));
        assert!(!carousel.go_to(8));
        assert_eq!(carousel.current_index(), 7);
        assert_eq!(carousel.indicators().count(), 8);
    }

    #[test]
    fn test_offset_percent() {
        let mut carousel = wide(10);
        carousel.go_to(2);
        assert!((carousel.offset_percent() - 66.666).abs() < 0.01);
        assert_eq!(carousel.visible(), 2..5);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0, CarouselConfig::default());
        let generation = match carousel.start() {
            TimerCommand::Schedule { generation, .. } => generation,
            TimerCommand::Cancel => panic!("running carousel should schedule"),
        };
        assert!(carousel.tick(generation));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.visible(), 0..0);
    }
}
