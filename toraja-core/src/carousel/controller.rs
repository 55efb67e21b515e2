//! Carousel controller: owns the paging state and every pending timer for
//! one mounted carousel.
//!
//! The controller never reads the clock itself. Callers pass `now` into each
//! event and call [`Carousel::tick`] when [`Carousel::next_deadline`] has
//! passed, which keeps the whole state machine deterministic under a fake
//! clock.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use super::autoplay::AutoPlay;
use super::cycle;
use super::layout::LayoutResolver;
use super::lock::TransitionLock;
use super::types::{CarouselConfig, CarouselEvent, Direction};

/// Snapshot of a carousel, cheap to copy into views and channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    /// Logical page index. May sit outside `[0, total_pages)` while a wrap
    /// transition is running.
    pub current_index: isize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub is_transitioning: bool,
    pub is_auto_playing: bool,
    pub mounted: bool,
}

impl CarouselState {
    pub fn current_page(&self) -> usize {
        cycle::wrap(self.current_index, self.total_pages.max(1))
    }
}

/// Pending timers, ordered by priority for deadlines that coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Timer {
    Transition,
    Layout,
    AutoPlay,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    total_items: usize,
    items_per_page: usize,
    current_index: isize,
    lock: TransitionLock,
    autoplay: AutoPlay,
    layout: LayoutResolver,
    mounted: bool,
    outbox: Vec<CarouselEvent>,
}

impl Carousel {
    /// Mount a carousel over `total_items` items, seeded on page 0.
    pub fn mount(
        config: CarouselConfig,
        total_items: usize,
        viewport_width: f32,
        now: Instant,
    ) -> Self {
        let config = config.sanitized();
        let layout = LayoutResolver::new(&config, viewport_width);
        let interval = autoplay_interval(&config, layout.is_narrow());
        let mut carousel = Self {
            config,
            total_items,
            items_per_page: layout.items_per_page(),
            current_index: 0,
            lock: TransitionLock::new(config.transition_duration),
            autoplay: AutoPlay::new(interval),
            layout,
            mounted: true,
            outbox: Vec::new(),
        };
        carousel.rearm_autoplay(now);

        debug!(
            total_items,
            items_per_page = carousel.items_per_page,
            total_pages = carousel.total_pages(),
            "carousel mounted"
        );
        carousel
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        cycle::total_pages(self.total_items, self.items_per_page)
    }

    /// Raw logical index, including transient out-of-range values.
    pub fn raw_index(&self) -> isize {
        self.current_index
    }

    /// Page being shown (or animated towards), always in range.
    pub fn current_page(&self) -> usize {
        cycle::wrap(self.current_index, self.total_pages())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn is_transitioning(&self) -> bool {
        self.lock.is_transitioning()
    }

    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay.interval()
    }

    /// Arrows and dots are only rendered when there is somewhere to go.
    pub fn shows_controls(&self) -> bool {
        self.is_navigable()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            items_per_page: self.items_per_page,
            total_items: self.total_items,
            total_pages: self.total_pages(),
            is_transitioning: self.is_transitioning(),
            is_auto_playing: self.is_auto_playing(),
            mounted: self.mounted,
        }
    }

    /// Indices into the borrowed item list for the current page.
    pub fn visible_indices(&self) -> Vec<usize> {
        if !self.mounted {
            return Vec::new();
        }
        cycle::visible_window(
            self.current_page() as isize,
            self.items_per_page,
            self.total_items,
        )
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.navigate(Direction::Next, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        self.navigate(Direction::Prev, now)
    }

    /// Dot click.
    pub fn jump_to(&mut self, page: usize, now: Instant) -> bool {
        self.navigate(Direction::JumpTo(page), now)
    }

    /// User navigation. Accepted requests restart the auto-play countdown.
    fn navigate(&mut self, direction: Direction, now: Instant) -> bool {
        let accepted = self.request_advance(direction, now);
        if accepted && self.autoplay.is_armed() {
            self.autoplay.arm(now);
        }
        accepted
    }

    /// Apply a navigation request through the transition lock.
    ///
    /// Returns false when the request was dropped: nothing to page through,
    /// unmounted, or a transition still running.
    pub fn request_advance(
        &mut self,
        direction: Direction,
        now: Instant,
    ) -> bool {
        if !self.is_navigable() {
            trace!(?direction, "carousel has a single page; ignoring");
            return false;
        }
        if !self.lock.try_acquire(now) {
            trace!(?direction, "transition in flight; dropping request");
            return false;
        }

        let before = self.current_page();
        self.current_index = match direction {
            Direction::Next => self.current_index.saturating_add(1),
            Direction::Prev => self.current_index.saturating_sub(1),
            Direction::JumpTo(page) => {
                let page = isize::try_from(page).unwrap_or(isize::MAX);
                cycle::wrap(page, self.total_pages()) as isize
            }
        };

        let page = self.current_page();
        if page != before {
            let total_pages = self.total_pages();
            debug!(page, total_pages, ?direction, "carousel page changed");
            self.outbox
                .push(CarouselEvent::PageChanged { page, total_pages });
        }
        true
    }

    pub fn pointer_enter(&mut self) {
        self.pause();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.resume(now);
    }

    pub fn touch_start(&mut self) {
        self.pause();
    }

    pub fn touch_end(&mut self, now: Instant) {
        self.resume(now);
    }

    fn pause(&mut self) {
        if !self.mounted {
            return;
        }
        self.autoplay.set_playing(false);
    }

    fn resume(&mut self, now: Instant) {
        if !self.mounted || self.autoplay.is_playing() {
            return;
        }
        self.autoplay.set_playing(true);
        self.rearm_autoplay(now);
    }

    /// Viewport width changed.
    pub fn resize(&mut self, viewport_width: f32, now: Instant) {
        if !self.mounted {
            return;
        }
        if let Some(items_per_page) = self.layout.observe(viewport_width, now) {
            self.apply_layout(items_per_page, now);
        }
    }

    /// The surrounding page replaced the item list.
    pub fn set_total_items(&mut self, total_items: usize, now: Instant) {
        if !self.mounted || total_items == self.total_items {
            return;
        }
        self.lock.force_release();
        self.total_items = total_items;
        self.normalize_index();
        self.autoplay.disarm();
        self.rearm_autoplay(now);
    }

    /// Fire every timer due by `now`, in deadline order, and return the
    /// events produced since the last drain.
    pub fn tick(&mut self, now: Instant) -> Vec<CarouselEvent> {
        if !self.mounted {
            self.outbox.clear();
            return Vec::new();
        }

        while let Some((timer, at)) = self.next_due(now) {
            match timer {
                Timer::Transition => {
                    if self.lock.release_if_due(at) {
                        self.normalize_index();
                    }
                }
                Timer::Layout => {
                    if let Some(items_per_page) =
                        self.layout.settle_if_due(at)
                    {
                        self.apply_layout(items_per_page, at);
                    }
                }
                Timer::AutoPlay => {
                    if let Some(due) = self.autoplay.fire_if_due(at) {
                        self.request_advance(Direction::Next, due);
                    }
                }
            }
        }

        self.drain_events()
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted {
            return None;
        }
        self.deadlines().map(|(_, at)| at).min()
    }

    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Tear down: cancel every timer. Later events and ticks are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.lock.force_release();
        self.autoplay.disarm();
        self.layout.cancel();
        self.outbox.clear();
        debug!("carousel unmounted");
    }

    fn apply_layout(&mut self, items_per_page: usize, now: Instant) {
        // Settle an in-flight wrap against the old page count first.
        if self.lock.force_release() {
            self.normalize_index();
        }
        self.items_per_page = items_per_page;
        self.normalize_index();

        let interval =
            autoplay_interval(&self.config, self.layout.is_narrow());
        self.autoplay.set_interval(interval);
        self.autoplay.disarm();
        self.rearm_autoplay(now);

        let total_pages = self.total_pages();
        debug!(
            items_per_page,
            total_pages,
            page = self.current_page(),
            "carousel layout changed"
        );
        self.outbox.push(CarouselEvent::LayoutChanged {
            items_per_page,
            total_pages,
        });
    }

    fn normalize_index(&mut self) {
        self.current_index =
            cycle::normalize_page(self.current_index, self.total_pages());
    }

    fn is_navigable(&self) -> bool {
        self.mounted && self.total_items > 0 && self.total_pages() > 1
    }

    fn rearm_autoplay(&mut self, now: Instant) {
        if !self.is_navigable() {
            self.autoplay.disarm();
        } else if !self.autoplay.is_armed() {
            self.autoplay.arm(now);
        }
    }

    fn deadlines(&self) -> impl Iterator<Item = (Timer, Instant)> {
        [
            (Timer::Transition, self.lock.deadline()),
            (Timer::Layout, self.layout.deadline()),
            (Timer::AutoPlay, self.autoplay.deadline()),
        ]
        .into_iter()
        .filter_map(|(timer, at)| at.map(|at| (timer, at)))
    }

    fn next_due(&self, now: Instant) -> Option<(Timer, Instant)> {
        self.deadlines()
            .filter(|(_, at)| *at <= now)
            .min_by_key(|(timer, at)| (*at, *timer))
    }
}

fn autoplay_interval(config: &CarouselConfig, narrow: bool) -> Duration {
    if narrow {
        config.autoplay_interval_mobile
    } else {
        config.autoplay_interval_desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f32 = 1280.0;
    const MOBILE: f32 = 375.0;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn immediate_config() -> CarouselConfig {
        CarouselConfig {
            resize_debounce: Duration::ZERO,
            ..CarouselConfig::featured_destinations()
        }
    }

    /// Navigate and let the transition finish.
    fn step(carousel: &mut Carousel, direction: Direction, now: &mut Instant) {
        assert!(carousel.request_advance(direction, *now));
        *now += ms(500);
        carousel.tick(*now);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn nine_items_four_per_page_wraps_after_three_pages() {
        let mut now = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, now);
        assert_eq!(carousel.total_pages(), 3);

        let mut shown = vec![carousel.visible_indices()];
        for _ in 0..3 {
            step(&mut carousel, Direction::Next, &mut now);
            shown.push(carousel.visible_indices());
        }

        assert_eq!(
            shown,
            vec![
                vec![0, 1, 2, 3],
                vec![4, 5, 6, 7],
                vec![8, 0, 1, 2],
                vec![0, 1, 2, 3],
            ]
        );
        assert_eq!(carousel.raw_index(), 0);
    }

    #[test]
    fn single_page_hides_controls_and_never_autoplays() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 3, DESKTOP, t0);

        assert_eq!(carousel.total_pages(), 1);
        assert!(!carousel.shows_controls());
        assert!(!carousel.next(t0));
        assert_eq!(carousel.next_deadline(), None);

        let events = carousel.tick(t0 + Duration::from_secs(3600));
        assert!(events.is_empty());
        assert_eq!(carousel.raw_index(), 0);
        assert_eq!(carousel.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn narrowing_the_viewport_rewraps_the_index() {
        let mut now = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, now);
        step(&mut carousel, Direction::Next, &mut now);
        step(&mut carousel, Direction::Next, &mut now);
        assert_eq!(carousel.raw_index(), 2);

        carousel.resize(MOBILE, now);

        assert_eq!(carousel.items_per_page(), 1);
        assert_eq!(carousel.total_pages(), 9);
        assert!((0..9).contains(&carousel.raw_index()));
        assert_eq!(carousel.visible_indices().len(), 1);
        assert_eq!(
            carousel.drain_events(),
            vec![CarouselEvent::LayoutChanged {
                items_per_page: 1,
                total_pages: 9
            }]
        );
    }

    #[test]
    fn resize_mid_transition_settles_the_wrap_first() {
        let mut now = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, now);
        step(&mut carousel, Direction::Next, &mut now);
        step(&mut carousel, Direction::Next, &mut now);

        // Wraps from the last page: raw index 3 until the transition ends.
        assert!(carousel.next(now));
        assert_eq!(carousel.raw_index(), 3);

        carousel.resize(MOBILE, now);
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.raw_index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_any_navigation_sequence() {
        let mut seed: u64 = 0x5eed;
        let mut rand = move || {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        for total in 1..=12usize {
            let mut now = Instant::now();
            let mut carousel =
                Carousel::mount(immediate_config(), total, DESKTOP, now);
            for _ in 0..40 {
                let direction = match rand() % 3 {
                    0 => Direction::Next,
                    1 => Direction::Prev,
                    _ => Direction::JumpTo(rand() % 7),
                };
                carousel.request_advance(direction, now);
                now += ms((rand() % 700) as u64);
                carousel.tick(now);
                if !carousel.is_transitioning() {
                    let pages = carousel.total_pages() as isize;
                    assert!((0..pages).contains(&carousel.raw_index()));
                }
            }
        }
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 0, DESKTOP, t0);

        assert!(carousel.is_empty());
        assert!(!carousel.next(t0));
        assert!(!carousel.prev(t0));
        assert!(!carousel.jump_to(2, t0));
        assert_eq!(carousel.raw_index(), 0);
        assert!(carousel.visible_indices().is_empty());
        assert!(carousel.tick(t0 + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn double_next_within_transition_moves_once() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);

        assert!(carousel.next(t0));
        assert!(!carousel.next(t0 + ms(100)));
        carousel.tick(t0 + ms(500));

        assert_eq!(carousel.current_page(), 1);
        assert_eq!(
            carousel.drain_events(),
            Vec::<CarouselEvent>::new(),
            "tick already drained the page change"
        );
    }

    #[test]
    fn no_mutation_after_unmount() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);
        assert!(carousel.next(t0));
        carousel.unmount();
        let before = carousel.state();

        assert!(carousel.tick(t0 + Duration::from_secs(3600)).is_empty());
        carousel.resize(MOBILE, t0 + Duration::from_secs(3601));
        carousel.pointer_leave(t0 + Duration::from_secs(3602));
        assert!(!carousel.next(t0 + Duration::from_secs(3603)));

        assert_eq!(carousel.state(), before);
        assert!(!before.mounted);
        assert_eq!(carousel.next_deadline(), None);
    }

    #[test]
    fn autoplay_advances_on_interval() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);
        assert_eq!(carousel.next_deadline(), Some(t0 + ms(5000)));

        let events = carousel.tick(t0 + ms(5000));
        assert_eq!(
            events,
            vec![CarouselEvent::PageChanged {
                page: 1,
                total_pages: 3
            }]
        );

        // Two more intervals (and their transitions) elapse in one tick.
        carousel.tick(t0 + ms(15_500));
        assert_eq!(carousel.raw_index(), 0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn hover_pauses_and_leave_restarts_the_countdown() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);

        carousel.pointer_enter();
        assert!(!carousel.is_auto_playing());
        assert!(carousel.tick(t0 + Duration::from_secs(30)).is_empty());
        assert_eq!(carousel.raw_index(), 0);

        let left_at = t0 + Duration::from_secs(30);
        carousel.pointer_leave(left_at);
        assert!(carousel.is_auto_playing());
        assert_eq!(carousel.next_deadline(), Some(left_at + ms(5000)));

        carousel.touch_start();
        assert_eq!(carousel.next_deadline(), None);
        carousel.touch_end(left_at);
        assert_eq!(carousel.next_deadline(), Some(left_at + ms(5000)));
    }

    #[test]
    fn manual_navigation_restarts_autoplay() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);

        assert!(carousel.next(t0 + ms(4000)));
        carousel.tick(t0 + ms(5000));
        assert_eq!(carousel.current_page(), 1, "countdown was restarted");

        carousel.tick(t0 + ms(9000));
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn mobile_layout_uses_the_shorter_interval() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);
        assert_eq!(carousel.autoplay_interval(), ms(5000));

        carousel.resize(MOBILE, t0 + ms(1000));
        assert_eq!(carousel.autoplay_interval(), ms(3000));
        assert_eq!(carousel.next_deadline(), Some(t0 + ms(4000)));
    }

    #[test]
    fn debounced_resize_applies_on_tick() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(
            CarouselConfig::featured_destinations(),
            9,
            DESKTOP,
            t0,
        );

        carousel.resize(MOBILE, t0);
        assert_eq!(carousel.items_per_page(), 4);

        let events = carousel.tick(t0 + ms(150));
        assert_eq!(carousel.items_per_page(), 1);
        assert_eq!(
            events,
            vec![CarouselEvent::LayoutChanged {
                items_per_page: 1,
                total_pages: 9
            }]
        );
    }

    #[test]
    fn jump_to_wraps_out_of_range_pages() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, t0);

        assert!(carousel.jump_to(5, t0));
        assert_eq!(carousel.current_page(), 2);
        carousel.tick(t0 + ms(500));
        assert_eq!(carousel.raw_index(), 2);
    }

    #[test]
    fn prev_from_first_page_wraps_to_last() {
        let mut now = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, now);

        assert!(carousel.prev(now));
        assert_eq!(carousel.raw_index(), -1);
        assert_eq!(carousel.visible_indices(), vec![8, 0, 1, 2]);

        now += ms(500);
        carousel.tick(now);
        assert_eq!(carousel.raw_index(), 2);
    }

    #[test]
    fn shrinking_the_item_list_rewraps() {
        let mut now = Instant::now();
        let mut carousel = Carousel::mount(immediate_config(), 9, DESKTOP, now);
        step(&mut carousel, Direction::Next, &mut now);
        step(&mut carousel, Direction::Next, &mut now);

        carousel.set_total_items(5, now);
        assert_eq!(carousel.total_pages(), 2);
        assert_eq!(carousel.raw_index(), 0);

        carousel.set_total_items(2, now);
        assert!(!carousel.shows_controls());
        assert_eq!(carousel.next_deadline(), None);
    }
}
