use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn looping(pages_of_items: usize) -> Carousel {
    Carousel::new(CarouselOptions::new().with_loop_enabled(true), pages_of_items)
}

#[test]
fn page_count_is_ceil_with_floor_one() {
    assert_eq!(page_count(0, 1), 1);
    assert_eq!(page_count(0, 3), 1);
    assert_eq!(page_count(1, 1), 1);
    assert_eq!(page_count(6, 3), 2);
    assert_eq!(page_count(7, 3), 3);
    assert_eq!(page_count(3, 10), 1);

    let mut rng = Lcg::new(7);
    for _ in 0..500 {
        let items = rng.gen_range_usize(0, 1000);
        let per = rng.gen_range_usize(1, 12);
        let expected = if items == 0 { 1 } else { (items + per - 1) / per };
        assert_eq!(page_count(items, per), expected);
    }
}

#[test]
fn go_to_stays_in_range() {
    let mut rng = Lcg::new(42);
    for _ in 0..500 {
        let items = rng.gen_range_usize(1, 50);
        let per = rng.gen_range_usize(1, 5);
        let wrap = rng.gen_bool();
        let mut c = Carousel::new(
            CarouselOptions::new()
                .with_items_per_page(per)
                .with_loop_enabled(wrap),
            items,
        );
        let target = rng.gen_range_u64(0, 200) as i64 - 100;
        let landed = c.go_to(target);
        assert!(landed < c.page_count());
        assert_eq!(landed, c.current_index());
    }
}

#[test]
fn looping_wraps_both_directions() {
    let mut c = Carousel::new(CarouselOptions::new().with_loop_enabled(true), 4);
    assert_eq!(c.page_count(), 4);
    assert_eq!(c.go_to(-1), 3);
    assert_eq!(c.go_to(4), 0);
    // True modulo: any distance wraps.
    assert_eq!(c.go_to(-5), 3);
    assert_eq!(c.go_to(9), 1);
}

#[test]
fn saturating_clamps_at_bounds() {
    let mut c = Carousel::new(CarouselOptions::new().with_loop_enabled(false), 4);
    assert_eq!(c.page_count(), 4);
    assert_eq!(c.go_to(-1), 0);
    assert_eq!(c.go_to(5), 3);
    assert_eq!(c.prev(), 2);
    assert_eq!(c.go_to(3), 3);
    assert_eq!(c.next(), 3);
}

#[test]
fn six_items_three_per_page_loops_after_two_nexts() {
    let mut c = Carousel::new(
        CarouselOptions::new().with_items_per_page(3).with_loop_enabled(true),
        6,
    );
    assert_eq!(c.page_count(), 2);
    assert_eq!(c.current_index(), 0);
    c.next_user(0);
    assert_eq!(c.current_index(), 1);
    c.next_user(0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn offset_percent_matches_translation_formula() {
    let mut c = Carousel::new(CarouselOptions::new().with_items_per_page(3), 6);
    assert_eq!(c.offset_percent(), 0.0);
    c.go_to(1);
    let expected = -(100.0 / 3.0);
    assert!((c.offset_percent() - expected).abs() < 1e-9);
    assert!((c.offset_percent_for_pages(0.5) - (-(100.0 / 3.0) * 0.5)).abs() < 1e-9);
}

#[test]
fn zero_interval_never_schedules() {
    let mut c = Carousel::new(CarouselOptions::new().with_autoplay_interval_ms(0), 4);
    c.start_autoplay(0);
    assert!(!c.autoplay_running());
    for now in [0u64, 500, 1000, 10_000, 1_000_000] {
        assert!(!c.tick(now));
    }
    assert_eq!(c.current_index(), 0);
}

#[test]
fn autoplay_fires_once_per_interval() {
    let mut c = Carousel::new(CarouselOptions::new().with_autoplay_interval_ms(1000), 4);
    c.start_autoplay(0);
    assert!(c.autoplay_running());

    assert!(!c.tick(999));
    assert!(c.tick(1000));
    assert_eq!(c.current_index(), 1);
    // Rescheduled from the fire moment.
    assert!(!c.tick(1500));
    assert!(c.tick(2000));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn user_navigation_resets_the_countdown() {
    let mut c = Carousel::new(CarouselOptions::new().with_autoplay_interval_ms(1000), 4);
    c.start_autoplay(0);

    c.next_user(500);
    assert_eq!(c.current_index(), 1);
    // The old deadline at t=1000 was discarded.
    assert!(!c.tick(1000));
    assert!(c.tick(1500));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn start_while_running_keeps_the_earlier_deadline() {
    let mut a = Autoplay::new(1000);
    a.start(0);
    a.start(700);
    assert!(a.tick(1000));
    assert!(!a.tick(1600));
}

#[test]
fn stop_is_idempotent() {
    let mut a = Autoplay::new(1000);
    a.stop();
    assert!(!a.is_running());
    a.start(0);
    a.stop();
    a.stop();
    assert!(!a.is_running());
    assert!(!a.tick(5000));
}

#[test]
fn hover_stops_and_leave_resumes() {
    let mut c = Carousel::new(CarouselOptions::new().with_autoplay_interval_ms(1000), 4);
    c.start_autoplay(0);
    c.stop_autoplay();
    assert!(!c.tick(2000));
    c.start_autoplay(2000);
    assert!(!c.tick(2999));
    assert!(c.tick(3000));
}

#[test]
fn drag_right_past_threshold_commits_prev() {
    // Container 300px wide → threshold 36px (12%).
    let mut c = looping(4);
    c.set_container_width(300.0);
    c.go_to(1);

    c.handle_gesture(GestureEvent::Down { x: 100.0 }, 0);
    assert!(c.is_dragging());
    c.handle_gesture(GestureEvent::Up { x: 140.0 }, 0);
    assert!(!c.is_dragging());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn drag_left_past_threshold_commits_next() {
    let mut c = looping(4);
    c.set_container_width(300.0);
    c.go_to(1);

    c.handle_gesture(GestureEvent::Down { x: 100.0 }, 0);
    c.handle_gesture(GestureEvent::Up { x: 60.0 }, 0);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn drag_below_threshold_snaps_back() {
    let mut c = looping(4);
    c.set_container_width(300.0);
    c.go_to(1);

    c.handle_gesture(GestureEvent::Down { x: 100.0 }, 0);
    c.handle_gesture(GestureEvent::Move { x: 110.0 }, 0);
    c.handle_gesture(GestureEvent::Up { x: 110.0 }, 0);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn drag_preview_is_fractional_and_does_not_commit() {
    let mut c = looping(4);
    c.set_container_width(200.0);
    c.go_to(2);

    c.handle_gesture(GestureEvent::Down { x: 50.0 }, 0);
    let fx = c.handle_gesture(GestureEvent::Move { x: 100.0 }, 0);
    // 50px over a 200px container is a quarter page leftward of index 2.
    let pages = fx.preview_pages.unwrap();
    assert!((pages - 1.75).abs() < 1e-9);
    assert_eq!(fx.transition_enabled, Some(false));
    assert!(fx.commit.is_none());
    assert_eq!(c.current_index(), 2);
}

#[test]
fn drag_stops_autoplay_and_release_restarts_it() {
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_autoplay_interval_ms(1000)
            .with_loop_enabled(true),
        4,
    );
    c.set_container_width(300.0);
    c.start_autoplay(0);

    let fx = c.handle_gesture(GestureEvent::Down { x: 10.0 }, 100);
    assert!(fx.stop_autoplay);
    assert!(!c.autoplay_running());
    assert!(!c.tick(1000));

    let fx = c.handle_gesture(GestureEvent::Up { x: 10.0 }, 1200);
    assert!(fx.restart_autoplay);
    assert!(c.autoplay_running());
    assert!(!c.tick(2100));
    assert!(c.tick(2200));
}

#[test]
fn up_while_idle_is_a_no_op() {
    let mut c = looping(4);
    c.set_container_width(300.0);
    c.go_to(1);

    let fx = c.handle_gesture(GestureEvent::Up { x: 400.0 }, 0);
    assert_eq!(fx, GestureEffects::default());
    assert_eq!(c.current_index(), 1);
}

#[test]
fn down_while_dragging_reinitializes_the_session() {
    let mut c = looping(4);
    c.set_container_width(300.0);
    c.go_to(1);

    c.handle_gesture(GestureEvent::Down { x: 0.0 }, 0);
    // A duplicate down (mouse + touch emulation) rebinds the origin.
    c.handle_gesture(GestureEvent::Down { x: 200.0 }, 0);
    // Relative to the second origin this is only 10px, below threshold.
    c.handle_gesture(GestureEvent::Up { x: 210.0 }, 0);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn cancel_snaps_back_to_origin() {
    let mut c = looping(4);
    c.set_container_width(300.0);
    c.go_to(2);

    c.handle_gesture(GestureEvent::Down { x: 0.0 }, 0);
    c.handle_gesture(GestureEvent::Move { x: 250.0 }, 0);
    let fx = c.handle_gesture(GestureEvent::Cancel, 0);
    assert_eq!(fx.commit, Some(CommitDecision::Stay(2)));
    assert!(!c.is_dragging());
    assert_eq!(c.current_index(), 2);
}

#[test]
fn zero_width_container_does_not_divide_by_zero() {
    let mut c = looping(2);
    // Width never measured; the original falls back to 1px.
    c.handle_gesture(GestureEvent::Down { x: 0.0 }, 0);
    let fx = c.handle_gesture(GestureEvent::Move { x: 0.5 }, 0);
    assert!(fx.preview_pages.unwrap().is_finite());
    c.handle_gesture(GestureEvent::Up { x: 0.5 }, 0);
    // 0.5px over a 1px fallback width clears the 12% threshold → prev.
    assert_eq!(c.current_index(), 1);
}

#[test]
fn transition_is_pure_and_side_effect_free() {
    let ctx = GestureContext {
        current_index: 3,
        container_width: 100.0,
        commit_ratio: 0.12,
    };
    let (s1, fx1) = transition(GestureState::Idle, GestureEvent::Down { x: 5.0 }, ctx);
    let (s2, fx2) = transition(GestureState::Idle, GestureEvent::Down { x: 5.0 }, ctx);
    assert_eq!(s1, s2);
    assert_eq!(fx1, fx2);
    assert_eq!(
        s1,
        GestureState::Dragging {
            origin_x: 5.0,
            origin_index: 3
        }
    );
}

#[test]
fn empty_item_set_disables_the_instance() {
    let mut c = Carousel::new(CarouselOptions::new().with_autoplay_interval_ms(500), 0);
    assert!(!c.is_enabled());
    assert_eq!(c.page_count(), 1);
    assert_eq!(c.go_to(3), 0);
    c.start_autoplay(0);
    assert!(!c.tick(1000));
    let fx = c.handle_gesture(GestureEvent::Down { x: 0.0 }, 0);
    assert_eq!(fx, GestureEffects::default());
    assert!(!c.is_dragging());
}

#[test]
fn from_attrs_parses_and_degrades_to_defaults() {
    let o = CarouselOptions::from_attrs(Some("3"), Some("5000"), Some("true"));
    assert_eq!(o.items_per_page, 3);
    assert_eq!(o.autoplay_interval_ms, 5000);
    assert!(o.loop_enabled);

    let o = CarouselOptions::from_attrs(None, None, None);
    assert_eq!(o.items_per_page, 1);
    assert_eq!(o.autoplay_interval_ms, 0);
    assert!(o.loop_enabled);

    let o = CarouselOptions::from_attrs(Some("banana"), Some("-4"), Some("yes"));
    assert_eq!(o.items_per_page, 1);
    assert_eq!(o.autoplay_interval_ms, 0);
    assert!(!o.loop_enabled);

    let o = CarouselOptions::from_attrs(Some("0"), Some("250"), Some("false"));
    assert_eq!(o.items_per_page, 1);
    assert_eq!(o.autoplay_interval_ms, 250);
    assert!(!o.loop_enabled);
}

#[test]
fn on_change_reports_drag_flag() {
    let drag_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::new(AtomicUsize::new(0));
    let d = Arc::clone(&drag_calls);
    let n = Arc::clone(&calls);
    let mut c = Carousel::new(
        CarouselOptions::new().with_on_change(Some(move |_: &Carousel, dragging: bool| {
            n.fetch_add(1, Ordering::SeqCst);
            if dragging {
                d.fetch_add(1, Ordering::SeqCst);
            }
        })),
        4,
    );
    c.set_container_width(100.0);

    c.handle_gesture(GestureEvent::Down { x: 0.0 }, 0);
    assert_eq!(drag_calls.load(Ordering::SeqCst), 1);
    c.handle_gesture(GestureEvent::Up { x: 0.0 }, 0);
    assert!(calls.load(Ordering::SeqCst) >= 2);
    assert_eq!(drag_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&calls);
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_autoplay_interval_ms(1000)
            .with_on_change(Some(move |_: &Carousel, _| {
                n.fetch_add(1, Ordering::SeqCst);
            })),
        4,
    );

    calls.store(0, Ordering::SeqCst);
    c.batch_update(|c| {
        c.go_to(1);
        c.go_to(2);
        c.restart_autoplay(0);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn user_commit_fires_a_single_notification() {
    let calls = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&calls);
    let mut c = Carousel::new(
        CarouselOptions::new().with_on_change(Some(move |_: &Carousel, _| {
            n.fetch_add(1, Ordering::SeqCst);
        })),
        4,
    );
    c.set_container_width(300.0);

    calls.store(0, Ordering::SeqCst);
    c.handle_gesture(GestureEvent::Down { x: 0.0 }, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    calls.store(0, Ordering::SeqCst);
    c.handle_gesture(GestureEvent::Up { x: -100.0 }, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn arrow_keys_navigate_and_report_handled() {
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_loop_enabled(true)
            .with_autoplay_interval_ms(1000),
        4,
    );
    c.start_autoplay(0);
    assert!(c.handle_key(ArrowKey::Right, 100));
    assert_eq!(c.current_index(), 1);
    assert!(c.handle_key(ArrowKey::Left, 200));
    assert_eq!(c.current_index(), 0);
    // Countdown was reset by the keypress at t=200.
    assert!(!c.tick(1000));
    assert!(c.tick(1200));

    let mut dead = Carousel::new(CarouselOptions::new(), 0);
    assert!(!dead.handle_key(ArrowKey::Right, 0));
}

#[test]
fn set_options_reclamps_and_reconfigures_autoplay() {
    let mut c = Carousel::new(
        CarouselOptions::new().with_loop_enabled(false).with_autoplay_interval_ms(1000),
        8,
    );
    c.go_to(7);
    c.start_autoplay(0);

    c.update_options(|o| {
        o.items_per_page = 4;
        o.autoplay_interval_ms = 2000;
    });
    assert_eq!(c.page_count(), 2);
    assert_eq!(c.current_index(), 1);
    // Interval change rebuilds the timer stopped; the adapter restarts it.
    assert!(!c.autoplay_running());
    c.start_autoplay(0);
    assert!(!c.tick(1999));
    assert!(c.tick(2000));
}

#[test]
fn disabling_resets_to_the_initial_page() {
    let mut c = Carousel::new(CarouselOptions::new(), 4);
    c.go_to(2);
    c.update_options(|o| o.enabled = false);
    assert!(!c.is_enabled());
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.go_to(3), 0);
    c.update_options(|o| o.enabled = true);
    assert!(c.is_enabled());
    assert_eq!(c.go_to(3), 3);
}

#[test]
fn widget_state_round_trips_through_restore() {
    let mut c = Carousel::new(
        CarouselOptions::new().with_autoplay_interval_ms(1000).with_loop_enabled(false),
        6,
    );
    c.go_to(3);
    c.start_autoplay(0);
    let snap = c.widget_state();
    assert_eq!(snap.page, PageState { index: 3 });
    assert!(snap.autoplay.deadline_ms.is_some());

    let mut c2 = Carousel::new(
        CarouselOptions::new().with_autoplay_interval_ms(1000).with_loop_enabled(false),
        6,
    );
    c2.restore_widget_state(snap, 5000);
    assert_eq!(c2.current_index(), 3);
    // Resumes from the restore clock, not the stale deadline.
    assert!(!c2.tick(5999));
    assert!(c2.tick(6000));
}

#[test]
fn restored_page_state_is_reclamped() {
    let mut c = Carousel::new(CarouselOptions::new().with_loop_enabled(false), 4);
    c.restore_page_state(PageState { index: 99 });
    assert_eq!(c.current_index(), 3);
}
