use std::time::{Duration, Instant};

use linechart_rs::render::VerticalRedraw;
use linechart_rs::schedule::{DEFAULT_REDRAW_DELAY, DebounceQueue};

fn redraw(current_max_y: f64) -> VerticalRedraw {
    VerticalRedraw {
        current_max_y,
        vertical_scale: 1.0,
    }
}

#[test]
fn two_requests_within_the_delay_fire_once_with_the_second_payload() {
    let mut queue = DebounceQueue::new(DEFAULT_REDRAW_DELAY);
    let start = Instant::now();

    queue.schedule(start, redraw(120.0));
    queue.schedule(start + Duration::from_millis(40), redraw(95.0));

    // The first deadline has passed, but the first request was superseded.
    assert!(queue.poll(start + Duration::from_millis(100)).is_none());

    let fired = queue.poll(start + Duration::from_millis(140));
    assert_eq!(fired, Some(redraw(95.0)));
    assert!(queue.poll(start + Duration::from_secs(1)).is_none());
}

#[test]
fn nothing_fires_before_the_delay_elapses() {
    let mut queue = DebounceQueue::new(Duration::from_millis(100));
    let start = Instant::now();

    queue.schedule(start, redraw(50.0));
    assert!(queue.poll(start).is_none());
    assert!(queue.poll(start + Duration::from_millis(99)).is_none());
    assert!(queue.has_pending());

    assert_eq!(queue.poll(start + Duration::from_millis(100)), Some(redraw(50.0)));
}

#[test]
fn cancel_returns_the_pending_request_and_disarms() {
    let mut queue = DebounceQueue::new(DEFAULT_REDRAW_DELAY);
    let start = Instant::now();

    assert!(queue.cancel().is_none());

    queue.schedule(start, redraw(10.0));
    assert_eq!(queue.cancel(), Some(redraw(10.0)));
    assert!(!queue.has_pending());
    assert!(queue.next_deadline().is_none());
    assert!(queue.poll(start + Duration::from_secs(10)).is_none());
}

#[test]
fn deadline_tracks_the_latest_schedule() {
    let mut queue = DebounceQueue::new(Duration::from_millis(100));
    let start = Instant::now();

    queue.schedule(start, redraw(1.0));
    assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(100)));

    let later = start + Duration::from_millis(70);
    queue.schedule(later, redraw(2.0));
    assert_eq!(queue.next_deadline(), Some(later + Duration::from_millis(100)));
}
