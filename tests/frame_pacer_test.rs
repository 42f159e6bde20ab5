use std::time::Duration;

use osc_wireframe::term::FramePacer;
use osc_wireframe::types::FRAME_INTERVAL_US;

#[test]
fn frame_pacer_waits_full_interval_at_frame_start() {
    let mut p = FramePacer::new(FRAME_INTERVAL_US);
    p.begin_frame(1_000);
    assert_eq!(p.remaining(1_000), Duration::from_micros(FRAME_INTERVAL_US));
}

#[test]
fn frame_pacer_subtracts_render_time() {
    let mut p = FramePacer::new(16_666);
    p.begin_frame(0);
    assert_eq!(p.remaining(6_666), Duration::from_micros(10_000));
}

#[test]
fn frame_pacer_late_frame_does_not_wait() {
    let mut p = FramePacer::new(16_666);
    p.begin_frame(0);
    assert_eq!(p.remaining(40_000), Duration::ZERO);
}

#[test]
fn frame_pacer_tolerates_clock_going_backwards() {
    let mut p = FramePacer::new(16_666);
    p.begin_frame(50_000);
    assert_eq!(p.remaining(10_000), Duration::from_micros(16_666));
}

#[test]
fn frame_pacer_counts_frames() {
    let mut p = FramePacer::new(16_666);
    for i in 0..5 {
        p.begin_frame(i * 16_666);
    }
    assert_eq!(p.frames(), 5);
    assert_eq!(p.interval(), Duration::from_micros(16_666));
}
