//! Autoplay timing tests
//!
//! Runs the rotator task on tokio's paused clock so the 5000ms tick and the
//! 800ms phases can be stepped through in virtual time.

use std::time::Duration;

use portfolio_core::{RotatorHandle, SiteConfig, SlotPhase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::sleep;

const WIDE: f64 = 1200.0;
const NARROW: f64 = 500.0;

fn spawn(pool_size: usize, width: f64) -> RotatorHandle {
    RotatorHandle::spawn_with_rng(pool_size, width, &SiteConfig::default(), StdRng::seed_from_u64(42))
}

/// Let the autoplay task process queued commands.
async fn settle() {
    sleep(Duration::from_millis(1)).await;
}

fn changed_slots(before: &[usize], after: &[usize]) -> usize {
    before.iter().zip(after).filter(|(a, b)| a != b).count()
}

#[tokio::test(start_paused = true)]
async fn one_slot_rotates_after_tick_through_both_phases() {
    let handle = spawn(5, WIDE);
    let initial = handle.snapshot();
    assert_eq!(initial.slots.len(), 3);
    let before = initial.selection();

    sleep(Duration::from_millis(4990)).await;
    assert_eq!(handle.snapshot(), initial, "nothing happens before the first tick");

    // Tick at 5000ms: one slot starts exiting, content unchanged
    sleep(Duration::from_millis(20)).await;
    let exiting = handle.snapshot();
    assert!(exiting.animating);
    assert_eq!(exiting.selection(), before);
    let exiting_slots: Vec<_> = exiting
        .slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.phase == SlotPhase::Exiting)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(exiting_slots.len(), 1);
    let position = exiting_slots[0];

    // Exit done at 5800ms: swapped slot enters
    sleep(Duration::from_millis(800)).await;
    let entering = handle.snapshot();
    assert_eq!(entering.slots[position].phase, SlotPhase::Entering);
    assert_eq!(changed_slots(&before, &entering.selection()), 1);
    assert_ne!(entering.selection()[position], before[position]);

    // Enter done at 6600ms: settled
    sleep(Duration::from_millis(800)).await;
    let settled = handle.snapshot();
    assert!(!settled.animating);
    assert!(settled.slots.iter().all(|s| s.phase == SlotPhase::Settled));
    assert_eq!(settled.selection(), entering.selection());
}

#[tokio::test(start_paused = true)]
async fn next_tick_counts_from_the_swap() {
    let handle = spawn(5, WIDE);

    // First rotation: tick at 5000, swap at 5800
    sleep(Duration::from_millis(7000)).await;
    let after_first = handle.snapshot();
    assert!(!after_first.animating);

    // The interval restarted at 5800, so nothing starts before 10800
    sleep(Duration::from_millis(3790)).await;
    assert_eq!(handle.snapshot(), after_first);

    sleep(Duration::from_millis(20)).await;
    assert!(handle.snapshot().animating);
}

#[tokio::test(start_paused = true)]
async fn hover_pauses_rotation_until_left() {
    let handle = spawn(5, WIDE);
    let initial = handle.snapshot();

    handle.set_hovered(true);
    settle().await;
    assert!(handle.snapshot().paused);

    sleep(Duration::from_secs(30)).await;
    let paused = handle.snapshot();
    assert_eq!(paused.selection(), initial.selection());
    assert!(!paused.animating);

    handle.set_hovered(false);
    settle().await;
    assert!(!handle.snapshot().paused);

    // Timer is re-armed on unpause
    sleep(Duration::from_millis(4900)).await;
    assert!(!handle.snapshot().animating);
    sleep(Duration::from_millis(200)).await;
    assert!(handle.snapshot().animating);
}

#[tokio::test(start_paused = true)]
async fn hover_does_not_cancel_running_transition() {
    let handle = spawn(5, WIDE);
    let before = handle.snapshot().selection();

    sleep(Duration::from_millis(5010)).await;
    assert!(handle.snapshot().animating);

    handle.set_hovered(true);
    sleep(Duration::from_millis(2000)).await;

    let snap = handle.snapshot();
    assert!(!snap.animating);
    assert_eq!(changed_slots(&before, &snap.selection()), 1);
}

#[tokio::test(start_paused = true)]
async fn full_pool_never_rotates() {
    let handle = spawn(3, WIDE);
    let initial = handle.snapshot();
    assert_eq!(initial.slots.len(), 3);

    for _ in 0..10 {
        sleep(Duration::from_secs(5)).await;
        let snap = handle.snapshot();
        assert!(!snap.animating);
        assert_eq!(snap.selection(), initial.selection());
    }
}

#[tokio::test(start_paused = true)]
async fn refresh_replaces_all_slots_together() {
    let handle = spawn(5, WIDE);

    handle.refresh();
    settle().await;
    let exiting = handle.snapshot();
    assert!(exiting.slots.iter().all(|s| s.phase == SlotPhase::Exiting));

    sleep(Duration::from_millis(800)).await;
    let entering = handle.snapshot();
    assert!(entering.slots.iter().all(|s| s.phase == SlotPhase::Entering));
    let mut sel = entering.selection();
    sel.sort_unstable();
    sel.dedup();
    assert_eq!(sel.len(), 3);

    sleep(Duration::from_millis(800)).await;
    assert!(!handle.snapshot().animating);
}

#[tokio::test(start_paused = true)]
async fn refresh_dropped_while_animating() {
    let handle = spawn(5, WIDE);

    sleep(Duration::from_millis(5010)).await;
    let snap = handle.snapshot();
    let exiting = snap.slots.iter().filter(|s| s.phase == SlotPhase::Exiting).count();
    assert_eq!(exiting, 1);

    handle.refresh();
    settle().await;
    let exiting = handle
        .snapshot()
        .slots
        .iter()
        .filter(|s| s.phase == SlotPhase::Exiting)
        .count();
    assert_eq!(exiting, 1, "refresh must not join a running rotation");
}

#[tokio::test(start_paused = true)]
async fn resize_to_narrow_shows_one_testimonial() {
    let handle = spawn(5, WIDE);
    assert_eq!(handle.snapshot().slots.len(), 3);

    handle.set_viewport_width(NARROW);
    settle().await;

    let snap = handle.snapshot();
    assert_eq!(snap.slots.len(), 1);
    assert!(snap.slots[0].pool_index < 5);
    assert!(!snap.animating);
}

#[tokio::test(start_paused = true)]
async fn resize_mid_transition_discards_pending_phase() {
    let handle = spawn(5, WIDE);

    sleep(Duration::from_millis(5010)).await;
    assert!(handle.snapshot().animating);

    handle.set_viewport_width(800.0);
    settle().await;
    let resized = handle.snapshot();
    assert_eq!(resized.slots.len(), 2);
    assert!(!resized.animating);

    // The old exit deadline passes without touching the new selection
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(handle.snapshot(), resized);
}

#[tokio::test(start_paused = true)]
async fn dropping_handle_stops_updates() {
    let handle = spawn(5, WIDE);
    let mut rx = handle.subscribe();
    drop(handle);

    // Sender side goes away with the task
    assert!(rx.changed().await.is_err());
}
