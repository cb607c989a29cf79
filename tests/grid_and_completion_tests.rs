use guess_chart::core::{DataPoint, DomainBounds};
use guess_chart::guess::{
    CompletionLatch, CompletionTrigger, GuessGrid, GuessPolicy, GuessState, MAX_GUESS_SLOTS,
};

fn ramp(xs: &[f64]) -> Vec<DataPoint> {
    xs.iter().map(|x| DataPoint::new(*x, *x / 10.0)).collect()
}

fn distribution_state(xs: &[f64], spacing: f64) -> GuessState {
    let reference = ramp(xs);
    let bounds = DomainBounds::new(0.0, 20.0, 0.0, 2.0).expect("valid bounds");
    GuessState::new(
        &reference,
        bounds,
        GuessPolicy::new(GuessGrid::Distribution { spacing }),
    )
    .expect("state init")
}

fn slot_xs(state: &GuessState) -> Vec<f64> {
    state.points().iter().map(|slot| slot.x()).collect()
}

#[test]
fn distribution_grid_spaces_slots_evenly() {
    let state = distribution_state(&[0.0, 10.0, 20.0], 4.0);

    assert_eq!(slot_xs(&state), vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
    assert_eq!(state.expected_len(), 6);
}

#[test]
fn distribution_grid_appends_off_lattice_last_position() {
    let state = distribution_state(&[0.0, 10.0], 4.0);

    assert_eq!(slot_xs(&state), vec![0.0, 4.0, 8.0, 10.0]);
}

#[test]
fn distribution_grid_assigns_nearest_slot_with_ties_to_lower_x() {
    let mut state = distribution_state(&[0.0, 10.0], 4.0);

    let near_four = state.apply_drag(5.9, 0.5);
    assert_eq!(near_four.assigned_index, Some(1));
    assert_eq!(near_four.snapped_x, Some(4.0));
    assert_eq!(near_four.backfilled, 1);

    let tie = state.apply_drag(6.0, 0.7);
    assert_eq!(tie.assigned_index, Some(1));

    let near_tail = state.apply_drag(9.2, 0.9);
    assert_eq!(near_tail.assigned_index, Some(3));
    assert_eq!(near_tail.snapped_x, Some(10.0));
    assert!(near_tail.complete);
}

#[test]
fn distribution_drag_beyond_last_slot_completes_guess() {
    let mut state = distribution_state(&[0.0, 10.0], 4.0);

    let outcome = state.apply_drag(18.0, 1.0);

    assert_eq!(outcome.assigned_index, None);
    assert_eq!(outcome.snapped_x, Some(18.0));
    assert_eq!(outcome.backfilled, 4);
    assert!(outcome.complete);
}

#[test]
fn distribution_grid_rejects_excessive_slot_count() {
    let reference = ramp(&[0.0, 1_000.0]);
    let bounds = DomainBounds::new(0.0, 1_000.0, 0.0, 200.0).expect("valid bounds");
    let spacing = 1_000.0 / (MAX_GUESS_SLOTS as f64 * 2.0);

    assert!(
        GuessState::new(
            &reference,
            bounds,
            GuessPolicy::new(GuessGrid::Distribution { spacing })
        )
        .is_err()
    );
}

#[test]
fn edge_latch_fires_once_until_rearmed() {
    let mut latch = CompletionLatch::new(CompletionTrigger::Edge);

    assert!(!latch.observe(false));
    assert!(latch.observe(true));
    assert!(!latch.observe(true));
    assert!(latch.has_fired());

    assert!(!latch.observe(false));
    assert!(!latch.has_fired());
    assert!(latch.observe(true));

    latch.reset();
    assert!(latch.observe(true));
}

#[test]
fn level_latch_fires_while_complete() {
    let mut latch = CompletionLatch::new(CompletionTrigger::Level);

    assert!(latch.observe(true));
    assert!(latch.observe(true));
    assert!(!latch.observe(false));
    assert_eq!(latch.trigger(), CompletionTrigger::Level);
}

#[test]
fn level_trigger_repeats_reveal_signal_on_state() {
    let reference = ramp(&[0.0, 10.0, 20.0]);
    let bounds = DomainBounds::new(0.0, 20.0, 0.0, 2.0).expect("valid bounds");
    let policy = GuessPolicy::new(GuessGrid::exact_for(&reference).expect("grid"))
        .with_trigger(CompletionTrigger::Level);
    let mut state = GuessState::new(&reference, bounds, policy).expect("state init");

    assert!(state.apply_drag(20.0, 1.0).fire_reveal);
    assert!(state.apply_drag(10.0, 0.5).fire_reveal);
    assert!(state.apply_drag(0.0, 0.1).fire_reveal);
}

#[test]
fn edge_trigger_stays_quiet_after_completion() {
    let reference = ramp(&[0.0, 10.0, 20.0]);
    let bounds = DomainBounds::new(0.0, 20.0, 0.0, 2.0).expect("valid bounds");
    let policy = GuessPolicy::new(GuessGrid::exact_for(&reference).expect("grid"));
    let mut state = GuessState::new(&reference, bounds, policy).expect("state init");

    assert!(!state.apply_drag(10.0, 0.5).fire_reveal);
    assert!(state.apply_drag(20.0, 1.0).fire_reveal);
    assert!(!state.apply_drag(10.0, 0.7).fire_reveal);
    assert!(state.is_complete());
}

#[test]
fn grid_round_trips_through_tagged_json() {
    let json = r#"{"kind":"exact","step":10.0,"rounding":"floor"}"#;
    let grid: GuessGrid = serde_json::from_str(json).expect("grid json");
    assert_eq!(grid.unit(), 10.0);

    let json = r#"{"kind":"distribution","spacing":2.5}"#;
    let grid: GuessGrid = serde_json::from_str(json).expect("grid json");
    assert_eq!(grid, GuessGrid::Distribution { spacing: 2.5 });

    let json = r#"{"kind":"exact","step":1.0}"#;
    assert!(serde_json::from_str::<GuessGrid>(json).is_ok());
}
