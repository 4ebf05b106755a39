use pursuit_simulator::controller::Gains;
use pursuit_simulator::fitness::{evaluate_with, run_episode, EpisodeConfig};
use pursuit_simulator::scenario::EvaderBehavior;
use test_log::test;

/// Gains known to capture all three evader behaviors.
const REFERENCE_GAINS: Gains = Gains::new(-0.08, 0.0, -0.75);

#[test]
fn test_reference_gains_capture_every_behavior() {
    let config = EpisodeConfig::default();
    for (k, behavior) in [
        EvaderBehavior::Drift,
        EvaderBehavior::Flee,
        EvaderBehavior::Orbit,
    ]
    .into_iter()
    .enumerate()
    {
        let outcome = run_episode(REFERENCE_GAINS, behavior, k as u32, &config);
        log::info!("{behavior:?}: {} ticks", outcome.ticks);
        assert!(
            outcome.captured,
            "{behavior:?} evader escaped after {} ticks (score {:.2})",
            outcome.ticks, outcome.score
        );
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let config = EpisodeConfig::default();
    let a = evaluate_with(REFERENCE_GAINS, 6, &config);
    let b = evaluate_with(REFERENCE_GAINS, 6, &config);
    assert_eq!(a, b);
}

#[test]
fn test_behaviors_cycle_by_index() {
    assert_eq!(EvaderBehavior::from_index(0), EvaderBehavior::Drift);
    assert_eq!(EvaderBehavior::from_index(1), EvaderBehavior::Flee);
    assert_eq!(EvaderBehavior::from_index(2), EvaderBehavior::Orbit);
    assert_eq!(EvaderBehavior::from_index(3), EvaderBehavior::Drift);
}

#[test]
fn test_reference_gains_beat_unstable_gains() {
    // Positive proportional feedback pushes the pursuer away from the
    // evader, so every episode times out and draws the penalty.
    let config = EpisodeConfig {
        max_time: 1000.0,
        ..EpisodeConfig::default()
    };
    let good = evaluate_with(REFERENCE_GAINS, 3, &config);
    let bad = evaluate_with(Gains::new(0.08, 0.0, 0.0), 3, &config);
    assert!(
        good < bad,
        "reference gains scored {good}, unstable gains {bad}"
    );
}

#[test]
fn test_timed_out_episode_reports_budget() {
    let config = EpisodeConfig {
        max_time: 10.0,
        ..EpisodeConfig::default()
    };
    // Ten simulated seconds is far too short to accumulate the target
    // score from 1000 units away.
    let outcome = run_episode(REFERENCE_GAINS, EvaderBehavior::Drift, 0, &config);
    assert!(!outcome.captured);
    assert_eq!(outcome.ticks, (config.max_time / config.dt) as u64);
    assert!(outcome.score < config.target_score);
}
