//! Fitness evaluation for pursuit-controller gains: the boundary handed to
//! an external optimizer. Each call is deterministic for a given gain triple
//! and touches no shared state, so independent evaluations may run on
//! separate threads.

use crate::controller::{Gains, MotionController};
use crate::rng::new_rng;
use crate::scenario::{random_ship, EvaderBehavior};
use crate::ship::Ship;

/// Multiplier charged against episodes that exhaust the tick budget without
/// reaching the target score.
pub const TIMEOUT_PENALTY: f64 = 1000.0;

const DEFAULT_EPISODES: u32 = 30;

/// Fixed parameters shared by every episode in one evaluation.
#[derive(Copy, Clone, Debug)]
pub struct EpisodeConfig {
    /// Timestep shared by the controller and both integrators.
    pub dt: f64,
    /// Pursuer's per-update delta-v budget (1-norm).
    pub delta_v: f64,
    /// Acceleration magnitude available to the evader's steering law.
    pub evader_accel: f64,
    /// Separation below which the pursuer scores at the full rate.
    pub capture_distance: f64,
    /// Accumulated score that ends an episode successfully.
    pub target_score: f64,
    /// Wall-clock bound on one episode; the tick budget is `max_time / dt`.
    pub max_time: f64,
    /// Extent of the evader's random starting position, per component.
    pub position_range: f64,
    /// Extent of the evader's random starting velocity, per component.
    pub velocity_range: f64,
}

impl Default for EpisodeConfig {
    fn default() -> EpisodeConfig {
        EpisodeConfig {
            dt: 0.1,
            delta_v: 5.0,
            evader_accel: 1.0,
            capture_distance: 1.0,
            target_score: 10.0,
            max_time: 10_000.0,
            position_range: 1000.0,
            velocity_range: 5.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct EpisodeOutcome {
    pub ticks: u64,
    pub score: f64,
    pub captured: bool,
}

/// Run one pursuit episode: a fresh pursuer at the origin with a fresh
/// controller, against an evader placed by the seeded RNG.
///
/// Tick order is fixed: the evader steers, the controller commands the
/// pursuer from the evader's current position, then both ships integrate.
/// Score accrues `dt` per tick inside `capture_distance`, else
/// `dt / separation`.
pub fn run_episode(
    gains: Gains,
    behavior: EvaderBehavior,
    seed: u32,
    config: &EpisodeConfig,
) -> EpisodeOutcome {
    let mut rng = new_rng(seed);
    let mut pursuer = Ship::default();
    let mut controller = MotionController::new(gains, config.delta_v, config.dt);
    let mut evader = random_ship(&mut rng, config.position_range, config.velocity_range);
    let max_ticks = (config.max_time / config.dt) as u64;

    let mut score = 0.0;
    let mut ticks = 0;
    while score < config.target_score {
        if ticks >= max_ticks {
            return EpisodeOutcome {
                ticks,
                score,
                captured: false,
            };
        }
        behavior.steer(&mut evader, &pursuer, config.evader_accel);
        pursuer.acceleration = controller.update(pursuer.position, evader.position);
        evader.advance(config.dt);
        pursuer.advance(config.dt);
        ticks += 1;

        let separation = pursuer.distance(&evader);
        score += if separation < config.capture_distance {
            config.dt
        } else {
            config.dt / separation
        };
    }
    EpisodeOutcome {
        ticks,
        score,
        captured: true,
    }
}

/// Score a candidate gain triple over the default batch of episodes.
/// Lower is better: the value is total ticks spent across episodes, with
/// timed-out episodes multiplied by [`TIMEOUT_PENALTY`].
pub fn evaluate(gains: Gains) -> f64 {
    evaluate_with(gains, DEFAULT_EPISODES, &EpisodeConfig::default())
}

/// [`evaluate`] with an explicit episode count and configuration. Behaviors
/// cycle drift/flee/orbit by episode index, and each episode is seeded by
/// its index, so repeated calls with the same gains return the same score.
pub fn evaluate_with(gains: Gains, episodes: u32, config: &EpisodeConfig) -> f64 {
    let mut total = 0.0;
    for k in 0..episodes {
        let behavior = EvaderBehavior::from_index(k as usize);
        let outcome = run_episode(gains, behavior, k, config);
        log::debug!(
            "episode {} ({:?}): {} ticks, score {:.2}, captured {}",
            k,
            behavior,
            outcome.ticks,
            outcome.score,
            outcome.captured
        );
        total += if outcome.captured {
            outcome.ticks as f64
        } else {
            outcome.ticks as f64 * TIMEOUT_PENALTY
        };
    }
    log::info!("gains {:?} scored {}", gains, total);
    total
}
