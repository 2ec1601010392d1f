use std::time::{Duration, Instant};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    game::Table,
};

pub const DEFAULT_TARGET_WINS: u32 = 3;

fn default_target_wins() -> u32 {
    DEFAULT_TARGET_WINS
}

fn default_progress_interval() -> u32 {
    10_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationInput {
    pub sessions: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_target_wins")]
    pub target_wins: u32,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u32,
}

impl SimulationInput {
    pub fn new(sessions: u32) -> Self {
        SimulationInput {
            sessions,
            seed: None,
            target_wins: DEFAULT_TARGET_WINS,
            progress_interval: default_progress_interval(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub seed: u64,
    pub target_wins: u32,
    /// Rounds each session needed, in the order the sessions ran.
    pub rounds: Vec<u32>,
    pub total_rounds: u64,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(elapsed: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64())
}

impl SimulationResult {
    /// Share of all rounds that were five-card wins.
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            (self.target_wins as u64 * self.rounds.len() as u64) as f64 / self.total_rounds as f64
        }
    }
}

/// Repeat `round` until it has reported `target` wins and return how many
/// rounds that took.
pub fn play_session<F>(target: u32, mut round: F) -> u32
where
    F: FnMut() -> bool,
{
    let mut wins = 0;
    let mut rounds = 0;
    while wins < target {
        wins += u32::from(round());
        rounds += 1;
    }
    rounds
}

pub fn run(input: SimulationInput) -> Result<SimulationResult> {
    run_with_progress(input, |_current, _total| {})
}

pub fn run_with_progress<F>(input: SimulationInput, mut progress_cb: F) -> Result<SimulationResult>
where
    F: FnMut(u32, u32),
{
    if input.target_wins == 0 {
        return Err(Error::InvalidTarget(input.target_wins));
    }
    let seed = input.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let progress_interval = input.progress_interval.max(1);
    log::info!(
        "simulating {} sessions to {} five-card wins (seed {})",
        input.sessions,
        input.target_wins,
        seed
    );

    let mut table = Table::new(SmallRng::seed_from_u64(seed));
    let mut rounds = Vec::with_capacity(input.sessions as usize);
    let start = Instant::now();

    for session_index in 0..input.sessions {
        let taken = table.play_session(input.target_wins);
        log::debug!("session {} took {} rounds", session_index + 1, taken);
        rounds.push(taken);

        let completed = session_index + 1;
        if completed % progress_interval == 0 || completed == input.sessions {
            progress_cb(completed, input.sessions);
        }
    }

    let elapsed = start.elapsed();
    let total_rounds: u64 = rounds.iter().map(|&r| r as u64).sum();
    log::info!(
        "finished {} sessions, {} rounds in {:.2}s",
        rounds.len(),
        total_rounds,
        elapsed.as_secs_f64()
    );

    Ok(SimulationResult {
        seed,
        target_wins: input.target_wins,
        rounds,
        total_rounds,
        elapsed,
    })
}
