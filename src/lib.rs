//! Monte Carlo estimate of how many Blackjack rounds it takes to collect three
//! five-card wins.

pub mod cli;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod plot;
pub mod sim;
pub mod stats;

pub use error::{Error, Result};
pub use game::{Resolution, RoundResult, Table};
pub use sim::{play_session, run, run_with_progress, SimulationInput, SimulationResult};
pub use stats::{Histogram, Summary};
