//! Leaderboard runner for the AI prediction battle
//!
//! This crate wires the scoring core to the outside world:
//! - Loading matches, prediction files and the model catalogue from disk
//! - Evaluating tournament bonuses (champion, finalist, group winners)
//! - Persisting and reloading computed rankings
//! - Rendering leaderboards and reports
//!
//! # Usage
//!
//! ```bash
//! # Recompute rankings from data/ and print the board
//! cargo run -p leaderboard -- score
//!
//! # Detailed breakdown for one model
//! cargo run -p leaderboard -- score --model gpt-5.2 --verbose
//!
//! # Export the stored rankings
//! cargo run -p leaderboard -- report --output csv
//! ```

mod board;
mod bonus;
mod config;
mod error;
pub mod logging;
mod report;
mod snapshot;
mod store;

pub use board::*;
pub use bonus::*;
pub use config::*;
pub use error::*;
pub use report::*;
pub use snapshot::*;
pub use store::*;
