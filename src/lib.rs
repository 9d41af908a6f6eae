pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{CsvRoundStore, MemoryRoundStore};
pub use config::{Settings, TomlConfig};
pub use core::{
    calculator::compute_rankings,
    engine::RankingEngine,
    report::{render, OutputFormat},
};
pub use domain::model::{
    CourseParProfile, ExclusionMask, PlayerRound, RankingEntry, RankingGroup, RankingReport,
    ScoreSubmission,
};
pub use utils::error::{RankingError, Result};
