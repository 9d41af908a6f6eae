pub mod calculator;
pub mod differential;
pub mod engine;
pub mod handicap;
pub mod randomizer;
pub mod ranking;
pub mod report;

pub use crate::domain::model::{
    CourseParProfile, ExclusionMask, PlayerRound, RankingEntry, RankingGroup, RankingReport,
};
pub use crate::domain::ports::{ConfigProvider, RoundStore};
pub use crate::utils::error::Result;
