use crate::domain::model::{CourseParProfile, PlayerRound, ScoreSubmission};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backing store for courses and score rows. Location lookups are
/// case-insensitive and ignore surrounding whitespace.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn find_course(&self, location: &str) -> Result<Option<CourseParProfile>>;
    async fn list_courses(&self) -> Result<Vec<CourseParProfile>>;
    /// Rounds in fetch order.
    async fn rounds_for(&self, location: &str) -> Result<Vec<PlayerRound>>;
    async fn append_round(&self, submission: &ScoreSubmission) -> Result<()>;
    async fn append_course(&self, course: &CourseParProfile) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn courses_path(&self) -> &str;
    fn scores_path(&self) -> &str;
    fn seed(&self) -> Option<u64>;
}
