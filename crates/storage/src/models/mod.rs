pub mod key;
pub mod leaderboard;
pub mod scenario;
pub mod score;
pub mod submission;

pub use key::{AnswerKey, AnswerValue, FieldRule, KeyField, PenaltyPolicy};
pub use leaderboard::LeaderboardEntry;
pub use scenario::{Round, Scenario};
pub use score::{FieldScore, ScoreResult};
pub use submission::{StoredSubmission, Submission};
