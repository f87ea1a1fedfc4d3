pub mod compare;
pub mod dashboard;
pub mod distribution;
pub mod highlights;
pub mod insights;
pub mod leaderboard;
pub mod trends;
