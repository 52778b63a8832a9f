pub mod embeds;
pub mod leaderboard;
pub mod profile;
