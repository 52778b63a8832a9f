//! Experience and leveling rules.
//!
//! Pure rules live in [`xp`], [`tiers`] and [`leaderboard`]; [`awards`] wraps
//! them in the load, mutate, save cycle against the member store and reports
//! the level-ups the caller has to announce.

pub mod awards;
pub mod leaderboard;
pub mod tiers;
pub mod xp;

pub use awards::{LevelUp, VoicePresence, award_chat_xp, award_voice_presence};
pub use leaderboard::{LEADERBOARD_SIZE, top};
pub use tiers::{RoleTier, resolve_tier};
pub use xp::{XpSource, apply_xp, roll_chat_xp};
