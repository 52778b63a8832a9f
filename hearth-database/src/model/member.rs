use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Sentinel stored when the platform did not report a join time.
pub const UNKNOWN_JOIN_DATE: &str = "Unknown";

const JOIN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One tracked guild member, as persisted in the store document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: u64,
    pub username: String,
    pub joined_date: String,
    pub avatar: Option<String>,
    pub exp: u64,
    pub level: u32,
    pub is_bot: bool,
    pub has_admin_permissions: bool,
}

/// What the platform tells us about a member at the moment we first see them.
#[derive(Clone, Debug, Default)]
pub struct MemberSnapshot {
    pub id: u64,
    pub username: String,
    pub joined_at_unix: Option<i64>,
    pub avatar: Option<String>,
    pub is_bot: bool,
    pub has_admin_permissions: bool,
}

impl MemberRecord {
    /// Fresh record at level 1 with no experience.
    pub fn new(snapshot: &MemberSnapshot) -> Self {
        Self {
            id: snapshot.id,
            username: snapshot.username.clone(),
            joined_date: format_join_date(snapshot.joined_at_unix),
            avatar: snapshot.avatar.clone(),
            exp: 0,
            level: 1,
            is_bot: snapshot.is_bot,
            has_admin_permissions: snapshot.has_admin_permissions,
        }
    }

    /// Experience required to leave the current level.
    pub fn exp_threshold(&self) -> u64 {
        u64::from(self.level) * 100
    }
}

fn format_join_date(joined_at_unix: Option<i64>) -> String {
    joined_at_unix
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|joined| joined.format(JOIN_DATE_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_JOIN_DATE.to_owned())
}
