use tracing::debug;

use hearth_database::impls::members::find_mut;
use hearth_database::{MemberRecord, MemberStore};

use crate::tiers::{RoleTier, resolve_tier};
use crate::xp::{VOICE_XP_PER_TICK, XpSource, apply_xp};

/// A member moved up a level. The caller announces it and grants the tier role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub guild_id: u64,
    pub member_id: u64,
    pub level: u32,
    pub source: XpSource,
}

impl LevelUp {
    pub fn tier(&self) -> Option<&'static RoleTier> {
        resolve_tier(self.source, self.level)
    }

    pub fn announcement(&self) -> String {
        format!(
            "🎊 **<@{}> reached level {} ({})!**",
            self.member_id,
            self.level,
            self.source.label()
        )
    }
}

/// One member seen in a voice channel during a scan tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoicePresence {
    pub guild_id: u64,
    pub member_id: u64,
    pub is_bot: bool,
}

/// Apply a chat gain to a tracked member and persist the store.
///
/// Untracked members are ignored and nothing is written.
pub async fn award_chat_xp(
    store: &MemberStore,
    guild_id: u64,
    member_id: u64,
    amount: u64,
) -> Option<LevelUp> {
    let mut records = store.load().await;

    let Some(record) = find_mut(&mut records, member_id) else {
        debug!(member_id, "chat xp skipped for untracked member");
        return None;
    };

    let level_up = apply_xp(record, amount).map(|level| LevelUp {
        guild_id,
        member_id,
        level,
        source: XpSource::Chat,
    });

    store.save(&records).await;
    level_up
}

/// Grant one tick of voice experience to every eligible presence.
///
/// Returns how many presences were awarded along with the resulting level-ups.
pub fn apply_voice_tick(
    records: &mut [MemberRecord],
    presences: &[VoicePresence],
) -> (usize, Vec<LevelUp>) {
    let mut awarded = 0;
    let mut level_ups = Vec::new();

    for presence in presences.iter().filter(|presence| !presence.is_bot) {
        let Some(record) = find_mut(records, presence.member_id) else {
            continue;
        };

        awarded += 1;
        if let Some(level) = apply_xp(record, VOICE_XP_PER_TICK) {
            level_ups.push(LevelUp {
                guild_id: presence.guild_id,
                member_id: presence.member_id,
                level,
                source: XpSource::Voice,
            });
        }
    }

    (awarded, level_ups)
}

/// Run one voice scan tick against the store: a single load and, when anyone
/// was awarded, a single save.
pub async fn award_voice_presence(
    store: &MemberStore,
    presences: &[VoicePresence],
) -> Vec<LevelUp> {
    let mut records = store.load().await;
    let (awarded, level_ups) = apply_voice_tick(&mut records, presences);

    if awarded > 0 {
        store.save(&records).await;
    }

    debug!(
        seen = presences.len(),
        awarded,
        level_ups = level_ups.len(),
        "voice xp tick processed"
    );

    level_ups
}
