use crate::xp::XpSource;

/// A level threshold that grants a guild role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleTier {
    pub min_level: u32,
    pub role_name: &'static str,
}

const fn tier(min_level: u32, role_name: &'static str) -> RoleTier {
    RoleTier {
        min_level,
        role_name,
    }
}

const LEVEL_5: RoleTier = tier(5, "Level 5👷");
const LEVEL_10: RoleTier = tier(10, "Level 10👷‍♂️");
const LEVEL_15: RoleTier = tier(15, "Level 15💪");
const LEVEL_20: RoleTier = tier(20, "Level 20💗");
const LEVEL_25: RoleTier = tier(25, "Level 25🔨");
const LEVEL_30: RoleTier = tier(30, "Level 30👨‍💻");
const LEVEL_35: RoleTier = tier(35, "Level 35🤠");
const LEVEL_40: RoleTier = tier(40, "Level 40🧢");
const LEVEL_50: RoleTier = tier(50, "Level 50⛏️");

/// Voice activity climbs a denser ladder than chat. Both sorted ascending.
pub const VOICE_TIERS: &[RoleTier] = &[
    LEVEL_5, LEVEL_10, LEVEL_15, LEVEL_20, LEVEL_25, LEVEL_30, LEVEL_35, LEVEL_40, LEVEL_50,
];
pub const CHAT_TIERS: &[RoleTier] = &[LEVEL_5, LEVEL_10, LEVEL_20, LEVEL_30, LEVEL_40, LEVEL_50];

pub fn tiers_for(source: XpSource) -> &'static [RoleTier] {
    match source {
        XpSource::Chat => CHAT_TIERS,
        XpSource::Voice => VOICE_TIERS,
    }
}

/// Highest tier of the source's ladder the level qualifies for.
pub fn resolve_tier(source: XpSource, level: u32) -> Option<&'static RoleTier> {
    tiers_for(source)
        .iter()
        .rev()
        .find(|tier| level >= tier.min_level)
}
