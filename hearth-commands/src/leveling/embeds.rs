use hearth_database::MemberRecord;
use hearth_utils::formatting::rank_marker;

pub fn profile_title(record: &MemberRecord) -> String {
    format!("Player Profile: {}", record.username)
}

pub fn profile_description(record: &MemberRecord) -> String {
    format!(
        "**Level :** `{}`\n**EXP :** `{}/{}`\n**ID :** `{}`\n**Joined :** {}",
        record.level,
        record.exp,
        record.exp_threshold(),
        record.id,
        record.joined_date
    )
}

pub fn leaderboard_description(ranked: &[&MemberRecord]) -> String {
    if ranked.is_empty() {
        return "No data yet.".to_owned();
    }

    ranked
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            format!(
                "{} **{}** - Level: `{}` (XP: `{}`)",
                rank_marker(idx + 1),
                record.username,
                record.level,
                record.exp
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
