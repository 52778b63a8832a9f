/// Format an uptime as days, hours and minutes (e.g. `2d 3h 15m`).
///
/// Seconds are dropped; anything under a minute reads `just now`.
pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }

    if parts.is_empty() {
        return "just now".to_owned();
    }

    parts.join(" ")
}

/// Medal for the podium, bold ordinal for everyone else.
pub fn rank_marker(rank: usize) -> String {
    match rank {
        1 => "🥇".to_owned(),
        2 => "🥈".to_owned(),
        3 => "🥉".to_owned(),
        other => format!("**{}.**", other),
    }
}

/// Break user mentions so echoed text cannot ping anyone.
pub fn neutralize_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}
