use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x34_98_DB;
/// Leaderboard accent.
pub const GOLD_EMBED_COLOR: u32 = 0xF1_C4_0F;
/// Finished-game accents.
pub const SUCCESS_EMBED_COLOR: u32 = 0x2E_CC_71;
pub const FAILURE_EMBED_COLOR: u32 = 0xE7_4C_3C;

/// Build an embed with the standard color, title and description.
pub fn standard_embed(
    title: impl Into<String>,
    description: impl Into<String>,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
}

/// Build a standard embed whose header shows an icon next to the title.
pub fn embed_with_author_icon(
    title: &str,
    description: impl Into<String>,
    icon_url: Option<&str>,
) -> serenity::CreateEmbed {
    let builder = serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    match icon_url {
        Some(url) => builder.author(serenity::CreateEmbedAuthor::new(title).icon_url(url)),
        None => builder.title(title.to_owned()),
    }
}
