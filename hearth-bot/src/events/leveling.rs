use poise::serenity_prelude as serenity;
use tracing::{info, warn};

use hearth_core::Data;
use hearth_leveling::{LevelUp, RoleTier, award_chat_xp, roll_chat_xp};
use hearth_utils::COMMAND_PREFIX;

/// Award chat experience for an ordinary guild message.
pub async fn handle_message_xp(ctx: &serenity::Context, data: &Data, message: &serenity::Message) {
    // Ignore bots and webhooks.
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    if is_command_like(&message.content) {
        return;
    }

    let amount = roll_chat_xp(&mut rand::rng());
    let level_up = award_chat_xp(&data.store, guild_id.get(), message.author.id.get(), amount).await;

    if let Some(level_up) = level_up {
        celebrate_level_up(ctx, data, &level_up).await;
    }
}

/// Announce a level-up in the configured channel, then grant the tier role.
pub async fn celebrate_level_up(ctx: &serenity::Context, data: &Data, level_up: &LevelUp) {
    let channel_id = serenity::ChannelId::new(data.settings.level_up_channel_id);
    if let Err(source) = channel_id.say(&ctx.http, level_up.announcement()).await {
        warn!(
            ?source,
            channel_id = channel_id.get(),
            "failed to announce level-up"
        );
    }

    let Some(tier) = level_up.tier() else {
        return;
    };

    if let Err(source) = grant_tier_role(&ctx.http, level_up, tier).await {
        warn!(
            ?source,
            member_id = level_up.member_id,
            role = tier.role_name,
            "failed to grant tier role"
        );
    }
}

async fn grant_tier_role(
    http: &serenity::Http,
    level_up: &LevelUp,
    tier: &RoleTier,
) -> anyhow::Result<()> {
    let guild_id = serenity::GuildId::new(level_up.guild_id);
    let roles = guild_id.roles(http).await?;

    let Some(role) = roles.values().find(|role| role.name == tier.role_name) else {
        warn!(
            guild_id = level_up.guild_id,
            role = tier.role_name,
            "tier role does not exist in guild"
        );
        return Ok(());
    };

    let member = guild_id
        .member(http, serenity::UserId::new(level_up.member_id))
        .await?;
    if member.roles.contains(&role.id) {
        return Ok(());
    }

    member.add_role(http, role.id).await?;
    info!(
        member_id = level_up.member_id,
        level = level_up.level,
        role = tier.role_name,
        "tier role granted"
    );

    Ok(())
}

/// Messages that look like command invocations never earn experience.
fn is_command_like(content: &str) -> bool {
    content.starts_with(&[COMMAND_PREFIX, '/'][..])
}
