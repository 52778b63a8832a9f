use std::collections::HashMap;

use poise::serenity_prelude as serenity;
use tokio::time::{MissedTickBehavior, interval};

use hearth_core::Data;
use hearth_leveling::{VoicePresence, award_voice_presence};

use super::leveling::celebrate_level_up;

/// Periodically award voice experience to everyone connected to a voice channel.
pub async fn run_voice_xp_loop(ctx: serenity::Context, data: Data) {
    let mut ticker = interval(data.settings.voice_xp_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let presences = collect_voice_presences(&ctx.cache);
        if presences.is_empty() {
            continue;
        }

        for level_up in award_voice_presence(&data.store, &presences).await {
            celebrate_level_up(&ctx, &data, &level_up).await;
        }
    }
}

/// Snapshot voice states from the cache. Cache guards are not held across awaits.
fn collect_voice_presences(cache: &serenity::Cache) -> Vec<VoicePresence> {
    cache
        .guilds()
        .into_iter()
        .filter_map(|guild_id| cache.guild(guild_id))
        .flat_map(|guild| voice_presences(guild.id, &guild.voice_states, &guild.members))
        .collect()
}

/// Members connected to a voice channel, with bot status taken from the guild
/// member list or, failing that, the member attached to the voice state.
fn voice_presences(
    guild_id: serenity::GuildId,
    voice_states: &HashMap<serenity::UserId, serenity::VoiceState>,
    members: &HashMap<serenity::UserId, serenity::Member>,
) -> Vec<VoicePresence> {
    voice_states
        .iter()
        .filter(|(_, state)| state.channel_id.is_some())
        .map(|(user_id, state)| {
            let is_bot = members
                .get(user_id)
                .or(state.member.as_ref())
                .is_some_and(|member| member.user.bot);

            VoicePresence {
                guild_id: guild_id.get(),
                member_id: user_id.get(),
                is_bot,
            }
        })
        .collect()
}
