use tokio::time::{Duration, sleep};
use tracing::{error, warn};

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use hearth_core::{Context, Error};
use hearth_utils::permissions::resolve_member_access;

pub const META: CommandMeta = CommandMeta {
    name: "clear",
    desc: "Delete the latest messages in this channel.",
    category: "moderation",
    usage: "!clear <amount>",
};

const MAX_CLEAR: u16 = 100;
const CONFIRMATION_LIFETIME: Duration = Duration::from_millis(1500);

#[poise::command(prefix_command, slash_command, category = "Moderation", aliases("purge"))]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Amount of messages to delete"] amount: Option<u16>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command only works in servers.").await?;
        return Ok(());
    };

    let Some(requested) = amount else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    if requested == 0 {
        ctx.say("Amount must be at least 1.").await?;
        return Ok(());
    }

    let access = resolve_member_access(ctx.http(), guild_id, ctx.author().id).await?;
    let privileged_role = ctx.data().settings.clear_role_name.as_deref();
    if !access.allows(serenity::Permissions::MANAGE_MESSAGES, privileged_role) {
        ctx.say("You are not permitted to use this command.").await?;
        return Ok(());
    }

    let channel_id = ctx.channel_id();
    let mut request = serenity::GetMessages::new().limit(clear_limit(requested));

    // Prefix invocations remove the command message on its own, outside the cap.
    if let poise::Context::Prefix(prefix_ctx) = ctx {
        if let Err(source) = prefix_ctx.msg.delete(ctx.http()).await {
            warn!(?source, "failed to delete clear invocation");
        }
        request = request.before(prefix_ctx.msg.id);
    }

    let messages = channel_id.messages(ctx.http(), request).await?;
    let ids: Vec<serenity::MessageId> = messages.into_iter().map(|message| message.id).collect();

    if ids.is_empty() {
        ctx.say("No messages found to delete.").await?;
        return Ok(());
    }

    let deleted_count = ids.len();

    let delete_result = if ids.len() == 1 {
        channel_id.delete_message(ctx.http(), ids[0]).await
    } else {
        channel_id.delete_messages(ctx.http(), ids).await
    };

    if let Err(source) = delete_result {
        error!(?source, "clear delete request failed");
        ctx.say(
            "I couldn't delete messages. I need the 'Manage Messages' permission, \
             and messages older than 14 days can't be bulk deleted.",
        )
        .await?;
        return Ok(());
    }

    let confirmation = ctx
        .say(format!("**Deleted {} message(s).**", deleted_count))
        .await?;

    sleep(CONFIRMATION_LIFETIME).await;
    let _ = confirmation.delete(ctx).await;

    Ok(())
}

/// Messages fetched for one request, capped at Discord's bulk delete limit.
fn clear_limit(requested: u16) -> u8 {
    requested.min(MAX_CLEAR) as u8
}

#[cfg(test)]
mod tests {
    use super::{MAX_CLEAR, clear_limit};

    #[test]
    fn full_cap_is_available_to_every_invocation() {
        assert_eq!(clear_limit(1), 1);
        assert_eq!(clear_limit(MAX_CLEAR), 100);
        assert_eq!(clear_limit(250), 100);
        assert_eq!(clear_limit(u16::MAX), 100);
    }
}
