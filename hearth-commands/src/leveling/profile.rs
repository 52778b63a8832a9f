use poise::CreateReply;
use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::leveling::embeds::{profile_description, profile_title};
use hearth_core::{Context, Error};
use hearth_database::impls::members::find;
use hearth_utils::embed::embed_with_author_icon;

pub const META: CommandMeta = CommandMeta {
    name: "profile",
    desc: "Shows a member's level and experience.",
    category: "leveling",
    usage: "!profile [member]",
};

#[poise::command(prefix_command, slash_command, category = "Leveling", aliases("profil"))]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "Member to look up (defaults to you)"] member: Option<serenity::User>,
) -> Result<(), Error> {
    let target = member.as_ref().unwrap_or_else(|| ctx.author());
    let records = ctx.data().store.load().await;

    let Some(record) = find(&records, target.id.get()) else {
        ctx.say(format!(
            "**{}** has no profile yet. Profiles are created when members join.",
            target.name
        ))
        .await?;
        return Ok(());
    };

    let icon_url = record.avatar.clone().unwrap_or_else(|| target.face());
    let embed = embed_with_author_icon(
        &profile_title(record),
        profile_description(record),
        Some(&icon_url),
    );

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
