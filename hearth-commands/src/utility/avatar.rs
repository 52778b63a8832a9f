use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use hearth_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "avatar",
    desc: "Shows a member's avatar.",
    category: "utility",
    usage: "!avatar [member]",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "Member to show (defaults to you)"] member: Option<serenity::User>,
) -> Result<(), Error> {
    let target = member.as_ref().unwrap_or_else(|| ctx.author());

    ctx.say(format!("**{}'s avatar:**\n{}", target.name, target.face()))
        .await?;
    Ok(())
}
