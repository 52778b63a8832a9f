use poise::CreateReply;
use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::leveling::embeds::leaderboard_description;
use hearth_core::{Context, Error};
use hearth_leveling::{LEADERBOARD_SIZE, top};
use hearth_utils::embed::GOLD_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "leaderboard",
    desc: "Shows the top 10 members by level.",
    category: "leveling",
    usage: "!leaderboard",
};

#[poise::command(
    prefix_command,
    slash_command,
    category = "Leveling",
    aliases("top", "ranking", "toplevel")
)]
pub async fn leaderboard(ctx: Context<'_>) -> Result<(), Error> {
    let records = ctx.data().store.load().await;
    let ranked = top(&records, LEADERBOARD_SIZE);

    let embed = serenity::CreateEmbed::new()
        .title(format!("🏆 Top {} Members", LEADERBOARD_SIZE))
        .color(GOLD_EMBED_COLOR)
        .description(leaderboard_description(&ranked));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
