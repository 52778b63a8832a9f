use poise::CreateReply;
use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::CommandMeta;
use hearth_core::{Context, Error};
use hearth_meme::Meme;
use hearth_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "meme",
    desc: "Fetches a random meme.",
    category: "fun",
    usage: "!meme",
};

const EMBED_TITLE_LIMIT: usize = 256;

#[poise::command(prefix_command, slash_command, category = "Fun")]
pub async fn meme(ctx: Context<'_>) -> Result<(), Error> {
    let Some(service) = ctx.data().meme.as_ref() else {
        ctx.say("Memes are turned off on this bot.").await?;
        return Ok(());
    };

    ctx.defer().await?;

    let meme = match service.random_meme().await {
        Ok(meme) => meme,
        Err(source) => {
            warn!(?source, endpoint = service.endpoint(), "meme fetch failed");
            ctx.say("Couldn't fetch a meme right now. Try again later.").await?;
            return Ok(());
        }
    };

    ctx.send(CreateReply::default().embed(meme_embed(&meme))).await?;
    Ok(())
}

fn meme_embed(meme: &Meme) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(truncate_title(&meme.title))
        .color(DEFAULT_EMBED_COLOR)
        .footer(serenity::CreateEmbedFooter::new(meme_footer(meme)));

    if let Some(link) = meme.post_link.as_deref() {
        embed = embed.url(link);
    }

    if meme.needs_spoiler() {
        embed.description(format!("Marked sensitive: ||{}||", meme.url))
    } else {
        embed.image(meme.url.clone())
    }
}

fn meme_footer(meme: &Meme) -> String {
    let mut parts = vec![format!("👍 {}", meme.ups), format!("u/{}", meme.author)];
    if let Some(subreddit) = meme.subreddit.as_deref() {
        parts.push(format!("r/{}", subreddit));
    }
    parts.join(" • ")
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() <= EMBED_TITLE_LIMIT {
        return title.to_owned();
    }

    let mut truncated: String = title.chars().take(EMBED_TITLE_LIMIT - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::{EMBED_TITLE_LIMIT, meme_footer, truncate_title};
    use hearth_meme::Meme;

    fn meme(subreddit: Option<&str>) -> Meme {
        Meme {
            title: "title".to_owned(),
            url: "https://i.example/m.png".to_owned(),
            author: "poster".to_owned(),
            ups: 321,
            post_link: None,
            subreddit: subreddit.map(str::to_owned),
            nsfw: false,
            spoiler: false,
        }
    }

    #[test]
    fn footer_lists_votes_author_and_subreddit() {
        assert_eq!(meme_footer(&meme(Some("memes"))), "👍 321 • u/poster • r/memes");
        assert_eq!(meme_footer(&meme(None)), "👍 321 • u/poster");
    }

    #[test]
    fn long_titles_are_truncated_to_the_embed_limit() {
        let long = "x".repeat(400);
        let truncated = truncate_title(&long);

        assert_eq!(truncated.chars().count(), EMBED_TITLE_LIMIT);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_title("short"), "short");
    }
}
