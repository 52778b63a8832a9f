use poise::CreateReply;

use crate::utility::embeds::{grouped_help_description, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use hearth_core::{Context, Error};
use hearth_utils::embed::standard_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

#[poise::command(prefix_command, slash_command, category = "Utility", aliases("pomoc"))]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Only show this category"] category: Option<String>,
) -> Result<(), Error> {
    let category = category
        .as_deref()
        .map(|raw| raw.trim().to_ascii_lowercase())
        .filter(|raw| !raw.is_empty());

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        ctx.say(unknown_category_message(wanted_category, &categories)).await?;
        return Ok(());
    }

    let commands = sorted_commands(category.as_deref());
    let embed = standard_embed("Available Commands", grouped_help_description(&commands));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::sorted_commands;

    #[test]
    fn commands_sorted_by_category_then_name() {
        let names: Vec<_> = sorted_commands(None)
            .iter()
            .map(|cmd| (cmd.category, cmd.name))
            .collect();

        let mut expected = names.clone();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let fun = sorted_commands(Some("fun"));

        assert!(!fun.is_empty());
        assert!(fun.iter().all(|cmd| cmd.category == "fun"));
    }
}
