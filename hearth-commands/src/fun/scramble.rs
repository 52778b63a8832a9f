use rand::Rng;
use rand::seq::SliceRandom;

use crate::CommandMeta;
use hearth_core::{Context, Error};
use hearth_utils::formatting::neutralize_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "scramble",
    desc: "Shuffles the given words into a random order.",
    category: "fun",
    usage: "!scramble <words...>",
};

#[poise::command(prefix_command, slash_command, category = "Fun", aliases("rozsypanka"))]
pub async fn scramble(
    ctx: Context<'_>,
    #[rest]
    #[description = "Words to shuffle"]
    words: Option<String>,
) -> Result<(), Error> {
    let words: Vec<&str> = words.as_deref().unwrap_or_default().split_whitespace().collect();

    if words.is_empty() {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    }

    let scrambled = scramble_words(&words, &mut rand::rng());
    ctx.say(format!("**{}**", neutralize_mentions(&scrambled)))
        .await?;
    Ok(())
}

pub fn scramble_words(words: &[&str], rng: &mut impl Rng) -> String {
    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);
    shuffled.join(" ")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::scramble_words;

    #[test]
    fn keeps_every_word_exactly_once() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
        let mut rng = StdRng::seed_from_u64(3);

        let scrambled = scramble_words(&words, &mut rng);

        let mut got: Vec<&str> = scrambled.split(' ').collect();
        let mut expected = words.to_vec();
        got.sort_unstable();
        expected.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn single_word_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scramble_words(&["solo"], &mut rng), "solo");
    }
}
