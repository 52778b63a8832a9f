pub mod fun;
pub mod leveling;
pub mod moderation;
pub mod utility;

use hearth_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::avatar::META,
    leveling::profile::META,
    leveling::leaderboard::META,
    fun::minesweeper::META,
    fun::scramble::META,
    fun::meme::META,
    moderation::clear::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::help::help(),
        utility::avatar::avatar(),
        leveling::profile::profile(),
        leveling::leaderboard::leaderboard(),
        fun::minesweeper::minesweeper(),
        fun::scramble::scramble(),
        fun::meme::meme(),
        moderation::clear::clear(),
    ]
}

#[cfg(test)]
mod tests {
    use super::{COMMANDS, commands};

    #[test]
    fn every_registered_command_has_metadata() {
        let registered = commands();
        assert_eq!(registered.len(), COMMANDS.len());

        for command in &registered {
            assert!(
                COMMANDS.iter().any(|meta| meta.name == command.name),
                "missing metadata for `{}`",
                command.name
            );
        }
    }

    #[test]
    fn usage_lines_start_with_the_command_name() {
        for meta in COMMANDS {
            assert!(meta.usage.starts_with(&format!("!{}", meta.name)));
        }
    }
}
