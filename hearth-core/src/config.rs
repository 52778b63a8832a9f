use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;

use hearth_meme::DEFAULT_MEME_API_URL;

pub const DEFAULT_LEVEL_UP_CHANNEL_ID: u64 = 1_459_662_203_102_957_645;
pub const DEFAULT_STORE_PATH: &str = "data/data.json";
pub const DEFAULT_VOICE_XP_INTERVAL_SECS: u64 = 90;

/// Runtime knobs that handlers read from [`crate::Data`].
#[derive(Clone, Debug)]
pub struct Settings {
    pub level_up_channel_id: u64,
    pub voice_xp_interval: Duration,
    pub clear_role_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_up_channel_id: DEFAULT_LEVEL_UP_CHANNEL_ID,
            voice_xp_interval: Duration::from_secs(DEFAULT_VOICE_XP_INTERVAL_SECS),
            clear_role_name: None,
        }
    }
}

/// Everything the bot reads from its environment at startup.
#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    pub guild_id: Option<u64>,
    pub store_path: PathBuf,
    pub meme_enabled: bool,
    pub meme_api_url: String,
    pub settings: Settings,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("store_path", &self.store_path)
            .field("meme_enabled", &self.meme_enabled)
            .field("meme_api_url", &self.meme_api_url)
            .field("settings", &self.settings)
            .finish()
    }
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Only `DISCORD_TOKEN` is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let token = value("DISCORD_TOKEN").context(
            "DISCORD_TOKEN is not set; add it to the environment or a .env file",
        )?;

        let guild_id = value("DISCORD_GUILD_ID")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("DISCORD_GUILD_ID must be a numeric guild id")?;

        let level_up_channel_id = value("LEVEL_UP_CHANNEL_ID")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("LEVEL_UP_CHANNEL_ID must be a numeric channel id")?
            .unwrap_or(DEFAULT_LEVEL_UP_CHANNEL_ID);

        let voice_xp_interval_secs = value("VOICE_XP_INTERVAL_SECONDS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_VOICE_XP_INTERVAL_SECS);

        Ok(Self {
            token,
            guild_id,
            store_path: value("MEMBER_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            meme_enabled: value("MEME_ENABLED").is_none_or(|raw| is_truthy(&raw)),
            meme_api_url: value("MEME_API_URL").unwrap_or_else(|| DEFAULT_MEME_API_URL.to_owned()),
            settings: Settings {
                level_up_channel_id,
                voice_xp_interval: Duration::from_secs(voice_xp_interval_secs),
                clear_role_name: value("CLEAR_ROLE_NAME"),
            },
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
