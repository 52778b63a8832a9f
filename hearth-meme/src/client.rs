use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_MEME_API_URL: &str = "https://meme-api.com/gimme";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("hearth-bot/", env!("CARGO_PKG_VERSION"));

/// A single post returned by the meme-listing endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meme {
    pub title: String,
    pub url: String,
    pub author: String,
    pub ups: u64,
    pub post_link: Option<String>,
    pub subreddit: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub spoiler: bool,
}

impl Meme {
    /// Whether the image should be hidden behind a spoiler instead of embedded.
    pub fn needs_spoiler(&self) -> bool {
        self.nsfw || self.spoiler
    }
}

#[derive(Clone, Debug)]
pub struct MemeService {
    client: reqwest::Client,
    endpoint: String,
}

impl MemeService {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let endpoint = endpoint.into().trim().to_owned();
        anyhow::ensure!(!endpoint.is_empty(), "meme endpoint must not be empty");

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build meme http client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one random post. Failures are returned once, never retried.
    pub async fn random_meme(&self) -> anyhow::Result<Meme> {
        self.client
            .get(&self.endpoint)
            .send()
            .await
            .context("meme endpoint unreachable")?
            .error_for_status()
            .context("meme endpoint returned an error status")?
            .json::<Meme>()
            .await
            .context("meme endpoint returned an unexpected payload")
    }
}
