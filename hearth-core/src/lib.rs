pub mod config;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use hearth_database::MemberStore;
use hearth_meme::MemeService;

pub use config::{BotConfig, Settings};

pub type Error = anyhow::Error;

/// Application context handed to every command and event handler.
#[derive(Clone, Debug)]
pub struct Data {
    pub store: MemberStore,
    pub meme: Option<MemeService>,
    pub settings: Settings,
    pub started_at: Instant,
    background_started: Arc<AtomicBool>,
}

impl Data {
    pub fn new(store: MemberStore, meme: Option<MemeService>, settings: Settings) -> Self {
        Self {
            store,
            meme,
            settings,
            started_at: Instant::now(),
            background_started: Arc::default(),
        }
    }

    /// Returns `true` exactly once per process; later callers must not start
    /// the background loops again.
    pub fn claim_background_start(&self) -> bool {
        !self.background_started.swap(true, Ordering::SeqCst)
    }
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
