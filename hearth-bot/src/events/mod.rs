pub mod leveling;
pub mod members;
pub mod presence;
pub mod voice;

use poise::serenity_prelude as serenity;
use tracing::{debug, info};

use hearth_core::Data;

/// Spawn the voice experience and presence loops, at most once per process.
pub fn start_background_loops(ctx: &serenity::Context, data: &Data) {
    if !data.claim_background_start() {
        debug!("background loops already running");
        return;
    }

    tokio::spawn(voice::run_voice_xp_loop(ctx.clone(), data.clone()));
    tokio::spawn(presence::run_presence_loop(ctx.clone(), data.started_at));

    info!(
        voice_xp_interval_seconds = data.settings.voice_xp_interval.as_secs(),
        "Background loops started."
    );
}
