use std::time::{Duration, Instant};

use poise::serenity_prelude as serenity;
use tokio::time::interval;

use hearth_utils::formatting::format_uptime;

const PRESENCE_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Keep the bot's activity showing how long it has been online.
pub async fn run_presence_loop(ctx: serenity::Context, started_at: Instant) {
    let mut ticker = interval(PRESENCE_REFRESH_INTERVAL);

    loop {
        ticker.tick().await;

        let uptime = format_uptime(started_at.elapsed().as_secs());
        ctx.set_activity(Some(serenity::ActivityData::playing(format!(
            "Online for: {}",
            uptime
        ))));
    }
}
