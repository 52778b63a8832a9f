mod events;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use hearth_core::{BotConfig, Data, Error};
use hearth_database::MemberStore;
use hearth_meme::MemeService;
use hearth_utils::COMMAND_PREFIX;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;

    let store = MemberStore::json_file(&config.store_path);
    info!(path = %config.store_path.display(), "Member store configured.");

    let meme = if config.meme_enabled {
        let service = MemeService::new(config.meme_api_url.clone())?;
        info!(endpoint = service.endpoint(), "Meme command enabled.");
        Some(service)
    } else {
        info!("Meme command disabled (MEME_ENABLED=false).");
        None
    };

    info!(
        level_up_channel_id = config.settings.level_up_channel_id,
        voice_xp_interval_seconds = config.settings.voice_xp_interval.as_secs(),
        "Leveling configured."
    );

    let data = Data::new(store, meme, config.settings.clone());
    let guild_id = config.guild_id;

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_VOICE_STATES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: hearth_commands::commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                case_insensitive_commands: true,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Hearth is lit!");

                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                    }
                }

                Ok(data)
            })
        })
        .build();

    info!("Hearth is connecting...");

    let mut client = serenity::ClientBuilder::new(config.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, command = %ctx.command().qualified_name, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(hearth_utils::embed::FAILURE_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = format!("Usage: `{}{}`", COMMAND_PREFIX, ctx.command().qualified_name);
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\n{}", input, usage)
            } else {
                format!("Missing required argument.\n{}", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                user = %data_about_bot.user.name,
                guilds = data_about_bot.guilds.len(),
                "Gateway ready."
            );
            events::start_background_loops(ctx, data);
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            events::members::sync_guild_members(ctx, data, guild).await;
        }
        serenity::FullEvent::GuildMemberAddition { new_member } => {
            events::members::track_new_member(ctx, data, new_member).await;
        }
        serenity::FullEvent::Message { new_message } => {
            events::leveling::handle_message_xp(ctx, data, new_message).await;
        }
        _ => {}
    }

    Ok(())
}
