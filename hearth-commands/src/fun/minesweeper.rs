use std::time::Instant;

use anyhow::Context as _;
use poise::CreateReply;
use poise::serenity_prelude as serenity;
use tracing::debug;

use crate::CommandMeta;
use hearth_core::{Context, Error};
use hearth_games::minesweeper::{CELL_COUNT, GRID_SIZE};
use hearth_games::{CellView, GameStatus, Minesweeper, Reveal};
use hearth_utils::embed::{DEFAULT_EMBED_COLOR, FAILURE_EMBED_COLOR, SUCCESS_EMBED_COLOR};

pub const META: CommandMeta = CommandMeta {
    name: "minesweeper",
    desc: "Play a quick 3x3 game of minesweeper.",
    category: "fun",
    usage: "!minesweeper",
};

#[poise::command(prefix_command, slash_command, category = "Fun", aliases("saper"))]
pub async fn minesweeper(ctx: Context<'_>) -> Result<(), Error> {
    let mut game = Minesweeper::new(ctx.author().id.get(), &mut rand::rng(), Instant::now());

    let cell_prefix = format!("{}_cell_", ctx.id());

    let reply = ctx
        .send(
            CreateReply::default()
                .embed(game_embed(&game))
                .components(board_components(&game, &cell_prefix, false)),
        )
        .await?;

    let message = reply
        .message()
        .await
        .context("minesweeper board message is unavailable")?;
    let message_id = message.id;
    let channel_id = message.channel_id;

    while !game.is_finished() {
        let Some(press) = serenity::collector::ComponentInteractionCollector::new(ctx)
            .filter({
                let cell_prefix = cell_prefix.clone();
                move |interaction| {
                    interaction.message.id == message_id
                        && interaction.data.custom_id.starts_with(&cell_prefix)
                }
            })
            .timeout(game.idle_remaining(Instant::now()))
            .await
        else {
            break;
        };

        let Some(cell) = parse_cell_id(&press.data.custom_id, &cell_prefix) else {
            continue;
        };

        let response = match game.reveal(cell, press.user.id.get(), Instant::now()) {
            Reveal::NotOwner => serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content("**❌ This isn't your game!**")
                    .ephemeral(true),
            ),
            Reveal::Ignored => serenity::CreateInteractionResponse::Acknowledge,
            Reveal::Cleared { .. } | Reveal::Won | Reveal::Lost => {
                serenity::CreateInteractionResponse::UpdateMessage(
                    serenity::CreateInteractionResponseMessage::new()
                        .embed(game_embed(&game))
                        .components(board_components(&game, &cell_prefix, false)),
                )
            }
        };

        press.create_response(ctx.http(), response).await?;
    }

    if !game.is_finished() {
        debug!(owner_id = game.owner_id(), "minesweeper game idled out");
        let _ = channel_id
            .edit_message(
                ctx.http(),
                message_id,
                serenity::EditMessage::new()
                    .embed(game_embed(&game))
                    .components(board_components(&game, &cell_prefix, true)),
            )
            .await;
    }

    Ok(())
}

fn game_embed(game: &Minesweeper) -> serenity::CreateEmbed {
    let color = match game.status() {
        GameStatus::InProgress => DEFAULT_EMBED_COLOR,
        GameStatus::Won => SUCCESS_EMBED_COLOR,
        GameStatus::Lost => FAILURE_EMBED_COLOR,
    };

    serenity::CreateEmbed::new()
        .title("Minesweeper 👷‍♂️")
        .color(color)
        .description(format!(
            "**Status :** `{}`\n**Owner :** <@{}>",
            game.status_text(),
            game.owner_id()
        ))
        .field("Board", game.render_grid(), false)
        .footer(serenity::CreateEmbedFooter::new("Click a tile to reveal it!"))
}

/// Button grid mirroring the board. `locked` disables every tile.
fn board_components(
    game: &Minesweeper,
    cell_prefix: &str,
    locked: bool,
) -> Vec<serenity::CreateActionRow> {
    let locked = locked || game.is_finished();

    (0..GRID_SIZE)
        .map(|row| {
            let buttons = (0..GRID_SIZE)
                .map(|col| {
                    let cell = row * GRID_SIZE + col;
                    let (label, style) = button_face(game.view(cell));
                    serenity::CreateButton::new(format!("{}{}", cell_prefix, cell))
                        .label(label)
                        .style(style)
                        .disabled(locked || game.view(cell) != CellView::Hidden)
                })
                .collect();
            serenity::CreateActionRow::Buttons(buttons)
        })
        .collect()
}

fn button_face(view: CellView) -> (String, serenity::ButtonStyle) {
    match view {
        CellView::Hidden => ("?".to_owned(), serenity::ButtonStyle::Secondary),
        CellView::Empty => ("0".to_owned(), serenity::ButtonStyle::Success),
        CellView::Count(count) => (count.to_string(), serenity::ButtonStyle::Success),
        CellView::Mine => ("💣".to_owned(), serenity::ButtonStyle::Danger),
    }
}

fn parse_cell_id(custom_id: &str, cell_prefix: &str) -> Option<usize> {
    custom_id
        .strip_prefix(cell_prefix)?
        .parse::<usize>()
        .ok()
        .filter(|cell| *cell < CELL_COUNT)
}
