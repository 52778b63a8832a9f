use std::future::Future;

use poise::serenity_prelude as serenity;
use tracing::{debug, warn};

use hearth_core::Data;
use hearth_database::MemberSnapshot;
use hearth_database::impls::members::track_members;
use hearth_utils::permissions::is_guild_admin;

/// Discord's upper bound for one `List Guild Members` page.
const MEMBER_PAGE_LIMIT: u64 = 1000;

/// Track every member of a guild we just received, in one store write.
///
/// The `GUILD_CREATE` payload only carries a partial member list, so the full
/// list is paged over HTTP. The payload members are used if that fails.
pub async fn sync_guild_members(ctx: &serenity::Context, data: &Data, guild: &serenity::Guild) {
    let guild_id = guild.id;
    let fetched = fetch_all_members(MEMBER_PAGE_LIMIT, |after| {
        guild_id.members(&ctx.http, Some(MEMBER_PAGE_LIMIT), after)
    })
    .await;

    let members = match fetched {
        Ok(members) => members,
        Err(source) => {
            warn!(
                ?source,
                guild_id = guild_id.get(),
                "member list fetch failed, using gateway payload"
            );
            guild.members.values().cloned().collect()
        }
    };

    let snapshots = member_snapshots(&members, |member| is_guild_admin(guild, member));
    let added = track_members(&data.store, &snapshots).await;
    debug!(
        guild_id = guild_id.get(),
        seen = snapshots.len(),
        added,
        "guild members synchronized"
    );
}

pub async fn track_new_member(ctx: &serenity::Context, data: &Data, member: &serenity::Member) {
    if member.user.bot {
        return;
    }

    let is_admin = ctx
        .cache
        .guild(member.guild_id)
        .is_some_and(|guild| is_guild_admin(&guild, member));

    track_members(&data.store, &[member_snapshot(member, is_admin)]).await;
}

/// Page through a guild's members in ascending user id order until a short page.
async fn fetch_all_members<F, Fut>(
    page_limit: u64,
    mut fetch_page: F,
) -> anyhow::Result<Vec<serenity::Member>>
where
    F: FnMut(Option<serenity::UserId>) -> Fut,
    Fut: Future<Output = serenity::Result<Vec<serenity::Member>>>,
{
    let mut members: Vec<serenity::Member> = Vec::new();

    loop {
        let after = members.last().map(|member| member.user.id);
        let page = fetch_page(after).await?;
        let page_len = page.len() as u64;

        members.extend(page);

        if page_len < page_limit {
            return Ok(members);
        }
    }
}

fn member_snapshots(
    members: &[serenity::Member],
    is_admin: impl Fn(&serenity::Member) -> bool,
) -> Vec<MemberSnapshot> {
    members
        .iter()
        .filter(|member| !member.user.bot)
        .map(|member| member_snapshot(member, is_admin(member)))
        .collect()
}

fn member_snapshot(member: &serenity::Member, has_admin_permissions: bool) -> MemberSnapshot {
    MemberSnapshot {
        id: member.user.id.get(),
        username: member.user.name.clone(),
        joined_at_unix: member.joined_at.map(|joined| joined.unix_timestamp()),
        avatar: member.user.avatar_url(),
        is_bot: member.user.bot,
        has_admin_permissions,
    }
}
