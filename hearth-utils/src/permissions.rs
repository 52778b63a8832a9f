use poise::serenity_prelude as serenity;

/// What a member may do in a guild: effective permissions plus role names.
#[derive(Clone, Debug)]
pub struct MemberAccess {
    pub permissions: serenity::Permissions,
    pub role_names: Vec<String>,
}

impl MemberAccess {
    /// Administrators pass every check. Otherwise either the required
    /// permission or, when configured, the named privileged role is enough.
    pub fn allows(&self, required: serenity::Permissions, privileged_role: Option<&str>) -> bool {
        if self.permissions.contains(serenity::Permissions::ADMINISTRATOR)
            || self.permissions.contains(required)
        {
            return true;
        }

        privileged_role.is_some_and(|wanted| self.role_names.iter().any(|name| name == wanted))
    }
}

/// Resolve a member's guild-level access over HTTP.
///
/// The guild owner implicitly holds every permission.
pub async fn resolve_member_access(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<MemberAccess> {
    let guild = guild_id.to_partial_guild(http).await?;
    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    let role_names = roles
        .values()
        .filter(|role| member.roles.contains(&role.id))
        .map(|role| role.name.clone())
        .collect();

    let permissions = if guild.owner_id == user_id {
        serenity::Permissions::all()
    } else {
        combined_permissions(roles.values(), guild_id, &member.roles)
    };

    Ok(MemberAccess {
        permissions,
        role_names,
    })
}

/// Whether a cached member is an administrator of the cached guild.
pub fn is_guild_admin(guild: &serenity::Guild, member: &serenity::Member) -> bool {
    guild.owner_id == member.user.id
        || combined_permissions(guild.roles.values(), guild.id, &member.roles)
            .contains(serenity::Permissions::ADMINISTRATOR)
}

fn combined_permissions<'a>(
    roles: impl Iterator<Item = &'a serenity::Role>,
    guild_id: serenity::GuildId,
    member_roles: &[serenity::RoleId],
) -> serenity::Permissions {
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    roles
        .filter(|role| role.id == everyone_role_id || member_roles.contains(&role.id))
        .fold(serenity::Permissions::empty(), |acc, role| acc | role.permissions)
}
