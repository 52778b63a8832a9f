/// Generic embed builders and palette shared across commands.
pub mod embed;
/// Shared formatting helpers (uptime, ranks, mentions).
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Permission helper utilities.
pub mod permissions;
