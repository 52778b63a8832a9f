pub mod avatar;
pub mod embeds;
pub mod help;
