mod client;

pub use client::{DEFAULT_MEME_API_URL, Meme, MemeService};
