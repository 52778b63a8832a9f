pub mod meme;
pub mod minesweeper;
pub mod scramble;
