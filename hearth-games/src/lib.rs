/// Single-player 3x3 minesweeper driven by button clicks.
pub mod minesweeper;

pub use minesweeper::{CellView, GameStatus, Minesweeper, Reveal};
