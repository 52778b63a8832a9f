use std::time::{Duration, Instant};

use rand::Rng;

pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const MINE_COUNT: usize = 2;
pub const SAFE_CELLS: usize = CELL_COUNT - MINE_COUNT;
/// A game stops accepting input after this long without an accepted click.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a click on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Someone other than the owner clicked. Nothing changed.
    NotOwner,
    /// The click had no effect (finished or idle game, revealed cell, bad index).
    Ignored,
    Cleared { neighbor_mines: u8 },
    Won,
    Lost,
}

/// What a single cell shows to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Empty,
    Count(u8),
    Mine,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cell {
    is_mine: bool,
    neighbor_mines: u8,
    revealed: bool,
}

#[derive(Clone, Debug)]
pub struct Minesweeper {
    owner_id: u64,
    cells: [Cell; CELL_COUNT],
    safe_cleared: usize,
    status: GameStatus,
    last_activity: Instant,
}

impl Minesweeper {
    /// Start a game with mines placed uniformly at random.
    pub fn new(owner_id: u64, rng: &mut impl Rng, now: Instant) -> Self {
        let mines = rand::seq::index::sample(rng, CELL_COUNT, MINE_COUNT).into_vec();
        Self::place(owner_id, &mines, now)
    }

    /// Start a game with mines on the given cell indices.
    pub fn with_mines(owner_id: u64, mines: &[usize], now: Instant) -> anyhow::Result<Self> {
        anyhow::ensure!(
            mines.len() == MINE_COUNT,
            "expected {MINE_COUNT} mines, got {}",
            mines.len()
        );

        for (idx, &cell) in mines.iter().enumerate() {
            anyhow::ensure!(cell < CELL_COUNT, "mine cell {cell} is outside the grid");
            anyhow::ensure!(!mines[..idx].contains(&cell), "mine cell {cell} repeated");
        }

        Ok(Self::place(owner_id, mines, now))
    }

    fn place(owner_id: u64, mines: &[usize], now: Instant) -> Self {
        let mut cells = [Cell::default(); CELL_COUNT];
        for &mine in mines {
            cells[mine].is_mine = true;
        }

        for cell in 0..CELL_COUNT {
            if cells[cell].is_mine {
                continue;
            }
            let count = neighbors(cell).filter(|&other| cells[other].is_mine).count();
            cells[cell].neighbor_mines = count as u8;
        }

        Self {
            owner_id,
            cells,
            safe_cleared: 0,
            status: GameStatus::InProgress,
            last_activity: now,
        }
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn safe_cleared(&self) -> usize {
        self.safe_cleared
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn mine_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&cell| self.cells[cell].is_mine).collect()
    }

    pub fn idle_remaining(&self, now: Instant) -> Duration {
        IDLE_TIMEOUT.saturating_sub(now.saturating_duration_since(self.last_activity))
    }

    pub fn is_idle(&self, now: Instant) -> bool {
        self.idle_remaining(now).is_zero()
    }

    /// Apply a click by `actor` on `cell`.
    pub fn reveal(&mut self, cell: usize, actor: u64, now: Instant) -> Reveal {
        if actor != self.owner_id {
            return Reveal::NotOwner;
        }

        if self.is_finished() || self.is_idle(now) {
            return Reveal::Ignored;
        }

        let Some(target) = self.cells.get_mut(cell) else {
            return Reveal::Ignored;
        };

        if target.revealed {
            return Reveal::Ignored;
        }

        target.revealed = true;
        self.last_activity = now;

        if target.is_mine {
            self.status = GameStatus::Lost;
            return Reveal::Lost;
        }

        let neighbor_mines = target.neighbor_mines;
        self.safe_cleared += 1;

        if self.safe_cleared == SAFE_CELLS {
            self.status = GameStatus::Won;
            return Reveal::Won;
        }

        Reveal::Cleared { neighbor_mines }
    }

    /// Mines stay hidden until the game is over; unrevealed safe cells always do.
    pub fn view(&self, cell: usize) -> CellView {
        let Some(state) = self.cells.get(cell) else {
            return CellView::Hidden;
        };

        match (state.is_mine, state.revealed) {
            (true, _) if self.is_finished() => CellView::Mine,
            (false, true) if state.neighbor_mines == 0 => CellView::Empty,
            (false, true) => CellView::Count(state.neighbor_mines),
            _ => CellView::Hidden,
        }
    }

    pub fn render_grid(&self) -> String {
        (0..GRID_SIZE)
            .map(|row| {
                (0..GRID_SIZE)
                    .map(|col| cell_emoji(self.view(row * GRID_SIZE + col)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            GameStatus::InProgress => "Game in progress!",
            GameStatus::Won => "You won! 🎉",
            GameStatus::Lost => "💥 KABOOM!",
        }
    }
}

fn cell_emoji(view: CellView) -> String {
    match view {
        CellView::Hidden => "❓".to_owned(),
        CellView::Empty => "⬛".to_owned(),
        CellView::Count(count) => format!("{count}\u{FE0F}\u{20E3}"),
        CellView::Mine => "💣".to_owned(),
    }
}

/// Moore neighborhood of a cell, clipped at the grid edges.
fn neighbors(cell: usize) -> impl Iterator<Item = usize> {
    let row = (cell / GRID_SIZE) as isize;
    let col = (cell % GRID_SIZE) as isize;
    let size = GRID_SIZE as isize;

    (-1..=1)
        .flat_map(move |dr| (-1..=1).map(move |dc| (row + dr, col + dc)))
        .filter(move |&(r, c)| {
            (r, c) != (row, col) && (0..size).contains(&r) && (0..size).contains(&c)
        })
        .map(move |(r, c)| (r * size + c) as usize)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{
        CELL_COUNT, CellView, GameStatus, IDLE_TIMEOUT, MINE_COUNT, Minesweeper, Reveal, neighbors,
    };

    const OWNER: u64 = 10;
    const STRANGER: u64 = 20;

    // Mines on the top-left corner and the center:
    //   M 2 1
    //   2 M 1
    //   1 1 1
    fn corner_and_center(now: Instant) -> Minesweeper {
        Minesweeper::with_mines(OWNER, &[0, 4], now).expect("valid board")
    }

    #[test]
    fn neighbor_counts_follow_the_board() {
        let now = Instant::now();
        let mut game = corner_and_center(now);

        assert_eq!(game.reveal(1, OWNER, now), Reveal::Cleared { neighbor_mines: 2 });
        assert_eq!(game.reveal(8, OWNER, now), Reveal::Cleared { neighbor_mines: 1 });
        assert_eq!(game.view(1), CellView::Count(2));
        assert_eq!(game.view(0), CellView::Hidden);
    }

    #[test]
    fn corners_have_three_neighbors_and_center_has_eight() {
        assert_eq!(neighbors(0).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(neighbors(4).count(), 8);
        assert_eq!(neighbors(7).count(), 5);
    }

    #[test]
    fn zero_neighbors_render_as_empty() {
        let now = Instant::now();
        let mut game = Minesweeper::with_mines(OWNER, &[0, 1], now).expect("valid board");

        assert_eq!(game.reveal(8, OWNER, now), Reveal::Cleared { neighbor_mines: 0 });
        assert_eq!(game.view(8), CellView::Empty);
        assert_eq!(game.render_grid().lines().last(), Some("❓ ❓ ⬛"));
    }

    #[test]
    fn stepping_on_a_mine_loses_and_shows_all_mines() {
        let now = Instant::now();
        let mut game = corner_and_center(now);

        assert_eq!(game.reveal(2, OWNER, now), Reveal::Cleared { neighbor_mines: 1 });
        assert_eq!(game.reveal(4, OWNER, now), Reveal::Lost);

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.view(0), CellView::Mine);
        assert_eq!(game.view(4), CellView::Mine);
        assert_eq!(game.view(8), CellView::Hidden);
        assert_eq!(game.render_grid(), "💣 ❓ 1\u{FE0F}\u{20E3}\n❓ 💣 ❓\n❓ ❓ ❓");
    }

    #[test]
    fn clearing_every_safe_cell_wins() {
        let now = Instant::now();
        let mut game = corner_and_center(now);

        let safe = [1, 2, 3, 5, 6, 7, 8];
        for &cell in &safe[..safe.len() - 1] {
            assert!(matches!(game.reveal(cell, OWNER, now), Reveal::Cleared { .. }));
        }
        assert_eq!(game.reveal(8, OWNER, now), Reveal::Won);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.safe_cleared(), 7);
        assert_eq!(game.status_text(), "You won! 🎉");
    }

    #[test]
    fn finished_games_ignore_further_clicks() {
        let now = Instant::now();
        let mut game = corner_and_center(now);
        game.reveal(0, OWNER, now);

        assert_eq!(game.reveal(1, OWNER, now), Reveal::Ignored);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.safe_cleared(), 0);
    }

    #[test]
    fn revealing_twice_changes_nothing() {
        let now = Instant::now();
        let mut game = corner_and_center(now);

        game.reveal(5, OWNER, now);
        assert_eq!(game.reveal(5, OWNER, now), Reveal::Ignored);
        assert_eq!(game.safe_cleared(), 1);
    }

    #[test]
    fn strangers_cannot_play() {
        let now = Instant::now();
        let mut game = corner_and_center(now);

        assert_eq!(game.reveal(0, STRANGER, now), Reveal::NotOwner);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.view(0), CellView::Hidden);
    }

    #[test]
    fn idle_games_stop_accepting_input() {
        let start = Instant::now();
        let mut game = corner_and_center(start);

        let later = start + Duration::from_secs(60);
        assert!(matches!(game.reveal(1, OWNER, later), Reveal::Cleared { .. }));
        assert_eq!(game.idle_remaining(later), IDLE_TIMEOUT);

        let too_late = later + IDLE_TIMEOUT;
        assert!(game.is_idle(too_late));
        assert_eq!(game.reveal(2, OWNER, too_late), Reveal::Ignored);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn stranger_clicks_do_not_extend_the_game() {
        let start = Instant::now();
        let mut game = corner_and_center(start);

        let later = start + Duration::from_secs(100);
        game.reveal(1, STRANGER, later);

        assert_eq!(game.idle_remaining(later), Duration::from_secs(20));
    }

    #[test]
    fn rejects_invalid_boards() {
        let now = Instant::now();

        assert!(Minesweeper::with_mines(OWNER, &[1], now).is_err());
        assert!(Minesweeper::with_mines(OWNER, &[1, 1], now).is_err());
        assert!(Minesweeper::with_mines(OWNER, &[1, 9], now).is_err());
    }

    proptest! {
        #[test]
        fn random_boards_have_two_mines(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = Minesweeper::new(OWNER, &mut rng, Instant::now());

            let mines = game.mine_cells();
            prop_assert_eq!(mines.len(), MINE_COUNT);
            prop_assert!(mines.iter().all(|&cell| cell < CELL_COUNT));
        }

        #[test]
        fn any_mine_click_loses_with_all_mines_shown(seed in any::<u64>(), pick in 0usize..MINE_COUNT) {
            let now = Instant::now();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Minesweeper::new(OWNER, &mut rng, now);
            let mines = game.mine_cells();

            prop_assert_eq!(game.reveal(mines[pick], OWNER, now), Reveal::Lost);
            for &mine in &mines {
                prop_assert_eq!(game.view(mine), CellView::Mine);
            }
        }

        #[test]
        fn clearing_all_safe_cells_always_wins(seed in any::<u64>()) {
            let now = Instant::now();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Minesweeper::new(OWNER, &mut rng, now);
            let mines = game.mine_cells();

            let mut last = Reveal::Ignored;
            for cell in (0..CELL_COUNT).filter(|cell| !mines.contains(cell)) {
                last = game.reveal(cell, OWNER, now);
            }

            prop_assert_eq!(last, Reveal::Won);
            prop_assert_eq!(game.status(), GameStatus::Won);
        }

        #[test]
        fn stranger_never_changes_state(seed in any::<u64>(), cell in 0usize..CELL_COUNT) {
            let now = Instant::now();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Minesweeper::new(OWNER, &mut rng, now);

            prop_assert_eq!(game.reveal(cell, STRANGER, now), Reveal::NotOwner);
            prop_assert_eq!(game.status(), GameStatus::InProgress);
            prop_assert_eq!(game.safe_cleared(), 0);
        }
    }
}
