//! Core puzzle engine for the 3×3 sliding-tile puzzle with diagonal moves.
//!
//! This module defines the puzzle's fundamental components:
//! - `State`: a 3×3 board configuration stored in row-major order, with
//!   the blank encoded as 0.
//! - `Move`: the eight legal blank moves (four orthogonal, four
//!   diagonal) and their step costs.
//!
//! Neighbor enumeration, single-move application, and deterministic
//! scramble generation all live here; cost estimation is in the
//! `heuristics` module and the search loop in `solver`.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the puzzle grid. The grid is always square.
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the board (`GRID_SIZE` squared).
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The cell value that denotes the blank (movable empty cell).
pub const BLANK: u8 = 0;

/// Step cost of an orthogonal blank move.
pub const STRAIGHT_COST: f64 = 1.0;

/// Step cost of a diagonal blank move. An approximation of √2 chosen to
/// match the heuristic's weighting exactly.
pub const DIAGONAL_COST: f64 = 1.4;

/// A single blank move: the direction the blank slides in.
///
/// Four orthogonal directions cost [`STRAIGHT_COST`] and four diagonal
/// directions cost [`DIAGONAL_COST`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Move {
    /// All eight moves in the fixed enumeration order used by
    /// [`State::neighbors`]. Downstream tie-breaking depends on this
    /// order being stable.
    pub const ALL: [Move; 8] = [
        Move::Up,
        Move::Down,
        Move::Left,
        Move::Right,
        Move::UpLeft,
        Move::UpRight,
        Move::DownLeft,
        Move::DownRight,
    ];

    /// Returns the (row-delta, column-delta) offset the blank travels.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidestar_solver::engine::Move;
    /// assert_eq!(Move::Up.offset(), (-1, 0));
    /// assert_eq!(Move::DownRight.offset(), (1, 1));
    /// ```
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::UpLeft => (-1, -1),
            Move::UpRight => (-1, 1),
            Move::DownLeft => (1, -1),
            Move::DownRight => (1, 1),
        }
    }

    /// Whether this move travels along a diagonal.
    pub fn is_diagonal(&self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }

    /// Step cost of this move: [`DIAGONAL_COST`] for diagonals,
    /// [`STRAIGHT_COST`] otherwise.
    pub fn cost(&self) -> f64 {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            STRAIGHT_COST
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
            Move::UpLeft => "up-left",
            Move::UpRight => "up-right",
            Move::DownLeft => "down-left",
            Move::DownRight => "down-right",
        };
        write!(f, "{}", s)
    }
}

/// A 3×3 puzzle configuration.
///
/// Cells are stored in row-major order; each of the values 0..=8 appears
/// exactly once, with 0 denoting the blank. States are plain `Copy`
/// values compared and hashed by full cell content, which is what lets
/// the solver use them directly as map and set keys.
///
/// # Examples
/// ```
/// use slidestar_solver::engine::State;
/// let state = State::new([1, 2, 3, 8, 0, 4, 7, 6, 5]);
/// assert_eq!(state.get(0, 2), 3);
/// assert_eq!(state.blank_position(), (1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    cells: [u8; CELL_COUNT],
}

impl State {
    /// Creates a state from a row-major cell array.
    ///
    /// The cells are taken as-is; permutation validity is the caller's
    /// responsibility. Parsed input should go through
    /// `utils::state_from_str_rows`, which rejects malformed boards.
    pub fn new(cells: [u8; CELL_COUNT]) -> Self {
        State { cells }
    }

    /// Returns the underlying row-major cell array.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Returns the value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the grid
    /// (`0 <= r < GRID_SIZE`, `0 <= c < GRID_SIZE`).
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.cells[r * GRID_SIZE + c]
    }

    /// Locates a cell value, returning its (row, column).
    ///
    /// # Panics
    /// Panics if `value` is not present on the board, which can only
    /// happen for a malformed (non-permutation) state.
    pub fn position_of(&self, value: u8) -> (usize, usize) {
        let index = self
            .cells
            .iter()
            .position(|&v| v == value)
            .expect("value must be present in a valid puzzle state");
        (index / GRID_SIZE, index % GRID_SIZE)
    }

    /// Locates the blank, returning its (row, column).
    ///
    /// # Panics
    /// Panics if the state has no blank (malformed state).
    pub fn blank_position(&self) -> (usize, usize) {
        self.position_of(BLANK)
    }

    /// Applies a single blank move, returning the resulting state.
    ///
    /// Returns `None` if the move would take the blank off the grid.
    /// The returned state is the input with the blank and the target
    /// cell swapped; the input itself is unchanged.
    ///
    /// # Examples
    /// ```
    /// use slidestar_solver::engine::{Move, State};
    /// let state = State::new([0, 1, 3, 8, 2, 6, 7, 5, 4]);
    /// // Blank is in the top-left corner, so moving up is illegal.
    /// assert!(state.apply_move(Move::Up).is_none());
    /// let down = state.apply_move(Move::Down).unwrap();
    /// assert_eq!(down.cells(), &[8, 1, 3, 0, 2, 6, 7, 5, 4]);
    /// ```
    pub fn apply_move(&self, movement: Move) -> Option<State> {
        let (r, c) = self.blank_position();
        let (dr, dc) = movement.offset();

        let new_r = r as isize + dr;
        let new_c = c as isize + dc;
        if new_r < 0 || new_r >= GRID_SIZE as isize || new_c < 0 || new_c >= GRID_SIZE as isize {
            return None;
        }

        let mut cells = self.cells;
        cells.swap(r * GRID_SIZE + c, new_r as usize * GRID_SIZE + new_c as usize);
        Some(State { cells })
    }

    /// Enumerates all states reachable by one legal blank move, paired
    /// with that move's step cost.
    ///
    /// Moves are tried in [`Move::ALL`] order, so the returned list has
    /// a fixed, reproducible order: between 3 entries (blank in a
    /// corner) and 8 (blank in the center).
    pub fn neighbors(&self) -> Vec<(State, f64)> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.apply_move(movement).map(|next| (next, movement.cost())))
            .collect()
    }

    /// Produces a scrambled state by random-walking the blank from
    /// `self` for `steps` legal moves.
    ///
    /// Uses `SmallRng` seeded with `seed`, so the same seed and step
    /// count always yield the same scramble. Off-grid move attempts are
    /// re-drawn and do not count toward `steps`.
    pub fn scrambled(&self, seed: u64, steps: u32) -> State {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = *self;
        let mut applied = 0;
        while applied < steps {
            let movement = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            if let Some(next) = state.apply_move(movement) {
                state = next;
                applied += 1;
            }
        }
        state
    }
}

impl fmt::Display for State {
    /// Formats the grid one row per line, cells separated by two spaces,
    /// with the blank shown as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if c > 0 {
                    write!(f, "  ")?;
                }
                let value = self.get(r, c);
                if value == BLANK {
                    write!(f, "_")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::state_from_str_rows;

    fn classic_goal() -> State {
        state_from_str_rows(&["123", "8_4", "765"]).unwrap()
    }

    #[test]
    fn test_move_costs() {
        assert_eq!(Move::Up.cost(), STRAIGHT_COST);
        assert_eq!(Move::Left.cost(), STRAIGHT_COST);
        assert_eq!(Move::UpRight.cost(), DIAGONAL_COST);
        assert_eq!(Move::DownLeft.cost(), DIAGONAL_COST);
    }

    #[test]
    fn test_move_all_order_is_straight_then_diagonal() {
        let diagonal_flags: Vec<bool> = Move::ALL.iter().map(Move::is_diagonal).collect();
        assert_eq!(
            diagonal_flags,
            vec![false, false, false, false, true, true, true, true]
        );
    }

    #[test]
    fn test_get_and_positions() {
        let state = State::new([0, 1, 3, 8, 2, 6, 7, 5, 4]);
        assert_eq!(state.get(0, 0), BLANK);
        assert_eq!(state.get(1, 0), 8);
        assert_eq!(state.blank_position(), (0, 0));
        assert_eq!(state.position_of(4), (2, 2));
    }

    #[test]
    fn test_apply_move_swaps_blank_and_target() {
        let state = classic_goal(); // blank in the center
        let up = state.apply_move(Move::Up).unwrap();
        assert_eq!(up.cells(), &[1, 0, 3, 8, 2, 4, 7, 6, 5]);

        let diagonal = state.apply_move(Move::DownRight).unwrap();
        assert_eq!(diagonal.cells(), &[1, 2, 3, 8, 5, 4, 7, 6, 0]);
    }

    #[test]
    fn test_apply_move_off_grid_is_rejected() {
        let state = State::new([0, 1, 3, 8, 2, 6, 7, 5, 4]); // blank at (0,0)
        assert!(state.apply_move(Move::Up).is_none());
        assert!(state.apply_move(Move::Left).is_none());
        assert!(state.apply_move(Move::UpLeft).is_none());
        assert!(state.apply_move(Move::UpRight).is_none());
        assert!(state.apply_move(Move::DownLeft).is_none());
    }

    #[test]
    fn test_apply_move_is_an_involution() {
        // Moving the blank somewhere and back must restore the state.
        let pairs = [
            (Move::Up, Move::Down),
            (Move::Left, Move::Right),
            (Move::UpLeft, Move::DownRight),
            (Move::DownLeft, Move::UpRight),
        ];
        let state = classic_goal();
        for (there, back) in pairs {
            let moved = state.apply_move(there).unwrap();
            assert_eq!(moved.apply_move(back).unwrap(), state);
        }
    }

    #[test]
    fn test_neighbors_corner_blank() {
        // Blank in the top-left corner: down, right, down-right only.
        let state = State::new([0, 1, 3, 8, 2, 6, 7, 5, 4]);
        let neighbors = state.neighbors();
        assert_eq!(neighbors.len(), 3);

        let costs: Vec<f64> = neighbors.iter().map(|&(_, cost)| cost).collect();
        assert_eq!(costs, vec![STRAIGHT_COST, STRAIGHT_COST, DIAGONAL_COST]);
    }

    #[test]
    fn test_neighbors_edge_blank() {
        // Blank at (0,1): down, left, right, down-left, down-right.
        let state = State::new([1, 0, 3, 8, 2, 4, 7, 6, 5]);
        assert_eq!(state.neighbors().len(), 5);
    }

    #[test]
    fn test_neighbors_center_blank() {
        let state = classic_goal();
        assert_eq!(state.neighbors().len(), 8);
    }

    #[test]
    fn test_neighbors_are_valid_permutations() {
        let state = State::new([0, 1, 3, 8, 2, 6, 7, 5, 4]);
        for (neighbor, _) in state.neighbors() {
            let mut seen = [false; CELL_COUNT];
            for &value in neighbor.cells() {
                assert!(!seen[value as usize], "value {} repeated", value);
                seen[value as usize] = true;
            }
            assert!(seen.iter().all(|&present| present));
        }
    }

    #[test]
    fn test_scrambled_is_deterministic() {
        let goal = classic_goal();
        let a = goal.scrambled(42, 20);
        let b = goal.scrambled(42, 20);
        assert_eq!(a, b, "same seed must produce the same scramble");

        let c = goal.scrambled(43, 20);
        assert_ne!(a, c, "different seeds should diverge");
    }

    #[test]
    fn test_scrambled_zero_steps_is_identity() {
        let goal = classic_goal();
        assert_eq!(goal.scrambled(7, 0), goal);
    }

    #[test]
    fn test_display_formatting() {
        let state = State::new([0, 1, 3, 8, 2, 6, 7, 5, 4]);
        let rendered = format!("{}", state);
        assert_eq!(rendered, "_  1  3\n8  2  6\n7  5  4\n");
    }
}
