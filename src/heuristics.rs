//! Cost estimators for puzzle states.
//!
//! The search always uses [`octile_distance`]; [`misplaced_tiles`] is a
//! cruder estimate kept for side-by-side comparison in the
//! `heuristic_evaluator` binary.
use crate::engine::{State, CELL_COUNT, DIAGONAL_COST, STRAIGHT_COST};

/// Sums the octile distance of every tile from its goal cell, ignoring
/// the blank.
///
/// For each tile 1..=8 the row/column differences `dx`/`dy` between
/// `state` and `goal` are split into `min(dx, dy)` diagonal steps and
/// `max(dx, dy) - min(dx, dy)` straight steps, weighted by
/// [`DIAGONAL_COST`] and [`STRAIGHT_COST`]. Because the weights are the
/// exact move costs, the estimate is consistent under this cost model —
/// though with the diagonal weight being 1.4 rather than √2, it is an
/// approximation of true Euclidean distance, not a strictly admissible
/// bound on it.
///
/// Pure function of its two inputs; symmetric in them.
///
/// # Examples
/// ```
/// use slidestar_solver::engine::State;
/// use slidestar_solver::heuristics::octile_distance;
/// let goal = State::new([1, 2, 3, 8, 0, 4, 7, 6, 5]);
/// assert_eq!(octile_distance(&goal, &goal), 0.0);
/// ```
pub fn octile_distance(state: &State, goal: &State) -> f64 {
    let mut total = 0.0;
    for tile in 1..CELL_COUNT as u8 {
        let (curr_r, curr_c) = state.position_of(tile);
        let (goal_r, goal_c) = goal.position_of(tile);

        let dx = curr_r.abs_diff(goal_r);
        let dy = curr_c.abs_diff(goal_c);

        let diagonal = dx.min(dy);
        let straight = dx.max(dy) - diagonal;
        total += DIAGONAL_COST * diagonal as f64 + STRAIGHT_COST * straight as f64;
    }
    total
}

/// Counts the tiles (not the blank) sitting on a different cell than in
/// `goal`. The classic Hamming estimate; much weaker than
/// [`octile_distance`] but cheap to eyeball against it.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    let mut count = 0;
    for tile in 1..CELL_COUNT as u8 {
        if state.position_of(tile) != goal.position_of(tile) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::state_from_str_rows;

    fn demo_start() -> State {
        state_from_str_rows(&["_13", "826", "754"]).unwrap()
    }

    fn demo_goal() -> State {
        state_from_str_rows(&["123", "8_4", "765"]).unwrap()
    }

    #[test]
    fn test_octile_distance_to_self_is_zero() {
        for state in [demo_start(), demo_goal()] {
            assert_eq!(octile_distance(&state, &state), 0.0);
        }
    }

    #[test]
    fn test_octile_distance_is_symmetric() {
        let a = demo_start();
        let b = demo_goal();
        assert_eq!(octile_distance(&a, &b), octile_distance(&b, &a));
    }

    #[test]
    fn test_octile_distance_single_straight_step() {
        // Only tiles 1 and 2 are displaced, each by one straight step.
        let state = state_from_str_rows(&["213", "8_4", "765"]).unwrap();
        let goal = demo_goal();
        assert_eq!(octile_distance(&state, &goal), 2.0);
    }

    #[test]
    fn test_octile_distance_counts_diagonals() {
        // Tile 5 sits one diagonal step away from its goal cell; the
        // other tiles are in place.
        let state = state_from_str_rows(&["123", "854", "76_"]).unwrap();
        let goal = demo_goal();
        assert_eq!(octile_distance(&state, &goal), DIAGONAL_COST);
    }

    #[test]
    fn test_octile_distance_demo_pair() {
        // The start/goal pair used by the demo wiring: four tiles one
        // straight step out, one tile one diagonal step out.
        let h = octile_distance(&demo_start(), &demo_goal());
        assert!((h - 5.4).abs() < 1e-9, "expected 5.4, got {}", h);
    }

    #[test]
    fn test_misplaced_tiles_ignores_blank() {
        let goal = demo_goal();
        assert_eq!(misplaced_tiles(&goal, &goal), 0);

        // Tiles 1, 2, 4, 5, 6 are out of place; the blank's own cell
        // does not count.
        let state = demo_start();
        assert_eq!(misplaced_tiles(&state, &goal), 5);
    }
}
