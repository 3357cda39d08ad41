use slidestar_solver::engine::State;
use slidestar_solver::heuristics::{misplaced_tiles, octile_distance};
use slidestar_solver::solver::solve_astar;
use slidestar_solver::utils::state_from_str_rows;

const NUM_SCRAMBLES_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const SCRAMBLE_STEPS: u32 = 12;
const EXPANSION_BUDGET: u32 = 15;

fn main() {
    let goal = state_from_str_rows(&["123", "8_4", "765"]).expect("built-in goal board is valid");

    println!(
        "Evaluating heuristics on {} scrambles ({} blank moves each)...",
        NUM_SCRAMBLES_FOR_EVALUATION, SCRAMBLE_STEPS
    );
    println!(
        "{:<6} {:>8} {:>11} {:>10} {:>12}",
        "Seed", "Octile", "Misplaced", "Expanded", "Goal found"
    );

    let mut octile_sum = 0.0;
    let mut misplaced_sum = 0u32;
    let mut solved_count = 0usize;

    for scramble_idx in 0..NUM_SCRAMBLES_FOR_EVALUATION {
        let seed = START_SEED + scramble_idx as u64;
        let start: State = goal.scrambled(seed, SCRAMBLE_STEPS);

        let octile = octile_distance(&start, &goal);
        let misplaced = misplaced_tiles(&start, &goal);
        octile_sum += octile;
        misplaced_sum += misplaced;

        let (trace, result) = solve_astar(start, goal, EXPANSION_BUDGET);
        let expanded = trace.expanded_in_order().len();
        if result.is_some() {
            solved_count += 1;
        }

        println!(
            "{:<6} {:>8.2} {:>11} {:>10} {:>12}",
            seed,
            octile,
            misplaced,
            expanded,
            if result.is_some() { "yes" } else { "no" }
        );
    }

    let boards = NUM_SCRAMBLES_FOR_EVALUATION as f64;
    println!("\n--- Evaluation Complete ---");
    println!("Scrambles evaluated: {}", NUM_SCRAMBLES_FOR_EVALUATION);
    println!("Average octile estimate:    {:.2}", octile_sum / boards);
    println!(
        "Average misplaced tiles:    {:.2}",
        misplaced_sum as f64 / boards
    );
    println!(
        "Solved within {} expansions: {}/{}",
        EXPANSION_BUDGET, solved_count, NUM_SCRAMBLES_FOR_EVALUATION
    );
}
