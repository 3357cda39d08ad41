use clap::Parser;
use slidestar_solver::engine::State;
use slidestar_solver::solver::{solve_astar, SearchTrace};
use slidestar_solver::utils::state_from_str_rows;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of node expansions before the search gives up
    #[clap(short, long, default_value_t = 15)]
    max_expansions: u32,

    /// Path to the start board file (3 rows of 3 cells, blank as 0 or _)
    start_file: PathBuf,

    /// Path to the goal board file (same format)
    goal_file: PathBuf,
}

fn read_state_file(path: &PathBuf) -> Result<State, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    state_from_str_rows(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

/// Prints each expanded state in ascending expansion order, with its
/// g/h/f costs, the grid layout, and the children discovered from it.
fn print_expansion_trace(trace: &SearchTrace) {
    for (state, node) in trace.expanded_in_order() {
        // expanded_in_order only yields states with an assigned order.
        let order = node.expansion_order.unwrap();

        println!("==========================");
        println!("Expansion #{}", order);
        println!(
            "State: (expansion_order={}, g={:.2}, h={:.2}, f={:.2})",
            order, node.g, node.h, node.f
        );
        println!("{}", state);

        if node.children.is_empty() {
            println!("  Children: None\n");
            continue;
        }

        println!("  Children:");
        for child in &node.children {
            let child_node = trace
                .node(child)
                .expect("every recorded child is a discovered state");
            let status = match child_node.expansion_order {
                Some(child_order) => format!("(expanded #{})", child_order),
                None => "(not expanded yet)".to_string(),
            };
            println!(
                "    -> g={:.2}, h={:.2}, f={:.2} {}",
                child_node.g, child_node.h, child_node.f, status
            );
        }
        println!();
    }
}

fn main() {
    let args = Args::parse();

    let start = read_state_file(&args.start_file)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", args.start_file.display(), e));
    let goal = read_state_file(&args.goal_file)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", args.goal_file.display(), e));

    println!("Start state:\n{}", start);
    println!("Goal state:\n{}", goal);
    println!(
        "Searching with an expansion budget of {}...\n",
        args.max_expansions
    );

    let (trace, result) = solve_astar(start, goal, args.max_expansions);

    println!("A* SEARCH EXPANSION TRACE (partial)\n");
    print_expansion_trace(&trace);

    match result {
        Some(found) => {
            let order = trace
                .node(&found)
                .and_then(|node| node.expansion_order)
                .expect("found goal carries an expansion order");
            println!("Goal was reached within the expansion limit (expansion #{}).", order);
        }
        None => println!("Goal NOT reached within the expansion limit."),
    }
    println!(
        "Discovered {} states, expanded {}.",
        trace.len(),
        trace.expanded_in_order().len()
    );
}
