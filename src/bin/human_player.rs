use slidestar_solver::engine::{Move, State};
use slidestar_solver::heuristics::octile_distance;
use slidestar_solver::utils::state_from_str_rows;
use std::io::{self, Write};

// Fixed scramble so every session starts from the same board.
const SCRAMBLE_SEED: u64 = 514514;
const SCRAMBLE_STEPS: u32 = 20;

fn parse_direction(input: &str) -> Option<Move> {
    match input {
        "u" => Some(Move::Up),
        "d" => Some(Move::Down),
        "l" => Some(Move::Left),
        "r" => Some(Move::Right),
        "ul" => Some(Move::UpLeft),
        "ur" => Some(Move::UpRight),
        "dl" => Some(Move::DownLeft),
        "dr" => Some(Move::DownRight),
        _ => None,
    }
}

fn main() {
    let goal = state_from_str_rows(&["123", "8_4", "765"]).expect("built-in goal board is valid");
    let mut current = goal.scrambled(SCRAMBLE_SEED, SCRAMBLE_STEPS);

    let mut steps: u32 = 0;
    let mut path_cost: f64 = 0.0;
    let mut history: Vec<(State, f64)> = vec![(current, 0.0)];

    println!("Welcome to Slidestar!");
    println!("Slide the blank into the goal position:\n{}", goal);

    loop {
        println!("---------------------");
        println!(
            "Steps: {}, Path cost: {:.1}, Distance to goal: {:.1}",
            steps,
            path_cost,
            octile_distance(&current, &goal)
        );
        println!("{}", current);

        if current == goal {
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total steps: {}, total cost: {:.1}", steps, path_cost);
            println!("---------------------");
            break;
        }

        print!("Enter a move (u d l r ul ur dl dr), 'b' to undo, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "b" {
            if history.len() > 1 {
                history.pop();
                let &(previous, previous_cost) = history.last().unwrap();
                current = previous;
                path_cost = previous_cost;
                steps -= 1;
                println!("Move undone.");
            } else {
                println!("Cannot undo further (already at the scrambled start).");
            }
            continue;
        }

        let Some(movement) = parse_direction(trimmed_input) else {
            println!("Unrecognized command '{}'.", trimmed_input);
            continue;
        };

        match current.apply_move(movement) {
            Some(next) => {
                current = next;
                path_cost += movement.cost();
                steps += 1;
                history.push((current, path_cost));
                println!("Moved {} (cost {:.1}).", movement, movement.cost());
            }
            None => println!("Cannot move {}: the blank would leave the grid.", movement),
        }
    }
}
