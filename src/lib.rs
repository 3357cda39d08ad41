//! # Slidestar Solver Library
//!
//! This library provides the core logic for a 3×3 sliding-tile puzzle
//! extended with diagonal blank moves, and a bounded A* solver that
//! records a complete expansion trace for visualization.
//!
//! It is used by three binaries:
//! - `astar_solver`: Reads start and goal boards from files, runs the
//!   bounded search, and prints the expansion trace report.
//! - `human_player`: Interactive command-line play against a scrambled
//!   board, with a live octile-distance readout.
//! - `heuristic_evaluator`: Compares the octile estimate against the
//!   misplaced-tiles count over a batch of seeded scrambles.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`State`), the eight
//!   blank moves (`Move`) with their step costs, neighbor enumeration,
//!   and seeded scramble generation.
//! - `heuristics`: The octile-distance estimate used by the search, and
//!   a misplaced-tiles count used for comparison.
//! - `solver`: The bounded A* loop (`solve_astar`) and the per-state
//!   bookkeeping it produces (`SearchTrace`, `SearchNode`).
//! - `utils`: Parsing of puzzle states from text rows, with full
//!   permutation validation.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules are accessed via their full path, e.g.
// `slidestar_solver::solver::solve_astar`. This keeps the top-level
// library namespace clean.
