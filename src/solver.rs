//! Bounded best-first (A*) search with full expansion tracing.
//!
//! The solver explores at most `max_expansions` states and records every
//! discovery in a [`SearchTrace`]: parent links, g/h/f costs, expansion
//! order, and per-node child lists. The trace is the product — reporting
//! code renders it after the run; no path reconstruction happens here.
use crate::engine::State;
use crate::heuristics::octile_distance;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Bookkeeping record for one discovered state.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode {
    /// State this one was most recently discovered from. `None` for the
    /// start state.
    pub parent: Option<State>,
    /// Best known path cost from the start state.
    pub g: f64,
    /// Heuristic estimate to the goal, recomputed on each discovery.
    pub h: f64,
    /// Estimated total cost. Invariant: always exactly `g + h`.
    pub f: f64,
    /// Position in the expansion sequence, assigned when the state is
    /// popped from the frontier; `None` until then, never changed after.
    pub expansion_order: Option<u32>,
    /// States discovered as neighbors while this node was their
    /// best-known parent. If a later expansion supersedes this node as a
    /// child's parent, the entry here is NOT retracted — a child can
    /// appear under several parents, and only the latest parent matches
    /// the child's current `g`/`f`.
    pub children: Vec<State>,
}

/// Map of every discovered state to its [`SearchNode`], owned by one
/// search invocation and returned to the caller when it finishes.
///
/// Grows monotonically during the run; nodes are overwritten when a
/// cheaper path is found but never removed.
#[derive(Debug, Default)]
pub struct SearchTrace {
    nodes: HashMap<State, SearchNode>,
}

impl SearchTrace {
    /// Looks up the bookkeeping record for a state, if it was ever
    /// discovered.
    pub fn node(&self, state: &State) -> Option<&SearchNode> {
        self.nodes.get(state)
    }

    /// Number of discovered states (expanded or still on the frontier).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing was discovered (only possible before a search).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all discovered states and their records, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &SearchNode)> {
        self.nodes.iter()
    }

    /// Returns all expanded states with their records, sorted ascending
    /// by expansion order. States still on the frontier are omitted.
    pub fn expanded_in_order(&self) -> Vec<(State, &SearchNode)> {
        let mut expanded: Vec<(State, &SearchNode)> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.expansion_order.is_some())
            .map(|(state, node)| (*state, node))
            .collect();
        expanded.sort_by_key(|(_, node)| node.expansion_order);
        expanded
    }
}

/// One frontier entry. Ordered by `f`, then by insertion sequence, so
/// ties resolve to the oldest-inserted entry regardless of how the heap
/// arranges equal keys internally.
#[derive(Debug, Clone)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    state: State,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Costs are always finite, so total_cmp agrees with the usual
        // float comparison.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Runs a bounded A* search from `start` to `goal`.
///
/// Expands at most `max_expansions` states, pulling the lowest-`f`
/// frontier entry each round and scoring neighbors with
/// [`octile_distance`]. Returns the complete [`SearchTrace`] together
/// with `Some(goal)` if the goal was popped within the budget, `None`
/// otherwise. Running out of budget or frontier is a normal outcome, not
/// an error.
///
/// Duplicate frontier entries are handled by lazy deletion: a cheaper
/// rediscovery pushes a second entry, and stale copies are discarded on
/// pop (without consuming an expansion slot) once the state is in the
/// closed set. Closed states are never reopened; with non-negative move
/// costs and the cost-matched heuristic, their recorded `g` is treated
/// as final.
///
/// Inputs are assumed to be valid permutation states; validation belongs
/// to the parsing layer (`utils`).
pub fn solve_astar(start: State, goal: State, max_expansions: u32) -> (SearchTrace, Option<State>) {
    let mut open: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut nodes: HashMap<State, SearchNode> = HashMap::new();

    let h_start = octile_distance(&start, &goal);
    nodes.insert(
        start,
        SearchNode {
            parent: None,
            g: 0.0,
            h: h_start,
            f: h_start,
            expansion_order: None,
            children: Vec::new(),
        },
    );

    // Insertion counter for tie-breaking; 0 is consumed by the start.
    let mut seq: u64 = 0;
    open.push(Reverse(FrontierEntry {
        f: h_start,
        seq,
        state: start,
    }));

    let mut closed: HashSet<State> = HashSet::new();
    let mut expansion_counter: u32 = 0;

    while expansion_counter < max_expansions {
        let Some(Reverse(entry)) = open.pop() else {
            break;
        };
        let current = entry.state;

        // Lazy deletion: a stale copy of an already-finalized state.
        if closed.contains(&current) {
            continue;
        }

        expansion_counter += 1;
        nodes
            .get_mut(&current)
            .expect("popped state must have a bookkeeping node")
            .expansion_order = Some(expansion_counter);

        if current == goal {
            return (SearchTrace { nodes }, Some(current));
        }

        closed.insert(current);

        let g_current = nodes[&current].g;
        for (neighbor, move_cost) in current.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }

            let g_new = g_current + move_cost;
            let h_new = octile_distance(&neighbor, &goal);
            let f_new = g_new + h_new;

            let improves = match nodes.get(&neighbor) {
                None => true,
                Some(existing) => f_new < existing.f,
            };
            if !improves {
                continue;
            }

            // Overwrite (or create) the neighbor's record. Its
            // expansion_order can only be unset here: closed states were
            // filtered above, and an unexpanded node has no order yet.
            nodes.insert(
                neighbor,
                SearchNode {
                    parent: Some(current),
                    g: g_new,
                    h: h_new,
                    f: f_new,
                    expansion_order: None,
                    children: Vec::new(),
                },
            );
            nodes
                .get_mut(&current)
                .expect("expanded state must have a bookkeeping node")
                .children
                .push(neighbor);

            seq += 1;
            open.push(Reverse(FrontierEntry {
                f: f_new,
                seq,
                state: neighbor,
            }));
        }
    }

    (SearchTrace { nodes }, None)
}
