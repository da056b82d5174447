mod astar;

pub use astar::solve_astar;

/// Cost of moving to an orthogonal neighbor.
const EDGE_COST: usize = 1;

/// Heap entry of the open set, ordered by final cost and then by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedCell {
    /// Flat index of the cell in the grid
    index: usize,
    /// Cost to reach this cell from the start when the entry was pushed
    traveling_cost: usize,
    /// Traveling cost plus the heuristic estimate to the goal
    final_cost: usize,
    /// Insertion counter, breaks ties first-in first-out
    order: usize,
}

impl Ord for TrackedCell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.final_cost
            .cmp(&other.final_cost)
            .then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for TrackedCell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-cell search state, kept in a side array indexed like the grid.
#[derive(Debug, Clone, Copy)]
struct NodeState {
    is_wall: bool,
    /// `None` for the start and for cells not reached yet
    parent: Option<usize>,
    /// Best known cost from the start, `usize::MAX` while unseen
    traveling_cost: usize,
    /// Manhattan distance to the goal, fixed before the search starts
    heuristic_cost: usize,
    closed: bool,
}

impl NodeState {
    fn new(is_wall: bool, heuristic_cost: usize) -> Self {
        NodeState {
            is_wall,
            parent: None,
            traveling_cost: usize::MAX,
            heuristic_cost,
            closed: false,
        }
    }
}

fn manhattan(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}
