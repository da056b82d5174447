use std::{cmp::Reverse, collections::BinaryHeap};

use super::{EDGE_COST, NodeState, TrackedCell, manhattan};
use crate::maze::{Cell, Grid};

/// Finds a shortest path from `start` to `goal` through non-wall cells, moving orthogonally.
///
/// The returned cells are marked as escape cells and run from `start` to `goal` inclusive.
/// An empty vector means there is no path, including when either end is a wall or out of bounds.
pub fn solve_astar(grid: &Grid, start: (usize, usize), goal: (usize, usize)) -> Vec<Cell> {
    if !grid.is_in_bounds(start) || !grid.is_in_bounds(goal) {
        tracing::warn!("[solve] start {start:?} or goal {goal:?} is out of bounds");
        return Vec::new();
    }

    let mut nodes = (0..grid.len())
        .map(|i| {
            let coord = grid.unravel_index(i);
            NodeState::new(grid.is_wall(coord), manhattan(coord, goal))
        })
        .collect::<Vec<_>>();

    let start_index = grid.ravel_index(start);
    let goal_index = grid.ravel_index(goal);
    if nodes[start_index].is_wall || nodes[goal_index].is_wall {
        tracing::warn!("[solve] start {start:?} or goal {goal:?} is a wall");
        return Vec::new();
    }

    // Priority queue of the open set
    // Using Reverse to turn the max-heap into a min-heap
    let mut open: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    let mut order = 0;
    nodes[start_index].traveling_cost = 0;
    open.push(Reverse(TrackedCell {
        index: start_index,
        traveling_cost: 0,
        final_cost: nodes[start_index].heuristic_cost,
        order,
    }));

    let mut expanded = 0usize;
    while let Some(Reverse(current)) = open.pop() {
        let state = nodes[current.index];
        // A cheaper entry for this cell was pushed after this one
        if state.closed || current.traveling_cost != state.traveling_cost {
            continue;
        }

        if current.index == goal_index {
            let path = reconstruct_path(grid, &nodes, current.index);
            tracing::debug!(
                "[solve] reached goal after expanding {} cells, path length {}",
                expanded,
                path.len()
            );
            return path;
        }

        nodes[current.index].closed = true;
        expanded += 1;

        let new_cost = current.traveling_cost + EDGE_COST;
        for neighbor in grid.neighbors(grid.unravel_index(current.index)) {
            let index = grid.ravel_index(neighbor);
            let node = &mut nodes[index];
            if node.is_wall || node.closed {
                continue;
            }
            // Unseen cells hold usize::MAX, so this also admits first visits
            if new_cost < node.traveling_cost {
                node.parent = Some(current.index);
                node.traveling_cost = new_cost;
                order += 1;
                open.push(Reverse(TrackedCell {
                    index,
                    traveling_cost: new_cost,
                    final_cost: new_cost + node.heuristic_cost,
                    order,
                }));
            }
        }
    }

    tracing::debug!("[solve] open set exhausted after expanding {expanded} cells, no path");
    Vec::new()
}

/// Walks parent links back from `end` and returns the path in start-to-end order.
fn reconstruct_path(grid: &Grid, nodes: &[NodeState], end: usize) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(index) = cursor {
        let (row, column) = grid.unravel_index(index);
        path.push(Cell::escape(row, column));
        cursor = nodes[index].parent;
    }
    path.reverse();
    path
}
