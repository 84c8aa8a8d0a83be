use super::{Adjacency, TraversalState};
use crate::collections::Queue;
use crate::error::Result;
use std::hash::Hash;

/// Visit the vertex at the front of the queue and enqueue its unvisited
/// out-neighbours in ascending order. A stale entry is dropped.
fn step<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    queue: &mut Queue<&'g T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    let current = queue.dequeue()?;
    if !state.visit(current) {
        return Ok(());
    }
    let next: Vec<&'g T> = adjacency.unvisited(current, state).collect();
    for neighbor in next {
        queue.enqueue(neighbor);
    }
    Ok(())
}

pub(super) fn iterative<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    let mut queue = Queue::new();
    while let Some(root) = state.next_root() {
        queue.enqueue(root);
        while !queue.is_empty() {
            step(adjacency, &mut queue, state)?;
        }
    }
    Ok(())
}

pub(super) fn recursive<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    while let Some(root) = state.next_root() {
        let mut frontier = Queue::new();
        frontier.enqueue(root);
        level(adjacency, frontier, state)?;
    }
    Ok(())
}

/// Drain one level of the frontier, then recurse on the level it discovered.
/// Recursion depth is the number of levels below the root.
fn level<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    mut frontier: Queue<&'g T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    if frontier.is_empty() {
        return Ok(());
    }
    let mut next = Queue::new();
    while !frontier.is_empty() {
        let current = frontier.dequeue()?;
        if !state.visit(current) {
            continue;
        }
        let discovered: Vec<&'g T> = adjacency.unvisited(current, state).collect();
        for neighbor in discovered {
            next.enqueue(neighbor);
        }
    }
    level(adjacency, next, state)
}
