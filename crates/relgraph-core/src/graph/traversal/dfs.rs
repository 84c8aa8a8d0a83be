use super::{Adjacency, TraversalState};
use crate::collections::Stack;
use crate::error::Result;
use std::hash::Hash;

/// Peek the top of the stack: push its smallest unvisited out-neighbour
/// (visiting it immediately) or pop to backtrack.
fn step<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    stack: &mut Stack<&'g T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    let top: &'g T = *stack.peek()?;
    match adjacency.first_unvisited(top, state) {
        Some(next) => {
            state.visit(next);
            stack.push(next);
        }
        None => {
            stack.pop()?;
        }
    }
    Ok(())
}

/// Visit `root` and put it on the stack
fn seed<'g, T: Eq + Hash>(
    root: &'g T,
    stack: &mut Stack<&'g T>,
    state: &mut TraversalState<'g, T>,
) {
    state.visit(root);
    stack.push(root);
}

pub(super) fn iterative<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    let mut stack = Stack::new();
    while let Some(root) = state.next_root() {
        seed(root, &mut stack, state);
        while !stack.is_empty() {
            step(adjacency, &mut stack, state)?;
        }
    }
    Ok(())
}

pub(super) fn recursive<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    let mut stack = Stack::new();
    while let Some(root) = state.next_root() {
        seed(root, &mut stack, state);
        descend(adjacency, root, &mut stack, state)?;
    }
    Ok(())
}

/// Explore `vertex`'s unvisited out-neighbours in ascending order, one call
/// per descent, then pop `vertex` to backtrack.
fn descend<'g, T: Eq + Hash>(
    adjacency: &Adjacency<'g, T>,
    vertex: &'g T,
    stack: &mut Stack<&'g T>,
    state: &mut TraversalState<'g, T>,
) -> Result<()> {
    while let Some(next) = adjacency.first_unvisited(vertex, state) {
        state.visit(next);
        stack.push(next);
        descend(adjacency, next, stack, state)?;
    }
    stack.pop()?;
    Ok(())
}
