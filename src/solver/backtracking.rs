use crate::moves::Moves;
use crate::state::State;

use super::node::Node;
use super::SolverErr;

/// Nodes from `node` to its root (inclusive).
///
/// Parent chains are acyclic by construction so hitting `max_len` means a bug, not a long solution.
pub(super) fn chain(node: &Node, max_len: usize) -> Result<Vec<&Node>, SolverErr> {
    let mut nodes = Vec::new();
    let mut cur = Some(node);
    while let Some(n) = cur {
        if nodes.len() >= max_len {
            return Err(SolverErr::PathReconstructionOverflow(max_len));
        }
        nodes.push(n);
        cur = n.parent.as_ref().map(|parent| &**parent);
    }
    Ok(nodes)
}

/// Path and moves from the root of a forward search to `goal`.
pub(super) fn forward_solution(goal: &Node, max_len: usize) -> Result<(Vec<State>, Moves), SolverErr> {
    let mut nodes = chain(goal, max_len)?;
    nodes.reverse();

    let states = nodes.iter().map(|n| n.state.clone()).collect();
    let mut moves = Moves::default();
    for action in nodes.iter().filter_map(|n| n.action) {
        moves.add(action);
    }
    Ok((states, moves))
}

/// Joins the two halves of a bidirectional search.
///
/// The forward half runs start -> meeting state, the backward half meeting state -> goal
/// (backward roots are goal states). The meeting state is only included once.
pub(super) fn bidirectional_solution(
    forward: &Node,
    backward: &Node,
    max_len: usize,
) -> Result<(Vec<State>, Moves), SolverErr> {
    let (mut states, mut moves) = forward_solution(forward, max_len)?;

    let backward_nodes = chain(backward, max_len)?;
    debug_assert_eq!(states.last(), Some(&backward_nodes[0].state));

    for (i, node) in backward_nodes.iter().enumerate() {
        if i > 0 {
            states.push(node.state.clone());
        }
        // moving from this node to its parent undoes the reversed move that created it
        if let Some(action) = node.action {
            moves.add(action.inverse());
        }
    }
    Ok((states, moves))
}
