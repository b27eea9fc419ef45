use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::moves::Move;
use crate::state::State;

/// An element of the search tree.
///
/// Each node keeps its parent alive so the path back to the root can always be
/// reconstructed. A node is freed once nothing (frontier, visited table or child)
/// refers to it anymore.
pub struct Node {
    pub state: State,
    pub parent: Option<Rc<Node>>,
    pub action: Option<Move>,
    pub depth: u32,
    pub cost: u32,
}

impl Node {
    pub fn root(state: State) -> Rc<Node> {
        Rc::new(Node {
            state,
            parent: None,
            action: None,
            depth: 0,
            cost: 0,
        })
    }

    /// Children are returned in the same order as `actions`.
    pub fn expand(parent: &Rc<Node>, actions: Vec<(Move, State)>) -> Vec<Rc<Node>> {
        actions
            .into_iter()
            .map(|(action, state)| {
                Rc::new(Node {
                    state,
                    parent: Some(Rc::clone(parent)),
                    action: Some(action),
                    depth: parent.depth + 1,
                    cost: parent.cost + 1,
                })
            })
            .collect()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Debug for Node {
    // don't print the whole chain of parents
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("action", &self.action)
            .field("depth", &self.depth)
            .field("cost", &self.cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::{Dir, Pos};

    #[test]
    fn expanding_keeps_order() {
        let root = Node::root(State::new(Pos::new(1, 1), vec![Pos::new(2, 2)]));
        assert!(root.is_root());
        assert_eq!(root.depth, 0);

        let actions = vec![
            (Move::new(Dir::Up, false), State::new(Pos::new(0, 1), vec![Pos::new(2, 2)])),
            (Move::new(Dir::Right, false), State::new(Pos::new(1, 2), vec![Pos::new(2, 2)])),
            (Move::new(Dir::Left, false), State::new(Pos::new(1, 0), vec![Pos::new(2, 2)])),
        ];
        let children = Node::expand(&root, actions.clone());

        assert_eq!(children.len(), 3);
        for (child, (action, state)) in children.iter().zip(actions) {
            assert!(!child.is_root());
            assert_eq!(child.state, state);
            assert_eq!(child.action, Some(action));
            assert_eq!(child.depth, 1);
            assert_eq!(child.cost, 1);
            assert!(Rc::ptr_eq(child.parent.as_ref().unwrap(), &root));
        }

        let grandchildren = Node::expand(
            &children[0],
            vec![(Move::new(Dir::Down, false), root.state.clone())],
        );
        assert_eq!(grandchildren[0].depth, 2);
        assert_eq!(grandchildren[0].cost, 2);
    }

    #[test]
    fn parents_outlive_frontier() {
        let root = Node::root(State::new(Pos::new(0, 0), vec![]));
        let child = Node::expand(
            &root,
            vec![(Move::new(Dir::Right, false), State::new(Pos::new(0, 1), vec![]))],
        )
        .pop()
        .unwrap();
        drop(root);

        let parent = child.parent.as_ref().unwrap();
        assert_eq!(parent.state.agent, Pos::new(0, 0));
        assert_eq!(Rc::strong_count(parent), 1);
    }

    #[test]
    fn debug_omits_parents() {
        let root = Node::root(State::new(Pos::new(0, 0), vec![]));
        let text = format!("{:?}", root);
        assert!(text.starts_with("Node { state: State"));
        assert!(!text.contains("parent"));
    }
}
