use crate::data::{Pos, DIRECTIONS};
use crate::map::Map;
use crate::moves::Move;

/// The dynamic part of a level.
///
/// Boxes are kept sorted so two states with the same occupied cells are equal
/// and hash the same no matter in which order the boxes were listed or moved.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub agent: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(agent: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { agent, boxes }
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// All boxes are on targets and all targets have a box. The agent doesn't matter.
    pub fn is_goal(&self, targets: &[Pos]) -> bool {
        self.boxes.len() == targets.len() && self.boxes.iter().all(|b| targets.contains(b))
    }

    /// Every state reachable by one move, in the order of `DIRECTIONS`.
    ///
    /// With `reverse` the moves are inverted to enumerate predecessors instead:
    /// the agent steps away from its position and may pull the box that was
    /// behind it. Undoing such a move (a step or a push in the opposite direction)
    /// leads back to this state.
    pub fn successors(&self, map: &Map, reverse: bool) -> Vec<(Move, State)> {
        if reverse {
            self.predecessors(map)
        } else {
            self.pushes_and_steps(map)
        }
    }

    fn pushes_and_steps(&self, map: &Map) -> Vec<(Move, State)> {
        let mut new_states = Vec::new();

        for &dir in &DIRECTIONS {
            let new_agent = self.agent + dir;
            if !map.is_passable(new_agent) {
                continue;
            }

            match self.boxes.binary_search(&new_agent) {
                Err(_) => {
                    // step
                    new_states.push((
                        Move::new(dir, false),
                        State::new(new_agent, self.boxes.clone()),
                    ));
                }
                Ok(box_index) => {
                    let push_dest = new_agent + dir;
                    if map.is_passable(push_dest) && !self.has_box(push_dest) {
                        let mut new_boxes = self.boxes.clone();
                        new_boxes[box_index] = push_dest;
                        new_states.push((Move::new(dir, true), State::new(new_agent, new_boxes)));
                    }
                }
            }
        }

        new_states
    }

    fn predecessors(&self, map: &Map) -> Vec<(Move, State)> {
        let mut new_states = Vec::new();

        for &dir in &DIRECTIONS {
            let new_agent = self.agent + dir;
            if !map.is_passable(new_agent) || self.has_box(new_agent) {
                continue;
            }

            // the last move could have been a step back in this direction...
            new_states.push((
                Move::new(dir, false),
                State::new(new_agent, self.boxes.clone()),
            ));

            // ...or a push of the box which is now behind the agent
            let pulled = self.agent - dir;
            if let Ok(box_index) = self.boxes.binary_search(&pulled) {
                let mut new_boxes = self.boxes.clone();
                new_boxes[box_index] = self.agent;
                new_states.push((Move::new(dir, true), State::new(new_agent, new_boxes)));
            }
        }

        new_states
    }
}
