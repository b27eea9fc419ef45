use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::fs;
use std::path::Path;

use crate::config::Format;
use crate::data::Pos;
use crate::map::Map;
use crate::map_formatter::MapFormatter;
use crate::parser::{self, ParserErr};
use crate::state::State;
use crate::LoadLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    Empty,
    NotRectangular(usize),
    TargetOutOfBounds(Pos),
    TargetOnBlock(Pos),
    AgentOutOfBounds,
    AgentOnBlock,
    AgentOnBox,
    BoxOutOfBounds(Pos),
    BoxOnBlock(Pos),
    DuplicateBox(Pos),
    BoxesTargets { boxes: usize, targets: usize },
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::Empty => write!(f, "Empty map"),
            LevelErr::NotRectangular(r) => write!(f, "Row {} has a different width", r),
            LevelErr::TargetOutOfBounds(pos) => write!(f, "Target out of bounds at {}", pos),
            LevelErr::TargetOnBlock(pos) => write!(f, "Target on a block at {}", pos),
            LevelErr::AgentOutOfBounds => write!(f, "Agent out of bounds"),
            LevelErr::AgentOnBlock => write!(f, "Agent on a block"),
            LevelErr::AgentOnBox => write!(f, "Agent on a box"),
            LevelErr::BoxOutOfBounds(pos) => write!(f, "Box out of bounds at {}", pos),
            LevelErr::BoxOnBlock(pos) => write!(f, "Box on a block at {}", pos),
            LevelErr::DuplicateBox(pos) => write!(f, "Multiple boxes at {}", pos),
            LevelErr::BoxesTargets { boxes, targets } => write!(
                f,
                "Different number of boxes ({}) and targets ({})",
                boxes, targets
            ),
        }
    }
}

impl Error for LevelErr {}

#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub map: Map,
    pub state: State,
}

impl Level {
    pub fn new(map: Map, state: State) -> Result<Self, LevelErr> {
        if !map.in_bounds(state.agent) {
            return Err(LevelErr::AgentOutOfBounds);
        }
        if map.is_block(state.agent) {
            return Err(LevelErr::AgentOnBlock);
        }
        if state.has_box(state.agent) {
            return Err(LevelErr::AgentOnBox);
        }
        for &pos in &state.boxes {
            if !map.in_bounds(pos) {
                return Err(LevelErr::BoxOutOfBounds(pos));
            }
            if map.is_block(pos) {
                return Err(LevelErr::BoxOnBlock(pos));
            }
        }
        // boxes are sorted so duplicates are next to each other
        if let Some(w) = state.boxes.windows(2).find(|w| w[0] == w[1]) {
            return Err(LevelErr::DuplicateBox(w[0]));
        }
        if state.boxes.len() != map.targets().len() {
            return Err(LevelErr::BoxesTargets {
                boxes: state.boxes.len(),
                targets: map.targets().len(),
            });
        }

        Ok(Level { map, state })
    }

    /// Parses `level` in the given format instead of detecting it.
    pub fn parse_format(level: &str, format: Format) -> Result<Self, ParserErr> {
        parser::parse_format(level, format)
    }

    pub fn format(&self) -> MapFormatter<'_> {
        self.map.format_with_state(&self.state)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.format())
    }
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = fs::read_to_string(self)?;
        let level = parser::parse(&level)?;
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::MapCell::{Block, Floor};

    fn map() -> Map {
        let rows = vec![
            vec![Block, Block, Block, Block, Block],
            vec![Block, Floor, Floor, Floor, Block],
            vec![Block, Block, Block, Block, Block],
        ];
        Map::new(rows, vec![Pos::new(1, 3)]).unwrap()
    }

    #[test]
    fn valid_level() {
        let level = Level::new(map(), State::new(Pos::new(1, 1), vec![Pos::new(1, 2)])).unwrap();
        assert_eq!(level.to_string(), "#####\n#@$.#\n#####\n");
    }

    #[test]
    fn invalid_states() {
        let check = |agent: Pos, boxes: Vec<Pos>| Level::new(map(), State::new(agent, boxes)).unwrap_err();

        assert_eq!(check(Pos::new(3, 1), vec![Pos::new(1, 2)]), LevelErr::AgentOutOfBounds);
        assert_eq!(check(Pos::new(0, 1), vec![Pos::new(1, 2)]), LevelErr::AgentOnBlock);
        assert_eq!(check(Pos::new(1, 2), vec![Pos::new(1, 2)]), LevelErr::AgentOnBox);
        assert_eq!(
            check(Pos::new(1, 1), vec![Pos::new(1, 5)]),
            LevelErr::BoxOutOfBounds(Pos::new(1, 5))
        );
        assert_eq!(
            check(Pos::new(1, 1), vec![Pos::new(2, 2)]),
            LevelErr::BoxOnBlock(Pos::new(2, 2))
        );
        assert_eq!(
            check(Pos::new(1, 1), vec![Pos::new(1, 2), Pos::new(1, 2)]),
            LevelErr::DuplicateBox(Pos::new(1, 2))
        );
        assert_eq!(
            check(Pos::new(1, 1), vec![]),
            LevelErr::BoxesTargets { boxes: 0, targets: 1 }
        );
    }

    #[test]
    fn loading_missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }

    #[test]
    fn loading_level() {
        let level = "levels/custom/01-corridor.txt".load_level().unwrap();
        assert_eq!(level.state.agent, Pos::new(1, 1));
        assert_eq!(level.map.targets(), &[Pos::new(1, 3)]);
    }
}
