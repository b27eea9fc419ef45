use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::map::Map;
use crate::state::State;

/// Renders a map, optionally with a state on top of it, in XSB notation.
#[derive(Clone, Copy)]
pub struct MapFormatter<'a> {
    map: &'a Map,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a Map, state: Option<&'a State>) -> Self {
        Self { map, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.map.grid();
        let mut state_grid = grid.scratchpad();
        if let Some(state) = self.state {
            for &b in &state.boxes {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.agent] = Contents::Agent;
        }

        for r in 0..grid.rows() as i32 {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = None;
            for c in 0..grid.cols() as i32 {
                let pos = Pos::new(r, c);
                if grid[pos] != MapCell::Floor
                    || self.map.is_target(pos)
                    || state_grid[pos] != Contents::Empty
                {
                    last_non_empty = Some(c);
                }
            }

            if let Some(last) = last_non_empty {
                for c in 0..=last {
                    let pos = Pos::new(r, c);
                    Self::write_cell(grid[pos], self.map.is_target(pos), state_grid[pos], f)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell(
        cell: MapCell,
        target: bool,
        contents: Contents,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        match (cell, target, contents) {
            (MapCell::Floor, false, Contents::Empty) => write!(f, " "),
            (MapCell::Floor, false, Contents::Box) => write!(f, "$"),
            (MapCell::Floor, false, Contents::Agent) => write!(f, "@"),
            (MapCell::Floor, true, Contents::Empty) => write!(f, "."),
            (MapCell::Floor, true, Contents::Box) => write!(f, "*"),
            (MapCell::Floor, true, Contents::Agent) => write!(f, "+"),
            (MapCell::Block, false, Contents::Empty) => write!(f, "#"),
            (MapCell::Block, _, _) => unreachable!("Block with a target or non-empty contents"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    #[test]
    fn formatting_level() {
        let xsb: &str = r"
######
#+$. #
# *$ #
######
"
        .trim_start_matches('\n');

        let level: Level = xsb.parse().unwrap();
        assert_eq!(level.to_string(), xsb);
        assert_eq!(format!("{:?}", level), xsb);
        assert_eq!(level.format().to_string(), xsb);
        assert_eq!(level.map.format_with_state(&level.state).to_string(), xsb);
    }

    #[test]
    fn formatting_map() {
        let xsb_level: &str = r"
 ####
##@$.#
 ####
"
        .trim_start_matches('\n');
        let xsb_map: &str = r"
 ####
##  .#
 ####
"
        .trim_start_matches('\n');

        let level: Level = xsb_level.parse().unwrap();
        assert_eq!(level.map.format().to_string(), xsb_map);
    }

    #[test]
    fn formatting_grid_format_level() {
        let grid = "
2 3
1r 1b 1p
x 1 1
";
        let level: Level = grid.parse().unwrap();
        assert_eq!(level.to_string(), "@$.\n#\n");
    }
}
