use crate::data::{MapCell, Pos};
use crate::level::LevelErr;
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level: which cells are passable and where the boxes should end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    grid: Vec2d<MapCell>,
    targets: Vec<Pos>,
}

impl Map {
    pub fn new(rows: Vec<Vec<MapCell>>, mut targets: Vec<Pos>) -> Result<Self, LevelErr> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LevelErr::Empty);
        }
        if let Some(r) = rows.iter().position(|row| row.len() != rows[0].len()) {
            return Err(LevelErr::NotRectangular(r));
        }

        let grid = Vec2d::new(rows);
        for &target in &targets {
            if !grid.contains(target) {
                return Err(LevelErr::TargetOutOfBounds(target));
            }
            if grid[target] == MapCell::Block {
                return Err(LevelErr::TargetOnBlock(target));
            }
        }

        // sorted so comparisons with box sets don't depend on input order
        targets.sort();
        targets.dedup();

        Ok(Map { grid, targets })
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// Panics if `pos` is out of bounds - check `in_bounds` first.
    pub fn is_block(&self, pos: Pos) -> bool {
        self.grid[pos] == MapCell::Block
    }

    /// Whether an agent or a box can stand on `pos` (ignoring other boxes).
    pub fn is_passable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.is_block(pos)
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.targets.binary_search(&pos).is_ok()
    }

    pub(crate) fn grid(&self) -> &Vec2d<MapCell> {
        &self.grid
    }

    pub fn format(&self) -> MapFormatter<'_> {
        MapFormatter::new(self, None)
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }
}
