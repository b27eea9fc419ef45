use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

/// Node counts per depth for one search direction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created: Vec<usize>,
    visited: Vec<usize>,
    duplicates: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> usize {
        self.created.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicates.iter().sum()
    }

    /// Deepest depth at which a state was visited.
    pub fn max_depth(&self) -> Option<usize> {
        self.visited.iter().rposition(|&cnt| cnt > 0)
    }

    /// Returns true if this is the first node at `depth`.
    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicates, depth)
    }

    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
        ]));

        let get = |counts: &[usize], i: usize| counts.get(i).cloned().unwrap_or(0);
        let depths = self
            .created
            .len()
            .max(self.visited.len())
            .max(self.duplicates.len());
        for i in 0..depths {
            let created = get(&self.created, i);
            let visited = get(&self.visited, i);
            let duplicates = get(&self.duplicates, i);
            // can underflow for iterative deepening where the root is never created at depth 0
            let unknown = created.saturating_sub(visited + duplicates);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", i)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&unknown.separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not reached total: {}",
            created.saturating_sub(visited + duplicates).separated_string()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.table())
    }
}
