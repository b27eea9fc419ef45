use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::level::{Level, LevelErr};
use crate::map::Map;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    Header,
    RowCount { expected: usize, found: usize },
    RowLength(usize),
    MultipleAgents,
    NoAgent,
    Level(LevelErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Header => write!(f, "First line must contain the height and width"),
            ParserErr::RowCount { expected, found } => {
                write!(f, "Expected {} rows, found {}", expected, found)
            }
            ParserErr::RowLength(r) => write!(f, "Wrong number of cells on row {}", r),
            ParserErr::MultipleAgents => write!(f, "More than one agent"),
            ParserErr::NoAgent => write!(f, "No agent"),
            ParserErr::Level(err) => write!(f, "Invalid level: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<LevelErr> for ParserErr {
    fn from(err: LevelErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Everything a level description contains before validation.
#[derive(Default)]
struct RawLevel {
    rows: Vec<Vec<MapCell>>,
    targets: Vec<Pos>,
    boxes: Vec<Pos>,
    agent: Option<Pos>,
}

impl RawLevel {
    fn set_agent(&mut self, r: usize, c: usize) -> Result<(), ParserErr> {
        if self.agent.is_some() {
            return Err(ParserErr::MultipleAgents);
        }
        self.agent = Some(pos(r, c));
        Ok(())
    }

    fn into_level(self) -> Result<Level, ParserErr> {
        let agent = self.agent.ok_or(ParserErr::NoAgent)?;
        let map = Map::new(self.rows, self.targets)?;
        Ok(Level::new(map, State::new(agent, self.boxes))?)
    }
}

fn pos(r: usize, c: usize) -> Pos {
    Pos::new(r as i32, c as i32)
}

pub(crate) fn detect_format(level: &str) -> Format {
    let header = level.lines().find(|line| !line.trim().is_empty());
    let is_size = |line: &str| {
        let parts: Vec<_> = line.split_whitespace().collect();
        parts.len() == 2 && parts.iter().all(|p| p.parse::<usize>().is_ok())
    };
    match header {
        Some(line) if is_size(line) => Format::Grid,
        _ => Format::Xsb,
    }
}

pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    parse_format(level, detect_format(level))
}

pub(crate) fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let raw = match format {
        Format::Grid => parse_grid(level)?,
        Format::Xsb => parse_xsb(level)?,
    };
    raw.into_level()
}

/// Grid format: a `height width` header followed by rows of
/// whitespace separated cells. Each cell is a tag (`x` for a block, anything else
/// is floor) optionally followed by `b` (box), `p` (target) or `r` (robot/agent).
fn parse_grid(level: &str) -> Result<RawLevel, ParserErr> {
    let mut lines = level.lines().skip_while(|line| line.trim().is_empty());

    let header: Vec<usize> = lines
        .next()
        .ok_or(ParserErr::Header)?
        .split_whitespace()
        .map(|part| part.parse().map_err(|_| ParserErr::Header))
        .collect::<Result<_, _>>()?;
    let (height, width) = match header[..] {
        [height, width] if height > 0 && width > 0 => (height, width),
        _ => return Err(ParserErr::Header),
    };

    let mut raw = RawLevel::default();
    for (r, line) in lines.enumerate() {
        if r >= height {
            if line.trim().is_empty() {
                continue;
            }
            return Err(ParserErr::RowCount {
                expected: height,
                found: r + 1,
            });
        }

        let mut row = Vec::with_capacity(width);
        for (c, token) in line.split_whitespace().enumerate() {
            let mut chars = token.chars();
            let tag = chars.next().ok_or(ParserErr::Pos(r, c))?;
            row.push(if tag == 'x' {
                MapCell::Block
            } else {
                MapCell::Floor
            });

            match chars.next() {
                None => {}
                Some('b') => raw.boxes.push(pos(r, c)),
                Some('p') => raw.targets.push(pos(r, c)),
                Some('r') => raw.set_agent(r, c)?,
                Some(_) => return Err(ParserErr::Pos(r, c)),
            }
            if chars.next().is_some() {
                return Err(ParserErr::Pos(r, c));
            }
        }

        if row.len() != width {
            return Err(ParserErr::RowLength(r));
        }
        raw.rows.push(row);
    }

    if raw.rows.len() != height {
        return Err(ParserErr::RowCount {
            expected: height,
            found: raw.rows.len(),
        });
    }
    Ok(raw)
}

fn parse_xsb(level: &str) -> Result<RawLevel, ParserErr> {
    let mut raw = RawLevel::default();

    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = match cur_char {
                '#' => MapCell::Block,
                ' ' | '-' | '_' => MapCell::Floor,
                '.' => {
                    raw.targets.push(pos(r, c));
                    MapCell::Floor
                }
                '$' => {
                    raw.boxes.push(pos(r, c));
                    MapCell::Floor
                }
                '*' => {
                    raw.boxes.push(pos(r, c));
                    raw.targets.push(pos(r, c));
                    MapCell::Floor
                }
                '@' => {
                    raw.set_agent(r, c)?;
                    MapCell::Floor
                }
                '+' => {
                    raw.set_agent(r, c)?;
                    raw.targets.push(pos(r, c));
                    MapCell::Floor
                }
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(cell);
        }
        raw.rows.push(row);
    }

    // pad all rows to have the same length, the padding is outside the level
    let max_cols = raw.rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut raw.rows {
        row.resize(max_cols, MapCell::Floor);
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detecting_format() {
        assert_eq!(detect_format("\n3 4\n1r 1 1b 1p"), Format::Grid);
        assert_eq!(detect_format("#####\n#@$.#\n#####"), Format::Xsb);
        assert_eq!(detect_format("1 2 3\n"), Format::Xsb);
        assert_eq!(detect_format(""), Format::Xsb);
    }

    #[test]
    fn parsing_xsb() {
        let level: Level = r"
  #####
###   #
#.@$  #
#######
"
        .parse()
        .unwrap();

        assert_eq!(level.map.height(), 4);
        assert_eq!(level.map.width(), 7);
        assert_eq!(level.state.agent, Pos::new(2, 2));
        assert_eq!(level.state.boxes, vec![Pos::new(2, 3)]);
        assert_eq!(level.map.targets(), &[Pos::new(2, 1)]);
        assert!(level.map.is_block(Pos::new(0, 2)));
        assert!(!level.map.is_block(Pos::new(0, 0)));
    }

    #[test]
    fn parsing_grid() {
        let level = parse_format(
            "3 4\n1r 1 1b 1p\n1 x 2 1\n1 1\t1 1\n",
            Format::Grid,
        )
        .unwrap();

        assert_eq!(level.map.height(), 3);
        assert_eq!(level.map.width(), 4);
        assert_eq!(level.state.agent, Pos::new(0, 0));
        assert_eq!(level.state.boxes, vec![Pos::new(0, 2)]);
        assert_eq!(level.map.targets(), &[Pos::new(0, 3)]);
        assert!(level.map.is_block(Pos::new(1, 1)));
        assert!(!level.map.is_block(Pos::new(1, 2)));
    }

    #[test]
    fn grid_errors() {
        assert_eq!(parse_format("3\n1r", Format::Grid).unwrap_err(), ParserErr::Header);
        assert_eq!(parse_format("0 2\n", Format::Grid).unwrap_err(), ParserErr::Header);
        assert_eq!(
            parse_format("2 2\n1r 1", Format::Grid).unwrap_err(),
            ParserErr::RowCount {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            parse_format("1 2\n1r 1\n1 1", Format::Grid).unwrap_err(),
            ParserErr::RowCount {
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            parse_format("2 2\n1r 1\n1", Format::Grid).unwrap_err(),
            ParserErr::RowLength(1)
        );
        assert_eq!(
            parse_format("1 2\n1r 1q", Format::Grid).unwrap_err(),
            ParserErr::Pos(0, 1)
        );
        assert_eq!(
            parse_format("1 2\n1r 1bp", Format::Grid).unwrap_err(),
            ParserErr::Pos(0, 1)
        );
    }

    #[test]
    fn agent_errors() {
        assert_eq!("#$.#".parse::<Level>().unwrap_err(), ParserErr::NoAgent);
        assert_eq!(
            "#@$.@#".parse::<Level>().unwrap_err(),
            ParserErr::MultipleAgents
        );
        assert_eq!(
            parse_format("1 3\n1r 1r 1", Format::Grid).unwrap_err(),
            ParserErr::MultipleAgents
        );
    }

    #[test]
    fn invalid_cell() {
        assert_eq!(
            "####\n#@?#\n####".parse::<Level>().unwrap_err(),
            ParserErr::Pos(1, 2)
        );
    }

    #[test]
    fn validation_errors() {
        assert_eq!(
            "#@$$.#".parse::<Level>().unwrap_err(),
            ParserErr::Level(LevelErr::BoxesTargets {
                boxes: 2,
                targets: 1
            })
        );
        assert_eq!(
            parse_format("1 3\n1r xb 1p", Format::Grid).unwrap_err(),
            ParserErr::Level(LevelErr::BoxOnBlock(Pos::new(0, 1)))
        );
    }
}
