use std::fmt;
use std::fs;
use std::io;

use crate::core::consts::{MAX_MAZE_HEIGHT, MAX_MAZE_WIDTH};
use crate::core::{Cell, CellType, Maze, Position};

/// Error type for level-pack loading.
#[derive(Debug)]
pub enum LevelError {
    /// IO error when reading from file
    Io(io::Error),
    /// The pack supplied no lines at all
    Empty,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(err) => write!(f, "IO error: {}", err),
            LevelError::Empty => write!(f, "level pack has no lines"),
        }
    }
}

impl std::error::Error for LevelError {}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

/// Ordered, read-only sequence of playable mazes. Loaded once, referenced by
/// index for the rest of the process.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    mazes: Vec<Maze>,
}

impl LevelCatalog {
    /// Parse a level-pack document.
    ///
    /// Leading lines that are blank or contain characters outside the maze
    /// alphabet (`#` and space) are annotation and get discarded. The rest
    /// splits into blocks at blank lines; within a block, trailing lines
    /// that contain a colon or no wall symbol are captions and get dropped.
    /// Blocks at or beyond the capacity limits are omitted without error, so
    /// an all-oversized pack yields an empty (but valid) catalog.
    pub fn from_text(contents: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = contents.lines().collect();
        if lines.is_empty() {
            return Err(LevelError::Empty);
        }

        let body: Vec<&str> = lines
            .iter()
            .skip_while(|line| {
                line.trim().is_empty() || line.chars().any(|c| c != '#' && c != ' ')
            })
            .copied()
            .collect();

        let mazes = split_blocks(&body)
            .into_iter()
            .map(|block| {
                let trimmed = drop_trailing_captions(block);
                parse_maze(&trimmed)
            })
            .filter(|maze| {
                !maze.cells.is_empty()
                    && maze.height < MAX_MAZE_HEIGHT
                    && maze.width < MAX_MAZE_WIDTH
            })
            .collect();

        Ok(LevelCatalog { mazes })
    }

    pub fn from_file(path: &str) -> Result<Self, LevelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth maze (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Maze> {
        self.mazes.get(index)
    }

    pub fn len(&self) -> usize {
        self.mazes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mazes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Maze> {
        self.mazes.iter()
    }
}

/// Split lines into blocks separated by blank lines.
fn split_blocks<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for &line in lines {
        if line.trim().is_empty() {
            blocks.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    blocks.push(current);
    blocks
}

/// Metadata lines trailing a grid: they carry a colon or lack any wall.
fn drop_trailing_captions(mut block: Vec<&str>) -> Vec<&str> {
    while let Some(last) = block.last() {
        if last.contains(':') || !last.contains('#') {
            block.pop();
        } else {
            break;
        }
    }
    block
}

/// Cell types encoded by one map symbol. `+` and `*` stack two logical
/// cells on a single position.
fn decode(symbol: char) -> &'static [CellType] {
    match symbol {
        '#' => &[CellType::Wall],
        '.' => &[CellType::Target],
        'M' | '@' => &[CellType::Actor],
        'B' | '$' => &[CellType::Box],
        '+' => &[CellType::Actor, CellType::Target],
        '*' => &[CellType::Box, CellType::Target],
        _ => &[],
    }
}

fn parse_maze(block: &[&str]) -> Maze {
    let mut cells = Vec::new();
    for (line_idx, line) in block.iter().enumerate() {
        for (col_idx, symbol) in line.chars().enumerate() {
            let pos = Position {
                col: col_idx as i32,
                line: line_idx as i32,
            };
            for &kind in decode(symbol) {
                cells.push(Cell { pos, kind });
            }
        }
    }
    let width = block.iter().map(|line| line.len()).max().unwrap_or(0);
    Maze {
        width: width as i32,
        height: block.len() as i32,
        cells,
    }
}
