use std::collections::HashSet;

/// Zero-based (column, line) cell coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub col: i32,
    pub line: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellType {
    Wall,
    Target,
    Actor,
    Box,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub pos: Position,
    pub kind: CellType,
}

/// Immutable level definition. Built once by the loader, never mutated.
/// One source symbol may contribute two overlapping cells at the same
/// position (actor-on-target, box-on-target).
#[derive(Clone, Debug)]
pub struct Maze {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<Cell>,
}

/// The player-controlled entity. Facing and the pushing flag are
/// presentational leftovers of the last resolved move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Actor {
    pub pos: Position,
    pub facing: Direction,
    pub pushing: bool,
}

/// The replayable portion of a state, one pushed per legal move.
#[derive(Clone, PartialEq, Debug)]
pub struct Snapshot {
    pub actor: Actor,
    pub boxes: Vec<Position>,
    pub move_step: u32,
    pub legal_moves: u32,
}

/// One in-progress level attempt. Replaced, never mutated in place:
/// every session operation takes a state and returns a new one.
/// `walls` and `targets` are fixed for the lifetime of a level.
#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    pub level: usize,
    pub width: i32,
    pub height: i32,
    pub actor: Actor,
    pub walls: HashSet<Position>,
    pub boxes: Vec<Position>,
    pub targets: HashSet<Position>,
    /// Ticks on every attempted move, bumps included. Drives walk-phase
    /// alternation only.
    pub move_step: u32,
    /// Counts only moves that relocated the actor or a box.
    pub legal_moves: u32,
    pub history: Vec<Snapshot>,
}

/// Decision of the move resolver. Never an error: a blocked move still
/// reorients the actor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Blocked by a wall or an unpushable box; only facing changes.
    Bumped { actor: Actor },
    Walked { actor: Actor },
    /// The box at `box_index` advances one cell along with the actor.
    Pushed { actor: Actor, box_index: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Walk,
    Push,
    Bump,
}

/// Result of applying a move through the session layer.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionUpdate {
    Next(GameState, MoveKind),
    /// A solved level is a sink for movement input.
    Ignored,
}
