use std::ops::Add;

use crate::core::{CellType, Direction, GameState, Maze, MoveKind, MoveOutcome, Position};

impl Direction {
    /// Unit (dcol, dline) delta for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        let (dcol, dline) = dir.delta();
        Position {
            col: self.col + dcol,
            line: self.line + dline,
        }
    }
}

impl Maze {
    /// Position of the first cell of the given kind, if any.
    pub fn position_of(&self, kind: CellType) -> Option<Position> {
        self.cells.iter().find(|c| c.kind == kind).map(|c| c.pos)
    }

    pub fn positions_of(&self, kind: CellType) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.pos)
            .collect()
    }
}

impl GameState {
    /// Solved iff the box-position set equals the target-position set.
    /// Boxes never stack, so equal cardinality plus containment suffices.
    pub fn is_solved(&self) -> bool {
        self.boxes.len() == self.targets.len()
            && self.boxes.iter().all(|b| self.targets.contains(b))
    }

    pub fn is_target(&self, pos: Position) -> bool {
        self.targets.contains(&pos)
    }

    pub fn boxes_on_targets(&self) -> usize {
        self.boxes
            .iter()
            .filter(|b| self.targets.contains(b))
            .count()
    }
}

impl MoveOutcome {
    pub fn kind(&self) -> MoveKind {
        match self {
            MoveOutcome::Bumped { .. } => MoveKind::Bump,
            MoveOutcome::Walked { .. } => MoveKind::Walk,
            MoveOutcome::Pushed { .. } => MoveKind::Push,
        }
    }
}
