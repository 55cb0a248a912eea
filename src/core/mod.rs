mod consts;
mod levels;
mod model_helpers;
mod models;
mod session;
mod update;

pub use consts::*;
pub use levels::{LevelCatalog, LevelError};
pub use models::{
    Actor, Cell, CellType, Direction, GameState, Maze, MoveKind, MoveOutcome, Position,
    SessionUpdate, Snapshot,
};
pub use session::{apply_move, change_level, new_game, reset, state_is_consistent, undo};
pub use update::resolve_move;
