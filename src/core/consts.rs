/// Capacity limits of the play surface, both exclusive. Level blocks at or
/// beyond these bounds are silently dropped by the loader.
pub const MAX_MAZE_HEIGHT: i32 = 13;
pub const MAX_MAZE_WIDTH: i32 = 40;
