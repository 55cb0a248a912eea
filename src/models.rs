use crate::core::{GameState, MoveKind};

pub struct GameRenderState {
    pub game: GameState,
    pub solved: bool,
    pub last_move: Option<MoveKind>,
}
