use std::collections::HashSet;

use crate::core::update::resolve_move;
use crate::core::{
    Actor, CellType, Direction, GameState, LevelCatalog, MoveOutcome, Position, SessionUpdate,
    Snapshot,
};

/// Fresh state for the given level: actor, walls, boxes, and targets are
/// re-derived from the maze, counters and history cleared.
///
/// Callers clamp the index first (`change_level`); an out-of-range level is
/// a caller bug and panics like any out-of-range index.
pub fn new_game(catalog: &LevelCatalog, level: usize) -> GameState {
    let maze = catalog.get(level).expect("level index out of catalog range");
    let actor_pos = maze
        .position_of(CellType::Actor)
        .expect("maze defines no actor cell");
    GameState {
        level,
        width: maze.width,
        height: maze.height,
        actor: Actor {
            pos: actor_pos,
            facing: Direction::Down,
            pushing: false,
        },
        walls: maze.positions_of(CellType::Wall).into_iter().collect(),
        boxes: maze.positions_of(CellType::Box),
        targets: maze.positions_of(CellType::Target).into_iter().collect(),
        move_step: 0,
        legal_moves: 0,
        history: Vec::new(),
    }
}

/// Resolve one requested move against `state` and produce the successor.
///
/// `move_step` ticks on every attempt, bumps included. Legal moves
/// additionally bump `legal_moves` and push a pre-move snapshot for undo.
/// Movement input against a solved state is ignored outright.
pub fn apply_move(state: &GameState, dir: Direction) -> SessionUpdate {
    if state.is_solved() {
        return SessionUpdate::Ignored;
    }

    let outcome = resolve_move(state, dir);
    let kind = outcome.kind();
    let mut next = state.clone();
    next.move_step += 1;
    match outcome {
        MoveOutcome::Bumped { actor } => {
            next.actor = actor;
        }
        MoveOutcome::Walked { actor } => {
            next.history.push(snapshot(state));
            next.actor = actor;
            next.legal_moves += 1;
        }
        MoveOutcome::Pushed { actor, box_index } => {
            next.history.push(snapshot(state));
            next.actor = actor;
            // The pushed box lands one cell past the actor's new position.
            next.boxes[box_index] = actor.pos + dir;
            next.legal_moves += 1;
        }
    }
    debug_assert!(state_is_consistent(&next));
    SessionUpdate::Next(next, kind)
}

/// Walk back exactly one legal move. No-op on empty history, so undo never
/// fails; each call consumes one snapshot (strict LIFO). A solved level
/// only accepts reset, level navigation, and advance, so undo is ignored
/// there too.
pub fn undo(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.is_solved() {
        return next;
    }
    if let Some(snap) = next.history.pop() {
        next.actor = snap.actor;
        next.boxes = snap.boxes;
        next.move_step = snap.move_step;
        next.legal_moves = snap.legal_moves;
    }
    next
}

/// Restart the current level from its initial layout.
pub fn reset(catalog: &LevelCatalog, state: &GameState) -> GameState {
    new_game(catalog, state.level)
}

/// Level index shifted by `delta`, clamped into the catalog's range. Does
/// not rebuild state; combine with `new_game` at the returned index.
pub fn change_level(catalog: &LevelCatalog, state: &GameState, delta: i32) -> usize {
    let last = catalog.len().saturating_sub(1) as i32;
    (state.level as i32 + delta).clamp(0, last) as usize
}

fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        actor: state.actor,
        boxes: state.boxes.clone(),
        move_step: state.move_step,
        legal_moves: state.legal_moves,
    }
}

/// Invariant check behind every applied move: boxes never stack, and
/// neither boxes nor the actor share a cell with a wall.
pub fn state_is_consistent(state: &GameState) -> bool {
    let unique: HashSet<&Position> = state.boxes.iter().collect();
    unique.len() == state.boxes.len()
        && !state.boxes.iter().any(|b| state.walls.contains(b))
        && !state.walls.contains(&state.actor.pos)
}
