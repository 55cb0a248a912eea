use crate::core::{Actor, Direction, GameState, MoveOutcome};

/// Decide how a requested move resolves. Pure: inspects the state, never
/// mutates it.
///
/// Exactly one of three outcomes per call: bump (facing-only change), plain
/// walk, or a push relocating one box. A push is legal only when the cell
/// beyond the box is neither wall nor box.
pub fn resolve_move(state: &GameState, dir: Direction) -> MoveOutcome {
    let ahead = state.actor.pos + dir;

    if state.walls.contains(&ahead) {
        return MoveOutcome::Bumped {
            actor: Actor {
                pos: state.actor.pos,
                facing: dir,
                pushing: false,
            },
        };
    }

    if let Some(box_index) = state.boxes.iter().position(|&b| b == ahead) {
        let beyond = ahead + dir;
        if state.walls.contains(&beyond) || state.boxes.contains(&beyond) {
            return MoveOutcome::Bumped {
                actor: Actor {
                    pos: state.actor.pos,
                    facing: dir,
                    pushing: false,
                },
            };
        }
        return MoveOutcome::Pushed {
            actor: Actor {
                pos: ahead,
                facing: dir,
                pushing: true,
            },
            box_index,
        };
    }

    // Poised-to-push: after a plain walk, the pushing flag goes up when a box
    // sits one cell further ahead. Governs sprite posture, not legality.
    let poised = state.boxes.contains(&(ahead + dir));
    MoveOutcome::Walked {
        actor: Actor {
            pos: ahead,
            facing: dir,
            pushing: poised,
        },
    }
}
