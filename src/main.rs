// Terminal Sokoban with ratatui.
// Controls: WASD or arrow keys to move, U/Backspace undo, R reset,
// N/P level navigation, Space to advance after solving, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

mod console_interface;
mod core;
mod models;
#[cfg(test)]
mod test;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal,
};
use crate::core::{
    GameState, LevelCatalog, SessionUpdate, apply_move, change_level, new_game, reset, undo,
};
use crate::models::GameRenderState;
use serde::{Deserialize, Serialize};

// Fallback pack used when no file is given. Same document format as any
// external pack: annotation lines, blank-separated blocks, caption lines.
const BUILTIN_PACK: &str = r#"
Boxman built-in pack
Three warm-up levels in classic notation.

#####
#.$@#
#####
Level: Nudge

 #####
##   #
# .$ #
# .$ #
##  @#
 #####
Level: Twins

####
# .#
#  ###
#*@  #
#  $ #
#  ###
####
Level: Corner
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());
    let pack_path = std::env::args().nth(2);

    let catalog = match pack_path {
        Some(path) => LevelCatalog::from_file(&path)?,
        None => LevelCatalog::from_text(BUILTIN_PACK)?,
    };
    if catalog.is_empty() {
        return Err("no playable levels in pack".into());
    }

    match switch.as_str() {
        "catalog" => {
            println!("{}", catalog_json(&catalog)?);
        }
        "interactive" => {
            run_interactive(&catalog)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'catalog'. defaulting to interactive",
                switch
            );
            run_interactive(&catalog)?;
        }
    }

    Ok(())
}

fn run_interactive(catalog: &LevelCatalog) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let mut state = new_game(catalog, 0);
    let mut last_move = None;

    render_game(&mut terminal, &render_state_of(&state, last_move))?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(Move(dir)) => {
                match apply_move(&state, dir) {
                    SessionUpdate::Next(next, kind) => {
                        state = next;
                        last_move = Some(kind);
                    }
                    SessionUpdate::Ignored => {
                        last_move = None;
                    }
                }
                render_game(&mut terminal, &render_state_of(&state, last_move))?;
            }
            Ok(Undo) => {
                state = undo(&state);
                last_move = None;
                render_game(&mut terminal, &render_state_of(&state, last_move))?;
            }
            Ok(Reset) => {
                state = reset(catalog, &state);
                last_move = None;
                render_game(&mut terminal, &render_state_of(&state, last_move))?;
            }
            Ok(NextLevel) => {
                state = new_game(catalog, change_level(catalog, &state, 1));
                last_move = None;
                render_game(&mut terminal, &render_state_of(&state, last_move))?;
            }
            Ok(PrevLevel) => {
                state = new_game(catalog, change_level(catalog, &state, -1));
                last_move = None;
                render_game(&mut terminal, &render_state_of(&state, last_move))?;
            }
            Ok(Advance) => {
                if state.is_solved() {
                    state = new_game(catalog, change_level(catalog, &state, 1));
                    last_move = None;
                    render_game(&mut terminal, &render_state_of(&state, last_move))?;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}

fn render_state_of(state: &GameState, last_move: Option<crate::core::MoveKind>) -> GameRenderState {
    GameRenderState {
        solved: state.is_solved(),
        last_move,
        game: state.clone(),
    }
}

#[derive(Serialize, Deserialize, Debug)]
struct CatalogJson {
    levels: Vec<LevelJson>,
}

#[derive(Serialize, Deserialize, Debug)]
struct LevelJson {
    index: usize,
    width: i32,
    height: i32,
    boxes: usize,
    targets: usize,
}

fn catalog_json(catalog: &LevelCatalog) -> Result<String, serde_json::Error> {
    let levels = catalog
        .iter()
        .enumerate()
        .map(|(index, maze)| LevelJson {
            index,
            width: maze.width,
            height: maze.height,
            boxes: maze.positions_of(crate::core::CellType::Box).len(),
            targets: maze.positions_of(crate::core::CellType::Target).len(),
        })
        .collect();
    serde_json::to_string_pretty(&CatalogJson { levels })
}
