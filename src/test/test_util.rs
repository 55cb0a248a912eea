pub use dissimilar::diff as __diff;

use crate::console_interface::render_game_to_string;
use crate::core::{Direction, GameState, LevelCatalog, MoveKind, SessionUpdate, apply_move, new_game};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub catalog: LevelCatalog,
    pub state: GameState,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let catalog = LevelCatalog::from_text(level).expect("level text should parse");
        assert!(!catalog.is_empty(), "level text produced no playable maze");
        let state = new_game(&catalog, 0);
        Self { catalog, state }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.state).trim_matches('\n').into()
    }

    /// Apply a move; None when the state is solved and the input is ignored.
    pub fn try_move(&mut self, dir: Direction) -> Option<MoveKind> {
        match apply_move(&self.state, dir) {
            SessionUpdate::Next(next, kind) => {
                self.state = next;
                Some(kind)
            }
            SessionUpdate::Ignored => None,
        }
    }

    pub fn assert_move(&mut self, dir: Direction) -> MoveKind {
        self.try_move(dir)
            .unwrap_or_else(|| panic!("move ignored in map\n{}", self.game_to_string()))
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
