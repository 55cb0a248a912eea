use crate::core::{Direction, GameState, MoveKind, Position};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_game_to_string(&state.game);
        let title = format!("Boxman - Level {}", state.game.level + 1);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = render_status_line(state);
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

fn render_status_line(state: &GameRenderState) -> String {
    let game = &state.game;
    let mut status = format!(
        "Moves: {} | Boxes home: {}/{}",
        game.legal_moves,
        game.boxes_on_targets(),
        game.targets.len(),
    );
    if let Some(kind) = state.last_move {
        // Walk phase alternates with the step counter, push posture comes
        // from the actor flag.
        let tag = match kind {
            MoveKind::Push => "push",
            MoveKind::Bump => "bump",
            MoveKind::Walk if game.move_step % 2 == 0 => "step (L)",
            MoveKind::Walk => "step (R)",
        };
        status = format!("{} | Last: {}", status, tag);
    }
    if state.solved {
        status = format!("{} | Solved! Space for next level", status);
    } else {
        status = format!(
            "{} | Arrows/WASD move, U undo, R reset, N/P level, Q quit",
            status
        );
    }
    status
}

/// Text view of a state, one glyph per cell. Shared by the terminal view
/// and the tests.
pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for line in 0..game.height {
        for col in 0..game.width {
            let pos = Position { col, line };
            let has_actor = pos == game.actor.pos;
            let has_box = game.boxes.contains(&pos);
            let on_target = game.is_target(pos);
            let ch = if game.walls.contains(&pos) {
                '#'
            } else if has_actor {
                if on_target { '+' } else { '@' }
            } else if has_box {
                if on_target { '*' } else { '$' }
            } else if on_target {
                '.'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Reset,
    PrevLevel,
    NextLevel,
    Advance,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
                    ConsoleInput::Undo
                }
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NextLevel,
                KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('/') => {
                    ConsoleInput::PrevLevel
                }
                KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::Advance,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
