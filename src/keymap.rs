use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Action;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // ctrl+c to quit, every other chord is ignored
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up | KeyCode::Down => {
            Command::Apply(Action::Toggle)
        }
        KeyCode::Char('f') => Command::Apply(Action::Toggle),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('n') => {
            Command::Apply(Action::Next)
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('p') => {
            Command::Apply(Action::Prev)
        }
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };

    Some(command)
}
