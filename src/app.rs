use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::{
    deck::Deck,
    keymap::{command_for, Command},
    session::Session,
};

#[derive(Debug)]
pub struct App {
    pub title: String,
    pub session: Session,
    pub should_quit: bool,
}

impl App {
    pub fn new(title: impl Into<String>, deck: Arc<Deck>) -> Self {
        Self::starting_at(title, deck, 0)
    }

    pub fn starting_at(title: impl Into<String>, deck: Arc<Deck>, start: usize) -> Self {
        Self {
            title: title.into(),
            session: Session::starting_at(deck, start),
            should_quit: false,
        }
    }

    /// Apply one key press. Returns true when the view needs a redraw.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match command_for(key) {
            Some(Command::Apply(action)) => {
                self.session.apply(action);
                true
            }
            Some(Command::Quit) => {
                self.should_quit = true;
                false
            }
            None => false,
        }
    }
}
