use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::{card::Card, deck::Deck};

/// Inbound user actions; the only way a session changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Action {
    Toggle,
    Next,
    Prev,
}

/// Caption for the reveal/hide control
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ToggleLabel {
    #[strum(to_string = "Show answer")]
    Reveal,
    #[strum(to_string = "Hide answer")]
    Hide,
}

/// What the current card shows: the question alone, or both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face<'a> {
    Question(&'a str),
    Both { question: &'a str, answer: &'a str },
}

impl Face<'_> {
    pub fn question(&self) -> &str {
        match self {
            Face::Question(q) | Face::Both { question: q, .. } => *q,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Face::Question(_) => None,
            Face::Both { answer, .. } => Some(*answer),
        }
    }
}

/// Card position and answer visibility as a plain value.
///
/// Transitions consume the old value and return the new one. `len` is the
/// deck size; `index < len` holds after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub index: usize,
    pub show_answer: bool,
}

impl Position {
    /// Position `start` wrapped into the deck, answer hidden.
    pub fn at(start: usize, len: NonZeroUsize) -> Self {
        Self {
            index: start % len.get(),
            show_answer: false,
        }
    }

    pub fn toggle_answer(self) -> Self {
        Self {
            show_answer: !self.show_answer,
            ..self
        }
    }

    pub fn next(self, len: NonZeroUsize) -> Self {
        Self {
            index: (self.index + 1) % len.get(),
            show_answer: false,
        }
    }

    pub fn prev(self, len: NonZeroUsize) -> Self {
        let len = len.get();
        Self {
            index: (self.index % len + len - 1) % len,
            show_answer: false,
        }
    }

    pub fn apply(self, action: Action, len: NonZeroUsize) -> Self {
        match action {
            Action::Toggle => self.toggle_answer(),
            Action::Next => self.next(len),
            Action::Prev => self.prev(len),
        }
    }
}

/// One user's run through a shared deck
#[derive(Debug, Clone)]
pub struct Session {
    deck: Arc<Deck>,
    position: Position,
}

impl Session {
    pub fn new(deck: Arc<Deck>) -> Self {
        Self {
            deck,
            position: Position::default(),
        }
    }

    /// Start on card `start` (0-based, wrapped into the deck).
    pub fn starting_at(deck: Arc<Deck>, start: usize) -> Self {
        let position = Position::at(start, deck.size());
        Self { deck, position }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn index(&self) -> usize {
        self.position.index
    }

    pub fn show_answer(&self) -> bool {
        self.position.show_answer
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn toggle_answer(&mut self) {
        self.position = self.position.toggle_answer();
    }

    pub fn next(&mut self) {
        self.position = self.position.next(self.deck.size());
    }

    pub fn prev(&mut self) {
        self.position = self.position.prev(self.deck.size());
    }

    pub fn apply(&mut self, action: Action) {
        self.position = self.position.apply(action, self.deck.size());
        tracing::debug!(
            %action,
            index = self.position.index,
            show_answer = self.position.show_answer,
            "session transition"
        );
    }

    pub fn current_card(&self) -> &Card {
        self.deck.get(self.position.index)
    }

    pub fn face(&self) -> Face<'_> {
        let card = self.current_card();
        if self.position.show_answer {
            Face::Both {
                question: &card.question,
                answer: &card.answer,
            }
        } else {
            Face::Question(&card.question)
        }
    }

    pub fn display_text(&self) -> String {
        match self.face() {
            Face::Question(q) => q.to_string(),
            Face::Both { question, answer } => format!("{question}\n\nAnswer: {answer}"),
        }
    }

    /// `(index + 1) / N`, always in `(0, 1]`
    pub fn progress_fraction(&self) -> f64 {
        (self.position.index + 1) as f64 / self.deck.len() as f64
    }

    pub fn toggle_label(&self) -> ToggleLabel {
        if self.position.show_answer {
            ToggleLabel::Hide
        } else {
            ToggleLabel::Reveal
        }
    }

    /// 1-based "Card i / N" caption
    pub fn position_label(&self) -> String {
        format!("Card {} / {}", self.position.index + 1, self.deck.len())
    }
}
