// Library surface for the binary, headless tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod card;
pub mod config;
pub mod deck;
pub mod keymap;
pub mod runtime;
pub mod session;
pub mod ui;

pub use card::Card;
pub use deck::{Deck, DeckCache, DeckError};
pub use session::{Action, Face, Position, Session, ToggleLabel};
