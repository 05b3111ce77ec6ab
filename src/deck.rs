use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::card::Card;

const FIELDS_PER_ROW: usize = 2;

/// Reasons a deck could not be built from its source
#[derive(Debug, Error)]
pub enum DeckError {
    /// The source file is missing or unreadable
    #[error("cannot read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// The csv reader rejected the input (bad quoting, invalid UTF-8, ...)
    #[error("cannot parse deck: {0}")]
    Csv(#[from] csv::Error),

    /// A row did not hold exactly a question and an answer.
    /// `row` is the 1-based record number, independent of line endings
    #[error("row {row}: expected 2 fields (question, answer), found {fields}")]
    Malformed { row: usize, fields: usize },

    /// The source parsed fine but held no cards
    #[error("deck has no cards")]
    Empty,
}

impl DeckError {
    /// True for the "source missing, unreadable or malformed" class.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, DeckError::Empty)
    }
}

/// Ordered, immutable, non-empty collection of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    size: NonZeroUsize,
}

impl Deck {
    /// Build a deck from cards already in memory. Rejects an empty list.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let Some(size) = NonZeroUsize::new(cards.len()) else {
            return Err(DeckError::Empty);
        };
        Ok(Self { cards, size })
    }

    /// Read a headerless two-column csv file. Row order becomes deck order.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let deck = Self::from_reader(file)?;
        info!(path = %path.display(), cards = deck.len(), "deck loaded");
        Ok(deck)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DeckError> {
        // flexible so a short or long row reaches us instead of being compared
        // against the first row's width
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut cards = Vec::new();
        // the csv reader strips a leading UTF-8 BOM itself
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            if record.len() != FIELDS_PER_ROW {
                return Err(DeckError::Malformed {
                    row: i + 1,
                    fields: record.len(),
                });
            }
            cards.push(Card::new(&record[0], &record[1]));
        }

        debug!(rows = cards.len(), "parsed deck rows");
        Self::from_cards(cards)
    }

    /// Card at `index`.
    ///
    /// Panics when `index >= len()`. A `Session` never asks for such an
    /// index, so hitting this is a bug in the caller.
    pub fn get(&self, index: usize) -> &Card {
        match self.cards.get(index) {
            Some(card) => card,
            None => panic!(
                "card index {index} out of range for deck of {}",
                self.cards.len()
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.size.get()
    }

    /// Deck size as a type that cannot be zero
    pub fn size(&self) -> NonZeroUsize {
        self.size
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Load-once guard: repeated loads of the same file share one parsed deck.
#[derive(Debug, Default)]
pub struct DeckCache {
    decks: HashMap<PathBuf, Arc<Deck>>,
}

impl DeckCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<Deck>, DeckError> {
        let path = path.as_ref();
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        if let Some(deck) = self.decks.get(&key) {
            debug!(path = %key.display(), "deck served from cache");
            return Ok(Arc::clone(deck));
        }

        let deck = Arc::new(Deck::load(path)?);
        self.decks.insert(key, Arc::clone(&deck));
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}
