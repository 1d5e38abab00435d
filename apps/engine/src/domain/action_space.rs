//! Bijection between card identifiers and dense action ids `0..60`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::dealing::full_deck;
use crate::domain::rules::DECK_SIZE;
use crate::domain::Card;
use crate::errors::domain::{ConfigKind, DomainError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpace {
    /// `cards[id]` is the card for action `id`.
    cards: Vec<Card>,
    ids: BTreeMap<Card, usize>,
}

impl ActionSpace {
    /// Canonical ordering: red, green, blue, yellow ranks 1 to 13, then
    /// Jesters, then Wizards.
    pub fn canonical() -> Self {
        let cards = full_deck();
        let ids = cards.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { cards, ids }
    }

    /// Load `{"<card id>": <index>, ...}` and check it covers every card
    /// exactly once with indices `0..60`.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let raw: BTreeMap<String, usize> = serde_json::from_str(json).map_err(|e| {
            DomainError::config(
                ConfigKind::InvalidActionSpace,
                format!("Malformed action space: {e}"),
            )
        })?;
        Self::from_entries(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::config(
                ConfigKind::InvalidActionSpace,
                format!("Read action space {}: {e}", path.display()),
            )
        })?;
        Self::from_json_str(&json)
    }

    fn from_entries(raw: BTreeMap<String, usize>) -> Result<Self, DomainError> {
        if raw.len() != DECK_SIZE {
            return Err(DomainError::config(
                ConfigKind::InvalidActionSpace,
                format!("Expected {DECK_SIZE} entries, got {}", raw.len()),
            ));
        }
        let mut slots: Vec<Option<Card>> = vec![None; DECK_SIZE];
        let mut ids = BTreeMap::new();
        for (key, index) in raw {
            let card: Card = key.parse().map_err(|_| {
                DomainError::config(
                    ConfigKind::InvalidActionSpace,
                    format!("Unknown card identifier '{key}'"),
                )
            })?;
            let Some(slot) = slots.get_mut(index) else {
                return Err(DomainError::config(
                    ConfigKind::InvalidActionSpace,
                    format!("Index {index} for '{key}' out of range"),
                ));
            };
            if slot.is_some() {
                return Err(DomainError::config(
                    ConfigKind::InvalidActionSpace,
                    format!("Index {index} assigned twice"),
                ));
            }
            *slot = Some(card);
            ids.insert(card, index);
        }
        if ids.len() != DECK_SIZE {
            return Err(DomainError::config(
                ConfigKind::InvalidActionSpace,
                "Card identifiers are not unique",
            ));
        }
        let cards = slots.into_iter().flatten().collect();
        Ok(Self { cards, ids })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index_of(&self, card: Card) -> Option<usize> {
        self.ids.get(&card).copied()
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Action id for a card identifier string.
    pub fn index_of_id(&self, id: &str) -> Result<usize, DomainError> {
        let card: Card = id.parse()?;
        self.index_of(card).ok_or_else(|| {
            DomainError::config(ConfigKind::InvalidActionSpace, format!("No action for {id}"))
        })
    }

    /// Export as the JSON mapping accepted by `from_json_str`.
    pub fn to_json_string(&self) -> Result<String, DomainError> {
        let map: BTreeMap<String, usize> = self
            .ids
            .iter()
            .map(|(card, &i)| (card.to_string(), i))
            .collect();
        serde_json::to_string(&map).map_err(|e| {
            DomainError::config(ConfigKind::InvalidActionSpace, format!("Encode: {e}"))
        })
    }
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self::canonical()
    }
}
