use chrono::Duration;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

use crate::error::{Result, SortError};

/// Identifier stored for a card inside a [`Group`].
///
/// Without a card mapping this is always the card's raw name; a mapping may
/// replace names with either strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Number(n) => write!(f, "{}", n),
            CardId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId::Text(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        CardId::Text(s)
    }
}

impl From<i64> for CardId {
    fn from(n: i64) -> Self {
        CardId::Number(n)
    }
}

/// Caller-supplied replacement identifiers, keyed by card name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardMapping(HashMap<String, CardId>);

impl CardMapping {
    /// Look up the replacement identifier for a card name.
    pub fn get(&self, card_name: &str) -> Option<&CardId> {
        self.0.get(card_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load a mapping from a JSON object of `{"card name": id}` pairs.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SortError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mapping: CardMapping = serde_json::from_str(&content)?;
        if mapping.is_empty() {
            tracing::warn!(
                "Card mapping {} is empty; every open card will be unmapped",
                path.display()
            );
        }
        tracing::debug!(
            "Loaded {} card mappings from {}",
            mapping.len(),
            path.display()
        );
        Ok(mapping)
    }
}

impl<K, V> FromIterator<(K, V)> for CardMapping
where
    K: Into<String>,
    V: Into<CardId>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A named bucket of cards, built from one board list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Name of the source list.
    pub name: String,
    /// Card identifiers placed in the list. Duplicates collapse.
    pub cards: BTreeSet<CardId>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: BTreeSet::new(),
        }
    }

    /// Add a card; returns `false` when it was already present.
    pub fn insert(&mut self, card: CardId) -> bool {
        self.cards.insert(card)
    }

    pub fn contains(&self, card: &CardId) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One completed card-sorting session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    /// Board title.
    pub name: String,
    /// Non-empty groups in board column order.
    pub groups: Vec<Group>,
    /// Time from the first list creation to the last recorded action.
    #[serde(rename = "duration_seconds", serialize_with = "serialize_seconds")]
    pub duration: Duration,
}

impl Sort {
    pub fn new(name: impl Into<String>, groups: Vec<Group>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            groups,
            duration,
        }
    }

    /// Total number of cards across all groups.
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }
}

fn serialize_seconds<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}
