//! Typed view of an exported board document.
//!
//! Only the fields the extractor reads are modelled; everything else in the
//! export is ignored. A missing or mistyped required field fails decoding.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Top-level board export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoard {
    /// Board title.
    pub name: String,
    pub lists: Vec<RawList>,
    pub cards: Vec<RawCard>,
    pub actions: Vec<RawAction>,
}

/// A board column.
#[derive(Debug, Clone, Deserialize)]
pub struct RawList {
    pub id: String,
    pub name: String,
    /// Display position; lower values are further left.
    pub pos: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    pub name: String,
    #[serde(rename = "idList")]
    pub id_list: String,
    /// Archived or deleted.
    pub closed: bool,
}

/// Kinds of history entries the extractor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    UpdateCard,
    CreateList,
    UpdateList,
    #[serde(other)]
    Other,
}

/// One entry in the board's history log.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// ISO 8601 timestamp, parsed by the extractor.
    pub date: String,
    pub data: ActionData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionData {
    /// Present only when a card update moved the card between lists.
    /// A JSON `null` still counts as present.
    #[serde(rename = "listBefore", default, deserialize_with = "present")]
    pub list_before: Option<Value>,
    /// Previous values of the fields an update changed.
    #[serde(default)]
    pub old: Option<Map<String, Value>>,
}

impl RawAction {
    /// Whether this action is a card move, a list creation or a list rename.
    pub fn is_session_event(&self) -> bool {
        match self.kind {
            ActionKind::UpdateCard => self.data.list_before.is_some(),
            ActionKind::CreateList => true,
            ActionKind::UpdateList => self
                .data
                .old
                .as_ref()
                .is_some_and(|old| old.contains_key("name")),
            ActionKind::Other => false,
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
