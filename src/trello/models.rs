//! Canonical Trello entities.
//!
//! Field names are the canonical (snake_case) names exposed to tool callers.
//! Each field also accepts Trello's wire name on input (`idBoard`, `desc`,
//! `dueComplete`, ...), so payloads decode the same whether they come
//! straight from the API or from already-canonical data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::trello::codec::{Entity, ensure_id};
use crate::trello::error::TrelloResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "idBoard")]
    pub board_id: String,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default, alias = "idList")]
    pub list_id: String,
    #[serde(default, alias = "idBoard")]
    pub board_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub closed: bool,
    /// ISO 8601 timestamp, `None` when the card has no due date.
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default, alias = "dueComplete")]
    pub due_complete: bool,
    /// Labels attached when the card was fetched.
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
    Complete,
    #[default]
    Incomplete,
}

impl CheckItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckItemState::Complete => "complete",
            CheckItemState::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for CheckItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckItemState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complete" => Ok(CheckItemState::Complete),
            "incomplete" => Ok(CheckItemState::Incomplete),
            other => Err(format!(
                "invalid check item state '{}', expected 'complete' or 'incomplete'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: CheckItemState,
    #[serde(default, alias = "idChecklist")]
    pub checklist_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "idCard")]
    pub card_id: String,
    #[serde(default, alias = "idBoard")]
    pub board_id: String,
    #[serde(default, alias = "checkItems")]
    pub check_items: Vec<CheckItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    /// Trello allows unnamed, color-only labels.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "idBoard")]
    pub board_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    /// Free-form Trello type: `list`, `number`, `text`, `checkbox`, `date`.
    #[serde(default, rename = "type")]
    pub field_type: String,
    /// Owning board.
    #[serde(default, alias = "idModel")]
    pub model_id: String,
}

/// The value of one custom field on one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldItem {
    pub id: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, alias = "idCustomField")]
    pub custom_field_id: String,
    #[serde(default, alias = "idModel")]
    pub model_id: String,
}

/// A comment posted on a card.
///
/// Trello answers a comment post with a `commentCard` action where the text
/// and card live under `data`; both that shape and the flat canonical one
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CommentPayload")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub date: String,
    pub card_id: String,
}

#[derive(Deserialize)]
struct CommentPayload {
    id: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default, alias = "idCard")]
    card_id: Option<String>,
    #[serde(default)]
    data: Option<CommentData>,
}

#[derive(Deserialize)]
struct CommentData {
    #[serde(default)]
    text: String,
    #[serde(default)]
    card: Option<CommentCard>,
}

#[derive(Deserialize)]
struct CommentCard {
    id: String,
}

impl From<CommentPayload> for Comment {
    fn from(payload: CommentPayload) -> Self {
        let (data_text, data_card) = match payload.data {
            Some(data) => (Some(data.text), data.card.map(|c| c.id)),
            None => (None, None),
        };

        Comment {
            id: payload.id,
            text: payload.text.or(data_text).unwrap_or_default(),
            date: payload.date,
            card_id: payload.card_id.or(data_card).unwrap_or_default(),
        }
    }
}

// =============================================================================
// Codec bindings
// =============================================================================

impl Entity for Board {
    const KIND: &'static str = "board";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[("description", "desc")];

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for List {
    const KIND: &'static str = "list";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[("board_id", "idBoard")];

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Card {
    const KIND: &'static str = "card";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[
        ("description", "desc"),
        ("list_id", "idList"),
        ("board_id", "idBoard"),
        ("due_complete", "dueComplete"),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn normalize(&mut self) -> TrelloResult<()> {
        for label in &self.labels {
            ensure_id(Label::KIND, &label.id)?;
        }
        Ok(())
    }
}

impl Entity for CheckItem {
    const KIND: &'static str = "check item";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] =
        &[("checklist_id", "idChecklist")];

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Checklist {
    const KIND: &'static str = "checklist";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[
        ("card_id", "idCard"),
        ("board_id", "idBoard"),
        ("check_items", "checkItems"),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn normalize(&mut self) -> TrelloResult<()> {
        for item in &mut self.check_items {
            ensure_id(CheckItem::KIND, &item.id)?;
            if item.checklist_id.is_empty() {
                item.checklist_id = self.id.clone();
            }
        }
        Ok(())
    }
}

impl Entity for Label {
    const KIND: &'static str = "label";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[("board_id", "idBoard")];

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for CustomField {
    const KIND: &'static str = "custom field";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[("model_id", "idModel")];

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for CustomFieldItem {
    const KIND: &'static str = "custom field item";
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[
        ("custom_field_id", "idCustomField"),
        ("model_id", "idModel"),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Comment {
    const KIND: &'static str = "comment";

    fn id(&self) -> &str {
        &self.id
    }
}
