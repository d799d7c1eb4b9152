//! Outbound request parameters.
//!
//! Optional fields are `Option<T>`: `None` is never transmitted, so a
//! partial update leaves every unspecified field untouched on the remote
//! side. `Some(String::new())` is an explicit clear.

use crate::trello::models::CheckItemState;

/// Ordered query parameters for one request, credentials excluded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.push((key.to_string(), value.into()));
        self
    }

    /// Add `key` only when a value was supplied. Booleans render as
    /// `true` / `false`.
    pub fn set_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.0.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub closed: Option<bool>,
}

impl BoardUpdate {
    pub fn archive() -> Self {
        Self {
            closed: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.closed.is_none()
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("desc", self.description.as_deref())
            .set_opt("closed", self.closed)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub closed: Option<bool>,
}

impl ListUpdate {
    pub fn archive() -> Self {
        Self {
            closed: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.closed.is_none()
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("closed", self.closed)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub list_id: String,
    pub name: String,
    pub description: Option<String>,
    pub due: Option<String>,
}

impl NewCard {
    pub fn new(list_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .set("idList", self.list_id.as_str())
            .set("name", self.name.as_str())
            .set_opt("desc", self.description.as_deref())
            .set_opt("due", self.due.as_deref())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub list_id: Option<String>,
    pub closed: Option<bool>,
    pub due: Option<String>,
    pub due_complete: Option<bool>,
}

impl CardUpdate {
    pub fn archive() -> Self {
        Self {
            closed: Some(true),
            ..Self::default()
        }
    }

    pub fn move_to(list_id: impl Into<String>) -> Self {
        Self {
            list_id: Some(list_id.into()),
            ..Self::default()
        }
    }

    pub fn due(due: impl Into<String>) -> Self {
        Self {
            due: Some(due.into()),
            ..Self::default()
        }
    }

    pub fn due_complete(complete: bool) -> Self {
        Self {
            due_complete: Some(complete),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.list_id.is_none()
            && self.closed.is_none()
            && self.due.is_none()
            && self.due_complete.is_none()
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("desc", self.description.as_deref())
            .set_opt("idList", self.list_id.as_deref())
            .set_opt("closed", self.closed)
            .set_opt("due", self.due.as_deref())
            .set_opt("dueComplete", self.due_complete)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckItemUpdate {
    pub name: Option<String>,
    pub state: Option<CheckItemState>,
}

impl CheckItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.state.is_none()
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .set_opt("state", self.state)
            .set_opt("name", self.name.as_deref())
    }
}
