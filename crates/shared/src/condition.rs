use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u64);
    };
}

id_newtype!(ConditionId);

/// One type/value pair in an ANDed rule. `kind` serializes as `"type"`,
/// matching the JSON shape hosts hand in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl Condition {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Parse a condition list arriving as pre-serialized JSON text.
pub fn conditions_from_json(text: &str) -> Result<Vec<Condition>, ConfigError> {
    Ok(serde_json::from_str(text)?)
}

pub fn conditions_to_json(conditions: &[Condition]) -> Result<String, ConfigError> {
    Ok(serde_json::to_string(conditions)?)
}

#[derive(Debug, Clone)]
struct Entry {
    id: ConditionId,
    condition: Condition,
}

/// Ordered sequence of conditions with stable per-entry identity.
///
/// Ids stand in for the object identity the editing operations key on: they
/// are allocated once per entry, never reused within a list, and never
/// serialized. All mutators treat an unknown id as a no-op rather than an
/// error.
#[derive(Debug, Default)]
pub struct ConditionList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ConditionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_conditions(conditions: Vec<Condition>) -> Self {
        let mut list = Self::new();
        for condition in conditions {
            list.push(condition);
        }
        list
    }

    fn push(&mut self, condition: Condition) -> ConditionId {
        let id = ConditionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, condition });
        id
    }

    /// Append `{type: default_type, value: ""}`. Always succeeds.
    pub fn push_default(&mut self, default_type: &str) -> ConditionId {
        self.push(Condition::new(default_type, ""))
    }

    /// Remove the entry with the given id. Returns whether anything was
    /// removed; the list is allowed to end up empty.
    pub fn remove(&mut self, id: ConditionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// In-place type edit. Membership of `new_type` in the caller's catalog
    /// is deliberately not checked here.
    pub fn set_type(&mut self, id: ConditionId, new_type: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.condition.kind = new_type.into();
                true
            }
            None => false,
        }
    }

    pub fn set_value(&mut self, id: ConditionId, new_value: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.condition.value = new_value.into();
                true
            }
            None => false,
        }
    }

    /// Deep copy of the current conditions, sharing no storage with the
    /// live entries.
    pub fn snapshot(&self) -> Vec<Condition> {
        self.entries
            .iter()
            .map(|entry| entry.condition.clone())
            .collect()
    }

    pub fn get(&self, id: ConditionId) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConditionId, &Condition)> {
        self.entries
            .iter()
            .map(|entry| (entry.id, &entry.condition))
    }

    pub fn ids(&self) -> Vec<ConditionId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the list holds fewer than two conditions; the delete
    /// affordance is hidden in that case.
    pub fn is_only(&self) -> bool {
        self.entries.len() < 2
    }

    /// True only for the final entry; used to suppress the trailing "and"
    /// separator.
    pub fn is_last(&self, id: ConditionId) -> bool {
        self.entries.last().is_some_and(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: ConditionId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}
