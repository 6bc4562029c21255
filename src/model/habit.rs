use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A single tracked habit with its full completion history.
///
/// `log` maps date keys (`YYYY-MM-DD`) to completion flags. Absent keys
/// and `false` entries both mean "not done that day"; toggling can leave
/// explicit `false` entries behind and nothing depends on the difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Random identifier. Opaque; imported ids are kept verbatim, so any
    /// string is valid. No uniqueness check is performed anywhere.
    pub id: String,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Completion log keyed by date key, sorted for stable serialization.
    #[serde(default)]
    pub log: BTreeMap<String, bool>,
}

impl Habit {
    /// Create a new habit with a fresh random id and an empty log.
    pub fn new(name: impl Into<String>) -> Self {
        Habit {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            log: BTreeMap::new(),
        }
    }

    /// Whether the habit is marked done on the given date key.
    pub fn is_done(&self, date_key: &str) -> bool {
        self.log.get(date_key).copied().unwrap_or(false)
    }
}

/// The whole persisted state: every habit the user tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl State {
    /// Find a habit by id.
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Find a habit by id, mutably.
    pub fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }
}
