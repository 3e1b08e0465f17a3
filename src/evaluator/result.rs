//! Evaluation result: one status per stage

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::Status;

/// Mapping from stage ID to its derived [`Status`].
///
/// Entries are kept in stage order. Callers should look statuses up by ID
/// rather than rely on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationResult {
    entries: Vec<(String, Status)>,
    index: HashMap<String, usize>,
}

impl EvaluationResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Record the final status of a stage. Each stage is recorded once.
    pub(crate) fn insert(&mut self, stage_id: &str, status: Status) {
        debug_assert!(!self.index.contains_key(stage_id));
        self.index.insert(stage_id.to_string(), self.entries.len());
        self.entries.push((stage_id.to_string(), status));
    }

    pub fn get(&self, stage_id: &str) -> Option<Status> {
        self.index.get(stage_id).map(|&pos| self.entries[pos].1)
    }

    /// Whether the stage has been evaluated and is `Success` or `Skipped`.
    pub fn is_done(&self, stage_id: &str) -> bool {
        self.get(stage_id).is_some_and(Status::is_done)
    }

    /// Whether every listed stage is done. Trivially true for an empty list.
    pub fn all_done<T: AsRef<str>>(&self, stage_ids: &[T]) -> bool {
        stage_ids.iter().all(|id| self.is_done(id.as_ref()))
    }

    /// Whether every evaluated stage is done
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, status)| status.is_done())
    }

    /// Stages recommended as the operator's next action
    pub fn next_stages(&self) -> Vec<&str> {
        self.with_status(Status::Next)
    }

    pub fn with_status(&self, wanted: Status) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, status)| *status == wanted)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Status)> {
        self.entries.iter().map(|(id, status)| (id.as_str(), *status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, Status> {
        self.entries.into_iter().collect()
    }
}

impl Serialize for EvaluationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, status) in &self.entries {
            map.serialize_entry(id, status)?;
        }
        map.end()
    }
}
