//! Submission entries and the list that owns them.
//!
//! Entries are looked up by correlation id, never by position, so settling
//! one attempt cannot touch another even when responses arrive out of order.
use std::{collections::HashMap, fmt};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Success,
    Error,
}

impl Status {
    pub fn annotation(&self) -> &'static str {
        match self {
            Status::Pending => "(Saving...)",
            Status::Success => "(Saved)",
            Status::Error => "(Error!)",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEntry {
    pub id: EntryId,
    pub text: String,
    pub status: Status,
}

impl SubmissionEntry {
    pub fn pending(text: String) -> Self {
        Self {
            id: EntryId::new(),
            text,
            status: Status::Pending,
        }
    }

    /// Returns false, leaving the entry alone, once it has already settled.
    pub fn settle(&mut self, outcome: Status) -> bool {
        if self.status.is_terminal() || !outcome.is_terminal() {
            return false;
        }

        self.status = outcome;
        true
    }
}

/// Most recent first. Insertion order is the only order.
#[derive(Debug, Default)]
pub struct Submissions {
    order: Vec<EntryId>,
    by_id: HashMap<EntryId, SubmissionEntry>,
}

impl Submissions {
    pub fn prepend(&mut self, entry: SubmissionEntry) -> EntryId {
        let id = entry.id;

        self.order.insert(0, id);
        self.by_id.insert(id, entry);

        id
    }

    pub fn settle(&mut self, id: EntryId, outcome: Status) -> bool {
        self.by_id
            .get_mut(&id)
            .is_some_and(|entry| entry.settle(outcome))
    }

    pub fn get(&self, id: EntryId) -> Option<&SubmissionEntry> {
        self.by_id.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmissionEntry> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}
