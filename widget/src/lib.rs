//! # Recipe Feedback Widget
//!
//! Client side of feedback submission.
//!
//! ## Flow
//!
//! - Trim the draft, ignore the submit if nothing is left
//! - Clear the last error
//! - Prepend a `Pending` entry under a fresh correlation id, visible before any network call
//! - Clear the draft
//! - POST `{ recipeId, feedback }`
//! - Settle the entry by id: `Success` on 2xx, `Error` plus a retry message otherwise
//!
//! Several submissions may be in flight at once. State is only locked
//! between awaits, so each one settles its own entry whatever order the
//! responses come back in.
use std::sync::{Mutex, MutexGuard, PoisonError};

use payloads::FeedbackRequest;
use tracing::{debug, warn};

pub mod client;
pub mod entry;

use client::{ClientError, FeedbackApi};
use entry::{EntryId, Status, SubmissionEntry, Submissions};

pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to submit feedback. Please try again.";

type SubmittedCallback = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct WidgetState {
    draft: String,
    submissions: Submissions,
    error: Option<String>,
}

pub struct FeedbackWidget<A> {
    recipe_id: String,
    api: A,
    on_feedback_submitted: Option<SubmittedCallback>,
    state: Mutex<WidgetState>,
}

impl<A: FeedbackApi> FeedbackWidget<A> {
    pub fn new(recipe_id: impl Into<String>, api: A) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            api,
            on_feedback_submitted: None,
            state: Mutex::new(WidgetState::default()),
        }
    }

    /// Called with the draft exactly as typed whenever a submission starts.
    pub fn on_feedback_submitted(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_feedback_submitted = Some(Box::new(callback));
        self
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state().draft = text.into();
    }

    pub fn draft(&self) -> String {
        self.state().draft.clone()
    }

    pub fn can_submit(&self) -> bool {
        !self.state().draft.trim().is_empty()
    }

    pub fn entries(&self) -> Vec<SubmissionEntry> {
        self.state().submissions.iter().cloned().collect()
    }

    pub fn entry(&self, id: EntryId) -> Option<SubmissionEntry> {
        self.state().submissions.get(id).cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Optimistic half of a submit. `None` when the draft is blank, in which
    /// case nothing changes.
    pub fn begin_submit(&self) -> Option<(EntryId, FeedbackRequest)> {
        let (raw, id, request) = {
            let mut state = self.state();

            let feedback = state.draft.trim().to_string();
            if feedback.is_empty() {
                return None;
            }

            state.error = None;
            let id = state
                .submissions
                .prepend(SubmissionEntry::pending(feedback.clone()));
            let raw = std::mem::take(&mut state.draft);

            let request = FeedbackRequest {
                recipe_id: self.recipe_id.clone(),
                feedback,
            };

            (raw, id, request)
        };

        debug!("Submission {id} pending for recipe {}", self.recipe_id);

        if let Some(callback) = &self.on_feedback_submitted {
            callback(&raw);
        }

        Some((id, request))
    }

    pub fn settle(&self, id: EntryId, result: Result<(), ClientError>) {
        let mut state = self.state();

        match result {
            Ok(()) => {
                state.submissions.settle(id, Status::Success);
                debug!("Submission {id} saved");
            }
            Err(e) => {
                state.submissions.settle(id, Status::Error);
                state.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                warn!("Submission {id} failed: {e}");
            }
        }
    }

    pub async fn submit(&self) -> Option<EntryId> {
        let (id, request) = self.begin_submit()?;

        let result = self.api.submit(&request).await;
        self.settle(id, result);

        Some(id)
    }

    /// Last error on its own line, then one line per entry, newest first.
    pub fn render(&self) -> String {
        let state = self.state();
        let mut lines = Vec::new();

        if let Some(error) = &state.error {
            lines.push(error.clone());
        }

        for entry in state.submissions.iter() {
            lines.push(format!("{} {}", entry.text, entry.status.annotation()));
        }

        lines.join("\n")
    }

    fn state(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
