//! # Frontend Specifications
//!
//! Client logic/relevant structures. Implemented in [`widget::FeedbackWidget`].
//!
//! ## Payloads
//!
//! To backend
//! - JSON, `{ "recipeId": string, "feedback": string }`, feedback already trimmed
//!
//! From backend
//! - `201` + `{ "success": true }` marks the entry saved
//! - anything else, or no response at all, marks the entry errored
//!
//!
//!
//! ## Flow
//!
//! - Submit button disabled while the draft is blank
//! - On submit, entry shows up at the top of the list immediately as `(Saving...)`
//! - Draft is cleared right away, user can keep typing and submitting
//! - Each entry carries a random UUID v4, responses find their entry by it
//! - `(Saved)` or `(Error!)` once the request settles, then never changes
//! - Any failure also shows "Failed to submit feedback. Please try again." above the list
//! - Next submit clears that message
//!
//!
//!
//! ## Not Handled
//!
//! - No retry, the user resubmits by hand
//! - No timeout, a hung request stays `(Saving...)`
//! - Entries live as long as the widget, nothing is reloaded from the server
pub use widget::{
    FeedbackWidget, SUBMIT_ERROR_MESSAGE,
    entry::{EntryId, Status, SubmissionEntry},
};
