//! Chat transcript state and request lifecycle.
//!
//! DESIGN
//! ======
//! One state container per chat session, owned by the chat interface for
//! its lifetime and cleared only by remount. The transcript is append-only
//! and insertion-ordered; a failed request never rolls back the user
//! message that triggered it. At most one request is in flight.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::QueryError;
use crate::net::types::QueryResponse;

/// Banner text shown above the input when a request fails.
pub const ERROR_BANNER: &str = "Error connecting to the backend. Please try again.";

/// One transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatMessage {
    /// A question as the user submitted it.
    User { id: String, text: String },
    /// A decoded service answer.
    Assistant { id: String, response: QueryResponse },
    /// A failed request, with the reason embedded in the text.
    Error { id: String, text: String },
}

impl ChatMessage {
    /// Stable key for list rendering.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User { id, .. } | Self::Assistant { id, .. } | Self::Error { id, .. } => id,
        }
    }

    /// The bubble text: the raw question, the answer summary, or the
    /// embedded failure reason.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::User { text, .. } | Self::Error { text, .. } => text,
            Self::Assistant { response, .. } => &response.summary,
        }
    }
}

/// Transcript plus request flags for one chat session.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// All messages this session, in insertion order.
    pub messages: Vec<ChatMessage>,
    /// True while the one allowed request is in flight; the input control
    /// is disabled off this flag rather than queueing or aborting.
    pub sending: bool,
    /// Banner text; cleared by the next accepted submission.
    pub error: Option<String>,
    /// Whether the comparison table is expanded. Default collapsed.
    pub show_details: bool,
    /// Last value auto-submitted from the shared initial-query signal.
    pub last_auto_query: String,
}

impl ChatState {
    /// Accept a submission: append the user message, clear any previous
    /// error, and enter `sending`.
    ///
    /// Returns the trimmed query for the network call. Empty or
    /// whitespace-only input is a silent no-op, as is a submission while
    /// a request is already outstanding; the transcript is untouched in
    /// both cases.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.sending {
            return None;
        }
        self.messages.push(ChatMessage::User {
            id: uuid::Uuid::new_v4().to_string(),
            text: trimmed.to_owned(),
        });
        self.error = None;
        self.sending = true;
        Some(trimmed.to_owned())
    }

    /// Fold a successful response into the transcript and return to idle.
    pub fn complete(&mut self, response: QueryResponse) {
        self.messages.push(ChatMessage::Assistant {
            id: uuid::Uuid::new_v4().to_string(),
            response,
        });
        self.sending = false;
    }

    /// Record a failed request and return to idle.
    pub fn fail(&mut self, error: &QueryError) {
        self.messages.push(ChatMessage::Error {
            id: uuid::Uuid::new_v4().to_string(),
            text: format!("Error: {error}"),
        });
        self.error = Some(ERROR_BANNER.to_owned());
        self.sending = false;
    }

    /// The most recent assistant answer, found by scanning backward.
    ///
    /// This single message drives every chart/KPI/table derivation; older
    /// assistant messages stay visible in the transcript but inert.
    #[must_use]
    pub fn current_answer(&self) -> Option<&QueryResponse> {
        self.messages.iter().rev().find_map(|msg| match msg {
            ChatMessage::Assistant { response, .. } => Some(response),
            _ => None,
        })
    }

    /// Total messages in the transcript.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing has been submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Whether an externally supplied initial query should trigger the submit
/// pipeline.
///
/// Fires once per distinct non-empty value so unrelated re-renders never
/// duplicate a submission.
#[must_use]
pub fn should_auto_submit(incoming: &str, last_submitted: &str) -> bool {
    !incoming.trim().is_empty() && incoming != last_submitted
}
