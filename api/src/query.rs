//! Query submission workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Query page owns one [`QueryWorkflow`]. A submission walks
//! `Idle → Generating → Executing → Completed | Error`; the generate and
//! execute steps are a single backend call, so `Generating → Executing` is a
//! local transition made just before the request goes out.
//!
//! DESIGN
//! ======
//! Every [`QueryWorkflow::begin`] bumps a generation counter and cancels the
//! previous in-flight request. Results are applied only when their
//! generation still matches, so a slow response from an abandoned
//! submission can never overwrite a newer one.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::cell::RefCell;

use crate::cancel::{CancelHandle, CancelSignal, cancel_pair};
use crate::client::ApiClient;
use crate::dto::QueryRequest;
use crate::error::ApiError;
use crate::model::QueryRow;
use crate::transport::Transport;

/// Error text when a failed query carries no usable message.
pub const QUERY_FAILED: &str = "Failed to execute query";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Generating,
    Executing,
    Completed,
    Error,
}

impl QueryStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Generating => "Generating SQL...",
            Self::Executing => "Executing query...",
            Self::Completed => "Completed",
            Self::Error => "Error",
        }
    }

    /// A request is outstanding.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Generating | Self::Executing)
    }
}

/// What the user has typed and selected so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryDraft {
    pub question: String,
    pub collection_id: Option<String>,
    pub model_id: Option<String>,
}

impl QueryDraft {
    /// Question, collection, and model are all present.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.request().is_some()
    }

    #[must_use]
    pub fn request(&self) -> Option<QueryRequest> {
        let query = self.question.trim();
        let collection_id = self.collection_id.as_deref().filter(|id| !id.is_empty())?;
        let model_id = self.model_id.as_deref().filter(|id| !id.is_empty())?;
        if query.is_empty() {
            return None;
        }
        Some(QueryRequest {
            collection_id: collection_id.to_owned(),
            model_id: model_id.to_owned(),
            query: query.to_owned(),
        })
    }
}

/// A started submission: run `request` under `signal`, then hand the
/// outcome back with `generation`.
#[derive(Debug)]
pub struct Submission {
    pub generation: u64,
    pub request: QueryRequest,
    pub signal: CancelSignal,
}

#[derive(Debug, Default)]
pub struct QueryWorkflow {
    status: QueryStatus,
    rows: Vec<QueryRow>,
    error: Option<String>,
    generation: u64,
    in_flight: Option<CancelHandle>,
}

impl QueryWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> QueryStatus {
        self.status
    }

    #[must_use]
    pub fn rows(&self) -> &[QueryRow] {
        &self.rows
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a submission. `None` (and no state change) when the draft is
    /// incomplete. Otherwise clears prior rows and error, cancels any
    /// in-flight request, and enters `Generating`.
    pub fn begin(&mut self, draft: &QueryDraft) -> Option<Submission> {
        let request = draft.request()?;
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        let (handle, signal) = cancel_pair();
        self.generation += 1;
        self.status = QueryStatus::Generating;
        self.rows.clear();
        self.error = None;
        self.in_flight = Some(handle);
        Some(Submission { generation: self.generation, request, signal })
    }

    /// `Generating → Executing` for the current generation.
    pub fn mark_executing(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status != QueryStatus::Generating {
            return false;
        }
        self.status = QueryStatus::Executing;
        true
    }

    /// Apply the outcome of submission `generation`. Returns `false` when
    /// the outcome was stale and discarded.
    pub fn finish(&mut self, generation: u64, outcome: Result<Vec<QueryRow>, ApiError>) -> bool {
        if generation != self.generation {
            log::debug!("discarding query result for stale generation {generation}");
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(rows) => {
                self.rows = rows;
                self.status = QueryStatus::Completed;
            }
            Err(ApiError::Cancelled) => {
                self.status = QueryStatus::Idle;
            }
            Err(err) => {
                log::warn!("query failed: {err}");
                self.error = Some(err.user_message(QUERY_FAILED));
                self.status = QueryStatus::Error;
            }
        }
        true
    }

    /// Cancel any in-flight request and return to `Idle`.
    pub fn reset(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.cancel();
        }
        self.generation += 1;
        *self = Self { generation: self.generation, ..Self::default() };
    }
}

/// Execute one started submission, returning its generation and outcome.
pub async fn execute<T: Transport>(
    api: &ApiClient<T>,
    submission: Submission,
) -> (u64, Result<Vec<QueryRow>, ApiError>) {
    let Submission { generation, request, signal } = submission;
    let outcome = signal.run(api.queries().execute(&request)).await;
    (generation, outcome)
}

/// Drive a full submission against a workflow shared through a `RefCell`.
/// Returns `false` when the draft was incomplete or the result went stale.
/// The borrow is never held across the request.
pub async fn submit<T: Transport>(workflow: &RefCell<QueryWorkflow>, api: &ApiClient<T>, draft: &QueryDraft) -> bool {
    let Some(submission) = workflow.borrow_mut().begin(draft) else {
        return false;
    };
    workflow.borrow_mut().mark_executing(submission.generation);
    let (generation, outcome) = execute(api, submission).await;
    workflow.borrow_mut().finish(generation, outcome)
}
