//! Application shell: the single owner of the interaction state.
//!
//! The shell holds the `(results, is_loading, error)` triple and the form.
//! Its phase is derived from the triple and every change goes through
//! `ShellPhase::transition_to`.
//!
//! Submissions are ticketed. A completion carrying a ticket from before the
//! latest reset or submission is dropped instead of overwriting newer state.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use super::foundation::StateMachine;
use super::form::{FormData, InputForm, SubmitControl};
use super::recommendation::RecommendationResponse;
use super::results::ResultsView;

pub const ERROR_TITLE: &str = "Connection Error";
pub const REQUEST_FAILED_MESSAGE: &str =
    "An error occurred while fetching recommendations. Please ensure the backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    /// Form shown, nothing pending.
    Editing,
    /// Form shown with submit disabled.
    Loading,
    /// Form shown under the error banner.
    Failed,
    /// Results shown instead of the form.
    Showing,
}

impl StateMachine for ShellPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ShellPhase::*;
        matches!(
            (self, target),
            (Editing, Loading)
                | (Failed, Loading)
                | (Failed, Editing)
                | (Loading, Showing)
                | (Loading, Failed)
                | (Loading, Editing)
                | (Showing, Editing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ShellPhase::*;
        match self {
            Editing => vec![Loading],
            Failed => vec![Loading, Editing],
            Loading => vec![Showing, Failed, Editing],
            Showing => vec![Editing],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("a recommendation request is already in flight")]
    AlreadyLoading,

    #[error("results are shown; reset before submitting again")]
    ResultsShown,
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    correlation_id: Uuid,
}

impl SubmissionTicket {
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.correlation_id, self.generation)
    }
}

/// A form snapshot handed to the network call.
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: SubmissionTicket,
    pub form: FormData,
}

/// What `complete` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied(ShellPhase),
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBanner<'a> {
    pub title: &'static str,
    pub message: &'a str,
}

/// What the shell currently displays.
#[derive(Debug, Clone)]
pub enum ShellView<'a> {
    Form {
        banner: Option<ErrorBanner<'a>>,
        form: &'a InputForm,
        submit: SubmitControl,
    },
    Results(ResultsView),
}

#[derive(Debug, Clone, Default)]
pub struct AppShell {
    results: Option<RecommendationResponse>,
    is_loading: bool,
    error: Option<String>,
    form: InputForm,
    generation: u64,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: InputForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> ShellPhase {
        if self.results.is_some() {
            ShellPhase::Showing
        } else if self.is_loading {
            ShellPhase::Loading
        } else if self.error.is_some() {
            ShellPhase::Failed
        } else {
            ShellPhase::Editing
        }
    }

    pub fn results(&self) -> Option<&RecommendationResponse> {
        self.results.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    /// Snapshots the form and enters Loading.
    pub fn begin_submit(&mut self) -> Result<Submission, ShellError> {
        let from = self.phase();
        match from {
            ShellPhase::Loading => return Err(ShellError::AlreadyLoading),
            ShellPhase::Showing => return Err(ShellError::ResultsShown),
            ShellPhase::Editing | ShellPhase::Failed => {}
        }
        let form = self
            .form
            .submit(self.is_loading)
            .ok_or(ShellError::AlreadyLoading)?;

        self.generation += 1;
        let ticket = SubmissionTicket {
            generation: self.generation,
            correlation_id: Uuid::new_v4(),
        };
        self.is_loading = true;
        self.error = None;
        self.log_transition(from, ticket);

        Ok(Submission { ticket, form })
    }

    /// Settles a submission with the service outcome.
    ///
    /// Any failure maps to the one user-facing message; the cause is only logged.
    pub fn complete<E: fmt::Display>(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<RecommendationResponse, E>,
    ) -> Completion {
        if ticket.generation != self.generation || !self.is_loading {
            warn!(%ticket, current = self.generation, "Dropping stale recommendation outcome");
            return Completion::Stale;
        }

        let from = self.phase();
        self.is_loading = false;
        match outcome {
            Ok(response) => {
                self.results = Some(response);
            }
            Err(err) => {
                warn!(%ticket, error = %err, "Recommendation request failed");
                self.error = Some(REQUEST_FAILED_MESSAGE.to_string());
                self.results = None;
            }
        }
        self.log_transition(from, ticket);
        Completion::Applied(self.phase())
    }

    /// Clears results and error, returning to the form.
    ///
    /// An in-flight submission is abandoned: its completion will be stale.
    pub fn reset(&mut self) {
        let from = self.phase();
        self.results = None;
        self.error = None;
        self.is_loading = false;
        self.generation += 1;
        if from != ShellPhase::Editing {
            if let Err(err) = from.transition_to(ShellPhase::Editing) {
                warn!(error = %err, "Unexpected shell transition");
            }
            info!(from = ?from, to = ?ShellPhase::Editing, "Shell reset");
        }
    }

    pub fn view(&self) -> ShellView<'_> {
        match &self.results {
            Some(response) => ShellView::Results(ResultsView::project(response)),
            None => ShellView::Form {
                banner: self.error.as_deref().map(|message| ErrorBanner {
                    title: ERROR_TITLE,
                    message,
                }),
                form: &self.form,
                submit: self.form.submit_control(self.is_loading),
            },
        }
    }

    fn log_transition(&self, from: ShellPhase, ticket: SubmissionTicket) {
        let to = self.phase();
        match from.transition_to(to) {
            Ok(_) => info!(%ticket, from = ?from, to = ?to, "Shell transition"),
            Err(err) => warn!(%ticket, error = %err, "Unexpected shell transition"),
        }
    }
}
