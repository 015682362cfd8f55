//! SubmitRecommendationHandler - Sends the form to the recommendation service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::recommendation::RecommendationResponse;
use crate::domain::shell::{AppShell, Completion, ShellError, Submission, SubmissionTicket};
use crate::ports::{RecommendationError, RecommendationService};

/// Outcome of one request, tagged with the submission it belongs to.
#[derive(Debug)]
pub struct FetchedRecommendation {
    pub ticket: SubmissionTicket,
    pub outcome: Result<RecommendationResponse, RecommendationError>,
}

/// Handler for submitting the form.
pub struct SubmitRecommendationHandler {
    service: Arc<dyn RecommendationService>,
}

impl SubmitRecommendationHandler {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self { service }
    }

    /// Submits the shell's form and settles the shell with the result.
    pub async fn handle(&self, shell: &mut AppShell) -> Result<Completion, ShellError> {
        // 1. Snapshot the form and enter Loading
        let submission = shell.begin_submit()?;

        // 2. One request, no retries
        let fetched = self.fetch(submission).await;

        // 3. Settle
        Ok(shell.complete(fetched.ticket, fetched.outcome))
    }

    /// Performs the request for a submission without touching the shell.
    ///
    /// For front ends that keep handling input while the request runs; feed
    /// the result back through `AppShell::complete`.
    pub async fn fetch(&self, submission: Submission) -> FetchedRecommendation {
        let info = self.service.service_info();
        debug!(
            ticket = %submission.ticket,
            service = %info.name,
            endpoint = %info.endpoint,
            "Submitting recommendation request"
        );

        let outcome = self.service.recommend(submission.form).await;
        FetchedRecommendation {
            ticket: submission.ticket,
            outcome,
        }
    }
}
