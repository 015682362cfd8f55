//! Integration tests for the form → loading → results/error flow.
//!
//! These drive `AppShell` through the application handlers with the mock
//! service, including a reset that races an in-flight request.

use std::sync::Arc;
use std::time::Duration;

use stacksense::adapters::mock::{MockError, MockRecommendationService};
use stacksense::adapters::terminal::Renderer;
use stacksense::application::{ResetResultsHandler, SubmitRecommendationHandler};
use stacksense::domain::catalog::FormField;
use stacksense::domain::recommendation::{
    CategoryResult, RecommendationResponse, ScoredTechnology, Technology,
};
use stacksense::domain::results::{CardBody, PrimaryList, ResultsEvent, EMPTY_CATEGORY};
use stacksense::domain::shell::{
    AppShell, Completion, ShellPhase, ShellView, REQUEST_FAILED_MESSAGE,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn technology(id: &str, name: &str, benefits: &[&str]) -> Technology {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "key_benefits": benefits,
    }))
    .unwrap()
}

fn response() -> RecommendationResponse {
    RecommendationResponse {
        project_name: "Telemetry Dashboard".to_string(),
        deployment_strategy: None,
        results: vec![
            CategoryResult {
                category: "Backend".to_string(),
                top_pick: Some(ScoredTechnology {
                    technology: technology("go", "Go", &[]),
                    reason: vec!["Low latency".to_string()],
                    score: 8.0,
                }),
                alternatives: vec![ScoredTechnology {
                    technology: technology("rust", "Rust", &[]),
                    reason: vec![
                        "Memory safety".to_string(),
                        "Zero-cost abstractions".to_string(),
                        "Great tooling".to_string(),
                    ],
                    score: 7.75,
                }],
            },
            CategoryResult {
                category: "Hosting".to_string(),
                top_pick: None,
                alternatives: Vec::new(),
            },
        ],
    }
}

fn handler(service: &MockRecommendationService) -> SubmitRecommendationHandler {
    SubmitRecommendationHandler::new(Arc::new(service.clone()))
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn edited_form_is_sent_and_results_projected() {
    let service = MockRecommendationService::new().with_response(response());
    let mut shell = AppShell::new();

    let form = shell.form_mut();
    form.type_into(FormField::Domain, "tech");
    form.choose_suggestion(FormField::Domain, 0);
    form.type_into(FormField::Budget, "Whatever it takes");
    form.click_outside();
    form.toggle_priority("Performance & Efficiency");
    form.toggle_priority("Functionality & Correctness");

    handler(&service).handle(&mut shell).await.unwrap();

    let sent = &service.get_calls()[0];
    assert_eq!(sent.domain, "Fintech");
    assert_eq!(sent.budget, "Whatever it takes");
    assert_eq!(sent.priorities.as_slice(), ["Performance & Efficiency"]);

    let ShellView::Results(view) = shell.view() else {
        panic!("expected results view");
    };
    assert_eq!(view.project_name, "Telemetry Dashboard");
    assert!(view.deployment.is_none());

    let CardBody::TopPick(panel) = &view.cards[0].body else {
        panic!("expected a top pick");
    };
    assert_eq!(
        panel.primary,
        Some(PrimaryList::Why(vec!["Low latency".to_string()]))
    );
    assert!(panel.analysis_notes.is_none());
    let tooltip = &panel.alternatives[0].tooltip;
    assert_eq!(tooltip.reasons.len(), 2);
    assert_eq!(tooltip.score, "7.75");

    assert_eq!(view.cards[1].body, CardBody::Empty);
    let rendered = Renderer::new(false).card(1, &view.cards[1]);
    assert!(rendered.contains("2. HOSTING"));
    assert!(rendered.contains(EMPTY_CATEGORY));
}

#[tokio::test]
async fn failure_then_retry_clears_error() {
    let service = MockRecommendationService::new()
        .with_error(MockError::Unreachable)
        .with_response(response());
    let handler = handler(&service);
    let mut shell = AppShell::new();

    handler.handle(&mut shell).await.unwrap();
    assert_eq!(shell.phase(), ShellPhase::Failed);
    assert_eq!(shell.error(), Some(REQUEST_FAILED_MESSAGE));
    assert!(matches!(shell.view(), ShellView::Form { banner: Some(_), .. }));

    let completion = handler.handle(&mut shell).await.unwrap();
    assert_eq!(completion, Completion::Applied(ShellPhase::Showing));
    assert!(shell.error().is_none());
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn reset_returns_to_form_with_previous_values() {
    let service = MockRecommendationService::new().with_response(response());
    let mut shell = AppShell::new();
    shell.form_mut().update_field(FormField::TeamSize, "Large Organization (50+)");

    handler(&service).handle(&mut shell).await.unwrap();
    let phase = ResetResultsHandler::new().handle(&mut shell, ResultsEvent::Reset);

    assert_eq!(phase, ShellPhase::Editing);
    assert!(shell.results().is_none());
    assert_eq!(shell.form().data().team_size, "Large Organization (50+)");
}

#[tokio::test]
async fn reset_while_loading_drops_late_response() {
    let service = MockRecommendationService::new()
        .with_response(response())
        .with_delay(Duration::from_millis(20));
    let handler = handler(&service);
    let mut shell = AppShell::new();

    let submission = shell.begin_submit().unwrap();
    assert!(shell.is_loading());
    let fetch = handler.fetch(submission);

    ResetResultsHandler::new().handle(&mut shell, ResultsEvent::Reset);
    let fetched = fetch.await;
    let completion = shell.complete(fetched.ticket, fetched.outcome);

    assert_eq!(completion, Completion::Stale);
    assert_eq!(shell.phase(), ShellPhase::Editing);
    assert!(shell.results().is_none());
}

#[tokio::test]
async fn malformed_response_is_reported_like_any_failure() {
    let service = MockRecommendationService::new().with_error(MockError::Malformed);
    let mut shell = AppShell::new();

    handler(&service).handle(&mut shell).await.unwrap();

    assert_eq!(shell.error(), Some(REQUEST_FAILED_MESSAGE));
    assert!(shell.results().is_none());
}
