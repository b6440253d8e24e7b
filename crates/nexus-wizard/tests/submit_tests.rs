use futures::StreamExt;
use nexus_report::{ReportError, ReportOption, Tier};
use nexus_test_utils::{sample_places, RecordingGenerator};
use nexus_wizard::{Step, WizardConfig, WizardError, WizardSession};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn ready_session(generator: Arc<RecordingGenerator>) -> WizardSession {
    let mut session = WizardSession::new(&WizardConfig::default(), sample_places(), generator);
    session.settle_lookups().await;

    let wizard = session.controller_mut();
    wizard.set_user_name("Jane Doe");
    wizard.advance_step().unwrap();
    wizard.set_regional_city("Davao City").unwrap();
    wizard.advance_step().unwrap();
    wizard.select_tier(Tier::PartnershipBlueprint);
    wizard.toggle_option(ReportOption::Talent);
    wizard.toggle_option(ReportOption::Esg);
    wizard.advance_step().unwrap();
    wizard.set_objective("Find a solar manufacturing partner");
    wizard
        .set_key_technologies(["Renewable Energy Systems", "Advanced Materials"])
        .unwrap();
    wizard.set_target_markets(["ASEAN"]).unwrap();
    session
}

#[tokio::test(start_paused = true)]
async fn test_full_flow_dispatches_assembled_request() {
    let generator = Arc::new(RecordingGenerator::with_chunks(&["Part one. ", "Part two."]));
    let mut session = ready_session(Arc::clone(&generator)).await;
    assert!(session.controller().can_submit());

    let submission = session.submit().unwrap();
    let request = &submission.request;
    assert_eq!(request.region(), "Davao City, Philippines");
    assert_eq!(request.industry(), "Renewable Energy");
    assert_eq!(request.tier(), Tier::PartnershipBlueprint);
    assert_eq!(request.selected_options(), [ReportOption::Talent, ReportOption::Esg]);
    assert_eq!(
        request.key_technologies(),
        ["Renewable Energy Systems", "Advanced Materials"]
    );

    let text: Vec<String> = submission
        .stream
        .map(Result::unwrap)
        .collect()
        .await;
    assert_eq!(text.concat(), "Part one. Part two.");

    assert_eq!(generator.requests(), [submission.request]);
    assert_eq!(session.controller().current_step(), Step::FINALIZE);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_rejected_while_streaming() {
    let generator = Arc::new(RecordingGenerator::new());
    let mut session = ready_session(Arc::clone(&generator)).await;

    let first = session.submit().unwrap();
    let err = session.submit().unwrap_err();
    assert_eq!(err, WizardError::Report(ReportError::InFlight));
    assert_eq!(generator.requests().len(), 1);

    // Exhausting the stream frees the dispatcher
    first.stream.for_each(|_| async {}).await;
    assert!(session.submit().is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_submit_without_tier_restarts_wizard() {
    let generator = Arc::new(RecordingGenerator::new());
    let mut session = WizardSession::new(
        &WizardConfig::default(),
        sample_places(),
        generator.clone(),
    );
    session.settle_lookups().await;
    session.controller_mut().advance_step().unwrap();
    session.controller_mut().advance_step().unwrap();

    let err = session.submit().unwrap_err();
    assert_eq!(err, WizardError::MissingTier);
    assert_eq!(
        err.alert_message(),
        Some("An error occurred. Please restart the process.")
    );
    assert_eq!(session.controller().current_step(), Step::PROFILE);
    assert!(generator.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_empty_objective_blocks_submission() {
    let generator = Arc::new(RecordingGenerator::new());
    let mut session = ready_session(Arc::clone(&generator)).await;
    session.controller_mut().set_objective("");

    assert!(!session.controller().can_submit());
    let err = session.submit().unwrap_err();
    assert!(matches!(err, WizardError::NotReady(ref reasons) if reasons.len() == 1));
    assert!(generator.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_loading_city_blocks_submission() {
    let generator = Arc::new(RecordingGenerator::new());
    let mut session = ready_session(generator).await;
    session.set_target_country("Vietnam");

    assert!(!session.controller().can_submit());
    assert!(session.submit().is_err());

    session.settle_lookups().await;
    let submission = session.submit().unwrap();
    assert_eq!(submission.request.region(), "Da Nang, Vietnam");
}

#[tokio::test(start_paused = true)]
async fn test_manual_tech_list_reaches_request() {
    let generator = Arc::new(RecordingGenerator::new());
    let mut session = ready_session(generator).await;
    let wizard = session.controller_mut();
    wizard.toggle_manual_tech(true);
    wizard.set_manual_tech_text("Solar PV, , Grid Storage ,Solar PV");

    let submission = session.submit().unwrap();
    assert_eq!(
        submission.request.key_technologies(),
        ["Solar PV", "Grid Storage", "Solar PV"]
    );
}
