use gway_domain::outcome::SubmissionOutcome;
use gway_domain::service::LegalService;
use gway_kernel::handoff::ServiceHandoff;
use gway_kernel::notify::{NotificationLevel, Notifier};
use gway_leads::validation::{INVALID_EMAIL, INVALID_PHONE, REQUIRED};
use gway_leads::{
    FormPhase, FormVariant, LeadError, LeadField, LeadFormController, LeadSink, LeadSubmission,
};
use gway_locations::{LocationCatalog, LocationProvider};
use parking_lot::Mutex;
use std::sync::Arc;

type Sent = Arc<Mutex<Vec<(FormVariant, LeadSubmission)>>>;

/// Records every lead and answers with a fixed outcome.
#[derive(Debug)]
struct RecordingSink {
    outcome: SubmissionOutcome,
    sent: Sent,
}

impl RecordingSink {
    fn answering(outcome: SubmissionOutcome) -> (Self, Sent) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        (Self { outcome, sent: Arc::clone(&sent) }, sent)
    }
}

impl LeadSink for RecordingSink {
    async fn submit(&self, variant: FormVariant, lead: &LeadSubmission) -> SubmissionOutcome {
        self.sent.lock().push((variant, lead.clone()));
        self.outcome.clone()
    }
}

fn locations() -> Arc<dyn LocationProvider> {
    Arc::new(LocationCatalog::bundled().expect("bundled dataset"))
}

fn modal(outcome: SubmissionOutcome) -> (LeadFormController<RecordingSink>, Sent) {
    let (sink, sent) = RecordingSink::answering(outcome);
    (LeadFormController::new(FormVariant::AttorneyModal, locations(), sink), sent)
}

fn fill_jane(form: &mut LeadFormController<RecordingSink>) {
    form.set_field(LeadField::FullName, "Jane Doe");
    form.set_field(LeadField::Email, "jane@x.com");
    form.set_field(LeadField::Phone, "5551234567");
    form.set_field(LeadField::ServiceCategory, "Immigration Law");
    form.set_field(LeadField::RegionName, "California");
    form.set_field(LeadField::LocalityName, "Los Angeles");
}

#[tokio::test]
async fn jane_doe_submits_the_expected_payload() {
    let (mut form, sent) = modal(SubmissionOutcome::Success);
    fill_jane(&mut form);
    assert_eq!(form.state().phone, "555 123 4567");

    let outcome = form.submit().await.expect("valid draft");

    assert_eq!(outcome, SubmissionOutcome::Success);
    let sent = sent.lock();
    assert_eq!(sent.len(), 1);
    let (variant, lead) = &sent[0];
    assert_eq!(*variant, FormVariant::AttorneyModal);
    assert_eq!(
        serde_json::to_value(lead).expect("serialize"),
        serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phoneNumber": "555 123 4567",
            "city": "Los Angeles",
            "state": "California",
            "legalService": "Immigration Law"
        })
    );
}

#[tokio::test]
async fn invalid_email_fails_only_that_field() {
    let (mut form, sent) = modal(SubmissionOutcome::Success);
    fill_jane(&mut form);
    form.set_field(LeadField::Email, "not-an-email");

    let err = form.submit().await.expect_err("email is invalid");

    let errors = match err {
        LeadError::Invalid { errors, .. } => errors,
        other => panic!("unexpected error: {other}"),
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), [LeadField::Email]);
    assert_eq!(errors.get(LeadField::Email), Some(INVALID_EMAIL));
    assert!(sent.lock().is_empty());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.state().full_name, "Jane Doe");
    assert_eq!(form.state().locality_name, "Los Angeles");
}

#[tokio::test]
async fn empty_required_fields_never_reach_the_network() {
    let (mut form, sent) = modal(SubmissionOutcome::Success);

    let err = form.submit().await.expect_err("empty draft");

    let errors = match err {
        LeadError::Invalid { errors, .. } => errors,
        other => panic!("unexpected error: {other}"),
    };
    for field in [
        LeadField::FullName,
        LeadField::Email,
        LeadField::Phone,
        LeadField::ServiceCategory,
        LeadField::RegionName,
    ] {
        assert_eq!(errors.get(field), Some(REQUIRED), "{field}");
    }
    assert!(sent.lock().is_empty());
}

#[tokio::test]
async fn conflict_resets_the_form_and_notifies() {
    let notifier = Notifier::default();
    let (form, _sent) = modal(SubmissionOutcome::Conflict);
    let mut form = form.with_notifier(notifier.clone());
    fill_jane(&mut form);

    let outcome = form.submit().await.expect("valid draft");

    assert_eq!(outcome, SubmissionOutcome::Conflict);
    assert!(form.state().is_empty());
    assert!(form.candidates().is_empty());
    assert!(form.errors().is_empty());
    assert_eq!(form.phase(), FormPhase::Idle);

    let shown = notifier.active();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn failure_also_resets_the_form() {
    let (mut form, sent) = modal(SubmissionOutcome::Failure("Server down".into()));
    fill_jane(&mut form);

    let outcome = form.submit().await.expect("valid draft");

    assert_eq!(outcome, SubmissionOutcome::Failure("Server down".into()));
    assert_eq!(sent.lock().len(), 1);
    assert!(form.state().is_empty());
}

#[test]
fn region_change_clears_locality_and_recomputes_candidates() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    form.set_region("California");
    form.set_field(LeadField::LocalityName, "Los Angeles");
    assert!(form.candidates().iter().any(|c| c.name == "Los Angeles"));

    form.set_region("Texas");

    assert!(form.state().locality_name.is_empty());
    assert!(form.candidates().iter().all(|c| c.name != "Los Angeles"));
    assert!(form.candidates().iter().any(|c| c.name == "Houston"));
}

#[test]
fn empty_region_disables_locality() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    form.set_region("Oregon");
    form.set_region("");

    assert!(!form.locality_enabled());
    assert!(form.candidates().is_empty());
}

#[test]
fn locality_is_ignored_until_a_region_is_chosen() {
    let (mut form, _) = modal(SubmissionOutcome::Success);

    form.set_field(LeadField::LocalityName, "Los Angeles");

    assert!(!form.locality_enabled());
    assert!(form.state().locality_name.is_empty());
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn padded_region_name_resolves_to_the_dataset_region() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    fill_jane(&mut form);

    form.set_field(LeadField::RegionName, "  California ");
    assert_eq!(form.state().region_name, "California");
    assert!(form.candidates().iter().any(|c| c.name == "Los Angeles"));

    form.set_field(LeadField::LocalityName, "Los Angeles");
    let pending = form.begin_submit().expect("valid draft");
    assert_eq!(pending.lead.state, "California");
}

#[test]
fn edits_before_first_submit_do_not_validate() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    form.set_field(LeadField::Email, "nope");
    form.set_field(LeadField::Phone, "555");

    assert!(form.errors().is_empty());
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn after_a_failed_submit_edits_revalidate_only_their_field() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    form.set_field(LeadField::Phone, "555");
    assert!(form.begin_submit().is_err());
    assert_eq!(form.errors().get(LeadField::Phone), Some(INVALID_PHONE));
    assert_eq!(form.errors().get(LeadField::FullName), Some(REQUIRED));

    form.set_field(LeadField::Phone, "555 123 4567");

    assert!(!form.errors().contains(LeadField::Phone));
    assert_eq!(form.errors().get(LeadField::FullName), Some(REQUIRED));
}

#[test]
fn region_change_revalidates_locality_once_active() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    assert!(form.begin_submit().is_err());
    assert!(!form.errors().contains(LeadField::LocalityName));

    form.set_region("Nevada");

    assert!(!form.errors().contains(LeadField::RegionName));
    assert_eq!(form.errors().get(LeadField::LocalityName), Some(REQUIRED));
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    fill_jane(&mut form);

    let pending = form.begin_submit().expect("valid draft");
    assert_eq!(pending.lead.city, "Los Angeles");
    assert_eq!(form.phase(), FormPhase::Submitting);

    let err = form.begin_submit().expect_err("in flight");
    assert!(matches!(err, LeadError::InFlight { .. }));

    form.finish(&SubmissionOutcome::Success);
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn handoff_prefills_service_once() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    let handoff = ServiceHandoff::new();
    handoff.select(LegalService::CriminalDefense);

    assert_eq!(form.prefill_from_handoff(&handoff), Some(LegalService::CriminalDefense));
    assert_eq!(form.state().service_category, "Criminal Defense");
    assert_eq!(form.prefill_from_handoff(&handoff), None);
}

#[test]
fn dismiss_discards_the_draft() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    fill_jane(&mut form);

    form.dismiss();

    assert!(form.state().is_empty());
    assert!(form.candidates().is_empty());
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn contact_variant_accepts_missing_phone_and_sends_message() {
    let (sink, sent) = RecordingSink::answering(SubmissionOutcome::Success);
    let mut form = LeadFormController::new(FormVariant::Contact, locations(), sink);
    form.set_field(LeadField::FullName, "Sam Lee");
    form.set_field(LeadField::Email, "sam@lee.dev");
    form.set_field(LeadField::ServiceCategory, "Not Sure / Other");
    form.set_field(LeadField::RegionName, "American Samoa");
    form.set_field(LeadField::LocalityName, "Pago Pago");
    form.set_field(LeadField::Message, "  Need advice on a lease.  ");

    form.submit().await.expect("valid draft");

    let sent = sent.lock();
    let (variant, lead) = &sent[0];
    assert_eq!(*variant, FormVariant::Contact);
    assert_eq!(lead.phone_number, "");
    assert_eq!(lead.message.as_deref(), Some("Need advice on a lease."));
    assert_eq!(lead.legal_service, LegalService::NotSure);
}

#[test]
fn free_text_locality_is_accepted() {
    let (mut form, _) = modal(SubmissionOutcome::Success);
    fill_jane(&mut form);
    form.set_field(LeadField::LocalityName, "Malibu");
    assert!(form.candidates().iter().all(|c| c.name != "Malibu"));

    let pending = form.begin_submit().expect("free text locality");
    assert_eq!(pending.lead.city, "Malibu");
}
