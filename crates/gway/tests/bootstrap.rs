use gway::features;
use gway::kernel::prelude::*;

#[test]
fn every_default_feature_is_enabled() {
    for name in ["locations", "leads", "newsletter", "articles"] {
        assert!(features::is_enabled(name), "{name}");
    }
    assert!(!features::is_enabled("billing"));
}

#[test]
fn init_registers_one_slice_per_feature() {
    let slices = gway::init(&SiteConfig::default()).expect("init");
    assert_eq!(slices.len(), features::ENABLED.len());
}

#[test]
fn bootstrap_wires_forms_to_shared_services() {
    let state = gway::bootstrap(SiteConfig::default()).expect("bootstrap");

    let locations = state.try_get_slice::<features::locations::Locations>().expect("locations");
    let leads = state.try_get_slice::<features::leads::Leads>().expect("leads");
    assert!(state.get_slice::<features::articles::Articles>().is_some());
    assert!(state.get_slice::<features::newsletter::Newsletter>().is_some());

    // A service card hands its selection to the next form that opens.
    state.handoff.select(LegalService::EstatePlanning);
    let mut form = leads
        .form(features::leads::FormVariant::AttorneyModal, locations.provider.clone())
        .with_notifier(state.notifier.clone());

    assert_eq!(form.prefill_from_handoff(&state.handoff), Some(LegalService::EstatePlanning));
    assert_eq!(form.state().service_category, "Estate Planning & Wills");
    assert!(state.handoff.take().is_none());
}
