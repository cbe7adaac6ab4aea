//! Draft ownership, the region to locality cascade and the submit lifecycle.
//!
//! ```text
//! Idle ──edit──▶ Editing ──submit──▶ Validating ──ok──▶ Submitting ──done──▶ Idle
//!                   ▲                     │
//!                   └──────errors─────────┘
//! ```

use crate::client::LeadSink;
use crate::error::LeadError;
use crate::form::{FormVariant, LeadField, LeadFormState, LeadSubmission};
use crate::phone::format_phone;
use crate::validation::{Schema, ValidationErrors};
use gway_domain::outcome::SubmissionOutcome;
use gway_domain::service::LegalService;
use gway_kernel::handoff::ServiceHandoff;
use gway_kernel::notify::Notifier;
use gway_locations::{Locality, LocationProvider, Region, US};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Validating,
    Submitting,
}

/// A validated lead, detached from the draft while its request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub variant: FormVariant,
    pub lead: LeadSubmission,
}

#[derive(Debug)]
pub struct LeadFormController<S> {
    variant: FormVariant,
    country: &'static str,
    locations: Arc<dyn LocationProvider>,
    sink: S,
    notifier: Option<Notifier>,
    state: LeadFormState,
    candidates: Vec<Locality>,
    errors: ValidationErrors,
    validation_active: bool,
    phase: FormPhase,
}

impl<S: LeadSink> LeadFormController<S> {
    pub fn new(variant: FormVariant, locations: Arc<dyn LocationProvider>, sink: S) -> Self {
        Self {
            variant,
            country: US,
            locations,
            sink,
            notifier: None,
            state: LeadFormState::default(),
            candidates: Vec::new(),
            errors: ValidationErrors::default(),
            validation_active: false,
            phase: FormPhase::Idle,
        }
    }

    /// Presents every terminal outcome through `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub const fn variant(&self) -> FormVariant {
        self.variant
    }

    #[must_use]
    pub const fn state(&self) -> &LeadFormState {
        &self.state
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Locality suggestions for the selected region.
    #[must_use]
    pub fn candidates(&self) -> &[Locality] {
        &self.candidates
    }

    /// The locality field is editable only once a region is chosen.
    #[must_use]
    pub fn locality_enabled(&self) -> bool {
        !self.state.region_name.is_empty()
    }

    /// Region choices for the picker.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.locations.list_regions(self.country)
    }

    fn schema(&self) -> Schema<'_> {
        Schema { variant: self.variant, country: self.country, locations: self.locations.as_ref() }
    }

    /// Stores a field edit. Phone input is normalized; a region edit cascades.
    pub fn set_field(&mut self, field: LeadField, value: &str) {
        match field {
            LeadField::RegionName => {
                self.set_region(value);
                return;
            },
            LeadField::Message if !self.variant.accepts_message() => return,
            LeadField::LocalityName if !self.locality_enabled() => return,
            LeadField::Phone => self.state.phone = format_phone(value),
            _ => *self.state.slot(field) = value.to_owned(),
        }
        self.touch();
        self.revalidate(&[field]);
    }

    /// Picks a region: clears the locality and recomputes its candidates.
    ///
    /// A known region is stored under its dataset name; other input is kept trimmed.
    pub fn set_region(&mut self, region_name: &str) {
        let trimmed = region_name.trim();
        self.state.region_name = self
            .locations
            .region_by_name(self.country, trimmed)
            .map_or_else(|| trimmed.to_owned(), |region| region.name);
        self.state.locality_name.clear();
        self.candidates =
            self.locations.localities_for_region_name(self.country, &self.state.region_name);
        debug!(region = %self.state.region_name, candidates = self.candidates.len(), "Region changed");

        self.touch();
        self.revalidate(&[LeadField::RegionName, LeadField::LocalityName]);
    }

    /// Pre-selects the practice area handed over by another page section.
    ///
    /// The hand-off is consumed; returns the applied service, if any.
    pub fn prefill_from_handoff(&mut self, handoff: &ServiceHandoff) -> Option<LegalService> {
        let service = handoff.take()?;
        self.state.service_category = service.label().to_owned();
        self.touch();
        self.revalidate(&[LeadField::ServiceCategory]);
        Some(service)
    }

    /// Closes the form without submitting; the draft is discarded.
    pub fn dismiss(&mut self) {
        debug!(form = %self.variant, "Lead form dismissed");
        self.reset();
    }

    /// Validates the whole draft and, if clean, hands out its wire payload.
    ///
    /// The controller stays in `Submitting` until [`Self::finish`] is called.
    ///
    /// # Errors
    /// [`LeadError::InFlight`] while a previous payload is unfinished;
    /// [`LeadError::Invalid`] when any field fails validation (no payload).
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, LeadError> {
        if self.phase == FormPhase::Submitting {
            return Err(LeadError::InFlight { context: Some(self.variant.to_string().into()) });
        }

        self.phase = FormPhase::Validating;
        self.validation_active = true;
        self.errors = self.schema().validate(&self.state);

        let service = LegalService::from_label(self.state.service_category.trim());
        match service {
            Some(service) if self.errors.is_empty() => {
                self.phase = FormPhase::Submitting;
                Ok(PendingSubmission {
                    variant: self.variant,
                    lead: LeadSubmission::from_draft(&self.state, self.variant, service),
                })
            },
            _ => {
                self.phase = FormPhase::Editing;
                debug!(form = %self.variant, invalid = self.errors.len(), "Lead draft rejected");
                Err(LeadError::Invalid { errors: self.errors.clone(), context: None })
            },
        }
    }

    /// Records the outcome of a pending submission and resets the form.
    pub fn finish(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => info!(form = %self.variant, "Lead submitted"),
            SubmissionOutcome::Conflict => warn!(form = %self.variant, "Lead rejected as duplicate"),
            SubmissionOutcome::Failure(message) => {
                warn!(form = %self.variant, reason = %message, "Lead submission failed");
            },
        }
        if let Some(notifier) = &self.notifier {
            notifier.present(self.variant.form_kind(), outcome);
        }
        self.reset();
    }

    /// Validates, sends through the sink and resets on any terminal outcome.
    ///
    /// # Errors
    /// See [`Self::begin_submit`]. Network problems are not errors: they come
    /// back as [`SubmissionOutcome::Failure`].
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, LeadError> {
        let pending = self.begin_submit()?;
        let outcome = self.sink.submit(pending.variant, &pending.lead).await;
        self.finish(&outcome);
        Ok(outcome)
    }

    fn touch(&mut self) {
        if self.phase == FormPhase::Idle {
            self.phase = FormPhase::Editing;
        }
    }

    fn revalidate(&mut self, fields: &[LeadField]) {
        if !self.validation_active {
            return;
        }
        let schema =
            Schema { variant: self.variant, country: self.country, locations: self.locations.as_ref() };
        for field in fields {
            let error = schema.validate_field(*field, &self.state);
            self.errors.set(*field, error);
        }
    }

    fn reset(&mut self) {
        self.state = LeadFormState::default();
        self.candidates.clear();
        self.errors.clear();
        self.validation_active = false;
        self.phase = FormPhase::Idle;
    }
}
