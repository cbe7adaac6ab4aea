use gway_domain::config::EndpointsConfig;
use gway_domain::outcome::FormKind;
use gway_domain::service::LegalService;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Editable fields of a lead form. The string form is the wire/field name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    ServiceCategory,
    RegionName,
    LocalityName,
    Message,
}

/// Which lead form is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FormVariant {
    /// "Join as an attorney" modal; phone is mandatory.
    AttorneyModal,
    /// Footer contact form; phone optional, free-text message allowed.
    Contact,
}

impl FormVariant {
    #[must_use]
    pub const fn phone_required(self) -> bool {
        matches!(self, Self::AttorneyModal)
    }

    #[must_use]
    pub const fn accepts_message(self) -> bool {
        matches!(self, Self::Contact)
    }

    #[must_use]
    pub const fn form_kind(self) -> FormKind {
        match self {
            Self::AttorneyModal => FormKind::AttorneyApplication,
            Self::Contact => FormKind::Contact,
        }
    }

    /// Endpoint path the variant posts to.
    #[must_use]
    pub fn endpoint(self, endpoints: &EndpointsConfig) -> &str {
        match self {
            Self::AttorneyModal => &endpoints.attorney_application,
            Self::Contact => &endpoints.contact,
        }
    }
}

/// The draft a visitor is editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub full_name: String,
    pub email: String,
    /// Always empty or grouped `NNN NNN NNNN` (possibly partial while typing).
    pub phone: String,
    /// Practice area label as picked or typed.
    pub service_category: String,
    pub region_name: String,
    pub locality_name: String,
    pub message: String,
}

impl LeadFormState {
    #[must_use]
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::ServiceCategory => &self.service_category,
            LeadField::RegionName => &self.region_name,
            LeadField::LocalityName => &self.locality_name,
            LeadField::Message => &self.message,
        }
    }

    pub(crate) fn slot(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::ServiceCategory => &mut self.service_category,
            LeadField::RegionName => &mut self.region_name,
            LeadField::LocalityName => &mut self.locality_name,
            LeadField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Wire payload of one lead. Built only from a validated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub state: String,
    pub legal_service: LegalService,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeadSubmission {
    /// Trims the draft into its wire shape.
    pub(crate) fn from_draft(
        draft: &LeadFormState,
        variant: FormVariant,
        legal_service: LegalService,
    ) -> Self {
        let message = draft.message.trim();
        Self {
            full_name: draft.full_name.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            phone_number: draft.phone.clone(),
            city: draft.locality_name.trim().to_owned(),
            state: draft.region_name.trim().to_owned(),
            legal_service,
            message: (variant.accepts_message() && !message.is_empty())
                .then(|| message.to_owned()),
        }
    }
}
