//! Pure schema checks for a [`LeadFormState`].
//!
//! [`Schema::validate`] returns every failing field at once (used on submit);
//! [`Schema::validate_field`] checks a single field (used on edits once
//! validation is active).

use crate::form::{FormVariant, LeadField, LeadFormState};
use crate::phone;
use gway_domain::service::LegalService;
use gway_locations::LocationProvider;
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

pub const REQUIRED: &str = "Please fill in this field";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_PHONE: &str = "Phone number must be in format: XXX XXX XXXX";
pub const UNKNOWN_REGION: &str = "Please select a valid state from the list";
pub const UNKNOWN_SERVICE: &str = "Please select a legal service from the list";

// Browser-style email grammar: local part, `@`, dot-separated DNS labels.
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .ok()
});

#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

/// Field-keyed error messages. Empty means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<LeadField, Cow<'static, str>>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: LeadField) -> Option<&str> {
        self.0.get(&field).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn contains(&self, field: LeadField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = LeadField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_ref()))
    }

    /// Replaces the entry for `field` with a fresh check result.
    pub fn set(&mut self, field: LeadField, error: Option<Cow<'static, str>>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            },
            None => {
                self.0.remove(&field);
            },
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Validation rules bound to a form variant and a location source.
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a> {
    pub variant: FormVariant,
    pub country: &'a str,
    pub locations: &'a dyn LocationProvider,
}

impl Schema<'_> {
    /// Checks every field.
    #[must_use]
    pub fn validate(&self, state: &LeadFormState) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in LeadField::iter() {
            errors.set(field, self.validate_field(field, state));
        }
        errors
    }

    /// Checks one field; `None` means valid.
    #[must_use]
    pub fn validate_field(&self, field: LeadField, state: &LeadFormState) -> Option<Cow<'static, str>> {
        let value = state.get(field).trim();

        let error = match field {
            LeadField::FullName => value.is_empty().then_some(REQUIRED),
            LeadField::Email => {
                if value.is_empty() {
                    Some(REQUIRED)
                } else {
                    (!is_email(value)).then_some(INVALID_EMAIL)
                }
            },
            LeadField::Phone => {
                if value.is_empty() {
                    self.variant.phone_required().then_some(REQUIRED)
                } else {
                    (!phone::is_complete(value)).then_some(INVALID_PHONE)
                }
            },
            LeadField::ServiceCategory => {
                if value.is_empty() {
                    Some(REQUIRED)
                } else {
                    LegalService::from_label(value).is_none().then_some(UNKNOWN_SERVICE)
                }
            },
            LeadField::RegionName => {
                if value.is_empty() {
                    Some(REQUIRED)
                } else {
                    self.locations.region_by_name(self.country, value).is_none().then_some(UNKNOWN_REGION)
                }
            },
            // Free text is accepted; the candidate list is only a convenience.
            LeadField::LocalityName => {
                (!state.region_name.trim().is_empty() && value.is_empty()).then_some(REQUIRED)
            },
            LeadField::Message => None,
        };

        error.map(Cow::Borrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_grammar() {
        assert!(is_email("jane@x.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("jane@"));
        assert!(!is_email("@x.com"));
        assert!(!is_email("jane doe@x.com"));
    }

    #[test]
    fn errors_map_tracks_set_and_clear() {
        let mut errors = ValidationErrors::default();
        errors.set(LeadField::Email, Some(INVALID_EMAIL.into()));
        errors.set(LeadField::Phone, Some(INVALID_PHONE.into()));
        assert_eq!(errors.len(), 2);

        errors.set(LeadField::Phone, None);
        assert_eq!(errors.fields().collect::<Vec<_>>(), [LeadField::Email]);
        assert_eq!(errors.get(LeadField::Email), Some(INVALID_EMAIL));
    }
}
