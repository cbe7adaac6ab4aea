use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Legal practice areas a lead can be routed to.
///
/// The string form is the label shown to visitors and sent to the API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum LegalService {
    #[serde(rename = "Immigration Law")]
    #[strum(serialize = "Immigration Law")]
    Immigration,
    #[serde(rename = "Real Estate Law")]
    #[strum(serialize = "Real Estate Law")]
    RealEstate,
    #[serde(rename = "Corporate & Business Law")]
    #[strum(serialize = "Corporate & Business Law")]
    CorporateBusiness,
    #[serde(rename = "Family & Divorce Law")]
    #[strum(serialize = "Family & Divorce Law")]
    FamilyDivorce,
    #[serde(rename = "Estate Planning & Wills")]
    #[strum(serialize = "Estate Planning & Wills")]
    EstatePlanning,
    #[serde(rename = "Criminal Defense")]
    #[strum(serialize = "Criminal Defense")]
    CriminalDefense,
    #[serde(rename = "Personal Injury Law")]
    #[strum(serialize = "Personal Injury Law")]
    PersonalInjury,
    #[serde(rename = "Employment & Labor Law")]
    #[strum(serialize = "Employment & Labor Law")]
    EmploymentLabor,
    #[serde(rename = "Not Sure / Other")]
    #[strum(serialize = "Not Sure / Other")]
    NotSure,
}

impl LegalService {
    /// Looks a service up by its exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// The label as displayed and submitted.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_round_trip_through_parse() {
        for service in LegalService::iter() {
            assert_eq!(LegalService::from_label(service.label()), Some(service));
        }
    }

    #[test]
    fn catalogue_has_nine_entries_in_display_order() {
        let labels: Vec<_> = LegalService::iter().map(LegalService::label).collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels.first(), Some(&"Immigration Law"));
        assert_eq!(labels.last(), Some(&"Not Sure / Other"));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(LegalService::from_label("Tax Law"), None);
        assert_eq!(LegalService::from_label("immigration law"), None);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&LegalService::FamilyDivorce).expect("serialize");
        assert_eq!(json, "\"Family & Divorce Law\"");
    }
}
