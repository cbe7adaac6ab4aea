//! Hand-maintained localities for insular areas the general dataset lacks.
//!
//! Matched by exact region name and consulted before the dataset.

use crate::US;

pub const TERRITORY_OVERRIDES: &[(&str, &[&str])] = &[
    ("American Samoa", &["Pago Pago", "Tafuna", "Leone"]),
    ("Baker Island", &["Baker City"]),
    ("Wake Island", &["Wake City"]),
    ("United States Virgin Islands", &["Charlotte Amalie", "Christiansted", "Frederiksted"]),
    ("United States Minor Outlying Islands", &["Johnston Atoll", "Kingman Reef"]),
    ("Palmyra Atoll", &["Cooper Island"]),
    ("Northern Mariana Islands", &["Saipan", "Tinian", "Rota"]),
    ("Navassa Island", &["Navassa City"]),
    ("Midway Atoll", &["Sand Island"]),
    ("Jarvis Island", &["Jarvis City"]),
    ("Johnston Atoll", &["Johnston City"]),
    ("Howland Island", &["Howland City"]),
    ("Kingman Reef", &["Kingman City"]),
];

/// Override localities for `region_name`, if the table has an entry.
#[must_use]
pub fn lookup(country: &str, region_name: &str) -> Option<&'static [&'static str]> {
    if !country.eq_ignore_ascii_case(US) {
        return None;
    }
    TERRITORY_OVERRIDES.iter().find(|(name, _)| *name == region_name).map(|(_, cities)| *cities)
}
