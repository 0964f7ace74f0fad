//! The `Country` record as served by `restcountries.com` (`/v3.1`).
//!
//! The schema belongs to the third-party service, so every field is optional on the wire:
//! missing keys decode to their defaults instead of failing the whole list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder rendered for facts the API does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of timezones shown before the list is cut with an ellipsis.
const TIMEZONE_PREVIEW: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub name: CountryName,
    pub tld: Vec<String>,
    pub cca2: String,
    pub ccn3: String,
    pub cca3: String,
    pub cioc: Option<String>,
    pub independent: Option<bool>,
    pub status: String,
    pub un_member: bool,
    pub currencies: BTreeMap<String, Currency>,
    pub idd: Idd,
    pub capital: Vec<String>,
    pub alt_spellings: Vec<String>,
    pub region: String,
    pub subregion: String,
    pub languages: BTreeMap<String, String>,
    pub latlng: Vec<f64>,
    pub landlocked: bool,
    pub borders: Vec<String>,
    pub area: f64,
    pub demonyms: BTreeMap<String, Demonym>,
    pub translations: BTreeMap<String, Translation>,
    pub flag: String,
    pub maps: Maps,
    pub population: u64,
    pub gini: BTreeMap<String, f64>,
    pub fifa: Option<String>,
    pub car: Car,
    pub timezones: Vec<String>,
    pub continents: Vec<String>,
    pub flags: Flags,
    pub coat_of_arms: CoatOfArms,
    pub start_of_week: String,
    pub capital_info: CapitalInfo,
    pub postal_code: Option<PostalCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    pub native_name: BTreeMap<String, Translation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// International dialing prefix, split the way the API serves it (`"+4"` + `["9"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Idd {
    pub root: String,
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demonym {
    pub f: String,
    pub m: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Maps {
    pub google_maps: String,
    pub open_street_maps: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub signs: Vec<String>,
    pub side: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub png: String,
    pub svg: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoatOfArms {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalInfo {
    pub latlng: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalCode {
    pub format: String,
    pub regex: Option<String>,
}

impl Country {
    /// The first listed capital, if the country has one.
    #[must_use]
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// `"Euro (€), Swiss franc (Fr.)"`, or [`NOT_AVAILABLE`] when no currency is listed.
    #[must_use]
    pub fn currency_summary(&self) -> String {
        if self.currencies.is_empty() {
            return NOT_AVAILABLE.to_owned();
        }
        self.currencies
            .values()
            .map(|c| format!("{} ({})", c.name, c.symbol))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn language_summary(&self) -> String {
        if self.languages.is_empty() {
            return NOT_AVAILABLE.to_owned();
        }
        self.languages.values().map(String::as_str).collect::<Vec<_>>().join(", ")
    }

    /// Dialing prefix built from the IDD root and its first suffix (`"+49"`).
    #[must_use]
    pub fn calling_code(&self) -> String {
        let suffix = self.idd.suffixes.first().map_or("", String::as_str);
        format!("{}{suffix}", self.idd.root)
    }

    #[must_use]
    pub fn primary_tld(&self) -> &str {
        self.tld.first().map_or(NOT_AVAILABLE, String::as_str)
    }

    /// The first three timezones, with `"..."` appended when more exist.
    #[must_use]
    pub fn timezone_summary(&self) -> String {
        let mut summary =
            self.timezones.iter().take(TIMEZONE_PREVIEW).cloned().collect::<Vec<_>>().join(", ");
        if self.timezones.len() > TIMEZONE_PREVIEW {
            summary.push_str("...");
        }
        summary
    }

    /// `"51.0°, 9.0°"` when the API provides a coordinate pair.
    #[must_use]
    pub fn coordinates(&self) -> Option<String> {
        match self.latlng.as_slice() {
            [lat, lng, ..] => Some(format!("{lat}°, {lng}°")),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_distinct_official_name(&self) -> bool {
        !self.name.official.is_empty() && self.name.official != self.name.common
    }

    #[must_use]
    pub fn is_independent(&self) -> bool {
        self.independent.unwrap_or(false)
    }

    /// Text for the flag image's `alt` attribute.
    #[must_use]
    pub fn flag_alt(&self) -> String {
        format!("Flag of {}", self.name.common)
    }
}
