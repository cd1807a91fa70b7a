//! German federal states (Bundesländer).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use mdb_core::ValueObject;

use crate::error::ZipCodeError;

/// One of the 16 German federal states.
///
/// Serialized as its two-letter code (`"BY"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    #[serde(rename = "BY")]
    Bayern,
    #[serde(rename = "BE")]
    Berlin,
    #[serde(rename = "BB")]
    Brandenburg,
    #[serde(rename = "HB")]
    Bremen,
    #[serde(rename = "HH")]
    Hamburg,
    #[serde(rename = "HE")]
    Hessen,
    #[serde(rename = "MV")]
    MecklenburgVorpommern,
    #[serde(rename = "NI")]
    Niedersachsen,
    #[serde(rename = "NW")]
    NordrheinWestfalen,
    #[serde(rename = "RP")]
    RheinlandPfalz,
    #[serde(rename = "SL")]
    Saarland,
    #[serde(rename = "SN")]
    Sachsen,
    #[serde(rename = "ST")]
    SachsenAnhalt,
    #[serde(rename = "SH")]
    SchleswigHolstein,
    #[serde(rename = "TH")]
    Thueringen,
}

impl ValueObject for State {}

impl State {
    pub const ALL: [State; 16] = [
        State::BadenWuerttemberg,
        State::Bayern,
        State::Berlin,
        State::Brandenburg,
        State::Bremen,
        State::Hamburg,
        State::Hessen,
        State::MecklenburgVorpommern,
        State::Niedersachsen,
        State::NordrheinWestfalen,
        State::RheinlandPfalz,
        State::Saarland,
        State::Sachsen,
        State::SachsenAnhalt,
        State::SchleswigHolstein,
        State::Thueringen,
    ];

    /// Two-letter code, e.g. `"NW"`.
    pub const fn code(self) -> &'static str {
        match self {
            State::BadenWuerttemberg => "BW",
            State::Bayern => "BY",
            State::Berlin => "BE",
            State::Brandenburg => "BB",
            State::Bremen => "HB",
            State::Hamburg => "HH",
            State::Hessen => "HE",
            State::MecklenburgVorpommern => "MV",
            State::Niedersachsen => "NI",
            State::NordrheinWestfalen => "NW",
            State::RheinlandPfalz => "RP",
            State::Saarland => "SL",
            State::Sachsen => "SN",
            State::SachsenAnhalt => "ST",
            State::SchleswigHolstein => "SH",
            State::Thueringen => "TH",
        }
    }

    /// German display name, e.g. `"Nordrhein-Westfalen"`.
    pub const fn name(self) -> &'static str {
        match self {
            State::BadenWuerttemberg => "Baden-Württemberg",
            State::Bayern => "Bayern",
            State::Berlin => "Berlin",
            State::Brandenburg => "Brandenburg",
            State::Bremen => "Bremen",
            State::Hamburg => "Hamburg",
            State::Hessen => "Hessen",
            State::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            State::Niedersachsen => "Niedersachsen",
            State::NordrheinWestfalen => "Nordrhein-Westfalen",
            State::RheinlandPfalz => "Rheinland-Pfalz",
            State::Saarland => "Saarland",
            State::Sachsen => "Sachsen",
            State::SachsenAnhalt => "Sachsen-Anhalt",
            State::SchleswigHolstein => "Schleswig-Holstein",
            State::Thueringen => "Thüringen",
        }
    }

    /// Full ISO 3166-2 subdivision code, e.g. `"DE-BY"`.
    pub fn iso3166(self) -> String {
        format!("DE-{}", self.code())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either the two-letter code or the display name.
impl FromStr for State {
    type Err = ZipCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.code() == s || state.name() == s)
            .or_else(|| {
                State::ALL
                    .into_iter()
                    .find(|state| state.code().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| ZipCodeError::InvalidState(s.to_string()))
    }
}
