//! US state vocabulary for the business-profile step of the quiz
//!
//! State hiring programs are keyed by [`State`]. Codes that do not parse are
//! treated as "no state selected" by callers, never as an error.

use serde::{Deserialize, Serialize};

/// US state codes (plus DC) accepted by the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

const ALL_STATES: [State; 51] = [
    State::AL,
    State::AK,
    State::AZ,
    State::AR,
    State::CA,
    State::CO,
    State::CT,
    State::DE,
    State::DC,
    State::FL,
    State::GA,
    State::HI,
    State::ID,
    State::IL,
    State::IN,
    State::IA,
    State::KS,
    State::KY,
    State::LA,
    State::ME,
    State::MD,
    State::MA,
    State::MI,
    State::MN,
    State::MS,
    State::MO,
    State::MT,
    State::NE,
    State::NV,
    State::NH,
    State::NJ,
    State::NM,
    State::NY,
    State::NC,
    State::ND,
    State::OH,
    State::OK,
    State::OR,
    State::PA,
    State::RI,
    State::SC,
    State::SD,
    State::TN,
    State::TX,
    State::UT,
    State::VT,
    State::VA,
    State::WA,
    State::WV,
    State::WI,
    State::WY,
];

impl State {
    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            State::AL => "Alabama",
            State::AK => "Alaska",
            State::AZ => "Arizona",
            State::AR => "Arkansas",
            State::CA => "California",
            State::CO => "Colorado",
            State::CT => "Connecticut",
            State::DE => "Delaware",
            State::DC => "District of Columbia",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::ME => "Maine",
            State::MD => "Maryland",
            State::MA => "Massachusetts",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MS => "Mississippi",
            State::MO => "Missouri",
            State::MT => "Montana",
            State::NE => "Nebraska",
            State::NV => "Nevada",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NM => "New Mexico",
            State::NY => "New York",
            State::NC => "North Carolina",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::OK => "Oklahoma",
            State::OR => "Oregon",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::SC => "South Carolina",
            State::SD => "South Dakota",
            State::TN => "Tennessee",
            State::TX => "Texas",
            State::UT => "Utah",
            State::VT => "Vermont",
            State::VA => "Virginia",
            State::WA => "Washington",
            State::WV => "West Virginia",
            State::WI => "Wisconsin",
            State::WY => "Wyoming",
        }
    }

    /// Two-letter postal code
    pub fn code(&self) -> &'static str {
        match self {
            State::AL => "AL",
            State::AK => "AK",
            State::AZ => "AZ",
            State::AR => "AR",
            State::CA => "CA",
            State::CO => "CO",
            State::CT => "CT",
            State::DE => "DE",
            State::DC => "DC",
            State::FL => "FL",
            State::GA => "GA",
            State::HI => "HI",
            State::ID => "ID",
            State::IL => "IL",
            State::IN => "IN",
            State::IA => "IA",
            State::KS => "KS",
            State::KY => "KY",
            State::LA => "LA",
            State::ME => "ME",
            State::MD => "MD",
            State::MA => "MA",
            State::MI => "MI",
            State::MN => "MN",
            State::MS => "MS",
            State::MO => "MO",
            State::MT => "MT",
            State::NE => "NE",
            State::NV => "NV",
            State::NH => "NH",
            State::NJ => "NJ",
            State::NM => "NM",
            State::NY => "NY",
            State::NC => "NC",
            State::ND => "ND",
            State::OH => "OH",
            State::OK => "OK",
            State::OR => "OR",
            State::PA => "PA",
            State::RI => "RI",
            State::SC => "SC",
            State::SD => "SD",
            State::TN => "TN",
            State::TX => "TX",
            State::UT => "UT",
            State::VT => "VT",
            State::VA => "VA",
            State::WA => "WA",
            State::WV => "WV",
            State::WI => "WI",
            State::WY => "WY",
        }
    }

    /// Parse from state code or full name (case-insensitive, surrounding
    /// whitespace ignored)
    pub fn parse_code(s: &str) -> Option<Self> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return None;
        }
        ALL_STATES.iter().copied().find(|state| {
            state.code().eq_ignore_ascii_case(wanted) || state.name().eq_ignore_ascii_case(wanted)
        })
    }

    /// Every state in alphabetical order of name, the order the quiz's state
    /// picker shows them
    pub fn all() -> &'static [State] {
        &ALL_STATES
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parsing() {
        assert_eq!(State::parse_code("CA"), Some(State::CA));
        assert_eq!(State::parse_code("ca"), Some(State::CA));
        assert_eq!(State::parse_code("california"), Some(State::CA));
        assert_eq!(State::parse_code(" New York "), Some(State::NY));
        assert_eq!(State::parse_code("dc"), Some(State::DC));
    }

    #[test]
    fn test_unknown_codes_parse_to_none() {
        assert_eq!(State::parse_code(""), None);
        assert_eq!(State::parse_code("XX"), None);
        assert_eq!(State::parse_code("Calif"), None);
    }

    #[test]
    fn test_every_state_round_trips_through_its_code() {
        assert_eq!(State::all().len(), 51);
        for state in State::all() {
            assert_eq!(State::parse_code(state.code()), Some(*state));
            assert_eq!(State::parse_code(state.name()), Some(*state));
            assert_eq!(state.to_string(), state.code());
        }
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&State::GA).unwrap();
        assert_eq!(json, "\"GA\"");
        let parsed: State = serde_json::from_str("\"TX\"").unwrap();
        assert_eq!(parsed, State::TX);
    }
}
