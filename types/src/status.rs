//! Flight status codes established by oracle consensus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of a flight, as agreed by oracle consensus.
///
/// The numeric codes are the canonical wire values carried in oracle
/// responses; they are spaced in tens so intermediate codes can be added
/// without renumbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    /// No consensus reached yet.
    Unknown,
    /// The flight departed on time.
    OnTime,
    /// Late due to the airline. The only status that triggers payouts.
    LateAirline,
    /// Late due to weather.
    LateWeather,
    /// Late due to a technical problem.
    LateTechnical,
    /// Late for any other reason.
    LateOther,
}

impl FlightStatus {
    /// The canonical wire code for this status.
    pub fn code(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::OnTime => 10,
            Self::LateAirline => 20,
            Self::LateWeather => 30,
            Self::LateTechnical => 40,
            Self::LateOther => 50,
        }
    }

    /// Parse a wire code. Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            10 => Some(Self::OnTime),
            20 => Some(Self::LateAirline),
            30 => Some(Self::LateWeather),
            40 => Some(Self::LateTechnical),
            50 => Some(Self::LateOther),
            _ => None,
        }
    }

    /// Whether this status represents any kind of delay.
    pub fn is_late(&self) -> bool {
        matches!(
            self,
            Self::LateAirline | Self::LateWeather | Self::LateTechnical | Self::LateOther
        )
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::OnTime => "on-time",
            Self::LateAirline => "late-airline",
            Self::LateWeather => "late-weather",
            Self::LateTechnical => "late-technical",
            Self::LateOther => "late-other",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for status in [
            FlightStatus::Unknown,
            FlightStatus::OnTime,
            FlightStatus::LateAirline,
            FlightStatus::LateWeather,
            FlightStatus::LateTechnical,
            FlightStatus::LateOther,
        ] {
            assert_eq!(FlightStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(FlightStatus::from_code(15), None);
        assert_eq!(FlightStatus::from_code(255), None);
    }

    #[test]
    fn only_late_statuses_are_late() {
        assert!(!FlightStatus::Unknown.is_late());
        assert!(!FlightStatus::OnTime.is_late());
        assert!(FlightStatus::LateAirline.is_late());
        assert!(FlightStatus::LateOther.is_late());
    }
}
