use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Duty type of a center employee assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyType {
    Main,
    Additional,
}

impl DutyType {
    /// Wire code of the duty type
    pub fn code(&self) -> &'static str {
        match self {
            DutyType::Main => "MAIN",
            DutyType::Additional => "ADDITIONAL",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            DutyType::Main => "Main",
            DutyType::Additional => "Additional",
        }
    }

    pub fn all() -> Vec<DutyType> {
        vec![DutyType::Main, DutyType::Additional]
    }
}

impl FromStr for DutyType {
    type Err = anyhow::Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "MAIN" => Ok(DutyType::Main),
            "ADDITIONAL" => Ok(DutyType::Additional),
            other => anyhow::bail!("unknown duty type: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_code_round_trip() {
        for duty_type in DutyType::all() {
            assert_eq!(duty_type.code().parse::<DutyType>().unwrap(), duty_type);
        }
    }

    #[test]
    fn test_serializes_as_screaming_case() {
        assert_eq!(
            serde_json::to_string(&DutyType::Additional).unwrap(),
            "\"ADDITIONAL\""
        );
    }
}
