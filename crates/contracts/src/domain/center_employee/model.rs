use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;
use crate::domain::designation::Designation;
use crate::enums::DutyType;

/// Assignment of an employee to a center. Joining/release dates are
/// date-only values (`YYYY-MM-DD` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub duty_type: Option<DutyType>,
    pub joining_date: Option<NaiveDate>,
    pub release_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub designation: Option<Designation>,
}

impl EntityModel for CenterEmployee {
    const RESOURCE: &'static str = "center-employees";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_fields_use_iso_date_wire_format() {
        let assignment = CenterEmployee {
            joining_date: NaiveDate::from_ymd_opt(2021, 7, 1),
            ..CenterEmployee::default()
        };
        let wire = serde_json::to_value(&assignment).unwrap();
        assert_eq!(wire["joiningDate"], serde_json::json!("2021-07-01"));

        let back: CenterEmployee = serde_json::from_value(wire).unwrap();
        assert_eq!(back.joining_date, assignment.joining_date);
    }
}
