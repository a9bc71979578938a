use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;

/// Upazila (sub-district) under a district.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upazila {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub district_id: Option<String>,
    pub name: Option<String>,
    pub bn_name: Option<String>,
    pub url: Option<String>,
}

impl EntityModel for Upazila {
    const RESOURCE: &'static str = "upazilas";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
