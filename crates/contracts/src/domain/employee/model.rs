use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;
use crate::domain::designation::Designation;

/// Employee of the organization; the photo travels inline as base64 next to
/// its content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub bn_full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub photo_content_type: Option<String>,
    pub photo: Option<String>,
    pub designation: Option<Designation>,
}

impl EntityModel for Employee {
    const RESOURCE: &'static str = "employees";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
