use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;
use crate::domain::district::District;
use crate::domain::division::Division;
use crate::domain::upazila::Upazila;

/// Education center with its geographic placement and a cover image held
/// inline as base64.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub address_line: Option<String>,
    pub image_content_type: Option<String>,
    pub image: Option<String>,
    pub division: Option<Division>,
    pub district: Option<District>,
    pub upazila: Option<Upazila>,
}

impl EntityModel for Center {
    const RESOURCE: &'static str = "centers";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
