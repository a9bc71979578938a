use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;

/// District under a division. The division is referenced by raw id rather
/// than an embedded entity, matching the persisted shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub division_id: Option<String>,
    pub name: Option<String>,
    pub bn_name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub url: Option<String>,
}

impl EntityModel for District {
    const RESOURCE: &'static str = "districts";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
