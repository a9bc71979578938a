use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;

/// Administrative division, the first-level geographic unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    /// Name rendered in Bangla script
    pub bn_name: Option<String>,
    pub url: Option<String>,
}

impl EntityModel for Division {
    const RESOURCE: &'static str = "divisions";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
