use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub sort_name: Option<String>,
    pub grade: Option<i32>,
}

impl EntityModel for Designation {
    const RESOURCE: &'static str = "designations";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
