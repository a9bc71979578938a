use serde::{Deserialize, Serialize};

use crate::domain::center::Center;
use crate::domain::common::EntityModel;

/// Gallery image of a center. `show` decodes to `false` when absent so a
/// fresh image never leaks into the public gallery by accident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_content_type: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub show: bool,
    pub center: Option<Center>,
}

impl EntityModel for CenterImage {
    const RESOURCE: &'static str = "center-images";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
