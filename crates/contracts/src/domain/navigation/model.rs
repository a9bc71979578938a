use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;

/// Menu entry of the public site. Entries form a tree through the boxed
/// `parent` reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sequence: Option<i32>,
    pub route: Option<String>,
    pub title: Option<String>,
    pub bread_crumb: Option<String>,
    pub parent: Option<Box<Navigation>>,
}

impl EntityModel for Navigation {
    const RESOURCE: &'static str = "navigations";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
