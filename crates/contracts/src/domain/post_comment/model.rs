use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;
use crate::enums::CommentType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub commented_by: Option<String>,
    pub comment: Option<String>,
    pub comment_type: Option<CommentType>,
    pub commented_on: Option<DateTime<Utc>>,
}

impl EntityModel for PostComment {
    const RESOURCE: &'static str = "post-comments";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
