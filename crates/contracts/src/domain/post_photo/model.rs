use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityModel;
use crate::domain::employee::Employee;
use crate::domain::post::Post;

/// Photo attached to a post, ordered by `sequence` within the post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPhoto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sequence: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_content_type: Option<String>,
    pub image: Option<String>,
    pub uploaded_on: Option<DateTime<Utc>>,
    pub post: Option<Post>,
    pub uploaded_by: Option<Employee>,
}

impl EntityModel for PostPhoto {
    const RESOURCE: &'static str = "post-photos";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
