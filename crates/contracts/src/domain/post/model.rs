use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::center::Center;
use crate::domain::common::EntityModel;
use crate::domain::employee::Employee;

/// Blog post. `post_date` is date-only; `published_on` is a full instant.
/// `publish` decodes to `false` when the wire value is absent, so unsaved
/// drafts stay drafts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub post_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub publish: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub center: Option<Center>,
    pub employee: Option<Employee>,
}

impl EntityModel for Post {
    const RESOURCE: &'static str = "posts";

    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_publish_defaults_to_false() {
        assert!(!Post::default().publish);

        let decoded: Post = serde_json::from_str(r#"{"id": "p-1", "title": "hello"}"#).unwrap();
        assert!(!decoded.publish);
    }

    #[test]
    fn test_instant_fields_round_trip_at_second_precision() {
        let post = Post {
            published_on: Some(Utc.with_ymd_and_hms(2021, 9, 12, 8, 30, 0).unwrap()),
            ..Post::default()
        };
        let wire = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&wire).unwrap();
        assert_eq!(back.published_on, post.published_on);
    }

    #[test]
    fn test_transient_post_serializes_without_id_member() {
        let wire = serde_json::to_value(Post::default()).unwrap();
        assert!(wire.get("id").is_none());
    }
}
