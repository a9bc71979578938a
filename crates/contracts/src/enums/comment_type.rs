use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Moderation state of a post comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    Pending,
    Approved,
    Rejected,
}

impl CommentType {
    pub fn code(&self) -> &'static str {
        match self {
            CommentType::Pending => "PENDING",
            CommentType::Approved => "APPROVED",
            CommentType::Rejected => "REJECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CommentType::Pending => "Pending",
            CommentType::Approved => "Approved",
            CommentType::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<CommentType> {
        vec![
            CommentType::Pending,
            CommentType::Approved,
            CommentType::Rejected,
        ]
    }
}

impl FromStr for CommentType {
    type Err = anyhow::Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "PENDING" => Ok(CommentType::Pending),
            "APPROVED" => Ok(CommentType::Approved),
            "REJECTED" => Ok(CommentType::Rejected),
            other => anyhow::bail!("unknown comment type: {other}"),
        }
    }
}
