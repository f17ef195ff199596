use crate::domain::post::BlogPost;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogPostDto {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub slug: String,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.into(),
            profile_id: post.profile_id.into(),
            published: post.is_published(),
            title: post.title,
            slug: post.slug,
            published_at: post.published_at,
            last_updated: post.last_updated,
        }
    }
}
