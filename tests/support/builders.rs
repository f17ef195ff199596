// tests/support/builders.rs
use super::mocks::fixed_now;
use blog_admin::domain::{
    post::{BlogPost, PostId},
    profile::{IdentityName, Profile, ProfileId, ProfileSlug},
};

/// Builds a stored profile with valid defaults.
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    pub fn new(id: i64, identity: &str) -> Self {
        Self {
            profile: Profile {
                id: ProfileId::new(id).unwrap(),
                title: "Stored Title".into(),
                description: "Stored description".into(),
                slug: ProfileSlug::new(format!("blog-{id}")).unwrap(),
                author_name: "Stored Author".into(),
                author_email: "stored@example.com".into(),
                identity_name: IdentityName::new(identity).unwrap(),
                blog_theme: None,
                admin_theme: None,
                last_updated: fixed_now() - chrono::Duration::days(30),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.profile.title = title.into();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.profile.slug = ProfileSlug::new(slug).unwrap();
        self
    }

    pub fn themes(mut self, blog: &str, admin: &str) -> Self {
        self.profile.blog_theme = Some(blog.into());
        self.profile.admin_theme = Some(admin.into());
        self
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}

pub fn post(id: i64, profile_id: i64, title: &str, published: bool) -> BlogPost {
    BlogPost {
        id: PostId::new(id).unwrap(),
        profile_id: ProfileId::new(profile_id).unwrap(),
        title: title.into(),
        slug: title.to_lowercase().replace(' ', "-"),
        published_at: published.then(fixed_now),
        last_updated: fixed_now(),
    }
}
