// src/domain/unit_of_work.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::BlogPost;
use crate::domain::profile::{IdentityName, NewProfile, Profile, ProfileId, ProfileUpdate};
use async_trait::async_trait;

/// One transactional persistence session.
///
/// Writes become visible to other sessions only after [`UnitOfWork::commit`].
/// Dropping a unit of work without committing discards its writes.
#[async_trait]
pub trait UnitOfWork: Send {
    async fn profile_by_id(&mut self, id: ProfileId) -> DomainResult<Option<Profile>>;
    async fn profile_by_identity_name(
        &mut self,
        identity: &IdentityName,
    ) -> DomainResult<Option<Profile>>;
    async fn profile_by_slug(&mut self, slug: &str) -> DomainResult<Option<Profile>>;
    async fn add_profile(&mut self, profile: NewProfile) -> DomainResult<()>;
    async fn update_profile(&mut self, update: ProfileUpdate) -> DomainResult<()>;
    async fn posts_for_profile(&mut self, id: ProfileId) -> DomainResult<Vec<BlogPost>>;
    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

/// Opens a fresh [`UnitOfWork`] per request.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
