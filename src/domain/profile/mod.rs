pub mod entity;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewProfile, Profile, ProfileDraft, ProfileUpdate};
pub use services::{ProfileSlugService, SlugLookup, SuffixPolicy, resolve_unique_slug, truncate_slug};
pub use specifications::ProfileConstraints;
pub use value_objects::{IdentityName, ProfileId, ProfileSlug};
