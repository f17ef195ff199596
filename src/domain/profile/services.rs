// src/domain/profile/services.rs
use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::profile::specifications::SLUG_MAX;
use crate::domain::unit_of_work::UnitOfWork;

/// Answers whether a slug is already claimed by some profile.
#[async_trait]
pub trait SlugLookup: Send {
    async fn slug_taken(&mut self, slug: &str) -> DomainResult<bool>;
}

#[async_trait]
impl<U> SlugLookup for U
where
    U: UnitOfWork + ?Sized,
{
    async fn slug_taken(&mut self, slug: &str) -> DomainResult<bool> {
        Ok(self.profile_by_slug(slug).await?.is_some())
    }
}

/// Numeric suffixes tried when a base slug collides.
///
/// The search is bounded. Once every suffix in `range` is taken the resolver
/// gives back the colliding base slug and leaves rejection to the storage
/// uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixPolicy {
    range: Range<u32>,
}

impl SuffixPolicy {
    pub const fn new(first: u32, end: u32) -> Self {
        Self { range: first..end }
    }

    pub fn suffixes(&self) -> Range<u32> {
        self.range.clone()
    }

    /// Characters the widest suffix adds to a base slug.
    pub fn max_suffix_len(&self) -> usize {
        self.range.clone().last().map_or(0, |n| n.to_string().len())
    }
}

/// Shortens `slug` to at most `max` characters, cutting at the last `-`
/// when that keeps whole words.
pub fn truncate_slug(slug: &str, max: usize) -> String {
    let mut chars = slug.chars();
    let head: String = chars.by_ref().take(max).collect();
    match chars.next() {
        None | Some('-') => head.trim_end_matches('-').to_string(),
        Some(_) => match head.rfind('-') {
            Some(idx) if idx > 0 => head[..idx].trim_end_matches('-').to_string(),
            _ => head,
        },
    }
}

impl Default for SuffixPolicy {
    fn default() -> Self {
        Self::new(2, 100)
    }
}

/// Returns `base` when it is free, otherwise the first free `base{n}` for `n`
/// in the policy range, and `base` again when the range is exhausted.
pub async fn resolve_unique_slug<L>(
    lookup: &mut L,
    base: &str,
    policy: &SuffixPolicy,
) -> DomainResult<String>
where
    L: SlugLookup + ?Sized,
{
    if !lookup.slug_taken(base).await? {
        return Ok(base.to_string());
    }

    for suffix in policy.suffixes() {
        let candidate = format!("{base}{suffix}");
        if !lookup.slug_taken(&candidate).await? {
            return Ok(candidate);
        }
    }

    tracing::warn!(
        slug = base,
        first = policy.range.start,
        end = policy.range.end,
        "slug suffix range exhausted, keeping colliding base slug"
    );
    Ok(base.to_string())
}

/// Domain service producing unique profile slugs from titles.
pub struct ProfileSlugService {
    generator: Arc<dyn SlugGenerator>,
    policy: SuffixPolicy,
}

impl ProfileSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self::with_policy(generator, SuffixPolicy::default())
    }

    pub fn with_policy(generator: Arc<dyn SlugGenerator>, policy: SuffixPolicy) -> Self {
        Self { generator, policy }
    }

    pub fn slugify(&self, title: &str) -> String {
        self.generator.slugify(title)
    }

    /// The base slug is shortened so that any suffixed candidate still fits
    /// `SLUG_MAX`. An empty slug is not looked up; validation rejects it later.
    pub async fn generate_unique_slug<L>(&self, lookup: &mut L, title: &str) -> DomainResult<String>
    where
        L: SlugLookup + ?Sized,
    {
        let limit = SLUG_MAX.saturating_sub(self.policy.max_suffix_len());
        let base = truncate_slug(&self.slugify(title), limit);
        if base.is_empty() {
            return Ok(base);
        }
        resolve_unique_slug(lookup, &base, &self.policy).await
    }
}
