// tests/support/mocks/persistence.rs
use async_trait::async_trait;
use blog_admin::domain::{
    errors::{DomainError, DomainResult},
    post::BlogPost,
    profile::{IdentityName, NewProfile, Profile, ProfileId, ProfileUpdate},
    unit_of_work::{UnitOfWork, UnitOfWorkFactory},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct StoreState {
    profiles: Vec<Profile>,
    posts: Vec<BlogPost>,
    next_id: i64,
    slug_lookups: Vec<String>,
    adds: usize,
    updates: usize,
    commits: usize,
    unavailable: bool,
}

/// Shared backing state for [`InMemoryUnitOfWorkFactory`]. Clones see the
/// same data so tests can inspect it after a workflow ran.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = state.next_id.max(profile.id.0);
            state.profiles.push(profile);
        }
        self
    }

    pub fn with_post(self, post: BlogPost) -> Self {
        self.state.lock().unwrap().posts.push(post);
        self
    }

    /// Every `begin` fails as if the database were down.
    pub fn unavailable(self) -> Self {
        self.state.lock().unwrap().unavailable = true;
        self
    }

    pub fn factory(&self) -> InMemoryUnitOfWorkFactory {
        InMemoryUnitOfWorkFactory {
            store: self.clone(),
        }
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.state.lock().unwrap().profiles.clone()
    }

    pub fn profile_by_identity(&self, name: &str) -> Option<Profile> {
        self.profiles()
            .into_iter()
            .find(|p| p.identity_name.as_str() == name)
    }

    pub fn slug_lookups(&self) -> Vec<String> {
        self.state.lock().unwrap().slug_lookups.clone()
    }

    pub fn adds(&self) -> usize {
        self.state.lock().unwrap().adds
    }

    pub fn updates(&self) -> usize {
        self.state.lock().unwrap().updates
    }

    pub fn commits(&self) -> usize {
        self.state.lock().unwrap().commits
    }

    fn find(&self, pred: impl Fn(&Profile) -> bool) -> Option<Profile> {
        self.state
            .lock()
            .unwrap()
            .profiles
            .iter()
            .find(|p| pred(p))
            .cloned()
    }
}

#[derive(Clone, Debug)]
pub struct InMemoryUnitOfWorkFactory {
    store: InMemoryStore,
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        if self.store.state.lock().unwrap().unavailable {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(Box::new(InMemoryUnitOfWork {
            store: self.store.clone(),
            staged: Vec::new(),
        }))
    }
}

#[derive(Debug)]
enum Staged {
    Add(NewProfile),
    Update(ProfileUpdate),
}

/// Writes stay staged until `commit`; dropping the unit discards them.
struct InMemoryUnitOfWork {
    store: InMemoryStore,
    staged: Vec<Staged>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn profile_by_id(&mut self, id: ProfileId) -> DomainResult<Option<Profile>> {
        Ok(self.store.find(|p| p.id == id))
    }

    async fn profile_by_identity_name(
        &mut self,
        identity: &IdentityName,
    ) -> DomainResult<Option<Profile>> {
        Ok(self.store.find(|p| &p.identity_name == identity))
    }

    async fn profile_by_slug(&mut self, slug: &str) -> DomainResult<Option<Profile>> {
        self.store
            .state
            .lock()
            .unwrap()
            .slug_lookups
            .push(slug.to_string());
        Ok(self.store.find(|p| p.slug.as_str() == slug))
    }

    async fn add_profile(&mut self, profile: NewProfile) -> DomainResult<()> {
        self.store.state.lock().unwrap().adds += 1;
        self.staged.push(Staged::Add(profile));
        Ok(())
    }

    async fn update_profile(&mut self, update: ProfileUpdate) -> DomainResult<()> {
        if self.store.find(|p| p.id == update.id).is_none() {
            return Err(DomainError::NotFound(format!("profile {} not found", update.id)));
        }
        self.store.state.lock().unwrap().updates += 1;
        self.staged.push(Staged::Update(update));
        Ok(())
    }

    async fn posts_for_profile(&mut self, id: ProfileId) -> DomainResult<Vec<BlogPost>> {
        let state = self.store.state.lock().unwrap();
        let mut posts: Vec<BlogPost> = state
            .posts
            .iter()
            .filter(|post| post.profile_id == id)
            .cloned()
            .collect();
        posts.sort_by_key(|post| post.id.0);
        Ok(posts)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let InMemoryUnitOfWork { store, staged } = *self;
        let mut state = store.state.lock().unwrap();
        for change in staged {
            match change {
                Staged::Add(new) => {
                    if state.profiles.iter().any(|p| p.slug == new.slug) {
                        return Err(DomainError::Conflict("slug already exists".into()));
                    }
                    if state
                        .profiles
                        .iter()
                        .any(|p| p.identity_name == new.identity_name)
                    {
                        return Err(DomainError::Conflict(
                            "identity already has a profile".into(),
                        ));
                    }
                    state.next_id += 1;
                    let profile = Profile {
                        id: ProfileId::new(state.next_id)?,
                        title: new.title,
                        description: new.description,
                        slug: new.slug,
                        author_name: new.author_name,
                        author_email: new.author_email,
                        identity_name: new.identity_name,
                        blog_theme: new.blog_theme,
                        admin_theme: new.admin_theme,
                        last_updated: new.last_updated,
                    };
                    state.profiles.push(profile);
                }
                Staged::Update(update) => {
                    let stored = state
                        .profiles
                        .iter_mut()
                        .find(|p| p.id == update.id)
                        .ok_or_else(|| DomainError::NotFound(format!("profile {}", update.id)))?;
                    stored.blog_theme = update.blog_theme;
                    stored.admin_theme = update.admin_theme;
                    stored.last_updated = update.last_updated;
                }
            }
        }
        state.commits += 1;
        Ok(())
    }
}
