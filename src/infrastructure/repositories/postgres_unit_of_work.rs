// src/infrastructure/repositories/postgres_unit_of_work.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{BlogPost, PostId};
use crate::domain::profile::{
    IdentityName, NewProfile, Profile, ProfileId, ProfileSlug, ProfileUpdate,
};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

const PROFILE_COLUMNS: &str = "id, title, description, slug, author_name, author_email, \
     identity_name, blog_theme, admin_theme, last_updated";

#[derive(Clone)]
pub struct PostgresUnitOfWorkFactory {
    pool: PgPool,
}

impl PostgresUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PostgresUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresUnitOfWork { tx }))
    }
}

/// A unit of work backed by one database transaction. Dropping it without
/// calling `commit` rolls the transaction back.
pub struct PostgresUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    title: String,
    description: String,
    slug: String,
    author_name: String,
    author_email: String,
    identity_name: String,
    blog_theme: Option<String>,
    admin_theme: Option<String>,
    last_updated: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: ProfileId::new(row.id)?,
            title: row.title,
            description: row.description,
            slug: ProfileSlug::new(row.slug)?,
            author_name: row.author_name,
            author_email: row.author_email,
            identity_name: IdentityName::new(row.identity_name)?,
            blog_theme: row.blog_theme,
            admin_theme: row.admin_theme,
            last_updated: row.last_updated,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    profile_id: i64,
    title: String,
    slug: String,
    published_at: Option<DateTime<Utc>>,
    last_updated: DateTime<Utc>,
}

impl TryFrom<PostRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            id: PostId::new(row.id)?,
            profile_id: ProfileId::new(row.profile_id)?,
            title: row.title,
            slug: row.slug,
            published_at: row.published_at,
            last_updated: row.last_updated,
        })
    }
}

impl PostgresUnitOfWork {
    async fn fetch_profile(
        &mut self,
        filter: &str,
        bind: ProfileFilter<'_>,
    ) -> DomainResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE {filter} = $1");
        let query = sqlx::query_as::<_, ProfileRow>(&sql);
        let query = match bind {
            ProfileFilter::Id(id) => query.bind(id),
            ProfileFilter::Text(value) => query.bind(value),
        };

        let row = query
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        row.map(Profile::try_from).transpose()
    }
}

enum ProfileFilter<'a> {
    Id(i64),
    Text(&'a str),
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    async fn profile_by_id(&mut self, id: ProfileId) -> DomainResult<Option<Profile>> {
        self.fetch_profile("id", ProfileFilter::Id(id.into())).await
    }

    async fn profile_by_identity_name(
        &mut self,
        identity: &IdentityName,
    ) -> DomainResult<Option<Profile>> {
        self.fetch_profile("identity_name", ProfileFilter::Text(identity.as_str()))
            .await
    }

    async fn profile_by_slug(&mut self, slug: &str) -> DomainResult<Option<Profile>> {
        self.fetch_profile("slug", ProfileFilter::Text(slug)).await
    }

    async fn add_profile(&mut self, profile: NewProfile) -> DomainResult<()> {
        let NewProfile {
            title,
            description,
            slug,
            author_name,
            author_email,
            identity_name,
            blog_theme,
            admin_theme,
            last_updated,
        } = profile;

        sqlx::query(
            "INSERT INTO profiles (title, description, slug, author_name, author_email, identity_name, blog_theme, admin_theme, last_updated)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(title)
        .bind(description)
        .bind(String::from(slug))
        .bind(author_name)
        .bind(author_email)
        .bind(String::from(identity_name))
        .bind(blog_theme)
        .bind(admin_theme)
        .bind(last_updated)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn update_profile(&mut self, update: ProfileUpdate) -> DomainResult<()> {
        let ProfileUpdate {
            id,
            blog_theme,
            admin_theme,
            last_updated,
        } = update;

        let result = sqlx::query(
            "UPDATE profiles SET blog_theme = $1, admin_theme = $2, last_updated = $3 WHERE id = $4",
        )
        .bind(blog_theme)
        .bind(admin_theme)
        .bind(last_updated)
        .bind(i64::from(id))
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("profile {id} not found")));
        }
        Ok(())
    }

    async fn posts_for_profile(&mut self, id: ProfileId) -> DomainResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, profile_id, title, slug, published_at, last_updated
             FROM blog_posts WHERE profile_id = $1 ORDER BY id",
        )
        .bind(i64::from(id))
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(BlogPost::try_from).collect()
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let PostgresUnitOfWork { tx } = *self;
        tx.commit().await.map_err(map_sqlx)
    }
}
