// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        profiles::{SaveProfileCommand, SaveProfileOutcome},
        syndication::{ImportFeedCommand, ImportFeedOutcome},
    },
    dto::{AdminPageDto, ProfilePageDto},
    queries::admin::DashboardOutcome,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DASHBOARD_PATH: &str = "/admin";
pub const PROFILE_PATH: &str = "/admin/profile";
pub const SYNDICATION_PATH: &str = "/admin/syndication";
pub const ABOUT_PATH: &str = "/admin/about";

/// Profile form. `id` is 0 (or absent) when creating the profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveProfileRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
    #[serde(default)]
    pub blog_theme: Option<String>,
    #[serde(default)]
    pub admin_theme: Option<String>,
}

impl From<SaveProfileRequest> for SaveProfileCommand {
    fn from(request: SaveProfileRequest) -> Self {
        Self {
            id: request.id,
            title: request.title,
            description: request.description,
            author_name: request.author_name,
            author_email: request.author_email,
            blog_theme: request.blog_theme,
            admin_theme: request.admin_theme,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportFeedRequest {
    pub feed_url: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub sub_domain: Option<String>,
    #[serde(default)]
    pub import_images: bool,
    #[serde(default)]
    pub import_attachments: bool,
}

impl From<ImportFeedRequest> for ImportFeedCommand {
    fn from(request: ImportFeedRequest) -> Self {
        Self {
            feed_url: request.feed_url,
            domain: request.domain,
            sub_domain: request.sub_domain,
            import_images: request.import_images,
            import_attachments: request.import_attachments,
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Dashboard of the caller's blog.", body = crate::application::dto::DashboardDto),
        (status = 303, description = "No profile yet; redirects to /admin/profile."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .admin_queries
        .dashboard(&user)
        .await
        .into_http()?;

    Ok(match outcome {
        DashboardOutcome::Ready(page) => Json(page).into_response(),
        DashboardOutcome::NoProfile => Redirect::to(PROFILE_PATH).into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/admin/profile",
    responses(
        (status = 200, description = "Profile form with theme choices.", body = ProfilePageDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn profile_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfilePageDto>> {
    state
        .services
        .admin_queries
        .profile_page(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/profile",
    request_body = SaveProfileRequest,
    responses(
        (status = 200, description = "Profile saved; the stored profile page.", body = ProfilePageDto),
        (status = 303, description = "Submission invalid; nothing saved, redirects to /admin."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Profile owned by another identity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Profile not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Identity already has a profile or slug taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn save_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SaveProfileRequest>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .profile_commands
        .save_profile(&user, payload.into())
        .await
        .into_http()?;

    Ok(match outcome {
        SaveProfileOutcome::Saved(page) => Json(page).into_response(),
        SaveProfileOutcome::Invalid(_) => Redirect::to(DASHBOARD_PATH).into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/admin/syndication",
    responses(
        (status = 200, description = "Syndication page.", body = AdminPageDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn syndication_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AdminPageDto>> {
    state
        .services
        .admin_queries
        .syndication_page(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/syndication",
    request_body = ImportFeedRequest,
    responses(
        (status = 303, description = "Import accepted (to /admin) or no profile yet (to /admin/profile)."),
        (status = 400, description = "Submission invalid; per-field messages.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn import_feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ImportFeedRequest>,
) -> HttpResult<Redirect> {
    let outcome = state
        .services
        .syndication_commands
        .import_feed(&user, payload.into(), &state.public_base_url)
        .await
        .into_http()?;

    match outcome {
        ImportFeedOutcome::Imported => Ok(Redirect::to(DASHBOARD_PATH)),
        ImportFeedOutcome::NoProfile => Ok(Redirect::to(PROFILE_PATH)),
        ImportFeedOutcome::Invalid(errors) => Err(HttpError::validation(errors)),
    }
}

#[utoipa::path(
    get,
    path = "/admin/about",
    responses(
        (status = 200, description = "About page.", body = AdminPageDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn about_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AdminPageDto>> {
    state
        .services
        .admin_queries
        .about_page(&user)
        .await
        .into_http()
        .map(Json)
}
