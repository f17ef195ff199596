use crate::domain::errors::DomainError;

const CNT_PROFILE_SLUG: &str = "profiles_slug_key";
const CNT_PROFILE_IDENTITY: &str = "profiles_identity_name_key";
const CNT_POST_PROFILE: &str = "blog_posts_profile_id_fkey";
const CNT_IMPORT_PROFILE: &str = "syndication_imports_profile_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "22001" => {
                        return DomainError::Validation("value too long for column".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_PROFILE_SLUG => DomainError::Conflict("slug already exists".into()),
        CNT_PROFILE_IDENTITY => {
            DomainError::Conflict("a profile already exists for this identity".into())
        }
        CNT_POST_PROFILE | CNT_IMPORT_PROFILE => DomainError::NotFound("profile not found".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
