// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_unit_of_work;

pub(crate) use error::map_sqlx;
pub use postgres_unit_of_work::{PostgresUnitOfWork, PostgresUnitOfWorkFactory};
