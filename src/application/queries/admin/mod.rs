// src/application/queries/admin/mod.rs
mod dashboard;
mod pages;
mod service;

pub use dashboard::DashboardOutcome;
pub use service::AdminQueryService;
