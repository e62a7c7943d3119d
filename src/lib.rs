//! Client library for the academic-scheduling REST API.
//!
//! Provides a typed `ApiClient` over the backend's JSON endpoints
//! (faculties, study programs, student schedules), the response models,
//! and the loader used to pre-fetch the initial study-program listing.

pub mod api;
pub mod config;
pub mod loader;
pub mod models;

pub use api::{ApiClient, ApiError, ListQuery, SortDir};
pub use config::Config;
