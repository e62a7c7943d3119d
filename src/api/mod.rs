//! REST API client module for the academic-scheduling backend.
//!
//! This module provides the `ApiClient` for fetching faculty, study-program,
//! and student-schedule data over HTTP with JSON bodies and optional bearer
//! token authentication.

pub mod client;
pub mod error;

pub use client::{ApiClient, ListQuery, SortDir};
pub use error::ApiError;
