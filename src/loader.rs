//! Initial page data loading.
//!
//! The study-programs page renders with a pre-fetched first page of rows.
//! A fetch failure degrades to an empty listing rather than an error page,
//! so a downed backend never blocks the render.

use tracing::error;

use crate::api::{ApiClient, ListQuery, SortDir};
use crate::models::StudyProgram;

/// Number of study programs fetched for the initial page render
const INITIAL_PAGE_SIZE: u32 = 10;

/// Fetch the first page of study programs, sorted by id ascending.
/// Returns an empty list on any failure; the error is logged.
pub async fn load_initial_study_programs(client: &ApiClient) -> Vec<StudyProgram> {
    let query = ListQuery {
        limit: Some(INITIAL_PAGE_SIZE),
        sort_by: Some("id".to_string()),
        sort_dir: Some(SortDir::Asc),
        ..Default::default()
    };

    match client.list_study_programs(&query).await {
        Ok(response) => response
            .data
            .map(|page| page.study_programs)
            .unwrap_or_default(),
        Err(err) => {
            error!(error = %err, "failed to load initial study programs");
            Vec::new()
        }
    }
}
