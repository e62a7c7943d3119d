use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub created_by: String,
    pub modified_at: String,
    pub modified_by: String,
}

/// Payload of `GET /v1/faculties`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyPage {
    pub faculties: Vec<Faculty>,
    pub total_data: i64,
    pub total_page: i64,
}
