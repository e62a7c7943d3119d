use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyProgram {
    pub id: i64,
    pub name: String,
    pub faculty_id: i64,
    /// Denormalized from the faculty record for display
    pub faculty_name: String,
    pub created_at: String,
    pub created_by: String,
    pub modified_at: String,
    pub modified_by: String,
}

/// Payload of `GET /v1/study-programs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyProgramPage {
    pub study_programs: Vec<StudyProgram>,
    pub total_data: i64,
    pub total_page: i64,
}
