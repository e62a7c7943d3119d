use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSchedule {
    pub id: String,
    pub class_code: String,
    pub course_code: String,
    pub course_name: String,
    pub credits: i32,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub room_number: String,
    pub semester: String,
    pub lecturer_name: String,
    pub study_program_id: i64,
    /// Denormalized from the study-program record for display
    pub study_program_name: String,
    pub created_at: String,
    pub created_by: String,
    pub modified_at: String,
    pub modified_by: String,
}

/// Payload of `GET /v1/student-schedules`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSchedulePage {
    pub student_schedules: Vec<StudentSchedule>,
    pub total_data: i64,
    pub total_page: i64,
}

/// How the backend reconciles incoming schedule rows during a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStrategy {
    /// Drop all existing rows and load the incoming set
    ReplaceAll,
    /// Insert new rows and update existing ones in place
    Upsert,
}

/// Body of `POST /v1/student-schedules/sync`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    pub strategy: SyncStrategy,
}
