//! Data models for the academic-scheduling API.
//!
//! These are transport DTOs mirroring the backend's JSON wire format:
//!
//! - `Faculty`: an academic faculty with audit fields
//! - `StudyProgram`: a study program belonging to a faculty
//! - `StudentSchedule`: a scheduled class meeting with course and room info
//! - `Response<T>`: the generic `data` envelope around every payload

pub mod faculty;
pub mod response;
pub mod schedule;
pub mod study_program;

pub use faculty::{Faculty, FacultyPage};
pub use response::{ErrorResponse, MessageResponse, Response};
pub use schedule::{StudentSchedule, StudentSchedulePage, SyncRequest, SyncStrategy};
pub use study_program::{StudyProgram, StudyProgramPage};
