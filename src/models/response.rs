use serde::{Deserialize, Serialize};

/// Generic response envelope: the backend wraps every payload in a
/// `data` object. List totals (`total_data`, `total_page`) are carried
/// flat inside the payload itself, so there is no separate paging block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: Option<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
