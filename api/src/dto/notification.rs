use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub message: String,
    pub count: u64,
}

impl MarkReadResponse {
    pub fn new(count: u64) -> Self {
        Self {
            message: format!("{} notifications marked as read.", count),
            count,
        }
    }
}
