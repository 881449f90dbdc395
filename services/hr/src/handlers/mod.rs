pub mod account;
pub mod auth;
pub mod department;
pub mod position;
pub mod request;

use serde::Serialize;

/// Confirmation body for flows that return no resource.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
