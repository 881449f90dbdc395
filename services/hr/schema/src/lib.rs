//! sea-orm entities for the HR service database.

pub mod accounts;
pub mod departments;
pub mod positions;
pub mod refresh_tokens;
