pub mod account;
pub mod department;
pub mod email;
pub mod password;
pub mod position;
pub mod register;
pub mod request;
pub mod reset;
pub mod token;
