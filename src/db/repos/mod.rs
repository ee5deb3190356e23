pub mod comment;
pub mod issue;
pub mod label;
pub mod milestone;
pub mod user;
